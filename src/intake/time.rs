//! Time-of-day extraction from informal query text

use once_cell::sync::Lazy;
use regex::Regex;

static AM_PM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s?(am|pm)").expect("hardcoded regex"));
static AFTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"after (\d{1,2})").expect("hardcoded regex"));
static AROUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"around (\d{1,2})").expect("hardcoded regex"));

/// Informal day-part keywords, checked in order after the numeric rules.
static DAY_PARTS: &[(&str, i16)] = &[
    ("morning", 10),
    ("afternoon", 14),
    ("evening", 18),
    ("night", 20),
];

/// Extract an hour-of-day from normalized query text.
///
/// Rules apply in priority order and are mutually exclusive: an am/pm
/// time wins over `after N` / `around N`, which win over day-part
/// keywords. `after`/`around` numbers are taken as-is; hours a student
/// invents outside 0-23 simply never fit a technician window.
pub fn extract_hour(text: &str) -> Option<i16> {
    if let Some(caps) = AM_PM.captures(text) {
        let mut hour: i16 = caps[1].parse().ok()?;
        match &caps[2] {
            "pm" if hour != 12 => hour += 12,
            "am" if hour == 12 => hour = 0,
            _ => {}
        }
        return Some(hour);
    }
    if let Some(caps) = AFTER.captures(text) {
        return caps[1].parse().ok();
    }
    if let Some(caps) = AROUND.captures(text) {
        return caps[1].parse().ok();
    }
    for (word, hour) in DAY_PARTS {
        if text.contains(word) {
            return Some(*hour);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_am_pm() {
        assert_eq!(extract_hour("fix ac at 5pm"), Some(17));
        assert_eq!(extract_hour("come at 9 am"), Some(9));
        assert_eq!(extract_hour("12pm sharp"), Some(12));
        assert_eq!(extract_hour("free at 12am"), Some(0));
    }

    #[test]
    fn test_am_pm_beats_day_part() {
        // "fix ac at 5pm in the evening" — numeric rule wins
        assert_eq!(extract_hour("fix it at 5pm in the evening"), Some(17));
    }

    #[test]
    fn test_after_and_around() {
        assert_eq!(extract_hour("come after 15"), Some(15));
        assert_eq!(extract_hour("free around 9"), Some(9));
        // No am/pm adjustment for these forms
        assert_eq!(extract_hour("after 5 please"), Some(5));
    }

    #[test]
    fn test_day_parts() {
        assert_eq!(extract_hour("free in the morning"), Some(10));
        assert_eq!(extract_hour("afternoon works"), Some(14));
        assert_eq!(extract_hour("free in the evening"), Some(18));
        assert_eq!(extract_hour("at night only"), Some(20));
    }

    #[test]
    fn test_day_part_order() {
        // "morning" is checked before "night"
        assert_eq!(extract_hour("morning or night"), Some(10));
    }

    #[test]
    fn test_no_time_phrase() {
        assert_eq!(extract_hour("fan not working please fix"), None);
        assert_eq!(extract_hour(""), None);
    }
}
