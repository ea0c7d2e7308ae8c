//! Request intake engine
//!
//! The decision core of the helpdesk: text normalization, duplicate
//! detection, time-of-day extraction, category/trade classification and
//! technician selection. Every function here is pure and deterministic;
//! the load ledger mutations live in the repository layer.

pub mod classify;
pub mod duplicate;
pub mod normalize;
pub mod select;
pub mod time;

pub use classify::{auto_role, keyword_boost, MAINTENANCE_DEPARTMENT};
pub use duplicate::find_duplicate;
pub use normalize::normalize;
pub use select::{select_technician, Selection, SelectionOutcome};
pub use time::extract_hour;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TechStatus, Technician, Trade};

    fn electrician(name: &str, load: i32) -> Technician {
        Technician {
            name: name.to_string(),
            role: Trade::Electrician,
            start_time: Some(9),
            end_time: Some(18),
            current_load: load,
            status: if load == 0 { TechStatus::Free } else { TechStatus::Busy },
            password: None,
        }
    }

    #[test]
    fn test_pipeline_garbled_fan_complaint() {
        let query = normalize("fan not wokring plz fix pls");
        assert_eq!(query, "fan not working please fix please");

        let (category, trade) = keyword_boost(&query).expect("fan should boost");
        assert_eq!(category, Category::Hostel);
        assert_eq!(trade, Trade::Electrician);

        // No time phrase, so the window tier is skipped entirely
        let hour = extract_hour(&query);
        assert_eq!(hour, None);

        let roster = vec![electrician("Ramesh", 0)];
        let selection = select_technician(&roster, hour);
        assert_eq!(selection.technician.as_deref(), Some("Ramesh"));
        assert_eq!(selection.outcome, SelectionOutcome::NoTimeMatch);
    }

    #[test]
    fn test_pipeline_evening_keyword_enables_matching() {
        let query = normalize("fan not wokring, free in the evening");
        let hour = extract_hour(&query);
        assert_eq!(hour, Some(18));

        let roster = vec![electrician("Ramesh", 0)];
        let selection = select_technician(&roster, hour);
        assert_eq!(selection.outcome, SelectionOutcome::Matched);
        assert_eq!(selection.assigned_hour, Some(18));
    }
}
