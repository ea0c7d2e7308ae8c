//! Technician selection
//!
//! Pure load-balancing decision over a technician snapshot. The caller
//! reads the snapshot and applies the resulting increment; nothing here
//! mutates state.

use crate::models::{RequestStatus, TechStatus, Technician};

/// How the selection ladder resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A free technician covers the student's stated hour
    Matched,
    /// A free technician exists but none covers the stated hour (or no
    /// hour was stated at all)
    NoTimeMatch,
    /// No free technician of the trade exists
    NoTechnician,
}

impl SelectionOutcome {
    /// Initial request status recorded for this outcome
    pub fn as_status(&self) -> RequestStatus {
        match self {
            SelectionOutcome::Matched => RequestStatus::Matched,
            SelectionOutcome::NoTimeMatch => RequestStatus::NoTimeMatch,
            SelectionOutcome::NoTechnician => RequestStatus::NoTechnician,
        }
    }
}

/// Result of a selection pass
#[derive(Debug, Clone)]
pub struct Selection {
    pub technician: Option<String>,
    pub start_time: Option<i16>,
    pub end_time: Option<i16>,
    /// Hour the assignment was made for: the student's stated hour when it
    /// fit a window, otherwise the chosen technician's window start
    pub assigned_hour: Option<i16>,
    pub outcome: SelectionOutcome,
}

impl Selection {
    pub fn no_technician() -> Self {
        Selection {
            technician: None,
            start_time: None,
            end_time: None,
            assigned_hour: None,
            outcome: SelectionOutcome::NoTechnician,
        }
    }
}

/// Lowest-load free technician satisfying `accept` on the window.
/// Stable scan: ties keep the first candidate encountered, records with a
/// missing or inverted window are skipped.
fn lowest_load_free<'a, F>(candidates: &'a [Technician], accept: F) -> Option<&'a Technician>
where
    F: Fn(i16, i16) -> bool,
{
    let mut best: Option<&Technician> = None;
    for tech in candidates {
        let Some((start, end)) = tech.window() else {
            continue;
        };
        if tech.status != TechStatus::Free || !accept(start, end) {
            continue;
        }
        if best.map_or(true, |b| tech.current_load < b.current_load) {
            best = Some(tech);
        }
    }
    best
}

/// Pick a technician for a trade, given the candidate snapshot in store
/// order and the student's desired hour, if any.
///
/// Ladder: a stated hour inside a free technician's window yields
/// `matched` (lowest load wins, assigned hour = the stated hour); failing
/// that, any free technician yields `no_time_match` with their window
/// start as the assigned hour; no free technician yields `no_technician`.
pub fn select_technician(candidates: &[Technician], desired_hour: Option<i16>) -> Selection {
    if let Some(hour) = desired_hour {
        if let Some(tech) = lowest_load_free(candidates, |start, end| start <= hour && hour <= end)
        {
            return Selection {
                technician: Some(tech.name.clone()),
                start_time: tech.start_time,
                end_time: tech.end_time,
                assigned_hour: Some(hour),
                outcome: SelectionOutcome::Matched,
            };
        }
    }

    if let Some(tech) = lowest_load_free(candidates, |_, _| true) {
        return Selection {
            technician: Some(tech.name.clone()),
            start_time: tech.start_time,
            end_time: tech.end_time,
            assigned_hour: tech.start_time,
            outcome: SelectionOutcome::NoTimeMatch,
        };
    }

    Selection::no_technician()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Trade;

    fn tech(name: &str, load: i32, start: i16, end: i16, status: TechStatus) -> Technician {
        Technician {
            name: name.to_string(),
            role: Trade::Plumber,
            start_time: Some(start),
            end_time: Some(end),
            current_load: load,
            status,
            password: None,
        }
    }

    #[test]
    fn test_lowest_load_wins_within_window() {
        let candidates = vec![
            tech("A", 2, 9, 17, TechStatus::Free),
            tech("B", 0, 9, 17, TechStatus::Free),
        ];
        let sel = select_technician(&candidates, Some(11));
        assert_eq!(sel.technician.as_deref(), Some("B"));
        assert_eq!(sel.outcome, SelectionOutcome::Matched);
        assert_eq!(sel.assigned_hour, Some(11));
    }

    #[test]
    fn test_out_of_window_falls_back_to_lowest_load() {
        let candidates = vec![
            tech("A", 2, 9, 17, TechStatus::Free),
            tech("B", 0, 9, 17, TechStatus::Free),
        ];
        let sel = select_technician(&candidates, Some(20));
        assert_eq!(sel.technician.as_deref(), Some("B"));
        assert_eq!(sel.outcome, SelectionOutcome::NoTimeMatch);
        // Fallback assigns the technician's window start
        assert_eq!(sel.assigned_hour, Some(9));
    }

    #[test]
    fn test_no_stated_hour_is_a_time_mismatch() {
        let candidates = vec![tech("A", 0, 9, 18, TechStatus::Free)];
        let sel = select_technician(&candidates, None);
        assert_eq!(sel.technician.as_deref(), Some("A"));
        assert_eq!(sel.outcome, SelectionOutcome::NoTimeMatch);
        assert_eq!(sel.assigned_hour, Some(9));
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let candidates = vec![
            tech("A", 1, 9, 17, TechStatus::Free),
            tech("B", 1, 9, 17, TechStatus::Free),
        ];
        let sel = select_technician(&candidates, Some(10));
        assert_eq!(sel.technician.as_deref(), Some("A"));
    }

    #[test]
    fn test_busy_technicians_never_selected() {
        let candidates = vec![
            tech("A", 1, 9, 17, TechStatus::Busy),
            tech("B", 3, 9, 17, TechStatus::Free),
        ];
        let sel = select_technician(&candidates, Some(10));
        assert_eq!(sel.technician.as_deref(), Some("B"));

        let all_busy = vec![tech("A", 1, 9, 17, TechStatus::Busy)];
        let sel = select_technician(&all_busy, Some(10));
        assert_eq!(sel.outcome, SelectionOutcome::NoTechnician);
        assert!(sel.technician.is_none());
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let candidates = vec![tech("A", 0, 9, 17, TechStatus::Free)];
        assert_eq!(
            select_technician(&candidates, Some(9)).outcome,
            SelectionOutcome::Matched
        );
        assert_eq!(
            select_technician(&candidates, Some(17)).outcome,
            SelectionOutcome::Matched
        );
        assert_eq!(
            select_technician(&candidates, Some(18)).outcome,
            SelectionOutcome::NoTimeMatch
        );
    }

    #[test]
    fn test_malformed_records_skipped() {
        let mut inverted = tech("A", 0, 18, 9, TechStatus::Free);
        inverted.start_time = Some(18);
        inverted.end_time = Some(9);
        let mut missing = tech("B", 0, 0, 0, TechStatus::Free);
        missing.start_time = None;
        let ok = tech("C", 5, 9, 17, TechStatus::Free);
        let candidates = vec![inverted, missing, ok];
        let sel = select_technician(&candidates, Some(10));
        assert_eq!(sel.technician.as_deref(), Some("C"));
    }

    #[test]
    fn test_empty_snapshot() {
        let sel = select_technician(&[], Some(10));
        assert_eq!(sel.outcome, SelectionOutcome::NoTechnician);
        let sel = select_technician(&[], None);
        assert_eq!(sel.outcome, SelectionOutcome::NoTechnician);
    }
}
