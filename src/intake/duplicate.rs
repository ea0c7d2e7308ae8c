//! Duplicate request detection
//!
//! Compares a new query against the recent request window by word-set
//! overlap. Advisory only: the submission pipeline reports a duplicate
//! but never blocks on one.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::MaintenanceRequest;

/// Scan `recent` (most-recent-first, already bounded to the configured
/// window) for a request whose word set overlaps the new query's by more
/// than `threshold`. The ratio denominator is the candidate's word count,
/// so a short old query matched whole flags even when the new query says
/// more. First hit wins.
pub fn find_duplicate(
    query: &str,
    recent: &[MaintenanceRequest],
    threshold: f64,
) -> Option<Uuid> {
    let new_words: HashSet<&str> = query.split_whitespace().collect();
    for candidate in recent {
        let old_words: HashSet<&str> = candidate.query.split_whitespace().collect();
        if old_words.is_empty() {
            continue;
        }
        let overlap = new_words.intersection(&old_words).count() as f64
            / old_words.len().max(1) as f64;
        if overlap > threshold {
            return Some(candidate.request_id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RequestStatus};

    fn request(query: &str) -> MaintenanceRequest {
        MaintenanceRequest {
            request_id: Uuid::new_v4(),
            student_id: "101".to_string(),
            query: query.to_string(),
            category: Category::Hostel,
            technician: None,
            start_time: None,
            end_time: None,
            assigned_time: None,
            student_free_time: None,
            status: RequestStatus::Pending,
        }
    }

    #[test]
    fn test_near_identical_queries_flag() {
        let recent = vec![request("fan not working in room")];
        let hit = find_duplicate("fan not working in my room", &recent, 0.6);
        assert_eq!(hit, Some(recent[0].request_id));
    }

    #[test]
    fn test_unrelated_queries_never_flag() {
        let recent = vec![request("fan not working in room")];
        assert_eq!(find_duplicate("library book lost", &recent, 0.6), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 3 of 5 candidate words shared = 0.6 exactly, not a duplicate
        let recent = vec![request("fan not working in room")];
        assert_eq!(
            find_duplicate("fan not working elsewhere maybe", &recent, 0.6),
            None
        );
    }

    #[test]
    fn test_first_match_wins() {
        let recent = vec![
            request("water leak in bathroom"),
            request("water leak in bathroom again"),
        ];
        let hit = find_duplicate("water leak in bathroom", &recent, 0.6);
        assert_eq!(hit, Some(recent[0].request_id));
    }

    #[test]
    fn test_empty_candidate_skipped() {
        let recent = vec![request(""), request("door broken")];
        let hit = find_duplicate("door broken", &recent, 0.6);
        assert_eq!(hit, Some(recent[1].request_id));
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(find_duplicate("anything", &[], 0.6), None);
    }

    #[test]
    fn test_word_sets_not_multisets() {
        // Repeated words count once on both sides
        let recent = vec![request("leak leak leak pipe")];
        let hit = find_duplicate("leak pipe", &recent, 0.6);
        assert_eq!(hit, Some(recent[0].request_id));
    }
}
