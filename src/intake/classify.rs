//! Keyword-rule classification
//!
//! Two ordered trigger tables resolve a normalized query to a technician
//! trade. The primary table short-circuits the statistical classifier
//! entirely (a "keyword boost"); the secondary table is the last-resort
//! sweep used when neither the boost nor the issue-hint lookup resolved a
//! trade. Both are configuration data: new trades and triggers are
//! additive rows, not code changes.

use crate::models::{Category, Trade};

/// Category assigned whenever a trade keyword matches
pub const MAINTENANCE_DEPARTMENT: Category = Category::Hostel;

/// Primary trade → trigger-substring table, scanned in order.
static KEYWORD_BOOST: &[(Trade, &[&str])] = &[
    (
        Trade::Electrician,
        &["fan", "light", "switch", "socket", "ac", "air conditioner", "charger", "plug"],
    ),
    (
        Trade::Plumber,
        &["leak", "water", "tap", "flush", "pipe", "drain", "burst"],
    ),
    (
        Trade::Carpenter,
        &["door", "bed", "cupboard", "window", "table", "hinge"],
    ),
    (Trade::Painter, &["paint", "wall", "colour", "color", "peel"]),
];

/// Secondary auto-role table used as the final fallback. Deliberately
/// narrower than the boost table and with no painter row.
static AUTO_ROLE: &[(Trade, &[&str])] = &[
    (
        Trade::Electrician,
        &["fan", "light", "switch", "ac", "air conditioner", "tube", "socket"],
    ),
    (
        Trade::Plumber,
        &["leak", "tap", "flush", "water", "pipe", "drain", "washroom"],
    ),
    (
        Trade::Carpenter,
        &["door", "bed", "table", "window", "cupboard", "wood"],
    ),
];

fn first_trade_match(table: &[(Trade, &[&str])], query: &str) -> Option<Trade> {
    for (trade, triggers) in table {
        for trigger in *triggers {
            if query.contains(trigger) {
                return Some(trade.clone());
            }
        }
    }
    None
}

/// Rule tier 1: if any trigger substring appears in the query, the
/// category is fixed to the maintenance department and the matching trade
/// is returned. First trade in table order wins.
pub fn keyword_boost(query: &str) -> Option<(Category, Trade)> {
    first_trade_match(KEYWORD_BOOST, query).map(|trade| (MAINTENANCE_DEPARTMENT, trade))
}

/// Rule tier 3b: last-resort role sweep, only consulted for maintenance
/// department queries that resolved no trade any other way.
pub fn auto_role(query: &str) -> Option<Trade> {
    first_trade_match(AUTO_ROLE, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_matches_trade() {
        assert_eq!(
            keyword_boost("fan not working"),
            Some((Category::Hostel, Trade::Electrician))
        );
        assert_eq!(
            keyword_boost("water leak near stairs"),
            Some((Category::Hostel, Trade::Plumber))
        );
        assert_eq!(
            keyword_boost("paint peeling off"),
            Some((Category::Hostel, Trade::Painter))
        );
    }

    #[test]
    fn test_boost_is_substring_based() {
        // "switch" matches inside "switchboard"
        assert_eq!(
            keyword_boost("switchboard sparks"),
            Some((Category::Hostel, Trade::Electrician))
        );
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // "light" (electrician) appears before "water" (plumber) in table
        // order, so electrician wins regardless of word positions.
        assert_eq!(
            keyword_boost("water dripping on light"),
            Some((Category::Hostel, Trade::Electrician))
        );
    }

    #[test]
    fn test_no_trigger_no_boost() {
        assert_eq!(keyword_boost("lost my id card"), None);
    }

    #[test]
    fn test_auto_role_has_no_painter() {
        assert_eq!(auto_role("peeling colour on the ceiling"), None);
        assert_eq!(auto_role("wood shavings everywhere"), Some(Trade::Carpenter));
        assert_eq!(auto_role("washroom flooded"), Some(Trade::Plumber));
    }

    #[test]
    fn test_auto_role_tube_is_electrician() {
        assert_eq!(auto_role("tube flickering"), Some(Trade::Electrician));
    }
}
