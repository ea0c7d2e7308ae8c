//! Query text normalization
//!
//! Lowercases the query and rewrites the slang and misspellings students
//! actually type. Replacement is raw substring replacement applied in
//! table order: later rules see earlier rules' output and matches occur
//! inside words. No rule's output may re-trigger an earlier rule, so a
//! normalized string normalizes to itself.

/// Ordered correction table. The two phrase rules sit last because the
/// single-word rules can produce the text they match on.
static CORRECTIONS: &[(&str, &str)] = &[
    ("wokring", "working"),
    ("wrkng", "working"),
    ("woking", "working"),
    ("wokr", "work"),
    ("plz", "please"),
    ("pls", "please"),
    ("ac", "air conditioner"),
    ("a.c", "air conditioner"),
    ("eletrician", "electrician"),
    ("electrican", "electrician"),
    ("leek", "leak"),
    ("lakage", "leakage"),
    ("watet", "water"),
    ("bathrom", "bathroom"),
    ("hstl", "hostel"),
    ("clg", "college"),
    ("urgnt", "urgent"),
    ("not wrking", "not working"),
    ("nt working", "not working"),
];

/// Normalize a raw query string: lowercase, trim, apply the correction
/// table in order, then collapse internal whitespace to single spaces.
/// Empty input normalizes to an empty string.
pub fn normalize(text: &str) -> String {
    let mut text = text.trim().to_lowercase();
    for (wrong, right) in CORRECTIONS {
        if text.contains(wrong) {
            text = text.replace(wrong, right);
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
