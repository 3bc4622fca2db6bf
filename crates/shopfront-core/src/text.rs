//! Text normalization for case/format-insensitive matching
//!
//! Every text comparison in the matching predicate goes through
//! [`normalize`]: lower-case, then delete all whitespace and hyphen
//! characters. This makes "BDU Military Uniform" match a query of
//! "bdu-military uniform" or "BDUMILITARYUNIFORM".

/// Normalize text for comparison: lowercase and strip whitespace/hyphen runs.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Parse a 1-based page number from an optional query value.
///
/// Absent, non-numeric, or zero values fall back to page 1. Out-of-range
/// pages are deliberately not clamped here; the pagination UI is responsible
/// for never requesting one.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}
