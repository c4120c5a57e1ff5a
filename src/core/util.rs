//! core/util.rs
//! Small parsing helpers shared by configuration and tag reading.

/// Parse common "boolean-ish" values.
/// Accepts: "1", "0", "true", "false", "yes", "no", "y", "n"
pub(crate) fn parse_boolish(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Parse a trimmed, non-empty unsigned number (e.g. the ID3 `TLEN` milliseconds).
pub(crate) fn parse_trimmed_u64(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<u64>().ok()
}
