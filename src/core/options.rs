use super::config::PROGRAM_STRICT_MODE;
use super::util::parse_boolish;

/// Construction options shared by `FileInfo` and `AudioFileInfo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoOptions {
    /// Turn reportable failures (attribute fetch, signature mismatch, media probe)
    /// into `Err` instead of a logged warning.
    pub strict: bool,
}

impl InfoOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Reads `MTINFO_STRICT`; unset or unparseable means best-effort.
    pub fn from_env() -> Self {
        let strict = std::env::var(PROGRAM_STRICT_MODE)
            .ok()
            .and_then(|s| parse_boolish(&s))
            .unwrap_or(false);

        Self { strict }
    }
}
