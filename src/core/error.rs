use std::io;
use std::path::PathBuf;

/// Failures surfaced by the strict constructors and the re-fetching accessors.
///
/// The best-effort constructors never return these; they log them and keep defaults.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    #[error("attribute fetch failed for {path:?}: {source}")]
    AttributeFetch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not an mp3 (bad or missing ID signature): {path:?}")]
    SignatureMismatch { path: PathBuf },
    #[error("read failed for {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("media provider failed for {path:?}: {message}")]
    Media { path: PathBuf, message: String },
    #[error("no usable duration for {path:?}")]
    NoDuration { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, InfoError>;
