//! core/media/mod.rs
//!
//! Media metadata providers.
//! Public API:
//! - [`MediaProvider`]: the seam `AudioFileInfo` reads tags and duration through.
//! - [`Id3MediaProvider`]: the default, `id3` for tags + `symphonia` for duration.
//! - [`CoverArt`]: decoded artwork.

mod art;
mod duration;
mod read;

use std::fmt;
use std::path::Path;

use log::debug;

use super::error::{InfoError, Result};
use super::types::{MediaTime, MetadataGroup};

pub use art::CoverArt;

pub trait MediaProvider: fmt::Debug + Send + Sync {
    /// Every metadata group of the asset, items in provider order.
    fn metadata_groups(&self, path: &Path) -> Result<Vec<MetadataGroup>>;

    /// Total duration in native units. Called fresh on every request.
    fn duration(&self, path: &Path) -> Result<MediaTime>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Id3MediaProvider;

impl MediaProvider for Id3MediaProvider {
    fn metadata_groups(&self, path: &Path) -> Result<Vec<MetadataGroup>> {
        read::read_groups(path)
    }

    /// Stream frame count first; the `TLEN` frame only when the stream has none.
    fn duration(&self, path: &Path) -> Result<MediaTime> {
        let probed = duration::probe_duration(path);

        match probed {
            Ok(Some(t)) => return Ok(t),
            Ok(None) => debug!("[media] no frame count for {:?}, trying TLEN", path),
            Err(ref e) => debug!("[media] probe failed for {:?}: {e}, trying TLEN", path),
        }

        if let Some(t) = read::tlen_duration(path) {
            return Ok(t);
        }

        match probed {
            Err(e) => Err(e),
            Ok(_) => Err(InfoError::NoDuration {
                path: path.to_path_buf(),
            }),
        }
    }
}
