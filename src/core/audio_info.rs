//! core/audio_info.rs
//! MP3 record: a `FileInfo` plus tag fields.
//!
//! - Base fields always come from `FileInfo` first
//! - Tags are only read when the file starts with the `ID` signature
//! - Items are applied in provider order, so a later item overwrites an earlier one
//! - `duration_seconds()` asks the provider every time; nothing is cached

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, trace, warn};

use super::attributes::{AttributeProvider, FsAttributeProvider};
use super::config::{ARTWORK_DATA_KEY, ARTWORK_MIME_KEY, MP3_SIGNATURE};
use super::error::{InfoError, Result};
use super::file_info::{FileInfo, display_opt};
use super::media::{CoverArt, Id3MediaProvider, MediaProvider};
use super::options::InfoOptions;
use super::types::{CommonKey, MetadataGroup, MetadataItem, MetadataValue};

#[derive(Debug, Clone)]
pub struct AudioFileInfo {
    file: FileInfo,
    artist: Option<String>,
    title: Option<String>,
    album: Option<String>,
    cover_art: Option<CoverArt>,
    media: Arc<dyn MediaProvider>,
}

impl AudioFileInfo {
    /// Best-effort construction with the default providers. Never fails.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let file = FileInfo::new(path);
        let mut info = Self::bare(file, Arc::new(Id3MediaProvider));
        // Best-effort: every failure below is logged and leaves fields unset.
        let _ = info.read_tags(&InfoOptions::default());
        info
    }

    pub fn with_options(path: impl Into<PathBuf>, options: &InfoOptions) -> Result<Self> {
        Self::with_providers(
            path,
            &FsAttributeProvider,
            Arc::new(Id3MediaProvider),
            options,
        )
    }

    pub fn with_providers(
        path: impl Into<PathBuf>,
        attributes: &dyn AttributeProvider,
        media: Arc<dyn MediaProvider>,
        options: &InfoOptions,
    ) -> Result<Self> {
        let file = FileInfo::with_provider(path, attributes, options)?;
        let mut info = Self::bare(file, media);
        info.read_tags(options)?;
        Ok(info)
    }

    fn bare(file: FileInfo, media: Arc<dyn MediaProvider>) -> Self {
        Self {
            file,
            artist: None,
            title: None,
            album: None,
            cover_art: None,
            media,
        }
    }

    /// Signature check, then tag scan. Errors only escape in strict mode.
    fn read_tags(&mut self, options: &InfoOptions) -> Result<()> {
        if !is_valid_mp3(self.file.path()) {
            warn!("[audio_info] not an mp3: {:?}", self.file.path());
            if options.strict {
                return Err(InfoError::SignatureMismatch {
                    path: self.file.path().to_path_buf(),
                });
            }
            return Ok(());
        }

        match self.media.metadata_groups(self.file.path()) {
            Ok(groups) => {
                self.apply_groups(groups);
                Ok(())
            }
            Err(e) => {
                warn!("[audio_info] tag read failed for {:?}: {e}", self.file.path());
                if options.strict { Err(e) } else { Ok(()) }
            }
        }
    }

    fn apply_groups(&mut self, groups: Vec<MetadataGroup>) {
        for group in groups {
            debug!(
                "[audio_info] {} items in {} for {:?}",
                group.items.len(),
                group.format,
                self.file.path()
            );
            for item in group.items {
                self.apply_item(item);
            }
        }
    }

    fn apply_item(&mut self, item: MetadataItem) {
        let Some(key) = &item.common_key else {
            return;
        };

        let slot = match key {
            CommonKey::AlbumName => &mut self.album,
            CommonKey::Artist => &mut self.artist,
            CommonKey::Title => &mut self.title,
            CommonKey::Artwork => {
                match artwork_from_value(&item.value) {
                    Some(art) => self.cover_art = Some(art),
                    None => trace!("[audio_info] skipping artwork item {}", item.identifier),
                }
                return;
            }
            CommonKey::Other(_) => return,
        };

        match item.value.as_text() {
            Some(s) => *slot = Some(s.to_owned()),
            None => trace!("[audio_info] skipping non-text item {}", item.identifier),
        }
    }

    pub fn file(&self) -> &FileInfo {
        &self.file
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn cover_art(&self) -> Option<&CoverArt> {
        self.cover_art.as_ref()
    }

    /// Whole seconds (truncated), recomputed from the media provider on every call.
    /// The file must still exist at `path()`.
    pub fn duration_seconds(&self) -> Result<u64> {
        let time = self.media.duration(self.file.path())?;

        time.whole_seconds().ok_or_else(|| InfoError::NoDuration {
            path: self.file.path().to_path_buf(),
        })
    }
}

impl Deref for AudioFileInfo {
    type Target = FileInfo;

    fn deref(&self) -> &FileInfo {
        &self.file
    }
}

/// The artwork value must be a map whose `data` entry is a decodable image.
fn artwork_from_value(value: &MetadataValue) -> Option<CoverArt> {
    let container = value.as_map()?;
    let data = container.get(ARTWORK_DATA_KEY)?.as_data()?;
    let mime_type = container
        .get(ARTWORK_MIME_KEY)
        .and_then(MetadataValue::as_text)
        .map(str::to_owned);

    CoverArt::decode(data.to_vec(), mime_type)
}

/// True iff the first two bytes are `ID`. Unreadable or short files are not MP3s.
pub fn is_valid_mp3(path: &Path) -> bool {
    let mut prefix = [0u8; 2];

    let read = File::open(path).and_then(|mut f| f.read_exact(&mut prefix));
    match read {
        Ok(()) => prefix == MP3_SIGNATURE,
        Err(e) => {
            debug!("[audio_info] signature read failed for {:?}: {e}", path);
            false
        }
    }
}

impl fmt::Display for AudioFileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file)?;
        writeln!(f, "title: {}", display_opt(self.title()))?;
        writeln!(f, "artist: {}", display_opt(self.artist()))?;
        writeln!(f, "album: {}", display_opt(self.album()))?;
        writeln!(
            f,
            "cover art: {}",
            display_opt(self.cover_art.as_ref().map(|art| {
                let (w, h) = art.dimensions();
                format!("{w}x{h} {}", art.mime_type().unwrap_or("unknown"))
            }))
        )?;
        writeln!(f, "duration: {}", display_opt(self.duration_seconds().ok()))
    }
}

#[cfg(test)]
#[path = "audio_info_tests.rs"]
mod tests;
