//! mtinfo
//!
//! File metadata plus MP3 tag metadata for one path at a time.
//!
//! - [`FileInfo`]: name, dates, size, ownership, permission flags for any path
//! - [`AudioFileInfo`]: a `FileInfo` plus artist/title/album/cover art/duration,
//!   filled only when the file starts with the `ID` signature
//!
//! Construction is best-effort: failures are logged through `log` and show up as
//! absent or default fields. Pass `InfoOptions::strict()` to get them as `Err`.

pub mod core;
pub mod logging;

pub use crate::core::attributes::{AttributeProvider, FsAttributeProvider};
pub use crate::core::audio_info::{AudioFileInfo, is_valid_mp3};
pub use crate::core::error::{InfoError, Result};
pub use crate::core::file_info::FileInfo;
pub use crate::core::media::{CoverArt, Id3MediaProvider, MediaProvider};
pub use crate::core::options::InfoOptions;
pub use crate::core::permissions::Permissions;
pub use crate::core::types::{
    AttrKey, AttrValue, CommonKey, MediaTime, MetadataGroup, MetadataItem, MetadataValue,
};
pub use crate::core::{Inspected, inspect};
