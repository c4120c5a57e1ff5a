//! core/mod.rs
//!
//! The brain of the crate:
//! - Read filesystem attributes for a path into a typed `FileInfo`
//! - For MP3s, sniff the signature and read tags into an `AudioFileInfo`
//! - Hand back plain records; callers decide how to show them
//!
//! The pipeline is one-way:
//!   (A) path -> attribute pairs -> FileInfo
//!   (B) FileInfo + signature + tag groups -> AudioFileInfo
//!
//! Both providers sit behind traits (`AttributeProvider`, `MediaProvider`) so
//! tests and other backends can swap them out.

pub mod attributes;
pub mod audio_info;
pub mod config;
pub mod error;
pub mod file_info;
pub mod media;
pub mod options;
pub mod permissions;
pub mod types;
mod util;

use std::fmt;
use std::path::PathBuf;

use audio_info::{AudioFileInfo, is_valid_mp3};
use file_info::FileInfo;

/// A path described as a plain file or, when it carries the MP3 signature, as audio.
#[derive(Debug, Clone)]
pub enum Inspected {
    File(FileInfo),
    Audio(AudioFileInfo),
}

impl Inspected {
    pub fn file(&self) -> &FileInfo {
        match self {
            Inspected::File(info) => info,
            Inspected::Audio(info) => info.file(),
        }
    }
}

impl fmt::Display for Inspected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inspected::File(info) => fmt::Display::fmt(info, f),
            Inspected::Audio(info) => fmt::Display::fmt(info, f),
        }
    }
}

/// Best-effort: picks the record type by signature, never by extension.
pub fn inspect(path: impl Into<PathBuf>) -> Inspected {
    let path: PathBuf = path.into();

    if is_valid_mp3(&path) {
        Inspected::Audio(AudioFileInfo::new(path))
    } else {
        Inspected::File(FileInfo::new(path))
    }
}
