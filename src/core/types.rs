//! Core data types passed between providers and the typed records.
//!
//! Rule of thumb:
//! - These are the *loose* shapes that providers hand us
//! - No filesystem code, no tag parsing code
//! - Every accessor is a typed coercion that returns `Option`, so a value of the
//!   wrong shape is simply "not there" for the caller

use std::collections::BTreeMap;
use std::time::SystemTime;

/// Attribute names understood by `FileInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
    OwnerName,
    OwnerId,
    GroupName,
    GroupId,
    CreationTime,
    ModificationTime,
    PosixPermissions,
    HardLinkCount,
    ExtensionHidden,
    Size,
    /// Anything a provider reports that we don't model.
    Other(String),
}

/// One raw attribute value as reported by an `AttributeProvider`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
    Time(SystemTime),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            AttrValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            AttrValue::Int(v) => u64::try_from(*v).ok(),
            AttrValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Numbers count as flags: nonzero is `true`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            AttrValue::Int(v) => Some(*v != 0),
            AttrValue::UInt(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<SystemTime> {
        match self {
            AttrValue::Time(t) => Some(*t),
            _ => None,
        }
    }
}

/// Format-independent tag identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommonKey {
    AlbumName,
    Artist,
    Title,
    Artwork,
    Other(String),
}

/// Tag value. Artwork arrives as a `Map` holding a `data` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Text(String),
    Data(Vec<u8>),
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            MetadataValue::Data(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, MetadataValue>> {
        match self {
            MetadataValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// A single tag item.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataItem {
    /// Container-specific id (e.g. `TIT2`), kept for diagnostics.
    pub identifier: String,
    /// `None` when the container key has no common equivalent.
    pub common_key: Option<CommonKey>,
    pub value: MetadataValue,
}

/// All items of one metadata format, in the order the provider found them.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataGroup {
    pub format: String,
    pub items: Vec<MetadataItem>,
}

/// A duration in the provider's native units: `value` ticks at `timescale` ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTime {
    pub value: u64,
    pub timescale: u64,
}

impl MediaTime {
    /// Whole seconds, truncated. `None` for a zero timescale.
    pub fn whole_seconds(&self) -> Option<u64> {
        self.value.checked_div(self.timescale)
    }
}
