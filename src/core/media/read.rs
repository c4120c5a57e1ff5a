//! core/media/read.rs
//! Read ID3 tags from an MP3 and flatten them into metadata groups.
//!
//! - One group per tag version found: v1 first, then v2
//! - Items keep frame order, so later frames win when applied
//! - Only title/artist/album/artwork get a common key; other text frames are
//!   passed through with `CommonKey::Other(frame id)`

use std::collections::BTreeMap;
use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag, TagLike, v1};
use log::{debug, warn};

use super::super::config::{ARTWORK_DATA_KEY, ARTWORK_MIME_KEY, ID3V1_FORMAT, ID3V2_FORMAT};
use super::super::error::{InfoError, Result};
use super::super::types::{CommonKey, MediaTime, MetadataGroup, MetadataItem, MetadataValue};
use super::super::util::parse_trimmed_u64;

pub(crate) fn read_groups(path: &Path) -> Result<Vec<MetadataGroup>> {
    let mut groups = Vec::with_capacity(2);

    match v1::Tag::read_from_path(path) {
        Ok(tag) => groups.push(group_from_v1(&tag)),
        Err(e) => debug!("[read] no ID3v1 tag in {:?}: {e}", path),
    }

    if let Some(tag) = read_v2(path)? {
        groups.push(group_from_v2(&tag));
    }

    Ok(groups)
}

/// `Ok(None)` when there is no usable v2 tag. I/O errors are hard failures.
fn read_v2(path: &Path) -> Result<Option<Tag>> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(Some(tag)),
        Err(e) => match e.kind {
            ErrorKind::NoTag => {
                debug!("[read] no ID3v2 tag in {:?}", path);
                Ok(None)
            }
            ErrorKind::Io(_) => Err(InfoError::Media {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            _ => {
                if e.partial_tag.is_some() {
                    warn!("[read] ID3v2 tag in {:?} is damaged, using partial tag: {e}", path);
                } else {
                    warn!("[read] ID3v2 tag in {:?} unreadable: {e}", path);
                }
                Ok(e.partial_tag)
            }
        },
    }
}

fn group_from_v1(tag: &v1::Tag) -> MetadataGroup {
    let fields = [
        ("TITLE", CommonKey::Title, &tag.title),
        ("ARTIST", CommonKey::Artist, &tag.artist),
        ("ALBUM", CommonKey::AlbumName, &tag.album),
    ];

    let items = fields
        .into_iter()
        .filter_map(|(id, key, value)| {
            let value = value.trim_matches(|c: char| c == '\0' || c.is_whitespace());
            (!value.is_empty()).then(|| text_item(id, Some(key), value))
        })
        .collect();

    MetadataGroup {
        format: ID3V1_FORMAT.to_string(),
        items,
    }
}

fn group_from_v2(tag: &Tag) -> MetadataGroup {
    let mut items = Vec::new();

    for frame in tag.frames() {
        let id = frame.id();

        let item = match (id, frame.content()) {
            ("TIT2" | "TT2", Content::Text(s)) => text_item(id, Some(CommonKey::Title), s),
            ("TPE1" | "TP1", Content::Text(s)) => text_item(id, Some(CommonKey::Artist), s),
            ("TALB" | "TAL", Content::Text(s)) => text_item(id, Some(CommonKey::AlbumName), s),
            ("APIC" | "PIC", Content::Picture(p)) => {
                let mut container = BTreeMap::new();
                container.insert(
                    ARTWORK_DATA_KEY.to_string(),
                    MetadataValue::Data(p.data.clone()),
                );
                container.insert(
                    ARTWORK_MIME_KEY.to_string(),
                    MetadataValue::Text(p.mime_type.clone()),
                );
                MetadataItem {
                    identifier: id.to_string(),
                    common_key: Some(CommonKey::Artwork),
                    value: MetadataValue::Map(container),
                }
            }
            (_, Content::Text(s)) => text_item(id, Some(CommonKey::Other(id.to_string())), s),
            _ => continue,
        };

        items.push(item);
    }

    MetadataGroup {
        format: ID3V2_FORMAT.to_string(),
        items,
    }
}

fn text_item(id: &str, common_key: Option<CommonKey>, value: &str) -> MetadataItem {
    MetadataItem {
        identifier: id.to_string(),
        common_key,
        value: MetadataValue::Text(value.to_string()),
    }
}

/// Duration from the ID3v2 `TLEN` frame (milliseconds), if present and numeric.
pub(crate) fn tlen_duration(path: &Path) -> Option<MediaTime> {
    let tag = Tag::read_from_path(path).ok()?;
    let frame = tag.get("TLEN")?;

    let ms = match frame.content() {
        Content::Text(s) => parse_trimmed_u64(s)?,
        _ => return None,
    };

    Some(MediaTime {
        value: ms,
        timescale: 1000,
    })
}
