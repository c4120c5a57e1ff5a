//! core/attributes.rs
//! Filesystem attribute providers.
//!
//! A provider turns a path into a flat list of `(AttrKey, AttrValue)` pairs.
//! It does not interpret them; `FileInfo` does the typed dispatch.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use super::types::{AttrKey, AttrValue};

pub trait AttributeProvider: fmt::Debug + Send + Sync {
    fn attributes(&self, path: &Path) -> io::Result<Vec<(AttrKey, AttrValue)>>;
}

/// Default provider backed by `std::fs::metadata` (follows symlinks).
#[derive(Debug, Default, Clone, Copy)]
pub struct FsAttributeProvider;

impl AttributeProvider for FsAttributeProvider {
    fn attributes(&self, path: &Path) -> io::Result<Vec<(AttrKey, AttrValue)>> {
        let metadata = fs::metadata(path)?;
        let mut attrs = Vec::with_capacity(10);

        attrs.push((AttrKey::Size, AttrValue::UInt(metadata.len())));

        // Creation time is missing on many UNIX filesystems; leave it out rather than guess.
        match metadata.created() {
            Ok(t) => attrs.push((AttrKey::CreationTime, AttrValue::Time(t))),
            Err(e) => debug!("[attributes] no creation time for {:?}: {e}", path),
        }
        if let Ok(t) = metadata.modified() {
            attrs.push((AttrKey::ModificationTime, AttrValue::Time(t)));
        }

        attrs.push((AttrKey::ExtensionHidden, AttrValue::Bool(is_dotfile(path))));

        push_os_attributes(path, &metadata, &mut attrs);

        Ok(attrs)
    }
}

fn is_dotfile(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

#[cfg(unix)]
fn push_os_attributes(path: &Path, metadata: &fs::Metadata, attrs: &mut Vec<(AttrKey, AttrValue)>) {
    use nix::unistd::{Gid, Group, Uid, User};
    use std::os::unix::fs::MetadataExt;

    let uid = metadata.uid();
    let gid = metadata.gid();

    attrs.push((
        AttrKey::PosixPermissions,
        AttrValue::Int(i64::from(metadata.mode() & 0o7777)),
    ));
    attrs.push((AttrKey::HardLinkCount, AttrValue::UInt(metadata.nlink())));
    attrs.push((AttrKey::OwnerId, AttrValue::UInt(u64::from(uid))));
    attrs.push((AttrKey::GroupId, AttrValue::UInt(u64::from(gid))));

    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => attrs.push((AttrKey::OwnerName, AttrValue::Text(user.name))),
        Ok(None) => debug!("[attributes] uid {uid} of {:?} has no user entry", path),
        Err(e) => debug!("[attributes] user lookup for uid {uid} failed: {e}"),
    }

    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => attrs.push((AttrKey::GroupName, AttrValue::Text(group.name))),
        Ok(None) => debug!("[attributes] gid {gid} of {:?} has no group entry", path),
        Err(e) => debug!("[attributes] group lookup for gid {gid} failed: {e}"),
    }
}

#[cfg(not(unix))]
fn push_os_attributes(
    _path: &Path,
    metadata: &fs::Metadata,
    attrs: &mut Vec<(AttrKey, AttrValue)>,
) {
    // No mode bits here; approximate from the read-only flag.
    let mode = if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    };
    attrs.push((AttrKey::PosixPermissions, AttrValue::Int(mode)));
}
