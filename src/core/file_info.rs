//! core/file_info.rs
//! Typed filesystem record for one path.
//!
//! Construction is best-effort:
//! - the attribute provider is asked exactly once
//! - a failed fetch is logged and every field keeps its default
//! - a single attribute of the wrong shape is skipped, the rest still apply
//!
//! Callers that want failures as `Err` use `with_options` / `with_provider` with
//! `InfoOptions { strict: true }`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, trace, warn};
use url::Url;

use super::attributes::{AttributeProvider, FsAttributeProvider};
use super::error::{InfoError, Result};
use super::options::InfoOptions;
use super::permissions::Permissions;
use super::types::{AttrKey, AttrValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    path: PathBuf,
    created_at: Option<DateTime<Utc>>,
    modified_at: Option<DateTime<Utc>>,
    is_hidden: bool,
    hard_link_count: u64,
    owner_id: u64,
    owner_name: Option<String>,
    group_id: u64,
    group_name: Option<String>,
    permissions: Permissions,
    size_bytes: u64,
}

impl FileInfo {
    /// Best-effort construction from the real filesystem. Never fails.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (info, _) = Self::populate(path.into(), &FsAttributeProvider);
        info
    }

    pub fn with_options(path: impl Into<PathBuf>, options: &InfoOptions) -> Result<Self> {
        Self::with_provider(path, &FsAttributeProvider, options)
    }

    pub fn with_provider(
        path: impl Into<PathBuf>,
        provider: &dyn AttributeProvider,
        options: &InfoOptions,
    ) -> Result<Self> {
        let (info, failure) = Self::populate(path.into(), provider);

        match failure {
            Some(source) if options.strict => Err(InfoError::AttributeFetch {
                path: info.path,
                source,
            }),
            _ => Ok(info),
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            created_at: None,
            modified_at: None,
            is_hidden: false,
            hard_link_count: 0,
            owner_id: 0,
            owner_name: None,
            group_id: 0,
            group_name: None,
            permissions: Permissions::default(),
            size_bytes: 0,
        }
    }

    /// Returns the record plus the fetch failure, if any (already logged).
    fn populate(path: PathBuf, provider: &dyn AttributeProvider) -> (Self, Option<io::Error>) {
        let mut info = Self::empty(path);

        match provider.attributes(&info.path) {
            Ok(attrs) => {
                debug!(
                    "[file_info] {} attributes for {:?}",
                    attrs.len(),
                    info.path
                );
                for (key, value) in &attrs {
                    info.apply_attribute(key, value);
                }
                (info, None)
            }
            Err(e) => {
                warn!("[file_info] attribute fetch failed for {:?}: {e}", info.path);
                (info, Some(e))
            }
        }
    }

    fn apply_attribute(&mut self, key: &AttrKey, value: &AttrValue) {
        let applied = match key {
            AttrKey::OwnerName => value.as_text().map(|s| self.owner_name = Some(s.to_owned())),
            AttrKey::OwnerId => value.as_u64().map(|v| self.owner_id = v),
            AttrKey::GroupName => value.as_text().map(|s| self.group_name = Some(s.to_owned())),
            AttrKey::GroupId => value.as_u64().map(|v| self.group_id = v),
            AttrKey::CreationTime => value.as_time().map(|t| self.created_at = Some(t.into())),
            AttrKey::ModificationTime => {
                value.as_time().map(|t| self.modified_at = Some(t.into()))
            }
            AttrKey::PosixPermissions => value
                .as_i64()
                .map(|v| self.permissions.narrow_with_posix_value(v)),
            AttrKey::HardLinkCount => value.as_u64().map(|v| self.hard_link_count = v),
            AttrKey::ExtensionHidden => value.as_bool().map(|b| self.is_hidden = b),
            AttrKey::Size => value.as_u64().map(|v| self.size_bytes = v),
            AttrKey::Other(_) => Some(()),
        };

        if applied.is_none() {
            trace!("[file_info] skipping {key:?}: unexpected value {value:?}");
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path component, `""` for paths like `/`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Text after the final `.` of the name, `""` when there is none.
    pub fn extension(&self) -> String {
        self.name()
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_owned())
            .unwrap_or_default()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn hard_link_count(&self) -> u64 {
        self.hard_link_count
    }

    pub fn owner_id(&self) -> u64 {
        self.owner_id
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    pub fn group_id(&self) -> u64 {
        self.group_id
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Re-reads the whole file on every call; nothing is cached.
    pub fn data(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|source| InfoError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// `file://` URL of the path. Relative paths resolve against the current directory.
    pub fn url(&self) -> Option<Url> {
        let absolute = if self.path.is_absolute() {
            self.path.clone()
        } else {
            std::env::current_dir().ok()?.join(&self.path)
        };

        Url::from_file_path(absolute).ok()
    }
}

pub(crate) fn display_opt<T: fmt::Display>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name: {}", self.name())?;
        writeln!(f, "extension: {}", self.extension())?;
        writeln!(f, "path: {}", self.path.display())?;
        writeln!(
            f,
            "created: {}",
            display_opt(self.created_at.map(|d| d.to_rfc3339()))
        )?;
        writeln!(
            f,
            "modified: {}",
            display_opt(self.modified_at.map(|d| d.to_rfc3339()))
        )?;
        writeln!(f, "size: {}", self.size_bytes)?;
        writeln!(f, "permissions: {}", self.permissions)?;
        writeln!(f, "hidden: {}", self.is_hidden)?;
        writeln!(f, "hard links: {}", self.hard_link_count)?;
        writeln!(
            f,
            "owner: {} ({})",
            display_opt(self.owner_name.as_deref()),
            self.owner_id
        )?;
        writeln!(
            f,
            "group: {} ({})",
            display_opt(self.group_name.as_deref()),
            self.group_id
        )
    }
}

#[cfg(test)]
#[path = "file_info_tests.rs"]
mod tests;
