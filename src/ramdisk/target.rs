use std::path::{Component, Path, PathBuf};

use crate::error::{RamDiskError, RamDiskResult};

/// Reject names that could be read as a path
///
/// A disk name becomes the last component of the mount point and the volume
/// label, so it must be a single normal path component.
pub fn validate_name(name: &str) -> RamDiskResult<()> {
    let invalid = || RamDiskError::InvalidName {
        name: name.to_string(),
    };

    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

/// What `destroy` was asked to remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskTarget {
    /// A disk name, resolved to the platform mount point
    Name(String),
    /// An explicit mount point
    Path(PathBuf),
}

impl DiskTarget {
    /// Absolute input is a path, anything else is a name
    pub fn parse(input: &str) -> Self {
        if Path::new(input).is_absolute() {
            DiskTarget::Path(PathBuf::from(input))
        } else {
            DiskTarget::Name(input.to_string())
        }
    }
}

impl From<&str> for DiskTarget {
    fn from(input: &str) -> Self {
        DiskTarget::parse(input)
    }
}

impl From<PathBuf> for DiskTarget {
    fn from(path: PathBuf) -> Self {
        DiskTarget::Path(path)
    }
}

impl From<&Path> for DiskTarget {
    fn from(path: &Path) -> Self {
        DiskTarget::Path(path.to_path_buf())
    }
}

/// True when `dir` is `root` or lies beneath it
///
/// Both sides are canonicalized when they exist so symlinked temp
/// directories compare equal.
pub fn is_within(root: &Path, dir: &Path) -> bool {
    let root = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let dir = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    dir.starts_with(root)
}
