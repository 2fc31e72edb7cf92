// ============================================================================
// File: packages/ramdisk/src/config.rs
// ----------------------------------------------------------------------------
// Caller-facing options for RAM disk creation and teardown.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Volume format used when erasing a macOS RAM device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilesystemVariant {
    /// Apple File System
    #[default]
    Apfs,
    /// Mac OS Extended (journaled)
    HfsPlus,
}

impl FilesystemVariant {
    /// Personality name understood by `diskutil erasevolume`
    pub fn diskutil_name(self) -> &'static str {
        match self {
            FilesystemVariant::Apfs => "APFS",
            FilesystemVariant::HfsPlus => "HFS+",
        }
    }
}

/// Options shared by `create` and `destroy`
///
/// Every field has a default, so a partial document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RamDiskOptions {
    /// Suppress all log output
    pub quiet: bool,

    /// Fail with `UnsupportedPlatform` instead of falling back to a temp directory
    pub throw_on_unsupported_platform: bool,

    /// macOS volume format
    pub filesystem: FilesystemVariant,

    /// Force detach/unmount on destroy
    pub force: bool,
}

impl Default for RamDiskOptions {
    fn default() -> Self {
        Self {
            quiet: true,
            throw_on_unsupported_platform: false,
            filesystem: FilesystemVariant::default(),
            force: false,
        }
    }
}

impl RamDiskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_throw_on_unsupported_platform(mut self, throw: bool) -> Self {
        self.throw_on_unsupported_platform = throw;
        self
    }

    pub fn with_filesystem(mut self, filesystem: FilesystemVariant) -> Self {
        self.filesystem = filesystem;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_quiet_and_lenient() {
        let options = RamDiskOptions::default();
        assert!(options.quiet);
        assert!(!options.throw_on_unsupported_platform);
        assert!(!options.force);
        assert_eq!(options.filesystem, FilesystemVariant::Apfs);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let options: RamDiskOptions =
            serde_json::from_str(r#"{ "quiet": false, "filesystem": "hfs-plus" }"#)
                .expect("options should deserialize");
        assert!(!options.quiet);
        assert_eq!(options.filesystem, FilesystemVariant::HfsPlus);
        assert!(!options.throw_on_unsupported_platform);
    }

    #[test]
    fn diskutil_names() {
        assert_eq!(FilesystemVariant::Apfs.diskutil_name(), "APFS");
        assert_eq!(FilesystemVariant::HfsPlus.diskutil_name(), "HFS+");
    }
}
