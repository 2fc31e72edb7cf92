// ============================================================================
// File: packages/ramdisk/src/platform/types.rs
// ----------------------------------------------------------------------------
// Host platform tag and mount-point derivation.
// ============================================================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the temp dir that holds fallback "disks"
const FALLBACK_DIR: &str = ".mocked-memdisk";

/// Host platform as far as RAM disk support is concerned
///
/// Only two platforms have a native strategy; anything else, including
/// platforms that do not exist yet, is `Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// macOS: `hdiutil` RAM device + `diskutil erasevolume`
    Darwin,
    /// Linux: tmpfs mount under `/mnt`
    Linux,
    /// Anything else, carrying the OS identifier
    Unsupported(String),
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (`std::env::consts::OS` style) to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Platform::Darwin,
            "linux" => Platform::Linux,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Unsupported(os) => os,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unsupported(_))
    }

    /// Native mount point for a disk called `name`
    pub fn root_for_name(&self, name: &str) -> PathBuf {
        match self {
            Platform::Darwin => Path::new("/Volumes").join(name),
            _ => Path::new("/mnt").join(name),
        }
    }
}

/// Substitute directory used when the platform has no RAM disk support
pub fn fallback_root(temp_dir: &Path, name: &str) -> PathBuf {
    temp_dir.join(FALLBACK_DIR).join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_two_platforms_are_recognized() {
        assert_eq!(Platform::from_os("macos"), Platform::Darwin);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        for os in ["windows", "freebsd", "fuchsia", "Linux"] {
            assert_eq!(Platform::from_os(os), Platform::Unsupported(os.to_string()));
        }
    }

    #[test]
    fn mount_points() {
        assert_eq!(
            Platform::Darwin.root_for_name("scratch"),
            PathBuf::from("/Volumes/scratch")
        );
        assert_eq!(
            Platform::Linux.root_for_name("scratch"),
            PathBuf::from("/mnt/scratch")
        );
        assert_eq!(
            fallback_root(Path::new("/tmp"), "scratch"),
            PathBuf::from("/tmp/.mocked-memdisk/scratch")
        );
    }

    #[test]
    fn current_platform_matches_build_target() {
        let platform = Platform::current();
        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Linux);
        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::Darwin);
        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        assert!(!platform.is_supported());
    }
}
