// ============================================================================
// File: packages/ramdisk/src/platform/fallback.rs
// ----------------------------------------------------------------------------
// Degraded mode for platforms without RAM disk support: a plain directory.
// ============================================================================

use std::path::Path;

use crate::error::{RamDiskError, RamDiskResult};
use crate::exec::Host;

use super::ramdisk::{DiskSpec, OpContext, RamdiskPlatform};

/// Temp-directory stand-in for a RAM disk
pub struct FallbackRamdisk<'a> {
    platform: &'a str,
}

impl<'a> FallbackRamdisk<'a> {
    pub fn new(platform: &'a str) -> Self {
        Self { platform }
    }
}

impl RamdiskPlatform for FallbackRamdisk<'_> {
    async fn create<H: Host>(&self, ctx: &OpContext<'_, H>, disk: &DiskSpec<'_>) -> RamDiskResult<()> {
        ctx.logger.warn(format!(
            "The current platform \"{}\" does not support RAM disks. A temporary directory \
             (which may or may not reside in RAM) is created at \"{}\".",
            self.platform,
            disk.root.display()
        ));

        ctx.host.create_dir_all(disk.root).await
    }

    /// Never fails: the directory is disposable, so the outcome is only logged.
    async fn destroy<H: Host>(&self, ctx: &OpContext<'_, H>, root: &Path, _force: bool) -> RamDiskResult<()> {
        let tip = format!(
            "Current platform \"{}\" does not support RAM disks, attempted to remove the directory \"{}\"",
            self.platform,
            root.display()
        );

        let outcome = if ctx.host.path_exists(root).await {
            ctx.host.remove_dir_all(root).await
        } else {
            Err(RamDiskError::Filesystem {
                path: root.to_path_buf(),
                code: Some("NotFound".to_string()),
                message: "directory does not exist".to_string(),
            })
        };

        match outcome {
            Ok(()) => ctx.logger.warn(format!("{tip} and succeeded.")),
            Err(e) => ctx.logger.warn(format!("{tip} but failed: {}", e.detail())),
        }

        Ok(())
    }
}
