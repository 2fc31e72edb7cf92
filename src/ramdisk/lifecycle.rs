// ============================================================================
// File: packages/ramdisk/src/ramdisk/lifecycle.rs
// ----------------------------------------------------------------------------
// Create/destroy state machine shared by every entry point.
// ============================================================================

use std::path::{Path, PathBuf};

use crate::config::RamDiskOptions;
use crate::error::{RamDiskError, RamDiskResult};
use crate::exec::Host;
use crate::linux::LinuxRamdisk;
use crate::logger::Logger;
use crate::macos::MacosRamdisk;
use crate::platform::{DiskSpec, FallbackRamdisk, OpContext, Platform, RamdiskPlatform, fallback_root};

use super::{DiskTarget, RamDisk, validate_name};

impl<H: Host> RamDisk<H> {
    /// Create a RAM disk called `name` holding `size_bytes`
    ///
    /// Returns the mount point. An existing mount point is returned as-is
    /// without running any command. On failure, a partially created disk is
    /// destroyed before `CreateFailed` is returned.
    pub async fn create(
        &self,
        name: &str,
        size_bytes: u64,
        options: &RamDiskOptions,
    ) -> RamDiskResult<PathBuf> {
        let logger = Logger::new(options.quiet);
        validate_name(name)?;
        let root = self.resolve_name(name, options)?;

        if self.host.path_exists(&root).await {
            logger.warn(format!(
                "The path \"{}\" already exists, skipping creation",
                root.display()
            ));
            return Ok(root);
        }

        let ctx = self.context(logger);
        let disk = DiskSpec {
            name,
            root: &root,
            size_bytes,
            filesystem: options.filesystem,
        };

        match self.dispatch_create(&ctx, &disk).await {
            Ok(()) => {
                logger.info(format!("RAM disk is available at {}", root.display()));
                Ok(root)
            }
            Err(cause) => {
                let partial = self.host.path_exists(&root).await;
                logger.error(create_failure_message(&root, &cause, partial));

                if partial
                    && let Err(rollback) = self.destroy_root(&root, options).await
                {
                    logger.error(format!(
                        "Failed to clean up {}: {}",
                        root.display(),
                        rollback.detail()
                    ));
                }

                Err(RamDiskError::CreateFailed { path: root })
            }
        }
    }

    /// Destroy the RAM disk at a path or with a name
    ///
    /// Native failures propagate unchanged. On unsupported platforms the
    /// substitute directory is removed and the outcome is only logged.
    pub async fn destroy(
        &self,
        target: impl Into<DiskTarget>,
        options: &RamDiskOptions,
    ) -> RamDiskResult<()> {
        let root = match target.into() {
            DiskTarget::Path(path) => path,
            DiskTarget::Name(name) => {
                validate_name(&name)?;
                self.resolve_name(&name, options)?
            }
        };
        self.destroy_root(&root, options).await
    }

    /// Mount point for `name`, enforcing strict mode on unsupported platforms
    pub fn resolve_name(&self, name: &str, options: &RamDiskOptions) -> RamDiskResult<PathBuf> {
        match &self.platform {
            Platform::Unsupported(_) => {
                self.check_supported(options)?;
                Ok(fallback_root(&self.host.temp_dir(), name))
            }
            platform => Ok(platform.root_for_name(name)),
        }
    }

    fn check_supported(&self, options: &RamDiskOptions) -> RamDiskResult<()> {
        if !self.platform.is_supported() && options.throw_on_unsupported_platform {
            return Err(RamDiskError::UnsupportedPlatform {
                platform: self.platform.name().to_string(),
            });
        }
        Ok(())
    }

    async fn destroy_root(&self, root: &Path, options: &RamDiskOptions) -> RamDiskResult<()> {
        self.check_supported(options)?;
        let ctx = self.context(Logger::new(options.quiet));

        match &self.platform {
            Platform::Darwin => MacosRamdisk.destroy(&ctx, root, options.force).await,
            Platform::Linux => LinuxRamdisk.destroy(&ctx, root, options.force).await,
            Platform::Unsupported(os) => {
                FallbackRamdisk::new(os)
                    .destroy(&ctx, root, options.force)
                    .await
            }
        }
    }

    async fn dispatch_create(&self, ctx: &OpContext<'_, H>, disk: &DiskSpec<'_>) -> RamDiskResult<()> {
        match &self.platform {
            Platform::Darwin => MacosRamdisk.create(ctx, disk).await,
            Platform::Linux => LinuxRamdisk.create(ctx, disk).await,
            Platform::Unsupported(os) => FallbackRamdisk::new(os).create(ctx, disk).await,
        }
    }
}

/// Single error line for a failed create, noting the rollback when one follows
fn create_failure_message(root: &Path, cause: &RamDiskError, cleaning_up: bool) -> String {
    let cleanup = if cleaning_up { ", cleaning it up" } else { "" };
    format!(
        "Failed to create RAM disk at {}{cleanup}: {}",
        root.display(),
        cause.detail()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount_failure() -> RamDiskError {
        RamDiskError::ProcessExecution {
            command: "mount -t tmpfs -o size=1024 tmpfs /mnt/scratch".to_string(),
            status: Some(32),
            stderr: "permission denied".to_string(),
        }
    }

    #[test]
    fn failure_message_carries_cause_and_cleanup_on_one_line() {
        let message = create_failure_message(Path::new("/mnt/scratch"), &mount_failure(), true);
        assert!(!message.contains('\n'));
        assert!(message.starts_with("Failed to create RAM disk at /mnt/scratch, cleaning it up: "));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn failure_message_without_partial_disk_omits_cleanup() {
        let message = create_failure_message(Path::new("/mnt/scratch"), &mount_failure(), false);
        assert!(message.starts_with("Failed to create RAM disk at /mnt/scratch: "));
        assert!(!message.contains("cleaning it up"));
        assert!(message.contains("permission denied"));
    }
}
