// ============================================================================
// File: packages/ramdisk/src/platform/ramdisk.rs
// ----------------------------------------------------------------------------
// Platform-specific ramdisk operations trait.
//
// Each platform strategy runs a short, strictly ordered sequence of host
// commands. Failures propagate unchanged; rollback is the engine's job.
// ============================================================================

use std::future::Future;
use std::path::Path;

use crate::config::FilesystemVariant;
use crate::error::RamDiskResult;
use crate::exec::{CommandLine, CommandOutput, Host};
use crate::linux::PrivilegeResolver;
use crate::logger::Logger;

pub(crate) const INIT_TIP: &str = "Initializing RAM disk. You may be prompted for credentials";
pub(crate) const MOUNT_TIP: &str = "Mounting RAM disk. You may be prompted for credentials";

pub(crate) fn destroy_tip(root: &Path) -> String {
    format!(
        "Unmounting RAM disk at {}. You may be prompted for credentials",
        root.display()
    )
}

/// Everything a strategy needs to create one disk
#[derive(Debug, Clone, Copy)]
pub struct DiskSpec<'a> {
    /// Volume label
    pub name: &'a str,
    /// Mount point
    pub root: &'a Path,
    pub size_bytes: u64,
    pub filesystem: FilesystemVariant,
}

/// Services shared by the platform strategies for one operation
pub struct OpContext<'a, H: Host> {
    pub host: &'a H,
    pub privilege: &'a PrivilegeResolver,
    pub logger: Logger,
}

impl<H: Host> OpContext<'_, H> {
    /// Run a command as the current user
    pub async fn run(&self, command: CommandLine) -> RamDiskResult<CommandOutput> {
        self.host.run(&command).await
    }

    /// Run a command through the elevation helper, if there is one
    pub async fn run_elevated(&self, command: CommandLine) -> RamDiskResult<CommandOutput> {
        let command = self
            .privilege
            .elevate(self.host, self.logger, command)
            .await;
        self.host.run(&command).await
    }
}

/// Platform-specific ramdisk operations trait
pub trait RamdiskPlatform: Sync {
    /// Create and mount the disk described by `disk`
    fn create<H: Host>(
        &self,
        ctx: &OpContext<'_, H>,
        disk: &DiskSpec<'_>,
    ) -> impl Future<Output = RamDiskResult<()>> + Send;

    /// Unmount and release the disk at `root`
    fn destroy<H: Host>(
        &self,
        ctx: &OpContext<'_, H>,
        root: &Path,
        force: bool,
    ) -> impl Future<Output = RamDiskResult<()>> + Send;
}
