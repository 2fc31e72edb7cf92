use std::path::Path;

use crate::error::RamDiskResult;
use crate::exec::{CommandLine, Host};
use crate::platform::{DiskSpec, INIT_TIP, MOUNT_TIP, OpContext, RamdiskPlatform, destroy_tip};

mod privilege;

pub use privilege::{ELEVATION_HELPER, PrivilegeResolver};

/// Linux ramdisk implementation using a tmpfs mount.
///
/// Every step runs through the elevation helper when one is installed.
pub struct LinuxRamdisk;

impl LinuxRamdisk {
    fn mkdir(root: &Path) -> CommandLine {
        CommandLine::new("mkdir").arg("-p").arg(root)
    }

    /// tmpfs reads `size=0` as "no limit"; zero-byte requests are refused before this point.
    fn mount_tmpfs(root: &Path, size_bytes: u64) -> CommandLine {
        CommandLine::new("mount")
            .args(["-t", "tmpfs", "-o"])
            .arg(format!("size={size_bytes}"))
            .arg("tmpfs")
            .arg(root)
    }

    fn umount(root: &Path, force: bool) -> CommandLine {
        let command = CommandLine::new("umount").arg(root);
        if force { command.arg("--force") } else { command }
    }
}

impl RamdiskPlatform for LinuxRamdisk {
    async fn create<H: Host>(&self, ctx: &OpContext<'_, H>, disk: &DiskSpec<'_>) -> RamDiskResult<()> {
        ctx.logger.info(INIT_TIP);
        ctx.run_elevated(Self::mkdir(disk.root)).await?;

        ctx.logger.info(MOUNT_TIP);
        ctx.run_elevated(Self::mount_tmpfs(disk.root, disk.size_bytes))
            .await?;
        Ok(())
    }

    async fn destroy<H: Host>(&self, ctx: &OpContext<'_, H>, root: &Path, force: bool) -> RamDiskResult<()> {
        ctx.logger.info(destroy_tip(root));
        let unmounted = ctx.run_elevated(Self::umount(root, force)).await;

        // Leave no mount point behind, or the next create would see the path and skip.
        // A mount point that was never mounted fails `umount` but must still go; a busy
        // one fails `rmdir` too and stays.
        let removed = ctx.run_elevated(CommandLine::new("rmdir").arg(root)).await;

        unmounted?;
        removed?;
        Ok(())
    }
}
