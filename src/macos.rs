//! macOS ramdisk implementation using `hdiutil` and `diskutil`
//!
//! A RAM-backed block device is attached without mounting, then
//! `diskutil erasevolume` formats it and mounts it under `/Volumes`.

use std::path::Path;

use crate::error::RamDiskResult;
use crate::exec::{CommandLine, Host};
use crate::platform::{DiskSpec, INIT_TIP, MOUNT_TIP, OpContext, RamdiskPlatform, destroy_tip};

/// `ram://` devices are sized in 512-byte sectors
pub const BLOCK_SIZE: u64 = 512;

/// macOS ramdisk implementation
pub struct MacosRamdisk;

impl MacosRamdisk {
    /// Sector count for `size_bytes`, truncated to whole sectors
    pub fn block_count(size_bytes: u64) -> u64 {
        size_bytes / BLOCK_SIZE
    }

    fn attach(blocks: u64) -> CommandLine {
        CommandLine::new("hdiutil")
            .args(["attach", "-nomount"])
            .arg(format!("ram://{blocks}"))
    }

    fn erase_volume(disk: &DiskSpec<'_>, device: &str) -> CommandLine {
        CommandLine::new("diskutil")
            .arg("erasevolume")
            .arg(disk.filesystem.diskutil_name())
            .arg(disk.name)
            .arg(device)
    }

    fn detach(root: &Path, force: bool) -> CommandLine {
        let command = CommandLine::new("hdiutil").arg("detach").arg(root);
        if force { command.arg("-force") } else { command }
    }
}

impl RamdiskPlatform for MacosRamdisk {
    async fn create<H: Host>(&self, ctx: &OpContext<'_, H>, disk: &DiskSpec<'_>) -> RamDiskResult<()> {
        let blocks = Self::block_count(disk.size_bytes);
        if disk.size_bytes % BLOCK_SIZE != 0 {
            ctx.logger.warn(format!(
                "{} bytes is not a multiple of {BLOCK_SIZE}, the disk will hold {} bytes",
                disk.size_bytes,
                blocks * BLOCK_SIZE
            ));
        }

        ctx.logger.info(INIT_TIP);
        let output = ctx.run(Self::attach(blocks)).await?;
        let device = output.stdout.trim();

        ctx.logger.info(MOUNT_TIP);
        ctx.run(Self::erase_volume(disk, device)).await?;
        Ok(())
    }

    async fn destroy<H: Host>(&self, ctx: &OpContext<'_, H>, root: &Path, force: bool) -> RamDiskResult<()> {
        ctx.logger.info(destroy_tip(root));
        ctx.run(Self::detach(root, force)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FilesystemVariant;

    use super::*;

    #[test]
    fn block_count_truncates() {
        assert_eq!(MacosRamdisk::block_count(16 * 1024 * 1024), 32_768);
        assert_eq!(MacosRamdisk::block_count(1000), 1);
        assert_eq!(MacosRamdisk::block_count(511), 0);
    }

    #[test]
    fn erase_volume_uses_requested_variant() {
        let disk = DiskSpec {
            name: "scratch",
            root: Path::new("/Volumes/scratch"),
            size_bytes: 1024,
            filesystem: FilesystemVariant::HfsPlus,
        };
        assert_eq!(
            MacosRamdisk::erase_volume(&disk, "/dev/disk4").to_string(),
            "diskutil erasevolume HFS+ scratch /dev/disk4"
        );
        assert_eq!(
            MacosRamdisk::attach(2).to_string(),
            "hdiutil attach -nomount ram://2"
        );
    }

    #[test]
    fn detach_force() {
        let root = Path::new("/Volumes/scratch");
        assert_eq!(
            MacosRamdisk::detach(root, true).to_string(),
            "hdiutil detach /Volumes/scratch -force"
        );
    }
}
