//! CLI definition and argument parsing for the `ramdisk` binary.

use clap::{ArgAction, Args, Parser, Subcommand};

use ramdisk::{FilesystemVariant, RamDiskOptions};

#[derive(Parser, Debug)]
#[command(name = "ramdisk", author, version, about = "CLI to create and destroy RAM disks")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a RAM disk with size and disk name
    Create(CreateArgs),

    /// Destroy a RAM disk with name or path
    Destroy(DestroyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GlobalFlags {
    /// Disable messages
    #[arg(long, visible_alias = "silent", global = true)]
    pub quiet: bool,

    /// Fall back to a temporary directory when the platform has no RAM disk support
    #[arg(
        long = "no-throw-on-unsupported-platform",
        action = ArgAction::SetFalse,
        global = true
    )]
    pub throw_on_unsupported_platform: bool,
}

impl GlobalFlags {
    pub fn options(&self) -> RamDiskOptions {
        RamDiskOptions::new()
            .with_quiet(self.quiet)
            .with_throw_on_unsupported_platform(self.throw_on_unsupported_platform)
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Size of the RAM disk, a byte count or a number with unit (16mb, 32mib, 128m, 1G, 8gib, ...)
    pub size: String,

    /// Name of the RAM disk
    #[arg(default_value = "ramdisk")]
    pub name: String,

    /// Format the volume as HFS+ instead of APFS (macOS only)
    #[arg(long)]
    pub hfs_plus: bool,
}

impl CreateArgs {
    pub fn filesystem(&self) -> FilesystemVariant {
        if self.hfs_plus {
            FilesystemVariant::HfsPlus
        } else {
            FilesystemVariant::Apfs
        }
    }
}

#[derive(Args, Debug)]
pub struct DestroyArgs {
    /// Name or path of the RAM disk; anything but an absolute path is a name
    #[arg(default_value = "ramdisk", value_name = "NAME_OR_PATH")]
    pub target: String,

    /// Force unmounting even if the disk is busy
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn strict_by_default() {
        let cli = Cli::try_parse_from(["ramdisk", "create", "16mb"]).expect("parse");
        assert!(cli.global.throw_on_unsupported_platform);
        assert!(!cli.global.quiet);

        let cli = Cli::try_parse_from([
            "ramdisk",
            "destroy",
            "--no-throw-on-unsupported-platform",
            "--silent",
        ])
        .expect("parse");
        assert!(!cli.global.throw_on_unsupported_platform);
        assert!(cli.global.quiet);
    }

    #[test]
    fn create_defaults() {
        let cli = Cli::try_parse_from(["ramdisk", "create", "1G", "--hfs-plus"]).expect("parse");
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "ramdisk");
                assert_eq!(args.filesystem(), FilesystemVariant::HfsPlus);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
