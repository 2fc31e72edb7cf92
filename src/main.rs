mod cli;

use std::process;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Commands};
use ramdisk::{DiskTarget, global_ramdisk, is_within, parse_size, validate_name};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.quiet);

    if let Err(error) = run(cli) {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}

fn init_logging(quiet: bool) {
    let level = if quiet { "off" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = cli.global.options();
    let disk = global_ramdisk();

    match cli.command {
        Commands::Create(args) => {
            let size = parse_size(&args.size)?;
            if size == 0 {
                bail!("RAM disk size must be greater than zero, got \"{}\"", args.size);
            }
            validate_name(&args.name)?;

            let options = options.with_filesystem(args.filesystem());
            let root = disk.create_blocking(&args.name, size, &options)?;
            println!("{}", root.display());
        }
        Commands::Destroy(args) => {
            let root = match DiskTarget::parse(&args.target) {
                DiskTarget::Path(path) => path,
                DiskTarget::Name(name) => {
                    validate_name(&name)?;
                    disk.resolve_name(&name, &options)?
                }
            };

            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            if is_within(&root, &cwd) {
                bail!(
                    "Cannot perform destroy as the current working directory is in the RAM disk to be destroyed"
                );
            }

            disk.destroy_blocking(root, &options.with_force(args.force))?;
        }
    }

    Ok(())
}
