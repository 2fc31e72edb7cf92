//! ============================================================================
//! File: packages/ramdisk/src/lib.rs
//! ----------------------------------------------------------------------------
//! Create and destroy RAM-backed volumes.
//!
//! - macOS: `hdiutil attach -nomount ram://…` then `diskutil erasevolume`
//! - Linux: tmpfs mounted under `/mnt`, elevated through `sudo` when present
//! - Anything else: a plain directory under the temp dir, or an error in
//!   strict mode
//!
//! Every operation is available as an `async fn`, a blocking call and a
//! callback-reporting task, all running the same steps.
//! ============================================================================

pub mod async_task;
pub mod config;
pub mod error;
pub mod exec;
pub mod linux;
pub mod logger;
pub mod macos;
pub mod platform;
pub mod ramdisk;
pub mod size;

pub use config::{FilesystemVariant, RamDiskOptions};
pub use error::{RamDiskError, RamDiskResult};
pub use exec::{Host, SystemHost};
pub use platform::Platform;
pub use ramdisk::{DiskTarget, RamDisk, global_ramdisk, is_within, validate_name};
pub use size::parse_size;
