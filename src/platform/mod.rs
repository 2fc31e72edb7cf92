// ============================================================================
// File: packages/ramdisk/src/platform/mod.rs
// ----------------------------------------------------------------------------
// Platform detection and the per-platform ramdisk strategy seam.
// ============================================================================

// Module declarations
mod fallback;
mod ramdisk;
mod types;

// Re-export public API
pub use fallback::FallbackRamdisk;
pub use ramdisk::{DiskSpec, OpContext, RamdiskPlatform};
pub(crate) use ramdisk::{INIT_TIP, MOUNT_TIP, destroy_tip};
pub use types::*;
