// ============================================================================
// File: packages/ramdisk/src/ramdisk/mod.rs
// ----------------------------------------------------------------------------
// RAM disk lifecycle engine.
//
// Provides create/destroy over the platform strategies with:
// - Mount point derivation and an existence-based idempotency gate
// - Rollback of partially created disks
// - Blocking, deferred and callback entry points over one control flow
// ============================================================================

use std::sync::{Arc, OnceLock};

use crate::exec::{Host, SystemHost};
use crate::linux::PrivilegeResolver;
use crate::logger::Logger;
use crate::platform::{OpContext, Platform};

// Submodules
mod lifecycle;
mod modes;
mod target;


// Re-exports
pub use target::{DiskTarget, is_within, validate_name};

static GLOBAL_RAMDISK: OnceLock<RamDisk<SystemHost>> = OnceLock::new();

/// Process-wide engine for the running host
pub fn global_ramdisk() -> &'static RamDisk<SystemHost> {
    GLOBAL_RAMDISK.get_or_init(RamDisk::system)
}

/// Creates and destroys RAM disks on one host
///
/// Holds no per-disk state: whether a disk exists is decided by probing its
/// mount point on every call. Cloning is cheap and clones share the host and
/// privilege resolver.
#[derive(Debug)]
pub struct RamDisk<H: Host = SystemHost> {
    host: Arc<H>,
    platform: Platform,
    privilege: Arc<PrivilegeResolver>,
}

impl RamDisk<SystemHost> {
    /// Engine for the running OS using the process-wide privilege resolver
    pub fn system() -> Self {
        Self::new(SystemHost::new(), Platform::current())
    }
}

impl<H: Host> RamDisk<H> {
    pub fn new(host: H, platform: Platform) -> Self {
        Self {
            host: Arc::new(host),
            platform,
            privilege: PrivilegeResolver::global(),
        }
    }

    /// Replace the process-wide privilege resolver
    pub fn with_privilege_resolver(mut self, privilege: Arc<PrivilegeResolver>) -> Self {
        self.privilege = privilege;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn context(&self, logger: Logger) -> OpContext<'_, H> {
        OpContext {
            host: &self.host,
            privilege: &self.privilege,
            logger,
        }
    }
}

impl<H: Host> Clone for RamDisk<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            platform: self.platform.clone(),
            privilege: Arc::clone(&self.privilege),
        }
    }
}

impl Default for RamDisk<SystemHost> {
    fn default() -> Self {
        Self::system()
    }
}
