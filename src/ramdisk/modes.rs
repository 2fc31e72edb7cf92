// ============================================================================
// File: packages/ramdisk/src/ramdisk/modes.rs
// ----------------------------------------------------------------------------
// Blocking and callback drivers over the async lifecycle.
//
// The `async fn`s in lifecycle.rs are the deferred form; the wrappers here
// run exactly the same futures and only change how completion is reported.
// ============================================================================

use std::path::PathBuf;

use crate::async_task::{block_on, spawn_reporting};
use crate::config::RamDiskOptions;
use crate::error::RamDiskResult;
use crate::exec::Host;

use super::{DiskTarget, RamDisk};

impl<H: Host> RamDisk<H> {
    /// Blocking form of [`RamDisk::create`]
    pub fn create_blocking(
        &self,
        name: &str,
        size_bytes: u64,
        options: &RamDiskOptions,
    ) -> RamDiskResult<PathBuf> {
        block_on(self.create(name, size_bytes, options))?
    }

    /// Blocking form of [`RamDisk::destroy`]
    pub fn destroy_blocking(
        &self,
        target: impl Into<DiskTarget>,
        options: &RamDiskOptions,
    ) -> RamDiskResult<()> {
        let target = target.into();
        block_on(self.destroy(target, options))?
    }

    /// Callback form of [`RamDisk::create`]
    ///
    /// `callback` runs exactly once with the outcome. Returns immediately,
    /// with or without an ambient tokio runtime.
    pub fn create_with_callback<F>(
        &self,
        name: impl Into<String>,
        size_bytes: u64,
        options: RamDiskOptions,
        callback: F,
    ) where
        F: FnOnce(RamDiskResult<PathBuf>) + Send + 'static,
    {
        let engine = self.clone();
        let name = name.into();

        spawn_reporting(
            async move { engine.create(&name, size_bytes, &options).await },
            callback,
        );
    }

    /// Callback form of [`RamDisk::destroy`]
    pub fn destroy_with_callback<F>(
        &self,
        target: impl Into<DiskTarget>,
        options: RamDiskOptions,
        callback: F,
    ) where
        F: FnOnce(RamDiskResult<()>) + Send + 'static,
    {
        let engine = self.clone();
        let target = target.into();

        spawn_reporting(async move { engine.destroy(target, &options).await }, callback);
    }
}
