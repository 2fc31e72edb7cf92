// ============================================================================
// File: packages/ramdisk/src/async_task.rs
// ----------------------------------------------------------------------------
// Spawned-task handle and the blocking driver used by the sync entry points.
// ============================================================================

use std::future::Future;

use crate::error::{RamDiskError, RamDiskResult};

/// Handle to a spawned operation
pub type AsyncTask<T> = tokio::task::JoinHandle<T>;

/// Builder that spawns a future onto the ambient tokio runtime
pub struct AsyncTaskBuilder<F> {
    future: F,
}

impl<F> AsyncTaskBuilder<F>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    pub fn new(future: F) -> Self {
        Self { future }
    }

    /// Spawn the future. Must be called from within a tokio runtime.
    pub fn spawn(self) -> AsyncTask<F::Output> {
        tokio::spawn(self.future)
    }
}

/// Drive `future` to completion on a private current-thread runtime.
///
/// When the caller is already on a runtime thread the private runtime runs
/// on a scoped helper thread, since tokio forbids nesting `block_on`.
pub fn block_on<F>(future: F) -> RamDiskResult<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    let run = move || -> RamDiskResult<F::Output> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RamDiskError::Runtime {
                detail: format!("Failed to build tokio runtime: {e}"),
            })?;
        Ok(runtime.block_on(future))
    };

    if tokio::runtime::Handle::try_current().is_err() {
        return run();
    }

    std::thread::scope(|scope| scope.spawn(run).join()).map_err(|_| RamDiskError::Runtime {
        detail: "Blocking driver thread panicked".to_string(),
    })?
}

/// Run `future` and hand its outcome to `callback` exactly once.
///
/// On a runtime thread the work is spawned onto that runtime. Elsewhere it
/// runs on a detached thread with a private runtime, so callers need no
/// executor of their own. A runtime that cannot start is reported through
/// `callback` as well.
pub fn spawn_reporting<F, T, C>(future: F, callback: C)
where
    F: Future<Output = RamDiskResult<T>> + Send + 'static,
    T: Send + 'static,
    C: FnOnce(RamDiskResult<T>) + Send + 'static,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        AsyncTaskBuilder::new(async move { callback(future.await) }).spawn();
    } else {
        std::thread::spawn(move || callback(block_on(future).and_then(|result| result)));
    }
}
