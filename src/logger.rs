// ============================================================================
// File: packages/ramdisk/src/logger.rs
// ----------------------------------------------------------------------------
// Quiet-aware sink over the `log` facade.
// ============================================================================

use log::{error, info, warn};

const TARGET: &str = "ramdisk";

/// Level-tagged message sink
///
/// Forwards to the `log` facade unless constructed quiet, in which case
/// every call is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    quiet: bool,
}

impl Logger {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if !self.quiet {
            info!(target: TARGET, "{}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if !self.quiet {
            warn!(target: TARGET, "{}", message.as_ref());
        }
    }

    pub fn error(&self, message: impl AsRef<str>) {
        if !self.quiet {
            error!(target: TARGET, "{}", message.as_ref());
        }
    }
}
