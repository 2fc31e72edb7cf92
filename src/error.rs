// ============================================================================
// File: packages/ramdisk/src/error.rs
// ----------------------------------------------------------------------------
// Error taxonomy for RAM disk creation and teardown.
// ============================================================================

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while creating or destroying a RAM disk
#[derive(Debug, Clone, thiserror::Error)]
pub enum RamDiskError {
    /// Size expression could not be parsed
    #[error("Invalid size: {input}")]
    InvalidSize { input: String },

    /// Disk name looks like a path
    #[error("Invalid disk name \"{name}\": the name must not be a path")]
    InvalidName { name: String },

    /// Host platform has no native RAM disk support and strict mode is on
    #[error("Unsupported platform \"{platform}\"")]
    UnsupportedPlatform { platform: String },

    /// External command exited non-zero or could not be spawned
    #[error("Command `{command}` failed{}: {stderr}", .status.map(|s| format!(" with exit status {s}")).unwrap_or_default())]
    ProcessExecution {
        command: String,
        /// Exit status, absent when the process never started or was killed by a signal
        status: Option<i32>,
        stderr: String,
    },

    /// Directory check, creation or removal failed
    #[error("File system operation on {} failed: {message}", .path.display())]
    Filesystem {
        path: PathBuf,
        code: Option<String>,
        message: String,
    },

    /// Create failed; the underlying cause has already been logged
    #[error("Failed to create RAM disk at {}", .path.display())]
    CreateFailed { path: PathBuf },

    /// Blocking driver could not start its executor
    #[error("Runtime error: {detail}")]
    Runtime { detail: String },
}

impl RamDiskError {
    /// Build a filesystem error from an I/O failure at `path`
    pub fn filesystem(path: &Path, err: &io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::Other => err.raw_os_error().map(|errno| format!("errno {errno}")),
            kind => Some(format!("{kind:?}")),
        };
        RamDiskError::Filesystem {
            path: path.to_path_buf(),
            code,
            message: err.to_string(),
        }
    }

    /// Short name of the error kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            RamDiskError::InvalidSize { .. } => "InvalidSize",
            RamDiskError::InvalidName { .. } => "InvalidName",
            RamDiskError::UnsupportedPlatform { .. } => "UnsupportedPlatform",
            RamDiskError::ProcessExecution { .. } => "ProcessExecutionError",
            RamDiskError::Filesystem { .. } => "FilesystemError",
            RamDiskError::CreateFailed { .. } => "CreateFailed",
            RamDiskError::Runtime { .. } => "RuntimeError",
        }
    }

    /// Machine-readable code, when the failure carries one
    pub fn code(&self) -> Option<String> {
        match self {
            RamDiskError::Filesystem { code, .. } => code.clone(),
            RamDiskError::ProcessExecution { status, .. } => status.map(|s| s.to_string()),
            _ => None,
        }
    }

    /// Human-readable detail: kind, code and message joined by spaces.
    ///
    /// Parts that are absent or empty are skipped.
    pub fn detail(&self) -> String {
        let message = match self {
            RamDiskError::Filesystem { message, .. } => message.clone(),
            RamDiskError::ProcessExecution { stderr, .. } => stderr.trim().to_string(),
            other => other.to_string(),
        };

        [Some(self.kind_name().to_string()), self.code(), Some(message)]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result type for RAM disk operations
pub type RamDiskResult<T> = Result<T, RamDiskError>;
