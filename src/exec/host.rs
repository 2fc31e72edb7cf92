use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use log::debug;
use tokio::process::Command;

use crate::error::{RamDiskError, RamDiskResult};

use super::command::{CommandLine, CommandOutput};
use super::utils::find_in_path;

/// Operating-system services consumed by the RAM disk engine
///
/// Every method is a suspension point so the same control flow serves the
/// blocking, deferred and callback entry points.
pub trait Host: Send + Sync + 'static {
    /// Run a command to completion; non-zero exit is `ProcessExecution`
    fn run(&self, command: &CommandLine)
    -> impl Future<Output = RamDiskResult<CommandOutput>> + Send;

    fn path_exists(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Recursive, succeeds when the directory already exists
    fn create_dir_all(&self, path: &Path) -> impl Future<Output = RamDiskResult<()>> + Send;

    /// Recursive, succeeds when the directory is already absent
    fn remove_dir_all(&self, path: &Path) -> impl Future<Output = RamDiskResult<()>> + Send;

    fn find_executable(&self, name: &str) -> impl Future<Output = Option<PathBuf>> + Send;

    fn temp_dir(&self) -> PathBuf;
}

/// `Host` backed by the real process table and filesystem
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    temp_dir: Option<PathBuf>,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` instead of the system temp directory for fallback disks
    pub fn with_temp_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: Some(dir.into()),
        }
    }
}

impl Host for SystemHost {
    async fn run(&self, command: &CommandLine) -> RamDiskResult<CommandOutput> {
        debug!("Executing {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .output()
            .await
            .map_err(|e| RamDiskError::ProcessExecution {
                command: command.to_string(),
                status: None,
                stderr: format!("Failed to spawn: {e}"),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(RamDiskError::ProcessExecution {
                command: command.to_string(),
                status: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput {
            status: output.status.code().unwrap_or_default(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
        })
    }

    async fn path_exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn create_dir_all(&self, path: &Path) -> RamDiskResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| RamDiskError::filesystem(path, &e))
    }

    async fn remove_dir_all(&self, path: &Path) -> RamDiskResult<()> {
        match tokio::fs::remove_dir_all(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RamDiskError::filesystem(path, &e)),
        }
    }

    async fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let name = name.to_string();
        let search_path = std::env::var_os("PATH");
        tokio::task::spawn_blocking(move || find_in_path(&name, search_path.as_deref()))
            .await
            .ok()
            .flatten()
    }

    fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_captures_stdout() {
        let host = SystemHost::new();
        let output = host
            .run(&CommandLine::new("sh").args(["-c", "echo '  /dev/disk4  '"]))
            .await
            .expect("sh should run");
        assert_eq!(output.stdout.trim(), "/dev/disk4");
        assert_eq!(output.status, 0);
    }

    #[tokio::test]
    async fn non_zero_exit_is_process_error() {
        let host = SystemHost::new();
        let err = host
            .run(&CommandLine::new("sh").args(["-c", "echo denied >&2; exit 3"]))
            .await
            .expect_err("exit 3 should fail");
        match err {
            RamDiskError::ProcessExecution { status, stderr, .. } => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr.trim(), "denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn spawn_failure_has_no_status() {
        let host = SystemHost::new();
        let err = host
            .run(&CommandLine::new("/nonexistent/ramdisk-helper"))
            .await
            .expect_err("missing program should fail");
        assert!(matches!(err, RamDiskError::ProcessExecution { status: None, .. }));
    }

    #[tokio::test]
    async fn directory_primitives_are_tolerant() {
        let dir = tempfile::tempdir().expect("tempdir");
        let host = SystemHost::with_temp_dir(dir.path());
        let target = host.temp_dir().join("a").join("b");

        host.create_dir_all(&target).await.expect("create");
        host.create_dir_all(&target).await.expect("create twice");
        assert!(host.path_exists(&target).await);

        host.remove_dir_all(&target).await.expect("remove");
        host.remove_dir_all(&target).await.expect("remove twice");
        assert!(!host.path_exists(&target).await);
    }
}
