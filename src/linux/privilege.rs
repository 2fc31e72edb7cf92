use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tokio::sync::OnceCell;

use crate::exec::{CommandLine, Host};
use crate::logger::Logger;

/// Program used to elevate commands that need root
pub const ELEVATION_HELPER: &str = "sudo";

static GLOBAL_RESOLVER: OnceLock<Arc<PrivilegeResolver>> = OnceLock::new();

/// Memoized elevation-helper lookup.
///
/// The first caller searches the path; concurrent first callers wait on
/// that single lookup. The outcome, including "not found", is never repeated.
#[derive(Debug, Default)]
pub struct PrivilegeResolver {
    helper: OnceCell<Option<PathBuf>>,
}

impl PrivilegeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide resolver shared by every engine that does not bring its own
    pub fn global() -> Arc<PrivilegeResolver> {
        Arc::clone(GLOBAL_RESOLVER.get_or_init(|| Arc::new(PrivilegeResolver::new())))
    }

    /// `None` while unresolved, `Some(None)` when no helper exists
    pub fn resolved(&self) -> Option<Option<&Path>> {
        self.helper.get().map(|helper| helper.as_deref())
    }

    /// Resolve the helper path, probing `host` only on first use
    pub async fn resolve<H: Host>(&self, host: &H, logger: Logger) -> Option<&Path> {
        self.helper
            .get_or_init(|| async move {
                let found = host.find_executable(ELEVATION_HELPER).await;
                match &found {
                    Some(path) => logger.info(format!(
                        "Privileged commands will run through {}",
                        path.display()
                    )),
                    None => logger.warn(format!(
                        "`{ELEVATION_HELPER}` not found, running privileged commands as the current user"
                    )),
                }
                found
            })
            .await
            .as_deref()
    }

    /// Prefix `command` with the helper when one is available
    pub async fn elevate<H: Host>(
        &self,
        host: &H,
        logger: Logger,
        command: CommandLine,
    ) -> CommandLine {
        match self.resolve(host, logger).await {
            Some(helper) => command.prefixed(helper),
            None => command,
        }
    }
}
