use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// A program and its argument vector
///
/// Commands are never passed through a shell, so names and paths need no
/// quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    /// Run this command through `helper`, e.g. `/usr/bin/sudo mount ...`
    pub fn prefixed(self, helper: &Path) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: helper.to_string_lossy().into_owned(),
            args,
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_argv() {
        let cmd = CommandLine::new("mount").args(["-t", "tmpfs"]).arg(Path::new("/mnt/x"));
        assert_eq!(cmd.to_string(), "mount -t tmpfs /mnt/x");
    }

    #[test]
    fn prefixing_moves_program_into_args() {
        let cmd = CommandLine::new("umount")
            .arg("/mnt/x")
            .prefixed(Path::new("/usr/bin/sudo"));
        assert_eq!(cmd.program, "/usr/bin/sudo");
        assert_eq!(cmd.args, vec!["umount", "/mnt/x"]);
    }
}
