use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Locate `name` the way a shell would
///
/// A name containing a path separator is checked directly; otherwise each
/// entry of `search_path` is tried in order.
pub fn find_in_path(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        let direct = Path::new(name);
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    std::env::split_paths(search_path?)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").expect("write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod stub");
        path
    }

    #[test]
    fn finds_first_executable_on_path() {
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        touch(first.path(), "sudo", 0o644);
        let expected = touch(second.path(), "sudo", 0o755);

        let search = std::env::join_paths([first.path(), second.path()]).expect("join paths");
        assert_eq!(find_in_path("sudo", Some(&search)), Some(expected));
    }

    #[test]
    fn missing_helper_is_none() {
        let empty = tempfile::tempdir().expect("tempdir");
        let search = std::env::join_paths([empty.path()]).expect("join paths");
        assert_eq!(find_in_path("sudo", Some(&search)), None);
        assert_eq!(find_in_path("sudo", None), None);
    }

    #[test]
    fn direct_paths_skip_search() {
        let dir = tempfile::tempdir().expect("tempdir");
        let stub = touch(dir.path(), "helper", 0o755);
        let name = stub.to_str().expect("utf-8 temp path");
        assert_eq!(find_in_path(name, None), Some(stub.clone()));
    }
}
