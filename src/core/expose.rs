use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::ExposeError;
use super::paths;

/// A project name inferred from a code path.
pub struct GuessedName {
    pub name: String,
    /// Set when the path ended in `src` and the parent directory supplied
    /// the name instead.
    pub src_parent: Option<PathBuf>,
}

/// Guess a project name from the final segment of the code path.
///
/// A path ending in `src` is most probably a `repo/src` checkout layout, so
/// the segment above it is used instead and reported via `src_parent`.
pub fn guess_project_name(code_root: &Path) -> GuessedName {
    let cleaned = paths::clean(code_root);
    let name = base_name(&cleaned);

    if name == "src" {
        let parent = match cleaned.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = base_name(&parent);
        return GuessedName {
            name,
            src_parent: Some(parent),
        };
    }

    GuessedName {
        name,
        src_parent: None,
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A usable project name is non-empty, not `.`, and not an absolute path.
pub fn validate_project_name(name: &str) -> Result<(), ExposeError> {
    if name.is_empty() || name == "." {
        return Err(ExposeError::InvalidProjectName);
    }
    if Path::new(name).is_absolute() {
        return Err(ExposeError::AbsoluteProjectName(name.to_string()));
    }
    Ok(())
}

/// Clean the code path, optionally make it absolute, and verify it is an
/// existing directory.
pub fn resolve_code_root(path: &Path, allow_relative: bool) -> Result<PathBuf, ExposeError> {
    let mut code_root = paths::clean(path);
    if !allow_relative {
        code_root = paths::absolutize(&code_root).map_err(ExposeError::Resolve)?;
    }

    // Follows symlinks, like the stat the link target will see.
    let meta = std::fs::metadata(&code_root).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            ExposeError::PathNotFound(paths::to_slash(&code_root))
        } else {
            ExposeError::PathStat(err)
        }
    })?;

    if !meta.is_dir() {
        return Err(ExposeError::NotADirectory(paths::to_slash(&code_root)));
    }

    Ok(code_root)
}

/// Create the symlink exposing `code_root` at `<workspace>/src/<name>`.
///
/// The `src` directory is not created if absent; an existing entry at the
/// destination is reported as a conflict rather than overwritten.
pub fn link(workspace: &Path, name: &str, code_root: &Path) -> Result<(), ExposeError> {
    let dest = workspace.join("src").join(name);
    symlink_dir(code_root, &dest).map_err(|err| {
        if err.kind() == ErrorKind::AlreadyExists {
            ExposeError::AlreadyExposed(name.to_string())
        } else {
            ExposeError::Io(err)
        }
    })
}

#[cfg(unix)]
fn symlink_dir(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink_dir(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(original, link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace_with_src() -> TempDir {
        let ws = TempDir::new().unwrap();
        std::fs::create_dir(ws.path().join("src")).unwrap();
        ws
    }

    #[test]
    fn guesses_final_segment() {
        let guess = guess_project_name(Path::new("/tmp/foo/bar"));
        assert_eq!(guess.name, "bar");
        assert!(guess.src_parent.is_none());
    }

    #[test]
    fn guess_ignores_trailing_slash() {
        let guess = guess_project_name(Path::new("/tmp/foo/bar/"));
        assert_eq!(guess.name, "bar");
    }

    #[test]
    fn guess_steps_over_src_to_the_repo_name() {
        let guess = guess_project_name(Path::new("/home/user/repo/src"));
        assert_eq!(guess.name, "repo");
        assert_eq!(guess.src_parent, Some(PathBuf::from("/home/user/repo")));
    }

    #[test]
    fn root_path_yields_no_usable_name() {
        let guess = guess_project_name(Path::new("/"));
        assert_eq!(guess.name, "");
        assert!(guess.src_parent.is_none());
        assert!(matches!(
            validate_project_name(&guess.name),
            Err(ExposeError::InvalidProjectName)
        ));
    }

    #[test]
    fn bare_src_yields_no_usable_name() {
        let guess = guess_project_name(Path::new("src"));
        assert_eq!(guess.name, "");
        assert_eq!(guess.src_parent, Some(PathBuf::from(".")));
    }

    #[test]
    fn name_validation() {
        assert!(validate_project_name("bar").is_ok());
        assert!(validate_project_name("org/repo").is_ok());

        assert!(matches!(
            validate_project_name(""),
            Err(ExposeError::InvalidProjectName)
        ));
        assert!(matches!(
            validate_project_name("."),
            Err(ExposeError::InvalidProjectName)
        ));
        assert!(matches!(
            validate_project_name("/abs/name"),
            Err(ExposeError::AbsoluteProjectName(_))
        ));
    }

    #[test]
    fn resolve_accepts_existing_directory() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_code_root(dir.path(), false).unwrap();
        assert!(resolved.is_dir());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn resolve_rejects_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            resolve_code_root(&missing, false),
            Err(ExposeError::PathNotFound(_))
        ));
    }

    #[test]
    fn resolve_rejects_plain_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            resolve_code_root(&file, false),
            Err(ExposeError::NotADirectory(_))
        ));
    }

    #[test]
    fn resolve_keeps_relative_path_when_allowed() {
        let resolved = resolve_code_root(Path::new("."), true).unwrap();
        assert_eq!(resolved, PathBuf::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn link_creates_symlink_under_src() {
        let ws = workspace_with_src();
        let code = TempDir::new().unwrap();

        link(ws.path(), "bar", code.path()).unwrap();

        let dest = ws.path().join("src").join("bar");
        assert_eq!(std::fs::read_link(&dest).unwrap(), code.path());
    }

    #[cfg(unix)]
    #[test]
    fn second_link_is_a_conflict() {
        let ws = workspace_with_src();
        let code = TempDir::new().unwrap();

        link(ws.path(), "bar", code.path()).unwrap();
        let err = link(ws.path(), "bar", code.path()).unwrap_err();

        assert!(matches!(err, ExposeError::AlreadyExposed(ref n) if n == "bar"));
        assert_eq!(err.exit_code(), 1);
        // The original link is untouched.
        let dest = ws.path().join("src").join("bar");
        assert_eq!(std::fs::read_link(&dest).unwrap(), code.path());
    }

    #[cfg(unix)]
    #[test]
    fn missing_src_dir_is_a_generic_io_error() {
        let ws = TempDir::new().unwrap();
        let code = TempDir::new().unwrap();

        let err = link(ws.path(), "bar", code.path()).unwrap_err();
        assert!(matches!(err, ExposeError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn multi_segment_name_links_into_subdirectory() {
        let ws = workspace_with_src();
        std::fs::create_dir(ws.path().join("src").join("org")).unwrap();
        let code = TempDir::new().unwrap();

        link(ws.path(), "org/repo", code.path()).unwrap();

        let dest = ws.path().join("src").join("org").join("repo");
        assert_eq!(std::fs::read_link(&dest).unwrap(), code.path());
    }
}
