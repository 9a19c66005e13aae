use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components, resolve `..` against
/// preceding segments, collapse redundant separators, and strip any trailing
/// separator. An empty result becomes `.`. No filesystem access.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned: Vec<Component> = Vec::new();
    let mut rooted = false;

    for comp in path.components() {
        match comp {
            Component::Prefix(_) => cleaned.push(comp),
            Component::RootDir => {
                rooted = true;
                cleaned.push(comp);
            }
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                // `..` at the root is a no-op
                _ if rooted => {}
                _ => cleaned.push(comp),
            },
            Component::Normal(_) => cleaned.push(comp),
        }
    }

    if cleaned.is_empty() {
        return PathBuf::from(".");
    }
    cleaned.iter().map(|c| c.as_os_str()).collect()
}

/// Make a path absolute by joining it onto the current directory, then
/// cleaning the result. Purely lexical: symlinks are not resolved and the
/// path need not exist.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean(path));
    }
    Ok(clean(&std::env::current_dir()?.join(path)))
}

/// Render a path with forward-slash separators for display.
pub fn to_slash(path: &Path) -> String {
    let s = path.display().to_string();
    if std::path::MAIN_SEPARATOR == '/' {
        s
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
