use std::env;
use std::path::PathBuf;

use super::config::Config;
use super::error::ExposeError;

/// Tool-specific workspace override variable.
pub const GOEXPOSE_PATH_VAR: &str = "GOEXPOSEPATH";
/// Conventional Go workspace variable.
pub const GOPATH_VAR: &str = "GOPATH";

/// Resolve the workspace root to expose into.
///
/// The path-list is taken from the first non-empty source in order:
/// the `--gopath` flag, `GOEXPOSEPATH`, `GOPATH`, the config file. Only the
/// last entry of the list is used as the workspace root.
pub fn resolve(flag: Option<&str>, config: &Config) -> Result<PathBuf, ExposeError> {
    let exposepath = env::var(GOEXPOSE_PATH_VAR).ok();
    let gopath = env::var(GOPATH_VAR).ok();

    let list = select_path_list(
        flag,
        exposepath.as_deref(),
        gopath.as_deref(),
        config.gopath.as_deref(),
    )
    .ok_or(ExposeError::EmptyGopath)?;

    last_entry(list).ok_or(ExposeError::EmptyGopath)
}

/// Pick the workspace path-list from the available sources. Empty strings
/// count as unset.
fn select_path_list<'a>(
    flag: Option<&'a str>,
    exposepath: Option<&'a str>,
    gopath: Option<&'a str>,
    config: Option<&'a str>,
) -> Option<&'a str> {
    [flag, exposepath, gopath, config]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// Last non-empty entry of an OS-delimited path-list.
fn last_entry(list: &str) -> Option<PathBuf> {
    env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .last()
}
