use std::{
    env,
    path::{Path, PathBuf},
};

use tauri::{AppHandle, Manager, Runtime};

use crate::{BUNDLE_DIR_ENV, DEFAULT_ROOT_DIR_NAME, ROOT_DIR_ENV};

fn non_blank_env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// Data root for desktop state and logs: `OMNIFIX_ROOT`, else `~/.omnifix`.
pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    non_blank_env_path(ROOT_DIR_ENV)
        .or_else(|| home::home_dir().map(|home| home.join(DEFAULT_ROOT_DIR_NAME)))
}

/// Where bundled resources were extracted, or `None` for a source run.
pub(crate) fn packaged_bundle_dir<R: Runtime>(app: &AppHandle<R>) -> Option<PathBuf> {
    bundle_dir_from(
        non_blank_env_path(BUNDLE_DIR_ENV),
        tauri::is_dev(),
        || app.path().resource_dir().ok(),
    )
}

fn bundle_dir_from<F>(
    env_override: Option<PathBuf>,
    is_dev: bool,
    resource_dir: F,
) -> Option<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if env_override.is_some() {
        return env_override;
    }
    if is_dev {
        return None;
    }
    resource_dir()
}

/// Joins `relative_path` onto the bundle directory, or onto the current
/// directory when not packaged.
pub(crate) fn resolve_resource_path(relative_path: &str, bundle_dir: Option<&Path>) -> PathBuf {
    let base_path = match bundle_dir {
        Some(dir) => dir.to_path_buf(),
        None => current_dir_or_dot(),
    };
    base_path.join(relative_path)
}

fn current_dir_or_dot() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
