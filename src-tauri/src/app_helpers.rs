use std::{path::PathBuf, sync::OnceLock};

use crate::{logging, runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES};

fn desktop_log_path() -> &'static PathBuf {
    static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
    LOG_PATH.get_or_init(|| {
        logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
    })
}

pub(crate) fn append_desktop_log(message: &str) {
    logging::append_categorized_log(desktop_log_path(), "desktop", message, DESKTOP_LOG_MAX_BYTES);
}

pub(crate) fn append_startup_log(message: &str) {
    logging::append_categorized_log(desktop_log_path(), "startup", message, DESKTOP_LOG_MAX_BYTES);
}
