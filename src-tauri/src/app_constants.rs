pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "OmniFix AI | Suite Forense v3.0";
pub(crate) const FRONTEND_URL: &str = "http://localhost:3000";
pub(crate) const MAIN_WINDOW_WIDTH: u32 = 1200;
pub(crate) const MAIN_WINDOW_HEIGHT: u32 = 800;
pub(crate) const MAIN_WINDOW_BACKGROUND: &str = "#050507";
pub(crate) const MAIN_WINDOW_RESIZABLE: bool = true;

pub(crate) const INDEX_HTML_RESOURCE: &str = "index.html";

pub(crate) const BUNDLE_DIR_ENV: &str = "OMNIFIX_BUNDLE_DIR";
pub(crate) const ROOT_DIR_ENV: &str = "OMNIFIX_ROOT";
pub(crate) const DEFAULT_ROOT_DIR_NAME: &str = ".omnifix";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;

pub(crate) const FRONTEND_PROBE_TIMEOUT_MS: u64 = 800;
