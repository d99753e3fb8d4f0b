#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod frontend_probe;
mod logging;
mod main_window;
mod runtime_paths;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_desktop_log, append_startup_log};
pub(crate) use app_types::{WindowConfig, WindowPlan};

fn main() {
    app_runtime::run();
}
