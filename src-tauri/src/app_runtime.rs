use tauri::{Manager, RunEvent};

use crate::{
    append_desktop_log, append_startup_log, frontend_probe, main_window, runtime_paths,
    WindowConfig, DESKTOP_LOG_FILE, FRONTEND_PROBE_TIMEOUT_MS, INDEX_HTML_RESOURCE,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    let window_config = WindowConfig::default();
    append_startup_log(&format!("window config: {}", window_config.describe()));

    tauri::Builder::default()
        .setup(move |app| {
            let app_handle = app.handle().clone();

            let bundle_dir = runtime_paths::packaged_bundle_dir(&app_handle);
            let html_file =
                runtime_paths::resolve_resource_path(INDEX_HTML_RESOURCE, bundle_dir.as_deref());
            append_startup_log(&format!(
                "resolved {} (packaged={}): {}",
                INDEX_HTML_RESOURCE,
                bundle_dir.is_some(),
                html_file.display()
            ));

            let plan = window_config.to_plan().map_err(|error| {
                append_startup_log(&format!("invalid window config: {error}"));
                error
            })?;
            main_window::build_main_window(&app_handle, &plan, append_startup_log).map_err(
                |error| {
                    append_startup_log(&error);
                    error
                },
            )?;

            frontend_probe::spawn_frontend_probe(
                plan.url.clone(),
                FRONTEND_PROBE_TIMEOUT_MS,
                append_startup_log,
            );
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                let open_windows = app_handle.webview_windows().len();
                append_desktop_log(&format!(
                    "exit requested with {open_windows} open window(s)"
                ));
            }
            RunEvent::Exit => append_desktop_log("event loop finished, exiting"),
            _ => {}
        });
}
