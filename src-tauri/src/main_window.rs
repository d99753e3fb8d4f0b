use tauri::{AppHandle, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::WindowPlan;

pub(crate) fn build_main_window<R, F>(
    app_handle: &AppHandle<R>,
    plan: &WindowPlan,
    log: F,
) -> Result<WebviewWindow<R>, String>
where
    R: Runtime,
    F: Fn(&str),
{
    log(&format!(
        "creating window '{}' -> {} ({}x{}, resizable={})",
        plan.label, plan.url, plan.width, plan.height, plan.resizable
    ));

    WebviewWindowBuilder::new(
        app_handle,
        plan.label.as_str(),
        WebviewUrl::External(plan.url.clone()),
    )
    .title(plan.title.as_str())
    .inner_size(plan.width, plan.height)
    .background_color(plan.background)
    .resizable(plan.resizable)
    .build()
    .map_err(|error| format!("Failed to create window '{}': {error}", plan.label))
}
