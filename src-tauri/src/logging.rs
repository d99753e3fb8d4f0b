use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

pub fn resolve_desktop_log_path(packaged_root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    let root = packaged_root_dir.unwrap_or_else(|| env::temp_dir().join("omnifix"));
    root.join("logs").join(file_name)
}

pub fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, false),
        category,
        message
    )
}

fn rotate_if_oversized(log_path: &Path, max_bytes: u64) -> Result<(), String> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat log file {}: {}",
                log_path.display(),
                error
            ))
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".1");
    fs::rename(log_path, PathBuf::from(&rotated)).map_err(|error| {
        format!(
            "Failed to rotate log file {}: {}",
            log_path.display(),
            error
        )
    })
}

pub fn append_log_line(log_path: &Path, line: &str, max_bytes: u64) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }
    rotate_if_oversized(log_path, max_bytes)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log {}: {}", log_path.display(), error))?;
    writeln!(file, "{line}")
        .map_err(|error| format!("Failed to write log {}: {}", log_path.display(), error))
}

pub fn append_categorized_log(log_path: &Path, category: &str, message: &str, max_bytes: u64) {
    let line = format_log_line(category, message);
    eprintln!("{line}");
    if let Err(error) = append_log_line(log_path, &line, max_bytes) {
        eprintln!("{error}");
    }
}
