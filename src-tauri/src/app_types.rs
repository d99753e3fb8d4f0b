use serde::Serialize;
use tauri::window::Color;
use url::Url;

use crate::{
    FRONTEND_URL, MAIN_WINDOW_BACKGROUND, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL,
    MAIN_WINDOW_RESIZABLE, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

/// Window settings as written in source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WindowConfig {
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
    pub(crate) url: &'static str,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) background_color: &'static str,
    pub(crate) resizable: bool,
}

/// Validated window settings, ready for `WebviewWindowBuilder`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowPlan {
    pub(crate) label: String,
    pub(crate) title: String,
    pub(crate) url: Url,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) background: Color,
    pub(crate) resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            label: MAIN_WINDOW_LABEL,
            title: MAIN_WINDOW_TITLE,
            url: FRONTEND_URL,
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            background_color: MAIN_WINDOW_BACKGROUND,
            resizable: MAIN_WINDOW_RESIZABLE,
        }
    }
}

impl WindowConfig {
    pub(crate) fn to_plan(&self) -> Result<WindowPlan, String> {
        let url = parse_window_url(self.url)?;
        let background = parse_hex_color(self.background_color)?;
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Invalid window size {}x{}: both dimensions must be non-zero.",
                self.width, self.height
            ));
        }

        Ok(WindowPlan {
            label: self.label.to_string(),
            title: self.title.to_string(),
            url,
            width: f64::from(self.width),
            height: f64::from(self.height),
            background,
            resizable: self.resizable,
        })
    }

    pub(crate) fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|error| format!("<unserializable: {error}>"))
    }
}

fn parse_window_url(raw_url: &str) -> Result<Url, String> {
    let parsed = Url::parse(raw_url.trim())
        .map_err(|error| format!("Invalid window URL '{raw_url}': {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported window URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`. Alpha defaults to opaque.
pub(crate) fn parse_hex_color(raw: &str) -> Result<Color, String> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!(
            "Invalid color '{raw}': expected #RRGGBB or #RRGGBBAA."
        ));
    }

    let channel = |index: usize| {
        u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16)
            .map_err(|error| format!("Invalid color '{raw}': {error}"))
    };
    let alpha = if digits.len() == 8 { channel(3)? } else { 255 };
    Ok(Color(channel(0)?, channel(1)?, channel(2)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_config_uses_literal_values() {
        let config = WindowConfig::default();
        assert_eq!(config.label, "main");
        assert_eq!(config.title, "OmniFix AI | Suite Forense v3.0");
        assert_eq!(config.url, "http://localhost:3000");
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert_eq!(config.background_color, "#050507");
        assert!(config.resizable);
    }

    #[test]
    fn default_window_plan_carries_literal_values() {
        let plan = WindowConfig::default()
            .to_plan()
            .expect("default config should validate");
        assert_eq!(plan.title, "OmniFix AI | Suite Forense v3.0");
        assert_eq!(plan.url.host_str(), Some("localhost"));
        assert_eq!(plan.url.port(), Some(3000));
        assert_eq!(plan.width, 1200.0);
        assert_eq!(plan.height, 800.0);
        assert_eq!(plan.background, Color(5, 5, 7, 255));
        assert!(plan.resizable);
    }

    #[test]
    fn to_plan_rejects_non_http_url() {
        let config = WindowConfig {
            url: "file:///tmp/index.html",
            ..WindowConfig::default()
        };
        let error = config.to_plan().expect_err("file scheme should be rejected");
        assert!(error.contains("file"));
    }

    #[test]
    fn to_plan_rejects_zero_size() {
        let config = WindowConfig {
            height: 0,
            ..WindowConfig::default()
        };
        assert!(config.to_plan().is_err());
    }

    #[test]
    fn parse_hex_color_accepts_rgb_and_rgba() {
        assert_eq!(parse_hex_color("#050507"), Ok(Color(5, 5, 7, 255)));
        assert_eq!(parse_hex_color(" 22d3ee80 "), Ok(Color(0x22, 0xd3, 0xee, 0x80)));
    }

    #[test]
    fn parse_hex_color_rejects_malformed_input() {
        assert!(parse_hex_color("#05050").is_err());
        assert!(parse_hex_color("#zz0507").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn describe_serializes_camel_case_fields() {
        let described = WindowConfig::default().describe();
        assert!(described.contains("\"backgroundColor\":\"#050507\""));
        assert!(described.contains("\"resizable\":true"));
    }
}
