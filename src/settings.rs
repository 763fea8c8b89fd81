//! Window and presentation settings
//!
//! Gameplay constants live in `consts` and are not configurable. Everything
//! here only affects how the game is shown.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Directory holding `main.vs` and `main.fs`
    pub shader_dir: PathBuf,
    /// Background RGBA
    pub clear_color: [f64; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            vsync: true,
            shader_dir: PathBuf::from("shaders"),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON override
    pub const ENV_VAR: &'static str = "MO_PONG_SETTINGS";

    /// Load settings, applying the JSON override from `MO_PONG_SETTINGS` if set
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Parse a (possibly partial) JSON override; malformed input falls back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::ENV_VAR);
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {e}", Self::ENV_VAR);
                Self::default()
            }
        }
    }

    /// Zero-sized windows are replaced with the default size
    fn sanitized(mut self) -> Self {
        if self.width == 0 || self.height == 0 {
            log::warn!(
                "Window size {}x{} is invalid, using {SCREEN_WIDTH}x{SCREEN_HEIGHT}",
                self.width,
                self.height
            );
            self.width = SCREEN_WIDTH;
            self.height = SCREEN_HEIGHT;
        }
        self
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color { r, g, b, a }
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
