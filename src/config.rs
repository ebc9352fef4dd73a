use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Tunable demo settings, loadable from a JSON file.
///
/// Every field has a default, so a config file only needs the values it
/// wants to change. Projection parameters feed the camera once at startup
/// and are immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// World units per movement impulse
    pub movement_speed: f32,
    /// Radians of rotation per thresholded device unit of cursor motion
    pub mouse_sensitivity: f32,
    /// Cursor jitter threshold in device units
    pub mouse_delta_min: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 1280,
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
            movement_speed: 1.0,
            mouse_sensitivity: 0.01,
            mouse_delta_min: 2.0,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}
