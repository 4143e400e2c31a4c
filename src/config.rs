use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;

use crate::camera::{self, FreeLookCamera};
use crate::cli::Cli;
use crate::scene::CLEAR_COLOR;

/// Startup settings. Read once; nothing is ever written back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub assets: PathBuf,
    pub grab_cursor: bool,
    pub clear_color: [f32; 3],
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            assets: PathBuf::from("assets/textures"),
            grab_cursor: true,
            clear_color: CLEAR_COLOR,
            camera: CameraConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: camera::DEFAULT_YAW,
            pitch: camera::DEFAULT_PITCH,
            movement_speed: camera::DEFAULT_SPEED,
            mouse_sensitivity: camera::DEFAULT_SENSITIVITY,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> FreeLookCamera {
        FreeLookCamera::with_orientation(Vec3::from_array(self.position), Vec3::Y, self.yaw, self.pitch)
            .with_movement_speed(self.movement_speed)
            .with_mouse_sensitivity(self.mouse_sensitivity)
    }
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid demo config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("In {}", path.display()))
    }

    /// File settings (or defaults) with command-line overrides applied
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(assets) = &cli.assets {
            self.assets = assets.clone();
        }
        if let Some(speed) = cli.speed {
            self.camera.movement_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.camera.mouse_sensitivity = sensitivity;
        }
        if cli.no_grab {
            self.grab_cursor = false;
        }
    }
}
