// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "freecam")]
#[command(about = "First-person free camera rendering demo", long_about = None)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a shader file (defaults to the embedded basic shader)
    #[arg(long)]
    pub shader: Option<PathBuf>,

    /// Override the window width from the config
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the window height from the config
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,
}

impl Cli {
    /// Fold CLI overrides into a loaded config
    pub fn apply_to(&self, config: &mut crate::config::DemoConfig) {
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        if let Some(fov) = self.fov {
            config.fov_degrees = fov;
        }
    }
}
