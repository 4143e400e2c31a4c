// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "freelook-demo")]
#[command(about = "Lit cubes with a free-look camera", long_about = None)]
pub struct Cli {
    /// JSON file with demo settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Directory holding container2.png and container2_specular.png
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Camera movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Mouse look sensitivity
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Leave the cursor free instead of capturing it
    #[arg(long = "no-grab", default_value = "false")]
    pub no_grab: bool,
}
