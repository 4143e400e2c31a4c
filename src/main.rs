use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use freelook_demo::app::DemoApp;
use freelook_demo::cli::Cli;
use freelook_demo::config::DemoConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = DemoConfig::resolve(&cli)?;
    log::debug!("Config: {:?}", config);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    log::info!("Controls: mouse to look, WASD to move, Space/C up/down, scroll to zoom, Escape to quit");

    let mut app = DemoApp::new(config);
    event_loop.run_app(&mut app).context("Event loop terminated abnormally")?;

    Ok(())
}
