pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod lighting;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod types;

pub use camera::{CameraMovement, FreeLookCamera};
