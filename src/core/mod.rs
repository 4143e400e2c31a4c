pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;

pub use clock::{Clock, FpsCounter, FrameInfo};
pub use controller::{movement_intents, Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::{PointerTracker, WinitController};
