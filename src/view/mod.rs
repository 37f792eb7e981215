// VIEW: GPU setup and rendering
pub mod gpu_init;
pub mod render;

pub use gpu_init::GpuContext;
pub use render::{OverlayFrame, Renderer};
