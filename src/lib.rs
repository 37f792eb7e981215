// Re-export all public modules so they can be used from main.rs
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

// MVC Architecture
pub mod controller;
pub mod model;
pub mod view;

pub use config::DemoConfig;
pub use controller::{CullModeController, FrameLoop, FrameOutcome, InputSnapshot};
pub use error::AppError;
pub use model::CullMode;
