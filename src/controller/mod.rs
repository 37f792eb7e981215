// CONTROLLER: Input sampling, cull mode state machine and per-frame update
pub mod cull_mode_controller;
pub mod frame_loop;
pub mod gamepad;
pub mod input;

pub use cull_mode_controller::CullModeController;
pub use frame_loop::{CameraUniform, FrameData, FrameLoop, FrameOutcome};
pub use gamepad::{GamepadButtons, GamepadInput};
pub use input::{is_advance_requested, InputEvent, InputSnapshot, InputState, KeyBindings};
