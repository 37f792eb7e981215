use glam::Mat4;

use crate::controller::cull_mode_controller::CullModeController;
use crate::controller::input::{is_advance_requested, InputSnapshot};
use crate::model::{CullMode, OrbitCamera};

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_matrix(view_proj: Mat4) -> Self {
        Self { view_proj: view_proj.to_cols_array_2d() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// Read-only view of the frame state handed to the draw step
#[derive(Debug, Clone, Copy)]
pub struct FrameData {
    pub cull_mode: CullMode,
    pub view_proj: Mat4,
}

/// Per-frame update state: the cull mode controller and the orbiting camera
pub struct FrameLoop {
    pub cull: CullModeController,
    pub camera: OrbitCamera,
}

impl FrameLoop {
    pub fn new(camera: OrbitCamera) -> Self {
        Self {
            cull: CullModeController::new(),
            camera,
        }
    }

    /// Advance one frame. Input must already be sampled for this frame.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> FrameOutcome {
        if input.exit_requested {
            tracing::info!("exit requested");
            return FrameOutcome::Exit;
        }

        let dt = dt.max(0.0);
        self.cull.tick(is_advance_requested(input));
        self.camera.advance(dt);

        FrameOutcome::Continue
    }

    pub fn frame_data(&self) -> FrameData {
        FrameData {
            cull_mode: self.cull.current_mode(),
            view_proj: self.camera.view_proj(),
        }
    }
}
