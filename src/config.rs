use std::env;

use crate::controller::KeyBindings;
use crate::model::color::srgb8_to_linear;
use crate::model::OrbitCamera;

/// Startup settings. Defaults reproduce the classic sample look.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Linear RGBA
    pub clear_color: wgpu::Color,
    pub camera_start_angle: f32,
    pub camera_radius: f32,
    pub camera_angular_speed: f32,
    pub bindings: KeyBindings,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "FaceCulling".to_string(),
            width: 800,
            height: 480,
            // Cornflower blue
            clear_color: wgpu::Color {
                r: srgb8_to_linear(100) as f64,
                g: srgb8_to_linear(149) as f64,
                b: srgb8_to_linear(237) as f64,
                a: 1.0,
            },
            camera_start_angle: -0.5,
            camera_radius: 15.0,
            camera_angular_speed: 1.0,
            bindings: KeyBindings::default(),
        }
    }
}

fn parse_dimension(name: &str, value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            tracing::warn!(name, value, "ignoring invalid window dimension");
            None
        }
    }
}

impl DemoConfig {
    /// Defaults, with `FACECULL_WIDTH` / `FACECULL_HEIGHT` overriding the window size.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(env::var("FACECULL_WIDTH").ok(), env::var("FACECULL_HEIGHT").ok());
        config
    }

    fn apply_overrides(&mut self, width: Option<String>, height: Option<String>) {
        if let Some(w) = width.as_deref().and_then(|v| parse_dimension("FACECULL_WIDTH", v)) {
            self.width = w;
        }
        if let Some(h) = height.as_deref().and_then(|v| parse_dimension("FACECULL_HEIGHT", v)) {
            self.height = h;
        }
    }

    pub fn camera(&self, width: u32, height: u32) -> OrbitCamera {
        let mut camera = OrbitCamera::new(width, height);
        camera.angle = self.camera_start_angle;
        camera.radius = self.camera_radius;
        camera.angular_speed = self.camera_angular_speed;
        camera
    }
}
