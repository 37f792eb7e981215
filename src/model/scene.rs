use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::model::color::linearize;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Same vertex with its sRGB colour converted for a linear pipeline
    pub fn linearized(self) -> Self {
        Self { color: linearize(self.color), ..self }
    }
}

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 128.0 / 255.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// Vertex colours below are sRGB-encoded; `Scene::new` linearizes them.

/// Clockwise when seen from +Z.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { pos: [0.0, 3.0, 0.0], color: RED },
    Vertex { pos: [3.0, -2.0, 0.0], color: BLUE },
    Vertex { pos: [-3.0, -2.0, 0.0], color: GREEN },
];

/// Points from the triangle towards +Z, the side it faces.
pub const FRONT_INDICATOR: [Vertex; 2] = [
    Vertex { pos: [0.0, -1.0, 0.0], color: BLUE },
    Vertex { pos: [0.0, -1.0, 10.0], color: BLUE },
];

pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl MeshBuffer {
    pub fn upload(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        MeshBuffer {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }
}

/// GPU-resident geometry of the demo.
pub struct Scene {
    pub triangle: MeshBuffer,
    pub indicator: MeshBuffer,
}

impl Scene {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            triangle: MeshBuffer::upload(device, "triangle_vertices", &TRIANGLE.map(Vertex::linearized)),
            indicator: MeshBuffer::upload(device, "indicator_vertices", &FRONT_INDICATOR.map(Vertex::linearized)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_triangle_is_clockwise_from_front() {
        let [a, b, c] = TRIANGLE.map(|v| Vec3::from(v.pos));
        let normal = (b - a).cross(c - a);
        // Right-handed: counter-clockwise winding would point the normal at +Z
        assert!(normal.z < 0.0);
    }

    #[test]
    fn test_indicator_points_to_positive_z() {
        let dir = Vec3::from(FRONT_INDICATOR[1].pos) - Vec3::from(FRONT_INDICATOR[0].pos);
        assert!(dir.z > 0.0);
        assert_eq!(dir.x, 0.0);
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn test_vertex_layout_matches_struct() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
        assert_eq!(Vertex::ATTRIBUTES[1].offset, 12);
        assert_eq!(Vertex::layout().array_stride, 28);
    }

    #[test]
    fn test_linearized_matches_clear_colour_conversion() {
        let green = TRIANGLE[2].linearized();
        assert_eq!(green.pos, TRIANGLE[2].pos);
        assert!((green.color[1] - crate::model::color::srgb8_to_linear(128)).abs() < 1e-6);
        assert!(green.color[1] < 0.25);

        let red = TRIANGLE[0].linearized();
        assert_eq!(red.color, [1.0, 0.0, 0.0, 1.0]);
    }
}
