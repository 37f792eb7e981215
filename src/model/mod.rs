// MODEL: Demo state and static geometry
pub mod camera;
pub mod color;
pub mod cull_mode;
pub mod scene;

pub use camera::OrbitCamera;
pub use cull_mode::CullMode;
pub use scene::{MeshBuffer, Scene, Vertex};
