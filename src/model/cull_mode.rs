use std::fmt;

/// Which triangle winding the rasterizer discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    None,
    CullClockwise,
    #[default]
    CullCounterClockwise,
}

impl CullMode {
    /// Every mode, in cycle order starting from the default.
    pub const ALL: [CullMode; 3] = [
        CullMode::CullCounterClockwise,
        CullMode::CullClockwise,
        CullMode::None,
    ];

    /// Next mode in the fixed cycle CCW -> CW -> None -> CCW.
    pub fn next(self) -> Self {
        match self {
            CullMode::CullCounterClockwise => CullMode::CullClockwise,
            CullMode::CullClockwise => CullMode::None,
            CullMode::None => CullMode::CullCounterClockwise,
        }
    }

    /// Position of this mode in [`CullMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            CullMode::CullCounterClockwise => 0,
            CullMode::CullClockwise => 1,
            CullMode::None => 2,
        }
    }

    /// Rasterizer face to cull, assuming pipelines use `FrontFace::Ccw`.
    pub fn face(self) -> Option<wgpu::Face> {
        match self {
            CullMode::CullCounterClockwise => Some(wgpu::Face::Front),
            CullMode::CullClockwise => Some(wgpu::Face::Back),
            CullMode::None => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CullMode::None => "None",
            CullMode::CullClockwise => "CullClockwise",
            CullMode::CullCounterClockwise => "CullCounterClockwise",
        }
    }
}

impl fmt::Display for CullMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
