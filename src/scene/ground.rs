use glam::{Mat4, Vec3};

/// Half-size of the default ground quad along X and Z.
pub const GROUND_HALF_EXTENT: f32 = 200.0;

/// Static ground quad at `y = 0`, drawn as two triangles.
#[derive(Debug, Clone)]
pub struct Ground {
    pub position: Vec3,
    vertices: [Vec3; 6],
}

impl Ground {
    #[must_use]
    pub fn new(half_extent: f32) -> Self {
        let e = half_extent;
        Self {
            position: Vec3::ZERO,
            vertices: [
                Vec3::new(e, 0.0, e),
                Vec3::new(-e, 0.0, e),
                Vec3::new(e, 0.0, -e),
                Vec3::new(-e, 0.0, -e),
                Vec3::new(e, 0.0, -e),
                Vec3::new(-e, 0.0, e),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Tightly packed `Float32x3` positions, ready for a vertex buffer upload.
    #[inline]
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new(GROUND_HALF_EXTENT)
    }
}
