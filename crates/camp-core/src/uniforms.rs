//! GPU-side layout of a plane for external renderers.

use glam::Mat4;

use crate::plane::Plane;
use crate::transform::Transform;

/// GPU-compatible plane uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneUniforms {
    /// Model matrix mapping the unit quad to world space.
    pub model: [[f32; 4]; 4],
    /// World width and height of the plane.
    pub size: [f32; 2],
    /// Padding for alignment.
    pub _padding: [f32; 2],
}

impl PlaneUniforms {
    /// Builds uniforms from a plane's world transform and geometry size.
    #[must_use]
    pub fn new(world: &Transform, geometry_size: glam::Vec2) -> Self {
        let model = world.to_matrix() * Mat4::from_scale(geometry_size.extend(1.0));
        Self {
            model: model.to_cols_array_2d(),
            size: (geometry_size * world.scale.truncate()).abs().to_array(),
            _padding: [0.0; 2],
        }
    }
}

impl From<&Plane> for PlaneUniforms {
    fn from(plane: &Plane) -> Self {
        Self::new(plane.transform(), plane.size())
    }
}

impl Default for PlaneUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            size: [1.0, 1.0],
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_uniforms_from_plane() {
        let mut t = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        t.scale = Vec3::new(2.0, 3.0, 1.0);
        let plane = Plane::new("p").with_transform(t);
        let uniforms = PlaneUniforms::from(&plane);

        assert_eq!(uniforms.size, [4.0, 6.0]);
        assert_eq!(uniforms.model[3], [1.0, 2.0, 3.0, 1.0]);
        // Unit-quad corner (0.5, 0.5) lands on the plane's top-right corner
        let model = Mat4::from_cols_array_2d(&uniforms.model);
        let corner = model.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert!((corner - plane.corners()[2]).length() < 1e-6);
    }

    #[test]
    fn test_uniforms_are_plain_bytes() {
        let uniforms = PlaneUniforms::new(&Transform::identity(), Vec2::ONE);
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 80);
        assert_eq!(uniforms, PlaneUniforms::default());
    }
}
