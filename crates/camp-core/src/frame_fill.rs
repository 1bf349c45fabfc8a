//! Depth offset and scale that make a bound plane fill the camera frame.
//!
//! A bound plane is a unit quad (corners at `±0.5`) in its own space. Scaling
//! it by the frustum cross-section size at depth `distance` and pushing it
//! `distance` units down the camera's -Z axis puts its corners exactly on the
//! frustum edges.

use glam::{Vec2, Vec3};

use crate::binder;
use crate::camera::Camera;
use crate::error::{CampError, Result};
use crate::fov::{self, FovResult};
use crate::render_frame::RenderFrame;

/// Corners of the normalized plane, counter-clockwise from bottom-left.
pub const UNIT_QUAD: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// Derived placement of a bound plane in camera-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameFill {
    /// Camera-local z of the plane, `-distance`.
    pub depth_offset: f32,
    /// Plane width in world units.
    pub scale_x: f32,
    /// Plane height in world units.
    pub scale_y: f32,
}

impl FrameFill {
    /// Scale as a vector.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }

    /// Plane origin in camera-local space.
    #[must_use]
    pub fn local_translation(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.depth_offset)
    }

    /// Builds the fill for an already resolved field of view.
    #[must_use]
    pub fn from_fov(fov: &FovResult, distance: f32) -> Self {
        let half = fov.half_extents_at(distance);
        Self {
            depth_offset: -distance,
            scale_x: 2.0 * half.x,
            scale_y: 2.0 * half.y,
        }
    }
}

/// Recomputes depth offset and scale from one snapshot of camera, frame and
/// distance.
pub fn recompute(camera: &Camera, frame: &RenderFrame, distance: f32) -> Result<FrameFill> {
    if !(distance.is_finite() && distance >= 0.0) {
        return Err(CampError::InvalidDistance(distance));
    }
    let fov = fov::resolve(camera, frame)?;
    Ok(FrameFill::from_fov(&fov, distance))
}

/// World-space corners of the frustum cross-section at `distance`.
pub fn frustum_corners(camera: &Camera, frame: &RenderFrame, distance: f32) -> Result<[Vec3; 4]> {
    let half = fov::resolve(camera, frame)?.half_extents_at(distance);
    Ok(UNIT_QUAD.map(|c| {
        let sign = c.signum();
        camera.local_to_world(Vec3::new(sign.x * half.x, sign.y * half.y, -distance))
    }))
}

/// World-space corners of a plane locked to `camera` with the given fill.
#[must_use]
pub fn plane_corners(camera: &Camera, fill: &FrameFill) -> [Vec3; 4] {
    let world = binder::locked_transform(camera, fill);
    UNIT_QUAD.map(|c| world.transform_point(c.extend(0.0)))
}
