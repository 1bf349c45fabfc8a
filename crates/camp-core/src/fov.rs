//! Effective field of view of a camera for a given render output.
//!
//! The sensor fit mode decides which frame axis is primary. The primary axis
//! takes its extent straight from the optics (sensor dimension over focal
//! length, or the orthographic scale); the other axis is derived through the
//! output aspect ratio.

use glam::Vec2;

use crate::camera::{Camera, FitAxis, Projection};
use crate::error::Result;
use crate::render_frame::RenderFrame;

/// Field of view resolved against a render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FovResult {
    /// Half angles of a perspective frustum, in radians.
    Perspective {
        /// Half of the horizontal field of view.
        half_width_angle: f32,
        /// Half of the vertical field of view.
        half_height_angle: f32,
    },
    /// Half extents of an orthographic frustum, in world units.
    Orthographic {
        /// Half of the horizontal extent.
        half_width_extent: f32,
        /// Half of the vertical extent.
        half_height_extent: f32,
    },
}

impl FovResult {
    /// Half width and half height of the frustum cross-section at `distance`.
    ///
    /// Orthographic extents ignore the distance.
    #[must_use]
    pub fn half_extents_at(&self, distance: f32) -> Vec2 {
        match *self {
            FovResult::Perspective {
                half_width_angle,
                half_height_angle,
            } => Vec2::new(
                distance * half_width_angle.tan(),
                distance * half_height_angle.tan(),
            ),
            FovResult::Orthographic {
                half_width_extent,
                half_height_extent,
            } => Vec2::new(half_width_extent, half_height_extent),
        }
    }

    /// Full horizontal and vertical angles in degrees, if perspective.
    #[must_use]
    pub fn angles_degrees(&self) -> Option<Vec2> {
        match *self {
            FovResult::Perspective {
                half_width_angle,
                half_height_angle,
            } => Some(Vec2::new(
                (2.0 * half_width_angle).to_degrees(),
                (2.0 * half_height_angle).to_degrees(),
            )),
            FovResult::Orthographic { .. } => None,
        }
    }

    /// Returns true when the extents do not depend on distance.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self, FovResult::Orthographic { .. })
    }
}

/// Resolves the camera's field of view for the given output.
///
/// Pure: the result depends only on the camera optics and the frame.
pub fn resolve(camera: &Camera, frame: &RenderFrame) -> Result<FovResult> {
    let projection = camera.projection();
    projection.validate()?;
    let aspect = frame.aspect_ratio()?;
    let axis = camera.sensor_fit().axis(aspect);

    let fov = match *projection {
        Projection::Perspective {
            focal_length,
            sensor_width,
            sensor_height,
        } => {
            // Tangents of the half angles; the aspect relation is linear in them.
            let (tan_w, tan_h) = match axis {
                FitAxis::Horizontal => {
                    let tan_w = sensor_width / (2.0 * focal_length);
                    (tan_w, tan_w / aspect)
                }
                FitAxis::Vertical => {
                    let tan_h = sensor_height / (2.0 * focal_length);
                    (tan_h * aspect, tan_h)
                }
            };
            FovResult::Perspective {
                half_width_angle: tan_w.atan(),
                half_height_angle: tan_h.atan(),
            }
        }
        Projection::Orthographic { scale } => {
            let (width, height) = match axis {
                FitAxis::Horizontal => (scale, scale / aspect),
                FitAxis::Vertical => (scale * aspect, scale),
            };
            FovResult::Orthographic {
                half_width_extent: width * 0.5,
                half_height_extent: height * 0.5,
            }
        }
    };

    log::trace!("resolved {:?} for camera '{}' at aspect {aspect}", fov, camera.name());
    Ok(fov)
}
