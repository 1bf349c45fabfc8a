//! The virtual distance between a bound plane and its camera.

use glam::Vec3;

use crate::camera::Camera;
use crate::error::{CampError, Result};

/// A scalar distance carried by an anchor rigidly attached to a camera.
///
/// The anchor sits on the camera's viewing axis, `distance` units in front of
/// the lens. Negative distances would put it behind the camera and are
/// rejected rather than negated.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceProxy {
    camera: String,
    distance: f32,
}

impl DistanceProxy {
    /// Attaches a new anchor to the named camera.
    pub fn new(camera: impl Into<String>, distance: f32) -> Result<Self> {
        check(distance)?;
        Ok(Self {
            camera: camera.into(),
            distance,
        })
    }

    /// Name of the camera the anchor is attached to.
    pub fn camera(&self) -> &str {
        &self.camera
    }

    /// Returns the current distance.
    pub fn get_distance(&self) -> f32 {
        self.distance
    }

    /// Sets the distance; on error the previous value is kept.
    pub fn set_distance(&mut self, distance: f32) -> Result<()> {
        check(distance)?;
        self.distance = distance;
        Ok(())
    }

    /// Anchor position in camera-local space.
    pub fn anchor_local(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, -self.distance)
    }

    /// Anchor position in world space.
    pub fn anchor_world(&self, camera: &Camera) -> Vec3 {
        camera.local_to_world(self.anchor_local())
    }
}

fn check(distance: f32) -> Result<()> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(())
    } else {
        Err(CampError::InvalidDistance(distance))
    }
}
