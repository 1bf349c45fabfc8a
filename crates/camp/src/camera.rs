//! Camera registration and editing.
//!
//! Every edit goes through the scene, so planes bound to the camera are
//! refit in the same call. An edit that would leave a bound plane without a
//! valid field of view is rejected and the camera keeps its previous state.
//!
//! # Example
//!
//! ```no_run
//! use camp_rs::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     let camera = register_camera(
//!         Camera::new("Camera").with_projection(Projection::perspective(35.0, 36.0, 24.0)),
//!     )?;
//!     camera.set_position(Vec3::new(0.0, 1.5, 8.0))?;
//!     camera.set_sensor_fit(SensorFit::Horizontal)?;
//!     Ok(())
//! }
//! ```

use camp_core::state::{try_with_context, try_with_context_mut};

use crate::{Camera, CampError, Projection, Quat, Result, SensorFit, Transform, Vec3};

/// Registers a camera.
pub fn register_camera(camera: Camera) -> Result<CameraHandle> {
    let name = camera.name().to_string();
    try_with_context_mut(|ctx| ctx.scene.add_camera(camera))??;
    Ok(CameraHandle { name })
}

/// Gets a registered camera by name.
#[must_use]
pub fn get_camera(name: &str) -> Option<CameraHandle> {
    try_with_context(|ctx| ctx.scene.camera(name).is_some())
        .ok()
        .filter(|exists| *exists)
        .map(|_| CameraHandle {
            name: name.to_string(),
        })
}

/// Removes a camera, unbinding every plane bound to it.
pub fn remove_camera(name: &str) -> Result<()> {
    try_with_context_mut(|ctx| ctx.scene.remove_camera(name).map(|_| ()))?
}

/// Handle for a registered camera.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraHandle {
    name: String,
}

impl CameraHandle {
    /// Returns the name of this camera.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a snapshot of the camera.
    pub fn camera(&self) -> Result<Camera> {
        try_with_context(|ctx| ctx.scene.camera(&self.name).cloned())?
            .ok_or_else(|| CampError::CameraNotFound(self.name.clone()))
    }

    /// Applies an arbitrary edit to the camera.
    pub fn update<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Camera),
    {
        try_with_context_mut(|ctx| ctx.scene.update_camera(&self.name, edit))?
    }

    /// Sets the projection.
    pub fn set_projection(&self, projection: Projection) -> Result<()> {
        self.update(|camera| camera.set_projection(projection))
    }

    /// Sets the sensor fit mode.
    pub fn set_sensor_fit(&self, sensor_fit: SensorFit) -> Result<()> {
        self.update(|camera| camera.set_sensor_fit(sensor_fit))
    }

    /// Sets the world pose.
    pub fn set_transform(&self, transform: Transform) -> Result<()> {
        self.update(|camera| camera.set_transform(transform))
    }

    /// Sets the world position.
    pub fn set_position(&self, position: Vec3) -> Result<()> {
        self.update(|camera| camera.set_position(position))
    }

    /// Sets the world rotation.
    pub fn set_rotation(&self, rotation: Quat) -> Result<()> {
        self.update(|camera| camera.set_rotation(rotation))
    }

    /// Rotates the camera by `delta` in world space.
    pub fn rotate(&self, delta: Quat) -> Result<()> {
        self.update(|camera| {
            let mut transform = *camera.transform();
            transform.rotate(delta);
            camera.set_transform(transform);
        })
    }
}
