//! Rigid coupling between a plane and a camera.
//!
//! Binding is two separate steps. [`freeze`] runs exactly once, at bind time,
//! and clears whatever relative offset the plane had to its camera. After
//! that the couplings are pure functions of the camera pose ([`locked_transform`]):
//! the plane rotation *is* the camera rotation and its camera-local x and y
//! are zero, so nothing is copied and nothing can drift. Running the freeze
//! again would wipe the frame-fill result, so it is never part of a recompute.

use std::fmt;

use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::distance::DistanceProxy;
use crate::error::Result;
use crate::frame_fill::{self, FrameFill};
use crate::plane::Plane;
use crate::render_frame::RenderFrame;
use crate::transform::Transform;

/// Stable identifier of a plane-to-camera binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingHandle(pub(crate) u64);

impl BindingHandle {
    /// Raw numeric id.
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BindingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the freeze step recorded about the plane's pre-bind state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frozen {
    /// World size of the plane before it was normalized to a unit quad.
    pub source_size: Vec2,
    /// Distance from the camera to the plane's pre-bind position.
    pub measured_distance: f32,
}

/// Cancels the plane's pre-existing offset to the camera.
///
/// Bakes the plane's scale into its geometry and normalizes it to a unit
/// quad, then resets its rotation and lateral offset so the bound state
/// starts clean. The depth survives as the measured distance.
pub fn freeze(plane: &mut Plane, camera: &Camera) -> Frozen {
    let measured_distance = camera.position().distance(plane.transform().translation);
    let source_size = plane.normalize();
    plane.set_transform(Transform::from_translation_rotation(
        camera.local_to_world(Vec3::new(0.0, 0.0, -measured_distance)),
        camera.rotation(),
    ));
    log::debug!(
        "froze plane '{}' to camera '{}': source size {source_size}, distance {measured_distance}",
        plane.name(),
        camera.name()
    );
    Frozen {
        source_size,
        measured_distance,
    }
}

/// World transform of a plane locked to `camera` with the given fill.
///
/// Rotation is the camera rotation verbatim; translation is the camera
/// position pushed `-depth_offset` along the camera's viewing axis.
#[must_use]
pub fn locked_transform(camera: &Camera, fill: &FrameFill) -> Transform {
    Transform {
        translation: camera.local_to_world(fill.local_translation()),
        rotation: camera.rotation(),
        scale: Vec3::new(fill.scale_x, fill.scale_y, 1.0),
    }
}

/// A live plane-to-camera binding.
#[derive(Debug, Clone)]
pub struct Binding {
    handle: BindingHandle,
    plane: String,
    proxy: DistanceProxy,
    frozen: Frozen,
    fill: FrameFill,
}

impl Binding {
    /// Binds `plane` to `camera`.
    ///
    /// The fill is computed before the plane is touched, so a camera that
    /// cannot produce a field of view leaves the plane as it was.
    pub fn establish(
        handle: BindingHandle,
        plane: &mut Plane,
        camera: &Camera,
        frame: &RenderFrame,
        distance_override: Option<f32>,
    ) -> Result<Self> {
        let measured = camera.position().distance(plane.transform().translation);
        let distance = distance_override.unwrap_or(measured);
        let proxy = DistanceProxy::new(camera.name(), distance)?;
        let fill = frame_fill::recompute(camera, frame, distance)?;

        let frozen = freeze(plane, camera);

        Ok(Self {
            handle,
            plane: plane.name().to_string(),
            proxy,
            frozen,
            fill,
        })
    }

    /// Returns the binding handle.
    pub fn handle(&self) -> BindingHandle {
        self.handle
    }

    /// Name of the bound plane.
    pub fn plane(&self) -> &str {
        &self.plane
    }

    /// Name of the camera the plane is bound to.
    pub fn camera(&self) -> &str {
        self.proxy.camera()
    }

    /// The distance proxy.
    pub fn proxy(&self) -> &DistanceProxy {
        &self.proxy
    }

    /// Current distance.
    pub fn distance(&self) -> f32 {
        self.proxy.get_distance()
    }

    /// What the freeze step recorded.
    pub fn frozen(&self) -> &Frozen {
        &self.frozen
    }

    /// Last computed fill.
    pub fn fill(&self) -> &FrameFill {
        &self.fill
    }

    /// Re-derives the fill from the current camera and frame.
    ///
    /// Fails without side effects.
    pub fn refresh(&mut self, camera: &Camera, frame: &RenderFrame) -> Result<()> {
        self.fill = frame_fill::recompute(camera, frame, self.proxy.get_distance())?;
        Ok(())
    }

    /// Moves the distance anchor and recomputes the fill.
    ///
    /// On error neither the distance nor the fill changes.
    pub fn set_distance(&mut self, distance: f32, camera: &Camera, frame: &RenderFrame) -> Result<()> {
        let fill = frame_fill::recompute(camera, frame, distance)?;
        self.proxy.set_distance(distance)?;
        self.fill = fill;
        Ok(())
    }

    /// Current world transform of the bound plane.
    pub fn world_transform(&self, camera: &Camera) -> Transform {
        locked_transform(camera, &self.fill)
    }

    /// Drops the couplings; the plane keeps its last computed world transform.
    pub fn release(self, plane: &mut Plane, camera: &Camera) {
        plane.set_transform(self.world_transform(camera));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Projection, SensorFit};
    use crate::error::CampError;
    use glam::Quat;

    fn camera() -> Camera {
        let mut camera = Camera::new("Camera")
            .with_projection(Projection::perspective(18.0, 36.0, 24.0))
            .with_sensor_fit(SensorFit::Horizontal);
        camera.set_position(Vec3::new(0.0, 1.0, 10.0));
        camera
    }

    fn tilted_plane() -> Plane {
        let mut t = Transform::from_translation(Vec3::new(0.0, 1.0, 6.0));
        t.rotation = Quat::from_rotation_x(0.4);
        t.scale = Vec3::new(3.0, 2.0, 1.0);
        Plane::new("backdrop").with_transform(t)
    }

    #[test]
    fn test_freeze_measures_distance_and_normalizes() {
        let mut plane = tilted_plane();
        let cam = camera();
        let frozen = freeze(&mut plane, &cam);
        assert!((frozen.measured_distance - 4.0).abs() < 1e-6);
        assert_eq!(frozen.source_size, Vec2::new(6.0, 4.0));
        assert_eq!(plane.size(), Vec2::ONE);
        assert_eq!(plane.transform().rotation, cam.rotation());
        let local = cam.world_to_local(plane.transform().translation);
        assert!(local.truncate().length() < 1e-6);
    }

    #[test]
    fn test_establish_uses_measured_distance() {
        let mut plane = tilted_plane();
        let cam = camera();
        let binding = Binding::establish(
            BindingHandle(1),
            &mut plane,
            &cam,
            &RenderFrame::new(1920, 1080),
            None,
        )
        .unwrap();
        assert_eq!(binding.plane(), "backdrop");
        assert_eq!(binding.camera(), "Camera");
        assert!((binding.distance() - 4.0).abs() < 1e-6);
        assert!((binding.fill().scale_x - 8.0).abs() < 1e-4);
        assert!((binding.fill().scale_y - 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_establish_invalid_camera_leaves_plane_untouched() {
        let mut plane = tilted_plane();
        let before = plane.clone();
        let cam = camera().with_projection(Projection::perspective(0.0, 36.0, 24.0));
        let result = Binding::establish(
            BindingHandle(1),
            &mut plane,
            &cam,
            &RenderFrame::default(),
            Some(5.0),
        );
        assert!(matches!(result, Err(CampError::InvalidCameraParameters(_))));
        assert_eq!(plane, before);
    }

    #[test]
    fn test_rotation_lock_has_no_drift() {
        let mut plane = tilted_plane();
        let mut cam = camera();
        let frame = RenderFrame::default();
        let binding =
            Binding::establish(BindingHandle(7), &mut plane, &cam, &frame, Some(3.0)).unwrap();

        let delta = Quat::from_euler(glam::EulerRot::YXZ, 0.37, -0.21, 0.05);
        for _ in 0..1000 {
            let mut t = *cam.transform();
            t.rotate(delta);
            cam.set_transform(t);
            let world = binding.world_transform(&cam);
            assert_eq!(world.rotation, cam.rotation());
            let local = cam.world_to_local(world.translation);
            assert!(local.truncate().length() < 1e-4);
            assert!((local.z + 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_set_distance_rejects_negative() {
        let mut plane = tilted_plane();
        let cam = camera();
        let frame = RenderFrame::default();
        let mut binding =
            Binding::establish(BindingHandle(2), &mut plane, &cam, &frame, Some(2.0)).unwrap();
        let fill = *binding.fill();
        assert!(matches!(
            binding.set_distance(-1.0, &cam, &frame),
            Err(CampError::InvalidDistance(_))
        ));
        assert_eq!(binding.distance(), 2.0);
        assert_eq!(*binding.fill(), fill);

        binding.set_distance(6.0, &cam, &frame).unwrap();
        assert_eq!(binding.distance(), 6.0);
        assert_eq!(binding.fill().depth_offset, -6.0);
    }

    #[test]
    fn test_release_keeps_last_world_transform() {
        let mut plane = tilted_plane();
        let cam = camera();
        let frame = RenderFrame::default();
        let binding =
            Binding::establish(BindingHandle(3), &mut plane, &cam, &frame, Some(5.0)).unwrap();
        let world = binding.world_transform(&cam);
        binding.release(&mut plane, &cam);
        assert_eq!(*plane.transform(), world);
        assert_eq!(plane.world_size(), Vec2::new(world.scale.x, world.scale.y));
    }
}
