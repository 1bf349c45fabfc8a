//! Camera optics and pose as seen by the binding engine.
//!
//! The camera is read-only input: the core never moves it, it only reacts
//! when the surrounding scene changes its pose or optics. Camera-local space
//! looks down -Z with +Y up, so a point in front of the camera at distance
//! `d` sits at `(0, 0, -d)`.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{CampError, Result};
use crate::transform::Transform;

/// Which sensor dimension is held fixed when deriving the field of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SensorFit {
    /// Width for landscape output, height for portrait output.
    #[default]
    Auto,
    /// Sensor width maps to the horizontal field of view.
    Horizontal,
    /// Sensor height maps to the vertical field of view.
    Vertical,
}

/// Sensor axis resolved from a [`SensorFit`] and an output aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitAxis {
    /// The horizontal extent is primary.
    Horizontal,
    /// The vertical extent is primary.
    Vertical,
}

impl SensorFit {
    /// Resolves the fit mode against the output aspect ratio (width / height).
    #[must_use]
    pub fn axis(self, aspect: f32) -> FitAxis {
        match self {
            SensorFit::Horizontal => FitAxis::Horizontal,
            SensorFit::Vertical => FitAxis::Vertical,
            SensorFit::Auto if aspect >= 1.0 => FitAxis::Horizontal,
            SensorFit::Auto => FitAxis::Vertical,
        }
    }
}

/// Camera projection parameters.
///
/// Focal length and sensor size share a unit (millimetres by convention);
/// only their ratio matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Pinhole camera.
    Perspective {
        /// Lens focal length.
        focal_length: f32,
        /// Physical sensor width.
        sensor_width: f32,
        /// Physical sensor height.
        sensor_height: f32,
    },
    /// Parallel projection.
    Orthographic {
        /// Full extent of the larger frustum side, in world units.
        scale: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            focal_length: 50.0,
            sensor_width: 36.0,
            sensor_height: 24.0,
        }
    }
}

impl Projection {
    /// Creates a perspective projection.
    #[must_use]
    pub fn perspective(focal_length: f32, sensor_width: f32, sensor_height: f32) -> Self {
        Projection::Perspective {
            focal_length,
            sensor_width,
            sensor_height,
        }
    }

    /// Creates an orthographic projection.
    #[must_use]
    pub fn orthographic(scale: f32) -> Self {
        Projection::Orthographic { scale }
    }

    /// Returns true for perspective projections.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        matches!(self, Projection::Perspective { .. })
    }

    /// Checks that every parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let check = |label: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(CampError::InvalidCameraParameters(format!(
                    "{label} must be positive, got {value}"
                )))
            }
        };

        match *self {
            Projection::Perspective {
                focal_length,
                sensor_width,
                sensor_height,
            } => {
                check("focal length", focal_length)?;
                check("sensor width", sensor_width)?;
                check("sensor height", sensor_height)
            }
            Projection::Orthographic { scale } => check("orthographic scale", scale),
        }
    }
}

/// A named camera with a world pose and optics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    name: String,
    transform: Transform,
    projection: Projection,
    sensor_fit: SensorFit,
}

impl Camera {
    /// Creates a camera at the origin looking down -Z with default optics
    /// (50 mm lens on a 36x24 sensor, auto fit).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            projection: Projection::default(),
            sensor_fit: SensorFit::default(),
        }
    }

    /// Sets the projection.
    #[must_use]
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Sets the sensor fit mode.
    #[must_use]
    pub fn with_sensor_fit(mut self, sensor_fit: SensorFit) -> Self {
        self.sensor_fit = sensor_fit;
        self
    }

    /// Sets the world pose. Scale is discarded.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.set_transform(transform);
        self
    }

    /// Places the camera at `position` looking at `target`.
    ///
    /// If `target` coincides with `position` the rotation is identity. If
    /// `up` is parallel to the view direction the shortest rotation from -Z
    /// is used and the roll is arbitrary.
    #[must_use]
    pub fn looking_at(mut self, position: Vec3, target: Vec3, up: Vec3) -> Self {
        let rotation = match (target - position).try_normalize() {
            None => Quat::IDENTITY,
            Some(look) => match look.cross(up).try_normalize() {
                Some(right) => {
                    let up = right.cross(look).normalize();
                    Quat::from_mat3(&Mat3::from_cols(right, up, -look)).normalize()
                }
                None => Quat::from_rotation_arc(Vec3::NEG_Z, look),
            },
        };
        self.transform = Transform::from_translation_rotation(position, rotation);
        self
    }

    /// Returns the camera name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the world pose.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Sets the world pose. Scale is discarded.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = Transform::from_translation_rotation(transform.translation, transform.rotation);
    }

    /// Returns the world position.
    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }

    /// Sets the world position.
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position;
    }

    /// Returns the world rotation.
    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    /// Sets the world rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    /// Returns the projection.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Sets the projection.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Returns the sensor fit mode.
    pub fn sensor_fit(&self) -> SensorFit {
        self.sensor_fit
    }

    /// Sets the sensor fit mode.
    pub fn set_sensor_fit(&mut self, sensor_fit: SensorFit) {
        self.sensor_fit = sensor_fit;
    }

    /// Viewing direction in world space.
    pub fn forward(&self) -> Vec3 {
        self.transform.rotation * Vec3::NEG_Z
    }

    /// Up direction in world space.
    pub fn up(&self) -> Vec3 {
        self.transform.rotation * Vec3::Y
    }

    /// Right direction in world space.
    pub fn right(&self) -> Vec3 {
        self.transform.rotation * Vec3::X
    }

    /// Maps a camera-local point to world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.transform.translation + self.transform.rotation * local
    }

    /// Maps a world point to camera-local space.
    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        self.transform.inverse_transform_point(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::new("Camera");
        assert_eq!(camera.name(), "Camera");
        assert_eq!(camera.sensor_fit(), SensorFit::Auto);
        assert!(camera.projection().is_perspective());
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((camera.up() - Vec3::Y).length() < 1e-6);
        assert!((camera.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_looking_at() {
        let camera = Camera::new("cam").looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);

        let camera = Camera::new("cam").looking_at(Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!((camera.forward() - Vec3::NEG_X).length() < 1e-6);
        assert!((camera.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_looking_at_degenerate_inputs_stay_finite() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new("cam").looking_at(position, position, Vec3::Y);
        assert_eq!(camera.rotation(), Quat::IDENTITY);
        assert_eq!(camera.position(), position);

        let camera = Camera::new("cam").looking_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!(camera.rotation().is_finite());
        assert!((camera.forward() - Vec3::NEG_Y).length() < 1e-5);
        assert!((camera.rotation().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_local_world_roundtrip() {
        let camera = Camera::new("cam").looking_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-2.0, 0.0, 0.0), Vec3::Y);
        let local = Vec3::new(0.3, -0.2, -4.0);
        let world = camera.local_to_world(local);
        assert!((camera.world_to_local(world) - local).length() < 1e-5);
    }

    #[test]
    fn test_transform_scale_is_discarded() {
        let mut t = Transform::from_translation(Vec3::X);
        t.scale = Vec3::splat(3.0);
        let camera = Camera::new("cam").with_transform(t);
        assert_eq!(camera.transform().scale, Vec3::ONE);
        assert_eq!(camera.position(), Vec3::X);
    }

    #[test]
    fn test_sensor_fit_axis() {
        assert_eq!(SensorFit::Auto.axis(16.0 / 9.0), FitAxis::Horizontal);
        assert_eq!(SensorFit::Auto.axis(1.0), FitAxis::Horizontal);
        assert_eq!(SensorFit::Auto.axis(9.0 / 16.0), FitAxis::Vertical);
        assert_eq!(SensorFit::Horizontal.axis(0.5), FitAxis::Horizontal);
        assert_eq!(SensorFit::Vertical.axis(2.0), FitAxis::Vertical);
    }

    #[test]
    fn test_projection_validation() {
        assert!(Projection::default().validate().is_ok());
        assert!(Projection::orthographic(6.0).validate().is_ok());

        for bad in [
            Projection::perspective(0.0, 36.0, 24.0),
            Projection::perspective(-18.0, 36.0, 24.0),
            Projection::perspective(18.0, 0.0, 24.0),
            Projection::perspective(18.0, 36.0, -1.0),
            Projection::perspective(f32::NAN, 36.0, 24.0),
            Projection::orthographic(0.0),
            Projection::orthographic(f32::INFINITY),
        ] {
            assert!(matches!(
                bad.validate(),
                Err(CampError::InvalidCameraParameters(_))
            ));
        }
    }
}
