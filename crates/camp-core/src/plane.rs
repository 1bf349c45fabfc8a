//! Image-bearing planes.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::transform::Transform;

/// A rectangular plane in the scene.
///
/// The plane's geometry is a `size.x` by `size.y` rectangle centered on its
/// origin in the local XY plane, facing +Z. While unbound its `transform` is
/// its own; while bound the scene derives its world transform from the
/// camera instead and `transform` holds the frozen state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    name: String,
    transform: Transform,
    size: Vec2,
}

impl Plane {
    /// Creates a 2x2 plane at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            size: Vec2::splat(2.0),
        }
    }

    /// Sets the local geometry size.
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Sets the world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Returns the plane name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Sets the stored transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Returns the local geometry size.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// World size: geometry size times the transform's in-plane scale.
    pub fn world_size(&self) -> Vec2 {
        (self.size * self.transform.scale.truncate()).abs()
    }

    /// Bakes the current scale into the geometry and then resizes the
    /// geometry to a unit quad. Returns the baked size.
    pub(crate) fn normalize(&mut self) -> Vec2 {
        let baked = self.world_size();
        self.size = Vec2::ONE;
        self.transform.scale = Vec3::ONE;
        baked
    }

    /// World-space corners using the stored transform, counter-clockwise
    /// from bottom-left.
    pub fn corners(&self) -> [Vec3; 4] {
        let half = self.size * 0.5;
        [
            Vec3::new(-half.x, -half.y, 0.0),
            Vec3::new(half.x, -half.y, 0.0),
            Vec3::new(half.x, half.y, 0.0),
            Vec3::new(-half.x, half.y, 0.0),
        ]
        .map(|c| self.transform.transform_point(c))
    }
}
