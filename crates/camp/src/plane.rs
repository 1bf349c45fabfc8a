//! Plane registration and evaluated transforms.

use camp_core::state::{try_with_context, try_with_context_mut};

use crate::{BindingHandle, CampError, Plane, PlaneUniforms, Result, Transform, Vec3};

/// Registers a plane.
pub fn register_plane(plane: Plane) -> Result<PlaneHandle> {
    let name = plane.name().to_string();
    try_with_context_mut(|ctx| ctx.scene.add_plane(plane))??;
    Ok(PlaneHandle { name })
}

/// Gets a registered plane by name.
#[must_use]
pub fn get_plane(name: &str) -> Option<PlaneHandle> {
    try_with_context(|ctx| ctx.scene.plane(name).is_some())
        .ok()
        .filter(|exists| *exists)
        .map(|_| PlaneHandle {
            name: name.to_string(),
        })
}

/// Removes a plane, unbinding it first if needed.
pub fn remove_plane(name: &str) -> Result<()> {
    try_with_context_mut(|ctx| ctx.scene.remove_plane(name).map(|_| ()))?
}

/// Handle for a registered plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaneHandle {
    name: String,
}

impl PlaneHandle {
    /// Returns the name of this plane.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a snapshot of the stored plane.
    pub fn plane(&self) -> Result<Plane> {
        try_with_context(|ctx| ctx.scene.plane(&self.name).cloned())?
            .ok_or_else(|| CampError::PlaneNotFound(self.name.clone()))
    }

    /// Sets the transform of the plane. Fails while the plane is bound.
    pub fn set_transform(&self, transform: Transform) -> Result<()> {
        try_with_context_mut(|ctx| ctx.scene.set_plane_transform(&self.name, transform))?
    }

    /// World transform, evaluated against the camera if bound.
    pub fn world_transform(&self) -> Result<Transform> {
        try_with_context(|ctx| ctx.scene.plane_world_transform(&self.name))?
    }

    /// World-space corners, counter-clockwise from bottom-left.
    pub fn corners(&self) -> Result<[Vec3; 4]> {
        try_with_context(|ctx| ctx.scene.plane_corners(&self.name))?
    }

    /// GPU uniforms at the evaluated world transform.
    pub fn uniforms(&self) -> Result<PlaneUniforms> {
        try_with_context(|ctx| ctx.scene.plane_uniforms(&self.name))?
    }

    /// The binding driving this plane, if any.
    #[must_use]
    pub fn binding(&self) -> Option<BindingHandle> {
        try_with_context(|ctx| {
            ctx.scene
                .binding_for_plane(&self.name)
                .map(camp_core::Binding::handle)
        })
        .ok()
        .flatten()
    }
}
