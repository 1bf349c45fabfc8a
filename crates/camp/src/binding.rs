//! Binding planes to cameras.
//!
//! A bound plane takes its rotation from the camera, sits on the camera's
//! viewing axis and is scaled to fill the frame at its distance. The distance
//! is the one thing the caller edits directly.
//!
//! # Example
//!
//! ```no_run
//! use camp_rs::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!     set_render_frame(RenderFrame::new(1920, 1080))?;
//!
//!     let camera = register_camera(
//!         Camera::new("Camera")
//!             .with_projection(Projection::perspective(18.0, 36.0, 24.0))
//!             .with_sensor_fit(SensorFit::Horizontal),
//!     )?;
//!     let plane = register_plane(Plane::new("backdrop"))?;
//!
//!     let binding = bind(&plane, &camera)?;
//!     set_distance(binding, 5.0)?;
//!     let (width, height) = get_effective_scale(binding)?;
//!     println!("plane spans {width} x {height}");
//!
//!     unbind(binding)?;
//!     Ok(())
//! }
//! ```

use camp_core::state::{try_with_context, try_with_context_mut};

use crate::{BindingHandle, CameraHandle, PlaneHandle, Result};

/// Binds a plane to a camera.
///
/// Fails with `InvalidCameraParameters` if the camera cannot produce a field
/// of view; the plane is left untouched in that case.
pub fn bind(plane: &PlaneHandle, camera: &CameraHandle) -> Result<BindingHandle> {
    try_with_context_mut(|ctx| ctx.scene.bind(plane.name(), camera.name()))?
}

/// Removes a binding. The plane keeps its last computed world transform.
pub fn unbind(binding: BindingHandle) -> Result<()> {
    try_with_context_mut(|ctx| ctx.scene.unbind(binding))?
}

/// Sets the virtual distance between the plane and its camera.
///
/// Negative values fail with `InvalidDistance` and the previous distance is
/// kept.
pub fn set_distance(binding: BindingHandle, distance: f32) -> Result<()> {
    try_with_context_mut(|ctx| ctx.scene.set_distance(binding, distance))?
}

/// Returns the current distance of a binding.
pub fn get_distance(binding: BindingHandle) -> Result<f32> {
    try_with_context(|ctx| ctx.scene.distance(binding))?
}

/// Returns the plane's current width and height in world units.
pub fn get_effective_scale(binding: BindingHandle) -> Result<(f32, f32)> {
    try_with_context(|ctx| ctx.scene.effective_scale(binding))?
}

/// Returns the plane's width and height from before it was bound.
///
/// The ratio is the aspect of the image the plane was authored for.
pub fn get_source_size(binding: BindingHandle) -> Result<(f32, f32)> {
    let size = try_with_context(|ctx| ctx.scene.source_size(binding))??;
    Ok((size.x, size.y))
}

/// Checks that the bound plane's corners sit on the camera frustum.
pub fn fills_frame(binding: BindingHandle) -> Result<bool> {
    try_with_context(|ctx| ctx.scene.fills_frame(binding))?
}

/// Returns the handles of all live bindings.
pub fn get_all_bindings() -> Result<Vec<BindingHandle>> {
    try_with_context(|ctx| ctx.scene.bindings().map(camp_core::Binding::handle).collect())
}
