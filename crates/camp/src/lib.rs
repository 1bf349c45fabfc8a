//! camp-rs: camera-aligned image planes.
//!
//! Binds a rectangular image plane to a camera so that it always appears
//! centered and edge-to-edge in the camera's frame, whatever the lens,
//! sensor fit, render resolution or the plane's distance from the camera.
//! The distance is a free control: set it to the real camera-to-subject
//! distance of the photo on the plane and the plane keeps the photo's
//! real-world pixel density.
//!
//! # Quick Start
//!
//! ```no_run
//! use camp_rs::*;
//!
//! fn main() -> Result<()> {
//!     init()?;
//!
//!     let camera = register_camera(Camera::new("Camera"))?;
//!     let plane = register_plane(Plane::new("photo"))?;
//!
//!     let binding = bind(&plane, &camera)?;
//!     set_distance(binding, 12.0)?;
//!
//!     // Rotating the camera carries the plane along
//!     camera.rotate(Quat::from_rotation_y(0.3))?;
//!     assert!(fills_frame(binding)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - A **camera** supplies optics (focal length and sensor, or an
//!   orthographic scale) and a world pose.
//! - A **plane** is the image-bearing rectangle.
//! - A **binding** locks a plane to a camera and owns the distance.
//!
//! Every edit to a camera, the render frame or a distance refits the
//! affected planes before the call returns.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]

mod binding;
mod camera;
mod init;
mod plane;

// Re-export core types
pub use camp_core::{
    binder::{Binding, BindingHandle},
    camera::{Camera, Projection, SensorFit},
    error::{CampError, Result},
    fov::FovResult,
    frame_fill::FrameFill,
    options::Options,
    plane::Plane,
    render_frame::RenderFrame,
    state::{with_context, with_context_mut, Context},
    transform::Transform,
    uniforms::PlaneUniforms,
    Mat4, Quat, Vec2, Vec3,
};

pub use binding::{
    bind, fills_frame, get_all_bindings, get_distance, get_effective_scale, get_source_size,
    set_distance, unbind,
};
pub use camera::{get_camera, register_camera, remove_camera, CameraHandle};
pub use init::{
    init, init_with_options, is_initialized, options, render_frame, set_options,
    set_render_frame, shutdown,
};
pub use plane::{get_plane, register_plane, remove_plane, PlaneHandle};
