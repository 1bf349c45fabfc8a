//! Core of camp-rs: camera-aligned image planes.
//!
//! This crate keeps a rectangular plane centered and edge-to-edge in a
//! camera's frame at any chosen distance:
//! - [`fov`] resolves a camera's effective field of view for a render output
//! - [`distance`] holds the single distance control of a binding
//! - [`binder`] locks a plane's rotation and lateral position to a camera
//! - [`frame_fill`] derives the plane's depth offset and scale
//! - [`scene`] ties them together and recomputes on every upstream change

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Pixel counts are converted to f32 for aspect ratios
#![allow(clippy::cast_precision_loss)]

pub mod binder;
pub mod camera;
pub mod distance;
pub mod error;
pub mod fov;
pub mod frame_fill;
pub mod options;
pub mod plane;
pub mod render_frame;
pub mod scene;
pub mod state;
pub mod transform;
pub mod uniforms;

pub use binder::{Binding, BindingHandle, Frozen};
pub use camera::{Camera, FitAxis, Projection, SensorFit};
pub use distance::DistanceProxy;
pub use error::{CampError, Result};
pub use fov::FovResult;
pub use frame_fill::FrameFill;
pub use options::Options;
pub use plane::Plane;
pub use render_frame::RenderFrame;
pub use scene::Scene;
pub use state::{with_context, with_context_mut, Context};
pub use transform::Transform;
pub use uniforms::PlaneUniforms;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3};
