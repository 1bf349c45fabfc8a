//! Initialization and lifecycle management for camp-rs.

use crate::{Options, RenderFrame, Result};
use camp_core::state::{try_with_context, try_with_context_mut};

/// Initializes camp with default options.
///
/// This must be called before any other camp function. It also installs
/// `env_logger` if no logger is set yet.
///
/// # Errors
///
/// Returns an error if camp has already been initialized.
///
/// # Example
///
/// ```no_run
/// use camp_rs::*;
///
/// fn main() -> Result<()> {
///     init()?;
///     // Now you can register cameras and planes and bind them
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    init_with_options(Options::default())
}

/// Initializes camp with the given options.
pub fn init_with_options(options: Options) -> Result<()> {
    let _ = env_logger::try_init();
    camp_core::state::init_context(options)?;
    log::info!("camp-rs initialized");
    Ok(())
}

/// Returns whether camp has been initialized.
#[must_use]
pub fn is_initialized() -> bool {
    camp_core::state::is_initialized()
}

/// Shuts down camp and drops every camera, plane and binding.
///
/// Mainly useful for tests; a later [`init()`] starts from an empty scene.
pub fn shutdown() {
    camp_core::state::shutdown_context();
    log::info!("camp-rs shut down");
}

/// Returns the active options.
pub fn options() -> Result<Options> {
    try_with_context(|ctx| ctx.options().clone())
}

/// Replaces the active options.
///
/// Affects later binds; existing bindings keep their distance.
pub fn set_options(options: Options) -> Result<()> {
    try_with_context_mut(|ctx| ctx.scene.set_options(options))
}

/// Returns the current render output.
pub fn render_frame() -> Result<RenderFrame> {
    try_with_context(|ctx| *ctx.scene.render_frame())
}

/// Changes the render output and refits every bound plane.
pub fn set_render_frame(frame: RenderFrame) -> Result<()> {
    try_with_context_mut(|ctx| ctx.scene.set_render_frame(frame))?
}
