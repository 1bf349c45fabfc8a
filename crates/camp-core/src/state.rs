//! Global state management for camp.

use std::sync::{OnceLock, RwLock};

use crate::error::{CampError, Result};
use crate::options::Options;
use crate::scene::Scene;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context containing all camp state.
#[derive(Default)]
pub struct Context {
    /// Whether camp has been initialized.
    pub initialized: bool,

    /// Cameras, planes and bindings.
    pub scene: Scene,
}

impl Context {
    /// Returns the active options.
    pub fn options(&self) -> &Options {
        self.scene.options()
    }
}

/// Initializes the global context.
///
/// This should be called once at the start of the program. After
/// [`shutdown_context`] the same context is reopened with fresh options.
pub fn init_context(options: Options) -> Result<()> {
    if let Some(lock) = CONTEXT.get() {
        let mut ctx = lock.write().map_err(|_| CampError::AlreadyInitialized)?;
        if ctx.initialized {
            return Err(CampError::AlreadyInitialized);
        }
        ctx.scene = Scene::with_options(options);
        ctx.initialized = true;
        return Ok(());
    }

    let context = RwLock::new(Context {
        initialized: false,
        scene: Scene::with_options(options),
    });

    CONTEXT
        .set(context)
        .map_err(|_| CampError::AlreadyInitialized)?;

    with_context_mut(|ctx| {
        ctx.initialized = true;
    });

    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .map_or(false, |ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if camp has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("camp not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if camp has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("camp not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Try to access the global context for reading.
///
/// Returns `CampError::NotInitialized` if camp has not been initialized
/// or has been shut down.
pub fn try_with_context<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().ok_or(CampError::NotInitialized)?;
    let guard = lock.read().map_err(|_| CampError::NotInitialized)?;
    if !guard.initialized {
        return Err(CampError::NotInitialized);
    }
    Ok(f(&guard))
}

/// Try to access the global context for writing.
///
/// Returns `CampError::NotInitialized` if camp has not been initialized
/// or has been shut down.
pub fn try_with_context_mut<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().ok_or(CampError::NotInitialized)?;
    let mut guard = lock.write().map_err(|_| CampError::NotInitialized)?;
    if !guard.initialized {
        return Err(CampError::NotInitialized);
    }
    Ok(f(&mut guard))
}

/// Shuts down the global context.
///
/// Clears the scene. The `OnceLock` itself stays in place, so a later
/// [`init_context`] reuses it.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            let options = ctx.scene.options().clone();
            ctx.initialized = false;
            ctx.scene = Scene::with_options(options);
        }
    }
}
