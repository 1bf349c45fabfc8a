//! Error types for camp-rs.

use thiserror::Error;

/// The main error type for camp-rs operations.
#[derive(Error, Debug)]
pub enum CampError {
    /// The global context has not been initialized.
    #[error("camp not initialized - call camp_rs::init() first")]
    NotInitialized,

    /// The global context has already been initialized.
    #[error("camp already initialized")]
    AlreadyInitialized,

    /// Camera optics cannot produce a valid field of view.
    #[error("invalid camera parameters: {0}")]
    InvalidCameraParameters(String),

    /// The render output resolution or pixel aspect is unusable.
    #[error("invalid render frame: {0}")]
    InvalidRenderFrame(String),

    /// A distance edit was rejected; the previous distance is kept.
    #[error("invalid distance {0}: distance must be finite and non-negative")]
    InvalidDistance(f32),

    /// The binding handle was never bound or has already been unbound.
    #[error("binding {0} is not bound")]
    UnboundOperation(u64),

    /// A camera with the given name already exists.
    #[error("camera '{0}' already exists")]
    CameraExists(String),

    /// A camera with the given name was not found.
    #[error("camera '{0}' not found")]
    CameraNotFound(String),

    /// A plane with the given name already exists.
    #[error("plane '{0}' already exists")]
    PlaneExists(String),

    /// A plane with the given name was not found.
    #[error("plane '{0}' not found")]
    PlaneNotFound(String),

    /// The plane is already bound to a camera.
    #[error("plane '{0}' is already bound to camera '{1}'")]
    PlaneAlreadyBound(String, String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for camp-rs operations.
pub type Result<T> = std::result::Result<T, CampError>;
