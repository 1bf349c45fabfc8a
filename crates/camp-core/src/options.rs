//! Configuration options for camp.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render_frame::RenderFrame;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Distance used when binding a plane. `None` measures it from the
    /// plane's position at bind time.
    pub initial_distance: Option<f32>,

    /// Render frame a new scene starts with.
    pub default_render_frame: RenderFrame,

    /// Tolerance used when checking that plane corners sit on the frustum.
    pub corner_tolerance: f32,

    /// Whether to log every recompute pass at debug level.
    pub log_recomputes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            initial_distance: None,
            default_render_frame: RenderFrame::default(),
            corner_tolerance: 1e-4,
            log_recomputes: true,
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
