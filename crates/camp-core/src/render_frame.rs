//! Render output resolution.

use serde::{Deserialize, Serialize};

use crate::error::{CampError, Result};

/// The render output the camera frame is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Horizontal pixel aspect.
    pub pixel_aspect_x: f32,
    /// Vertical pixel aspect.
    pub pixel_aspect_y: f32,
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl RenderFrame {
    /// Creates a frame with square pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_aspect_x: 1.0,
            pixel_aspect_y: 1.0,
        }
    }

    /// Sets a non-square pixel aspect.
    #[must_use]
    pub fn with_pixel_aspect(mut self, x: f32, y: f32) -> Self {
        self.pixel_aspect_x = x;
        self.pixel_aspect_y = y;
        self
    }

    /// Checks that the resolution and pixel aspect are usable.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CampError::InvalidRenderFrame(format!(
                "resolution {}x{} has a zero dimension",
                self.width, self.height
            )));
        }
        for value in [self.pixel_aspect_x, self.pixel_aspect_y] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CampError::InvalidRenderFrame(format!(
                    "pixel aspect must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Displayed aspect ratio (width / height), pixel aspect included.
    pub fn aspect_ratio(&self) -> Result<f32> {
        self.validate()?;
        Ok((self.width as f32 * self.pixel_aspect_x) / (self.height as f32 * self.pixel_aspect_y))
    }

    /// The same frame rotated a quarter turn (width and height swapped).
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            pixel_aspect_x: self.pixel_aspect_y,
            pixel_aspect_y: self.pixel_aspect_x,
        }
    }
}
