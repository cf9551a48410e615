use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Pixel layout of an 8-bit interleaved buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// No image loaded.
    Invalid,
    Grayscale8,
    /// Interleaved R, G, B.
    Rgb888,
    /// Interleaved A, R, G, B (alpha first).
    Argb32,
}

impl PixelFormat {
    /// Infer the format from an interleaved channel count.
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(PixelFormat::Grayscale8),
            3 => Ok(PixelFormat::Rgb888),
            4 => Ok(PixelFormat::Argb32),
            n => Err(ViewerError::InvalidFormat(format!(
                "{n} channels (expected 1, 3 or 4)"
            ))),
        }
    }

    /// Infer the format from an array shape, `(h, w)` or `(h, w, c)`.
    ///
    /// `None` stands for "no image yet" and yields [`PixelFormat::Invalid`].
    pub fn from_shape(shape: Option<&[usize]>) -> Result<Self> {
        let Some(shape) = shape else {
            return Ok(PixelFormat::Invalid);
        };
        match shape.len() {
            2 => Ok(PixelFormat::Grayscale8),
            3 => Self::from_channels(shape[2]),
            n => Err(ViewerError::InvalidFormat(format!(
                "{n}-dimensional buffer (expected 2 or 3 dimensions)"
            ))),
        }
    }

    /// Bytes per pixel, 0 for [`PixelFormat::Invalid`].
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Invalid => 0,
            PixelFormat::Grayscale8 => 1,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Argb32 => 4,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Invalid => write!(f, "Invalid"),
            PixelFormat::Grayscale8 => write!(f, "Grayscale 8-bit"),
            PixelFormat::Rgb888 => write!(f, "RGB 24-bit"),
            PixelFormat::Argb32 => write!(f, "ARGB 32-bit"),
        }
    }
}
