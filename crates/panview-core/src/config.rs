use std::fmt;
use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::drag::PointerButton;
use crate::error::Result;

/// Resampling filter used to build the effective image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Triangle => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "Catmull-Rom"),
            ResampleFilter::Gaussian => write!(f, "Gaussian"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Button that pans the view while dragged.
    pub pan_button: PointerButton,
    pub resample: ResampleFilter,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pan_button: PointerButton::Right,
            resample: ResampleFilter::default(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Clamp `zoom` into the configured range. Returns `None` for non-finite or
    /// non-positive input, or when the range would clamp it to zero.
    pub fn clamp_zoom(&self, zoom: f32) -> Option<f32> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return None;
        }
        let lo = self.min_zoom.min(self.max_zoom);
        let hi = self.min_zoom.max(self.max_zoom);
        let clamped = if lo.is_finite() && hi.is_finite() {
            zoom.clamp(lo, hi)
        } else {
            zoom
        };
        (clamped > 0.0).then_some(clamped)
    }
}
