//! Parameter types for image operations.
//!
//! These types describe *what* to do, not *how* to do it. They sit between the
//! high-level [`operations`](super::operations) module (which decides what the
//! fill transform looks like) and the [`backend`](super::backend) (which does
//! the actual pixel work).
//!
//! ## Types
//!
//! - [`Dimensions`] — Width and height of a decoded image.
//! - [`TargetSize`] — Caller-requested output size, validated positive on construction.
//! - [`CropBox`] — Edges of the region to keep, in source pixel coordinates.
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`FilterKind`] — Resampling filter used for the final resize.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("target dimensions must be positive integers, got {width}x{height}")]
pub struct InvalidDimension {
    pub width: i64,
    pub height: i64,
}

/// Requested output size of a fill transform.
///
/// Only constructible through [`TargetSize::new`], so holding one means both
/// sides are positive and fit in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    /// Validate a caller-supplied size.
    ///
    /// Takes signed input so that negative values coming from a CLI or an FFI
    /// layer are rejected here instead of wrapping.
    pub fn new(width: i64, height: i64) -> Result<Self, InvalidDimension> {
        let err = InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(err);
        }
        let w = u32::try_from(width).map_err(|_| err)?;
        let h = u32::try_from(height).map_err(|_| err)?;
        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn dimensions(self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Region of the source image to keep.
///
/// Edges are half-open: `left..right` columns and `top..bottom` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box covers the whole of `dims`.
    pub fn is_full(&self, dims: Dimensions) -> bool {
        self.left == 0 && self.top == 0 && self.right == dims.width && self.bottom == dims.height
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Resampling filter for the resize step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Nearest,
    Triangle,
    /// Bicubic.
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterKind> for FilterType {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Nearest => FilterType::Nearest,
            FilterKind::Triangle => FilterType::Triangle,
            FilterKind::CatmullRom => FilterType::CatmullRom,
            FilterKind::Gaussian => FilterType::Gaussian,
            FilterKind::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
