//! Image processing backend trait and shared error type.
//!
//! The [`ImageBackend`] trait covers the handful of primitives the fill
//! transform needs: open, decode, measure, crop, resize and save. Images are
//! opaque to the rest of the crate; every operation returns a new handle and
//! never mutates its input.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::{CropBox, Dimensions, FilterKind, Quality};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// `Sync` so a single backend can be shared between callers; the image
/// handles themselves are owned by whoever receives them.
pub trait ImageBackend: Sync {
    type Image;

    /// Open and decode an image file. Missing or unreadable files are
    /// reported as [`BackendError::Io`], undecodable content as
    /// [`BackendError::Decode`].
    fn open_path(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Decode an in-memory encoded image.
    fn decode_bytes(&self, bytes: &[u8]) -> Result<Self::Image, BackendError>;

    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Copy out the region described by `crop`.
    fn crop(&self, image: &Self::Image, crop: CropBox) -> Result<Self::Image, BackendError>;

    /// Resample to exactly `size`, ignoring the input aspect ratio.
    fn resize(
        &self,
        image: &Self::Image,
        size: Dimensions,
        filter: FilterKind,
    ) -> Result<Self::Image, BackendError>;

    /// Encode and write, choosing the format from the file extension.
    fn save(&self, image: &Self::Image, path: &Path, quality: Quality)
    -> Result<(), BackendError>;
}
