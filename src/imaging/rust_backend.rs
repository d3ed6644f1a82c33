//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, GIF) | `image::ImageReader` with content sniffing |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` with the configured filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with quality |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |
//! | Encode → PNG, TIFF, WebP, GIF | `image::DynamicImage::write_to` |

use super::backend::{BackendError, ImageBackend};
use super::params::{CropBox, Dimensions, FilterKind, Quality};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Output extensions [`RustBackend::save`] knows how to encode.
pub const SUPPORTED_OUTPUT_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "tif", "tiff", "webp", "gif", "avif"];

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Any failure once decoding has started means the content is bad, including
/// short reads from truncated data. Only opening and sniffing report `Io`.
fn decode_error(err: ImageError) -> BackendError {
    BackendError::Decode(err.to_string())
}

fn encode_error(err: ImageError) -> BackendError {
    match err {
        ImageError::IoError(e) => BackendError::Io(e),
        other => BackendError::Encode(other.to_string()),
    }
}

fn output_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Encode as JPEG. The encoder has no alpha support, so flatten to RGB first.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, quality as u8);
    rgb.write_with_encoder(encoder).map_err(encode_error)?;
    writer.flush()?;
    Ok(())
}

/// Encode and save as AVIF using rav1e (speed=6 for reasonable throughput).
fn save_avif(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encoder =
        image::codecs::avif::AvifEncoder::new_with_speed_quality(&mut writer, 6, quality as u8);
    img.write_with_encoder(encoder).map_err(encode_error)?;
    writer.flush()?;
    Ok(())
}

/// Encode a lossless format through `write_to`.
fn save_lossless(img: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), BackendError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, format).map_err(encode_error)?;
    writer.flush()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn open_path(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(decode_error)
    }

    fn decode_bytes(&self, bytes: &[u8]) -> Result<DynamicImage, BackendError> {
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()
            .map_err(decode_error)
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        Dimensions::new(image.width(), image.height())
    }

    fn crop(&self, image: &DynamicImage, crop: CropBox) -> Result<DynamicImage, BackendError> {
        if crop.left >= crop.right
            || crop.top >= crop.bottom
            || crop.right > image.width()
            || crop.bottom > image.height()
        {
            return Err(BackendError::ProcessingFailed(format!(
                "Crop box {crop:?} outside {}x{} image",
                image.width(),
                image.height()
            )));
        }
        Ok(image.crop_imm(crop.left, crop.top, crop.width(), crop.height()))
    }

    fn resize(
        &self,
        image: &DynamicImage,
        size: Dimensions,
        filter: FilterKind,
    ) -> Result<DynamicImage, BackendError> {
        if size.width == 0 || size.height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Cannot resize to {}x{}",
                size.width, size.height
            )));
        }
        Ok(image.resize_exact(size.width, size.height, filter.into()))
    }

    fn save(&self, image: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
        match output_extension(path).as_str() {
            "jpg" | "jpeg" => save_jpeg(image, path, quality.value()),
            "avif" => save_avif(image, path, quality.value()),
            "png" => save_lossless(image, path, ImageFormat::Png),
            "tif" | "tiff" => save_lossless(image, path, ImageFormat::Tiff),
            // Both encoders only take 8-bit RGBA-compatible buffers.
            "webp" => save_lossless(
                &DynamicImage::ImageRgba8(image.to_rgba8()),
                path,
                ImageFormat::WebP,
            ),
            "gif" => save_lossless(
                &DynamicImage::ImageRgba8(image.to_rgba8()),
                path,
                ImageFormat::Gif,
            ),
            other => Err(BackendError::Encode(format!(
                "Unsupported output format: {other:?}"
            ))),
        }
    }
}
