//! High-level fill operations.
//!
//! These functions combine the crop-box calculation with backend execution:
//! validate the target, resolve the source into a decoded image, crop to the
//! target aspect ratio, resize to the exact target, and optionally save.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{compute_crop_box, reduce_ratio};
use super::fetch::{FetchError, Fetcher};
use super::params::{CropBox, Dimensions, FilterKind, InvalidDimension, Quality, TargetSize};
use super::source::Source;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors a caller of [`fill_resize`] can branch on.
#[derive(Error, Debug)]
pub enum FillError {
    #[error("invalid target dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i64, height: i64 },
    #[error("source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch {url}")]
    SourceFetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("{origin} is not a readable image: {message}")]
    SourceNotAnImage { origin: String, message: String },
    #[error("failed to write {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<InvalidDimension> for FillError {
    fn from(err: InvalidDimension) -> Self {
        FillError::InvalidDimension {
            width: err.width,
            height: err.height,
        }
    }
}

/// Result type for fill operations.
pub type Result<T> = std::result::Result<T, FillError>;

/// Backend knobs that do not change the geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOptions {
    pub filter: FilterKind,
    pub quality: Quality,
}

/// One fill resize, as requested by a caller.
///
/// Width and height are signed so that bad input from the outside world is
/// reported as [`FillError::InvalidDimension`] rather than being unrepresentable.
#[derive(Debug, Clone)]
pub struct FillRequest {
    pub source: Source,
    pub width: i64,
    pub height: i64,
    pub save_to: Option<PathBuf>,
}

/// Geometry of a fill transform, computed without touching any pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FillPlan {
    pub original: Dimensions,
    pub target: TargetSize,
    /// Target aspect ratio in lowest terms.
    pub ratio: (u32, u32),
    pub crop_box: CropBox,
}

/// Plan a fill transform without executing it.
pub fn plan_fill(original: Dimensions, target: TargetSize) -> FillPlan {
    FillPlan {
        original,
        target,
        ratio: reduce_ratio(target),
        crop_box: compute_crop_box(original, target),
    }
}

/// What a fill resize produced.
///
/// `original` is the decoded source, returned untouched for callers that
/// want both.
#[derive(Debug)]
pub struct FillOutcome<I> {
    pub resized: I,
    pub original: I,
    pub plan: FillPlan,
    pub saved_to: Option<PathBuf>,
}

/// Decode `source` through the backend, mapping failures to caller-facing kinds.
pub fn load_source<B: ImageBackend>(
    backend: &B,
    fetcher: &impl Fetcher,
    source: &Source,
) -> Result<B::Image> {
    let not_an_image = |err: BackendError| match err {
        BackendError::Decode(message) => FillError::SourceNotAnImage {
            origin: source.to_string(),
            message,
        },
        other => FillError::Backend(other),
    };

    match source {
        Source::LocalPath(path) => backend.open_path(path).map_err(|err| match err {
            BackendError::Io(io) => FillError::SourceNotFound {
                path: path.clone(),
                source: io,
            },
            other => not_an_image(other),
        }),
        Source::RemoteUrl(url) => {
            let bytes = fetcher
                .fetch(url)
                .map_err(|err| FillError::SourceFetchFailed {
                    url: url.clone(),
                    source: err,
                })?;
            backend.decode_bytes(&bytes).map_err(not_an_image)
        }
        Source::Bytes(bytes) => backend.decode_bytes(bytes).map_err(not_an_image),
    }
}

/// Crop `image` to the target aspect ratio and resize it to exactly `target`.
///
/// Returns the resized image together with the plan that produced it. The
/// input image is not modified.
pub fn fill_resize_image<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    target: TargetSize,
    filter: FilterKind,
) -> Result<(B::Image, FillPlan)> {
    let original = backend.dimensions(image);
    if original.width == 0 || original.height == 0 {
        return Err(FillError::Backend(BackendError::ProcessingFailed(format!(
            "source image is empty ({}x{})",
            original.width, original.height
        ))));
    }

    let plan = plan_fill(original, target);
    debug!(
        original = ?plan.original,
        ratio = ?plan.ratio,
        crop_box = ?plan.crop_box,
        "planned fill crop"
    );

    let cropped = backend.crop(image, plan.crop_box)?;
    let resized = backend.resize(&cropped, target.dimensions(), filter)?;
    Ok((resized, plan))
}

/// Run a complete fill resize: validate, load, crop, resize, optionally save.
///
/// Target dimensions are checked before the backend or the fetcher is
/// touched, so an invalid request costs no I/O.
pub fn fill_resize<B: ImageBackend>(
    backend: &B,
    fetcher: &impl Fetcher,
    request: &FillRequest,
    options: FillOptions,
) -> Result<FillOutcome<B::Image>> {
    let target = TargetSize::new(request.width, request.height)?;

    let original = load_source(backend, fetcher, &request.source)?;
    let (resized, plan) = fill_resize_image(backend, &original, target, options.filter)?;

    if let Some(path) = &request.save_to {
        save_result(backend, &resized, path, options.quality)?;
    }

    info!(
        source = %request.source,
        width = target.width(),
        height = target.height(),
        "fill resize complete"
    );

    Ok(FillOutcome {
        resized,
        original,
        plan,
        saved_to: request.save_to.clone(),
    })
}

fn save_result<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    path: &Path,
    quality: Quality,
) -> Result<()> {
    backend
        .save(image, path, quality)
        .map_err(|err| FillError::WriteFailed {
            path: path.to_path_buf(),
            source: err,
        })?;
    debug!(path = %path.display(), "saved result");
    Ok(())
}
