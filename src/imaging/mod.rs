//! Fill crop-and-resize.
//!
//! | Step | Crate / function |
//! |---|---|
//! | **Crop box** | [`compute_crop_box`] (pure `f64` ratio math) |
//! | **Decode** | `image::ImageReader` |
//! | **Fetch** | `reqwest::blocking` |
//! | **Crop + resize** | `DynamicImage::crop_imm` + `resize_exact` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop-box math (unit testable)
//! - **Parameters**: Data structures describing sizes, boxes and encoding knobs
//! - **Source**: Tagged image input (local path, remote URL, bytes)
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Fetch**: [`Fetcher`] trait + [`HttpFetcher`]
//! - **Operations**: [`fill_resize`], combining calculations + backend

pub mod backend;
mod calculations;
pub mod fetch;
pub mod operations;
mod params;
pub mod rust_backend;
mod source;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{compute_crop_box, gcd, reduce_ratio};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use operations::{
    FillError, FillOptions, FillOutcome, FillPlan, FillRequest, fill_resize, fill_resize_image,
    load_source, plan_fill,
};
pub use params::{CropBox, Dimensions, FilterKind, InvalidDimension, Quality, TargetSize};
pub use rust_backend::RustBackend;
pub use source::Source;
