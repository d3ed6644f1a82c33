//! # fill-resize
//!
//! Resize a single image to exact dimensions without distortion: crop the
//! source to the target aspect ratio (centered), then scale the crop.
//!
//! ```text
//! source 1000x500, target 300x100
//!   ratio     300:100 → 3:1
//!   crop box  left 0, top 83, right 1000, bottom 416
//!   resize    1000x333 → 300x100
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Crop-box math, image backend, HTTP fetcher, and the [`fill_resize`](imaging::fill_resize) operation |
//! | [`config`] | `fill-resize.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Floating-Point Crop Math
//!
//! The crop box is computed in `f64` and each edge is floored on its own.
//! Integer-only arithmetic would shift some edges by a pixel, so results would
//! no longer line up with existing thumbnails produced by the same rule.
//!
//! ## Tagged Sources
//!
//! Inputs are a [`Source`](imaging::Source) enum (`LocalPath`, `RemoteUrl`,
//! `Bytes`) resolved once by the caller. The library never guesses whether a
//! string is a URL.
//!
//! ## Typed Failures
//!
//! [`FillError`](imaging::FillError) separates bad arguments, missing files,
//! failed fetches, undecodable content and write failures, so callers can
//! retry a URL or fix their arguments without parsing messages.
//!
//! ## Backend Trait
//!
//! Pixel work goes through [`ImageBackend`](imaging::ImageBackend). The
//! production backend uses the `image` crate; tests use a recording mock to
//! check exactly which operations ran.

pub mod config;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
