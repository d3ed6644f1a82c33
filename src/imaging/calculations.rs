//! Pure calculation functions for the fill crop box.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The ratio math runs in `f64` and floors each edge independently. Integer
//! arithmetic would move some edges by a pixel, so keep it floating point.

use super::params::{CropBox, Dimensions, TargetSize};

/// Greatest common divisor (Euclid). `gcd(0, n) == n`.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce a target size to its aspect ratio in lowest terms.
///
/// # Examples
/// ```
/// # use fill_resize::imaging::{TargetSize, reduce_ratio};
/// let target = TargetSize::new(1920, 1080).unwrap();
/// assert_eq!(reduce_ratio(target), (16, 9));
/// ```
pub fn reduce_ratio(target: TargetSize) -> (u32, u32) {
    let g = gcd(target.width(), target.height());
    (target.width() / g, target.height() / g)
}

/// Real-valued crop extent before flooring.
///
/// The axis with fewer whole "ratio units" limits the crop. When both axes
/// hold the same number of units, height is treated as limiting.
pub(crate) fn crop_extent(original: Dimensions, ratio: (u32, u32)) -> (f64, f64) {
    let ratio_w = f64::from(ratio.0);
    let ratio_h = f64::from(ratio.1);

    let units_w = f64::from(original.width) / ratio_w;
    let units_h = f64::from(original.height) / ratio_h;

    let multiplier = if units_w >= units_h { units_h } else { units_w };

    (multiplier * ratio_w, multiplier * ratio_h)
}

/// Floor the centered span of `extent` within `0..len` to integer edges.
fn centered_edges(len: u32, extent: f64) -> (u32, u32) {
    let len_f = f64::from(len);
    let start = ((len_f - extent) / 2.0).floor().clamp(0.0, len_f) as u32;
    let end = ((len_f + extent) / 2.0).floor().clamp(0.0, len_f) as u32;

    // Extreme ratios can floor to an empty span; keep one pixel.
    if end <= start {
        let start = start.min(len.saturating_sub(1));
        (start, start + 1)
    } else {
        (start, end)
    }
}

/// Compute the centered crop box whose aspect ratio matches `target`.
///
/// `original` must have non-zero sides (it comes from a decoded image).
///
/// # Examples
/// ```
/// # use fill_resize::imaging::{CropBox, Dimensions, TargetSize, compute_crop_box};
/// // 1000x500 source, 300x100 target (3:1) keeps the full width
/// let crop = compute_crop_box(Dimensions::new(1000, 500), TargetSize::new(300, 100).unwrap());
/// assert_eq!(crop, CropBox { left: 0, top: 83, right: 1000, bottom: 416 });
/// ```
pub fn compute_crop_box(original: Dimensions, target: TargetSize) -> CropBox {
    let (crop_w, crop_h) = crop_extent(original, reduce_ratio(target));

    let (left, right) = centered_edges(original.width, crop_w);
    let (top, bottom) = centered_edges(original.height, crop_h);

    CropBox {
        left,
        top,
        right,
        bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn target(w: i64, h: i64) -> TargetSize {
        TargetSize::new(w, h).unwrap()
    }

    // =========================================================================
    // gcd / reduce_ratio
    // =========================================================================

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(300, 100), 100);
        assert_eq!(gcd(1920, 1080), 120);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn reduce_ratio_lowest_terms() {
        assert_eq!(reduce_ratio(target(300, 100)), (3, 1));
        assert_eq!(reduce_ratio(target(400, 500)), (4, 5));
        assert_eq!(reduce_ratio(target(250, 250)), (1, 1));
        assert_eq!(reduce_ratio(target(17, 5)), (17, 5));
    }

    // =========================================================================
    // compute_crop_box
    // =========================================================================

    #[test]
    fn wide_source_to_wide_target() {
        // 3:1 -> units_w 333.3 < units_h 500, width limits
        let crop = compute_crop_box(Dimensions::new(1000, 500), target(300, 100));
        assert_eq!(
            crop,
            CropBox {
                left: 0,
                top: 83,
                right: 1000,
                bottom: 416
            }
        );
    }

    #[test]
    fn wide_source_to_portrait_target() {
        // 800x600 -> 4:5; units_w 200, units_h 120, height limits
        // crop 480x600, left (800-480)/2 = 160
        let crop = compute_crop_box(Dimensions::new(800, 600), target(400, 500));
        assert_eq!(
            crop,
            CropBox {
                left: 160,
                top: 0,
                right: 640,
                bottom: 600
            }
        );
    }

    #[test]
    fn square_target_on_square_source_is_full_image() {
        let dims = Dimensions::new(512, 512);
        let crop = compute_crop_box(dims, target(64, 64));
        assert!(crop.is_full(dims));
    }

    #[test]
    fn square_target_on_landscape_source_is_centered_square() {
        let crop = compute_crop_box(Dimensions::new(800, 600), target(100, 100));
        assert_eq!(
            crop,
            CropBox {
                left: 100,
                top: 0,
                right: 700,
                bottom: 600
            }
        );
    }

    #[test]
    fn square_target_on_odd_portrait_source() {
        // slack of 201 rows floors both edges down
        let crop = compute_crop_box(Dimensions::new(600, 801), target(10, 10));
        assert_eq!(crop.width(), 600);
        assert_eq!(crop.height(), 600);
        assert_eq!(crop.top, 100);
        assert_eq!(crop.bottom, 700);
    }

    #[test]
    fn equal_units_select_height_branch() {
        // 1600x900 against 16:9 gives units_w == units_h == 100
        let dims = Dimensions::new(1600, 900);
        assert_eq!(crop_extent(dims, (16, 9)), (1600.0, 900.0));
        assert!(compute_crop_box(dims, target(320, 180)).is_full(dims));
    }

    #[test]
    fn same_ratio_source_keeps_everything() {
        let dims = Dimensions::new(1920, 1080);
        assert!(compute_crop_box(dims, target(1280, 720)).is_full(dims));
    }

    #[test]
    fn scaled_targets_share_crop_box() {
        let dims = Dimensions::new(1234, 567);
        let a = compute_crop_box(dims, target(4, 3));
        let b = compute_crop_box(dims, target(400, 300));
        assert_eq!(a, b);
    }

    #[test]
    fn extreme_ratio_keeps_at_least_one_pixel() {
        let crop = compute_crop_box(Dimensions::new(1, 1), target(1, 1000));
        assert_eq!(
            crop,
            CropBox {
                left: 0,
                top: 0,
                right: 1,
                bottom: 1
            }
        );
    }

    #[test]
    fn extreme_wide_target_on_tall_source() {
        let dims = Dimensions::new(10, 2000);
        let crop = compute_crop_box(dims, target(1000, 1));
        assert_eq!(crop.left, 0);
        assert_eq!(crop.right, 10);
        assert_eq!(crop.height(), 1);
        assert!(crop.bottom <= 2000);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #[test]
        fn crop_box_within_bounds(
            w in 1u32..5000, h in 1u32..5000,
            tw in 1i64..3000, th in 1i64..3000,
        ) {
            let crop = compute_crop_box(Dimensions::new(w, h), target(tw, th));
            prop_assert!(crop.left < crop.right);
            prop_assert!(crop.right <= w);
            prop_assert!(crop.top < crop.bottom);
            prop_assert!(crop.bottom <= h);
        }

        #[test]
        fn crop_box_tracks_real_extent(
            w in 1u32..5000, h in 1u32..5000,
            tw in 1i64..3000, th in 1i64..3000,
        ) {
            let dims = Dimensions::new(w, h);
            let t = target(tw, th);
            let (crop_w, crop_h) = crop_extent(dims, reduce_ratio(t));
            let crop = compute_crop_box(dims, t);
            prop_assert!(crop_w <= f64::from(w) + 1e-6);
            prop_assert!(crop_h <= f64::from(h) + 1e-6);
            prop_assert!((f64::from(crop.width()) - crop_w).abs() <= 1.0);
            prop_assert!((f64::from(crop.height()) - crop_h).abs() <= 1.0);
        }

        #[test]
        fn crop_box_fills_one_axis(
            w in 1u32..5000, h in 1u32..5000,
            tw in 1i64..3000, th in 1i64..3000,
        ) {
            let crop = compute_crop_box(Dimensions::new(w, h), target(tw, th));
            prop_assert!(crop.width() + 1 >= w || crop.height() + 1 >= h);
        }

        #[test]
        fn crop_box_invariant_under_target_scaling(
            w in 1u32..5000, h in 1u32..5000,
            tw in 1i64..500, th in 1i64..500, k in 1i64..20,
        ) {
            let dims = Dimensions::new(w, h);
            prop_assert_eq!(
                compute_crop_box(dims, target(tw, th)),
                compute_crop_box(dims, target(tw * k, th * k))
            );
        }

        #[test]
        fn square_target_crops_to_short_side(w in 1u32..5000, h in 1u32..5000, s in 1i64..2000) {
            let crop = compute_crop_box(Dimensions::new(w, h), target(s, s));
            prop_assert_eq!(crop.width(), w.min(h));
            prop_assert_eq!(crop.height(), w.min(h));
        }
    }
}
