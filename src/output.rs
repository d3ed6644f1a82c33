//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! Source: 1000x500
//! Target: 300x100 (ratio 3:1)
//! Crop:   left 0, top 83, right 1000, bottom 416 (1000x333)
//! ```
//!
//! ## Resize
//!
//! ```text
//! photo.jpg → thumb.jpg
//!     Source: 1000x500
//!     Target: 300x100 (ratio 3:1)
//!     Crop:   left 0, top 83, right 1000, bottom 416 (1000x333)
//! ```

use crate::imaging::{CropBox, FillPlan, Source};
use std::path::Path;

fn crop_line(crop: &CropBox) -> String {
    format!(
        "left {}, top {}, right {}, bottom {} ({}x{})",
        crop.left,
        crop.top,
        crop.right,
        crop.bottom,
        crop.width(),
        crop.height()
    )
}

/// Plan details, one fact per line.
pub fn format_plan(plan: &FillPlan) -> Vec<String> {
    vec![
        format!(
            "Source: {}x{}",
            plan.original.width, plan.original.height
        ),
        format!(
            "Target: {}x{} (ratio {}:{})",
            plan.target.width(),
            plan.target.height(),
            plan.ratio.0,
            plan.ratio.1
        ),
        format!("Crop:   {}", crop_line(&plan.crop_box)),
    ]
}

/// Plan as pretty JSON.
pub fn format_plan_json(plan: &FillPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

/// Header plus indented plan for a completed resize.
pub fn format_resize(source: &Source, saved_to: Option<&Path>, plan: &FillPlan) -> Vec<String> {
    let header = match saved_to {
        Some(path) => format!("{} → {}", source, path.display()),
        None => format!("{} (not saved)", source),
    };
    let mut lines = vec![header];
    lines.extend(format_plan(plan).into_iter().map(|l| format!("    {l}")));
    lines
}

pub fn print_plan(plan: &FillPlan) {
    for line in format_plan(plan) {
        println!("{}", line);
    }
}

pub fn print_resize(source: &Source, saved_to: Option<&Path>, plan: &FillPlan) {
    for line in format_resize(source, saved_to, plan) {
        println!("{}", line);
    }
}
