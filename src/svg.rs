//! SVG visualization of a placement plan.
//!
//! Draws the canvas, each row band, and a labeled square per icon, so a
//! layout can be inspected without an image backend or icon assets.
//!
//! # Example
//!
//! ```
//! use payicons::{RequestConfig, svg::render_plan_svg};
//!
//! let plan = RequestConfig::new()
//!     .icons(["visa", "mc", "amex", "jcb", "discover"])
//!     .plan()
//!     .unwrap();
//!
//! let svg = render_plan_svg(&plan);
//! assert!(svg.contains("Visa"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::layout::PlacementPlan;

/// Margin around the canvas.
const MARGIN: f64 = 30.0;
/// Height of the title line above the canvas.
const TITLE_H: f64 = 22.0;
/// Height of the annotation line below the canvas.
const FOOTER_H: f64 = 20.0;

/// Render a complete SVG document showing every placement in `plan`.
///
/// Coordinates are 1:1 with canvas pixels, offset by a margin.
pub fn render_plan_svg(plan: &PlacementPlan) -> String {
    let cw = plan.canvas.width as f64;
    let ch = plan.canvas.height as f64;
    let total_w = cw + 2.0 * MARGIN;
    let total_h = ch + 2.0 * MARGIN + TITLE_H + FOOTER_H;
    let ox = MARGIN;
    let oy = MARGIN + TITLE_H;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Palette follows the viewer's color scheme
    svg.push_str(
        r##"<style>
  text { font-family: system-ui, sans-serif; }
  .title { font-size: 13px; font-weight: 600; fill: #222; }
  .note { font-size: 11px; fill: #555; }
  .name { font-size: 10px; fill: #fff; }
  .canvas { fill: #f4f1ea; stroke: #8a8270; }
  .row { fill: #e3dccb; stroke: #b5a98c; stroke-dasharray: 3,3; }
  .slot { fill: #c0703a; stroke: #7a3f16; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .title { fill: #eee; }
    .note { fill: #b0b0b0; }
    .canvas { fill: #262420; stroke: #6b6454; }
    .row { fill: #3a352b; stroke: #6b604a; }
    .slot { fill: #a55c2a; stroke: #e09a66; }
  }
</style>
"##,
    );

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="title" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&format!(
            "Canvas  {}×{}  rows {:?}",
            plan.canvas.width,
            plan.canvas.height,
            plan.rows.rows()
        ))
    ));
    svg.push('\n');

    // Canvas
    svg.push_str(&format!(
        r#"<rect x="{ox:.1}" y="{oy:.1}" width="{cw:.1}" height="{ch:.1}" class="canvas"/>"#
    ));
    svg.push('\n');

    // Row bands, positioned from the first icon of each row
    for row in 0..plan.rows.len() {
        if let Some(first) = plan.placements.iter().find(|p| p.row == row) {
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{}" class="row"/>"#,
                ox,
                oy + first.y as f64,
                cw,
                plan.row_height
            ));
            svg.push('\n');
        }
    }

    // Icons
    for p in &plan.placements {
        let x = ox + p.x as f64;
        let y = oy + p.y as f64;
        let s = p.size as f64;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{s:.1}" height="{s:.1}" class="slot" rx="2"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="name" text-anchor="middle">{}</text>"#,
            x + s / 2.0,
            y + s / 2.0 + 4.0,
            escape_xml(p.icon.name())
        ));
        svg.push('\n');
    }

    // Annotation
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="note" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        oy + ch + 16.0,
        escape_xml(&format!(
            "icon {}px, row {}px, padding {}px",
            plan.icon_size, plan.row_height, plan.padding
        ))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
