//! Payment-method icon grids: layout computation and compositing.
//!
//! Picks up to six card-network or cryptocurrency icons, partitions them
//! into rows, sizes and centers them on a canvas, and (with `std`)
//! composites the result into a PNG data URL or file.
//!
//! # Modules
//!
//! - [`icon`] — Icon identifiers, case-insensitive aliases, validated icon sets
//! - [`layout`] — Row layouts and placement computation (pure geometry, `no_std`)
//! - [`plan`] — Request configuration builder
//! - `render` — Image backends and output assembly (`std`)
//! - `svg` — SVG visualization of a placement plan (`svg` feature)
//!
//! # Example
//!
//! ```
//! use payicons::{IconId, RequestConfig};
//!
//! let plan = RequestConfig::new()
//!     .icons(["JCB", "mc", "vISa", "interac"])
//!     .size(300, 200)
//!     .padding(10)
//!     .plan()
//!     .unwrap();
//!
//! assert_eq!(plan.row_sizes(), vec![2, 1]);
//! assert_eq!(plan.placements[2].icon, IconId::Visa);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod icon;
pub mod layout;
pub mod plan;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types
pub use icon::{FALLBACK_ICONS, IconId, IconRef, IconSet, MAX_ICONS};
pub use layout::{
    LayoutError, Placement, PlacementPlan, Rect, RowLayout, RowLayoutTable, Size,
    compute_placement_plan,
};
pub use plan::RequestConfig;
#[cfg(feature = "std")]
pub use render::{BackendKind, RenderError, Renderer};
