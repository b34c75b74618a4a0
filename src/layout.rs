//! Row layouts and icon placement computation.
//!
//! Given an [`IconSet`], a canvas size, padding, and a [`RowLayoutTable`],
//! [`compute_placement_plan`] partitions the icons into rows, picks one
//! square icon size for every row, and centers each row horizontally and
//! the whole block vertically. Pure geometry: no pixel operations.
//!
//! ```text
//!     5 icons, rows [3, 2], canvas 300×200, padding 10
//!
//!     ┌──────────────────────────────┐
//!     │  ┌──┐    ┌──┐    ┌──┐        │  row 0: three icons
//!     │  └──┘    └──┘    └──┘        │
//!     │       ┌──┐    ┌──┐           │  row 1: two icons, recentered
//!     │       └──┘    └──┘           │
//!     └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use payicons::{IconSet, RowLayoutTable, Size, compute_placement_plan};
//!
//! let icons = IconSet::resolve(["amex"]);
//! let plan = compute_placement_plan(&icons, Size::new(300, 200), 10, &RowLayoutTable::default())
//!     .unwrap();
//!
//! assert_eq!(plan.icon_size, 200);
//! assert_eq!((plan.placements[0].x, plan.placements[0].y), (50, 0));
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::icon::{IconId, IconSet, MAX_ICONS};

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the two rects share any pixel.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether this rect lies entirely within `(0, 0, size.width, size.height)`.
    pub fn fits_within(&self, size: Size) -> bool {
        self.right() <= size.width && self.bottom() <= size.height
    }
}

/// Partition of N icons into rows, top to bottom.
///
/// Each entry is the number of icons in that row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowLayout {
    rows: Vec<usize>,
}

impl RowLayout {
    /// Create a row layout from row sizes.
    pub fn new(rows: impl Into<Vec<usize>>) -> Self {
        Self { rows: rows.into() }
    }

    /// Row sizes, top to bottom.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total icons across all rows.
    pub fn total(&self) -> usize {
        self.rows.iter().sum()
    }

    /// Icons in the fullest row.
    pub fn widest(&self) -> usize {
        self.rows.iter().copied().max().unwrap_or(0)
    }

    /// Check that every row is non-empty and the rows hold exactly `count` icons.
    pub fn validate(&self, count: usize) -> Result<(), LayoutError> {
        if self.rows.is_empty() || self.rows.contains(&0) {
            return Err(LayoutError::EmptyRow { count });
        }
        let sum = self.total();
        if sum != count {
            return Err(LayoutError::RowLayoutMismatch { count, sum });
        }
        Ok(())
    }
}

impl From<Vec<usize>> for RowLayout {
    fn from(rows: Vec<usize>) -> Self {
        Self { rows }
    }
}

impl From<&[usize]> for RowLayout {
    fn from(rows: &[usize]) -> Self {
        Self {
            rows: rows.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for RowLayout {
    fn from(rows: [usize; N]) -> Self {
        Self {
            rows: rows.to_vec(),
        }
    }
}

/// Row layout per icon count.
///
/// [`Default`] covers every count from 1 to [`MAX_ICONS`]:
///
/// | icons | rows     |
/// |-------|----------|
/// | 1     | `[1]`    |
/// | 2     | `[2]`    |
/// | 3     | `[2, 1]` |
/// | 4     | `[2, 2]` |
/// | 5     | `[3, 2]` |
/// | 6     | `[3, 3]` |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowLayoutTable {
    entries: BTreeMap<usize, RowLayout>,
}

impl RowLayoutTable {
    /// A table with no entries. Every count used must be added.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set the layout for `count` icons, returning the updated table.
    pub fn with(mut self, count: usize, rows: impl Into<RowLayout>) -> Self {
        self.set(count, rows);
        self
    }

    /// Set the layout for `count` icons in place.
    pub fn set(&mut self, count: usize, rows: impl Into<RowLayout>) {
        self.entries.insert(count, rows.into());
    }

    /// Layout for `count` icons, if mapped.
    pub fn get(&self, count: usize) -> Option<&RowLayout> {
        self.entries.get(&count)
    }

    /// Copy every entry of `overrides` over this table.
    pub fn merge(mut self, overrides: &RowLayoutTable) -> Self {
        for (count, rows) in &overrides.entries {
            self.entries.insert(*count, rows.clone());
        }
        self
    }

    /// Mapped counts with their layouts, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RowLayout)> {
        self.entries.iter().map(|(count, rows)| (*count, rows))
    }
}

impl Default for RowLayoutTable {
    fn default() -> Self {
        Self::empty()
            .with(1, [1])
            .with(2, [2])
            .with(3, [2, 1])
            .with(4, [2, 2])
            .with(5, [3, 2])
            .with(6, [3, 3])
    }
}

/// Where one icon lands on the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The icon drawn here.
    pub icon: IconId,
    /// Asset file name the icon is loaded from.
    pub asset: &'static str,
    /// Row index, top to bottom.
    pub row: usize,
    /// Left edge on the canvas.
    pub x: u32,
    /// Top edge on the canvas.
    pub y: u32,
    /// Width the icon is scaled to. Icons are square, so also the height.
    pub size: u32,
}

impl Placement {
    /// Area the scaled icon covers on the canvas.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

/// Result of [`compute_placement_plan`]: one [`Placement`] per input icon,
/// in input order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlacementPlan {
    /// Output canvas dimensions.
    pub canvas: Size,
    /// Gap between icons in a row and between rows.
    pub padding: u32,
    /// Height of each row band.
    pub row_height: u32,
    /// Side length of every icon.
    pub icon_size: u32,
    /// Row partition used.
    pub rows: RowLayout,
    /// Icon positions in input order.
    pub placements: Vec<Placement>,
}

impl PlacementPlan {
    /// Number of placed icons.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Icons actually placed in each row, top to bottom.
    pub fn row_sizes(&self) -> Vec<usize> {
        let mut sizes = alloc::vec![0usize; self.rows.len()];
        for p in &self.placements {
            sizes[p.row] += 1;
        }
        sizes
    }

    /// Canvas area covered by each placement, in input order.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.placements.iter().map(Placement::rect)
    }
}

/// Placement computation error.
///
/// All variants are configuration problems detected before any canvas is
/// allocated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Canvas width or height is zero.
    #[error("canvas width and height must be positive")]
    ZeroCanvasDimension,
    /// The row-layout table has no entry for this icon count.
    #[error("no row layout configured for {count} icons")]
    UnmappedIconCount { count: usize },
    /// A row layout has no rows or an empty row.
    #[error("row layout for {count} icons contains an empty row")]
    EmptyRow { count: usize },
    /// A row layout's sizes don't add up to the icon count.
    #[error("row layout for {count} icons places {sum} icons")]
    RowLayoutMismatch { count: usize, sum: usize },
    /// Padding leaves no room for icons on a canvas this size.
    #[error("padding leaves no room for icons on a {width}x{height} canvas")]
    IconSizeTooSmall { width: u32, height: u32 },
}

/// Compute where every icon goes.
///
/// 1. `rows = table[icons.len()]`.
/// 2. Row height: the canvas height minus inter-row padding, split evenly
///    and floored to whole pixels.
/// 3. Vertical offset: half the height left over once rows and padding are
///    laid out.
/// 4. Icon size: the widest row's share of the canvas width (minus padding),
///    capped by the row height, floored to whole pixels. Every row uses it.
/// 5. Each row is centered horizontally on its own; offsets round to the
///    nearest pixel per row.
pub fn compute_placement_plan(
    icons: &IconSet,
    canvas: Size,
    padding: u32,
    table: &RowLayoutTable,
) -> Result<PlacementPlan, LayoutError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(LayoutError::ZeroCanvasDimension);
    }

    let count = icons.len();
    debug_assert!((1..=MAX_ICONS).contains(&count));
    let rows = table
        .get(count)
        .ok_or(LayoutError::UnmappedIconCount { count })?;
    rows.validate(count)?;

    let too_small = LayoutError::IconSizeTooSmall {
        width: canvas.width,
        height: canvas.height,
    };
    let w = canvas.width as f64;
    let h = canvas.height as f64;
    let pad = padding as f64;
    let row_count = rows.len() as f64;

    // Step 2: equal row bands.
    let row_height = ((h - (row_count - 1.0) * pad) / row_count).floor();
    if row_height < 1.0 {
        return Err(too_small);
    }

    // Step 3: center the block of bands vertically.
    let top = (h - row_count * row_height - (row_count - 1.0) * pad) / 2.0;

    // Step 4: one size for every row, driven by the widest.
    let widest = rows.widest() as f64;
    let width_share = (w - (widest - 1.0) * pad) / widest;
    let icon_size = width_share.min(row_height).floor();
    if icon_size < 1.0 {
        return Err(too_small);
    }

    // Step 5: place row by row.
    let mut placements = Vec::with_capacity(count);
    let mut ids = icons.iter();
    for (row, &in_row) in rows.rows().iter().enumerate() {
        let n = in_row as f64;
        let left = (w - (n * icon_size + (n - 1.0) * pad)) / 2.0;
        let y = (top + row as f64 * (pad + row_height)).round();
        for i in 0..in_row {
            // Row sizes sum to the icon count, checked above.
            let Some(icon) = ids.next() else { break };
            let x = (left + i as f64 * (icon_size + pad)).round();
            placements.push(Placement {
                icon,
                asset: icon.file_name(),
                row,
                x: x as u32,
                y: y as u32,
                size: icon_size as u32,
            });
        }
    }

    let plan = PlacementPlan {
        canvas,
        padding,
        row_height: row_height as u32,
        icon_size: icon_size as u32,
        rows: rows.clone(),
        placements,
    };
    tracing::trace!(
        count,
        rows = ?plan.rows.rows(),
        icon_size = plan.icon_size,
        row_height = plan.row_height,
        "computed placement plan"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn plan(icons: &[IconId], w: u32, h: u32, padding: u32) -> PlacementPlan {
        compute_placement_plan(
            &IconSet::resolve(icons.iter().copied()),
            Size::new(w, h),
            padding,
            &RowLayoutTable::default(),
        )
        .unwrap()
    }

    fn positions(plan: &PlacementPlan) -> Vec<(u32, u32)> {
        plan.placements.iter().map(|p| (p.x, p.y)).collect()
    }

    // ── RowLayout / RowLayoutTable ──────────────────────────────────────

    #[test]
    fn default_table_covers_all_counts() {
        let table = RowLayoutTable::default();
        for count in 1..=MAX_ICONS {
            let rows = table.get(count).unwrap();
            assert_eq!(rows.validate(count), Ok(()), "count {count}");
        }
        assert_eq!(table.get(3).unwrap().rows(), &[2, 1]);
        assert_eq!(table.get(5).unwrap().rows(), &[3, 2]);
        assert!(table.get(7).is_none());
    }

    #[test]
    fn row_layout_validate() {
        assert_eq!(RowLayout::from([2, 1]).validate(3), Ok(()));
        assert_eq!(
            RowLayout::from([2, 2]).validate(3),
            Err(LayoutError::RowLayoutMismatch { count: 3, sum: 4 })
        );
        assert_eq!(
            RowLayout::from([3, 0]).validate(3),
            Err(LayoutError::EmptyRow { count: 3 })
        );
        assert_eq!(
            RowLayout::new(Vec::new()).validate(1),
            Err(LayoutError::EmptyRow { count: 1 })
        );
    }

    #[test]
    fn merge_overrides_single_entry() {
        let table = RowLayoutTable::default().merge(&RowLayoutTable::empty().with(3, [3]));
        assert_eq!(table.get(3).unwrap().rows(), &[3]);
        assert_eq!(table.get(4).unwrap().rows(), &[2, 2]);
    }

    #[test]
    fn widest_and_total() {
        let rows = RowLayout::from(vec![1, 3, 2]);
        assert_eq!(rows.widest(), 3);
        assert_eq!(rows.total(), 6);
        assert_eq!(rows.len(), 3);
    }

    // ── Rect ────────────────────────────────────────────────────────────

    #[test]
    fn rect_overlap_is_exclusive_on_edges() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn rect_fits_within() {
        assert!(Rect::new(100, 0, 200, 200).fits_within(Size::new(300, 200)));
        assert!(!Rect::new(101, 0, 200, 200).fits_within(Size::new(300, 200)));
    }

    // ── compute_placement_plan ──────────────────────────────────────────

    #[test]
    fn single_icon_bounded_by_height() {
        let p = plan(&[IconId::Amex], 300, 200, 10);
        assert_eq!(p.len(), 1);
        assert_eq!(p.icon_size, 200);
        assert_eq!(p.row_height, 200);
        assert_eq!(positions(&p), vec![(50, 0)]);
        assert_eq!(p.placements[0].asset, "amex.png");
    }

    #[test]
    fn two_icons_one_row() {
        let p = plan(&[IconId::Mastercard, IconId::DinersClub], 300, 200, 10);
        // width share (300 - 10) / 2 = 145 < row height 200
        assert_eq!(p.icon_size, 145);
        assert_eq!(p.row_sizes(), vec![2]);
        // left = (300 - 300) / 2 = 0
        assert_eq!(positions(&p), vec![(0, 0), (155, 0)]);
    }

    #[test]
    fn three_icons_default_rows() {
        let p = plan(&[IconId::Jcb, IconId::Mastercard, IconId::Visa], 300, 200, 10);
        assert_eq!(p.rows.rows(), &[2, 1]);
        assert_eq!(p.row_height, 95);
        assert_eq!(p.icon_size, 95);
        // row 0: left = (300 - 200) / 2 = 50
        // row 1: left = (300 - 95) / 2 = 102.5, rounds to 103
        assert_eq!(positions(&p), vec![(50, 0), (155, 0), (103, 105)]);
        assert_eq!(p.row_sizes(), vec![2, 1]);
    }

    #[test]
    fn odd_height_centers_bands() {
        // (201 - 10) / 2 = 95.5 floors to 95, leaving 1px: top = 0.5
        let p = plan(
            &[IconId::Amex, IconId::Visa, IconId::Jcb, IconId::Dankort],
            300,
            201,
            10,
        );
        assert_eq!(p.row_height, 95);
        assert_eq!(p.placements[0].y, 1);
        assert_eq!(p.placements[2].y, 106);
    }

    #[test]
    fn custom_single_row_of_three() {
        let icons = IconSet::resolve([IconId::Visa, IconId::Mastercard, IconId::Maestro]);
        let table = RowLayoutTable::default().with(3, [3]);
        let p = compute_placement_plan(&icons, Size::new(400, 200), 10, &table).unwrap();
        // (400 - 20) / 3 = 126.67, floored
        assert_eq!(p.icon_size, 126);
        assert_eq!(p.row_sizes(), vec![3]);
        // left = (400 - 398) / 2 = 1
        assert_eq!(positions(&p), vec![(1, 0), (137, 0), (273, 0)]);
    }

    #[test]
    fn unmapped_count_fails() {
        let icons = IconSet::resolve(["visa", "mc", "amex"]);
        let table = RowLayoutTable::empty().with(2, [2]);
        assert_eq!(
            compute_placement_plan(&icons, Size::new(300, 200), 10, &table),
            Err(LayoutError::UnmappedIconCount { count: 3 })
        );
    }

    #[test]
    fn mismatched_rows_fail() {
        let icons = IconSet::resolve(["visa", "mc", "amex"]);
        let table = RowLayoutTable::default().with(3, [1, 1]);
        assert_eq!(
            compute_placement_plan(&icons, Size::new(300, 200), 10, &table),
            Err(LayoutError::RowLayoutMismatch { count: 3, sum: 2 })
        );
    }

    #[test]
    fn zero_canvas_fails() {
        let icons = IconSet::default();
        let table = RowLayoutTable::default();
        for size in [Size::new(0, 200), Size::new(300, 0)] {
            assert_eq!(
                compute_placement_plan(&icons, size, 10, &table),
                Err(LayoutError::ZeroCanvasDimension)
            );
        }
    }

    #[test]
    fn padding_too_large_fails() {
        let icons = IconSet::resolve(["visa", "mc", "amex", "jcb", "btc", "ltc"]);
        let table = RowLayoutTable::default();
        // widest row of 3 needs 2 gaps: 300 - 2 * 150 = 0
        assert_eq!(
            compute_placement_plan(&icons, Size::new(300, 400), 150, &table),
            Err(LayoutError::IconSizeTooSmall {
                width: 300,
                height: 400
            })
        );
        // two rows need one gap: 200 - 200 = 0
        assert_eq!(
            compute_placement_plan(&icons, Size::new(300, 200), 200, &table),
            Err(LayoutError::IconSizeTooSmall {
                width: 300,
                height: 200
            })
        );
    }

    #[test]
    fn zero_padding_fills_width() {
        let p = plan(&[IconId::Visa; 6], 300, 200, 0);
        assert_eq!(p.icon_size, 100);
        assert_eq!(
            positions(&p),
            vec![(0, 0), (100, 0), (200, 0), (0, 100), (100, 100), (200, 100)]
        );
    }

    #[test]
    fn tall_canvas_is_width_bound() {
        let p = plan(&[IconId::DinersClub, IconId::Discover, IconId::Jcb], 300, 400, 10);
        assert_eq!(p.row_height, 195);
        assert_eq!(p.icon_size, 145);
        assert_eq!(p.placements[2].y, 205);
    }

    #[test]
    fn wide_canvas_is_height_bound() {
        let p = plan(
            &[IconId::Maestro, IconId::UnionPay, IconId::Visa, IconId::Mastercard],
            300,
            100,
            10,
        );
        assert_eq!(p.row_height, 45);
        assert_eq!(p.icon_size, 45);
        // left = (300 - 100) / 2 = 100
        assert_eq!(positions(&p), vec![(100, 0), (155, 0), (100, 55), (155, 55)]);
    }

    #[test]
    fn placements_keep_input_order() {
        let ids = [
            IconId::Ethereum,
            IconId::Amex,
            IconId::Bitcoin,
            IconId::Jcb,
            IconId::Visa,
        ];
        let p = plan(&ids, 300, 200, 10);
        let placed: Vec<IconId> = p.placements.iter().map(|p| p.icon).collect();
        assert_eq!(placed, ids.to_vec());
        assert_eq!(p.row_sizes(), vec![3, 2]);
    }
}
