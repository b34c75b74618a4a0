//! Request configuration: which icons, how big, how far apart.

use crate::icon::{IconRef, IconSet};
use crate::layout::{
    LayoutError, PlacementPlan, RowLayout, RowLayoutTable, Size, compute_placement_plan,
};

/// Default canvas width.
pub const DEFAULT_WIDTH: u32 = 300;
/// Default canvas height.
pub const DEFAULT_HEIGHT: u32 = 200;
/// Default gap between icons and between rows.
pub const DEFAULT_PADDING: u32 = 10;

/// Everything needed to lay out one image.
///
/// Built by value: each setter consumes the config and returns the updated
/// one, so a config can be cloned and varied without affecting the
/// original.
///
/// # Example
///
/// ```
/// use payicons::{IconId, RequestConfig};
///
/// let plan = RequestConfig::new()
///     .icons(["visa", "mc", "maestro"])
///     .size(400, 200)
///     .padding(10)
///     .row_layout(3, [3])
///     .plan()
///     .unwrap();
///
/// assert_eq!(plan.row_sizes(), vec![3]);
/// assert_eq!(plan.icon_size, 126);
/// assert_eq!(plan.placements[2].icon, IconId::Maestro);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestConfig {
    pub icons: IconSet,
    pub canvas: Size,
    pub padding: u32,
    pub row_layouts: RowLayoutTable,
}

impl RequestConfig {
    /// Default icons on a 300×200 canvas with 10px padding and the default
    /// row layouts.
    pub fn new() -> Self {
        Self {
            icons: IconSet::default(),
            canvas: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            padding: DEFAULT_PADDING,
            row_layouts: RowLayoutTable::default(),
        }
    }

    /// Set the icons from ids, numeric codes, or aliases.
    ///
    /// See [`IconSet::resolve`] for filtering, truncation, and fallback.
    pub fn icons<I, T>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<IconRef>,
    {
        self.icons = IconSet::resolve(icons);
        self
    }

    /// Set an already resolved icon set.
    pub fn icon_set(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    /// Set the gap between icons and between rows.
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the output canvas size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.canvas = Size::new(width, height);
        self
    }

    /// Replace the whole row-layout table.
    pub fn row_layouts(mut self, table: RowLayoutTable) -> Self {
        self.row_layouts = table;
        self
    }

    /// Override the layout used for `count` icons, keeping other entries.
    pub fn row_layout(mut self, count: usize, rows: impl Into<RowLayout>) -> Self {
        self.row_layouts.set(count, rows);
        self
    }

    /// Override every count `overrides` maps, keeping the rest of the table.
    pub fn row_layout_overrides(mut self, overrides: &RowLayoutTable) -> Self {
        self.row_layouts = self.row_layouts.merge(overrides);
        self
    }

    /// Compute the placement plan for this config.
    pub fn plan(&self) -> Result<PlacementPlan, LayoutError> {
        compute_placement_plan(&self.icons, self.canvas, self.padding, &self.row_layouts)
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{FALLBACK_ICONS, IconId};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn defaults() {
        let config = RequestConfig::default();
        assert_eq!(config.canvas, Size::new(300, 200));
        assert_eq!(config.padding, 10);
        assert_eq!(config.icons.as_slice(), &FALLBACK_ICONS);
        assert_eq!(config.row_layouts, RowLayoutTable::default());
    }

    #[test]
    fn setters_do_not_touch_clones() {
        let base = RequestConfig::new().icons(["amex"]);
        let wide = base.clone().size(600, 100).padding(4);
        assert_eq!(base.canvas, Size::new(300, 200));
        assert_eq!(base.padding, 10);
        assert_eq!(wide.canvas, Size::new(600, 100));
        assert_eq!(wide.icons, base.icons);
    }

    #[test]
    fn case_insensitive_strings_resolve() {
        let plan = RequestConfig::new()
            .icons(["JCB", "MC", "vISa"])
            .plan()
            .unwrap();
        let ids: Vec<IconId> = plan.placements.iter().map(|p| p.icon).collect();
        assert_eq!(ids, vec![IconId::Jcb, IconId::Mastercard, IconId::Visa]);
        assert_eq!(plan.row_sizes(), vec![2, 1]);
    }

    #[test]
    fn invalid_only_plans_fallback_pair() {
        let plan = RequestConfig::new().icons(["interac"]).plan().unwrap();
        let ids: Vec<IconId> = plan.placements.iter().map(|p| p.icon).collect();
        assert_eq!(ids, FALLBACK_ICONS.to_vec());
    }

    #[test]
    fn more_than_six_plans_six() {
        let plan = RequestConfig::new().icons(IconId::ALL).plan().unwrap();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.placements[5].icon, IconId::Maestro);
    }

    #[test]
    fn replacing_table_drops_defaults() {
        let config = RequestConfig::new()
            .icons(["visa", "mc", "amex"])
            .row_layouts(RowLayoutTable::empty().with(2, [2]));
        assert_eq!(
            config.plan(),
            Err(LayoutError::UnmappedIconCount { count: 3 })
        );
    }

    #[test]
    fn row_layout_override_keeps_other_counts() {
        let config = RequestConfig::new().row_layout(3, [1, 2]);
        assert_eq!(config.row_layouts.get(3).unwrap().rows(), &[1, 2]);
        assert_eq!(config.row_layouts.get(6).unwrap().rows(), &[3, 3]);
        let plan = config.icons(["btc", "bch", "ltc"]).plan().unwrap();
        assert_eq!(plan.row_sizes(), vec![1, 2]);
    }

    #[test]
    fn override_table_merges_into_defaults() {
        let overrides = RowLayoutTable::empty().with(3, [3]).with(4, [1, 3]);
        let config = RequestConfig::new().row_layout_overrides(&overrides);
        assert_eq!(config.row_layouts.get(3).unwrap().rows(), &[3]);
        assert_eq!(config.row_layouts.get(4).unwrap().rows(), &[1, 3]);
        assert_eq!(config.row_layouts.get(5).unwrap().rows(), &[3, 2]);

        let plan = config
            .icons(["visa", "mc", "maestro"])
            .size(400, 200)
            .plan()
            .unwrap();
        assert_eq!(plan.row_sizes(), vec![3]);
        assert_eq!(plan.icon_size, 126);
    }
}
