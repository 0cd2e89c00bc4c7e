//! Timeline grid - anchors bucketed into scale-sized cells
//!
//! A grid view is aligned to its unit: the first cell starts at
//! `floor(view / unit) × unit`. Each cell lists the anchors whose event or
//! origin coordinate falls inside `[cell, cell + unit)`.

use uls_core::{default_scale, ForensicAnchor, ScaleDescriptor, Uls, TROPICAL_YEAR_SECONDS};

/// One cell of the timeline grid
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell<'a> {
    pub uls: Uls,
    pub anchors: Vec<&'a ForensicAnchor>,
}

impl GridCell<'_> {
    /// Is a prophecy in this cell being fulfilled after it was issued?
    pub fn has_prophecy_link(&self) -> bool {
        self.anchors
            .iter()
            .any(|a| a.is_prophecy() && a.origin_uls.map_or(false, |o| o < self.uls))
    }
}

/// Cells of a grid starting at the unit boundary at or before `view`
pub fn timeline_grid<'a>(
    view: Uls,
    scale: &ScaleDescriptor,
    anchors: &'a [ForensicAnchor],
) -> Vec<GridCell<'a>> {
    let unit = scale.unit_seconds;
    let base = (view.0 / unit).floor() * unit;

    (0..scale.cell_count)
        .map(|i| {
            let start = Uls(base + i as f64 * unit);
            GridCell {
                uls: start,
                anchors: anchors.iter().filter(|a| a.falls_within(start, unit)).collect(),
            }
        })
        .collect()
}

/// Tropical years from a prophecy's issue to a cell; None for other anchors
pub fn trajectory_drift_years(cell: Uls, anchor: &ForensicAnchor) -> Option<f64> {
    anchor
        .origin_uls
        .filter(|_| anchor.is_prophecy())
        .map(|origin| (cell - origin) / TROPICAL_YEAR_SECONDS)
}

/// Header label of a cell: hour for 24h, civil year for year scale, else 1-based index
pub fn cell_label(scale: &ScaleDescriptor, index: usize, cell: &GridCell<'_>) -> String {
    match scale.id {
        "24h" => format!("{}:00", index),
        "year" => cell.uls.civil().year().to_string(),
        _ => (index + 1).to_string(),
    }
}

/// A navigable grid position: live time plus a manual offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridView {
    pub scale: &'static ScaleDescriptor,
    /// Seconds added to the live coordinate
    pub offset: f64,
}

impl GridView {
    pub fn new(scale: &'static ScaleDescriptor) -> Self {
        GridView { scale, offset: 0.0 }
    }

    /// Coordinate the grid is centred on
    pub fn view_uls(&self, live: Uls) -> Uls {
        live + self.offset
    }

    /// Move by whole cells (negative goes back)
    pub fn step(&mut self, cells: i64) {
        self.offset += cells as f64 * self.scale.unit_seconds;
    }

    /// Return to live time
    pub fn sync(&mut self) {
        self.offset = 0.0;
    }

    /// Switch zoom level and return to live time
    ///
    /// The offset is counted in cells of the old scale, so it is dropped.
    pub fn rescale(&mut self, scale: &'static ScaleDescriptor) {
        self.scale = scale;
        self.offset = 0.0;
    }

    pub fn cells<'a>(&self, live: Uls, anchors: &'a [ForensicAnchor]) -> Vec<GridCell<'a>> {
        timeline_grid(self.view_uls(live), self.scale, anchors)
    }
}

impl Default for GridView {
    fn default() -> Self {
        Self::new(default_scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uls_core::{find_anchor, find_scale, FORENSIC_ANCHORS};

    #[test]
    fn test_grid_aligned_to_unit() {
        let scale = find_scale("century").unwrap();
        let view = Uls(50_000_000_000.0);
        let cells = timeline_grid(view, scale, FORENSIC_ANCHORS);

        assert_eq!(cells.len(), 10);
        assert!(cells[0].uls <= view);
        assert!(view < cells[0].uls + scale.unit_seconds);
        assert_eq!(cells[0].uls.0 % scale.unit_seconds, 0.0);
        for pair in cells.windows(2) {
            assert_eq!(pair[1].uls - pair[0].uls, scale.unit_seconds);
        }
    }

    #[test]
    fn test_negative_view_floors_down() {
        let scale = find_scale("millennium").unwrap();
        let cells = timeline_grid(Uls(-1.0), scale, &[]);
        assert_eq!(cells[0].uls, Uls(-scale.unit_seconds));
    }

    #[test]
    fn test_anchor_bucketing() {
        let scale = find_scale("century").unwrap();
        let reform = find_anchor("gregorian-reform").unwrap();
        let cells = timeline_grid(reform.uls, scale, FORENSIC_ANCHORS);
        assert!(cells[0].anchors.iter().any(|a| a.id == "gregorian-reform"));
    }

    #[test]
    fn test_prophecy_origin_bucketed() {
        let scale = find_scale("year").unwrap();
        let newton = find_anchor("newton-2060").unwrap();
        let origin = newton.origin_uls.unwrap();
        let cells = timeline_grid(origin, scale, FORENSIC_ANCHORS);

        let cell = &cells[0];
        assert!(cell.anchors.iter().any(|a| a.id == "newton-2060"));
        // origin sits inside this cell, not before it
        assert!(!cell.has_prophecy_link());
    }

    #[test]
    fn test_prophecy_link_on_target_cell() {
        let scale = find_scale("year").unwrap();
        let newton = find_anchor("newton-2060").unwrap();
        let cells = timeline_grid(newton.uls, scale, FORENSIC_ANCHORS);
        assert!(cells[0].has_prophecy_link());
    }

    #[test]
    fn test_trajectory_drift() {
        let newton = find_anchor("newton-2060").unwrap();
        let origin = newton.origin_uls.unwrap();
        let drift = trajectory_drift_years(origin + 10.0 * TROPICAL_YEAR_SECONDS, newton).unwrap();
        assert!((drift - 10.0).abs() < 1e-9);

        let flood = find_anchor("great-flood").unwrap();
        assert_eq!(trajectory_drift_years(Uls::EPOCH, flood), None);
    }

    #[test]
    fn test_cell_labels() {
        let hours = find_scale("24h").unwrap();
        let cells = timeline_grid(Uls::EPOCH, hours, &[]);
        assert_eq!(cell_label(hours, 3, &cells[3]), "3:00");

        let years = find_scale("year").unwrap();
        let start = Uls::from_civil(1999, 6, 1).unwrap();
        let cells = timeline_grid(start, years, &[]);
        // tropical-year units start a few hours before the civil New Year
        assert_eq!(cell_label(years, 0, &cells[0]), "1998");
        assert_eq!(cells[0].uls.civil().date_string(), "1998-12-31");

        let month = find_scale("month").unwrap();
        let cells = timeline_grid(Uls::EPOCH, month, &[]);
        assert_eq!(cell_label(month, 0, &cells[0]), "1");
    }

    #[test]
    fn test_grid_view_navigation() {
        let mut view = GridView::default();
        assert_eq!(view.scale.id, "month");

        let live = Uls(63_000_000_000.0);
        view.step(2);
        assert_eq!(view.view_uls(live), live + 2.0 * 2_629_743.0);
        view.step(-3);
        assert_eq!(view.offset, -2_629_743.0);

        view.step(-1);
        view.sync();
        assert_eq!(view.view_uls(live), live);
    }

    #[test]
    fn test_rescale_returns_to_live_time() {
        let live = Uls(63_000_000_000.0);
        let mut view = GridView::default();
        view.step(3);
        assert_eq!(view.offset, 3.0 * 2_629_743.0);

        let decade = find_scale("decade").unwrap();
        view.rescale(decade);
        assert_eq!(view.scale.id, "decade");
        assert_eq!(view.offset, 0.0);
        assert_eq!(view.view_uls(live), live);
        assert_eq!(view.cells(live, &[]).len(), 10);
        assert_eq!(view.cells(live, &[]), timeline_grid(live, decade, &[]));
    }
}
