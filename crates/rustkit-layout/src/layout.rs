//! # Grid sizing and placement
//!
//! A layout pass has three phases:
//!
//! 1. **Measurement** ([`Grid::calculate_layout_data`]): collect the preferred
//!    size of every visible leaf and nested grid, turn them into per-axis
//!    track requirements and solve column and row boundaries.
//! 2. **Extra-space distribution**: when the target rectangle is larger than
//!    the preferred size, resizable tracks absorb the slack.
//! 3. **Placement**: compute each entry's box from the boundaries, apply
//!    gaps, visual paddings and alignment, then `place` leaves and recurse
//!    into nested grids.
//!
//! [`LayoutData`] is rebuilt from scratch on every measurement; nothing is
//! cached between passes.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::coord_solver::{solve_coordinates, TrackConstraint};
use crate::grid::{EntryId, EntryKind, GridEntry};
use crate::{
    Constraints, Gaps, Grid, GridError, HorizontalAlign, LayoutElement, Rect, Result, Size,
    VerticalAlign,
};

/// Shared baseline of the baseline-aligned entries of one row.
///
/// The group is positioned in the row as one block, using the vertical
/// alignment of its first visible member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowBaseline {
    /// Largest distance from the row top to the baseline.
    pub ascent: i32,
    /// Largest distance from the baseline to the row bottom.
    pub descent: i32,
    /// Alignment of the whole group inside the row.
    pub align: VerticalAlign,
}

impl RowBaseline {
    pub fn height(&self) -> i32 {
        self.ascent + self.descent
    }
}

/// Result of measuring a grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutData {
    /// Number of columns and rows, invisible entries included.
    dimension: (usize, usize),
    /// Preferred size of each visible leaf and nested grid.
    preferred_sizes: HashMap<EntryId, Size>,
    /// Measurement of each nested grid.
    sub_grids: HashMap<EntryId, LayoutData>,
    /// Baseline of each baseline-aligned leaf.
    baselines: HashMap<EntryId, i32>,
    /// Baseline group per row.
    row_baselines: HashMap<usize, RowBaseline>,
    columns_coord: Vec<i32>,
    rows_coord: Vec<i32>,
}

impl LayoutData {
    /// Number of columns and rows.
    pub fn dimension(&self) -> (usize, usize) {
        self.dimension
    }

    /// Column boundaries, `columns + 1` values starting at 0.
    pub fn columns_coord(&self) -> &[i32] {
        &self.columns_coord
    }

    /// Row boundaries, `rows + 1` values starting at 0.
    pub fn rows_coord(&self) -> &[i32] {
        &self.rows_coord
    }

    /// Size needed to show every entry at its preferred size.
    pub fn preferred_size(&self) -> Size {
        Size::new(
            self.columns_coord.last().copied().unwrap_or(0),
            self.rows_coord.last().copied().unwrap_or(0),
        )
    }

    /// Measured size of an entry. `None` for invisible leaves.
    pub fn preferred_size_of(&self, id: EntryId) -> Option<Size> {
        self.preferred_sizes.get(&id).copied()
    }

    /// Measurement of a nested grid.
    pub fn sub_grid(&self, id: EntryId) -> Option<&LayoutData> {
        self.sub_grids.get(&id)
    }

    /// Baseline group of a row, if any entry of the row aligns by baseline.
    pub fn row_baseline(&self, row: usize) -> Option<RowBaseline> {
        self.row_baselines.get(&row).copied()
    }
}

/// Axis-independent view of one side of the grid.
struct AxisSpec<'a> {
    distance: &'a [i32],
    dimension: usize,
}

impl AxisSpec<'_> {
    /// Separator after the last track of `start..start + span`, if that
    /// track is not the last one of the grid.
    fn trailing_distance(&self, start: usize, span: usize) -> i32 {
        let end = start + span;
        if end < self.dimension {
            self.distance.get(end - 1).copied().unwrap_or(0)
        } else {
            0
        }
    }
}

impl<E: LayoutElement> Grid<E> {
    /// Measure the grid and solve its track boundaries.
    pub fn calculate_layout_data(&self) -> LayoutData {
        let (columns, rows) = self.dimension();
        let column_axis = AxisSpec {
            distance: &self.columns_distance,
            dimension: columns,
        };
        let row_axis = AxisSpec {
            distance: &self.rows_distance,
            dimension: rows,
        };

        let mut data = LayoutData {
            dimension: (columns, rows),
            ..LayoutData::default()
        };
        let mut column_constraints = Vec::with_capacity(self.entries.len());
        let mut row_constraints = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let size = match &entry.kind {
                EntryKind::Leaf(element) => {
                    if !element.is_visible() {
                        trace!("Grid measure: {:?} invisible, skipped", entry.id);
                        continue;
                    }
                    element.preferred_size()
                }
                EntryKind::SubGrid(grid) => {
                    let sub_data = grid.calculate_layout_data();
                    let size = sub_data.preferred_size();
                    data.sub_grids.insert(entry.id, sub_data);
                    size
                }
            };
            data.preferred_sizes.insert(entry.id, size);

            let c = &entry.constraints;
            let paddings = c.effective_visual_paddings();

            column_constraints.push(TrackConstraint::new(
                c.x,
                c.width,
                size.width + c.gaps.horizontal() - paddings.horizontal()
                    + column_axis.trailing_distance(c.x, c.width),
            ));

            // Row height of baseline entries comes from their row's group
            if let Some(baseline) = baseline_of(entry, size) {
                trace!("Grid measure: {:?} in baseline group of row {}", entry.id, c.y);
                data.baselines.insert(entry.id, baseline);
                let group = data.row_baselines.entry(c.y).or_insert(RowBaseline {
                    align: c.vertical_align,
                    ..RowBaseline::default()
                });
                group.ascent = group.ascent.max(c.gaps.top - paddings.top + baseline);
                group.descent = group
                    .descent
                    .max(size.height - baseline + c.gaps.bottom - paddings.bottom);
                continue;
            }

            row_constraints.push(TrackConstraint::new(
                c.y,
                c.height,
                size.height + c.gaps.vertical() - paddings.vertical()
                    + row_axis.trailing_distance(c.y, c.height),
            ));
        }

        for (&row, group) in &data.row_baselines {
            row_constraints.push(TrackConstraint::new(
                row,
                1,
                group.height() + row_axis.trailing_distance(row, 1),
            ));
        }

        data.columns_coord = solve_coordinates(columns, &column_constraints);
        data.rows_coord = solve_coordinates(rows, &row_constraints);

        debug!(
            "Grid measure: {}x{} tracks, {} entries, preferred {:?}",
            columns,
            rows,
            self.entries.len(),
            data.preferred_size()
        );

        data
    }

    /// Size needed to show every entry at its preferred size.
    pub fn preferred_size(&self) -> Size {
        self.calculate_layout_data().preferred_size()
    }

    /// Measure the grid and lay it out in `rect`.
    ///
    /// Returns the measurement the pass used.
    pub fn layout(&mut self, rect: Rect) -> Result<LayoutData> {
        let data = self.calculate_layout_data();
        self.layout_with_data(&data, rect)?;
        Ok(data)
    }

    /// Lay the grid out in `rect` using an earlier measurement.
    ///
    /// `data` must come from `calculate_layout_data` on this grid with no
    /// structural change since; an entry without a recorded measurement
    /// fails with [`GridError::InconsistentState`]. Elements placed before
    /// the failure keep their new bounds.
    pub fn layout_with_data(&mut self, data: &LayoutData, rect: Rect) -> Result<()> {
        debug!(
            "Grid layout: rect {:?}, preferred {:?}, {} entries",
            rect,
            data.preferred_size(),
            self.entries.len()
        );

        let mut columns_coord = data.columns_coord.clone();
        let mut rows_coord = data.rows_coord.clone();
        distribute_extra_space(&mut columns_coord, &self.resizable_columns, rect.width);
        distribute_extra_space(&mut rows_coord, &self.resizable_rows, rect.height);

        let (columns, rows) = data.dimension;
        let column_axis = AxisSpec {
            distance: &self.columns_distance,
            dimension: columns,
        };
        let row_axis = AxisSpec {
            distance: &self.rows_distance,
            dimension: rows,
        };

        for entry in &mut self.entries {
            if let EntryKind::Leaf(element) = &entry.kind {
                if !element.is_visible() {
                    continue;
                }
            }

            let c = &entry.constraints;
            let cell = c.cell_rect();
            let preferred = data
                .preferred_sizes
                .get(&entry.id)
                .copied()
                .filter(|_| cell.right() <= columns && cell.bottom() <= rows)
                .ok_or(GridError::InconsistentState(entry.id))?;

            let cell_box = Rect::new(
                rect.x + columns_coord[c.x],
                rect.y + rows_coord[c.y],
                columns_coord[cell.right()] - columns_coord[c.x]
                    - column_axis.trailing_distance(c.x, c.width),
                rows_coord[cell.bottom()] - rows_coord[c.y]
                    - row_axis.trailing_distance(c.y, c.height),
            );

            let paddings = c.effective_visual_paddings();
            let (x, width) = align_horizontally(c, &paddings, cell_box, preferred.width);
            let (y, height) = match data.baselines.get(&entry.id) {
                Some(&baseline) => {
                    let group = data
                        .row_baselines
                        .get(&c.y)
                        .copied()
                        .ok_or(GridError::InconsistentState(entry.id))?;
                    align_to_baseline(cell_box, preferred.height, baseline, group)
                }
                None => align_vertically(c, &paddings, cell_box, preferred.height),
            };
            let bounds = Rect::new(x, y, width, height);

            match &mut entry.kind {
                EntryKind::Leaf(element) => {
                    trace!("Grid place: {:?} at {:?}", entry.id, bounds);
                    element.place(bounds);
                }
                EntryKind::SubGrid(grid) => {
                    let sub_data = data
                        .sub_grids
                        .get(&entry.id)
                        .ok_or(GridError::InconsistentState(entry.id))?;
                    trace!("Grid place: sub-grid {:?} at {:?}", entry.id, bounds);
                    grid.layout_with_data(sub_data, bounds)?;
                }
            }
        }

        Ok(())
    }
}

/// Baseline of a leaf that takes part in its row's baseline group.
fn baseline_of<E: LayoutElement>(entry: &GridEntry<E>, size: Size) -> Option<i32> {
    let c = &entry.constraints;
    if !c.baseline_align || c.height != 1 || c.vertical_align == VerticalAlign::Fill {
        return None;
    }
    let EntryKind::Leaf(element) = &entry.kind else {
        return None;
    };
    c.component_helper
        .as_ref()
        .and_then(|helper| helper.baseline(size))
        .or_else(|| element.baseline(size))
}

/// Stretch `coords` so the last boundary reaches `available`.
///
/// Only resizable tracks before the last boundary take part. Each one gets
/// `extra / remaining` of what is left, so the last resizable track picks up
/// the rounding remainder and the corrections sum to `extra` exactly.
/// Nothing happens when there is no slack.
pub fn distribute_extra_space(coords: &mut [i32], resizable: &BTreeSet<usize>, available: i32) {
    let Some(&last) = coords.last() else {
        return;
    };
    let mut extra = available - last;
    let track_count = coords.len() - 1;
    let in_scope = resizable.range(..track_count).count();
    let mut remaining = in_scope as i32;
    if extra <= 0 || remaining == 0 {
        return;
    }

    let mut shift = 0;
    for (index, coord) in coords.iter_mut().enumerate() {
        *coord += shift;
        if index < track_count && resizable.contains(&index) {
            let correction = extra / remaining;
            shift += correction;
            extra -= correction;
            remaining -= 1;
        }
    }

    trace!("Grid stretch: {} resizable tracks, coords {:?}", in_scope, coords);
}

/// Position and width inside the cell box.
fn align_horizontally(
    c: &Constraints,
    paddings: &Gaps,
    cell_box: Rect,
    preferred: i32,
) -> (i32, i32) {
    let start = cell_box.x + c.gaps.left - paddings.left;
    let full = cell_box.width - c.gaps.horizontal() + paddings.horizontal();
    let size = if c.horizontal_align == HorizontalAlign::Fill {
        full
    } else {
        full.min(preferred)
    };
    let offset = match c.horizontal_align {
        HorizontalAlign::Left | HorizontalAlign::Fill => 0,
        HorizontalAlign::Center => (full - size) / 2,
        HorizontalAlign::Right => full - size,
    };
    (start + offset, size)
}

/// Position and height inside the cell box.
fn align_vertically(
    c: &Constraints,
    paddings: &Gaps,
    cell_box: Rect,
    preferred: i32,
) -> (i32, i32) {
    let start = cell_box.y + c.gaps.top - paddings.top;
    let full = cell_box.height - c.gaps.vertical() + paddings.vertical();
    let size = if c.vertical_align == VerticalAlign::Fill {
        full
    } else {
        full.min(preferred)
    };
    let offset = match c.vertical_align {
        VerticalAlign::Top | VerticalAlign::Fill => 0,
        VerticalAlign::Center => (full - size) / 2,
        VerticalAlign::Bottom => full - size,
    };
    (start + offset, size)
}

/// Position a baseline-group member so its baseline sits on the row's
/// shared baseline. The group as a whole is aligned in the row box.
fn align_to_baseline(
    cell_box: Rect,
    preferred: i32,
    baseline: i32,
    group: RowBaseline,
) -> (i32, i32) {
    let slack = cell_box.height - group.height();
    let offset = match group.align {
        VerticalAlign::Top | VerticalAlign::Fill => 0,
        VerticalAlign::Center => slack / 2,
        VerticalAlign::Bottom => slack,
    };
    (cell_box.y + offset + group.ascent - baseline, preferred)
}
