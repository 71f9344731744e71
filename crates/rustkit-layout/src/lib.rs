//! # RustKit Layout
//!
//! Constraint-based grid layout engine for RustKit.
//!
//! Elements are registered into a [`Grid`] at a cell position with a span,
//! alignment and insets described by [`Constraints`]. A layout pass measures
//! every visible element, solves the smallest column and row boundaries that
//! fit them, stretches resizable tracks into any extra space and finally
//! places each element inside its cell.
//!
//! ## Design Goals
//!
//! 1. **Minimal tracks**: boundaries are the smallest non-decreasing values satisfying every entry
//! 2. **Nested grids**: a grid can be an entry of another grid and is measured recursively
//! 3. **Separators**: fixed gutters between tracks that never belong to an entry's box
//! 4. **Exact stretching**: integer corrections that sum to the available slack
//! 5. **Baseline rows**: baseline-aligned entries of a row share one baseline
//!
//! ## Example
//!
//! ```ignore
//! let mut grid = Grid::new();
//! grid.register(label, Constraints::new(0, 0))?;
//! grid.register(field, Constraints::new(1, 0).horizontal_align(HorizontalAlign::Fill))?;
//! grid.set_resizable_columns([1]).set_columns_distance([6]);
//!
//! let preferred = grid.preferred_size();
//! grid.layout(Rect::new(0, 0, preferred.width + 100, preferred.height))?;
//! ```

pub mod constraints;
pub mod coord_solver;
pub mod element;
pub mod geometry;
pub mod grid;
pub mod grid_layout;
pub mod layout;

pub use constraints::{CellRect, ComponentHelper, Constraints, HorizontalAlign, VerticalAlign};
pub use coord_solver::{solve_coordinates, TrackConstraint};
pub use element::LayoutElement;
pub use geometry::{Gaps, Rect, Size};
pub use grid::{EntryId, EntryKind, Grid, GridEntry};
pub use grid_layout::{GridLayout, GridLayoutBuilder, GridLayoutConfig};
pub use layout::{distribute_extra_space, LayoutData, RowBaseline};

use thiserror::Error;

/// Errors that can occur in grid registration and layout.
///
/// All of them are programming errors on the caller's side; the engine does
/// not retry and does not undo elements already placed in the failing pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell already occupied: {requested:?} overlaps {existing:?}")]
    Overlap {
        requested: CellRect,
        existing: CellRect,
    },

    #[error("Entry not registered: {0:?}")]
    NotRegistered(EntryId),

    #[error("Inconsistent layout state: no measurement recorded for {0:?}")]
    InconsistentState(EntryId),
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
