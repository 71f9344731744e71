//! # Grid
//!
//! Container of grid entries. An entry is either a leaf element or a nested
//! grid, positioned by its [`Constraints`]. Entries live in a flat list: with
//! spans a dense 2D array would mostly hold copies or holes, and grids are
//! small enough that an O(n) overlap scan on registration is fine.
//!
//! Sizing and placement live in [`crate::layout`].

use std::collections::BTreeSet;

use tracing::trace;

use crate::{Constraints, GridError, LayoutElement, Result};

/// Identifies an entry within the grid that registered it.
///
/// Ids are never reused, so an id kept past `unregister` can not silently
/// address a newer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Content of a grid entry.
#[derive(Debug)]
pub enum EntryKind<E> {
    /// A single element.
    Leaf(E),
    /// A grid owned by this entry.
    SubGrid(Box<Grid<E>>),
}

/// A registered entry.
#[derive(Debug)]
pub struct GridEntry<E> {
    pub id: EntryId,
    pub constraints: Constraints,
    pub kind: EntryKind<E>,
}

impl<E> GridEntry<E> {
    pub fn is_sub_grid(&self) -> bool {
        matches!(self.kind, EntryKind::SubGrid(_))
    }
}

/// A 2D grid of elements and nested grids.
#[derive(Debug)]
pub struct Grid<E> {
    pub(crate) entries: Vec<GridEntry<E>>,
    /// Columns that absorb extra horizontal space.
    pub(crate) resizable_columns: BTreeSet<usize>,
    /// Rows that absorb extra vertical space.
    pub(crate) resizable_rows: BTreeSet<usize>,
    /// `columns_distance[i]` separates column `i` from column `i + 1`.
    pub(crate) columns_distance: Vec<i32>,
    /// `rows_distance[i]` separates row `i` from row `i + 1`.
    pub(crate) rows_distance: Vec<i32>,
    next_id: u64,
}

impl<E> Default for Grid<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            resizable_columns: BTreeSet::new(),
            resizable_rows: BTreeSet::new(),
            columns_distance: Vec::new(),
            rows_distance: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E: LayoutElement> Grid<E> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element.
    ///
    /// Fails with [`GridError::Overlap`] if any cell of the requested
    /// rectangle is already taken, visible or not.
    pub fn register(&mut self, element: E, constraints: Constraints) -> Result<EntryId> {
        self.insert(constraints, EntryKind::Leaf(element))
    }

    /// Register a new, empty nested grid and return its id.
    pub fn register_sub_grid(&mut self, constraints: Constraints) -> Result<EntryId> {
        self.insert(constraints, EntryKind::SubGrid(Box::new(Grid::new())))
    }

    /// Register an already populated nested grid.
    pub fn register_grid(&mut self, grid: Grid<E>, constraints: Constraints) -> Result<EntryId> {
        self.insert(constraints, EntryKind::SubGrid(Box::new(grid)))
    }

    /// Remove a leaf element and hand it back.
    pub fn unregister(&mut self, id: EntryId) -> Result<E> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        match entry.kind {
            EntryKind::Leaf(element) => Ok(element),
            kind => {
                self.entries.insert(index, GridEntry { kind, ..entry });
                Err(GridError::NotRegistered(id))
            }
        }
    }

    /// Remove a nested grid and hand it back.
    pub fn unregister_sub_grid(&mut self, id: EntryId) -> Result<Grid<E>> {
        let index = self.index_of(id)?;
        let entry = self.entries.remove(index);
        match entry.kind {
            EntryKind::SubGrid(grid) => Ok(*grid),
            kind => {
                self.entries.insert(index, GridEntry { kind, ..entry });
                Err(GridError::NotRegistered(id))
            }
        }
    }

    fn index_of(&self, id: EntryId) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(GridError::NotRegistered(id))
    }

    fn insert(&mut self, constraints: Constraints, kind: EntryKind<E>) -> Result<EntryId> {
        let requested = constraints.cell_rect();
        if let Some(existing) = self
            .entries
            .iter()
            .map(|e| e.constraints.cell_rect())
            .find(|rect| rect.intersects(&requested))
        {
            return Err(GridError::Overlap {
                requested,
                existing,
            });
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        trace!(
            "Grid register {:?} at {:?} (sub-grid: {})",
            id,
            requested,
            matches!(kind, EntryKind::SubGrid(_))
        );
        self.entries.push(GridEntry {
            id,
            constraints,
            kind,
        });
        Ok(id)
    }
}

impl<E> Grid<E> {
    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &GridEntry<E>> {
        self.entries.iter()
    }

    fn entry(&self, id: EntryId) -> Option<&GridEntry<E>> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut GridEntry<E>> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Constraints of an entry.
    pub fn constraints(&self, id: EntryId) -> Option<&Constraints> {
        self.entry(id).map(|e| &e.constraints)
    }

    /// The entry covering cell `(x, y)`.
    pub fn entry_at(&self, x: usize, y: usize) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|e| e.constraints.cell_rect().contains(x, y))
            .map(|e| e.id)
    }

    pub fn element(&self, id: EntryId) -> Option<&E> {
        match &self.entry(id)?.kind {
            EntryKind::Leaf(element) => Some(element),
            EntryKind::SubGrid(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: EntryId) -> Option<&mut E> {
        match &mut self.entry_mut(id)?.kind {
            EntryKind::Leaf(element) => Some(element),
            EntryKind::SubGrid(_) => None,
        }
    }

    pub fn sub_grid(&self, id: EntryId) -> Option<&Grid<E>> {
        match &self.entry(id)?.kind {
            EntryKind::SubGrid(grid) => Some(grid),
            EntryKind::Leaf(_) => None,
        }
    }

    pub fn sub_grid_mut(&mut self, id: EntryId) -> Option<&mut Grid<E>> {
        match &mut self.entry_mut(id)?.kind {
            EntryKind::SubGrid(grid) => Some(grid),
            EntryKind::Leaf(_) => None,
        }
    }

    /// Entries sharing a width group label.
    pub fn width_group_members<'a>(&'a self, group: &'a str) -> impl Iterator<Item = EntryId> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.constraints.width_group.as_deref() == Some(group))
            .map(|e| e.id)
    }

    /// Number of columns and rows covered by the entries.
    pub fn dimension(&self) -> (usize, usize) {
        self.entries.iter().fold((0, 0), |(columns, rows), e| {
            let rect = e.constraints.cell_rect();
            (columns.max(rect.right()), rows.max(rect.bottom()))
        })
    }

    pub fn resizable_columns(&self) -> &BTreeSet<usize> {
        &self.resizable_columns
    }

    pub fn resizable_columns_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.resizable_columns
    }

    pub fn set_resizable_columns(&mut self, columns: impl IntoIterator<Item = usize>) -> &mut Self {
        self.resizable_columns = columns.into_iter().collect();
        self
    }

    pub fn resizable_rows(&self) -> &BTreeSet<usize> {
        &self.resizable_rows
    }

    pub fn resizable_rows_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.resizable_rows
    }

    pub fn set_resizable_rows(&mut self, rows: impl IntoIterator<Item = usize>) -> &mut Self {
        self.resizable_rows = rows.into_iter().collect();
        self
    }

    pub fn columns_distance(&self) -> &[i32] {
        &self.columns_distance
    }

    pub fn columns_distance_mut(&mut self) -> &mut Vec<i32> {
        &mut self.columns_distance
    }

    pub fn set_columns_distance(&mut self, distance: impl IntoIterator<Item = i32>) -> &mut Self {
        self.columns_distance = distance.into_iter().collect();
        self
    }

    pub fn rows_distance(&self) -> &[i32] {
        &self.rows_distance
    }

    pub fn rows_distance_mut(&mut self) -> &mut Vec<i32> {
        &mut self.rows_distance
    }

    pub fn set_rows_distance(&mut self, distance: impl IntoIterator<Item = i32>) -> &mut Self {
        self.rows_distance = distance.into_iter().collect();
        self
    }
}
