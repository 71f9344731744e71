//! Host-facing grid layout manager.
//!
//! A host container owns one [`GridLayout`]: the root grid plus the
//! container's own insets. The host asks for the preferred size when it
//! packs and calls [`GridLayout::layout_container`] whenever it is resized.

use tracing::debug;

use crate::{Gaps, Grid, LayoutData, LayoutElement, Rect, Result, Size};

/// Container configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLayoutConfig {
    /// Space between the container bounds and the root grid.
    pub insets: Gaps,
}

/// Grid layout manager of one host container.
#[derive(Debug)]
pub struct GridLayout<E> {
    config: GridLayoutConfig,
    root: Grid<E>,
}

impl<E: LayoutElement> GridLayout<E> {
    /// Create a layout with an empty root grid.
    pub fn new(config: GridLayoutConfig) -> Self {
        Self::with_root(config, Grid::new())
    }

    /// Create a layout around an existing root grid.
    pub fn with_root(config: GridLayoutConfig, root: Grid<E>) -> Self {
        Self { config, root }
    }

    pub fn builder() -> GridLayoutBuilder<E> {
        GridLayoutBuilder::new()
    }

    pub fn config(&self) -> &GridLayoutConfig {
        &self.config
    }

    pub fn root_grid(&self) -> &Grid<E> {
        &self.root
    }

    pub fn root_grid_mut(&mut self) -> &mut Grid<E> {
        &mut self.root
    }

    pub fn into_root_grid(self) -> Grid<E> {
        self.root
    }

    /// Preferred size of the container, insets included.
    pub fn preferred_size(&self) -> Size {
        let size = self.root.preferred_size();
        Size::new(
            size.width + self.config.insets.horizontal(),
            size.height + self.config.insets.vertical(),
        )
    }

    /// The grid never lays out below its preferred size.
    pub fn minimum_size(&self) -> Size {
        self.preferred_size()
    }

    /// Lay out the root grid inside `bounds` minus the insets.
    pub fn layout_container(&mut self, bounds: Rect) -> Result<LayoutData> {
        let inner = bounds.inset(&self.config.insets);
        debug!("GridLayout: container {:?}, grid area {:?}", bounds, inner);
        self.root.layout(inner)
    }
}

/// Builder for [`GridLayout`].
#[derive(Debug)]
pub struct GridLayoutBuilder<E> {
    config: GridLayoutConfig,
    root: Grid<E>,
}

impl<E: LayoutElement> GridLayoutBuilder<E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: GridLayoutConfig::default(),
            root: Grid::new(),
        }
    }

    /// Set the container insets.
    pub fn insets(mut self, insets: Gaps) -> Self {
        self.config.insets = insets;
        self
    }

    /// Columns of the root grid that absorb extra width.
    pub fn resizable_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.root.set_resizable_columns(columns);
        self
    }

    /// Rows of the root grid that absorb extra height.
    pub fn resizable_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.root.set_resizable_rows(rows);
        self
    }

    /// Separators between root grid columns.
    pub fn columns_distance(mut self, distance: impl IntoIterator<Item = i32>) -> Self {
        self.root.set_columns_distance(distance);
        self
    }

    /// Separators between root grid rows.
    pub fn rows_distance(mut self, distance: impl IntoIterator<Item = i32>) -> Self {
        self.root.set_rows_distance(distance);
        self
    }

    /// Build the layout.
    pub fn build(self) -> GridLayout<E> {
        GridLayout::with_root(self.config, self.root)
    }
}

impl<E: LayoutElement> Default for GridLayoutBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
