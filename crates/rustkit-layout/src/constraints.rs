//! Per-entry placement and sizing description.

use std::fmt;
use std::rc::Rc;

use crate::{Gaps, Size};

/// Horizontal alignment of an entry inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    Fill,
}

/// Vertical alignment of an entry inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
    Fill,
}

/// Rectangle of grid cells an entry occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// First column (0-based).
    pub x: usize,
    /// First row (0-based).
    pub y: usize,
    /// Number of columns spanned.
    pub width: usize,
    /// Number of rows spanned.
    pub height: usize,
}

impl CellRect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Column one past the last spanned column.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Row one past the last spanned row.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Whether the two rectangles share at least one cell.
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Pluggable measurement strategy attached to an entry.
///
/// A helper knows things about the hosted element the element itself does
/// not report, typically the margin its look-and-feel paints around it.
pub trait ComponentHelper: fmt::Debug {
    /// Visual paddings overriding the ones stored in the constraints.
    fn visual_paddings(&self) -> Option<Gaps> {
        None
    }

    /// Baseline for the element at the given size, measured from its top.
    fn baseline(&self, _size: Size) -> Option<i32> {
        None
    }
}

/// Describes where one grid entry lives and how it is sized and aligned.
#[derive(Debug, Clone)]
pub struct Constraints {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
    /// Column span, at least 1.
    pub width: usize,
    /// Row span, at least 1.
    pub height: usize,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    /// Align with the other baseline entries of the same row.
    pub baseline_align: bool,
    /// Inward inset between the cell box and the element.
    pub gaps: Gaps,
    /// Outward compensation for the element's own painted margin.
    pub visual_paddings: Gaps,
    /// Cross-cell width group label. Stored only.
    pub width_group: Option<String>,
    pub component_helper: Option<Rc<dyn ComponentHelper>>,
}

impl Constraints {
    /// A 1x1 entry at `(x, y)` with default alignment.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            width: 1,
            height: 1,
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            baseline_align: false,
            gaps: Gaps::EMPTY,
            visual_paddings: Gaps::EMPTY,
            width_group: None,
            component_helper: None,
        }
    }

    /// Set the span. Zero spans are clamped to 1.
    pub fn span(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = align;
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    /// Fill the cell on both axes.
    pub fn fill(self) -> Self {
        self.horizontal_align(HorizontalAlign::Fill)
            .vertical_align(VerticalAlign::Fill)
    }

    pub fn baseline_align(mut self, baseline_align: bool) -> Self {
        self.baseline_align = baseline_align;
        self
    }

    pub fn gaps(mut self, gaps: Gaps) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn visual_paddings(mut self, paddings: Gaps) -> Self {
        self.visual_paddings = paddings;
        self
    }

    pub fn width_group(mut self, group: impl Into<String>) -> Self {
        self.width_group = Some(group.into());
        self
    }

    pub fn component_helper(mut self, helper: Rc<dyn ComponentHelper>) -> Self {
        self.component_helper = Some(helper);
        self
    }

    /// The cell rectangle covered by this entry.
    pub fn cell_rect(&self) -> CellRect {
        CellRect::new(self.x, self.y, self.width, self.height)
    }

    /// Visual paddings in effect: the helper's if it has any.
    pub fn effective_visual_paddings(&self) -> Gaps {
        self.component_helper
            .as_ref()
            .and_then(|helper| helper.visual_paddings())
            .unwrap_or(self.visual_paddings)
    }
}
