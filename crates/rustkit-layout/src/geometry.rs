//! Integer geometry used by the grid engine.
//!
//! All sizes are whole device units; the extra-space distribution relies on
//! integer division so that corrections sum to the available slack exactly.

/// A 2D size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// A 2D rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrink the rectangle by `gaps` on every side.
    pub fn inset(&self, gaps: &Gaps) -> Rect {
        Rect {
            x: self.x + gaps.left,
            y: self.y + gaps.top,
            width: self.width - gaps.horizontal(),
            height: self.height - gaps.vertical(),
        }
    }
}

/// Four-sided edge sizes (cell gaps, visual paddings, container insets).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gaps {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Gaps {
    pub const EMPTY: Gaps = Gaps {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };

    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same size on every side.
    pub fn uniform(size: i32) -> Self {
        Self::new(size, size, size, size)
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.size(), Size::new(30, 40));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0, 0, 100, 50);
        let inner = rect.inset(&Gaps::new(1, 2, 3, 4));
        assert_eq!(inner, Rect::new(2, 1, 94, 46));
    }

    #[test]
    fn test_gaps_sums() {
        let gaps = Gaps::new(1, 2, 3, 4);
        assert_eq!(gaps.horizontal(), 6);
        assert_eq!(gaps.vertical(), 4);
        assert_eq!(Gaps::uniform(5).horizontal(), 10);
        assert_eq!(Gaps::default(), Gaps::EMPTY);
    }
}
