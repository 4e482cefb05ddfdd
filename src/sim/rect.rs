//! Axis-aligned pixel rectangles
//!
//! Every entity is a box in screen space (y grows downward). The same box is
//! used for collision and for drawing. Edge arithmetic saturates so boxes
//! pushed to the i32 limits by a huge dt still compare sanely.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x.saturating_add(self.size.x)
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y.saturating_add(self.size.y)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Horizontal center (integer division, rounds toward the left edge)
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x.saturating_add(self.size.x / 2)
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.pos.y.saturating_add(self.size.y / 2)
    }

    /// Move vertically so the bottom edge sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: i32) {
        self.pos.y = y - self.size.y;
    }

    #[inline]
    pub fn set_top_left(&mut self, x: i32, y: i32) {
        self.pos = IVec2::new(x, y);
    }

    /// Whether two boxes intersect. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let x_overlap = self.left() <= other.right() && other.left() <= self.right();
        let y_overlap = self.top() <= other.bottom() && other.top() <= self.bottom();

        x_overlap && y_overlap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(100, 420, 40, 40);
        assert_eq!(r.right(), 140);
        assert_eq!(r.bottom(), 460);
        assert_eq!(r.center_x(), 120);
        assert_eq!(r.center_y(), 440);

        let odd = Rect::new(0, 0, 5, 5);
        assert_eq!(odd.center_x(), 2);
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Rect::new(0, 0, 40, 40);
        r.set_bottom(460);
        assert_eq!(r.top(), 420);
        assert_eq!(r.bottom(), 460);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
        assert!(!a.overlaps(&Rect::new(20, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 20, 10, 10)));
        // Contained
        assert!(a.overlaps(&Rect::new(2, 2, 2, 2)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(a.overlaps(&Rect::new(0, 10, 10, 10)));
        assert!(!a.overlaps(&Rect::new(11, 0, 10, 10)));
    }

    #[test]
    fn test_edges_saturate_at_limits() {
        let r = Rect::new(i32::MAX, i32::MAX, 40, 40);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
        assert_eq!(r.center_x(), i32::MAX);
        assert!(!r.overlaps(&Rect::new(0, 0, 40, 40)));
    }
}
