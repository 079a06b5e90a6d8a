//! Axis-aligned rectangle geometry
//!
//! Every hit-box in the game is an axis-aligned rect in screen space:
//! x grows right, y grows down, so `top < bottom` for a non-empty rect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rect from its center and half extents
    pub fn from_center(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self {
            left: center.x - half_width,
            top: center.y - half_height,
            right: center.x + half_width,
            bottom: center.y + half_height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point of the rect
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Strict overlap test: rects sharing only an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Translate the rect vertically (obstacle fall axis)
    pub fn translate_y(&mut self, dy: f32) {
        self.top += dy;
        self.bottom += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 150.0, 150.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_one_unit_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(99.0, 99.0, 200.0, 200.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_disjoint_never_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(101.0, 0.0, 200.0, 100.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 200.0, 100.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(50.0, 80.0), 10.0, 20.0);
        assert_eq!(r, Rect::new(40.0, 60.0, 60.0, 100.0));
        assert_eq!(r.center(), Vec2::new(50.0, 80.0));
    }

    #[test]
    fn test_translate_y() {
        let mut r = Rect::new(100.0, 0.0, 270.0, 170.0);
        r.translate_y(8.0);
        assert_eq!(r.top, 8.0);
        assert_eq!(r.bottom, 178.0);
        assert_eq!(r.left, 100.0);
    }
}
