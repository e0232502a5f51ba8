//! Axis-aligned rectangles - the engine's sole collision primitive
//!
//! Every entity-vs-entity check in every game reduces to `Rect::overlaps`.

use glam::Vec2;

/// A position + size rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap test (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlapping_rects_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn separated_rects_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn touching_edges_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn contained_rect_hits() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(5.0, 5.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(10.0, 20.0, 4.0, 8.0);
        assert_eq!(r.center(), Vec2::new(12.0, 24.0));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -300.0f32..300.0, ay in -300.0f32..300.0,
            aw in 0.1f32..80.0, ah in 0.1f32..80.0,
            bx in -300.0f32..300.0, by in -300.0f32..300.0,
            bw in 0.1f32..80.0, bh in 0.1f32..80.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
