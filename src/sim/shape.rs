//! Shared positional data for every entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::distance;

/// A positioned thing on the canvas
///
/// Has no notion of bounds; whoever moves it owns the boundary logic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub pos: Vec2,
}

impl Shape {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Translate by (dx, dy)
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    pub fn distance_to(&self, other: &Shape) -> f32 {
        distance(self.pos, other.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_by_is_unbounded() {
        let mut shape = Shape::new(1.0, 2.0);
        shape.move_by(-5.0, 0.5);
        assert_eq!(shape.x(), -4.0);
        assert_eq!(shape.y(), 2.5);

        shape.move_by(1e6, -1e6);
        assert_eq!(shape.pos, Vec2::new(-4.0 + 1e6, 2.5 - 1e6));
    }

    #[test]
    fn test_distance_to() {
        let a = Shape::new(0.0, 0.0);
        let b = Shape::new(6.0, 8.0);
        assert_eq!(a.distance_to(&b), 10.0);
        assert_eq!(b.distance_to(&a), 10.0);
    }
}
