// src/math/vec2d.rs

use crate::types::Vec2d;

impl Vec2d {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Length of the vector.
  #[inline]
  pub fn magnitude(&self) -> f64 {
    self.x.hypot(self.y)
  }

  /// Intersection of the line `p0`-`p1` with the line `p2`-`p3`.
  ///
  /// The lines must not be parallel; callers only use this on face edges
  /// crossed by a cell edge.
  pub(crate) fn intersect(p0: Vec2d, p1: Vec2d, p2: Vec2d, p3: Vec2d) -> Vec2d {
    let s1 = Vec2d::new(p1.x - p0.x, p1.y - p0.y);
    let s2 = Vec2d::new(p3.x - p2.x, p3.y - p2.y);

    let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);

    Vec2d::new(p0.x + t * s1.x, p0.y + t * s1.y)
  }

  /// Component-wise comparison at single precision tolerance.
  #[inline]
  pub(crate) fn almost_equals(&self, other: &Vec2d) -> bool {
    let tolerance = f64::from(f32::EPSILON);
    (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_magnitude() {
    assert!((Vec2d::new(3.0, 4.0).magnitude() - 5.0).abs() < f64::EPSILON);
    assert_eq!(Vec2d::default().magnitude(), 0.0);
  }

  #[test]
  fn test_intersect_diagonals() {
    let inter = Vec2d::intersect(
      Vec2d::new(2.0, 2.0),
      Vec2d::new(6.0, 6.0),
      Vec2d::new(0.0, 4.0),
      Vec2d::new(10.0, 4.0),
    );
    assert!(inter.almost_equals(&Vec2d::new(4.0, 4.0)), "got {inter:?}");
  }

  #[test]
  fn test_almost_equals() {
    let v = Vec2d::new(3.0, 4.0);
    assert!(v.almost_equals(&Vec2d::new(3.0 + f64::EPSILON, 4.0)));
    assert!(!v.almost_equals(&Vec2d::new(3.5, 4.0)));
    assert!(!v.almost_equals(&Vec2d::new(3.0, 4.000_01)));
  }
}
