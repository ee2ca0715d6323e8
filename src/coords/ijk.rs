// src/coords/ijk.rs

//! IJK+ hexagon coordinate arithmetic.
//!
//! Coordinates live on three axes 120 degrees apart; a normalized coordinate
//! has no negative component and at least one zero component.

use std::ops::{Add, Sub};

use crate::constants::{M_ONESEVENTH, M_RSIN60, M_SQRT3_2};
use crate::types::{CoordIJK, Direction, Vec2d};

/// Unit vector for each direction digit, indexed by digit.
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK::new(0, 0, 0), // center
  CoordIJK::new(0, 0, 1), // k
  CoordIJK::new(0, 1, 0), // j
  CoordIJK::new(0, 1, 1), // jk
  CoordIJK::new(1, 0, 0), // i
  CoordIJK::new(1, 0, 1), // ik
  CoordIJK::new(1, 1, 0), // ij
];

impl Add for CoordIJK {
  type Output = CoordIJK;

  fn add(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
  }
}

impl Sub for CoordIJK {
  type Output = CoordIJK;

  fn sub(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
  }
}

impl CoordIJK {
  #[inline]
  pub(crate) fn scale(self, factor: i32) -> Self {
    CoordIJK::new(self.i * factor, self.j * factor, self.k * factor)
  }

  /// Brings the coordinate into canonical form.
  pub(crate) fn normalize(self) -> Self {
    let CoordIJK { mut i, mut j, mut k } = self;

    if i < 0 {
      j -= i;
      k -= i;
      i = 0;
    }
    if j < 0 {
      i -= j;
      k -= j;
      j = 0;
    }
    if k < 0 {
      i -= k;
      j -= k;
      k = 0;
    }

    let min = i.min(j).min(k);
    if min > 0 {
      i -= min;
      j -= min;
      k -= min;
    }
    CoordIJK::new(i, j, k)
  }

  /// Digit for a unit vector, or `Direction::Invalid` when the coordinate is
  /// not one.
  pub(crate) fn to_digit(self) -> Direction {
    let c = self.normalize();
    UNIT_VECS
      .iter()
      .position(|unit| *unit == c)
      .map_or(Direction::Invalid, |d| Direction::from_bits(d as u64))
  }

  /// The adjacent coordinate in direction `dir`. Center and invalid leave the
  /// coordinate unchanged.
  pub(crate) fn neighbor(self, dir: Direction) -> Self {
    if dir.is_neighbor_direction() {
      (self + UNIT_VECS[dir as usize]).normalize()
    } else {
      self
    }
  }

  /// Combines three axis vectors weighted by this coordinate.
  #[inline]
  fn transform(self, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) -> Self {
    (i_vec.scale(self.i) + j_vec.scale(self.j) + k_vec.scale(self.k)).normalize()
  }

  /// Parent coordinate, counter-clockwise aperture 7 (Class III child).
  pub(crate) fn up_ap7(self) -> Self {
    let i = self.i - self.k;
    let j = self.j - self.k;
    CoordIJK::new(
      (f64::from(3 * i - j) * M_ONESEVENTH).round() as i32,
      (f64::from(i + 2 * j) * M_ONESEVENTH).round() as i32,
      0,
    )
    .normalize()
  }

  /// Parent coordinate, clockwise aperture 7 (Class II child).
  pub(crate) fn up_ap7r(self) -> Self {
    let i = self.i - self.k;
    let j = self.j - self.k;
    CoordIJK::new(
      (f64::from(2 * i + j) * M_ONESEVENTH).round() as i32,
      (f64::from(3 * j - i) * M_ONESEVENTH).round() as i32,
      0,
    )
    .normalize()
  }

  /// Center of the counter-clockwise aperture 7 grid one resolution finer.
  pub(crate) fn down_ap7(self) -> Self {
    self.transform(CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3))
  }

  /// Center of the clockwise aperture 7 grid one resolution finer.
  pub(crate) fn down_ap7r(self) -> Self {
    self.transform(CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3))
  }

  /// Center of the counter-clockwise aperture 3 substrate grid.
  pub(crate) fn down_ap3(self) -> Self {
    self.transform(CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2))
  }

  /// Center of the clockwise aperture 3 substrate grid.
  pub(crate) fn down_ap3r(self) -> Self {
    self.transform(CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2))
  }

  pub(crate) fn rotate60_ccw(self) -> Self {
    self.transform(CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1))
  }

  pub(crate) fn rotate60_cw(self) -> Self {
    self.transform(CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1))
  }

  /// Grid distance between two coordinates on the same plane.
  pub(crate) fn distance(self, other: CoordIJK) -> u64 {
    let diff = (self - other).normalize();
    let largest = diff.i.unsigned_abs().max(diff.j.unsigned_abs()).max(diff.k.unsigned_abs());
    u64::from(largest)
  }

  /// Center point of the cell on the 2D hex plane.
  pub(crate) fn to_hex2d(self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d::new(i - 0.5 * j, j * M_SQRT3_2)
  }

  /// Cell containing a point on the 2D hex plane.
  pub(crate) fn from_hex2d(v: Vec2d) -> Self {
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse conversion to the containing 0-120 degree sector
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let (mut i, mut j);
    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        i = m1;
        j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
        i = if (1.0 - r1) <= r2 && r2 < 2.0 * r1 { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
      i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      i = m1 + 1;
      j = if r2 < r1 / 2.0 { m2 } else { m2 + 1 };
    }

    // fold across the axes if necessary
    if v.x < 0.0 {
      if j % 2 == 0 {
        let axis_i = j / 2;
        i -= 2 * (i - axis_i);
      } else {
        let axis_i = (j + 1) / 2;
        i -= 2 * (i - axis_i) + 1;
      }
    }

    if v.y < 0.0 {
      i -= (2 * j + 1) / 2;
      j = -j;
    }

    CoordIJK::new(i, j, 0).normalize()
  }
}

impl Direction {
  /// The digit one 60 degree step counter-clockwise.
  pub(crate) fn rotate60_ccw(self) -> Direction {
    match self {
      Direction::K => Direction::IK,
      Direction::IK => Direction::I,
      Direction::I => Direction::IJ,
      Direction::IJ => Direction::J,
      Direction::J => Direction::JK,
      Direction::JK => Direction::K,
      other => other,
    }
  }

  /// The digit one 60 degree step clockwise.
  pub(crate) fn rotate60_cw(self) -> Direction {
    match self {
      Direction::K => Direction::JK,
      Direction::JK => Direction::J,
      Direction::J => Direction::IJ,
      Direction::IJ => Direction::I,
      Direction::I => Direction::IK,
      Direction::IK => Direction::K,
      other => other,
    }
  }
}
