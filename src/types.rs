// src/types.rs

//! Core grid data structures.

use crate::constants::MAX_BOUNDARY_VERTS;
use crate::error::{DomainKind, GridError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit grid index identifying a cell.
///
/// The layout is documented in [`crate::constants`]; accessors live in
/// [`crate::index`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridIndex(pub u64);

/// A grid index in directed edge mode: an origin cell plus a direction.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdgeIndex(pub u64);

/// A point on the sphere, stored in radians.
///
/// Latitude lies in `[-pi/2, pi/2]` and longitude in `(-pi, pi]`. Values
/// are built through [`GeoCoord::from_degrees`] or
/// [`GeoCoord::from_radians`] and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoord {
  pub(crate) lat: f64,
  pub(crate) lng: f64,
}

/// The vertices of a cell or edge boundary in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  len: usize,
  verts: [GeoCoord; MAX_BOUNDARY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      len: 0,
      verts: [GeoCoord::default(); MAX_BOUNDARY_VERTS],
    }
  }
}

impl CellBoundary {
  /// Number of vertices.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The populated vertices.
  pub fn as_slice(&self) -> &[GeoCoord] {
    &self.verts[..self.len]
  }

  pub fn iter(&self) -> std::slice::Iter<'_, GeoCoord> {
    self.as_slice().iter()
  }

  /// Appends a vertex. Extra vertices past capacity are dropped.
  pub(crate) fn push(&mut self, vert: GeoCoord) {
    if self.len < MAX_BOUNDARY_VERTS {
      self.verts[self.len] = vert;
      self.len += 1;
    }
  }
}

impl<'a> IntoIterator for &'a CellBoundary {
  type Item = &'a GeoCoord;
  type IntoIter = std::slice::Iter<'a, GeoCoord>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// IJK hexagon coordinates. Each axis is spaced 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

impl CoordIJK {
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }
}

/// An icosahedron face number and IJK coordinates on that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Face number, `0..20`.
  pub face: usize,
  pub coord: CoordIJK,
}

impl FaceIJK {
  pub const fn new(face: usize, coord: CoordIJK) -> Self {
    Self { face, coord }
  }
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// An index digit, which is also a direction along the IJK+ axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center digit.
  #[default]
  Center = 0,
  /// k-axes direction.
  K = 1,
  /// j-axes direction.
  J = 2,
  /// j == k direction.
  JK = 3,
  /// i-axes direction.
  I = 4,
  /// i == k direction.
  IK = 5,
  /// i == j direction.
  IJ = 6,
  /// Pad digit, also the "no direction" marker.
  Invalid = 7,
}

impl Direction {
  /// The six directions that lead to a neighboring cell.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::K,
    Direction::J,
    Direction::JK,
    Direction::I,
    Direction::IK,
    Direction::IJ,
  ];

  /// Decodes the low three bits of `bits`.
  pub(crate) const fn from_bits(bits: u64) -> Self {
    match bits & 0b111 {
      0 => Direction::Center,
      1 => Direction::K,
      2 => Direction::J,
      3 => Direction::JK,
      4 => Direction::I,
      5 => Direction::IK,
      6 => Direction::IJ,
      _ => Direction::Invalid,
    }
  }

  /// True for the six neighbor directions.
  pub fn is_neighbor_direction(self) -> bool {
    !matches!(self, Direction::Center | Direction::Invalid)
  }
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(GridError::Encoding {
        field: "digit",
        value: u64::from(value),
      });
    }
    Ok(Direction::from_bits(u64::from(value)))
  }
}

/// What an index identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Mode {
  Cell = 1,
  DirectedEdge = 2,
}

impl TryFrom<u8> for Mode {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(Mode::Cell),
      2 => Ok(Mode::DirectedEdge),
      _ => Err(GridError::Encoding {
        field: "mode",
        value: u64::from(value),
      }),
    }
  }
}

/// Checks that a resolution argument is in `0..=MAX_RES`.
pub(crate) fn check_resolution(res: u8) -> Result<(), GridError> {
  if res > crate::constants::MAX_RES {
    return Err(DomainKind::Resolution.into());
  }
  Ok(())
}
