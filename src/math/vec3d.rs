// src/math/vec3d.rs

use crate::types::{GeoCoord, Vec3d};

impl Vec3d {
  /// Point on the unit sphere for a coordinate.
  #[inline]
  pub(crate) fn from_geo(geo: &GeoCoord) -> Self {
    let r = geo.lat.cos();
    Self {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }

  /// Squared euclidean distance to another point.
  #[inline]
  pub(crate) fn square_distance(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}
