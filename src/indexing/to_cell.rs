// src/indexing/to_cell.rs

use crate::error::{DomainKind, GridError, Result};
use crate::types::{check_resolution, FaceIJK, GeoCoord, GridIndex};

/// Index of the cell containing `geo` at resolution `res`.
///
/// # Arguments
/// * `geo` - The point, in radians.
/// * `res` - The target resolution, `0..=15`.
///
/// # Returns
/// The containing cell, or [`DomainKind::Resolution`] when `res` is above 15.
pub fn geo_to_index(geo: &GeoCoord, res: u8) -> Result<GridIndex> {
  check_resolution(res)?;

  let fijk = FaceIJK::from_geo(geo, res);
  GridIndex::from_face_ijk(&fijk, res).ok_or_else(|| {
    tracing::debug!(lat = geo.lat(), lng = geo.lng(), res, face = fijk.face, "point did not resolve to a base cell");
    GridError::from(DomainKind::LatLng)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{MAX_RES, NUM_BASE_CELLS};
  use crate::types::Direction;

  fn deg(lat: f64, lng: f64) -> GeoCoord {
    GeoCoord::from_degrees(lat, lng).unwrap()
  }

  #[test]
  fn test_resolution_domain() {
    let geo = deg(37.77, -122.4);
    assert_eq!(geo_to_index(&geo, 16), Err(DomainKind::Resolution.into()));
    assert!(geo_to_index(&geo, MAX_RES).is_ok());
  }

  #[test]
  fn test_known_cells() {
    let york = deg(53.959130, -1.079230);
    assert_eq!(geo_to_index(&york, 8), Ok(GridIndex(0x8819429a9dfffff)));

    let sf = deg(37.779265, -122.419277);
    assert_eq!(geo_to_index(&sf, 5), Ok(GridIndex(0x85283083fffffff)));
    assert_eq!(geo_to_index(&sf, 10), Ok(GridIndex(0x8a2830828767fff)));
  }

  #[test]
  fn test_poles() {
    assert_eq!(geo_to_index(&deg(90.0, 0.0), 3), Ok(GridIndex(0x830326fffffffff)));
    assert_eq!(geo_to_index(&deg(-90.0, 0.0), 4), Ok(GridIndex(0x84f2939ffffffff)));
  }

  #[test]
  fn test_results_are_valid_everywhere() {
    for lat in (-85..=85).step_by(17) {
      for lng in (-180..180).step_by(23) {
        let geo = deg(f64::from(lat), f64::from(lng));
        for res in [0, 1, 7, 15] {
          let h = geo_to_index(&geo, res).unwrap();
          assert!(h.is_valid(), "{lat},{lng} res {res}: {h}");
          assert_eq!(h.resolution(), res);
        }
      }
    }
  }

  #[test]
  fn test_res0_base_cell_centers() {
    for bc in 0..NUM_BASE_CELLS {
      let h = GridIndex::new_cell(0, bc, Direction::Center);
      let center = crate::indexing::index_to_geo(h).unwrap();
      assert_eq!(geo_to_index(&center, 0), Ok(h), "base cell {bc}");
    }
  }
}
