// tests/indexing_tests.rs

use approx::assert_abs_diff_eq;
use hexgrid::*;

fn geo(lat: f64, lng: f64) -> GeoCoord {
  GeoCoord::from_degrees(lat, lng).unwrap()
}

#[test]
fn test_geo_to_index_york() {
  let cell = geo_to_index(&geo(53.959130, -1.079230), 8).unwrap();
  assert_eq!(cell, GridIndex(0x8819429a9dfffff));
  assert_eq!(resolution_of(cell), 8);
  assert_eq!(base_cell_of(cell), 12);
}

#[test]
fn test_geo_to_index_known_cells() {
  assert_eq!(geo_to_index(&geo(20.0, 123.0), 2), Ok(GridIndex(0x824b9ffffffffff)));
  assert_eq!(geo_to_index(&geo(37.779265, -122.419277), 5), Ok(GridIndex(0x85283083fffffff)));
  assert_eq!(geo_to_index(&geo(37.779265, -122.419277), 10), Ok(GridIndex(0x8a2830828767fff)));
  assert_eq!(geo_to_index(&geo(90.0, 0.0), 3), Ok(GridIndex(0x830326fffffffff)));
  assert_eq!(geo_to_index(&geo(-90.0, 0.0), 4), Ok(GridIndex(0x84f2939ffffffff)));
}

#[test]
fn test_geo_to_index_bad_resolution() {
  assert_eq!(
    geo_to_index(&geo(0.0, 0.0), 16),
    Err(GridError::Domain(DomainKind::Resolution))
  );
}

#[test]
fn test_bad_coordinates_rejected() {
  for (lat, lng) in [(-1.1323222, 190.1020102), (91.0, 0.0), (f64::NAN, 0.0), (0.0, f64::INFINITY)] {
    assert_eq!(
      GeoCoord::from_degrees(lat, lng),
      Err(GridError::Domain(DomainKind::LatLng)),
      "({lat}, {lng})"
    );
  }
}

#[test]
fn test_index_to_geo_york() {
  let (lat, lng) = index_to_geo(GridIndex(0x8819429a9dfffff)).unwrap().to_degrees();
  assert_abs_diff_eq!(lat, 53.95860421941, epsilon = 1e-6);
  assert_abs_diff_eq!(lng, -1.08119564709, epsilon = 1e-6);
}

#[test]
fn test_index_to_geo_san_francisco() {
  let (lat, lng) = index_to_geo(GridIndex(0x8928342e20fffff)).unwrap().to_degrees();
  assert_abs_diff_eq!(lat, 37.5012466151, epsilon = 1e-9);
  assert_abs_diff_eq!(lng, -122.5003039349, epsilon = 1e-9);
}

#[test]
fn test_index_to_geo_invalid() {
  assert_eq!(index_to_geo(GridIndex(1)), Err(GridError::Domain(DomainKind::CellInvalid)));
  assert_eq!(
    index_to_geo(GridIndex(0x11928308280fffff)),
    Err(GridError::Domain(DomainKind::CellInvalid))
  );
}

#[test]
fn test_cell_boundary_matches_reference() {
  let expected = [
    (37.2713558667319, -121.91508032705622),
    (37.353926450852256, -121.8622232890249),
    (37.42834118609435, -121.92354999630156),
    (37.42012867767779, -122.03773496427027),
    (37.33755608435299, -122.090428929044),
    (37.26319797461824, -122.02910130918998),
  ];

  let boundary = cell_boundary(GridIndex(0x85283473fffffff)).unwrap();
  assert_eq!(boundary.len(), expected.len());
  for (vert, (lat, lng)) in boundary.iter().zip(expected) {
    let (got_lat, got_lng) = vert.to_degrees();
    assert_abs_diff_eq!(got_lat, lat, epsilon = 1e-6);
    assert_abs_diff_eq!(got_lng, lng, epsilon = 1e-6);
  }
}

#[test]
fn test_pentagon_boundaries() {
  // Class II pentagons have five vertices, Class III ones gain a vertex per
  // edge where it crosses a face edge
  for pent in pentagons(2).unwrap() {
    assert_eq!(cell_boundary(pent).unwrap().len(), 5, "{pent}");
  }
  for pent in pentagons(3).unwrap() {
    assert_eq!(cell_boundary(pent).unwrap().len(), 10, "{pent}");
  }
}

#[test]
fn test_round_trip_every_resolution() {
  let points = [
    geo(53.959130, -1.079230),
    geo(37.779265, -122.419277),
    geo(-33.865143, 151.209900),
    geo(0.0, 180.0),
    geo(-89.5, 45.0),
  ];
  for point in points {
    for res in 0..=MAX_RES {
      let cell = geo_to_index(&point, res).unwrap();
      assert!(cell.is_valid(), "{cell}");
      let center = index_to_geo(cell).unwrap();
      assert_eq!(geo_to_index(&center, res), Ok(cell), "res {res}");
    }
  }
}

#[test]
fn test_center_lies_inside_own_boundary_radius() {
  let cell = GridIndex(0x8928308280fffff);
  let center = index_to_geo(cell).unwrap();
  let edge = edge_length_km(9).unwrap();
  for vert in &cell_boundary(cell).unwrap() {
    let km = great_circle_distance_km(&center, vert);
    assert!(km > 0.5 * edge && km < 1.5 * edge, "{km}");
  }
}

#[test]
fn test_degree_conversions() {
  assert_abs_diff_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
  assert_abs_diff_eq!(radians_to_degrees(std::f64::consts::FRAC_PI_2), 90.0);
  assert_abs_diff_eq!(radians_to_degrees(degrees_to_radians(-37.25)), -37.25, epsilon = 1e-12);
}
