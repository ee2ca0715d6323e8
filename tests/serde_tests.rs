// tests/serde_tests.rs

// Only compiled with the "serde" feature.
#![cfg(feature = "serde")]

use hexgrid::*;

#[test]
fn test_grid_index_serde() {
  let h = GridIndex(0x8928308280fffff);
  let serialized = serde_json::to_string(&h).unwrap();
  assert_eq!(serialized, "617700169958293503");
  let deserialized: GridIndex = serde_json::from_str(&serialized).unwrap();
  assert_eq!(h, deserialized);
}

#[test]
fn test_directed_edge_serde() {
  let edge = DirectedEdgeIndex(0x11928308280fffff);
  let serialized = serde_json::to_string(&edge).unwrap();
  let deserialized: DirectedEdgeIndex = serde_json::from_str(&serialized).unwrap();
  assert_eq!(edge, deserialized);
}

#[test]
fn test_geo_coord_serde() {
  let geo = GeoCoord::from_radians(0.5, -1.2).unwrap();
  let serialized = serde_json::to_string(&geo).unwrap();
  assert_eq!(serialized, r#"{"lat":0.5,"lng":-1.2}"#);
  let deserialized: GeoCoord = serde_json::from_str(&serialized).unwrap();
  assert_eq!(geo, deserialized);
}

#[test]
fn test_direction_and_mode_serde() {
  assert_eq!(serde_json::to_string(&Direction::K).unwrap(), "1");
  assert_eq!(serde_json::from_str::<Direction>("6").unwrap(), Direction::IJ);
  assert_eq!(serde_json::to_string(&Mode::DirectedEdge).unwrap(), "2");
}

#[test]
fn test_domain_kind_serde() {
  let kind = DomainKind::CellInvalid;
  let serialized = serde_json::to_string(&kind).unwrap();
  assert_eq!(serialized, "3");
  assert_eq!(serde_json::from_str::<DomainKind>(&serialized).unwrap(), kind);
}

#[test]
fn test_cell_boundary_serde() {
  let boundary = cell_boundary(GridIndex(0x85283473fffffff)).unwrap();
  let serialized = serde_json::to_string(&boundary).unwrap();
  let deserialized: CellBoundary = serde_json::from_str(&serialized).unwrap();
  assert_eq!(boundary, deserialized);
}

#[test]
fn test_vec_of_indexes_serde() {
  let cells = vec![GridIndex(0x8928308280fffff), GridIndex(0x8928308281fffff), GridIndex(0)];
  let serialized = serde_json::to_string(&cells).unwrap();
  assert_eq!(serialized, "[617700169958293503,617700169959342079,0]");
  let deserialized: Vec<GridIndex> = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cells, deserialized);
}
