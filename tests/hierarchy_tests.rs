// tests/hierarchy_tests.rs

use hexgrid::*;

#[test]
fn test_to_parent() {
  assert_eq!(
    to_parent(GridIndex(0x89283082993ffff), 8),
    Ok(GridIndex(0x8828308299fffff))
  );
  assert_eq!(
    to_parent(GridIndex(0x8928342e20fffff), 3),
    Ok(GridIndex(0x832834fffffffff))
  );

  let cell = GridIndex(0x8928308280fffff);
  assert_eq!(to_parent(cell, 9), Ok(cell));
  assert_eq!(base_cell_of(to_parent(cell, 0).unwrap()), 20);
}

#[test]
fn test_to_parent_errors() {
  let cell = GridIndex(0x8928308280fffff);
  assert_eq!(to_parent(cell, 10), Err(GridError::Domain(DomainKind::Resolution)));
  assert_eq!(to_parent(GridIndex(1), 0), Err(GridError::Domain(DomainKind::CellInvalid)));
}

#[test]
fn test_max_children_count() {
  let cell = GridIndex(0x8928308280fffff);
  assert_eq!(max_children_count(cell, 3), Ok(0));
  assert_eq!(max_children_count(cell, 9), Ok(1));
  assert_eq!(max_children_count(cell, 10), Ok(7));
  assert_eq!(max_children_count(cell, 15), Ok(117_649));
  assert_eq!(max_children_count(cell, 16), Err(GridError::Domain(DomainKind::Resolution)));
  assert_eq!(
    max_children_count(GridIndex(0), 5),
    Err(GridError::Domain(DomainKind::CellInvalid))
  );
}

#[test]
fn test_center_child() {
  let parent = GridIndex(0x85283473fffffff);
  assert_eq!(center_child(parent, 7), Ok(GridIndex(0x872834700ffffff)));
  assert_eq!(center_child(parent, 5), Ok(parent));
  assert_eq!(center_child(parent, 4), Err(GridError::Domain(DomainKind::Resolution)));
}

#[test]
fn test_children() {
  let cell = GridIndex(0x8928308280fffff);
  assert_eq!(children(cell, 9), Ok(vec![cell]));

  let kids = children(cell, 10).unwrap();
  assert_eq!(kids.len(), 7);
  for kid in &kids {
    assert!(kid.is_valid());
    assert_eq!(to_parent(*kid, 9), Ok(cell));
  }

  assert_eq!(children(cell, 12).unwrap().len(), 343);
}

#[test]
fn test_pentagon_children() {
  let pent = GridIndex(0x821c07fffffffff);
  assert!(is_pentagon(pent));
  let kids = children(pent, 3).unwrap();
  assert_eq!(kids.len(), 6);
  assert_eq!(kids.iter().filter(|k| k.is_pentagon()).count(), 1);
  assert!(max_children_count(pent, 3).unwrap() >= kids.len() as u64);
}

#[test]
fn test_num_cells_at_resolution() {
  assert_eq!(num_cells_at_resolution(0), Ok(122));
  assert_eq!(num_cells_at_resolution(1), Ok(842));
  assert_eq!(num_cells_at_resolution(15), Ok(569_707_381_193_162));
  assert_eq!(num_cells_at_resolution(16), Err(GridError::Domain(DomainKind::Resolution)));
}

#[test]
fn test_res0_cells_and_pentagons() {
  let cells = res0_cells();
  assert_eq!(cells.len(), usize::from(NUM_BASE_CELLS));
  assert_eq!(cells[0], GridIndex(0x8001fffffffffff));
  assert_eq!(cells[121], GridIndex(0x80f3fffffffffff));
  assert_eq!(cells.iter().filter(|c| c.is_pentagon()).count(), NUM_PENTAGONS);

  for res in 0..=MAX_RES {
    let pents = pentagons(res).unwrap();
    assert_eq!(pents.len(), NUM_PENTAGONS);
    assert!(pents.iter().all(|p| p.is_valid() && p.is_pentagon() && resolution_of(*p) == res));
  }
}

#[test]
fn test_child_count_matches_cell_count() {
  // every base cell's children at res 2 make up the whole res 2 grid
  let total: usize = res0_cells().into_iter().map(|c| children(c, 2).unwrap().len()).sum();
  assert_eq!(total as u64, num_cells_at_resolution(2).unwrap());
}
