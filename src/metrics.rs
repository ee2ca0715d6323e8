// src/metrics.rs

//! Average cell measurements per resolution, and the icosahedron faces a
//! cell touches.

use crate::constants::{MAX_RES, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::error::{DomainKind, GridError, Result};
use crate::hierarchy::center_child;
use crate::index::is_class_iii_res;
use crate::types::{check_resolution, GridIndex};

const TABLE_LEN: usize = MAX_RES as usize + 1;

/// Average hexagon area in square kilometers, by resolution.
#[rustfmt::skip]
const HEX_AREA_KM2: [f64; TABLE_LEN] = [
  4250546.848, 607220.9782, 86745.85403, 12392.26486,
  1770.323552, 252.9033645, 36.1290521, 5.1612932,
  0.7373276, 0.1053325, 0.0150475, 0.0021496,
  0.0003071, 0.0000439, 0.0000063, 0.0000009,
];

/// Average hexagon area in square meters, by resolution.
#[rustfmt::skip]
const HEX_AREA_M2: [f64; TABLE_LEN] = [
  4.25055e12, 6.07221e11, 86745854035.0, 12392264862.0,
  1770323552.0, 252903364.5, 36129052.1, 5161293.2,
  737327.6, 105332.5, 15047.5, 2149.6,
  307.1, 43.9, 6.3, 0.9,
];

/// Average hexagon edge length in kilometers, by resolution.
#[rustfmt::skip]
const EDGE_LENGTH_KM: [f64; TABLE_LEN] = [
  1107.712591, 418.6760055, 158.2446558, 59.81085794,
  22.6063794, 8.544408276, 3.229482772, 1.220629759,
  0.461354684, 0.174375668, 0.065907807, 0.024910561,
  0.009415526, 0.003559893, 0.001348575, 0.000509713,
];

/// Average hexagon edge length in meters, by resolution.
#[rustfmt::skip]
const EDGE_LENGTH_M: [f64; TABLE_LEN] = [
  1107712.591, 418676.0055, 158244.6558, 59810.85794,
  22606.3794, 8544.408276, 3229.482772, 1220.629759,
  461.3546837, 174.3756681, 65.90780749, 24.9105614,
  9.415526211, 3.559893033, 1.348574562, 0.509713273,
];

fn lookup(table: &[f64; TABLE_LEN], res: u8) -> Result<f64> {
  check_resolution(res)?;
  Ok(table[usize::from(res)])
}

/// Average area of a hexagon at `res`, in km².
pub fn hex_area_km2(res: u8) -> Result<f64> {
  lookup(&HEX_AREA_KM2, res)
}

/// Average area of a hexagon at `res`, in m².
pub fn hex_area_m2(res: u8) -> Result<f64> {
  lookup(&HEX_AREA_M2, res)
}

/// Average hexagon edge length at `res`, in kilometers.
pub fn edge_length_km(res: u8) -> Result<f64> {
  lookup(&EDGE_LENGTH_KM, res)
}

/// Average hexagon edge length at `res`, in meters.
pub fn edge_length_m(res: u8) -> Result<f64> {
  lookup(&EDGE_LENGTH_M, res)
}

/// Most icosahedron faces `cell` can touch: five for a pentagon, two for a
/// hexagon.
pub fn max_face_count(cell: GridIndex) -> Result<usize> {
  if !cell.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  Ok(if cell.is_pentagon() { 5 } else { 2 })
}

/// The icosahedron faces touched by `cell`, each listed once.
pub fn icosahedron_faces(cell: GridIndex) -> Result<Vec<usize>> {
  if !cell.is_valid() {
    return Err(GridError::from(DomainKind::CellInvalid));
  }
  let res = cell.resolution();
  let pentagon = cell.is_pentagon();

  // Class II pentagon vertices all sit on face edges; the center child
  // pentagon touches the same faces
  if pentagon && !is_class_iii_res(res) {
    return icosahedron_faces(center_child(cell, res + 1)?);
  }

  let fijk = cell.to_face_ijk()?;
  let (verts, adj_res) = fijk.substrate_verts(res);
  let count = if pentagon { NUM_PENT_VERTS } else { NUM_HEX_VERTS };

  let mut faces = Vec::with_capacity(max_face_count(cell)?);
  for mut vert in verts.into_iter().take(count) {
    if pentagon {
      vert.adjust_pent_vert_overage(adj_res);
    } else {
      vert.adjust_overage_class_ii(adj_res, false, true);
    }
    if !faces.contains(&vert.face) {
      faces.push(vert.face);
    }
  }
  Ok(faces)
}
