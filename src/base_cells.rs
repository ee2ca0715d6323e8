// src/base_cells.rs

//! Resolution 0 base cells: their home faces, neighbors, and the face lookup
//! used to resolve a resolution 0 coordinate into a base cell.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, Direction, FaceIJK};

/// Marker for a missing neighbor (the k direction of a pentagon).
pub(crate) const INVALID_BASE_CELL: u8 = 127;
const X: u8 = INVALID_BASE_CELL;

/// Largest coordinate component accepted by the face lookup.
pub(crate) const MAX_FACE_COORD: i32 = 2;

/// Static description of one base cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCell {
  /// Home face and resolution 0 coordinate on it.
  pub(crate) home: FaceIJK,
  pub(crate) pentagon: bool,
  polar: bool,
  /// Faces on which a pentagon is offset clockwise.
  cw_offset_faces: Option<[usize; 2]>,
}

impl BaseCell {
  const fn hex(face: usize, i: i32, j: i32, k: i32) -> Self {
    Self {
      home: FaceIJK::new(face, CoordIJK::new(i, j, k)),
      pentagon: false,
      polar: false,
      cw_offset_faces: None,
    }
  }

  const fn pent(face: usize, i: i32, j: i32, k: i32, cw_offset_faces: [usize; 2]) -> Self {
    Self {
      home: FaceIJK::new(face, CoordIJK::new(i, j, k)),
      pentagon: true,
      polar: false,
      cw_offset_faces: Some(cw_offset_faces),
    }
  }

  const fn polar_pent(face: usize, i: i32, j: i32, k: i32) -> Self {
    Self {
      home: FaceIJK::new(face, CoordIJK::new(i, j, k)),
      pentagon: true,
      polar: true,
      cw_offset_faces: None,
    }
  }
}

#[inline]
fn cell(base_cell: u8) -> Option<&'static BaseCell> {
  BASE_CELLS.get(usize::from(base_cell))
}

/// True when `base_cell` is one of the twelve pentagons.
#[inline]
pub(crate) fn is_pentagon(base_cell: u8) -> bool {
  cell(base_cell).is_some_and(|c| c.pentagon)
}

/// True for the two pentagons whose neighbors all face toward them.
#[inline]
pub(crate) fn is_polar_pentagon(base_cell: u8) -> bool {
  cell(base_cell).is_some_and(|c| c.polar)
}

/// Home face and coordinate of a base cell. Callers pass a validated cell.
#[inline]
pub(crate) fn home(base_cell: u8) -> FaceIJK {
  cell(base_cell).map(|c| c.home).unwrap_or_default()
}

/// Whether a pentagon base cell is offset clockwise on `face`.
pub(crate) fn is_cw_offset(base_cell: u8, face: usize) -> bool {
  cell(base_cell)
    .and_then(|c| c.cw_offset_faces)
    .is_some_and(|faces| faces.contains(&face))
}

/// Base cell at a resolution 0 coordinate on a face, with the number of 60
/// degree counter-clockwise rotations into that cell's orientation.
pub(crate) fn from_face_ijk(fijk: &FaceIJK) -> Option<(u8, u8)> {
  let CoordIJK { i, j, k } = fijk.coord;
  let in_range = |v: i32| (0..=MAX_FACE_COORD).contains(&v);
  if fijk.face >= NUM_ICOSA_FACES || !in_range(i) || !in_range(j) || !in_range(k) {
    return None;
  }
  Some(FACE_LOOKUP[fijk.face][i as usize][j as usize][k as usize])
}

/// Neighboring base cell in direction `dir`, if there is one.
pub(crate) fn neighbor(base_cell: u8, dir: Direction) -> Option<u8> {
  if dir == Direction::Invalid {
    return None;
  }
  NEIGHBORS
    .get(usize::from(base_cell))
    .map(|row| row[dir as usize])
    .filter(|&nb| nb != INVALID_BASE_CELL)
}

/// Counter-clockwise rotations needed when stepping from `base_cell` in
/// direction `dir`.
pub(crate) fn neighbor_rotations(base_cell: u8, dir: Direction) -> u8 {
  if dir == Direction::Invalid {
    return 0;
  }
  NEIGHBOR_CCW_ROTATIONS
    .get(usize::from(base_cell))
    .map_or(0, |row| row[dir as usize])
}

/// Direction from `origin` to an adjacent base cell, or `Direction::Invalid`
/// when they are not adjacent. A cell is its own center neighbor.
pub(crate) fn direction_to(origin: u8, neighbor: u8) -> Direction {
  let Some(row) = NEIGHBORS.get(usize::from(origin)) else {
    return Direction::Invalid;
  };
  row
    .iter()
    .position(|&nb| nb == neighbor)
    .map_or(Direction::Invalid, |d| Direction::from_bits(d as u64))
}

/// Base cell descriptions, indexed by base cell number.
#[rustfmt::skip]
pub(crate) static BASE_CELLS: [BaseCell; NUM_BASE_CELLS as usize] = [
  /*   0 */ BaseCell::hex(1, 1, 0, 0),
  /*   1 */ BaseCell::hex(2, 1, 1, 0),
  /*   2 */ BaseCell::hex(1, 0, 0, 0),
  /*   3 */ BaseCell::hex(2, 1, 0, 0),
  /*   4 */ BaseCell::polar_pent(0, 2, 0, 0),
  /*   5 */ BaseCell::hex(1, 1, 1, 0),
  /*   6 */ BaseCell::hex(1, 0, 0, 1),
  /*   7 */ BaseCell::hex(2, 0, 0, 0),
  /*   8 */ BaseCell::hex(0, 1, 0, 0),
  /*   9 */ BaseCell::hex(2, 0, 1, 0),
  /*  10 */ BaseCell::hex(1, 0, 1, 0),
  /*  11 */ BaseCell::hex(1, 0, 1, 1),
  /*  12 */ BaseCell::hex(3, 1, 0, 0),
  /*  13 */ BaseCell::hex(3, 1, 1, 0),
  /*  14 */ BaseCell::pent(11, 2, 0, 0, [2, 6]),
  /*  15 */ BaseCell::hex(4, 1, 0, 0),
  /*  16 */ BaseCell::hex(0, 0, 0, 0),
  /*  17 */ BaseCell::hex(6, 0, 1, 0),
  /*  18 */ BaseCell::hex(0, 0, 0, 1),
  /*  19 */ BaseCell::hex(2, 0, 1, 1),
  /*  20 */ BaseCell::hex(7, 0, 0, 1),
  /*  21 */ BaseCell::hex(2, 0, 0, 1),
  /*  22 */ BaseCell::hex(0, 1, 1, 0),
  /*  23 */ BaseCell::hex(6, 0, 0, 1),
  /*  24 */ BaseCell::pent(10, 2, 0, 0, [1, 5]),
  /*  25 */ BaseCell::hex(6, 0, 0, 0),
  /*  26 */ BaseCell::hex(3, 0, 0, 0),
  /*  27 */ BaseCell::hex(11, 1, 0, 0),
  /*  28 */ BaseCell::hex(4, 1, 1, 0),
  /*  29 */ BaseCell::hex(3, 0, 1, 0),
  /*  30 */ BaseCell::hex(0, 0, 1, 1),
  /*  31 */ BaseCell::hex(4, 0, 0, 0),
  /*  32 */ BaseCell::hex(5, 0, 1, 0),
  /*  33 */ BaseCell::hex(0, 0, 1, 0),
  /*  34 */ BaseCell::hex(7, 0, 1, 0),
  /*  35 */ BaseCell::hex(11, 1, 1, 0),
  /*  36 */ BaseCell::hex(7, 0, 0, 0),
  /*  37 */ BaseCell::hex(10, 1, 0, 0),
  /*  38 */ BaseCell::pent(12, 2, 0, 0, [3, 7]),
  /*  39 */ BaseCell::hex(6, 1, 0, 1),
  /*  40 */ BaseCell::hex(7, 1, 0, 1),
  /*  41 */ BaseCell::hex(4, 0, 0, 1),
  /*  42 */ BaseCell::hex(3, 0, 0, 1),
  /*  43 */ BaseCell::hex(3, 0, 1, 1),
  /*  44 */ BaseCell::hex(4, 0, 1, 0),
  /*  45 */ BaseCell::hex(6, 1, 0, 0),
  /*  46 */ BaseCell::hex(11, 0, 0, 0),
  /*  47 */ BaseCell::hex(8, 0, 0, 1),
  /*  48 */ BaseCell::hex(5, 0, 0, 1),
  /*  49 */ BaseCell::pent(14, 2, 0, 0, [0, 9]),
  /*  50 */ BaseCell::hex(5, 0, 0, 0),
  /*  51 */ BaseCell::hex(12, 1, 0, 0),
  /*  52 */ BaseCell::hex(10, 1, 1, 0),
  /*  53 */ BaseCell::hex(4, 0, 1, 1),
  /*  54 */ BaseCell::hex(12, 1, 1, 0),
  /*  55 */ BaseCell::hex(7, 1, 0, 0),
  /*  56 */ BaseCell::hex(11, 0, 1, 0),
  /*  57 */ BaseCell::hex(10, 0, 0, 0),
  /*  58 */ BaseCell::pent(13, 2, 0, 0, [4, 8]),
  /*  59 */ BaseCell::hex(10, 0, 0, 1),
  /*  60 */ BaseCell::hex(11, 0, 0, 1),
  /*  61 */ BaseCell::hex(9, 0, 1, 0),
  /*  62 */ BaseCell::hex(8, 0, 1, 0),
  /*  63 */ BaseCell::pent(6, 2, 0, 0, [11, 15]),
  /*  64 */ BaseCell::hex(8, 0, 0, 0),
  /*  65 */ BaseCell::hex(9, 0, 0, 1),
  /*  66 */ BaseCell::hex(14, 1, 0, 0),
  /*  67 */ BaseCell::hex(5, 1, 0, 1),
  /*  68 */ BaseCell::hex(16, 0, 1, 1),
  /*  69 */ BaseCell::hex(8, 1, 0, 1),
  /*  70 */ BaseCell::hex(5, 1, 0, 0),
  /*  71 */ BaseCell::hex(12, 0, 0, 0),
  /*  72 */ BaseCell::pent(7, 2, 0, 0, [12, 16]),
  /*  73 */ BaseCell::hex(12, 0, 1, 0),
  /*  74 */ BaseCell::hex(10, 0, 1, 0),
  /*  75 */ BaseCell::hex(9, 0, 0, 0),
  /*  76 */ BaseCell::hex(13, 1, 0, 0),
  /*  77 */ BaseCell::hex(16, 0, 0, 1),
  /*  78 */ BaseCell::hex(15, 0, 1, 1),
  /*  79 */ BaseCell::hex(15, 0, 1, 0),
  /*  80 */ BaseCell::hex(16, 0, 1, 0),
  /*  81 */ BaseCell::hex(14, 1, 1, 0),
  /*  82 */ BaseCell::hex(13, 1, 1, 0),
  /*  83 */ BaseCell::pent(5, 2, 0, 0, [10, 19]),
  /*  84 */ BaseCell::hex(8, 1, 0, 0),
  /*  85 */ BaseCell::hex(14, 0, 0, 0),
  /*  86 */ BaseCell::hex(9, 1, 0, 1),
  /*  87 */ BaseCell::hex(14, 0, 0, 1),
  /*  88 */ BaseCell::hex(17, 0, 0, 1),
  /*  89 */ BaseCell::hex(12, 0, 0, 1),
  /*  90 */ BaseCell::hex(16, 0, 0, 0),
  /*  91 */ BaseCell::hex(17, 0, 1, 1),
  /*  92 */ BaseCell::hex(15, 0, 0, 1),
  /*  93 */ BaseCell::hex(16, 1, 0, 1),
  /*  94 */ BaseCell::hex(9, 1, 0, 0),
  /*  95 */ BaseCell::hex(15, 0, 0, 0),
  /*  96 */ BaseCell::hex(13, 0, 0, 0),
  /*  97 */ BaseCell::pent(8, 2, 0, 0, [13, 17]),
  /*  98 */ BaseCell::hex(13, 0, 1, 0),
  /*  99 */ BaseCell::hex(17, 1, 0, 1),
  /* 100 */ BaseCell::hex(19, 0, 1, 0),
  /* 101 */ BaseCell::hex(14, 0, 1, 0),
  /* 102 */ BaseCell::hex(19, 0, 1, 1),
  /* 103 */ BaseCell::hex(17, 0, 1, 0),
  /* 104 */ BaseCell::hex(13, 0, 0, 1),
  /* 105 */ BaseCell::hex(17, 0, 0, 0),
  /* 106 */ BaseCell::hex(16, 1, 0, 0),
  /* 107 */ BaseCell::pent(9, 2, 0, 0, [14, 18]),
  /* 108 */ BaseCell::hex(15, 1, 0, 1),
  /* 109 */ BaseCell::hex(15, 1, 0, 0),
  /* 110 */ BaseCell::hex(18, 0, 1, 1),
  /* 111 */ BaseCell::hex(18, 0, 0, 1),
  /* 112 */ BaseCell::hex(19, 0, 0, 1),
  /* 113 */ BaseCell::hex(17, 1, 0, 0),
  /* 114 */ BaseCell::hex(19, 0, 0, 0),
  /* 115 */ BaseCell::hex(18, 0, 1, 0),
  /* 116 */ BaseCell::hex(18, 1, 0, 1),
  /* 117 */ BaseCell::polar_pent(19, 2, 0, 0),
  /* 118 */ BaseCell::hex(19, 1, 0, 0),
  /* 119 */ BaseCell::hex(18, 0, 0, 0),
  /* 120 */ BaseCell::hex(19, 1, 0, 1),
  /* 121 */ BaseCell::hex(18, 1, 0, 0),
];

/// Neighboring base cell in each direction, `X` where none exists.
#[rustfmt::skip]
pub(crate) static NEIGHBORS: [[u8; 7]; NUM_BASE_CELLS as usize] = [
  /*   0 */ [0, 1, 5, 2, 4, 3, 8],
  /*   1 */ [1, 7, 6, 9, 0, 3, 2],
  /*   2 */ [2, 6, 10, 11, 0, 1, 5],
  /*   3 */ [3, 13, 1, 7, 4, 12, 0],
  /*   4 */ [4, X, 15, 8, 3, 0, 12],
  /*   5 */ [5, 2, 18, 10, 8, 0, 16],
  /*   6 */ [6, 14, 11, 17, 1, 9, 2],
  /*   7 */ [7, 21, 9, 19, 3, 13, 1],
  /*   8 */ [8, 5, 22, 16, 4, 0, 15],
  /*   9 */ [9, 19, 14, 20, 1, 7, 6],
  /*  10 */ [10, 11, 24, 23, 5, 2, 18],
  /*  11 */ [11, 17, 23, 25, 2, 6, 10],
  /*  12 */ [12, 28, 13, 26, 4, 15, 3],
  /*  13 */ [13, 26, 21, 29, 3, 12, 7],
  /*  14 */ [14, X, 17, 27, 9, 20, 6],
  /*  15 */ [15, 22, 28, 31, 4, 8, 12],
  /*  16 */ [16, 18, 33, 30, 8, 5, 22],
  /*  17 */ [17, 11, 14, 6, 35, 25, 27],
  /*  18 */ [18, 24, 30, 32, 5, 10, 16],
  /*  19 */ [19, 34, 20, 36, 7, 21, 9],
  /*  20 */ [20, 14, 19, 9, 40, 27, 36],
  /*  21 */ [21, 38, 19, 34, 13, 29, 7],
  /*  22 */ [22, 16, 41, 33, 15, 8, 31],
  /*  23 */ [23, 24, 11, 10, 39, 37, 25],
  /*  24 */ [24, X, 32, 37, 10, 23, 18],
  /*  25 */ [25, 23, 17, 11, 45, 39, 35],
  /*  26 */ [26, 42, 29, 43, 12, 28, 13],
  /*  27 */ [27, 40, 35, 46, 14, 20, 17],
  /*  28 */ [28, 31, 42, 44, 12, 15, 26],
  /*  29 */ [29, 43, 38, 47, 13, 26, 21],
  /*  30 */ [30, 32, 48, 50, 16, 18, 33],
  /*  31 */ [31, 41, 44, 53, 15, 22, 28],
  /*  32 */ [32, 30, 24, 18, 52, 50, 37],
  /*  33 */ [33, 30, 49, 48, 22, 16, 41],
  /*  34 */ [34, 19, 38, 21, 54, 36, 51],
  /*  35 */ [35, 46, 45, 56, 17, 27, 25],
  /*  36 */ [36, 20, 34, 19, 55, 40, 54],
  /*  37 */ [37, 39, 52, 57, 24, 23, 32],
  /*  38 */ [38, X, 34, 51, 29, 47, 21],
  /*  39 */ [39, 37, 25, 23, 59, 57, 45],
  /*  40 */ [40, 27, 36, 20, 60, 46, 55],
  /*  41 */ [41, 49, 53, 61, 22, 33, 31],
  /*  42 */ [42, 58, 43, 62, 28, 44, 26],
  /*  43 */ [43, 62, 47, 64, 26, 42, 29],
  /*  44 */ [44, 53, 58, 65, 28, 31, 42],
  /*  45 */ [45, 39, 35, 25, 63, 59, 56],
  /*  46 */ [46, 60, 56, 68, 27, 40, 35],
  /*  47 */ [47, 38, 43, 29, 69, 51, 64],
  /*  48 */ [48, 49, 30, 33, 67, 66, 50],
  /*  49 */ [49, X, 61, 66, 33, 48, 41],
  /*  50 */ [50, 48, 32, 30, 70, 67, 52],
  /*  51 */ [51, 69, 54, 71, 38, 47, 34],
  /*  52 */ [52, 57, 70, 74, 32, 37, 50],
  /*  53 */ [53, 61, 65, 75, 31, 41, 44],
  /*  54 */ [54, 71, 55, 73, 34, 51, 36],
  /*  55 */ [55, 40, 54, 36, 72, 60, 73],
  /*  56 */ [56, 68, 63, 77, 35, 46, 45],
  /*  57 */ [57, 59, 74, 78, 37, 39, 52],
  /*  58 */ [58, X, 62, 76, 44, 65, 42],
  /*  59 */ [59, 63, 78, 79, 39, 45, 57],
  /*  60 */ [60, 72, 68, 80, 40, 55, 46],
  /*  61 */ [61, 53, 49, 41, 81, 75, 66],
  /*  62 */ [62, 43, 58, 42, 82, 64, 76],
  /*  63 */ [63, X, 56, 45, 79, 59, 77],
  /*  64 */ [64, 47, 62, 43, 84, 69, 82],
  /*  65 */ [65, 58, 53, 44, 86, 76, 75],
  /*  66 */ [66, 67, 81, 85, 49, 48, 61],
  /*  67 */ [67, 66, 50, 48, 87, 85, 70],
  /*  68 */ [68, 56, 60, 46, 90, 77, 80],
  /*  69 */ [69, 51, 64, 47, 89, 71, 84],
  /*  70 */ [70, 67, 52, 50, 83, 87, 74],
  /*  71 */ [71, 89, 73, 91, 51, 69, 54],
  /*  72 */ [72, X, 73, 55, 80, 60, 88],
  /*  73 */ [73, 91, 72, 88, 54, 71, 55],
  /*  74 */ [74, 78, 83, 92, 52, 57, 70],
  /*  75 */ [75, 65, 61, 53, 94, 86, 81],
  /*  76 */ [76, 86, 82, 96, 58, 65, 62],
  /*  77 */ [77, 63, 68, 56, 93, 79, 90],
  /*  78 */ [78, 74, 59, 57, 95, 92, 79],
  /*  79 */ [79, 78, 63, 59, 93, 95, 77],
  /*  80 */ [80, 68, 72, 60, 99, 90, 88],
  /*  81 */ [81, 85, 94, 101, 61, 66, 75],
  /*  82 */ [82, 96, 84, 98, 62, 76, 64],
  /*  83 */ [83, X, 74, 70, 100, 87, 92],
  /*  84 */ [84, 69, 82, 64, 97, 89, 98],
  /*  85 */ [85, 87, 101, 102, 66, 67, 81],
  /*  86 */ [86, 76, 75, 65, 104, 96, 94],
  /*  87 */ [87, 83, 102, 100, 67, 70, 85],
  /*  88 */ [88, 72, 91, 73, 99, 80, 105],
  /*  89 */ [89, 97, 91, 103, 69, 84, 71],
  /*  90 */ [90, 77, 80, 68, 106, 93, 99],
  /*  91 */ [91, 73, 89, 71, 105, 88, 103],
  /*  92 */ [92, 83, 78, 74, 108, 100, 95],
  /*  93 */ [93, 79, 90, 77, 109, 95, 106],
  /*  94 */ [94, 86, 81, 75, 107, 104, 101],
  /*  95 */ [95, 92, 79, 78, 109, 108, 93],
  /*  96 */ [96, 104, 98, 110, 76, 86, 82],
  /*  97 */ [97, X, 98, 84, 103, 89, 111],
  /*  98 */ [98, 110, 97, 111, 82, 96, 84],
  /*  99 */ [99, 80, 105, 88, 106, 90, 113],
  /* 100 */ [100, 102, 83, 87, 108, 114, 92],
  /* 101 */ [101, 102, 107, 112, 81, 85, 94],
  /* 102 */ [102, 101, 87, 85, 114, 112, 100],
  /* 103 */ [103, 91, 97, 89, 116, 105, 111],
  /* 104 */ [104, 107, 110, 115, 86, 94, 96],
  /* 105 */ [105, 88, 103, 91, 113, 99, 116],
  /* 106 */ [106, 93, 99, 90, 117, 109, 113],
  /* 107 */ [107, X, 101, 94, 115, 104, 112],
  /* 108 */ [108, 100, 95, 92, 118, 114, 109],
  /* 109 */ [109, 108, 93, 95, 117, 118, 106],
  /* 110 */ [110, 98, 104, 96, 119, 111, 115],
  /* 111 */ [111, 97, 110, 98, 116, 103, 119],
  /* 112 */ [112, 107, 102, 101, 120, 115, 114],
  /* 113 */ [113, 99, 116, 105, 117, 106, 121],
  /* 114 */ [114, 112, 100, 102, 118, 120, 108],
  /* 115 */ [115, 110, 107, 104, 120, 119, 112],
  /* 116 */ [116, 103, 119, 111, 113, 105, 121],
  /* 117 */ [117, X, 109, 118, 113, 121, 106],
  /* 118 */ [118, 120, 108, 114, 117, 121, 109],
  /* 119 */ [119, 111, 115, 110, 121, 116, 120],
  /* 120 */ [120, 115, 114, 112, 121, 119, 118],
  /* 121 */ [121, 116, 120, 119, 117, 113, 118],
];

/// Counter-clockwise rotations into the neighbor's orientation, per direction.
#[rustfmt::skip]
pub(crate) static NEIGHBOR_CCW_ROTATIONS: [[u8; 7]; NUM_BASE_CELLS as usize] = [
  /*   0 */ [0, 5, 0, 0, 1, 5, 1],
  /*   1 */ [0, 0, 1, 0, 1, 0, 1],
  /*   2 */ [0, 0, 0, 0, 0, 5, 0],
  /*   3 */ [0, 5, 0, 0, 2, 5, 1],
  /*   4 */ [0, 0, 1, 0, 3, 4, 2],
  /*   5 */ [0, 0, 1, 0, 1, 0, 1],
  /*   6 */ [0, 0, 0, 3, 5, 5, 0],
  /*   7 */ [0, 0, 0, 0, 0, 5, 0],
  /*   8 */ [0, 5, 0, 0, 0, 5, 1],
  /*   9 */ [0, 0, 1, 3, 0, 0, 1],
  /*  10 */ [0, 0, 1, 3, 0, 0, 1],
  /*  11 */ [0, 3, 3, 3, 0, 0, 0],
  /*  12 */ [0, 5, 0, 0, 3, 5, 1],
  /*  13 */ [0, 0, 1, 0, 1, 0, 1],
  /*  14 */ [0, 0, 3, 0, 5, 2, 0],
  /*  15 */ [0, 5, 0, 0, 4, 5, 1],
  /*  16 */ [0, 0, 0, 0, 0, 5, 0],
  /*  17 */ [0, 3, 3, 3, 3, 0, 3],
  /*  18 */ [0, 0, 0, 3, 5, 5, 0],
  /*  19 */ [0, 3, 3, 3, 0, 0, 0],
  /*  20 */ [0, 3, 3, 3, 0, 3, 0],
  /*  21 */ [0, 0, 0, 3, 5, 5, 0],
  /*  22 */ [0, 0, 1, 0, 1, 0, 1],
  /*  23 */ [0, 3, 3, 3, 0, 3, 0],
  /*  24 */ [0, 0, 3, 0, 5, 2, 0],
  /*  25 */ [0, 0, 0, 3, 0, 0, 3],
  /*  26 */ [0, 0, 0, 0, 0, 5, 0],
  /*  27 */ [0, 3, 0, 0, 0, 3, 3],
  /*  28 */ [0, 0, 1, 0, 1, 0, 1],
  /*  29 */ [0, 0, 1, 3, 0, 0, 1],
  /*  30 */ [0, 3, 3, 3, 0, 0, 0],
  /*  31 */ [0, 0, 0, 0, 0, 5, 0],
  /*  32 */ [0, 3, 3, 3, 3, 0, 3],
  /*  33 */ [0, 0, 1, 3, 0, 0, 1],
  /*  34 */ [0, 3, 3, 3, 3, 0, 3],
  /*  35 */ [0, 0, 3, 0, 3, 0, 3],
  /*  36 */ [0, 0, 0, 3, 0, 0, 3],
  /*  37 */ [0, 3, 0, 0, 0, 3, 3],
  /*  38 */ [0, 0, 3, 0, 5, 2, 0],
  /*  39 */ [0, 3, 0, 0, 3, 3, 0],
  /*  40 */ [0, 3, 0, 0, 3, 3, 0],
  /*  41 */ [0, 0, 0, 3, 5, 5, 0],
  /*  42 */ [0, 0, 0, 3, 5, 5, 0],
  /*  43 */ [0, 3, 3, 3, 0, 0, 0],
  /*  44 */ [0, 0, 1, 3, 0, 0, 1],
  /*  45 */ [0, 0, 3, 0, 0, 3, 3],
  /*  46 */ [0, 0, 0, 3, 0, 3, 0],
  /*  47 */ [0, 3, 3, 3, 0, 3, 0],
  /*  48 */ [0, 3, 3, 3, 0, 3, 0],
  /*  49 */ [0, 0, 3, 0, 5, 2, 0],
  /*  50 */ [0, 0, 0, 3, 0, 0, 3],
  /*  51 */ [0, 3, 0, 0, 0, 3, 3],
  /*  52 */ [0, 0, 3, 0, 3, 0, 3],
  /*  53 */ [0, 3, 3, 3, 0, 0, 0],
  /*  54 */ [0, 0, 3, 0, 3, 0, 3],
  /*  55 */ [0, 0, 3, 0, 0, 3, 3],
  /*  56 */ [0, 3, 3, 3, 0, 0, 3],
  /*  57 */ [0, 0, 0, 3, 0, 3, 0],
  /*  58 */ [0, 0, 3, 0, 5, 2, 0],
  /*  59 */ [0, 3, 3, 3, 3, 3, 0],
  /*  60 */ [0, 3, 3, 3, 3, 3, 0],
  /*  61 */ [0, 3, 3, 3, 3, 0, 3],
  /*  62 */ [0, 3, 3, 3, 3, 0, 3],
  /*  63 */ [0, 0, 3, 0, 5, 2, 0],
  /*  64 */ [0, 0, 0, 3, 0, 0, 3],
  /*  65 */ [0, 3, 3, 3, 0, 3, 0],
  /*  66 */ [0, 3, 0, 0, 0, 3, 3],
  /*  67 */ [0, 3, 0, 0, 3, 3, 0],
  /*  68 */ [0, 3, 3, 3, 0, 0, 0],
  /*  69 */ [0, 3, 0, 0, 3, 3, 0],
  /*  70 */ [0, 0, 3, 0, 0, 3, 3],
  /*  71 */ [0, 0, 0, 3, 0, 3, 0],
  /*  72 */ [0, 0, 3, 0, 5, 2, 0],
  /*  73 */ [0, 3, 3, 3, 0, 0, 3],
  /*  74 */ [0, 3, 3, 3, 0, 0, 3],
  /*  75 */ [0, 0, 0, 3, 0, 0, 3],
  /*  76 */ [0, 3, 0, 0, 0, 3, 3],
  /*  77 */ [0, 0, 0, 3, 0, 5, 0],
  /*  78 */ [0, 3, 3, 3, 0, 0, 0],
  /*  79 */ [0, 0, 1, 3, 1, 0, 1],
  /*  80 */ [0, 0, 1, 3, 1, 0, 1],
  /*  81 */ [0, 0, 3, 0, 3, 0, 3],
  /*  82 */ [0, 0, 3, 0, 3, 0, 3],
  /*  83 */ [0, 0, 3, 0, 5, 2, 0],
  /*  84 */ [0, 0, 3, 0, 0, 3, 3],
  /*  85 */ [0, 0, 0, 3, 0, 3, 0],
  /*  86 */ [0, 3, 0, 0, 3, 3, 0],
  /*  87 */ [0, 3, 3, 3, 3, 3, 0],
  /*  88 */ [0, 0, 0, 3, 0, 5, 0],
  /*  89 */ [0, 3, 3, 3, 3, 3, 0],
  /*  90 */ [0, 0, 0, 0, 0, 0, 1],
  /*  91 */ [0, 3, 3, 3, 0, 0, 0],
  /*  92 */ [0, 0, 0, 3, 0, 5, 0],
  /*  93 */ [0, 5, 0, 0, 5, 5, 0],
  /*  94 */ [0, 0, 3, 0, 0, 3, 3],
  /*  95 */ [0, 0, 0, 0, 0, 0, 1],
  /*  96 */ [0, 0, 0, 3, 0, 3, 0],
  /*  97 */ [0, 0, 3, 0, 5, 2, 0],
  /*  98 */ [0, 3, 3, 3, 0, 0, 3],
  /*  99 */ [0, 5, 0, 0, 5, 5, 0],
  /* 100 */ [0, 0, 1, 3, 1, 0, 1],
  /* 101 */ [0, 3, 3, 3, 0, 0, 3],
  /* 102 */ [0, 3, 3, 3, 0, 0, 0],
  /* 103 */ [0, 0, 1, 3, 1, 0, 1],
  /* 104 */ [0, 3, 3, 3, 3, 3, 0],
  /* 105 */ [0, 0, 0, 0, 0, 0, 1],
  /* 106 */ [0, 0, 1, 0, 3, 5, 1],
  /* 107 */ [0, 0, 3, 0, 5, 2, 0],
  /* 108 */ [0, 5, 0, 0, 5, 5, 0],
  /* 109 */ [0, 0, 1, 0, 4, 5, 1],
  /* 110 */ [0, 3, 3, 3, 0, 0, 0],
  /* 111 */ [0, 0, 0, 3, 0, 5, 0],
  /* 112 */ [0, 0, 0, 3, 0, 5, 0],
  /* 113 */ [0, 0, 1, 0, 2, 5, 1],
  /* 114 */ [0, 0, 0, 0, 0, 0, 1],
  /* 115 */ [0, 0, 1, 3, 1, 0, 1],
  /* 116 */ [0, 5, 0, 0, 5, 5, 0],
  /* 117 */ [0, 0, 1, 0, 3, 4, 2],
  /* 118 */ [0, 0, 1, 0, 0, 5, 1],
  /* 119 */ [0, 0, 0, 0, 0, 0, 1],
  /* 120 */ [0, 5, 0, 0, 5, 5, 0],
  /* 121 */ [0, 0, 1, 0, 1, 5, 1],
];

/// Base cell and rotation for each resolution 0 coordinate on each face.
#[rustfmt::skip]
static FACE_LOOKUP: [[[[(u8, u8); 3]; 3]; 3]; NUM_ICOSA_FACES] = [
  // face 0
  [[[(16, 0), (18, 0), (24, 0)], [(33, 0), (30, 0), (32, 3)], [(49, 1), (48, 3), (50, 3)]],
   [[(8, 0), (5, 5), (10, 5)], [(22, 0), (16, 0), (18, 0)], [(41, 1), (33, 0), (30, 0)]],
   [[(4, 0), (0, 5), (2, 5)], [(15, 1), (8, 0), (5, 5)], [(31, 1), (22, 0), (16, 0)]]],
  // face 1
  [[[(2, 0), (6, 0), (14, 0)], [(10, 0), (11, 0), (17, 3)], [(24, 1), (23, 3), (25, 3)]],
   [[(0, 0), (1, 5), (9, 5)], [(5, 0), (2, 0), (6, 0)], [(18, 1), (10, 0), (11, 0)]],
   [[(4, 1), (3, 5), (7, 5)], [(8, 1), (0, 0), (1, 5)], [(16, 1), (5, 0), (2, 0)]]],
  // face 2
  [[[(7, 0), (21, 0), (38, 0)], [(9, 0), (19, 0), (34, 3)], [(14, 1), (20, 3), (36, 3)]],
   [[(3, 0), (13, 5), (29, 5)], [(1, 0), (7, 0), (21, 0)], [(6, 1), (9, 0), (19, 0)]],
   [[(4, 2), (12, 5), (26, 5)], [(0, 1), (3, 0), (13, 5)], [(2, 1), (1, 0), (7, 0)]]],
  // face 3
  [[[(26, 0), (42, 0), (58, 0)], [(29, 0), (43, 0), (62, 3)], [(38, 1), (47, 3), (64, 3)]],
   [[(12, 0), (28, 5), (44, 5)], [(13, 0), (26, 0), (42, 0)], [(21, 1), (29, 0), (43, 0)]],
   [[(4, 3), (15, 5), (31, 5)], [(3, 1), (12, 0), (28, 5)], [(7, 1), (13, 0), (26, 0)]]],
  // face 4
  [[[(31, 0), (41, 0), (49, 0)], [(44, 0), (53, 0), (61, 3)], [(58, 1), (65, 3), (75, 3)]],
   [[(15, 0), (22, 5), (33, 5)], [(28, 0), (31, 0), (41, 0)], [(42, 1), (44, 0), (53, 0)]],
   [[(4, 4), (8, 5), (16, 5)], [(12, 1), (15, 0), (22, 5)], [(26, 1), (28, 0), (31, 0)]]],
  // face 5
  [[[(50, 0), (48, 0), (49, 3)], [(32, 0), (30, 3), (33, 3)], [(24, 3), (18, 3), (16, 3)]],
   [[(70, 0), (67, 0), (66, 3)], [(52, 3), (50, 0), (48, 0)], [(37, 3), (32, 0), (30, 3)]],
   [[(83, 0), (87, 3), (85, 3)], [(74, 3), (70, 0), (67, 0)], [(57, 1), (52, 3), (50, 0)]]],
  // face 6
  [[[(25, 0), (23, 0), (24, 3)], [(17, 0), (11, 3), (10, 3)], [(14, 3), (6, 3), (2, 3)]],
   [[(45, 0), (39, 0), (37, 3)], [(35, 3), (25, 0), (23, 0)], [(27, 3), (17, 0), (11, 3)]],
   [[(63, 0), (59, 3), (57, 3)], [(56, 3), (45, 0), (39, 0)], [(46, 3), (35, 3), (25, 0)]]],
  // face 7
  [[[(36, 0), (20, 0), (14, 3)], [(34, 0), (19, 3), (9, 3)], [(38, 3), (21, 3), (7, 3)]],
   [[(55, 0), (40, 0), (27, 3)], [(54, 3), (36, 0), (20, 0)], [(51, 3), (34, 0), (19, 3)]],
   [[(72, 0), (60, 3), (46, 3)], [(73, 3), (55, 0), (40, 0)], [(71, 3), (54, 3), (36, 0)]]],
  // face 8
  [[[(64, 0), (47, 0), (38, 3)], [(62, 0), (43, 3), (29, 3)], [(58, 3), (42, 3), (26, 3)]],
   [[(84, 0), (69, 0), (51, 3)], [(82, 3), (64, 0), (47, 0)], [(76, 3), (62, 0), (43, 3)]],
   [[(97, 0), (89, 3), (71, 3)], [(98, 3), (84, 0), (69, 0)], [(96, 3), (82, 3), (64, 0)]]],
  // face 9
  [[[(75, 0), (65, 0), (58, 3)], [(61, 0), (53, 3), (44, 3)], [(49, 3), (41, 3), (31, 3)]],
   [[(94, 0), (86, 0), (76, 3)], [(81, 3), (75, 0), (65, 0)], [(66, 3), (61, 0), (53, 3)]],
   [[(107, 0), (104, 3), (96, 3)], [(101, 3), (94, 0), (86, 0)], [(85, 3), (81, 3), (75, 0)]]],
  // face 10
  [[[(57, 0), (59, 0), (63, 3)], [(74, 0), (78, 3), (79, 3)], [(83, 3), (92, 3), (95, 3)]],
   [[(37, 0), (39, 3), (45, 3)], [(52, 0), (57, 0), (59, 0)], [(70, 3), (74, 0), (78, 3)]],
   [[(24, 0), (23, 3), (25, 3)], [(32, 3), (37, 0), (39, 3)], [(50, 3), (52, 0), (57, 0)]]],
  // face 11
  [[[(46, 0), (60, 0), (72, 3)], [(56, 0), (68, 3), (80, 3)], [(63, 3), (77, 3), (90, 3)]],
   [[(27, 0), (40, 3), (55, 3)], [(35, 0), (46, 0), (60, 0)], [(45, 3), (56, 0), (68, 3)]],
   [[(14, 0), (20, 3), (36, 3)], [(17, 3), (27, 0), (40, 3)], [(25, 3), (35, 0), (46, 0)]]],
  // face 12
  [[[(71, 0), (89, 0), (97, 3)], [(73, 0), (91, 3), (103, 3)], [(72, 3), (88, 3), (105, 3)]],
   [[(51, 0), (69, 3), (84, 3)], [(54, 0), (71, 0), (89, 0)], [(55, 3), (73, 0), (91, 3)]],
   [[(38, 0), (47, 3), (64, 3)], [(34, 3), (51, 0), (69, 3)], [(36, 3), (54, 0), (71, 0)]]],
  // face 13
  [[[(96, 0), (104, 0), (107, 3)], [(98, 0), (110, 3), (115, 3)], [(97, 3), (111, 3), (119, 3)]],
   [[(76, 0), (86, 3), (94, 3)], [(82, 0), (96, 0), (104, 0)], [(84, 3), (98, 0), (110, 3)]],
   [[(58, 0), (65, 3), (75, 3)], [(62, 3), (76, 0), (86, 3)], [(64, 3), (82, 0), (96, 0)]]],
  // face 14
  [[[(85, 0), (87, 0), (83, 3)], [(101, 0), (102, 3), (100, 3)], [(107, 3), (112, 3), (114, 3)]],
   [[(66, 0), (67, 3), (70, 3)], [(81, 0), (85, 0), (87, 0)], [(94, 3), (101, 0), (102, 3)]],
   [[(49, 0), (48, 3), (50, 3)], [(61, 3), (66, 0), (67, 3)], [(75, 3), (81, 0), (85, 0)]]],
  // face 15
  [[[(95, 0), (92, 0), (83, 0)], [(79, 0), (78, 0), (74, 3)], [(63, 1), (59, 3), (57, 3)]],
   [[(109, 0), (108, 0), (100, 5)], [(93, 1), (95, 0), (92, 0)], [(77, 1), (79, 0), (78, 0)]],
   [[(117, 4), (118, 5), (114, 5)], [(106, 1), (109, 0), (108, 0)], [(90, 1), (93, 1), (95, 0)]]],
  // face 16
  [[[(90, 0), (77, 0), (63, 0)], [(80, 0), (68, 0), (56, 3)], [(72, 1), (60, 3), (46, 3)]],
   [[(106, 0), (93, 0), (79, 5)], [(99, 1), (90, 0), (77, 0)], [(88, 1), (80, 0), (68, 0)]],
   [[(117, 3), (109, 5), (95, 5)], [(113, 1), (106, 0), (93, 0)], [(105, 1), (99, 1), (90, 0)]]],
  // face 17
  [[[(105, 0), (88, 0), (72, 0)], [(103, 0), (91, 0), (73, 3)], [(97, 1), (89, 3), (71, 3)]],
   [[(113, 0), (99, 0), (80, 5)], [(116, 1), (105, 0), (88, 0)], [(111, 1), (103, 0), (91, 0)]],
   [[(117, 2), (106, 5), (90, 5)], [(121, 1), (113, 0), (99, 0)], [(119, 1), (116, 1), (105, 0)]]],
  // face 18
  [[[(119, 0), (111, 0), (97, 0)], [(115, 0), (110, 0), (98, 3)], [(107, 1), (104, 3), (96, 3)]],
   [[(121, 0), (116, 0), (103, 5)], [(120, 1), (119, 0), (111, 0)], [(112, 1), (115, 0), (110, 0)]],
   [[(117, 1), (113, 5), (105, 5)], [(118, 1), (121, 0), (116, 0)], [(114, 1), (120, 1), (119, 0)]]],
  // face 19
  [[[(114, 0), (112, 0), (107, 0)], [(100, 0), (102, 0), (101, 3)], [(83, 1), (87, 3), (85, 3)]],
   [[(118, 0), (120, 0), (115, 5)], [(108, 1), (114, 0), (112, 0)], [(92, 1), (100, 0), (102, 0)]],
   [[(117, 0), (121, 5), (119, 5)], [(109, 1), (118, 0), (120, 0)], [(95, 1), (108, 1), (114, 0)]]],
];
