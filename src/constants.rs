// src/constants.rs

//! Numeric constants and the 64-bit index layout.

use std::f64::consts;

pub const M_PI: f64 = consts::PI;
pub const M_PI_2: f64 = consts::FRAC_PI_2;
pub const M_2PI: f64 = 2.0 * consts::PI;
pub const M_PI_180: f64 = consts::PI / 180.0;
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Threshold below which a floating point value is treated as zero.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;
/// One billionth of a degree.
pub const EPSILON_DEG: f64 = 0.000_000_001;
/// `EPSILON_DEG` in radians, used to compare boundary vertices.
pub const EPSILON_RAD: f64 = EPSILON_DEG * M_PI_180;

/// sqrt(3) / 2, i.e. sin(60 degrees).
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation angle between Class II and Class III resolution axes,
/// asin(sqrt(3/28)).
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Authalic earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Scaling factor from hex2d resolution 0 unit length (distance between
/// adjacent cell center points on the plane) to gnomonic unit length.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

/// Finest supported resolution.
pub const MAX_RES: u8 = 15;
pub const NUM_ICOSA_FACES: usize = 20;
pub const NUM_BASE_CELLS: u8 = 122;
pub const NUM_PENTAGONS: usize = 12;
pub const NUM_HEX_VERTS: usize = 6;
pub const NUM_PENT_VERTS: usize = 5;
/// 5 topological vertices plus up to 5 icosahedron edge crossings.
pub const MAX_BOUNDARY_VERTS: usize = 10;

/// Cells at the finest resolution, `2 + 120 * 7^15`.
pub const NUM_CELLS_MAX_RES: u64 = 569_707_381_193_162;

/// Length of the textual form of an index including a trailing terminator.
pub const MAX_INDEX_STRING_LEN: usize = 17;

/// Upper bound on the radius of the breadth-first search used by
/// `grid_distance` when local coordinates cannot be unfolded.
pub const MAX_SEARCH_RADIUS: u64 = 64;

// Bit layout, high bit first:
// | 1 reserved | 4 mode | 3 reserved/edge dir | 4 res | 7 base cell | 15 x 3 digits |

pub const MODE_OFFSET: u32 = 59;
pub const RESERVED_OFFSET: u32 = 56;
pub const RES_OFFSET: u32 = 52;
pub const BASE_CELL_OFFSET: u32 = 45;
pub const PER_DIGIT_OFFSET: u32 = 3;

pub const HIGH_BIT_MASK: u64 = 1 << 63;
pub const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
pub const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
pub const RES_MASK: u64 = 0b1111 << RES_OFFSET;
pub const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;
pub const DIGIT_MASK: u64 = 0b111;
/// The 45 bits holding the 15 resolution digits.
pub const DIGITS_MASK: u64 = (1 << BASE_CELL_OFFSET) - 1;

/// Resolution 0, base cell 0, mode 0, every digit set to 7.
pub const INDEX_INIT: u64 = 35_184_372_088_831;

/// Squared chord length between two points on the unit sphere can never
/// exceed 4, so this seeds the closest-face search.
pub const MAX_SQUARED_CHORD: f64 = 5.0;
