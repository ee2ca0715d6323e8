// src/coords/face_ijk.rs

//! Icosahedron face projection: points on the sphere to and from face-local
//! IJK coordinates, overage across face edges, and cell boundaries.

use crate::constants::{
  EPSILON, INV_RES0_U_GNOMONIC, MAX_SQUARED_CHORD, M_AP7_ROT_RADS, M_ONETHIRD, M_RSQRT7, M_SQRT3_2, M_SQRT7,
  NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENT_VERTS, RES0_U_GNOMONIC,
};
use crate::geometry::pos_angle;
use crate::index::is_class_iii_res;
use crate::types::{CellBoundary, CoordIJK, FaceIJK, GeoCoord, Vec2d, Vec3d};

/// Neighbor quadrants in [`FACE_NEIGHBORS`].
pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

/// How a neighboring face is reached: the face, the translation of its
/// origin and the counter-clockwise rotation into its frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrient {
  pub(crate) face: usize,
  pub(crate) translate: CoordIJK,
  pub(crate) ccw_rot60: u8,
}

const fn orient(face: usize, i: i32, j: i32, k: i32, ccw_rot60: u8) -> FaceOrient {
  FaceOrient {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

/// Where a coordinate landed after overage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Still on the original face.
  None,
  /// Exactly on a face edge; only substrate grids hit this.
  FaceEdge,
  /// Moved onto the interior of a neighboring face.
  NewFace,
}

/// Largest coordinate sum that stays on a face at a Class II resolution.
#[inline]
fn max_dim(class_ii_res: u8) -> i32 {
  2 * unit_scale(class_ii_res)
}

/// Translation scale between face origins at a Class II resolution.
#[inline]
fn unit_scale(class_ii_res: u8) -> i32 {
  7_i32.pow(u32::from(class_ii_res / 2))
}

/// Quadrant of `to` as seen from face `from`, `Some(0)` for the same face.
pub(crate) fn adjacent_face_dir(from: usize, to: usize) -> Option<usize> {
  if from == to {
    return Some(0);
  }
  FACE_NEIGHBORS
    .get(from)?
    .iter()
    .enumerate()
    .skip(1)
    .find(|(_, o)| o.face == to)
    .map(|(quadrant, _)| quadrant)
}

/// Face whose center is nearest `geo`, with the squared chord distance.
fn closest_face(geo: &GeoCoord) -> (usize, f64) {
  let point = Vec3d::from_geo(geo);
  let mut best = (0, MAX_SQUARED_CHORD);
  for (face, center) in FACE_CENTER_POINT.iter().enumerate() {
    let sqd = center.square_distance(&point);
    if sqd < best.1 {
      best = (face, sqd);
    }
  }
  best
}

/// Gnomonic projection of `geo` onto the hex plane of its closest face.
pub(crate) fn geo_to_hex2d(geo: &GeoCoord, res: u8) -> (usize, Vec2d) {
  let (face, sqd) = closest_face(geo);

  let mut r = (1.0 - sqd * 0.5).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let center = &FACE_CENTER_GEO[face];
  let mut theta = pos_angle(FACE_AXES_AZ_RADS_CII[face][0] - pos_angle(center.azimuth_to(geo)));
  if is_class_iii_res(res) {
    theta = pos_angle(theta - M_AP7_ROT_RADS);
  }

  r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }
  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverse of [`geo_to_hex2d`]. `substrate` selects the aperture 3 vertex
/// grid used for cell boundaries.
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: usize, res: u8, substrate: bool) -> GeoCoord {
  let center = FACE_CENTER_GEO[face];
  let mut r = v.magnitude();
  if r < EPSILON {
    return center;
  }

  let mut theta = v.y.atan2(v.x);

  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if substrate {
    r *= M_ONETHIRD;
    if is_class_iii_res(res) {
      r *= M_RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  if !substrate && is_class_iii_res(res) {
    theta = pos_angle(theta + M_AP7_ROT_RADS);
  }
  let az = pos_angle(FACE_AXES_AZ_RADS_CII[face][0] - theta);
  center.project(az, r)
}

/// Vertex offsets around a Class II cell center on the substrate grid.
#[rustfmt::skip]
const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 2, 1),
  CoordIJK::new(0, 1, 2), CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
];

/// Vertex offsets around a Class III cell center on the substrate grid.
#[rustfmt::skip]
const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
  CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0), CoordIJK::new(0, 5, 4),
  CoordIJK::new(0, 1, 5), CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
];

impl FaceIJK {
  /// Face and coordinates of the cell containing `geo` at `res`.
  pub(crate) fn from_geo(geo: &GeoCoord, res: u8) -> Self {
    let (face, v) = geo_to_hex2d(geo, res);
    FaceIJK::new(face, CoordIJK::from_hex2d(v))
  }

  /// Center of the cell on the sphere.
  pub(crate) fn to_geo(&self, res: u8) -> GeoCoord {
    hex2d_to_geo(&self.coord.to_hex2d(), self.face, res, false)
  }

  /// Moves a Class II coordinate that ran past the edge of its face onto the
  /// neighboring face.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: u8, pent_leading_4: bool, substrate: bool) -> Overage {
    let mut dim = max_dim(res);
    if substrate {
      dim *= 3;
    }

    let sum = self.coord.i + self.coord.j + self.coord.k;
    if substrate && sum == dim {
      return Overage::FaceEdge;
    }
    if sum <= dim {
      return Overage::None;
    }

    let quadrant = if self.coord.k > 0 {
      if self.coord.j > 0 {
        JK_QUADRANT
      } else {
        if pent_leading_4 {
          // pivot about the pentagon corner before crossing
          let corner = CoordIJK::new(dim, 0, 0);
          self.coord = (self.coord - corner).rotate60_cw() + corner;
        }
        KI_QUADRANT
      }
    } else {
      IJ_QUADRANT
    };

    let orient = FACE_NEIGHBORS[self.face][quadrant];
    self.face = orient.face;
    for _ in 0..orient.ccw_rot60 {
      self.coord = self.coord.rotate60_ccw();
    }

    let mut scale = unit_scale(res);
    if substrate {
      scale *= 3;
    }
    self.coord = (self.coord + orient.translate.scale(scale)).normalize();

    if substrate && self.coord.i + self.coord.j + self.coord.k == dim {
      Overage::FaceEdge
    } else {
      Overage::NewFace
    }
  }

  /// Repeats overage adjustment for a pentagon vertex until it settles.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: u8) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }

  /// Substrate grid vertices of the cell, with the Class II resolution they
  /// are expressed at. Only the first five are meaningful for a pentagon.
  pub(crate) fn substrate_verts(&self, res: u8) -> ([FaceIJK; NUM_HEX_VERTS], u8) {
    let mut center = self.coord.down_ap3().down_ap3r();
    let mut adj_res = res;
    let offsets = if is_class_iii_res(res) {
      center = center.down_ap7r();
      adj_res += 1;
      &VERTS_CIII
    } else {
      &VERTS_CII
    };

    let mut verts = [FaceIJK::default(); NUM_HEX_VERTS];
    for (vert, offset) in verts.iter_mut().zip(offsets) {
      *vert = FaceIJK::new(self.face, (center + *offset).normalize());
    }
    (verts, adj_res)
  }

  /// Boundary of a hexagon centered at this coordinate.
  pub(crate) fn hex_boundary(&self, res: u8) -> CellBoundary {
    let (verts, adj_res) = self.substrate_verts(res);
    let mut boundary = CellBoundary::default();

    let mut last_face = None;
    let mut last_overage = Overage::None;
    // one extra pass closes the loop for a distortion vertex on the last edge
    for step in 0..=NUM_HEX_VERTS {
      let v = step % NUM_HEX_VERTS;
      let mut fijk = verts[v];
      let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

      // Class III edges may cross an icosahedron edge; add a vertex there
      if is_class_iii_res(res) && step > 0 && last_face != Some(fijk.face) && last_overage != Overage::FaceEdge {
        let last_v = (v + NUM_HEX_VERTS - 1) % NUM_HEX_VERTS;
        let orig0 = verts[last_v].coord.to_hex2d();
        let orig1 = verts[v].coord.to_hex2d();

        let last = last_face.unwrap_or(self.face);
        let crossed = if last == self.face { fijk.face } else { last };
        if let Some((edge0, edge1)) = adjacent_face_dir(self.face, crossed).and_then(|dir| face_edge(dir, adj_res)) {
          let inter = Vec2d::intersect(orig0, orig1, edge0, edge1);
          // skip when the crossing is a vertex already
          if !orig0.almost_equals(&inter) && !orig1.almost_equals(&inter) {
            boundary.push(hex2d_to_geo(&inter, self.face, adj_res, true));
          }
        }
      }

      if step < NUM_HEX_VERTS {
        boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last_face = Some(fijk.face);
      last_overage = overage;
    }
    boundary
  }

  /// Boundary of a pentagon centered at this coordinate.
  pub(crate) fn pent_boundary(&self, res: u8) -> CellBoundary {
    let (verts, adj_res) = self.substrate_verts(res);
    let mut boundary = CellBoundary::default();

    let mut last = FaceIJK::default();
    for step in 0..=NUM_PENT_VERTS {
      let mut fijk = verts[step % NUM_PENT_VERTS];
      fijk.adjust_pent_vert_overage(adj_res);

      // every Class III pentagon edge crosses an icosahedron edge
      if is_class_iii_res(res) && step > 0 {
        if let Some(inter) = pent_edge_crossing(&last, &fijk, adj_res) {
          boundary.push(hex2d_to_geo(&inter.1, inter.0, adj_res, true));
        }
      }

      if step < NUM_PENT_VERTS {
        boundary.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }
      last = fijk;
    }
    boundary
  }
}

/// Endpoints of a face edge on the substrate grid for quadrant `dir`.
fn face_edge(dir: usize, adj_res: u8) -> Option<(Vec2d, Vec2d)> {
  let dim = f64::from(max_dim(adj_res));
  let v0 = Vec2d::new(3.0 * dim, 0.0);
  let v1 = Vec2d::new(-1.5 * dim, 3.0 * M_SQRT3_2 * dim);
  let v2 = Vec2d::new(-1.5 * dim, -3.0 * M_SQRT3_2 * dim);
  match dir {
    IJ_QUADRANT => Some((v0, v1)),
    JK_QUADRANT => Some((v1, v2)),
    KI_QUADRANT => Some((v2, v0)),
    _ => None,
  }
}

/// Where the edge from `last` to `current` crosses out of `last`'s face, in
/// that face's plane.
fn pent_edge_crossing(last: &FaceIJK, current: &FaceIJK, adj_res: u8) -> Option<(usize, Vec2d)> {
  let to_last = adjacent_face_dir(current.face, last.face)?;
  let orient = FACE_NEIGHBORS[current.face][to_last];

  // express the current vertex in the last vertex's face
  let mut coord = current.coord;
  for _ in 0..orient.ccw_rot60 {
    coord = coord.rotate60_ccw();
  }
  coord = (coord + orient.translate.scale(unit_scale(adj_res) * 3)).normalize();

  let orig0 = last.coord.to_hex2d();
  let orig1 = coord.to_hex2d();
  let dir = adjacent_face_dir(orient.face, current.face).unwrap_or(KI_QUADRANT);
  let (edge0, edge1) = face_edge(dir, adj_res).or_else(|| face_edge(KI_QUADRANT, adj_res))?;
  Some((orient.face, Vec2d::intersect(orig0, orig1, edge0, edge1)))
}

/// Face centers on the sphere.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [GeoCoord; NUM_ICOSA_FACES] = [
  GeoCoord { lat: 0.803_582_649_718_989_94, lng: 1.248_397_419_617_396 }, // 0
  GeoCoord { lat: 1.307_747_883_455_638_2, lng: 2.536_945_009_877_921 }, // 1
  GeoCoord { lat: 1.054_751_253_523_952, lng: -1.347_517_358_900_396_6 }, // 2
  GeoCoord { lat: 0.600_191_595_538_186_8, lng: -0.450_603_909_469_755_75 }, // 3
  GeoCoord { lat: 0.491_715_428_198_773_87, lng: 0.401_988_202_911_306_94 }, // 4
  GeoCoord { lat: 0.172_745_327_415_618_7, lng: 1.678_146_885_280_433_7 }, // 5
  GeoCoord { lat: 0.605_929_321_571_350_7, lng: 2.953_923_329_812_411_6 }, // 6
  GeoCoord { lat: 0.427_370_518_328_979_64, lng: -1.888_876_200_336_285_4 }, // 7
  GeoCoord { lat: -0.079_066_118_549_212_83, lng: -0.733_429_513_380_867_74 }, // 8
  GeoCoord { lat: -0.230_961_644_455_383_64, lng: 0.506_495_587_332_349 }, // 9
  GeoCoord { lat: 0.079_066_118_549_212_83, lng: 2.408_163_140_208_925_5 }, // 10
  GeoCoord { lat: 0.230_961_644_455_383_64, lng: -2.635_097_066_257_444 }, // 11
  GeoCoord { lat: -0.172_745_327_415_618_7, lng: -1.463_445_768_309_359_5 }, // 12
  GeoCoord { lat: -0.605_929_321_571_350_7, lng: -0.187_669_323_777_381_62 }, // 13
  GeoCoord { lat: -0.427_370_518_328_979_64, lng: 1.252_716_453_253_508 }, // 14
  GeoCoord { lat: -0.600_191_595_538_186_8, lng: 2.690_988_744_120_037_5 }, // 15
  GeoCoord { lat: -0.491_715_428_198_773_87, lng: -2.739_604_450_678_486_3 }, // 16
  GeoCoord { lat: -0.803_582_649_718_989_94, lng: -1.893_195_233_972_397 }, // 17
  GeoCoord { lat: -1.307_747_883_455_638_2, lng: -0.604_647_643_711_872_1 }, // 18
  GeoCoord { lat: -1.054_751_253_523_952, lng: 1.794_075_294_689_396_6 }, // 19
];

/// Face centers as unit vectors.
#[rustfmt::skip]
static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES] = [
  Vec3d { x: 0.219_930_779_140_460_6, y: 0.658_369_178_027_499_6, z: 0.719_847_537_892_618_2 }, // 0
  Vec3d { x: -0.213_923_483_450_142_1, y: 0.147_817_182_955_070_3, z: 0.965_601_793_521_420_5 }, // 1
  Vec3d { x: 0.109_262_527_878_479_7, y: -0.481_195_157_287_321, z: 0.869_777_512_128_725_3 }, // 2
  Vec3d { x: 0.742_856_730_158_679_1, y: -0.359_394_167_827_802_8, z: 0.564_800_593_651_703_3 }, // 3
  Vec3d { x: 0.811_253_470_914_096_9, y: 0.344_895_323_763_938_4, z: 0.472_138_773_641_393 }, // 4
  Vec3d { x: -0.105_549_814_961_392_1, y: 0.979_445_729_641_141_3, z: 0.171_887_461_000_936_5 }, // 5
  Vec3d { x: -0.807_540_757_997_009_2, y: 0.153_355_248_589_881_8, z: 0.569_526_199_488_268_8 }, // 6
  Vec3d { x: -0.284_614_806_978_790_7, y: -0.864_408_097_265_420_6, z: 0.414_479_255_247_354 }, // 7
  Vec3d { x: 0.740_562_147_385_448_2, y: -0.667_329_956_456_552_4, z: -0.078_983_764_632_673_77 }, // 8
  Vec3d { x: 0.851_230_398_647_429_3, y: 0.472_234_378_858_268_1, z: -0.228_913_738_868_780_8 }, // 9
  Vec3d { x: -0.740_562_147_385_448_1, y: 0.667_329_956_456_552_4, z: 0.078_983_764_632_673_77 }, // 10
  Vec3d { x: -0.851_230_398_647_429_2, y: -0.472_234_378_858_268_2, z: 0.228_913_738_868_780_8 }, // 11
  Vec3d { x: 0.105_549_814_961_391_9, y: -0.979_445_729_641_141_3, z: -0.171_887_461_000_936_5 }, // 12
  Vec3d { x: 0.807_540_757_997_009_2, y: -0.153_355_248_589_881_9, z: -0.569_526_199_488_268_8 }, // 13
  Vec3d { x: 0.284_614_806_978_790_8, y: 0.864_408_097_265_420_4, z: -0.414_479_255_247_354 }, // 14
  Vec3d { x: -0.742_856_730_158_679_1, y: 0.359_394_167_827_802_7, z: -0.564_800_593_651_703_3 }, // 15
  Vec3d { x: -0.811_253_470_914_097_1, y: -0.344_895_323_763_938_2, z: -0.472_138_773_641_393 }, // 16
  Vec3d { x: -0.219_930_779_140_460_7, y: -0.658_369_178_027_499_6, z: -0.719_847_537_892_618_2 }, // 17
  Vec3d { x: 0.213_923_483_450_142, y: -0.147_817_182_955_070_4, z: -0.965_601_793_521_420_5 }, // 18
  Vec3d { x: -0.109_262_527_878_479_6, y: 0.481_195_157_287_321, z: -0.869_777_512_128_725_3 }, // 19
];

/// Azimuth of each face's i, j and k axes from its center, Class II orientation.
#[rustfmt::skip]
static FACE_AXES_AZ_RADS_CII: [[f64; 3]; NUM_ICOSA_FACES] = [
  [5.619_958_268_523_94, 3.525_563_166_130_744_5, 1.431_168_063_737_548_7], // 0
  [5.760_339_081_714_187, 3.665_943_979_320_991_7, 1.571_548_876_927_796], // 1
  [0.780_213_654_393_430_1, 4.969_003_859_179_821, 2.874_608_756_786_625_7], // 2
  [0.430_469_363_979_999_9, 4.619_259_568_766_391, 2.524_864_466_373_195_5], // 3
  [6.130_269_123_335_111, 4.035_874_020_941_916, 1.941_478_918_548_720_3], // 4
  [2.692_877_706_530_643, 0.598_482_604_137_447_1, 4.787_272_808_923_838], // 5
  [2.982_963_003_477_244, 0.888_567_901_084_048_4, 5.077_358_105_870_44], // 6
  [3.532_912_002_790_141, 1.438_516_900_396_945_7, 5.627_307_105_183_337], // 7
  [3.494_305_004_259_568, 1.399_909_901_866_372_9, 5.588_700_106_652_764], // 8
  [3.003_214_169_499_538_4, 0.908_819_067_106_342_9, 5.097_609_271_892_734], // 9
  [5.930_472_956_509_811_6, 3.836_077_854_116_616, 1.741_682_751_723_420_4], // 10
  [0.138_378_484_090_254_85, 4.327_168_688_876_646, 2.232_773_586_483_45], // 11
  [0.448_714_947_059_150_36, 4.637_505_151_845_541_5, 2.543_110_049_452_346], // 12
  [0.158_629_650_112_549_36, 4.347_419_854_898_94, 2.253_024_752_505_745], // 13
  [5.891_865_957_979_238_5, 3.797_470_855_586_043, 1.703_075_753_192_847_6], // 14
  [2.711_123_289_609_793_3, 0.616_728_187_216_597_8, 4.805_518_392_002_988_7], // 15
  [3.294_508_837_434_268, 1.200_113_735_041_073, 5.388_903_939_827_464], // 16
  [3.804_819_692_245_44, 1.710_424_589_852_244_5, 5.899_214_794_638_635], // 17
  [3.664_438_879_055_192_4, 1.570_043_776_661_997, 5.758_833_981_448_388], // 18
  [2.361_378_999_196_363, 0.266_983_896_803_167_6, 4.455_774_101_589_558_6], // 19
];

/// Orientation of each face and its IJ, KI and JK neighbors.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrient; 4]; NUM_ICOSA_FACES] = [
  [orient(0, 0, 0, 0, 0), orient(4, 2, 0, 2, 1), orient(1, 2, 2, 0, 5), orient(5, 0, 2, 2, 3)], // 0
  [orient(1, 0, 0, 0, 0), orient(0, 2, 0, 2, 1), orient(2, 2, 2, 0, 5), orient(6, 0, 2, 2, 3)], // 1
  [orient(2, 0, 0, 0, 0), orient(1, 2, 0, 2, 1), orient(3, 2, 2, 0, 5), orient(7, 0, 2, 2, 3)], // 2
  [orient(3, 0, 0, 0, 0), orient(2, 2, 0, 2, 1), orient(4, 2, 2, 0, 5), orient(8, 0, 2, 2, 3)], // 3
  [orient(4, 0, 0, 0, 0), orient(3, 2, 0, 2, 1), orient(0, 2, 2, 0, 5), orient(9, 0, 2, 2, 3)], // 4
  [orient(5, 0, 0, 0, 0), orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient(0, 0, 2, 2, 3)], // 5
  [orient(6, 0, 0, 0, 0), orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient(1, 0, 2, 2, 3)], // 6
  [orient(7, 0, 0, 0, 0), orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient(2, 0, 2, 2, 3)], // 7
  [orient(8, 0, 0, 0, 0), orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient(3, 0, 2, 2, 3)], // 8
  [orient(9, 0, 0, 0, 0), orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient(4, 0, 2, 2, 3)], // 9
  [orient(10, 0, 0, 0, 0), orient(5, 2, 2, 0, 3), orient(6, 2, 0, 2, 3), orient(15, 0, 2, 2, 3)], // 10
  [orient(11, 0, 0, 0, 0), orient(6, 2, 2, 0, 3), orient(7, 2, 0, 2, 3), orient(16, 0, 2, 2, 3)], // 11
  [orient(12, 0, 0, 0, 0), orient(7, 2, 2, 0, 3), orient(8, 2, 0, 2, 3), orient(17, 0, 2, 2, 3)], // 12
  [orient(13, 0, 0, 0, 0), orient(8, 2, 2, 0, 3), orient(9, 2, 0, 2, 3), orient(18, 0, 2, 2, 3)], // 13
  [orient(14, 0, 0, 0, 0), orient(9, 2, 2, 0, 3), orient(5, 2, 0, 2, 3), orient(19, 0, 2, 2, 3)], // 14
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)], // 15
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)], // 16
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)], // 17
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)], // 18
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)], // 19
];
