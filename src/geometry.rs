// src/geometry.rs

//! Spherical coordinates: construction, angle conversion, and the azimuth and
//! distance helpers used by the face projection.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, EPSILON_RAD, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::error::{DomainKind, GridError};
use crate::types::GeoCoord;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Normalizes an angle into `[0, 2pi)`.
#[inline]
#[must_use]
pub(crate) fn pos_angle(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if tmp >= M_2PI {
    tmp - M_2PI
  } else {
    tmp
  }
}

/// Wraps a longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Wraps a longitude into the half-open range `(-pi, pi]`.
#[inline]
fn normalize_lng(lng: f64) -> f64 {
  let lng = constrain_lng(lng);
  if lng <= -M_PI {
    lng + M_2PI
  } else {
    lng
  }
}

impl GeoCoord {
  /// Builds a coordinate from degrees.
  ///
  /// Fails with [`DomainKind::LatLng`] when either value is not finite, the
  /// latitude is outside `[-90, 90]` or the longitude outside `[-180, 180]`.
  /// The longitude is stored normalized into `(-pi, pi]`.
  pub fn from_degrees(lat: f64, lng: f64) -> Result<Self, GridError> {
    if !lat.is_finite() || !lng.is_finite() || !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
      return Err(DomainKind::LatLng.into());
    }
    Ok(Self::new_unchecked(degrees_to_radians(lat), normalize_lng(degrees_to_radians(lng))))
  }

  /// Builds a coordinate from radians.
  ///
  /// The latitude must lie in `[-pi/2, pi/2]`; any finite longitude is
  /// accepted and wrapped into `(-pi, pi]`.
  pub fn from_radians(lat: f64, lng: f64) -> Result<Self, GridError> {
    if !lat.is_finite() || !lng.is_finite() || !(-M_PI_2..=M_PI_2).contains(&lat) {
      return Err(DomainKind::LatLng.into());
    }
    Ok(Self::new_unchecked(lat, normalize_lng(lng)))
  }

  #[inline]
  pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Latitude in radians.
  #[inline]
  pub fn lat(&self) -> f64 {
    self.lat
  }

  /// Longitude in radians.
  #[inline]
  pub fn lng(&self) -> f64 {
    self.lng
  }

  #[inline]
  pub fn lat_degrees(&self) -> f64 {
    radians_to_degrees(self.lat)
  }

  #[inline]
  pub fn lng_degrees(&self) -> f64 {
    radians_to_degrees(self.lng)
  }

  /// `(lat, lng)` in degrees.
  #[inline]
  pub fn to_degrees(&self) -> (f64, f64) {
    (self.lat_degrees(), self.lng_degrees())
  }

  /// Component-wise comparison within `threshold` radians.
  #[inline]
  pub fn almost_equal_threshold(&self, other: &GeoCoord, threshold: f64) -> bool {
    (self.lat - other.lat).abs() < threshold && (self.lng - other.lng).abs() < threshold
  }

  /// Component-wise comparison within [`EPSILON_RAD`].
  #[inline]
  pub fn almost_equal(&self, other: &GeoCoord) -> bool {
    self.almost_equal_threshold(other, EPSILON_RAD)
  }

  /// Initial bearing from `self` to `other`, in radians clockwise from north.
  pub(crate) fn azimuth_to(&self, other: &GeoCoord) -> f64 {
    let dlng = other.lng - self.lng;
    (other.lat.cos() * dlng.sin()).atan2(self.lat.cos() * other.lat.sin() - self.lat.sin() * other.lat.cos() * dlng.cos())
  }

  /// The point `distance` radians away along azimuth `az`.
  pub(crate) fn project(&self, az: f64, distance: f64) -> GeoCoord {
    if distance < EPSILON {
      return *self;
    }

    let az = pos_angle(az);
    let due_north = az < EPSILON;
    let due_south = (az - M_PI).abs() < EPSILON;

    let lat = if due_north {
      self.lat + distance
    } else if due_south {
      self.lat - distance
    } else {
      let sin_lat = self.lat.sin() * distance.cos() + self.lat.cos() * distance.sin() * az.cos();
      sin_lat.clamp(-1.0, 1.0).asin()
    };

    if (lat - M_PI_2).abs() < EPSILON {
      return GeoCoord::new_unchecked(M_PI_2, 0.0);
    }
    if (lat + M_PI_2).abs() < EPSILON {
      return GeoCoord::new_unchecked(-M_PI_2, 0.0);
    }
    if due_north || due_south {
      return GeoCoord::new_unchecked(lat, constrain_lng(self.lng));
    }

    let inv_cos_lat = 1.0 / lat.cos();
    let sin_lng = (az.sin() * distance.sin() * inv_cos_lat).clamp(-1.0, 1.0);
    let cos_lng = ((distance.cos() - self.lat.sin() * lat.sin()) / self.lat.cos() * inv_cos_lat).clamp(-1.0, 1.0);
    GeoCoord::new_unchecked(lat, constrain_lng(self.lng + sin_lng.atan2(cos_lng)))
  }
}

/// Great circle distance in radians (haversine).
pub fn great_circle_distance_rads(a: &GeoCoord, b: &GeoCoord) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great circle distance in kilometers.
pub fn great_circle_distance_km(a: &GeoCoord, b: &GeoCoord) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Great circle distance in meters.
pub fn great_circle_distance_m(a: &GeoCoord, b: &GeoCoord) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_relative_eq;

  fn deg(lat: f64, lng: f64) -> GeoCoord {
    GeoCoord::from_degrees(lat, lng).unwrap()
  }

  #[test]
  fn test_angle_conversion() {
    assert_relative_eq!(degrees_to_radians(180.0), M_PI);
    assert_relative_eq!(radians_to_degrees(M_PI_2), 90.0);
    assert_relative_eq!(radians_to_degrees(degrees_to_radians(-37.5)), -37.5, epsilon = 1e-12);
  }

  #[test]
  fn test_pos_angle() {
    assert_eq!(pos_angle(0.0), 0.0);
    assert_relative_eq!(pos_angle(-M_PI_2), 1.5 * M_PI);
    assert_relative_eq!(pos_angle(2.5 * M_PI), 0.5 * M_PI, epsilon = 1e-12);
    assert_eq!(pos_angle(M_2PI), 0.0);
  }

  #[test]
  fn test_constrain_lng() {
    assert_eq!(constrain_lng(1.0), 1.0);
    assert_eq!(constrain_lng(M_PI), M_PI);
    assert_relative_eq!(constrain_lng(3.0 * M_PI), M_PI);
    assert_eq!(constrain_lng(M_2PI), 0.0);
  }

  #[test]
  fn test_from_degrees_validates() {
    assert!(GeoCoord::from_degrees(90.0, 180.0).is_ok());
    assert_eq!(GeoCoord::from_degrees(90.5, 0.0), Err(DomainKind::LatLng.into()));
    assert_eq!(GeoCoord::from_degrees(0.0, -180.5), Err(DomainKind::LatLng.into()));
    assert!(GeoCoord::from_degrees(f64::NAN, 0.0).is_err());
    assert!(GeoCoord::from_degrees(0.0, f64::INFINITY).is_err());
  }

  #[test]
  fn test_longitude_normalized_half_open() {
    let west = deg(10.0, -180.0);
    assert!(west.lng() > 0.0);
    assert_relative_eq!(west.lng(), M_PI, epsilon = 1e-12);
    assert_relative_eq!(deg(10.0, 180.0).lng(), M_PI, epsilon = 1e-12);
  }

  #[test]
  fn test_from_radians() {
    let g = GeoCoord::from_radians(0.5, 3.0 * M_PI).unwrap();
    assert_relative_eq!(g.lng(), M_PI, epsilon = 1e-12);
    assert!(GeoCoord::from_radians(M_PI, 0.0).is_err());
  }

  #[test]
  fn test_to_degrees() {
    let (lat, lng) = deg(53.95913, -1.07923).to_degrees();
    assert_relative_eq!(lat, 53.95913, epsilon = 1e-12);
    assert_relative_eq!(lng, -1.07923, epsilon = 1e-12);
  }

  #[test]
  fn test_almost_equal() {
    let a = deg(15.0, 10.0);
    let b = deg(15.0 + crate::constants::EPSILON_DEG * 2.0, 10.0);
    assert!(a.almost_equal(&a));
    assert!(!a.almost_equal(&b));
    assert!(a.almost_equal_threshold(&b, EPSILON_RAD * 3.0));
  }

  #[test]
  fn test_azimuth_cardinal_directions() {
    let origin = deg(0.0, 0.0);
    assert_relative_eq!(origin.azimuth_to(&deg(10.0, 0.0)), 0.0, epsilon = 1e-12);
    assert_relative_eq!(origin.azimuth_to(&deg(0.0, 10.0)), M_PI_2, epsilon = 1e-12);
    assert_relative_eq!(origin.azimuth_to(&deg(-10.0, 0.0)).abs(), M_PI, epsilon = 1e-12);
    assert_relative_eq!(origin.azimuth_to(&deg(0.0, -10.0)), -M_PI_2, epsilon = 1e-12);
  }

  #[test]
  fn test_project_zero_distance() {
    let start = deg(15.0, 10.0);
    assert_eq!(start.project(0.3, 0.0), start);
  }

  #[test]
  fn test_project_due_north_and_south() {
    let to_pole = deg(45.0, 1.0).project(0.0, degrees_to_radians(45.0));
    assert!(to_pole.almost_equal(&deg(90.0, 0.0)), "{to_pole:?}");

    let to_south_pole = deg(-45.0, 2.0).project(M_PI, degrees_to_radians(45.0));
    assert!(to_south_pole.almost_equal(&deg(-90.0, 0.0)), "{to_south_pole:?}");

    let north = deg(-45.0, 10.0).project(0.0, degrees_to_radians(35.0));
    assert!(north.almost_equal(&deg(-10.0, 10.0)), "{north:?}");
  }

  #[test]
  fn test_project_pole_to_pole() {
    let south = deg(90.0, 0.0).project(degrees_to_radians(12.0), M_PI);
    assert!(south.almost_equal(&deg(-90.0, 0.0)), "{south:?}");
  }

  #[test]
  fn test_project_inverts_azimuth() {
    let a = deg(37.0, -122.0);
    let b = deg(40.0, -74.0);
    let az = a.azimuth_to(&b);
    let d = great_circle_distance_rads(&a, &b);
    assert!(a.project(az, d).almost_equal_threshold(&b, 1e-9));
  }

  #[test]
  fn test_great_circle_distance() {
    let a = deg(0.0, 0.0);
    assert_eq!(great_circle_distance_rads(&a, &a), 0.0);
    assert_relative_eq!(great_circle_distance_rads(&a, &deg(0.0, 90.0)), M_PI_2, epsilon = 1e-12);
    assert_relative_eq!(great_circle_distance_rads(&deg(90.0, 0.0), &deg(-90.0, 0.0)), M_PI, epsilon = 1e-12);
    let km = great_circle_distance_km(&a, &deg(0.0, 1.0));
    assert_relative_eq!(km, EARTH_RADIUS_KM * M_PI_180, epsilon = 1e-9);
    assert_relative_eq!(great_circle_distance_m(&a, &deg(0.0, 1.0)), km * 1000.0, epsilon = 1e-6);
  }
}
