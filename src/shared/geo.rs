use std::{
    cmp,
    fmt::Display,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// A length in meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 > 1000.0 {
            f.write_fmt(format_args!("{:.2} km", self.as_kilometers()))
        } else {
            f.write_fmt(format_args!("{:.0} m", self.0))
        }
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// A longitude/latitude pair in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.longitude, self.latitude))
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl GeoPoint {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// A point is usable when both components are finite and inside the
    /// WGS84 degree ranges.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Great-circle distance to `point` using the haversine formula on a
    /// spherical earth. Good to well under 0.5% at city scale, not meant
    /// for survey work.
    pub fn distance_to(&self, point: &Self) -> Distance {
        const R: f64 = 6371.0;
        let dist_lat = f64::to_radians(point.latitude - self.latitude);
        let dist_lon = f64::to_radians(point.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(point.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_kilometers(R * c)
    }
}

#[test]
fn distance_test() {
    // Chennai Central to the airport, roughly 14.6 km as the crow flies.
    let central = GeoPoint::new(80.2707, 13.0827);
    let airport = GeoPoint::new(80.1709, 12.9941);
    let d = central.distance_to(&airport);
    assert!((d.as_kilometers() - 14.6267).abs() < 0.01);
}

#[test]
fn distance_zero_test() {
    let point = GeoPoint::new(80.237617, 13.067439);
    assert_eq!(point.distance_to(&point).as_meters(), 0.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_arithmetic_test() {
    let sum = Distance::from_meters(400.0) + Distance::from_meters(100.0);
    assert_eq!(sum, Distance::from_meters(500.0));
    let diff = Distance::from_kilometers(1.0) - Distance::from_meters(250.0);
    assert_eq!(diff.as_meters(), 750.0);
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn valid_point_test() {
    assert!(GeoPoint::new(80.2376, 13.0674).is_valid());
    assert!(GeoPoint::new(-180.0, -90.0).is_valid());
}

#[test]
fn invalid_point_test() {
    assert!(!GeoPoint::new(80.2376, 200.0).is_valid());
    assert!(!GeoPoint::new(-181.0, 13.0).is_valid());
    assert!(!GeoPoint::new(f64::NAN, 13.0).is_valid());
}
