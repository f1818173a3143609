use std::fmt::Debug;
use serde::{Serialize, Deserialize};

use crate::sexagesimal::value_to_sexagesimal;

use super::consts::*;

/// `asin` (in radians) with argument clamped into [-1, 1].
/// Rounding can push a computed sine slightly past 1.0
#[inline(always)]
pub fn safe_asin(x: f64) -> f64 {
    f64::asin(x.clamp(-1.0, 1.0))
}

/// IEEE 754 remainder: `x - n * y` where `n` is `x / y` rounded
/// to the nearest integer (ties to even). For `y = 360` the result
/// lies in [-180, 180]
#[inline(always)]
pub fn remainder(x: f64, y: f64) -> f64 {
    x - (x / y).round_ties_even() * y
}

#[test]
fn test_safe_asin() {
    let v = safe_asin(1.0000000001);
    assert!(!v.is_nan());
    assert!(f64::abs(v * RADIAN - 90.0) < 1e-12);

    let v = safe_asin(-1.0000000001);
    assert!(!v.is_nan());
    assert!(f64::abs(v * RADIAN + 90.0) < 1e-12);

    assert!(f64::abs(safe_asin(0.5) * RADIAN - 30.0) < 1e-12);
}

#[test]
fn test_remainder() {
    assert_eq!(remainder(10.0, 360.0), 10.0);
    assert_eq!(remainder(190.0, 360.0), -170.0);
    assert_eq!(remainder(-190.0, 360.0), 170.0);
    assert_eq!(remainder(720.0, 360.0), 0.0);
    assert_eq!(remainder(540.0, 360.0), -180.0); // 1.5 -> 2 (even)
    assert_eq!(remainder(180.0, 360.0), 180.0); // 0.5 -> 0 (even)
    assert_eq!(remainder(-180.0, 360.0), -180.0);
    assert!(f64::abs(remainder(888_549_220.25, 360.0) - 100.25) < 1e-6);
}

///////////////////////////////////////////////////////////////////////////////

/// Celestial (sky-fixed) coordinates. Degrees
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EqCoord {
    pub dec: f64,
    pub ra:  f64,
}

impl Debug for EqCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EqCoord")
            .field("ra", &value_to_sexagesimal(self.ra / 15.0, true, 1))
            .field("dec", &value_to_sexagesimal(self.dec, true, 0))
            .finish()
    }
}

/// Local equatorial coordinates: declination and hour angle. Degrees
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalEqCoord {
    pub dec: f64,
    pub ha:  f64,
}

impl LocalEqCoord {
    //  ^Z (pole)
    //  |   *
    //  |  /
    //  | / dec
    //  |/
    //  O-------->X (meridian, ha = 0)
    //  Y looks east, so west hour angles give negative y
    pub fn to_sphere_pt(&self) -> Point3D {
        let dec = self.dec * DEGREE;
        let ha = self.ha * DEGREE;
        let rcst = f64::cos(dec);
        Point3D {
            x: rcst * f64::cos(ha),
            y: -rcst * f64::sin(ha),
            z: f64::sin(dec),
        }
    }

    pub fn from_sphere_pt(pt: &Point3D) -> Self {
        Self {
            dec: safe_asin(pt.z) * RADIAN,
            ha:  f64::atan2(-pt.y, pt.x) * RADIAN,
        }
    }

    /// Great circle distance between two positions (degrees)
    pub fn angle_between(crd1: &LocalEqCoord, crd2: &LocalEqCoord) -> f64 {
        let sin_diff_dec = f64::sin(0.5 * (crd2.dec - crd1.dec) * DEGREE);
        let sin_diff_ha = f64::sin(0.5 * (crd2.ha - crd1.ha) * DEGREE);
        let root_expr =
            sin_diff_dec * sin_diff_dec +
            f64::cos(crd1.dec * DEGREE) * f64::cos(crd2.dec * DEGREE) * sin_diff_ha * sin_diff_ha;
        2.0 * safe_asin(f64::sqrt(root_expr)) * RADIAN
    }
}

impl Debug for LocalEqCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalEqCoord")
            .field("ha", &value_to_sexagesimal(self.ha / 15.0, true, 1))
            .field("dec", &value_to_sexagesimal(self.dec, true, 0))
            .finish()
    }
}

#[test]
fn test_local_eq_coord_to_sphere() {
    let test = |crd: LocalEqCoord| {
        let pt = crd.to_sphere_pt();
        assert!(f64::abs(pt.length() - 1.0) < 1e-12);

        let crd_from = LocalEqCoord::from_sphere_pt(&pt);
        assert!(f64::abs(crd.dec - crd_from.dec) < 1e-8);
        assert!(f64::abs(remainder(crd.ha - crd_from.ha, 360.0)) < 1e-8);
    };

    test(LocalEqCoord { dec: 0.0, ha: 0.0 });
    test(LocalEqCoord { dec: 0.0, ha: 90.0 });
    test(LocalEqCoord { dec: 45.0, ha: 45.0 });
    test(LocalEqCoord { dec: -30.0, ha: -120.0 });
    test(LocalEqCoord { dec: 22.5, ha: 270.0 });

    // east of meridian (negative hour angle) is +Y
    let pt = LocalEqCoord { dec: 0.0, ha: -90.0 }.to_sphere_pt();
    assert!(f64::abs(pt.y - 1.0) < 1e-12);
}

#[test]
fn test_angle_between() {
    let a = LocalEqCoord { dec: 10.0, ha: 20.0 };
    assert!(LocalEqCoord::angle_between(&a, &a) < 1e-12);

    let b = LocalEqCoord { dec: 11.0, ha: 20.0 };
    assert!(f64::abs(LocalEqCoord::angle_between(&a, &b) - 1.0) < 1e-10);

    let c = LocalEqCoord { dec: 0.0, ha: 0.0 };
    let d = LocalEqCoord { dec: 0.0, ha: 90.0 };
    assert!(f64::abs(LocalEqCoord::angle_between(&c, &d) - 90.0) < 1e-10);

    let pole = LocalEqCoord { dec: 90.0, ha: 0.0 };
    let pole2 = LocalEqCoord { dec: 90.0, ha: 123.0 };
    assert!(LocalEqCoord::angle_between(&pole, &pole2) < 1e-6);
}

/// Horizontal coordinates: altitude above horizon and azimuth. Degrees.
/// Azimuth is zero toward the elevated pole and grows to the west
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizCoord {
    pub alt: f64,
    pub azi: f64,
}

impl HorizCoord {
    pub fn to_sphere_pt(&self) -> Point3D {
        LocalEqCoord { dec: self.alt, ha: self.azi }.to_sphere_pt()
    }

    pub fn from_sphere_pt(pt: &Point3D) -> Self {
        let crd = LocalEqCoord::from_sphere_pt(pt);
        Self { alt: crd.dec, azi: crd.ha }
    }
}

impl Debug for HorizCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizCoord")
            .field("alt", &value_to_sexagesimal(self.alt, true, 1))
            .field("azi", &value_to_sexagesimal(self.azi, true, 1))
            .finish()
    }
}

/// Observer site. Degrees
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Debug for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("lat", &value_to_sexagesimal(self.lat, true, 0))
            .field("lon", &value_to_sexagesimal(self.lon, true, 0))
            .finish()
    }
}

/// Direction cosines on the unit sphere
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }
}

#[test]
fn test_coords_debug_is_sexagesimal() {
    let crd = EqCoord { dec: -10.5, ra: 90.0 };
    assert_eq!(format!("{:?}", crd), r#"EqCoord { ra: "06:00:00.0", dec: "-10:30:00" }"#);
}
