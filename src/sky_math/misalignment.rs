//! Correction of local equatorial coordinates for a mount whose polar
//! axis does not point exactly at the celestial pole.
//!
//! The mount reads declination and hour angle relative to its own axis.
//! `misaligned_polar_axis_transformation` gives the rotation from the
//! mount basis into the basis of the true pole; `transform` applies it.

use super::{coords::*, matrix::*};

/// Rotation from the basis of a mount with polar axis pointing at `mpa`
/// (horizontal coordinates) into the true pole basis at `loc`.
///
/// The mount basis is taken into horizontal one (`horizon_swap` with
/// axis altitude), turned by the axis azimuth around the zenith and then
/// taken into the true local equatorial basis (`horizon_swap` with site
/// latitude). For `mpa = (loc.lat, 0)` the result is identity.
pub fn misaligned_polar_axis_transformation(mpa: HorizCoord, loc: &Location) -> Matrix33 {
    let mount_to_horiz = Matrix33::horizon_swap(mpa.alt);
    let azimuth_rot = Matrix33::rotation_z(mpa.azi);
    let horiz_to_true = Matrix33::horizon_swap(loc.lat);
    horiz_to_true
        .product(&azimuth_rot)
        .product(&mount_to_horiz)
}

/// Mount coordinates `a` into true local equatorial coordinates
pub fn transform(t: &Matrix33, a: LocalEqCoord) -> LocalEqCoord {
    let pt = multiply(t, &a.to_sphere_pt());
    LocalEqCoord::from_sphere_pt(&pt)
}

/// True local equatorial coordinates `a` into mount coordinates.
/// Inverse of `transform` (`t` is orthogonal so row multiplication
/// applies the inverse rotation)
pub fn transform_inverse(t: &Matrix33, a: LocalEqCoord) -> LocalEqCoord {
    let pt = multiply_row(&a.to_sphere_pt(), t);
    LocalEqCoord::from_sphere_pt(&pt)
}

/// How far (degrees) the true position is from what the mount reads
pub fn pointing_error(t: &Matrix33, a: LocalEqCoord) -> f64 {
    LocalEqCoord::angle_between(&a, &transform(t, a))
}

#[cfg(test)]
use super::convert::*;

#[cfg(test)]
const LOC: Location = Location { lat: 42.0, lon: 0.0 };

#[cfg(test)]
fn assert_same(expected: &LocalEqCoord, actual: &LocalEqCoord, eps: f64) {
    assert!(same_position(expected, actual, eps), "{:?} != {:?}", expected, actual);
}

#[test]
fn test_aligned_axis_gives_identity() {
    for lat in [-45.0, 0.0, 42.0, 55.75] {
        let loc = Location { lat, lon: 10.0 };
        let t = misaligned_polar_axis_transformation(HorizCoord { alt: lat, azi: 0.0 }, &loc);
        assert!(t.is_identity(1e-14), "{:?}", t);
    }
}

#[test]
fn test_transform_by_identity() {
    let t = Matrix33::identity();
    for a in [
        LocalEqCoord { dec: 0.0, ha: 0.0 },
        LocalEqCoord { dec: 35.0, ha: -20.0 },
        LocalEqCoord { dec: -75.5, ha: 170.0 },
    ] {
        assert_same(&a, &transform(&t, a), 1e-10);
        assert!(pointing_error(&t, a) < 1e-10);
    }
}

#[test]
fn test_misaligned_matrix_is_rotation() {
    let t = misaligned_polar_axis_transformation(HorizCoord { alt: 40.9, azi: 1.4 }, &LOC);
    assert!(f64::abs(t.determinant() - 1.0) < 1e-12);
    assert!(t.product(&t.transposed()).is_identity(1e-12));
}

#[test]
fn test_mount_pole_points_to_axis() {
    let mpa = HorizCoord { alt: 43.1, azi: -2.5 };
    let t = misaligned_polar_axis_transformation(mpa, &LOC);
    let mount_pole = transform(&t, LocalEqCoord { dec: 90.0, ha: 0.0 });
    let horiz = local_equatorial_to_azimuthal(mount_pole, &LOC);
    assert!(f64::abs(horiz.alt - mpa.alt) < 1e-9);
    assert!(f64::abs(remainder(horiz.azi - mpa.azi, 360.0)) < 1e-9);
}

#[test]
fn test_altitude_error_shifts_meridian_declination() {
    // axis 1 degree too high: south meridian objects are 1 degree lower
    let t = misaligned_polar_axis_transformation(HorizCoord { alt: 43.0, azi: 0.0 }, &LOC);
    let mount = LocalEqCoord { dec: 20.0, ha: 0.0 };
    let real = transform(&t, mount);
    assert!(f64::abs(real.dec - 19.0) < 1e-9);
    assert!(f64::abs(real.ha) < 1e-9);
    assert!(f64::abs(pointing_error(&t, mount) - 1.0) < 1e-9);
}

#[test]
fn test_transform_inverse() {
    let t = misaligned_polar_axis_transformation(HorizCoord { alt: 41.3, azi: 0.7 }, &LOC);
    for a in [
        LocalEqCoord { dec: 0.0, ha: 0.0 },
        LocalEqCoord { dec: 35.0, ha: 60.0 },
        LocalEqCoord { dec: -40.0, ha: -135.0 },
        LocalEqCoord { dec: 80.0, ha: 10.0 },
    ] {
        let real = transform(&t, a);
        let mount = transform_inverse(&t, real);
        assert_same(&a, &mount, 1e-9);
    }
}

#[test]
fn test_transform_keeps_nan_away_near_pole() {
    let t = misaligned_polar_axis_transformation(HorizCoord { alt: 42.0, azi: 0.0 }, &LOC);
    let res = transform(&t, LocalEqCoord { dec: 90.0, ha: 45.0 });
    assert!(!res.dec.is_nan() && !res.ha.is_nan());
    assert!(f64::abs(res.dec - 90.0) < 1e-5);
}
