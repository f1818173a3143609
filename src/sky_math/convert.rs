use super::{consts::*, coords::*, sidereal::*};

// Spherical triangle pole - zenith - object. Returns (latitude-like,
// longitude-like) angle of the point in the other frame. The same formula
// works both ways: (ha, dec) -> (azi, alt) and (azi, alt) -> (ha, dec)
fn swap_pole_and_zenith(lon: f64, lat: f64, site_lat: f64) -> (f64, f64) {
    let (s1, c1) = f64::sin_cos(lon * DEGREE);
    let (s2, c2) = f64::sin_cos(lat * DEGREE);
    let (s3, c3) = f64::sin_cos(site_lat * DEGREE);
    let sin_res = c1 * c2 * c3 + s2 * s3;
    let y = s1 * c2;
    let x = s2 * c3 - c1 * c2 * s3;
    (safe_asin(sin_res) * RADIAN, f64::atan2(y, x) * RADIAN)
}

pub fn local_equatorial_to_azimuthal(a: LocalEqCoord, loc: &Location) -> HorizCoord {
    let (alt, azi) = swap_pole_and_zenith(a.ha, a.dec, loc.lat);
    HorizCoord { alt, azi }
}

pub fn azimuthal_to_local_equatorial(b: HorizCoord, loc: &Location) -> LocalEqCoord {
    let (dec, ha) = swap_pole_and_zenith(b.azi, b.alt, loc.lat);
    LocalEqCoord { dec, ha }
}

pub fn equatorial_to_local_equatorial(
    e:         EqCoord,
    timestamp: i64,
    loc:       &Location
) -> LocalEqCoord {
    let lst = local_sidereal_time(timestamp, loc);
    LocalEqCoord {
        dec: e.dec,
        ha:  remainder(lst - e.ra, 360.0),
    }
}

pub fn local_equatorial_to_equatorial(
    a:         LocalEqCoord,
    timestamp: i64,
    loc:       &Location
) -> EqCoord {
    let lst = local_sidereal_time(timestamp, loc);
    EqCoord {
        dec: a.dec,
        ra:  remainder(lst - a.ha, 360.0),
    }
}

pub fn equatorial_to_azimuthal(e: EqCoord, timestamp: i64, loc: &Location) -> HorizCoord {
    local_equatorial_to_azimuthal(equatorial_to_local_equatorial(e, timestamp, loc), loc)
}

pub fn azimuthal_to_equatorial(b: HorizCoord, timestamp: i64, loc: &Location) -> EqCoord {
    local_equatorial_to_equatorial(azimuthal_to_local_equatorial(b, loc), timestamp, loc)
}

/// Compares two positions the way a round trip must preserve them:
/// declination within `eps` and hour angle within `eps` modulo 360.
/// At a pole the hour angle is undefined and is not compared
pub fn same_position(expected: &LocalEqCoord, actual: &LocalEqCoord, eps: f64) -> bool {
    f64::abs(actual.dec - expected.dec) < eps && (
        f64::abs(expected.dec) > 90.0 - eps ||
        f64::abs(remainder(actual.ha - expected.ha, 360.0)) < eps
    )
}

#[cfg(test)]
const TEST_LOCATION: Location = Location { lat: 42.0, lon: 0.0 };

#[test]
fn test_local_eq_to_azimuthal_known_points() {
    // celestial pole is at altitude = latitude, azimuth 0
    let pole = local_equatorial_to_azimuthal(LocalEqCoord { dec: 90.0, ha: 0.0 }, &TEST_LOCATION);
    assert!(f64::abs(pole.alt - 42.0) < 1e-10);
    assert!(f64::abs(pole.azi) < 1e-10);

    // object on meridian at equator
    let crd = local_equatorial_to_azimuthal(LocalEqCoord { dec: 0.0, ha: 0.0 }, &TEST_LOCATION);
    assert!(f64::abs(crd.alt - 48.0) < 1e-10);
    assert!(f64::abs(f64::abs(crd.azi) - 180.0) < 1e-10);

    // setting point at equator
    let crd = local_equatorial_to_azimuthal(LocalEqCoord { dec: 0.0, ha: 90.0 }, &TEST_LOCATION);
    assert!(f64::abs(crd.alt) < 1e-10);
    assert!(f64::abs(crd.azi - 90.0) < 1e-10);

    // zenith
    let crd = local_equatorial_to_azimuthal(LocalEqCoord { dec: 42.0, ha: 0.0 }, &TEST_LOCATION);
    assert!(f64::abs(crd.alt - 90.0) < 1e-5);
}

#[test]
fn test_local_eq_to_azimuthal_round_trip() {
    let test = |dec: f64, ha: f64| {
        let crd = LocalEqCoord { dec, ha };
        let horiz = local_equatorial_to_azimuthal(crd, &TEST_LOCATION);
        assert!(!horiz.alt.is_nan() && !horiz.azi.is_nan());
        let back = azimuthal_to_local_equatorial(horiz, &TEST_LOCATION);
        assert!(same_position(&crd, &back, 1e-7), "{:?} -> {:?}", crd, back);
    };

    test(0.0, 0.0);
    test(35.0, 360.0);
    test(46.12345, 720.0);
    test(-20.0, -150.0);
    test(70.0, 100.0);
    test(-70.0, 33.0);
    test(10.0, 179.0);

    for dec in (-8..=8).map(|d| d as f64 * 10.0) {
        for ha in (0..24).map(|h| h as f64 * 15.0 + 1.0) {
            test(dec, ha);
        }
    }
}

#[test]
fn test_round_trip_at_poles() {
    // hour angle is degenerate, only declination must survive
    for dec in [90.0, -90.0] {
        let crd = LocalEqCoord { dec, ha: 0.0 };
        let horiz = local_equatorial_to_azimuthal(crd, &TEST_LOCATION);
        let back = azimuthal_to_local_equatorial(horiz, &TEST_LOCATION);
        assert!(!back.dec.is_nan() && !back.ha.is_nan());
        assert!(f64::abs(back.dec - dec) < 1e-5);
    }
}

#[test]
fn test_equatorial_round_trip() {
    let locations = [
        TEST_LOCATION,
        Location { lat: -33.9, lon: 18.4 },
        Location { lat: 64.1, lon: -21.9 },
    ];
    let coords = [
        EqCoord { dec: 0.0,   ra: 0.0 },
        EqCoord { dec: 35.0,  ra: 101.25 },
        EqCoord { dec: -60.5, ra: -170.0 },
        EqCoord { dec: 89.0,  ra: 37.9 },
    ];
    for timestamp in [0_i64, 1_518_134_400, 1_760_000_000] {
        for loc in &locations {
            for e in &coords {
                let a = equatorial_to_local_equatorial(*e, timestamp, loc);
                assert!((-180.0..=180.0).contains(&a.ha));
                assert_eq!(a.dec, e.dec);
                let back = local_equatorial_to_equatorial(a, timestamp, loc);
                assert_eq!(back.dec, e.dec);
                assert!(f64::abs(remainder(back.ra - e.ra, 360.0)) < 1e-7);
            }
        }
    }
}

#[test]
fn test_hour_angle_is_lst_minus_ra() {
    let timestamp = 1_700_000_000;
    let lst = local_sidereal_time(timestamp, &TEST_LOCATION);
    let on_meridian = EqCoord { dec: 10.0, ra: lst };
    let a = equatorial_to_local_equatorial(on_meridian, timestamp, &TEST_LOCATION);
    assert!(f64::abs(a.ha) < 1e-9);

    let an_hour_west = EqCoord { dec: 10.0, ra: lst - 15.0 };
    let a = equatorial_to_local_equatorial(an_hour_west, timestamp, &TEST_LOCATION);
    assert!(f64::abs(a.ha - 15.0) < 1e-9);
}

#[test]
fn test_equatorial_to_azimuthal_round_trip() {
    let timestamp = 1_650_000_000;
    let e = EqCoord { dec: 20.0, ra: 45.0 };
    let horiz = equatorial_to_azimuthal(e, timestamp, &TEST_LOCATION);
    let back = azimuthal_to_equatorial(horiz, timestamp, &TEST_LOCATION);
    assert!(f64::abs(back.dec - e.dec) < 1e-7);
    assert!(f64::abs(remainder(back.ra - e.ra, 360.0)) < 1e-7);
}
