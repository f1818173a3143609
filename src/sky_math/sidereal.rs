use chrono::NaiveDateTime;

use super::{consts::*, coords::*};

/// Julian date of Unix timestamp (seconds)
pub fn julian_date(timestamp: i64) -> f64 {
    timestamp as f64 * (1.0 / SECONDS_PER_DAY) + UNIX_EPOCH_JD
}

/// Unix timestamp of UTC date and time
pub fn timestamp_of(utc_time: &NaiveDateTime) -> i64 {
    utc_time.and_utc().timestamp()
}

/// Greenwich mean sidereal time in degrees, reduced into [-180, 180]
pub fn greenwich_mean_sidereal_time(timestamp: i64) -> f64 {
    let jd = julian_date(timestamp);
    let gmst = GMST_OFFSET + GMST_RATE * jd;
    remainder(gmst, 360.0)
}

/// Local sidereal time in degrees, reduced into [-180, 180]
pub fn local_sidereal_time(timestamp: i64, loc: &Location) -> f64 {
    let gmst = greenwich_mean_sidereal_time(timestamp);
    let lst = gmst + loc.lon * SIDEREAL_TO_SOLAR;
    remainder(lst, 360.0)
}

/// Angle (degrees) the sky turns around the pole in `seconds`
pub fn earth_rotation_angle(seconds: f64) -> f64 {
    360.0 * seconds / SIDEREAL_DAY
}

#[test]
fn test_julian_date() {
    assert_eq!(julian_date(0), UNIX_EPOCH_JD);
    assert!(f64::abs(julian_date(86400) - (UNIX_EPOCH_JD + 1.0)) < 1e-9);

    let j2000 = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        .and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(timestamp_of(&j2000), 946_728_000);
    assert!(f64::abs(julian_date(timestamp_of(&j2000)) - 2451545.0) < 1e-9);
}

#[test]
fn test_sidereal_time_is_signed() {
    for timestamp in (0..200).map(|i| 1_500_000_000 + i * 3_607) {
        let gmst = greenwich_mean_sidereal_time(timestamp);
        assert!((-180.0..=180.0).contains(&gmst));
        let lst = local_sidereal_time(timestamp, &Location { lat: 42.0, lon: -120.0 });
        assert!((-180.0..=180.0).contains(&lst));
    }
}

#[test]
fn test_sidereal_time_daily_drift() {
    let expected = remainder(GMST_RATE, 360.0); // ~0.9856 degrees per solar day
    for timestamp in [0_i64, 946_728_000, 1_518_134_400, 1_700_000_000] {
        let diff = remainder(
            greenwich_mean_sidereal_time(timestamp + 86400)
                - greenwich_mean_sidereal_time(timestamp),
            360.0
        );
        assert!(f64::abs(diff - expected) < 1e-5);
    }
}

#[test]
fn test_sidereal_day() {
    // after one sidereal day the sky is back in the same place
    let timestamp = 1_600_000_000;
    let diff = remainder(
        greenwich_mean_sidereal_time(timestamp + SIDEREAL_DAY.round() as i64)
            - greenwich_mean_sidereal_time(timestamp),
        360.0
    );
    assert!(f64::abs(diff) < 0.01);
    assert!(f64::abs(earth_rotation_angle(SIDEREAL_DAY) - 360.0) < 1e-12);
}

#[test]
fn test_local_sidereal_time() {
    let timestamp = 1_234_567_890;
    let gmst = greenwich_mean_sidereal_time(timestamp);

    let greenwich = Location { lat: 51.5, lon: 0.0 };
    assert_eq!(local_sidereal_time(timestamp, &greenwich), gmst);

    let east = Location { lat: 51.5, lon: 30.0 };
    let diff = remainder(local_sidereal_time(timestamp, &east) - gmst, 360.0);
    assert!(f64::abs(diff - 30.0 * SIDEREAL_TO_SOLAR) < 1e-9);
}
