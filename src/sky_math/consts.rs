use std::f64::consts::PI;

/// Degrees in one radian
pub const RADIAN: f64 = 180.0 / PI;

/// Radians in one degree
pub const DEGREE: f64 = PI / 180.0;

/// Mean sidereal day in seconds
pub const SIDEREAL_DAY: f64 = 86164.09;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Julian date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Linear GMST model: `GMST_OFFSET + GMST_RATE * jd` (degrees)
pub const GMST_OFFSET: f64 = 280.46061837;
pub const GMST_RATE: f64 = 360.985647366;

/// Ratio of sidereal to solar rate
pub const SIDEREAL_TO_SOLAR: f64 = 1.00273790935;
