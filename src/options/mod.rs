pub mod site;
pub use site::*;

pub mod polar_axis;
pub use polar_axis::*;

use serde::{Serialize, Deserialize};

use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Options {
    pub site:       SiteOptions,
    pub polar_axis: PolarAxisOptions,
}

impl Options {
    pub fn check(&self) -> Result<()> {
        self.site.check()?;
        self.polar_axis.check(&self.site.location())?;
        Ok(())
    }
}

#[test]
fn test_options_defaults_from_json() {
    let opts: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(opts.site.latitude, 42.0);
    assert_eq!(opts.site.longitude, 0.0);
    assert!(opts.polar_axis.is_aligned());
    assert!(opts.check().is_ok());

    let opts: Options = serde_json::from_str(
        r#"{ "site": { "latitude": -33.5 }, "polar_axis": { "azi_error": 0.75 } }"#
    ).unwrap();
    assert_eq!(opts.site.latitude, -33.5);
    assert_eq!(opts.site.longitude, 0.0);
    assert_eq!(opts.polar_axis.alt_error, 0.0);
    assert_eq!(opts.polar_axis.azi_error, 0.75);
}

#[test]
fn test_options_json_round_trip() {
    let mut opts = Options::default();
    opts.site.longitude = 30.25;
    opts.polar_axis.alt_error = -1.1;
    let text = serde_json::to_string_pretty(&opts).unwrap();
    let loaded: Options = serde_json::from_str(&text).unwrap();
    assert_eq!(loaded.site.longitude, 30.25);
    assert_eq!(loaded.polar_axis.alt_error, -1.1);
}

#[test]
fn test_options_check() {
    use crate::error::Error;

    let mut opts = Options::default();
    opts.site.latitude = 91.0;
    assert_eq!(opts.check(), Err(Error::LatitudeOutOfRange(91.0)));

    let mut opts = Options::default();
    opts.site.longitude = -200.0;
    assert_eq!(opts.check(), Err(Error::LongitudeOutOfRange(-200.0)));

    let mut opts = Options::default();
    opts.site.latitude = 89.5;
    opts.polar_axis.alt_error = 1.0;
    assert_eq!(opts.check(), Err(Error::AxisAltitudeOutOfRange(90.5)));
}

#[test]
fn test_polar_axis_direction() {
    let opts = PolarAxisOptions { alt_error: 0.5, azi_error: -1.25 };
    let loc = SiteOptions::default().location();
    let axis = opts.axis(&loc);
    assert_eq!(axis.alt, 42.5);
    assert_eq!(axis.azi, -1.25);
    assert!(!opts.is_aligned());
}
