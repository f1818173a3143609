use serde::{Serialize, Deserialize};

use crate::{error::*, sky_math::{HorizCoord, Location}};

/// Measured offset of mount polar axis from the true pole
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PolarAxisOptions {
    pub alt_error: f64, // in degrees
    pub azi_error: f64, // in degrees
}

impl PolarAxisOptions {
    pub fn is_aligned(&self) -> bool {
        self.alt_error == 0.0 && self.azi_error == 0.0
    }

    /// Direction of mount axis in horizontal coordinates
    pub fn axis(&self, loc: &Location) -> HorizCoord {
        HorizCoord {
            alt: loc.lat + self.alt_error,
            azi: self.azi_error,
        }
    }

    pub fn check(&self, loc: &Location) -> Result<()> {
        let alt = self.axis(loc).alt;
        if !(-90.0..=90.0).contains(&alt) {
            return Err(Error::AxisAltitudeOutOfRange(alt));
        }
        Ok(())
    }
}
