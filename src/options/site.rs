use serde::{Serialize, Deserialize};

use crate::{error::*, sky_math::Location};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SiteOptions {
    pub latitude:  f64, // in degrees
    pub longitude: f64, // in degrees
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            latitude:  42.0,
            longitude: 0.0,
        }
    }
}

impl SiteOptions {
    pub fn location(&self) -> Location {
        Location {
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    pub fn check(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}
