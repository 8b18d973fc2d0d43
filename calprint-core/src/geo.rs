//! Geographic position attached to an event (`GEO` property).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude pair. No range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// `<lat>;<lon>`, both with exactly six decimal places.
impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6};{:.6}", self.latitude, self.longitude)
    }
}
