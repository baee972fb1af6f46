//! Fixed-coordinate locator adapter

use async_trait::async_trait;

use crate::application::ports::{LocateError, Locator};
use crate::domain::config::AppConfig;
use crate::domain::location::GeoPoint;

/// Locator that reports coordinates pinned in the config file.
///
/// The client device has no GPS access from a terminal session, so the
/// installer records the device's usual location instead. No configured
/// location means the device does not support location at all; configured
/// but invalid coordinates mean a fix could not be obtained.
pub struct FixedLocator {
    coordinates: Option<(f64, f64)>,
}

impl FixedLocator {
    /// Create a locator from explicit coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Some((latitude, longitude)),
        }
    }

    /// Create a locator from whatever the config provides
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            coordinates: config.location_coordinates(),
        }
    }

    /// Create a locator with no position source
    pub fn unsupported() -> Self {
        Self { coordinates: None }
    }
}

#[async_trait]
impl Locator for FixedLocator {
    async fn locate(&self) -> Result<GeoPoint, LocateError> {
        let (latitude, longitude) = self.coordinates.ok_or(LocateError::Unsupported)?;
        GeoPoint::new(latitude, longitude).map_err(|_| LocateError::Unavailable)
    }
}
