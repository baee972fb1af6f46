//! Validated geographic coordinates

use thiserror::Error;

/// Error when coordinates fall outside the valid ranges
#[derive(Debug, Clone, Error)]
#[error("Invalid coordinates: latitude {latitude} must be within ±90 and longitude {longitude} within ±180")]
pub struct InvalidCoordinateError {
    pub latitude: f64,
    pub longitude: f64,
}

/// A latitude/longitude pair known to be in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinateError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(InvalidCoordinateError {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Shareable Google Maps link for this position.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}
