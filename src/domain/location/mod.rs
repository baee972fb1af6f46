//! Location domain module

mod geo;

pub use geo::{GeoPoint, InvalidCoordinateError};
