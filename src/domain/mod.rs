//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clock;
pub mod config;
pub mod error;
pub mod gesture;
pub mod location;
pub mod media;
pub mod messaging;
pub mod prompt;
pub mod session;

// Re-export common types
pub use error::*;
pub use config::{AppConfig, Interval};
pub use gesture::{GestureClassifier, GestureContext, GestureOutcome, PointerSample};
pub use location::GeoPoint;
pub use media::{ImageFrame, VoiceClip};
pub use messaging::{Message, MessageLog, Sender};
pub use session::{Role, Screen, ScreenFlow};
