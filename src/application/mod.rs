//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod describe;
pub mod dictate;
pub mod dispatch;
pub mod messaging;
pub mod ports;
pub mod sos;

// Re-export use cases
pub use describe::{
    DescribeCallbacks, DescribeOutput, DescribeSceneError, DescribeSceneUseCase,
};
pub use dictate::{DictationError, DictationEvent, DictationFlowUseCase};
pub use dispatch::{GestureAction, GestureRouter, RoutedGesture};
pub use messaging::{MessagingError, MessagingUseCase};
pub use sos::{SosActivation, SosError, SosUseCase};
