//! Vision Voice - gesture-driven accessibility companion
//!
//! This crate provides the core functionality for an assistive companion
//! operated entirely through pointer gestures: swipe to hear a scene
//! description or the current time, swipe to exchange voice messages with
//! an admin, hold to raise an SOS alert.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Gesture classification, screen flow, messages, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (FFmpeg, Gemini, speech, stores)
//! - **CLI**: Command-line interface, terminal session, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
