//! Messaging domain module

mod log;
mod message;

pub use log::MessageLog;
pub use message::{Message, MessageKind, Sender};
