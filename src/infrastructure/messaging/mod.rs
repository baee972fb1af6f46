//! Message log persistence adapters

mod json_store;

pub use json_store::JsonMessageStore;
