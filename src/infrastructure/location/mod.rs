//! Location adapters

mod fixed;

pub use fixed::FixedLocator;
