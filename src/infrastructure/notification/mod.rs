//! Desktop notification adapters

mod desktop;

pub use desktop::DesktopFeedbackPanel;
