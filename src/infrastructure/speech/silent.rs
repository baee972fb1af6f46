//! No-op announcer

use async_trait::async_trait;

use crate::application::ports::{AnnounceError, Announcer};

/// Announcer that discards everything.
///
/// The admin console shares use cases with the client session but reads
/// its output on screen, so it plugs this in where the client would speak.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAnnouncer;

impl SilentAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Announcer for SilentAnnouncer {
    async fn announce(&self, _text: &str) -> Result<(), AnnounceError> {
        Ok(())
    }
}
