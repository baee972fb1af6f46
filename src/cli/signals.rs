//! OS signal handling for interactive sessions

use tokio::signal::unix::{signal, Signal, SignalKind};

/// Listens for SIGINT and SIGTERM.
///
/// Interactive sessions run the terminal in raw mode, where Ctrl+C arrives
/// as a key event instead of SIGINT. This handler covers the remaining
/// cases (kill, session manager shutdown) so the event loop can restore
/// the terminal before exiting.
pub struct TerminateSignal {
    sigint: Signal,
    sigterm: Signal,
}

impl TerminateSignal {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    /// Wait until either signal arrives.
    pub async fn recv(&mut self) {
        tokio::select! {
            _ = self.sigint.recv() => {}
            _ = self.sigterm.recv() => {}
        }
    }
}
