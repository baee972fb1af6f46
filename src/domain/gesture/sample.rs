//! Pointer sample value object

/// A single pointer observation: position plus a session-relative timestamp.
///
/// Two samples bound a gesture cycle (press and release). Movement samples
/// in between are only consulted to cancel a pending hold; they are never
/// retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the input session started (monotonic).
    pub t_ms: u64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, t_ms: u64) -> Self {
        Self { x, y, t_ms }
    }

    /// Horizontal displacement from `origin` to this sample.
    pub fn dx(&self, origin: &PointerSample) -> f64 {
        self.x - origin.x
    }

    /// Vertical displacement from `origin` to this sample.
    pub fn dy(&self, origin: &PointerSample) -> f64 {
        self.y - origin.y
    }

    /// Milliseconds elapsed since `origin` was captured.
    pub fn elapsed_since(&self, origin: &PointerSample) -> u64 {
        self.t_ms.saturating_sub(origin.t_ms)
    }
}
