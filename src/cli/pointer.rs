//! Terminal mouse events as pointer samples

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::domain::gesture::PointerSample;

/// Assumed pixel width of one terminal cell.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Assumed pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// A mouse event translated for the gesture surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up(PointerSample),
}

/// Converts terminal mouse coordinates into gesture-space samples.
///
/// Terminal rows are roughly twice as tall as cells are wide, so cell
/// coordinates are scaled to approximate pixels. The gesture thresholds
/// then mean the same physical distance on both axes.
pub struct PointerSurface {
    started_at: Instant,
}

impl PointerSurface {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Milliseconds since the surface was created (monotonic).
    pub fn now_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Time left until a surface-relative deadline.
    pub fn until(&self, deadline_ms: u64) -> Duration {
        Duration::from_millis(deadline_ms.saturating_sub(self.now_ms()))
    }

    /// Build a sample from cell coordinates at an explicit timestamp.
    pub fn sample_at(&self, column: u16, row: u16, t_ms: u64) -> PointerSample {
        PointerSample::new(
            column as f64 * CELL_WIDTH_PX,
            row as f64 * CELL_HEIGHT_PX,
            t_ms,
        )
    }

    /// Translate one crossterm mouse event; non-left-button activity is
    /// not part of the gesture language.
    pub fn map_event(&self, event: &MouseEvent) -> Option<PointerEvent> {
        let sample = self.sample_at(event.column, event.row, self.now_ms());
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(sample)),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move(sample)),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(sample)),
            _ => None,
        }
    }
}

impl Default for PointerSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn cells_scale_to_pixels() {
        let surface = PointerSurface::new();
        let sample = surface.sample_at(10, 5, 0);
        assert_eq!(sample.x, 80.0);
        assert_eq!(sample.y, 80.0);
    }

    #[test]
    fn seven_columns_cross_the_swipe_threshold() {
        // 7 cells * 8px = 56px, past the 50px minimum swipe distance.
        let surface = PointerSurface::new();
        let start = surface.sample_at(10, 5, 0);
        let end = surface.sample_at(17, 5, 200);
        assert!(end.dx(&start) >= 50.0);
    }

    #[test]
    fn left_button_events_map_to_pointer_events() {
        let surface = PointerSurface::new();

        let down = surface.map_event(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
        assert!(matches!(down, Some(PointerEvent::Down(_))));

        let drag = surface.map_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 4, 4));
        assert!(matches!(drag, Some(PointerEvent::Move(_))));

        let up = surface.map_event(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 4));
        assert!(matches!(up, Some(PointerEvent::Up(_))));
    }

    #[test]
    fn other_buttons_and_scroll_are_ignored() {
        let surface = PointerSurface::new();

        assert!(surface
            .map_event(&mouse(MouseEventKind::Down(MouseButton::Right), 3, 4))
            .is_none());
        assert!(surface
            .map_event(&mouse(MouseEventKind::ScrollUp, 3, 4))
            .is_none());
        assert!(surface
            .map_event(&mouse(MouseEventKind::Moved, 3, 4))
            .is_none());
    }

    #[test]
    fn until_saturates_for_past_deadlines() {
        let surface = PointerSurface::new();
        assert_eq!(surface.until(0), Duration::from_millis(0));
    }
}
