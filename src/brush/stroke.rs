//! Stroke accumulation state machine
//!
//! Collects pointer positions between press and release. The buffer is always
//! drained in one shot; a failed apply can never leave points behind to leak
//! into the next stroke.

use crate::core::types::Vec2;

/// Stroke lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Accumulating,
}

/// Buffers pointer-move points during a drag
#[derive(Debug, Default)]
pub struct StrokeAccumulator {
    state: StrokeState,
    points: Vec<Vec2>,
}

impl StrokeAccumulator {
    /// Create an idle accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// Whether a stroke is in progress
    pub fn is_active(&self) -> bool {
        self.state == StrokeState::Accumulating
    }

    /// Start a stroke at the pressed position. Any stale points from an
    /// earlier stroke are discarded first.
    pub fn begin(&mut self, point: Vec2) {
        self.points.clear();
        self.points.push(point);
        self.state = StrokeState::Accumulating;
    }

    /// Append a move point; ignored (returns false) when no stroke is active
    pub fn append(&mut self, point: Vec2) -> bool {
        if self.state != StrokeState::Accumulating {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Buffered points so far
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Drain buffered points while the stroke stays active. Used by
    /// immediate-mode dispatch, which paints on every appended point.
    pub fn drain(&mut self) -> Vec<Vec2> {
        std::mem::take(&mut self.points)
    }

    /// Drain all buffered points and return to idle. Called on pointer
    /// release (or an explicit flush); the buffer is cleared unconditionally.
    pub fn finish(&mut self) -> Vec<Vec2> {
        self.state = StrokeState::Idle;
        std::mem::take(&mut self.points)
    }

    /// Discard buffered points without dispatching (deactivation path)
    pub fn abort(&mut self) {
        self.points.clear();
        self.state = StrokeState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let stroke = StrokeAccumulator::new();
        assert_eq!(stroke.state(), StrokeState::Idle);
        assert!(stroke.points().is_empty());
    }

    #[test]
    fn test_begin_append_finish() {
        let mut stroke = StrokeAccumulator::new();
        stroke.begin(Vec2::new(1.0, 1.0));
        assert!(stroke.is_active());
        assert!(stroke.append(Vec2::new(2.0, 2.0)));
        assert!(stroke.append(Vec2::new(3.0, 3.0)));

        let points = stroke.finish();
        assert_eq!(points.len(), 3);
        assert_eq!(stroke.state(), StrokeState::Idle);
        assert!(stroke.points().is_empty());
    }

    #[test]
    fn test_append_ignored_when_idle() {
        let mut stroke = StrokeAccumulator::new();
        assert!(!stroke.append(Vec2::ZERO));
        assert!(stroke.points().is_empty());
    }

    #[test]
    fn test_drain_keeps_stroke_active() {
        let mut stroke = StrokeAccumulator::new();
        stroke.begin(Vec2::ZERO);
        assert_eq!(stroke.drain().len(), 1);
        assert!(stroke.is_active());
        // Points appended after a drain accumulate again
        assert!(stroke.append(Vec2::ONE));
        assert_eq!(stroke.finish().len(), 1);
    }

    #[test]
    fn test_finish_is_unconditional() {
        let mut stroke = StrokeAccumulator::new();
        stroke.begin(Vec2::ZERO);
        let _ = stroke.finish();
        // A second finish finds nothing left over
        assert!(stroke.finish().is_empty());
    }

    #[test]
    fn test_abort_discards() {
        let mut stroke = StrokeAccumulator::new();
        stroke.begin(Vec2::ZERO);
        stroke.append(Vec2::ONE);
        stroke.abort();
        assert_eq!(stroke.state(), StrokeState::Idle);
        assert!(stroke.finish().is_empty());
    }

    #[test]
    fn test_begin_clears_stale_points() {
        let mut stroke = StrokeAccumulator::new();
        stroke.begin(Vec2::ZERO);
        stroke.append(Vec2::ONE);
        stroke.begin(Vec2::new(5.0, 5.0));
        assert_eq!(stroke.points(), &[Vec2::new(5.0, 5.0)]);
    }
}
