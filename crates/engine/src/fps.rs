//! Frame rate for the on-screen counter and the run summary.
use std::time::Duration;

use wallcaster_geometry::V2;
use wallcaster_world::Rgb;

use crate::*;

#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u64,
    total: Duration,
    slowest: Duration,
    last_dt: f64,
}

impl FpsCounter {
    pub fn new() -> FpsCounter {
        Default::default()
    }

    pub fn record(&mut self, dt: Duration) {
        self.frames += 1;
        self.total += dt;
        self.slowest = self.slowest.max(dt);
        self.last_dt = dt.as_secs_f64();
    }

    /// The instantaneous rate of the last frame, truncated.  0 before any frame, or for a frame which took no time.
    pub fn current(&self) -> u64 {
        if self.last_dt > 0.0 {
            (1.0 / self.last_dt) as u64
        } else {
            0
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per second over everything recorded so far.
    pub fn average(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }

    pub fn slowest(&self) -> Duration {
        self.slowest
    }

    /// The counter in green near the top left corner of the screen.
    pub fn overlay(&self, screen_width: f64, screen_height: f64, offset_factor: (f64, f64)) -> DrawCommand {
        DrawCommand::Text {
            position: V2::new(
                (screen_width * offset_factor.0).floor(),
                (screen_height * offset_factor.1).floor(),
            ),
            text: self.current().to_string(),
            color: Rgb::GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts() {
        let mut c = FpsCounter::new();
        assert_eq!(c.current(), 0);
        assert_eq!(c.average(), 0.0);

        c.record(Duration::from_millis(20));
        c.record(Duration::from_millis(30));
        assert_eq!(c.current(), 33);
        assert_eq!(c.frames(), 2);
        assert_relative_eq!(c.average(), 40.0, epsilon = 1e-9);
        assert_eq!(c.slowest(), Duration::from_millis(30));
    }

    #[test]
    fn test_overlay() {
        let mut c = FpsCounter::new();
        c.record(Duration::from_millis(16));
        assert_eq!(
            c.overlay(1280.0, 720.0, (0.015, 0.025)),
            DrawCommand::Text {
                position: V2::new(19.0, 18.0),
                text: "62".into(),
                color: Rgb::GREEN,
            }
        );
    }
}
