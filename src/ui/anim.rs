//! Marker slide animation between grid cells
//!
//! Purely cosmetic: the session state has already changed when a tween
//! starts, the tween only decides where the marker is drawn meanwhile.

use glam::Vec2;
use std::time::{Duration, Instant};

/// Interpolates the marker between two cell positions
#[derive(Debug, Clone, Copy)]
pub struct MarkerTween {
    from: Vec2,
    to: Vec2,
    started: Instant,
    duration: Duration,
}

impl MarkerTween {
    pub fn new(from: Vec2, to: Vec2, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: Instant::now(),
            duration,
        }
    }

    /// A tween that is already at rest on `at`
    pub fn settled(at: Vec2) -> Self {
        Self::new(at, at, Duration::ZERO)
    }

    /// Start a new slide from wherever the marker is drawn right now
    pub fn retarget(&mut self, to: Vec2, duration: Duration) {
        let current = self.position_at(self.started.elapsed());
        *self = Self::new(current, to, duration);
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    /// Marker position `elapsed` after the tween started
    pub fn position_at(&self, elapsed: Duration) -> Vec2 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, ease_in_out(t))
    }

    /// Marker position now
    pub fn position(&self) -> Vec2 {
        self.position_at(self.started.elapsed())
    }

    pub fn is_running(&self) -> bool {
        self.from != self.to && self.started.elapsed() < self.duration
    }
}

/// Smoothstep easing: slow start, slow finish
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
