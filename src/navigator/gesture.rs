use crate::types::NavDirection;
use eframe::egui::Pos2;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Tap/swipe disambiguation thresholds, in points and milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
	/// Horizontal travel below this is finger jitter, not movement
	pub jitter: f32,
	/// Travel a moved gesture needs before it counts as a swipe
	pub swipe_distance: f32,
	pub tap_time_ms: u64,
	pub tap_distance: f32,
	/// Fraction of finger travel applied to the slide while dragging
	pub drag_damping: f32,
}

impl Default for GestureThresholds {
	fn default() -> Self {
		Self {
			jitter: 15.0,
			swipe_distance: 60.0,
			tap_time_ms: 300,
			tap_distance: 30.0,
			drag_damping: 0.3,
		}
	}
}

impl GestureThresholds {
	pub fn tap_time(&self) -> Duration {
		Duration::from_millis(self.tap_time_ms)
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
	Swipe(NavDirection),
	Tap,
	/// Moved a little but neither a clean tap nor a swipe
	Ignored,
}

/// One touch interaction from press to release
#[derive(Debug, Clone, Copy)]
pub struct GestureSession {
	start: Pos2,
	started_at: Instant,
	last: Pos2,
	moved: bool,
}

impl GestureSession {
	pub fn begin(pos: Pos2, at: Instant) -> Self {
		Self {
			start: pos,
			started_at: at,
			last: pos,
			moved: false,
		}
	}

	/// Positive when the finger travelled left
	pub fn delta_x(&self) -> f32 {
		self.start.x - self.last.x
	}

	#[cfg(test)]
	pub fn has_moved(&self) -> bool {
		self.moved
	}

	/// Record a new position. Returns the damped drag offset once the
	/// gesture has left the jitter band.
	pub fn track(&mut self, pos: Pos2, thresholds: &GestureThresholds) -> Option<f32> {
		self.last = pos;
		let delta = self.delta_x();
		if delta.abs() > thresholds.jitter {
			self.moved = true;
		}
		if self.moved {
			Some(-delta * thresholds.drag_damping)
		} else {
			None
		}
	}

	pub fn classify(&self, ended_at: Instant, thresholds: &GestureThresholds) -> GestureOutcome {
		let delta = self.delta_x();
		let elapsed = ended_at.saturating_duration_since(self.started_at);

		if self.moved && delta.abs() > thresholds.swipe_distance {
			if delta > 0.0 {
				GestureOutcome::Swipe(NavDirection::Next)
			} else {
				GestureOutcome::Swipe(NavDirection::Prev)
			}
		} else if !self.moved
			|| (elapsed < thresholds.tap_time() && delta.abs() < thresholds.tap_distance)
		{
			GestureOutcome::Tap
		} else {
			GestureOutcome::Ignored
		}
	}
}
