//! Pointer tracking: screen position to canonical angle.

use std::f32::consts::TAU;

use thiserror::Error;

use crate::angle_table::{AngleTable, ANGLE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport has no area ({width}×{height})")]
    Empty { width: f32, height: f32 },
}

/// Last observed pointer position and the angle it resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub raw_x: f32,
    pub raw_y: f32,
    /// Angle from the viewport center to the pointer, in `[0, 2π)`.
    pub resolved_angle: f32,
    /// Canonical angle closest to `resolved_angle`.
    pub nearest_index: usize,
    /// `false` until the first pointer event arrives.
    pub seen: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            raw_x: 0.0,
            raw_y: 0.0,
            resolved_angle: 0.0,
            nearest_index: 0,
            seen: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    state: PointerState,
    viewport: (f32, f32),
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Records a pointer position in viewport pixels and re-resolves the angle.
    ///
    /// Screen y grows downward, so a pointer straight above the center resolves to π/2.
    pub fn update_pointer(
        &mut self,
        x: f32,
        y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<(), ViewportError> {
        check_viewport(viewport_width, viewport_height)?;

        let angle = resolve_angle(x, y, viewport_width, viewport_height);
        self.viewport = (viewport_width, viewport_height);
        self.state = PointerState {
            raw_x: x,
            raw_y: y,
            resolved_angle: angle,
            nearest_index: nearest_angle_index(angle),
            seen: true,
        };
        tracing::trace!(angle, index = self.state.nearest_index, "pointer resolved");
        Ok(())
    }

    /// Updates the viewport without a pointer event. The angle is re-resolved against
    /// the new center if a pointer has been seen.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ViewportError> {
        check_viewport(width, height)?;
        self.viewport = (width, height);
        if self.state.seen {
            let (x, y) = (self.state.raw_x, self.state.raw_y);
            self.update_pointer(x, y, width, height)?;
        }
        Ok(())
    }

    /// Pointer position normalized to `[0, 1]²` with y pointing up, as the background
    /// shader expects. `(0, 0)` until both a viewport and a pointer are known.
    pub fn pointer_uv(&self) -> [f32; 2] {
        let (width, height) = self.viewport;
        if !self.state.seen || width <= 0.0 || height <= 0.0 {
            return [0.0, 0.0];
        }
        [self.state.raw_x / width, (height - self.state.raw_y) / height]
    }
}

fn check_viewport(width: f32, height: f32) -> Result<(), ViewportError> {
    if width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::Empty { width, height })
    }
}

/// Angle of the pointer around the viewport center, normalized into `[0, 2π)`.
///
/// Angle 0 points right and angles grow counter-clockwise on screen. A pointer exactly
/// on the center resolves to 0.
pub fn resolve_angle(x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> f32 {
    let dx = x - viewport_width / 2.0;
    let dy = viewport_height / 2.0 - y;
    normalize_angle(dy.atan2(dx))
}

pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Index of the canonical angle closest to `angle`.
///
/// A synthetic full-turn entry at 2π is scanned after the sixteen table angles so that
/// angles just below 2π land on index 0. Ties go to the first entry scanned.
pub fn nearest_angle_index(angle: f32) -> usize {
    let angle = normalize_angle(angle);
    let candidates = AngleTable::iter()
        .map(|entry| entry.angle)
        .chain(std::iter::once(TAU));

    let mut best_index = 0;
    let mut best_diff = f32::INFINITY;
    for (index, candidate) in candidates.enumerate() {
        let diff = (candidate - angle).abs();
        if diff < best_diff {
            best_diff = diff;
            best_index = index % ANGLE_COUNT;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn quadrants_match_screen_directions() {
        // right, up, left, down of the center at (400, 300)
        assert!(approx(resolve_angle(500.0, 300.0, W, H), 0.0));
        assert!(approx(resolve_angle(400.0, 200.0, W, H), FRAC_PI_2));
        assert!(approx(resolve_angle(300.0, 300.0, W, H), PI));
        assert!(approx(resolve_angle(400.0, 400.0, W, H), 3.0 * FRAC_PI_2));

        assert!(approx(resolve_angle(500.0, 200.0, W, H), FRAC_PI_4));
        assert!(approx(resolve_angle(300.0, 200.0, W, H), 3.0 * FRAC_PI_4));
        assert!(approx(resolve_angle(300.0, 400.0, W, H), 5.0 * FRAC_PI_4));
        assert!(approx(resolve_angle(500.0, 400.0, W, H), 7.0 * FRAC_PI_4));
    }

    #[test]
    fn center_resolves_to_zero() {
        assert_eq!(resolve_angle(400.0, 300.0, W, H), 0.0);
    }

    #[test]
    fn resolved_angle_is_always_in_range() {
        for step in 0..360 {
            let theta = (step as f32).to_radians();
            let x = 400.0 + 100.0 * theta.cos();
            let y = 300.0 - 100.0 * theta.sin();
            let angle = resolve_angle(x, y, W, H);
            assert!((0.0..TAU).contains(&angle), "{angle} out of range");
        }
    }

    #[test]
    fn nearest_index_of_table_angles() {
        for (index, entry) in AngleTable::iter().enumerate() {
            assert_eq!(nearest_angle_index(entry.angle), index);
        }
        assert_eq!(nearest_angle_index(FRAC_PI_4), 2);
    }

    #[test]
    fn nearest_index_wraps_near_full_turn() {
        assert_eq!(nearest_angle_index(TAU - 0.01), 0);
        assert_eq!(nearest_angle_index(0.01), 0);
        assert_eq!(nearest_angle_index(TAU), 0);
    }

    #[test]
    fn nearest_index_is_periodic() {
        for step in 0..720 {
            let theta = step as f32 * 0.01;
            assert_eq!(
                nearest_angle_index(theta + TAU),
                nearest_angle_index(theta),
                "theta = {theta}"
            );
        }
    }

    #[test]
    fn update_pointer_sets_state() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.state().nearest_index, 0);
        assert_eq!(tracker.pointer_uv(), [0.0, 0.0]);

        tracker.update_pointer(500.0, 200.0, W, H).unwrap();
        let state = tracker.state();
        assert!(state.seen);
        assert_eq!(state.nearest_index, 2);
        assert_eq!(tracker.pointer_uv(), [500.0 / W, 400.0 / H]);
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let mut tracker = PointerTracker::new();
        tracker.update_pointer(10.0, 10.0, W, H).unwrap();
        let before = *tracker.state();
        assert!(matches!(
            tracker.update_pointer(1.0, 1.0, 0.0, H),
            Err(ViewportError::Empty { .. })
        ));
        assert_eq!(*tracker.state(), before);
    }

    #[test]
    fn resize_moves_the_center() {
        let mut tracker = PointerTracker::new();
        tracker.update_pointer(500.0, 300.0, W, H).unwrap();
        assert_eq!(tracker.state().nearest_index, 0);
        // Same pixel is now left of the new center.
        tracker.resize(1200.0, 600.0).unwrap();
        assert_eq!(tracker.state().nearest_index, 8);
    }
}
