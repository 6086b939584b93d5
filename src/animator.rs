//! Ring depth and coordinate/tangent blend integrators.
//!
//! Both parameters advance by a fixed step per frame while their direction is non-zero.
//! A direction resets itself once the parameter's fractional part drops below the stop
//! epsilon, so every transition comes to rest just past a whole number.

/// Per-frame depth step.
pub const DEPTH_STEP: f32 = 0.01;
/// Depth direction is cleared once `depth % 1` falls below this.
pub const DEPTH_EPSILON: f32 = 0.01;
/// Per-frame blend step.
pub const BLEND_STEP: f32 = 0.02;
/// Blend direction is cleared once `blend % 1` falls below this.
pub const BLEND_EPSILON: f32 = 0.02;
/// Index of the outermost ring; depth never exceeds it.
pub const MAX_DEPTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingAnimationState {
    pub depth: f32,
    pub depth_direction: f32,
    pub blend: f32,
    pub blend_direction: f32,
}

/// Which transitions came to rest during a [`OrbitAnimator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub depth_settled: bool,
    pub blend_settled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct OrbitAnimator {
    state: RingAnimationState,
}

impl OrbitAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an explicit state, mostly useful for tests and replays.
    pub fn with_state(state: RingAnimationState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RingAnimationState {
        &self.state
    }

    pub fn depth(&self) -> f32 {
        self.state.depth
    }

    pub fn blend(&self) -> f32 {
        self.state.blend
    }

    pub fn is_idle(&self) -> bool {
        self.state.depth_direction == 0.0 && self.state.blend_direction == 0.0
    }

    /// Telescopes the rings outward. No-op once the outermost ring is reached.
    pub fn request_ring_out(&mut self) {
        if self.state.depth < MAX_DEPTH {
            self.state.depth_direction = DEPTH_STEP;
        }
    }

    /// Telescopes the rings inward. No-op at the innermost ring.
    pub fn request_ring_in(&mut self) {
        if self.state.depth > DEPTH_EPSILON {
            self.state.depth_direction = -DEPTH_STEP;
        }
    }

    /// Flips between coordinate pairs and tangents. Ignored while a flip is in flight.
    pub fn request_toggle_blend(&mut self) {
        if self.state.blend < BLEND_EPSILON {
            self.state.blend_direction = BLEND_STEP;
        } else if self.state.blend >= 1.0 - BLEND_EPSILON {
            self.state.blend_direction = -BLEND_STEP;
        }
    }

    /// Advances both parameters by one frame. Must be called exactly once per frame.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let state = &mut self.state;

        if state.depth_direction != 0.0 {
            let previous = state.depth;
            state.depth = (state.depth + state.depth_direction).clamp(0.0, MAX_DEPTH);
            // An inward step that skips past a whole number lands on it instead.
            let crossed = state.depth.ceil();
            if state.depth_direction < 0.0 && crossed < previous {
                state.depth = crossed;
            }
            if state.depth % 1.0 < DEPTH_EPSILON {
                state.depth_direction = 0.0;
                report.depth_settled = true;
                tracing::debug!(depth = state.depth, "ring transition settled");
            }
        }

        if state.blend_direction != 0.0 {
            state.blend = (state.blend + state.blend_direction).clamp(0.0, 1.0);
            if state.blend % 1.0 < BLEND_EPSILON {
                state.blend_direction = 0.0;
                report.blend_settled = true;
                tracing::debug!(blend = state.blend, "blend transition settled");
            }
        }

        report
    }
}
