use std::f32::consts::TAU;

use unit_circle::{AnimationDriver, Command, CoordinateFace, InputEvent};

use crate::expectations::{FrameCheck, FrameExpectation, FrameRecord};

pub const VIEWPORT_WIDTH: f32 = 800.0;
pub const VIEWPORT_HEIGHT: f32 = 600.0;
/// Frame interval of a 60 Hz display, in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// A scripted input sequence plus what the resulting frames must look like.
///
/// Shared between the integration tests and the benchmark so both exercise the same
/// inputs.
pub struct Scenario {
    pub name: &'static str,
    pub frame_count: u64,
    /// Events queued right before the given frame is computed.
    pub events: Vec<(u64, InputEvent)>,
    pub expectations: Vec<FrameExpectation>,
}

impl Scenario {
    fn new(name: &'static str, frame_count: u64) -> Self {
        Self {
            name,
            frame_count,
            events: vec![(
                0,
                InputEvent::Resized {
                    width: VIEWPORT_WIDTH,
                    height: VIEWPORT_HEIGHT,
                },
            )],
            expectations: Vec::new(),
        }
    }

    fn at(mut self, frame: u64, event: impl Into<InputEvent>) -> Self {
        self.events.push((frame, event.into()));
        self
    }

    fn expect(mut self, frame: u64, check: FrameCheck, label: &'static str) -> Self {
        self.expectations.push(FrameExpectation::new(frame, check, label));
        self
    }

    /// Feeds the script through `driver` and records every frame.
    pub fn run(&self, driver: &mut AnimationDriver) -> Vec<FrameRecord> {
        let mut records = Vec::with_capacity(self.frame_count as usize);
        for frame in 0..self.frame_count {
            for (_, event) in self.events.iter().filter(|(at, _)| *at == frame) {
                driver.push_event(*event);
            }
            let computed = driver.frame(frame as f64 * FRAME_MS);
            records.push(FrameRecord::from_frame(computed));
        }
        records
    }
}

/// Pointer position at `angle` on a circle of radius 200 around the viewport center.
pub fn pointer_at(angle: f32) -> InputEvent {
    InputEvent::PointerMoved {
        x: VIEWPORT_WIDTH / 2.0 + 200.0 * angle.cos(),
        y: VIEWPORT_HEIGHT / 2.0 - 200.0 * angle.sin(),
    }
}

/// Pointer walks once around the circle, one canonical angle every ten frames.
pub fn pointer_sweep() -> Scenario {
    let mut scenario = Scenario::new("pointer_sweep", 170);
    for step in 0..17u64 {
        let angle = step as f32 * TAU / 16.0;
        scenario = scenario.at(step * 10, pointer_at(angle));
    }
    scenario
        .expect(0, FrameCheck::NearestIndex(0), "start_right")
        .expect(0, FrameCheck::HighlightScale(2.0), "start_focus_scale")
        .expect(40, FrameCheck::NearestIndex(4), "quarter_turn_up")
        .expect(80, FrameCheck::NearestIndex(8), "half_turn_left")
        .expect(120, FrameCheck::NearestIndex(12), "three_quarter_down")
        .expect(160, FrameCheck::NearestIndex(0), "full_turn_wraps")
}

/// Rings telescope out to the outermost orbit and back in.
pub fn ring_round_trip() -> Scenario {
    Scenario::new("ring_round_trip", 440)
        .at(1, Command::RingOut)
        .at(110, Command::RingOut)
        .at(210, Command::RingOut)
        .at(220, Command::RingIn)
        .at(330, Command::RingIn)
        .expect(50, FrameCheck::DepthBetween(0.45, 0.55), "halfway_out")
        .expect(105, FrameCheck::DepthBetween(1.0, 1.01), "rested_on_ring_one")
        .expect(215, FrameCheck::DepthBetween(2.0, 2.0), "clamped_at_outermost")
        .expect(325, FrameCheck::DepthBetween(0.99, 1.01), "back_on_ring_one")
        .expect(439, FrameCheck::DepthBetween(0.0, 0.01), "home")
}

/// Coordinate pairs flip to tangents and back.
pub fn blend_flip() -> Scenario {
    Scenario::new("blend_flip", 140)
        .at(1, Command::ToggleBlend)
        .at(10, Command::ToggleBlend)
        .at(70, Command::ToggleBlend)
        .expect(0, FrameCheck::Face(CoordinateFace::Coordinates), "starts_on_coordinates")
        .expect(20, FrameCheck::Face(CoordinateFace::Coordinates), "still_flipping")
        .expect(60, FrameCheck::Face(CoordinateFace::Tangents), "flipped")
        .expect(60, FrameCheck::BlendBetween(1.0, 1.0), "blend_rested")
        .expect(139, FrameCheck::BlendBetween(0.0, 0.02), "flipped_back")
        .expect(139, FrameCheck::Face(CoordinateFace::Coordinates), "coordinates_again")
}
