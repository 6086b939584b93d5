pub mod expectations;
pub mod scenario;

pub use expectations::{check_frames, FrameCheck, FrameExpectation, FrameRecord};
pub use scenario::{
    blend_flip, pointer_at, pointer_sweep, ring_round_trip, Scenario, FRAME_MS, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};
