//! Per-frame orchestration.
//!
//! Input never touches animation state directly: pointer moves, resizes and commands are
//! queued with [`AnimationDriver::push_event`] and applied in arrival order at the start
//! of the next [`AnimationDriver::frame`]. The last pointer event before a frame is the one
//! that frame reflects, and every command's guard is evaluated against the state at that
//! moment.

use std::collections::VecDeque;
use std::f32::consts::FRAC_PI_2;

use euclid::default::Vector3D;

use crate::angle_table::{AngleTable, ANGLE_COUNT};
use crate::animator::{OrbitAnimator, TickReport};
use crate::background::{Backdrop, BackgroundUniforms};
use crate::color::Color;
use crate::config::{ConfigError, LayoutConfig};
use crate::layout::{Layout, LayoutEngine, LayoutInput};
use crate::pointer::PointerTracker;

/// Distance of a divider line's midpoint from the center.
pub const DIVIDER_OFFSET: f32 = 200.0;
pub const DIVIDER_LENGTH: f32 = 400.0;
pub const DIVIDER_RADIUS: f32 = 0.5;
/// Divider lines sit slightly behind the labels.
pub const DIVIDER_DEPTH: f32 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    RingOut,
    RingIn,
    ToggleBlend,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in viewport pixels, y down.
    PointerMoved { x: f32, y: f32 },
    Resized { width: f32, height: f32 },
    Command(Command),
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        InputEvent::Command(command)
    }
}

/// A thin line from the center out along one canonical angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerLine {
    pub angle_index: usize,
    /// Midpoint of the line.
    pub position: Vector3D<f32>,
    /// Rotation about z that lays a y-aligned cylinder along the angle.
    pub z_rotation: f32,
    pub length: f32,
    pub radius: f32,
    pub color: Color,
}

impl DividerLine {
    fn new(angle_index: usize) -> Self {
        let angle = AngleTable::entry_at(angle_index).angle;
        Self {
            angle_index,
            position: Vector3D::new(
                DIVIDER_OFFSET * angle.cos(),
                DIVIDER_OFFSET * angle.sin(),
                DIVIDER_DEPTH,
            ),
            z_rotation: angle + FRAC_PI_2,
            length: DIVIDER_LENGTH,
            radius: DIVIDER_RADIUS,
            color: Color::BLACK,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Number of frames computed before this one.
    pub index: u64,
    /// Seconds.
    pub time: f32,
    pub depth: f32,
    pub blend: f32,
    pub nearest_index: usize,
    pub tick: TickReport,
    pub layout: Layout,
    pub dividers: [DividerLine; ANGLE_COUNT],
    /// Color of the highlighted angle; tints the background, backdrop and divider.
    pub highlight: Color,
    pub backdrop: Backdrop,
    pub background: BackgroundUniforms,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            index: 0,
            time: 0.0,
            depth: 0.0,
            blend: 0.0,
            nearest_index: 0,
            tick: TickReport::default(),
            layout: Layout::default(),
            dividers: std::array::from_fn(DividerLine::new),
            highlight: AngleTable::entry_at(0).base_color(),
            backdrop: Backdrop::default(),
            background: BackgroundUniforms::default(),
        }
    }
}

/// The renderer side of the boundary.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> FrameSink for F {
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}

pub struct AnimationDriver {
    engine: LayoutEngine,
    pointer: PointerTracker,
    animator: OrbitAnimator,
    queue: VecDeque<InputEvent>,
    frame: Frame,
    frames_computed: u64,
}

impl AnimationDriver {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        let engine = LayoutEngine::new(config)?;
        Ok(Self {
            engine,
            pointer: PointerTracker::new(),
            animator: OrbitAnimator::new(),
            queue: VecDeque::new(),
            frame: Frame::default(),
            frames_computed: 0,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn animator(&self) -> &OrbitAnimator {
        &self.animator
    }

    /// The most recently computed frame.
    pub fn last_frame(&self) -> &Frame {
        &self.frame
    }

    pub fn push_event(&mut self, event: impl Into<InputEvent>) {
        self.queue.push_back(event.into());
    }

    /// Queues the command bound to `key`, if any. Returns whether the key was bound.
    pub fn push_key(&mut self, key: &str) -> bool {
        match self.config().key_bindings.command_for(key) {
            Some(command) => {
                self.push_event(command);
                true
            }
            None => false,
        }
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Computes the next frame at `time_ms` milliseconds since start.
    pub fn frame(&mut self, time_ms: f64) -> &Frame {
        self.drain_events();

        let tick = self.animator.tick();
        let time = (time_ms * 0.001) as f32;
        let pointer = *self.pointer.state();
        let input = LayoutInput {
            resolved_angle: pointer.resolved_angle,
            depth: self.animator.depth(),
            blend: self.animator.blend(),
            time,
        };

        let frame = &mut self.frame;
        self.engine.compute_into(&input, &mut frame.layout);

        let highlight = AngleTable::entry_at(pointer.nearest_index).base_color();
        for divider in frame.dividers.iter_mut() {
            divider.color = if divider.angle_index == pointer.nearest_index {
                highlight
            } else {
                Color::BLACK
            };
        }

        let (width, height) = self.pointer.viewport();
        frame.background =
            BackgroundUniforms::new([width, height], self.pointer.pointer_uv(), highlight, time);
        frame.backdrop.advance(highlight);

        frame.index = self.frames_computed;
        frame.time = time;
        frame.depth = input.depth;
        frame.blend = input.blend;
        frame.nearest_index = pointer.nearest_index;
        frame.tick = tick;
        frame.highlight = highlight;
        self.frames_computed += 1;

        tracing::trace!(
            index = frame.index,
            depth = frame.depth,
            blend = frame.blend,
            nearest = frame.nearest_index,
            "frame computed"
        );
        &self.frame
    }

    /// Computes the next frame and hands it to `sink`.
    pub fn run_frame(&mut self, time_ms: f64, sink: &mut impl FrameSink) {
        self.frame(time_ms);
        sink.present(&self.frame);
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            match event {
                InputEvent::PointerMoved { x, y } => {
                    let (width, height) = self.pointer.viewport();
                    if let Err(error) = self.pointer.update_pointer(x, y, width, height) {
                        tracing::warn!(%error, x, y, "dropping pointer event");
                    }
                }
                InputEvent::Resized { width, height } => {
                    if let Err(error) = self.pointer.resize(width, height) {
                        tracing::warn!(%error, "dropping resize event");
                    }
                }
                InputEvent::Command(command) => self.apply(command),
            }
        }
    }

    fn apply(&mut self, command: Command) {
        let before = *self.animator.state();
        match command {
            Command::RingOut => self.animator.request_ring_out(),
            Command::RingIn => self.animator.request_ring_in(),
            Command::ToggleBlend if self.engine.config().has_tangents() => {
                self.animator.request_toggle_blend()
            }
            Command::ToggleBlend => {}
        }
        if *self.animator.state() == before {
            tracing::debug!(?command, "command ignored");
        } else {
            tracing::debug!(?command, state = ?self.animator.state(), "command applied");
        }
    }
}
