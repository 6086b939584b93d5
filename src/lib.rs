//! Layout and animation engine for an orbiting unit-circle visualization.
//!
//! Sixteen canonical angles are labelled with their degree measure, radian measure,
//! `(cos, sin)` pair and tangent on concentric orbits. Every frame the
//! [`AnimationDriver`] turns the latest pointer position, ring commands and elapsed time
//! into per-label transforms, colors and visibility flags that any renderer can apply.
//!
//! ```
//! use unit_circle::{AnimationDriver, Command, InputEvent, LabelSet, LayoutConfig};
//!
//! let mut driver = AnimationDriver::new(LayoutConfig::default()).unwrap();
//! driver.push_event(InputEvent::Resized { width: 800.0, height: 600.0 });
//! // Pointer up and to the right of the center: 45°.
//! driver.push_event(InputEvent::PointerMoved { x: 500.0, y: 200.0 });
//! driver.push_event(Command::RingOut);
//!
//! let frame = driver.frame(16.0);
//! assert_eq!(frame.nearest_index, 2);
//! let label = frame.layout.get(2, LabelSet::Degrees).unwrap();
//! assert!(label.visible);
//! ```

mod angle_table;
mod animator;
mod background;
mod color;
mod config;
mod driver;
mod layout;
mod pointer;

pub use angle_table::{AngleEntry, AngleTable, LabelSet, ANGLE_COUNT};
pub use animator::{
    OrbitAnimator, RingAnimationState, TickReport, BLEND_EPSILON, BLEND_STEP, DEPTH_EPSILON,
    DEPTH_STEP, MAX_DEPTH,
};
pub use background::{Backdrop, BackgroundUniforms, BACKDROP_SPIN, BACKGROUND_WGSL};
pub use color::Color;
pub use config::{ConfigError, KeyBindings, LayoutConfig, Variant};
pub use driver::{AnimationDriver, Command, DividerLine, Frame, FrameSink, InputEvent};
pub use layout::{
    angular_distance, emissive_brightness, label_sets, radius, ring_scale_divisor,
    scale_factor, CoordinateFace, ElementInstance, ElementKey, ElementTransform, Layout,
    LayoutEngine, LayoutInput, RING_COUNT,
};
pub use pointer::{
    nearest_angle_index, normalize_angle, resolve_angle, PointerState, PointerTracker,
    ViewportError,
};

pub use euclid;
