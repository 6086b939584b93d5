//! Emphasis falloff around the pointer angle.
//!
//! Everything here is a function of the wrapped angular distance between the pointer and
//! a canonical angle, remapped so that 1.0 is "under the pointer" and 0.0 is "opposite".

use std::f32::consts::{PI, TAU};

/// `1 - wrapped_distance / π`: 1.0 at the pointer's angle, 0.0 at the antipode, linear in
/// between.
pub fn angular_distance(resolved_angle: f32, angle: f32) -> f32 {
    let diff = (resolved_angle - angle).abs();
    1.0 - diff.min(TAU - diff) / PI
}

/// Quartic falloff between `scale_min` and `scale_max`. Concentrates size tightly around
/// the pointer.
pub fn scale_factor(distance: f32, scale_min: f32, scale_max: f32) -> f32 {
    distance.powi(4) * (scale_max - scale_min) + scale_min
}

/// Cubic falloff used to dim the emissive tint. Decays slightly slower than the scale.
pub fn emissive_brightness(distance: f32) -> f32 {
    distance.powi(3)
}
