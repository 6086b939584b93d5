//! Orbit geometry and per-ring content selection.

use smallvec::SmallVec;

use crate::angle_table::LabelSet;
use crate::config::Variant;

/// Number of orbits. Degrees, radians, then coordinates or tangents.
pub const RING_COUNT: usize = 3;

/// Distance of ring `ring` from the center while the telescope sits at `depth`.
///
/// Each ring is `orbit_scale` times farther out than the previous one. Subtracting the
/// continuous depth moves every ring together, so a depth of 1.0 puts ring 1 where
/// ring 0 rests.
pub fn radius(ring: usize, depth: f32, min_radius: f32, orbit_scale: f32) -> f32 {
    min_radius * orbit_scale.powf(ring as f32 - depth)
}

/// Divisor applied to the falloff scale so apparent label size stays steady while a ring
/// travels.
pub fn ring_scale_divisor(ring: usize, depth: f32, orbit_scale: f32) -> f32 {
    orbit_scale.powf(depth - ring as f32)
}

/// Which label set the outer ring shows on this frame.
///
/// Content switches discretely at `blend == 0.5` while the flip rotation is continuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateFace {
    #[default]
    Coordinates,
    Tangents,
}

impl CoordinateFace {
    pub fn from_blend(blend: f32) -> Self {
        if blend >= 0.5 {
            CoordinateFace::Tangents
        } else {
            CoordinateFace::Coordinates
        }
    }

    pub fn label_set(&self) -> LabelSet {
        match self {
            CoordinateFace::Coordinates => LabelSet::Coordinates,
            CoordinateFace::Tangents => LabelSet::Tangents,
        }
    }

    /// Whether a label of `set` is visible under this face. Inner rings always are.
    pub fn shows(&self, set: LabelSet) -> bool {
        match set {
            LabelSet::Coordinates | LabelSet::Tangents => set == self.label_set(),
            LabelSet::Degrees | LabelSet::Radians => true,
        }
    }
}

/// Label sets laid out for each canonical angle, innermost ring first.
pub fn label_sets(variant: Variant) -> SmallVec<[LabelSet; 4]> {
    match variant {
        Variant::Classic => SmallVec::from_slice(&LabelSet::ALL[..3]),
        Variant::Extended => SmallVec::from_slice(&LabelSet::ALL),
    }
}
