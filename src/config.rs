use thiserror::Error;

use crate::driver::Command;

/// Radius of the innermost orbit, in world units.
pub const DEFAULT_MIN_RADIUS: f32 = 40.0;
/// Ratio between the radii of two neighbouring orbits.
pub const DEFAULT_ORBIT_SCALE: f32 = 22.0;
pub const DEFAULT_SCALE_MAX: f32 = 2.0;
pub const DEFAULT_SCALE_MIN: f32 = 0.5;

/// Errors returned when a [`LayoutConfig`] cannot drive a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum orbit radius must be positive and finite, got {0}")]
    InvalidMinRadius(f32),
    #[error("orbit scale must be finite and greater than 1, got {0}")]
    InvalidOrbitScale(f32),
    #[error("label scale range must satisfy 0 < min <= max, got min {min}, max {max}")]
    InvalidScaleRange { min: f32, max: f32 },
}

/// Which flavour of the visualization to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Degrees, radians and coordinate pairs. The blend command is ignored.
    Classic,
    /// Adds the tangent set, the coordinate/tangent flip and orbit-name labels.
    #[default]
    Extended,
}

/// Maps key text, as reported by the windowing layer, to commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub ring_out: String,
    pub ring_in: String,
    pub toggle_blend: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            ring_out: "s".to_string(),
            ring_in: "w".to_string(),
            toggle_blend: "d".to_string(),
        }
    }
}

impl KeyBindings {
    pub fn command_for(&self, key: &str) -> Option<Command> {
        if key == self.ring_out {
            Some(Command::RingOut)
        } else if key == self.ring_in {
            Some(Command::RingIn)
        } else if key == self.toggle_blend {
            Some(Command::ToggleBlend)
        } else {
            None
        }
    }
}

/// Geometry constants and feature switches for the layout engine.
///
/// # Examples
///
/// ```
/// use unit_circle::{LayoutConfig, Variant};
///
/// let config = LayoutConfig::default()
///     .with_variant(Variant::Classic)
///     .with_orbit_scale(10.0);
/// assert!(config.validate().is_ok());
///
/// let broken = LayoutConfig::default().with_orbit_scale(1.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub variant: Variant,
    pub min_radius: f32,
    pub orbit_scale: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    /// Whether orbit-name labels are shown. Only meaningful for [`Variant::Extended`].
    pub orbit_names: bool,
    pub key_bindings: KeyBindings,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            min_radius: DEFAULT_MIN_RADIUS,
            orbit_scale: DEFAULT_ORBIT_SCALE,
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
            orbit_names: true,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl LayoutConfig {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_min_radius(mut self, min_radius: f32) -> Self {
        self.min_radius = min_radius;
        self
    }

    pub fn with_orbit_scale(mut self, orbit_scale: f32) -> Self {
        self.orbit_scale = orbit_scale;
        self
    }

    pub fn with_scale_range(mut self, scale_min: f32, scale_max: f32) -> Self {
        self.scale_min = scale_min;
        self.scale_max = scale_max;
        self
    }

    pub fn with_orbit_names(mut self, orbit_names: bool) -> Self {
        self.orbit_names = orbit_names;
        self
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_radius.is_finite() || self.min_radius <= 0.0 {
            return Err(ConfigError::InvalidMinRadius(self.min_radius));
        }
        if !self.orbit_scale.is_finite() || self.orbit_scale <= 1.0 {
            return Err(ConfigError::InvalidOrbitScale(self.orbit_scale));
        }
        let range_ok = self.scale_min.is_finite()
            && self.scale_max.is_finite()
            && self.scale_min > 0.0
            && self.scale_min <= self.scale_max;
        if !range_ok {
            return Err(ConfigError::InvalidScaleRange {
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        Ok(())
    }

    pub fn has_tangents(&self) -> bool {
        self.variant == Variant::Extended
    }

    pub fn shows_orbit_names(&self) -> bool {
        self.has_tangents() && self.orbit_names
    }
}
