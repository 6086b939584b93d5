//! The sixteen canonical unit-circle angles and their textual representations.

use std::f32::consts::PI;

use crate::color::Color;

/// Number of canonical angles around the circle.
pub const ANGLE_COUNT: usize = 16;

/// Which textual representation of an angle a label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSet {
    Degrees,
    Radians,
    Coordinates,
    Tangents,
}

impl LabelSet {
    pub const ALL: [LabelSet; 4] = [
        LabelSet::Degrees,
        LabelSet::Radians,
        LabelSet::Coordinates,
        LabelSet::Tangents,
    ];

    /// Orbit the set is displayed on. Coordinates and tangents share the outer ring.
    pub fn ring(&self) -> usize {
        match self {
            LabelSet::Degrees => 0,
            LabelSet::Radians => 1,
            LabelSet::Coordinates | LabelSet::Tangents => 2,
        }
    }

    /// Human-readable name used for the orbit-name labels.
    pub fn orbit_name(&self) -> &'static str {
        match self {
            LabelSet::Degrees => "Degrees",
            LabelSet::Radians => "Radians",
            LabelSet::Coordinates => "Coordinates",
            LabelSet::Tangents => "Tangents",
        }
    }
}

/// One canonical angle with every label the visualization can show for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEntry {
    /// Angle in radians, in `[0, 2π)`.
    pub angle: f32,
    pub degree_label: &'static str,
    pub radian_label: &'static str,
    pub sine_label: &'static str,
    pub cosine_label: &'static str,
    pub tangent_label: &'static str,
    /// Hue in `[0, 1)`, evenly spaced by table index.
    pub hue: f32,
}

impl AngleEntry {
    /// The `(cos, sin)` pair as displayed on the coordinate ring.
    pub fn coordinate_label(&self) -> String {
        format!("({}, {})", self.cosine_label, self.sine_label)
    }

    pub fn label(&self, set: LabelSet) -> String {
        match set {
            LabelSet::Degrees => self.degree_label.to_string(),
            LabelSet::Radians => self.radian_label.to_string(),
            LabelSet::Coordinates => self.coordinate_label(),
            LabelSet::Tangents => self.tangent_label.to_string(),
        }
    }

    /// Fully saturated, mid-lightness color for this angle's hue.
    pub fn base_color(&self) -> Color {
        Color::from_hsl(self.hue, 1.0, 0.5)
    }
}

macro_rules! entry {
    ($index:expr, $angle:expr, [$degrees:expr, $radians:expr, $sin:expr, $cos:expr, $tan:expr]) => {
        AngleEntry {
            angle: $angle,
            degree_label: $degrees,
            radian_label: $radians,
            sine_label: $sin,
            cosine_label: $cos,
            tangent_label: $tan,
            hue: $index as f32 / ANGLE_COUNT as f32,
        }
    };
}

//                     degrees     radians   sin       cos       tan
static ANGLES: [AngleEntry; ANGLE_COUNT] = [
    entry!(0, 0.0, ["0°/360°", "0π/2π", "0", "1", "0"]),
    entry!(1, PI / 6.0, ["30°", "π/6", "1/2", "√3/2", "√3/3"]),
    entry!(2, PI / 4.0, ["45°", "π/4", "√2/2", "√2/2", "1"]),
    entry!(3, PI / 3.0, ["60°", "π/3", "√3/2", "1/2", "√3"]),
    entry!(4, PI / 2.0, ["90°", "π/2", "1", "0", "undefined"]),
    entry!(5, PI * 2.0 / 3.0, ["120°", "2π/3", "√3/2", "-1/2", "-√3"]),
    entry!(6, PI * 3.0 / 4.0, ["135°", "3π/4", "√2/2", "-√2/2", "-1"]),
    entry!(7, PI * 5.0 / 6.0, ["150°", "5π/6", "1/2", "-√3/2", "-√3/3"]),
    entry!(8, PI, ["180°", "π", "0", "-1", "0"]),
    entry!(9, PI * 7.0 / 6.0, ["210°", "7π/6", "-1/2", "-√3/2", "√3/3"]),
    entry!(10, PI * 5.0 / 4.0, ["225°", "5π/4", "-√2/2", "-√2/2", "1"]),
    entry!(11, PI * 4.0 / 3.0, ["240°", "4π/3", "-√3/2", "-1/2", "√3"]),
    entry!(12, PI * 3.0 / 2.0, ["270°", "3π/2", "-1", "0", "undefined"]),
    entry!(13, PI * 5.0 / 3.0, ["300°", "5π/3", "-√3/2", "1/2", "-√3"]),
    entry!(14, PI * 7.0 / 4.0, ["315°", "7π/4", "-√2/2", "√2/2", "-1"]),
    entry!(15, PI * 11.0 / 6.0, ["330°", "11π/6", "-1/2", "√3/2", "-√3/3"]),
];

/// Static lookup over the canonical angle table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngleTable;

impl AngleTable {
    pub fn count() -> usize {
        ANGLE_COUNT
    }

    /// Entry at `index`, wrapping modulo 16 so the synthetic 2π slot resolves to 0.
    pub fn entry_at(index: usize) -> &'static AngleEntry {
        &ANGLES[index % ANGLE_COUNT]
    }

    pub fn get(index: usize) -> Option<&'static AngleEntry> {
        ANGLES.get(index)
    }

    pub fn iter() -> impl ExactSizeIterator<Item = &'static AngleEntry> {
        ANGLES.iter()
    }
}
