//! Per-frame placement of every label around the circle.
//!
//! The engine is pure: it reads a [`LayoutInput`] snapshot and writes a [`Layout`]. All
//! mutable animation state lives in the driver.

use std::f32::consts::TAU;

use euclid::default::Vector3D;
use smallvec::SmallVec;

use crate::angle_table::{AngleTable, LabelSet, ANGLE_COUNT};
use crate::animator::DEPTH_EPSILON;
use crate::color::Color;
use crate::config::{ConfigError, LayoutConfig};

mod element;
mod falloff;
mod rings;

pub use element::{ElementInstance, ElementKey, ElementTransform};
pub use falloff::{angular_distance, emissive_brightness, scale_factor};
pub use rings::{label_sets, radius, ring_scale_divisor, CoordinateFace, RING_COUNT};

/// Snapshot of the animation parameters a layout is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutInput {
    /// Pointer angle in `[0, 2π)`.
    pub resolved_angle: f32,
    pub depth: f32,
    pub blend: f32,
    /// Seconds since the animation started.
    pub time: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Angle-major: all label sets of angle 0, then angle 1, and so on.
    pub elements: Vec<ElementTransform>,
    /// One per ring, innermost first. Empty when orbit names are disabled.
    pub names: SmallVec<[ElementTransform; RING_COUNT]>,
    pub face: CoordinateFace,
}

impl Layout {
    pub fn get(&self, angle_index: usize, set: LabelSet) -> Option<&ElementTransform> {
        let key = ElementKey::Label { angle_index, set };
        self.elements.iter().find(|element| element.key == key)
    }

    pub fn visible(&self) -> impl Iterator<Item = &ElementTransform> {
        self.elements
            .iter()
            .chain(self.names.iter())
            .filter(|element| element.visible)
    }
}

#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    sets: SmallVec<[LabelSet; 4]>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        if let Err(error) = config.validate() {
            tracing::warn!(%error, "rejecting layout config");
            return Err(error);
        }
        let sets = label_sets(config.variant);
        Ok(Self { config, sets })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Label sets laid out per angle, in output order.
    pub fn label_sets(&self) -> &[LabelSet] {
        &self.sets
    }

    /// Number of label elements per frame: 16 × 3 or 16 × 4.
    pub fn element_count(&self) -> usize {
        ANGLE_COUNT * self.sets.len()
    }

    pub fn radius(&self, ring: usize, depth: f32) -> f32 {
        radius(ring, depth, self.config.min_radius, self.config.orbit_scale)
    }

    /// Falloff scale of a label at `angle` before the ring divisor is applied.
    pub fn scale_factor(&self, resolved_angle: f32, angle: f32) -> f32 {
        scale_factor(
            angular_distance(resolved_angle, angle),
            self.config.scale_min,
            self.config.scale_max,
        )
    }

    pub fn compute(&self, input: &LayoutInput) -> Layout {
        let mut layout = Layout::default();
        self.compute_into(input, &mut layout);
        layout
    }

    /// Recomputes `layout` in place, reusing its allocations.
    pub fn compute_into(&self, input: &LayoutInput, layout: &mut Layout) {
        let face = CoordinateFace::from_blend(input.blend);
        let y_rotation = input.time.sin() / 4.0 + input.blend * TAU;

        let radii: SmallVec<[f32; RING_COUNT]> =
            (0..RING_COUNT).map(|ring| self.radius(ring, input.depth)).collect();
        let divisors: SmallVec<[f32; RING_COUNT]> = (0..RING_COUNT)
            .map(|ring| ring_scale_divisor(ring, input.depth, self.config.orbit_scale))
            .collect();

        layout.face = face;
        layout.elements.clear();
        layout.elements.reserve(self.element_count());

        for (angle_index, entry) in AngleTable::iter().enumerate() {
            let distance = angular_distance(input.resolved_angle, entry.angle);
            let scale = scale_factor(distance, self.config.scale_min, self.config.scale_max);
            let emissive = entry.base_color().scale(emissive_brightness(distance));
            let direction = Vector3D::new(entry.angle.cos(), entry.angle.sin(), 0.0);

            for &set in &self.sets {
                let ring = set.ring();
                layout.elements.push(ElementTransform {
                    key: ElementKey::Label { angle_index, set },
                    position: direction * radii[ring],
                    scale: scale / divisors[ring],
                    y_rotation,
                    emissive,
                    visible: face.shows(set),
                });
            }
        }

        layout.names.clear();
        if self.config.shows_orbit_names() {
            for ring in 0..RING_COUNT {
                layout.names.push(self.orbit_name(ring, face, input.depth, y_rotation));
            }
        }
    }

    fn orbit_name(
        &self,
        ring: usize,
        face: CoordinateFace,
        depth: f32,
        y_rotation: f32,
    ) -> ElementTransform {
        let set = match ring {
            0 => LabelSet::Degrees,
            1 => LabelSet::Radians,
            _ => face.label_set(),
        };
        let offset = depth - ring as f32;
        ElementTransform {
            key: ElementKey::OrbitName { ring, set },
            position: Vector3D::new(0.0, 0.0, (offset * 5.0).powi(5)),
            scale: 1.0,
            y_rotation,
            emissive: Color::WHITE,
            // Shown while the telescope rests on or travels toward this ring. Depth comes to
            // rest up to one epsilon past a whole number, so the next ring out stays hidden.
            visible: offset.abs() < 1.0 - DEPTH_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use std::f32::consts::{FRAC_PI_4, PI};

    fn engine() -> LayoutEngine {
        LayoutEngine::new(LayoutConfig::default()).unwrap()
    }

    fn input(resolved_angle: f32) -> LayoutInput {
        LayoutInput {
            resolved_angle,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let config = LayoutConfig::default().with_min_radius(-1.0);
        assert!(matches!(
            LayoutEngine::new(config),
            Err(ConfigError::InvalidMinRadius(_))
        ));
    }

    #[test]
    fn element_counts_per_variant() {
        let layout = engine().compute(&input(0.0));
        assert_eq!(layout.elements.len(), 64);
        assert_eq!(layout.names.len(), 3);

        let classic =
            LayoutEngine::new(LayoutConfig::default().with_variant(Variant::Classic)).unwrap();
        let layout = classic.compute(&input(0.0));
        assert_eq!(layout.elements.len(), 48);
        assert!(layout.names.is_empty());
    }

    #[test]
    fn pointer_at_quarter_pi_emphasizes_index_two() {
        let layout = engine().compute(&input(FRAC_PI_4));
        let focused = layout.get(2, LabelSet::Degrees).unwrap();
        assert_eq!(focused.scale, 2.0);
        assert_eq!(focused.emissive, AngleTable::entry_at(2).base_color());

        let opposite = layout.get(10, LabelSet::Degrees).unwrap();
        assert!((opposite.scale - 0.5).abs() < 1e-6);
        assert!(opposite.emissive.rgb_array().iter().all(|c| c.abs() < 1e-6));
    }

    #[test]
    fn positions_sit_on_their_rings() {
        let engine = engine();
        let layout = engine.compute(&input(0.0));
        for element in &layout.elements {
            let ElementKey::Label { angle_index, set } = element.key else {
                unreachable!()
            };
            let expected = engine.radius(set.ring(), 0.0);
            let actual = element.position.length();
            assert!((actual - expected).abs() / expected < 1e-5);
            let angle = AngleTable::entry_at(angle_index).angle;
            assert!((element.position.x - expected * angle.cos()).abs() < 1e-2);
            assert_eq!(element.position.z, 0.0);
        }
        let ninety = layout.get(4, LabelSet::Radians).unwrap();
        assert!((ninety.position.y - 880.0).abs() < 1e-2);
    }

    #[test]
    fn ring_divisor_applies_per_ring() {
        let layout = engine().compute(&input(0.0));
        let inner = layout.get(0, LabelSet::Degrees).unwrap().scale;
        let middle = layout.get(0, LabelSet::Radians).unwrap().scale;
        assert!((inner - 2.0).abs() < 1e-6);
        assert!((middle - 2.0 * 22.0).abs() < 1e-3);
    }

    #[test]
    fn rotation_combines_wobble_and_flip() {
        let layout = engine().compute(&LayoutInput {
            time: PI / 2.0,
            blend: 0.25,
            ..Default::default()
        });
        let expected = 0.25 + 0.25 * TAU;
        assert!((layout.elements[0].y_rotation - expected).abs() < 1e-5);
        assert!(layout
            .elements
            .iter()
            .all(|element| element.y_rotation == layout.elements[0].y_rotation));
    }

    #[test]
    fn coordinate_and_tangent_sets_are_complementary() {
        let engine = engine();
        for blend in [0.0, 0.49, 0.5, 0.51, 1.0] {
            let layout = engine.compute(&LayoutInput {
                blend,
                ..Default::default()
            });
            for index in 0..ANGLE_COUNT {
                let coordinate = layout.get(index, LabelSet::Coordinates).unwrap();
                let tangent = layout.get(index, LabelSet::Tangents).unwrap();
                assert_ne!(coordinate.visible, tangent.visible);
                assert_eq!(tangent.visible, blend >= 0.5);
                assert_eq!(coordinate.position, tangent.position);
                assert_eq!(coordinate.scale, tangent.scale);
            }
        }
    }

    #[test]
    fn orbit_names_follow_depth() {
        let engine = engine();
        let layout = engine.compute(&LayoutInput {
            depth: 1.0,
            ..Default::default()
        });
        let z: Vec<f32> = layout.names.iter().map(|name| name.position.z).collect();
        assert_eq!(z, vec![3125.0, 0.0, -3125.0]);
        let visible: Vec<bool> = layout.names.iter().map(|name| name.visible).collect();
        assert_eq!(visible, vec![false, true, false]);

        let layout = engine.compute(&LayoutInput {
            depth: 0.5,
            blend: 1.0,
            ..Default::default()
        });
        let visible: Vec<bool> = layout.names.iter().map(|name| name.visible).collect();
        assert_eq!(visible, vec![true, true, false]);
        assert_eq!(layout.names[2].key.text(), "Tangents");
    }

    #[test]
    fn resting_residue_shows_only_the_resting_ring() {
        let engine = engine();
        for (depth, expected) in [
            (0.0, [true, false, false]),
            (7.4505806e-8, [true, false, false]),
            (1.0, [false, true, false]),
            (1.0099994, [false, true, false]),
            (2.0, [false, false, true]),
        ] {
            let layout = engine.compute(&LayoutInput {
                depth,
                ..Default::default()
            });
            let visible: Vec<bool> = layout.names.iter().map(|name| name.visible).collect();
            assert_eq!(visible, expected, "depth {depth}");
        }
    }

    #[test]
    fn label_sets_follow_variant() {
        assert_eq!(
            engine().label_sets(),
            &[
                LabelSet::Degrees,
                LabelSet::Radians,
                LabelSet::Coordinates,
                LabelSet::Tangents
            ]
        );
        let classic =
            LayoutEngine::new(LayoutConfig::default().with_variant(Variant::Classic)).unwrap();
        assert_eq!(
            classic.label_sets(),
            &[LabelSet::Degrees, LabelSet::Radians, LabelSet::Coordinates]
        );
    }

    #[test]
    fn names_can_be_disabled() {
        let engine = LayoutEngine::new(LayoutConfig::default().with_orbit_names(false)).unwrap();
        assert!(engine.compute(&input(0.0)).names.is_empty());
    }

    #[test]
    fn compute_into_reuses_buffers() {
        let engine = engine();
        let mut layout = engine.compute(&input(0.0));
        engine.compute_into(&input(PI), &mut layout);
        assert_eq!(layout.elements.len(), engine.element_count());
        assert_eq!(layout.get(8, LabelSet::Degrees).unwrap().scale, 2.0);
    }
}
