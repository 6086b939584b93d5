use unit_circle::{CoordinateFace, Frame, LabelSet};

/// Condensed view of one computed frame, cheap to keep for a whole scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub index: u64,
    pub depth: f32,
    pub blend: f32,
    pub nearest_index: usize,
    pub face: CoordinateFace,
    pub visible_coordinates: usize,
    pub visible_tangents: usize,
    /// Visibility of each orbit-name label, innermost first.
    pub visible_names: Vec<bool>,
    /// Scale of the degree label under the highlight.
    pub highlight_scale: f32,
}

impl FrameRecord {
    pub fn from_frame(frame: &Frame) -> Self {
        let count_visible = |set: LabelSet| {
            frame
                .layout
                .elements
                .iter()
                .filter(|element| element.visible)
                .filter(|element| matches!(element.key, unit_circle::ElementKey::Label { set: s, .. } if s == set))
                .count()
        };
        let highlight_scale = frame
            .layout
            .get(frame.nearest_index, LabelSet::Degrees)
            .map(|element| element.scale)
            .unwrap_or(f32::NAN);

        Self {
            index: frame.index,
            depth: frame.depth,
            blend: frame.blend,
            nearest_index: frame.nearest_index,
            face: frame.layout.face,
            visible_coordinates: count_visible(LabelSet::Coordinates),
            visible_tangents: count_visible(LabelSet::Tangents),
            visible_names: frame.layout.names.iter().map(|name| name.visible).collect(),
            highlight_scale,
        }
    }
}

/// What to assert about a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameCheck {
    NearestIndex(usize),
    DepthBetween(f32, f32),
    BlendBetween(f32, f32),
    Face(CoordinateFace),
    HighlightScale(f32),
}

/// A single per-frame expectation to validate after a scenario has run.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameExpectation {
    pub frame: u64,
    pub check: FrameCheck,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl FrameExpectation {
    pub fn new(frame: u64, check: FrameCheck, label: &'static str) -> Self {
        Self {
            frame,
            check,
            label,
        }
    }
}

const SCALE_TOLERANCE: f32 = 1e-4;

/// Validates expectations against recorded frames.
///
/// Returns a list of human-readable failure descriptions. An empty list means all
/// expectations passed.
pub fn check_frames(records: &[FrameRecord], expectations: &[FrameExpectation]) -> Vec<String> {
    let mut failures = Vec::new();

    for expectation in expectations {
        let Some(record) = records.iter().find(|record| record.index == expectation.frame) else {
            failures.push(format!(
                "[{}] frame {} was never computed ({} frames recorded)",
                expectation.label,
                expectation.frame,
                records.len(),
            ));
            continue;
        };

        let failure = match &expectation.check {
            FrameCheck::NearestIndex(expected) if record.nearest_index != *expected => Some(format!(
                "nearest index {} but expected {}",
                record.nearest_index, expected
            )),
            FrameCheck::DepthBetween(low, high) if !(*low..=*high).contains(&record.depth) => {
                Some(format!("depth {} outside [{}, {}]", record.depth, low, high))
            }
            FrameCheck::BlendBetween(low, high) if !(*low..=*high).contains(&record.blend) => {
                Some(format!("blend {} outside [{}, {}]", record.blend, low, high))
            }
            FrameCheck::Face(expected) if record.face != *expected => {
                Some(format!("face {:?} but expected {:?}", record.face, expected))
            }
            FrameCheck::HighlightScale(expected)
                if (record.highlight_scale - expected).abs() > SCALE_TOLERANCE =>
            {
                Some(format!(
                    "highlight scale {} but expected {}",
                    record.highlight_scale, expected
                ))
            }
            _ => None,
        };

        if let Some(message) = failure {
            failures.push(format!("[{}] frame {}: {}", expectation.label, expectation.frame, message));
        }
    }

    failures
}
