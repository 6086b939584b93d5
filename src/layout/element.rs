use euclid::default::{Transform3D, Vector3D};
use euclid::Angle;

use crate::angle_table::{AngleTable, LabelSet};
use crate::color::Color;

/// Addresses one displayed element. Stable across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    /// A label for canonical angle `angle_index`.
    Label { angle_index: usize, set: LabelSet },
    /// The name of orbit `ring`, showing `set`'s orbit name.
    OrbitName { ring: usize, set: LabelSet },
}

impl ElementKey {
    /// Text the renderer should rasterize for this element.
    pub fn text(&self) -> String {
        match self {
            ElementKey::Label { angle_index, set } => AngleTable::entry_at(*angle_index).label(*set),
            ElementKey::OrbitName { set, .. } => set.orbit_name().to_string(),
        }
    }
}

/// Everything a renderer needs to place one label on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTransform {
    pub key: ElementKey,
    /// Point the label's bounding box is centered on.
    pub position: Vector3D<f32>,
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation about the y axis, in radians.
    pub y_rotation: f32,
    pub emissive: Color,
    pub visible: bool,
}

impl ElementTransform {
    /// Origin to give geometry whose local bounds start at zero and span `extent`, so that
    /// its scaled bounding box is centered on [`Self::position`].
    pub fn corner_origin(&self, extent: Vector3D<f32>) -> Vector3D<f32> {
        self.position - extent * (self.scale / 2.0)
    }

    /// Model matrix for geometry spanning `extent` from its local origin. The geometry is
    /// centered, scaled, turned about its own center, then moved to [`Self::position`].
    pub fn model_matrix(&self, extent: Vector3D<f32>) -> Transform3D<f32> {
        let half = extent / 2.0;
        Transform3D::translation(-half.x, -half.y, -half.z)
            .then(&Transform3D::scale(self.scale, self.scale, self.scale))
            .then(&Transform3D::rotation(
                0.0,
                1.0,
                0.0,
                Angle::radians(self.y_rotation),
            ))
            .then(&Transform3D::translation(
                self.position.x,
                self.position.y,
                self.position.z,
            ))
    }

    pub fn to_instance(&self, extent: Vector3D<f32>) -> ElementInstance {
        ElementInstance {
            model: self.model_matrix(extent).to_arrays(),
            emissive: self.emissive.to_array(),
            visible: self.visible as u32,
            _padding: [0; 3],
        }
    }
}

/// GPU instance record for one element.
///
/// `model` is column-major for shaders that multiply column vectors (`model * v`):
/// euclid stores row vectors with translation in the last row, which is exactly the last
/// column of the transposed matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ElementInstance {
    pub model: [[f32; 4]; 4],
    pub emissive: [f32; 4],
    pub visible: u32,
    pub _padding: [u32; 3],
}
