//! Animated background: wave-field uniforms, the shader that consumes them, a CPU
//! evaluation of the same field, and the slowly spinning wireframe backdrop.

use crate::color::Color;

/// Per-frame backdrop spin, in radians, on both the x and y axes.
pub const BACKDROP_SPIN: f32 = 0.001;

/// Ripple spacing around the four viewport corners.
const CORNER_FREQUENCY: f32 = 50.0;
/// Ripple spacing around the pointer.
const POINTER_FREQUENCY: f32 = 80.0;
const WAVE_SPEED: f32 = 2.0;
const WAVE_STRENGTH: f32 = 0.3;

/// Uniforms consumed by [`BACKGROUND_WGSL`].
///
/// Field order matches the WGSL struct; `wave_color` is a `vec3` at offset 16 and `time`
/// fills its trailing slot, so the layout has no hidden padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BackgroundUniforms {
    /// Framebuffer size in physical pixels.
    pub resolution: [f32; 2],
    /// Pointer position in `[0, 1]²`, y up.
    pub mouse_uv: [f32; 2],
    pub wave_color: [f32; 3],
    /// Seconds.
    pub time: f32,
}

impl BackgroundUniforms {
    pub fn new(resolution: [f32; 2], mouse_uv: [f32; 2], wave_color: Color, time: f32) -> Self {
        Self {
            resolution,
            mouse_uv,
            wave_color: wave_color.rgb_array(),
            time,
        }
    }

    /// Wave intensity in `[0, 0.3]` at fragment `(frag_x, frag_y)`, y up from the bottom
    /// edge like `@builtin(position)` after a flip.
    pub fn intensity(&self, frag_x: f32, frag_y: f32) -> f32 {
        let [width, height] = self.resolution;
        if width <= 0.0 || height <= 0.0 {
            return 0.0;
        }
        let aspect = width / height;
        let uv = [frag_x / width * 2.0 - 1.0, (frag_y / height * 2.0 - 1.0) / aspect];
        let mouse = [self.mouse_uv[0] * 2.0 - 1.0, (self.mouse_uv[1] * 2.0 - 1.0) / aspect];

        let length = |a: [f32; 2], b: [f32; 2]| ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
        let corners = [[1.0, 1.0], [1.0, -1.0], [-1.0, -1.0], [-1.0, 1.0]];
        let distance = corners
            .iter()
            .map(|corner| length(uv, *corner) * CORNER_FREQUENCY)
            .fold(length(uv, mouse) * POINTER_FREQUENCY, f32::min);

        ((distance - self.time * WAVE_SPEED).sin() + 1.0) / 2.0 * WAVE_STRENGTH
    }

    /// CPU evaluation of the background shader at one fragment.
    pub fn shade(&self, frag_x: f32, frag_y: f32) -> Color {
        let [r, g, b] = self.wave_color;
        Color::rgb(r, g, b).scale(self.intensity(frag_x, frag_y))
    }
}

/// Fullscreen wave shader. Bind [`BackgroundUniforms`] at group 0, binding 0.
pub const BACKGROUND_WGSL: &str = r#"
struct Uniforms {
    resolution: vec2<f32>,
    mouse_uv: vec2<f32>,
    wave_color: vec3<f32>,
    time: f32,
}
@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> @builtin(position) vec4<f32> {
    let uv = vec2<f32>(f32((index << 1u) & 2u), f32(index & 2u));
    return vec4<f32>(uv * 2.0 - 1.0, 0.0, 1.0);
}

@fragment
fn fs_main(@builtin(position) frag: vec4<f32>) -> @location(0) vec4<f32> {
    let aspect = uniforms.resolution.x / uniforms.resolution.y;
    let frag_y = uniforms.resolution.y - frag.y;
    var uv = vec2<f32>(frag.x, frag_y) / uniforms.resolution * 2.0 - 1.0;
    uv.y /= aspect;
    var mouse = uniforms.mouse_uv * 2.0 - 1.0;
    mouse.y /= aspect;

    var dist = length(uv - mouse) * 80.0;
    dist = min(dist, length(uv - vec2<f32>(1.0, 1.0)) * 50.0);
    dist = min(dist, length(uv - vec2<f32>(1.0, -1.0)) * 50.0);
    dist = min(dist, length(uv - vec2<f32>(-1.0, -1.0)) * 50.0);
    dist = min(dist, length(uv - vec2<f32>(-1.0, 1.0)) * 50.0);

    let strength = (sin(dist - uniforms.time * 2.0) + 1.0) / 2.0 * 0.3;
    return vec4<f32>(uniforms.wave_color * strength, 1.0);
}
"#;

/// The wireframe backdrop behind the labels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Backdrop {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub color: Color,
}

impl Backdrop {
    pub fn advance(&mut self, color: Color) {
        self.rotation_x += BACKDROP_SPIN;
        self.rotation_y += BACKDROP_SPIN;
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniforms(time: f32) -> BackgroundUniforms {
        BackgroundUniforms::new([800.0, 600.0], [0.5, 0.5], Color::rgb(1.0, 0.5, 0.0), time)
    }

    #[test]
    fn uniforms_have_wgsl_layout() {
        assert_eq!(std::mem::size_of::<BackgroundUniforms>(), 32);
        let u = uniforms(2.0);
        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(&bytes[28..32], &2.0_f32.to_ne_bytes());
    }

    #[test]
    fn intensity_stays_in_range() {
        let uniforms = uniforms(1.3);
        for x in (0..800).step_by(37) {
            for y in (0..600).step_by(29) {
                let value = uniforms.intensity(x as f32, y as f32);
                assert!((0.0..=WAVE_STRENGTH + 1e-6).contains(&value));
            }
        }
    }

    #[test]
    fn pointer_ripple_dominates_near_pointer() {
        // Under the pointer the distance is zero, so the phase depends on time alone.
        let at_pointer = uniforms(0.0).intensity(400.0, 300.0);
        assert!((at_pointer - 0.15).abs() < 1e-5);
        let later = uniforms(std::f32::consts::PI / 4.0).intensity(400.0, 300.0);
        assert!(later < 0.01);
    }

    #[test]
    fn shade_tints_with_wave_color() {
        let color = uniforms(0.0).shade(400.0, 300.0);
        assert!((color.0[0] - 0.15).abs() < 1e-5);
        assert!((color.0[1] - 0.075).abs() < 1e-5);
        assert_eq!(color.0[2], 0.0);
    }

    #[test]
    fn empty_resolution_is_dark() {
        let uniforms = BackgroundUniforms::default();
        assert_eq!(uniforms.intensity(1.0, 1.0), 0.0);
    }

    #[test]
    fn backdrop_spins_each_frame() {
        let mut backdrop = Backdrop::default();
        for _ in 0..10 {
            backdrop.advance(Color::WHITE);
        }
        assert!((backdrop.rotation_x - 0.01).abs() < 1e-6);
        assert_eq!(backdrop.rotation_x, backdrop.rotation_y);
        assert_eq!(backdrop.color, Color::WHITE);
    }
}
