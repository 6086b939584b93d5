/// Represents a color in linear RGBA format.
///
/// Channels are stored as `f32` values in `[0.0, 1.0]`, which is what both the emissive
/// tint math and GPU uniform buffers want. Alpha is carried along untouched by the tint
/// operations.
///
/// # Examples
///
/// ```
/// use unit_circle::Color;
///
/// // Pure red from an HSL triple
/// let red = Color::from_hsl(0.0, 1.0, 0.5);
/// assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
///
/// // Dim it to a quarter of its brightness
/// let dim = red.scale(0.25);
/// assert_eq!(dim.to_rgba8(), [64, 0, 0, 255]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// A black color.
    ///
    /// Red, green, and blue channels are set to zero, and alpha is fully opaque.
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// A white color.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Creates a new color with the specified RGB values and full opacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use unit_circle::Color;
    ///
    /// let green = Color::rgb(0.0, 1.0, 0.0);
    /// assert_eq!(green, Color([0.0, 1.0, 0.0, 1.0]));
    /// ```
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// Creates an opaque color from hue, saturation and lightness, all in `[0.0, 1.0]`.
    ///
    /// The hue wraps, so `1.0` is the same as `0.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hue = hue.rem_euclid(1.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        if saturation <= 0.0 {
            return Self::rgb(lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Self::rgb(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    /// Multiplies the RGB channels by `factor`, keeping alpha.
    pub fn scale(&self, factor: f32) -> Self {
        let [r, g, b, a] = self.0;
        Self([r * factor, g * factor, b * factor, a])
    }

    pub fn rgb_array(&self) -> [f32; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Returns the color as an array of 4 `f32` values.
    pub fn to_array(&self) -> [f32; 4] {
        self.0
    }

    /// Quantizes the color to 8 bits per channel, clamping out-of-range values.
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.0.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Packs the color as `0x00RRGGBB`, the pixel format softbuffer surfaces expect.
    pub fn to_xrgb_u32(&self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
