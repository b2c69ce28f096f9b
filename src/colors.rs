//! Color space conversion helpers.
//!
//! Converts HSV (Hue, Saturation, Value) colors into per-channel intensity
//! percentages for a red/green/blue [`LedPack`](crate::LedPack).

use palette::{FromColor, Hsv, Srgb};

/// Number of distinct hues a random breath can pick from.
pub const HUE_COUNT: u32 = 359;

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Converts an HSV color into red, green and blue intensities in percent.
pub fn hsv_percents(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let rgb = hsv(hue, saturation, value);
    [rgb.red, rgb.green, rgb.blue].map(|c| (c * 100.0).clamp(0.0, 100.0))
}

/// Picks a hue in `0..HUE_COUNT` degrees from a random number source.
pub fn random_hue<R: rand_core::RngCore + ?Sized>(rng: &mut R) -> f32 {
    (rng.next_u32() % HUE_COUNT) as f32
}
