//! Built-in color palettes
//!
//! A palette is a pure `(r, g, b) -> [r, g, b]` transform applied per cell
//! in color mode. `Original` passes the sampled color through; the other
//! seven derive a tint from the sample's luminance. All outputs are
//! clamped into the 8-bit range.

use crate::error::ConvertError;
use crate::filters::luminance;

/// A built-in palette, selectable by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Identity passthrough (the default)
    #[default]
    Original,
    /// Neutral gray from luminance
    Grayscale,
    /// Warm brown photographic tone
    Sepia,
    /// Phosphor green
    Matrix,
    /// Amber monitor
    Amber,
    /// Cold blue-cyan
    Ocean,
    /// Deep red-orange
    Ember,
    /// Purple-magenta
    Violet,
}

impl Palette {
    /// Every built-in palette, in menu order
    pub const ALL: [Palette; 8] = [
        Palette::Original,
        Palette::Grayscale,
        Palette::Sepia,
        Palette::Matrix,
        Palette::Amber,
        Palette::Ocean,
        Palette::Ember,
        Palette::Violet,
    ];

    /// Stable registry key
    pub fn key(self) -> &'static str {
        match self {
            Palette::Original => "original",
            Palette::Grayscale => "grayscale",
            Palette::Sepia => "sepia",
            Palette::Matrix => "matrix",
            Palette::Amber => "amber",
            Palette::Ocean => "ocean",
            Palette::Ember => "ember",
            Palette::Violet => "violet",
        }
    }

    /// Look up a palette by registry key
    ///
    /// # Errors
    /// `ConvertError::UnknownPalette` when the key is not registered.
    pub fn from_key(key: &str) -> Result<Self, ConvertError> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| ConvertError::UnknownPalette(key.to_string()))
    }

    /// Transform a sampled RGB color into the cell's display color
    pub fn apply(self, r: u8, g: u8, b: u8) -> [u8; 3] {
        match self {
            Palette::Original => [r, g, b],
            Palette::Grayscale => {
                let l = clamp_channel(luminance(r, g, b));
                [l, l, l]
            }
            Palette::Sepia => {
                let (rf, gf, bf) = (r as f32, g as f32, b as f32);
                [
                    clamp_channel(0.393 * rf + 0.769 * gf + 0.189 * bf),
                    clamp_channel(0.349 * rf + 0.686 * gf + 0.168 * bf),
                    clamp_channel(0.272 * rf + 0.534 * gf + 0.131 * bf),
                ]
            }
            Palette::Matrix => tint(luminance(r, g, b), 0.0, 1.0, 0.35),
            Palette::Amber => tint(luminance(r, g, b), 1.0, 0.65, 0.0),
            Palette::Ocean => tint(luminance(r, g, b), 0.1, 0.55, 1.0),
            Palette::Ember => tint(luminance(r, g, b), 1.0, 0.35, 0.12),
            Palette::Violet => tint(luminance(r, g, b), 0.75, 0.2, 1.0),
        }
    }
}

/// Scale luminance by per-channel weights
fn tint(l: f32, wr: f32, wg: f32, wb: f32) -> [u8; 3] {
    [
        clamp_channel(l * wr),
        clamp_channel(l * wg),
        clamp_channel(l * wb),
    ]
}

#[inline]
fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
