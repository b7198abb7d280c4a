//! Built-in character sets
//!
//! Each set is an ordered ramp of glyphs from densest (index 0, darkest)
//! to lightest (last index, typically blank). Quantization picks an index
//! from normalized luminance; the ramps themselves are process-wide
//! constant data.

use crate::error::ConvertError;

/// 10 glyphs - the common ASCII density ramp
const STANDARD: &str = "@%#*+=-:. ";

/// 70 glyphs - Paul Bourke extended ramp, maximum tonal resolution
const DETAILED: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// 4 glyphs - coarse, high contrast
const SIMPLE: &str = "@*. ";

/// 5 glyphs - Unicode block shades, pseudo-pixels
const BLOCKS: &str = "█▓▒░ ";

/// 3 glyphs - ink or no ink
const MINIMAL: &str = "@. ";

/// 6 glyphs - round shapes only
const DOTS: &str = "@Oo:. ";

/// A built-in character set, selectable by key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// 10-glyph ASCII ramp
    #[default]
    Standard,
    /// 70-glyph extended ramp
    Detailed,
    /// 4-glyph coarse ramp
    Simple,
    /// Unicode block shades
    Blocks,
    /// 3-glyph minimal ramp
    Minimal,
    /// Round glyphs
    Dots,
}

impl Charset {
    /// Every built-in set, in menu order
    pub const ALL: [Charset; 6] = [
        Charset::Standard,
        Charset::Detailed,
        Charset::Simple,
        Charset::Blocks,
        Charset::Minimal,
        Charset::Dots,
    ];

    /// Stable registry key
    pub fn key(self) -> &'static str {
        match self {
            Charset::Standard => "standard",
            Charset::Detailed => "detailed",
            Charset::Simple => "simple",
            Charset::Blocks => "blocks",
            Charset::Minimal => "minimal",
            Charset::Dots => "dots",
        }
    }

    /// Glyph ramp, densest first
    pub fn glyphs(self) -> &'static str {
        match self {
            Charset::Standard => STANDARD,
            Charset::Detailed => DETAILED,
            Charset::Simple => SIMPLE,
            Charset::Blocks => BLOCKS,
            Charset::Minimal => MINIMAL,
            Charset::Dots => DOTS,
        }
    }

    /// Look up a set by registry key
    ///
    /// # Errors
    /// `ConvertError::UnknownCharset` when the key is not registered.
    pub fn from_key(key: &str) -> Result<Self, ConvertError> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| ConvertError::UnknownCharset(key.to_string()))
    }
}

/// Quantize normalized luminance to a glyph index
///
/// `index = floor(N * (len - 1))`, clamped into `[0, len-1]` so that
/// N exactly 1.0 (or float wobble above it) can never index past the
/// end. Sets of length 0 or 1 always resolve to index 0, so the result
/// is a safe index for any non-empty glyph table.
///
/// # Arguments
/// * `normalized` - Luminance in [0.0, 1.0], already inverted if requested
/// * `len` - Number of glyphs in the active set
///
/// # Returns
/// Index in [0, max(len, 1) - 1]
pub fn char_index(normalized: f32, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let scaled = (normalized.clamp(0.0, 1.0) * (len - 1) as f32).floor() as usize;
    scaled.min(len - 1)
}
