use crate::charset::Charset;
use crate::error::ConvertError;
use crate::palette::Palette;

/// Whether glyph cells carry a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Text only; the exporter renders a fixed green-on-black style.
    #[default]
    Monochrome,
    /// Each cell stores an RGB color derived from the source pixel.
    Color,
}

/// Configuration for a single image-to-glyph conversion
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Number of glyph columns in the output grid (40-120 recommended)
    pub output_width: u32,
    /// Brightness offset applied before contrast, -50 to 50
    pub brightness: i32,
    /// Contrast adjustment, -50 to 50
    pub contrast: i32,
    /// Character set used for luminance quantization
    pub charset: Charset,
    /// Monochrome text or per-cell color output
    pub color_mode: ColorMode,
    /// Invert the luminance mapping (dark glyphs on light images)
    pub invert: bool,
    /// Color tint applied per cell in color mode
    pub palette: Palette,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            output_width: 80,
            brightness: 0,
            contrast: 0,
            charset: Charset::Standard,
            color_mode: ColorMode::Monochrome,
            invert: false,
            palette: Palette::Original,
        }
    }
}

impl ConversionOptions {
    /// Validates the conversion parameters
    ///
    /// Character set and palette are enums and cannot be invalid here;
    /// string keys are checked at the registry boundary instead.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.output_width < 1 {
            return Err(ConvertError::InvalidOutputWidth(self.output_width));
        }
        if !(-50..=50).contains(&self.brightness) {
            return Err(ConvertError::BrightnessOutOfRange(self.brightness));
        }
        if !(-50..=50).contains(&self.contrast) {
            return Err(ConvertError::ContrastOutOfRange(self.contrast));
        }
        Ok(())
    }
}
