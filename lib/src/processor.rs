use crate::charset::char_index;
use crate::config::{ColorMode, ConversionOptions};
use crate::error::ConvertError;
use crate::filters::{adjust, luminance};
use image::{RgbaImage, imageops};
use rayon::prelude::*;

/// One cell of a glyph grid
///
/// The color is present iff the conversion ran in color mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCell {
    /// The glyph chosen for this cell
    pub character: char,
    /// Display color, palette-transformed from the sampled pixel
    pub color: Option<[u8; 3]>,
}

/// Result of one conversion
///
/// Owned by the caller; conversions share no mutable state, so
/// independent calls may run concurrently.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Glyph grid as plain text, rows joined by `\n`
    pub text: String,
    /// Structured grid with per-cell colors, present in color mode only
    pub color_grid: Option<Vec<Vec<GlyphCell>>>,
}

impl Conversion {
    /// Grid size as (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        let columns = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        (columns, self.text.lines().count())
    }
}

/// Converts an image into a glyph grid
///
/// This implements the full mapping pipeline:
/// 1. Resample to `output_width` columns, preserving aspect ratio
///    (Lanczos3, deterministic for a given input)
/// 2. Apply tonal adjustment when brightness or contrast is set
/// 3. Per pixel, row-major: BT.601 luminance, optional inversion,
///    quantization to a character-set index
/// 4. In color mode, run the palette over the resampled pixel's RGB
///    (the last color value before luminance collapse) and store it
///    alongside the glyph
///
/// # Arguments
/// * `image` - Source RGBA image
/// * `options` - Conversion parameters, passed by value semantics
///
/// # Returns
/// The glyph grid as text plus, in color mode, the structured grid
///
/// # Errors
/// `ConvertError` when options are out of range or the image has a
/// zero dimension. No partial grid is ever returned.
pub fn convert(image: &RgbaImage, options: &ConversionOptions) -> Result<Conversion, ConvertError> {
    options.validate()?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage { width, height });
    }

    // Step 1: resample to the character grid
    // Target height is floored from the aspect-preserving scale, with a
    // one-row minimum for very wide inputs.
    let scale = options.output_width as f32 / width as f32;
    let target_height = ((height as f32 * scale).floor() as u32).max(1);
    let mut resampled = if (width, height) == (options.output_width, target_height) {
        image.clone()
    } else {
        imageops::resize(
            image,
            options.output_width,
            target_height,
            imageops::FilterType::Lanczos3,
        )
    };

    // Step 2: tonal adjustment (skipped when neutral)
    if options.brightness != 0 || options.contrast != 0 {
        adjust(&mut resampled, options.brightness, options.contrast);
    }

    // Step 3+4: quantize each row; rows are independent, so map them
    // in parallel and reassemble in order
    let glyphs: Vec<char> = options.charset.glyphs().chars().collect();
    let len = glyphs.len();
    let want_color = options.color_mode == ColorMode::Color;
    let columns = options.output_width as usize;

    let rows: Vec<(String, Vec<GlyphCell>)> = (0..target_height)
        .into_par_iter()
        .map(|y| {
            let mut line = String::with_capacity(columns);
            let mut cells = Vec::with_capacity(if want_color { columns } else { 0 });

            for x in 0..options.output_width {
                let pixel = resampled.get_pixel(x, y);
                let mut normalized = luminance(pixel[0], pixel[1], pixel[2]) / 255.0;
                if options.invert {
                    normalized = 1.0 - normalized;
                }

                let character = glyphs[char_index(normalized, len)];
                line.push(character);

                if want_color {
                    let color = options.palette.apply(pixel[0], pixel[1], pixel[2]);
                    cells.push(GlyphCell {
                        character,
                        color: Some(color),
                    });
                }
            }

            (line, cells)
        })
        .collect();

    let text = rows
        .iter()
        .map(|(line, _)| line.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let color_grid = want_color.then(|| rows.into_iter().map(|(_, cells)| cells).collect());

    Ok(Conversion { text, color_grid })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::palette::Palette;
    use image::Rgba;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }

    fn options(output_width: u32) -> ConversionOptions {
        ConversionOptions {
            output_width,
            charset: Charset::Simple,
            ..Default::default()
        }
    }

    #[test]
    fn test_white_image_maps_to_blank() {
        // 2x2 solid white, simple set: normalized 1.0 -> index 3 -> ' '
        let img = solid(2, 2, [255, 255, 255]);
        let result = convert(&img, &options(2)).unwrap();
        assert_eq!(result.text, "  \n  ");
        assert!(result.color_grid.is_none());
    }

    #[test]
    fn test_white_image_inverted_maps_to_densest() {
        let img = solid(2, 2, [255, 255, 255]);
        let mut opts = options(2);
        opts.invert = true;
        let result = convert(&img, &opts).unwrap();
        assert_eq!(result.text, "@@\n@@");
    }

    #[test]
    fn test_inversion_is_involutive() {
        // Inverting white equals not inverting black, glyph for glyph
        let white = solid(4, 4, [255, 255, 255]);
        let black = solid(4, 4, [0, 0, 0]);

        let mut inverted = options(4);
        inverted.invert = true;

        let a = convert(&white, &inverted).unwrap();
        let b = convert(&black, &options(4)).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_grid_shape() {
        // 10x7 input at width 4: floor(7 * 4 / 10) = 2 rows
        let img = solid(10, 7, [128, 128, 128]);
        let result = convert(&img, &options(4)).unwrap();
        let (columns, rows) = result.dimensions();
        assert_eq!(columns, 4);
        assert_eq!(rows, 2);
        for line in result.text.lines() {
            assert_eq!(line.chars().count(), 4);
        }
    }

    #[test]
    fn test_wide_image_keeps_one_row() {
        // 100x1 at width 10 would floor to 0 rows without the guard
        let img = solid(100, 1, [128, 128, 128]);
        let result = convert(&img, &options(10)).unwrap();
        let (columns, rows) = result.dimensions();
        assert_eq!((columns, rows), (10, 1));
    }

    #[test]
    fn test_color_mode_populates_grid() {
        let img = solid(4, 4, [200, 40, 40]);
        let mut opts = options(4);
        opts.color_mode = ColorMode::Color;
        opts.palette = Palette::Original;

        let result = convert(&img, &opts).unwrap();
        let grid = result.color_grid.expect("color grid missing");
        assert_eq!(grid.len(), 4);
        for row in &grid {
            assert_eq!(row.len(), 4);
            for cell in row {
                let color = cell.color.expect("cell color missing");
                // Lanczos on a solid image stays on the solid color
                assert_eq!(color, [200, 40, 40]);
            }
        }
    }

    #[test]
    fn test_color_cells_match_text() {
        let img = solid(3, 3, [10, 10, 10]);
        let mut opts = options(3);
        opts.color_mode = ColorMode::Color;

        let result = convert(&img, &opts).unwrap();
        let grid = result.color_grid.unwrap();
        for (line, row) in result.text.lines().zip(&grid) {
            for (ch, cell) in line.chars().zip(row) {
                assert_eq!(ch, cell.character);
            }
        }
    }

    #[test]
    fn test_palette_applied_to_cells() {
        let img = solid(2, 2, [100, 100, 100]);
        let mut opts = options(2);
        opts.color_mode = ColorMode::Color;
        opts.palette = Palette::Grayscale;

        let result = convert(&img, &opts).unwrap();
        let grid = result.color_grid.unwrap();
        let [r, g, b] = grid[0][0].color.unwrap();
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_brightness_shifts_glyphs() {
        // Mid gray sits in the middle of the ramp; +50 brightness pushes
        // every cell at least one step toward the light end
        let img = solid(4, 4, [128, 128, 128]);
        let neutral = convert(&img, &options(4)).unwrap();

        let mut brighter = options(4);
        brighter.brightness = 50;
        let adjusted = convert(&img, &brighter).unwrap();
        assert_ne!(neutral.text, adjusted.text);
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let img = RgbaImage::new(0, 0);
        let err = convert(&img, &options(4)).unwrap_err();
        assert_eq!(err, ConvertError::EmptyImage { width: 0, height: 0 });
    }

    #[test]
    fn test_zero_output_width_rejected() {
        let img = solid(4, 4, [0, 0, 0]);
        assert_eq!(
            convert(&img, &options(0)).unwrap_err(),
            ConvertError::InvalidOutputWidth(0)
        );
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let img = solid(16, 9, [90, 140, 200]);
        let mut opts = options(8);
        opts.charset = Charset::Detailed;
        opts.contrast = 20;
        let a = convert(&img, &opts).unwrap();
        let b = convert(&img, &opts).unwrap();
        assert_eq!(a.text, b.text);
    }
}
