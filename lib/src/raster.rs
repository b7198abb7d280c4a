//! Glyph-grid re-rasterization
//!
//! Draws a conversion result back into a bitmap: black background,
//! terminal-green glyphs with a soft glow in monochrome mode, per-cell
//! palette colors in color mode. Output dimensions are bounded to
//! [600, 1200] on the long axis.
//!
//! Glyphs come from the embedded Spleen 6x12 PSF2 face, scaled to the
//! computed cell size with nearest-neighbor sampling.

use crate::config::ColorMode;
use crate::processor::Conversion;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::filter::gaussian_blur_f32;
use spleen_font::{FONT_6X12, PSF2Font};
use std::collections::HashMap;

/// Long-axis floor; also the fallback size for degenerate grids
const MIN_EDGE: u32 = 600;
/// Long-axis ceiling
const MAX_EDGE: u32 = 1200;
/// Font size used to compute the natural (unclamped) bitmap size
const BASE_FONT_SIZE: f32 = 12.0;
/// Monospace cell width as a fraction of the font size
const CHAR_ASPECT: f32 = 0.6;
/// Fixed padding around the text block, per side
const PADDING: f32 = 20.0;
const MIN_FONT_SIZE: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 12.0;
/// Monochrome foreground
const TERMINAL_GREEN: [u8; 3] = [0, 255, 70];
const GLOW_SIGMA: f32 = 1.4;
const GLOW_STRENGTH: f32 = 0.55;
/// Source dimensions of the embedded Spleen face
const SOURCE_GLYPH_W: usize = 6;
const SOURCE_GLYPH_H: usize = 12;

/// Rasterize a glyph grid into a bitmap
///
/// Layout: the natural size at the base font is kept unmodified when its
/// long axis already sits in [600, 1200]; otherwise both axes are scaled
/// uniformly to bring the long axis into bounds. When that scale is an
/// upscale, each axis is additionally floored at 600 (the extra space
/// becomes padding) so tiny grids still reach the minimum size. The font
/// size is re-derived from the padded interior and clamped to [6, 12];
/// the text block is centered.
///
/// A degenerate grid (no rows, or rows with no cells) produces a blank
/// 600x600 bitmap rather than an error - this is a rendering concern,
/// not a correctness failure.
///
/// # Arguments
/// * `conversion` - The glyph grid to draw
/// * `mode` - Render style; color mode without a color grid falls back
///   to monochrome
pub fn rasterize(conversion: &Conversion, mode: ColorMode) -> RgbaImage {
    let lines: Vec<Vec<char>> = conversion
        .text
        .lines()
        .map(|line| line.chars().collect())
        .collect();
    let max_len = lines.iter().map(Vec::len).max().unwrap_or(0);
    let line_count = lines.len();

    let background = Rgba([0, 0, 0, 255]);
    if max_len == 0 || line_count == 0 {
        return RgbaImage::from_pixel(MIN_EDGE, MIN_EDGE, background);
    }

    // Natural size at the base font, then uniform scale into bounds
    let natural_w = max_len as f32 * BASE_FONT_SIZE * CHAR_ASPECT + 2.0 * PADDING;
    let natural_h = line_count as f32 * BASE_FONT_SIZE + 2.0 * PADDING;
    let long_axis = natural_w.max(natural_h);
    let (out_w, out_h) = if long_axis < MIN_EDGE as f32 {
        // Upscale: floor each axis so degenerate grids reach the minimum
        let scale = MIN_EDGE as f32 / long_axis;
        (
            ((natural_w * scale).round() as u32).max(MIN_EDGE),
            ((natural_h * scale).round() as u32).max(MIN_EDGE),
        )
    } else if long_axis > MAX_EDGE as f32 {
        let scale = MAX_EDGE as f32 / long_axis;
        (
            (natural_w * scale).round() as u32,
            (natural_h * scale).round() as u32,
        )
    } else {
        // Already within bounds: natural size, unmodified
        (natural_w.round() as u32, natural_h.round() as u32)
    };

    // Font size that fits the padded interior
    let inner_w = out_w as f32 - 2.0 * PADDING;
    let inner_h = out_h as f32 - 2.0 * PADDING;
    let font_size = (inner_w / max_len as f32 / CHAR_ASPECT)
        .min(inner_h / line_count as f32)
        .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let cell_w = ((font_size * CHAR_ASPECT).round() as u32).max(1);
    let cell_h = (font_size.round() as u32).max(1);

    // Center the text block
    let block_w = cell_w * max_len as u32;
    let block_h = cell_h * line_count as u32;
    let origin_x = out_w.saturating_sub(block_w) / 2;
    let origin_y = out_h.saturating_sub(block_h) / 2;

    let bitmaps = glyph_bitmaps(&lines, cell_w as usize, cell_h as usize);
    let mut canvas = RgbaImage::from_pixel(out_w, out_h, background);

    let color_grid = match mode {
        ColorMode::Color => conversion.color_grid.as_deref(),
        ColorMode::Monochrome => None,
    };

    if let Some(grid) = color_grid {
        for (row, line) in lines.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                let color = grid
                    .get(row)
                    .and_then(|cells| cells.get(col))
                    .and_then(|cell| cell.color)
                    .unwrap_or([255, 255, 255]);
                stamp_rgba(
                    &mut canvas,
                    &bitmaps[&ch],
                    origin_x + col as u32 * cell_w,
                    origin_y + row as u32 * cell_h,
                    cell_w,
                    cell_h,
                    color,
                );
            }
        }
        return canvas;
    }

    // Monochrome: stamp a coverage mask, blur it for the glow, then
    // composite sharp glyphs over the halo
    let mut mask = GrayImage::new(out_w, out_h);
    for (row, line) in lines.iter().enumerate() {
        for (col, &ch) in line.iter().enumerate() {
            stamp_mask(
                &mut mask,
                &bitmaps[&ch],
                origin_x + col as u32 * cell_w,
                origin_y + row as u32 * cell_h,
                cell_w,
                cell_h,
            );
        }
    }
    let glow = gaussian_blur_f32(&mask, GLOW_SIGMA);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let sharp = mask.get_pixel(x, y)[0] as f32 / 255.0;
        let halo = glow.get_pixel(x, y)[0] as f32 / 255.0 * GLOW_STRENGTH;
        let intensity = sharp.max(halo);
        if intensity > 0.0 {
            *pixel = Rgba([
                (TERMINAL_GREEN[0] as f32 * intensity) as u8,
                (TERMINAL_GREEN[1] as f32 * intensity) as u8,
                (TERMINAL_GREEN[2] as f32 * intensity) as u8,
                255,
            ]);
        }
    }

    canvas
}

/// Build cell-sized 0/1 bitmaps for every distinct glyph in the grid
///
/// Characters missing from the embedded face render as a filled cell,
/// except the blank which stays empty.
fn glyph_bitmaps(
    lines: &[Vec<char>],
    cell_w: usize,
    cell_h: usize,
) -> HashMap<char, Vec<u8>> {
    let mut face = PSF2Font::new(FONT_6X12).expect("embedded Spleen face is valid PSF2");
    let mut cache: HashMap<char, Vec<u8>> = HashMap::new();

    for line in lines {
        for &ch in line {
            if cache.contains_key(&ch) {
                continue;
            }

            let mut cell = vec![0u8; cell_w * cell_h];
            if ch != ' ' {
                let utf8 = ch.to_string();
                if let Some(rows) = face.glyph_for_utf8(utf8.as_bytes()) {
                    let mut source = vec![0u8; SOURCE_GLYPH_W * SOURCE_GLYPH_H];
                    for (y, row) in rows.enumerate() {
                        for (x, on) in row.enumerate() {
                            if y < SOURCE_GLYPH_H && x < SOURCE_GLYPH_W && on {
                                source[y * SOURCE_GLYPH_W + x] = 1;
                            }
                        }
                    }
                    scale_bitmap(
                        &source,
                        SOURCE_GLYPH_W,
                        SOURCE_GLYPH_H,
                        &mut cell,
                        cell_w,
                        cell_h,
                    );
                } else {
                    // Unknown glyph: filled cell
                    cell.fill(1);
                }
            }
            cache.insert(ch, cell);
        }
    }

    cache
}

/// Nearest-neighbor scale of a 0/1 bitmap
fn scale_bitmap(src: &[u8], src_w: usize, src_h: usize, dst: &mut [u8], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            dst[dy * dst_w + dx] = src[sy * src_w + sx];
        }
    }
}

/// Stamp a glyph bitmap into an RGBA canvas with a solid color
fn stamp_rgba(
    canvas: &mut RgbaImage,
    bitmap: &[u8],
    left: u32,
    top: u32,
    cell_w: u32,
    cell_h: u32,
    color: [u8; 3],
) {
    let (width, height) = canvas.dimensions();
    for dy in 0..cell_h {
        for dx in 0..cell_w {
            if bitmap[(dy * cell_w + dx) as usize] == 0 {
                continue;
            }
            let x = left + dx;
            let y = top + dy;
            if x < width && y < height {
                canvas.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
            }
        }
    }
}

/// Stamp a glyph bitmap into a grayscale coverage mask
fn stamp_mask(mask: &mut GrayImage, bitmap: &[u8], left: u32, top: u32, cell_w: u32, cell_h: u32) {
    let (width, height) = mask.dimensions();
    for dy in 0..cell_h {
        for dx in 0..cell_w {
            if bitmap[(dy * cell_w + dx) as usize] == 0 {
                continue;
            }
            let x = left + dx;
            let y = top + dy;
            if x < width && y < height {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }
}
