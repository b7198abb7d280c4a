/// Basic example: convert a synthetic test image to a glyph grid
///
/// Builds a radial gradient with a bright circle, prints the text grid
/// and exports the rasterized bitmap in both render modes.
use glyphcast::{Charset, ColorMode, ConversionOptions, Palette, convert, rasterize};
use image::{Rgba, RgbaImage};

fn main() {
    println!("Glyphcast - Basic Example");
    println!("=========================\n");

    // Create a 320x240 test image: dark background, bright circle
    let width = 320;
    let height = 240;
    let mut img = RgbaImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 80.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // Bright disc fading toward the rim
                let v = (255.0 * (1.0 - dist / radius).max(0.3)) as u8;
                img.put_pixel(x, y, Rgba([v, v, v, 255]));
            } else {
                img.put_pixel(x, y, Rgba([30, 30, 40, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let options = ConversionOptions {
        output_width: 60,
        brightness: 0,
        contrast: 10,
        charset: Charset::Standard,
        color_mode: ColorMode::Color,
        invert: false,
        palette: Palette::Matrix,
    };

    println!("Converting with:");
    println!("  - Output width: {}", options.output_width);
    println!("  - Charset: {}", options.charset.key());
    println!("  - Palette: {}", options.palette.key());
    println!();

    let result = convert(&img, &options).expect("conversion failed");
    let (columns, rows) = result.dimensions();
    println!("{}", result.text);
    println!("\nGrid: {} columns x {} rows", columns, rows);

    let mono = rasterize(&result, ColorMode::Monochrome);
    let color = rasterize(&result, ColorMode::Color);
    mono.save("basic_mono.png").expect("Failed to save mono bitmap");
    color.save("basic_color.png").expect("Failed to save color bitmap");

    println!("✓ Saved monochrome render to: basic_mono.png");
    println!("✓ Saved color render to:      basic_color.png");
}
