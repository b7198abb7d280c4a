use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use glyphcast::{Charset, ColorMode, ConversionOptions, Palette, convert, rasterize};
use log::info;

/// Convert an image into a glyph grid, as text and optionally as a
/// rasterized PNG.
#[derive(Parser, Debug)]
#[command(name = "glyphcast", version, about)]
struct Args {
    /// Source image (any format the image crate decodes)
    input: Option<PathBuf>,

    /// Output grid width in characters (40-120 recommended)
    #[arg(short = 'w', long, default_value_t = 80)]
    width: u32,

    /// Brightness offset, -50 to 50
    #[arg(short, long, default_value_t = 0)]
    brightness: i32,

    /// Contrast adjustment, -50 to 50
    #[arg(short, long, default_value_t = 0)]
    contrast: i32,

    /// Character set key (see --list-charsets)
    #[arg(long, default_value = "standard")]
    charset: String,

    /// Palette key, used with --color (see --list-palettes)
    #[arg(long, default_value = "original")]
    palette: String,

    /// Invert the luminance mapping
    #[arg(long)]
    invert: bool,

    /// Keep per-cell color instead of monochrome output
    #[arg(long)]
    color: bool,

    /// Write the text grid to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also export a rasterized bitmap to this path
    #[arg(long)]
    png: Option<PathBuf>,

    /// List available character sets and exit
    #[arg(long)]
    list_charsets: bool,

    /// List available palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_charsets {
        for charset in Charset::ALL {
            println!("{:<10} {:?}", charset.key(), charset.glyphs());
        }
        return Ok(());
    }
    if args.list_palettes {
        for palette in Palette::ALL {
            println!("{}", palette.key());
        }
        return Ok(());
    }

    let Some(input) = args.input else {
        bail!("no input image given (try --help)");
    };

    let options = ConversionOptions {
        output_width: args.width,
        brightness: args.brightness,
        contrast: args.contrast,
        charset: Charset::from_key(&args.charset)?,
        color_mode: if args.color {
            ColorMode::Color
        } else {
            ColorMode::Monochrome
        },
        invert: args.invert,
        palette: Palette::from_key(&args.palette)?,
    };

    let image = image::open(&input)
        .with_context(|| format!("failed to decode {}", input.display()))?
        .to_rgba8();
    info!(
        "decoded {} ({}x{})",
        input.display(),
        image.width(),
        image.height()
    );

    let result = convert(&image, &options)?;
    let (columns, rows) = result.dimensions();
    info!("converted to {columns}x{rows} glyph grid");

    match &args.output {
        Some(path) => fs::write(path, &result.text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", result.text),
    }

    if let Some(path) = &args.png {
        let bitmap = rasterize(&result, options.color_mode);
        bitmap
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            "exported {}x{} bitmap to {}",
            bitmap.width(),
            bitmap.height(),
            path.display()
        );
    }

    Ok(())
}
