//! Glyphcast - deterministic image to glyph-grid converter
//!
//! Converts a raster image into a grid of text glyphs whose density
//! approximates local brightness, optionally tinted through a color
//! palette, and optionally re-rasterized into a bounded PNG-ready bitmap.
//!
//! The pipeline is a pure function of (image, options): scale to the
//! target column count, tonal adjustment, BT.601 luminance, character-set
//! quantization, palette transform. No shared mutable state exists between
//! conversions, so independent calls may run concurrently.
//!
//! # Example
//! ```no_run
//! use glyphcast::{convert, rasterize, ColorMode, ConversionOptions};
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let options = ConversionOptions::default();
//! let result = convert(&input, &options).unwrap();
//! println!("{}", result.text);
//!
//! let bitmap = rasterize(&result, ColorMode::Monochrome);
//! bitmap.save("glyph_art.png").unwrap();
//! ```

pub mod charset;
pub mod config;
pub mod error;
pub mod filters;
pub mod palette;
pub mod processor;
pub mod raster;

// Re-export main types for convenience
pub use charset::Charset;
pub use config::{ColorMode, ConversionOptions};
pub use error::ConvertError;
pub use palette::Palette;
pub use processor::{Conversion, GlyphCell, convert};
pub use raster::rasterize;
