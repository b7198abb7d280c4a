use thiserror::Error;

/// Errors surfaced by the conversion engine.
///
/// All variants are invalid-input class failures: the pipeline itself is
/// deterministic and pure, so a failing call fails the same way every time
/// and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Output width below the minimum of one column.
    #[error("output width must be at least 1, got {0}")]
    InvalidOutputWidth(u32),

    /// Brightness slider value outside the supported range.
    #[error("brightness must be within [-50, 50], got {0}")]
    BrightnessOutOfRange(i32),

    /// Contrast slider value outside the supported range.
    #[error("contrast must be within [-50, 50], got {0}")]
    ContrastOutOfRange(i32),

    /// Source image with a zero dimension.
    #[error("image has invalid dimensions {width}x{height}")]
    EmptyImage {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },

    /// Character-set key not present in the registry.
    #[error("unknown character set key: {0}")]
    UnknownCharset(String),

    /// Palette key not present in the registry.
    #[error("unknown palette key: {0}")]
    UnknownPalette(String),
}
