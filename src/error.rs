//! Error types for the icon generation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating an icon set.
///
/// Validation variants (`NonSquareSource`, `SourceTooSmall`,
/// `MissingOutputDir`) are raised before any raster work starts. The
/// remaining variants wrap failures from decoding, encoding, filesystem
/// writes, and descriptor serialization. All of them abort the current run;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source image is not square.
    #[error("source image must be square, got {width}x{height}")]
    NonSquareSource { width: u32, height: u32 },

    /// The source image is smaller than the largest requested variant.
    #[error("source image is {side}px but the largest requested variant is {required}px")]
    SourceTooSmall { side: u32, required: u32 },

    /// The output directory does not exist or is not a directory.
    #[error("output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// The rounded-rectangle mask shape could not be rasterized.
    #[error("failed to rasterize mask shape: {0}")]
    MaskRender(String),

    /// Image decoding or encoding failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// A raster or descriptor file could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Descriptor serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
