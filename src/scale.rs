//! Quality-preserving image scaling.
//!
//! Resizing a large source straight down to a small target with a single
//! bilinear pass drops most of the source samples and produces aliasing and
//! moiré. [`scale`] instead halves the image repeatedly until it is within
//! a factor of two of the target, then performs one exact bilinear resample.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Scales a pixel buffer to exactly `target_width` x `target_height`.
///
/// If the buffer already has the requested dimensions it is returned
/// unchanged, so scaling is idempotent. Downscaling by more than 2x runs
/// through progressive halving passes before the final resample; upscaling
/// is a single direct pass. Every pass uses bilinear filtering.
pub fn scale(source: &RgbaImage, target_width: u32, target_height: u32) -> RgbaImage {
    if source.width() == target_width && source.height() == target_height {
        return source.clone();
    }

    let mut current = source.clone();

    while current.width() >= target_width * 2 || current.height() >= target_height * 2 {
        let width = current.width() / 2;
        let height = current.height() / 2;
        current = imageops::resize(&current, width, height, FilterType::Triangle);
    }

    if current.width() == target_width && current.height() == target_height {
        return current;
    }

    imageops::resize(&current, target_width, target_height, FilterType::Triangle)
}
