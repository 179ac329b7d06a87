//! Pixel-effect layers applied to maskable icons.
//!
//! Maskable ("adaptive") icons are produced by two layers applied in a
//! fixed order: the rounded-rectangle safe-zone mask ([`mask`]) followed by
//! the drop shadow ([`shadow`]). This module also holds the compositing
//! primitives both layers share.

pub mod mask;
pub mod shadow;

pub use mask::{MaskGeometry, MaskProportions};
pub use shadow::DropShadow;

use image::{Rgba, RgbaImage};

// ============================================================================
// Compositing
// ============================================================================

/// Composites a source image onto a destination image at the specified
/// position, using standard alpha blending (source over destination).
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let dest_width = dest.width() as i64;
    let dest_height = dest.height() as i64;

    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = x + sx as i64;
            let dy = y + sy as i64;

            if dx < 0 || dy < 0 || dx >= dest_width || dy >= dest_height {
                continue;
            }

            let src_pixel = src.get_pixel(sx, sy);
            let dst_pixel = dest.get_pixel(dx as u32, dy as u32);

            let blended = alpha_blend(*src_pixel, *dst_pixel);
            dest.put_pixel(dx as u32, dy as u32, blended);
        }
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    if src[3] == 255 {
        return src;
    }

    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Premultiplied alpha
// ============================================================================

/// Converts a pixel buffer to premultiplied-alpha float samples.
///
/// Filtering straight-alpha RGBA lets fully transparent pixels (which are
/// stored as transparent black) bleed into their neighbors; convolution
/// therefore runs in premultiplied space.
pub(crate) fn premultiply(image: &RgbaImage) -> Vec<[f32; 4]> {
    image
        .pixels()
        .map(|p| {
            let a = p[3] as f32 / 255.0;
            [
                p[0] as f32 / 255.0 * a,
                p[1] as f32 / 255.0 * a,
                p[2] as f32 / 255.0 * a,
                a,
            ]
        })
        .collect()
}

/// Converts premultiplied-alpha float samples back to a pixel buffer.
pub(crate) fn unpremultiply(samples: &[[f32; 4]], width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);

    for (i, pixel) in image.pixels_mut().enumerate() {
        let [r, g, b, a] = samples[i];
        if a <= 0.0 {
            continue;
        }
        pixel.0 = [
            (r / a * 255.0).round().min(255.0) as u8,
            (g / a * 255.0).round().min(255.0) as u8,
            (b / a * 255.0).round().min(255.0) as u8,
            (a * 255.0).round().min(255.0) as u8,
        ];
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_opaque_replaces_destination() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));

        composite_over(&mut dest, &src, 3, 3);

        assert_eq!(dest.get_pixel(5, 5).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn composite_blends_translucent_source() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 128]));

        composite_over(&mut dest, &src, 0, 0);

        let pixel = dest.get_pixel(0, 0);
        assert!(pixel[0] > 0, "should keep some red");
        assert!(pixel[2] > 0, "should gain some blue");
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn composite_clips_outside_destination() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));

        composite_over(&mut dest, &src, 2, 2);

        assert_eq!(dest.get_pixel(3, 3).0, [255, 255, 255, 255]);
        assert_eq!(dest.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn premultiply_round_trip() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([200, 100, 40, 255]));
        image.put_pixel(1, 0, Rgba([60, 120, 240, 128]));

        let samples = premultiply(&image);
        let restored = unpremultiply(&samples, 2, 1);

        assert_eq!(restored.get_pixel(0, 0).0, [200, 100, 40, 255]);
        let p = restored.get_pixel(1, 0);
        assert_eq!(p[3], 128);
        assert!((p[0] as i32 - 60).abs() <= 1);
        assert!((p[2] as i32 - 240).abs() <= 1);
    }
}
