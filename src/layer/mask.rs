//! Rounded-rectangle safe-zone masking for adaptive icons.
//!
//! Platforms that apply their own final shape mask at display time expect
//! icons with a pre-baked safe zone: the content sits inside a centered
//! rounded rectangle, leaving an inset the host shape can clip into. The
//! geometry is expressed as proportions of a reference canvas
//! ([`MaskProportions`]) so it scales linearly to any output size.

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::IconError;
use crate::scale::scale;

// ============================================================================
// Geometry
// ============================================================================

/// Safe-zone proportions at a reference canvas size.
///
/// The defaults encode the platform design guideline this pipeline ships
/// with: a 50px inset, 412px content area, and 128px corner radius on a
/// 512px canvas. `baseline == 2 * inset + content` must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskProportions {
    /// Reference canvas size the other constants are expressed against.
    pub baseline: u32,
    /// Inset between the canvas edge and the content area, at baseline.
    pub inset: u32,
    /// Side length of the content area, at baseline.
    pub content: u32,
    /// Corner radius of the content area, at baseline.
    pub corner_radius: u32,
}

impl Default for MaskProportions {
    fn default() -> Self {
        Self::new(512, 50, 412, 128)
    }
}

impl MaskProportions {
    /// Creates a proportion set.
    ///
    /// The insets and content must close over the baseline exactly:
    /// `baseline == 2 * inset + content`.
    pub fn new(baseline: u32, inset: u32, content: u32, corner_radius: u32) -> Self {
        debug_assert_eq!(baseline, 2 * inset + content);
        Self {
            baseline,
            inset,
            content,
            corner_radius,
        }
    }

    /// Resolves the proportions against a concrete canvas size.
    ///
    /// The inset is rounded from the baseline ratio and the content size is
    /// derived as the remainder, so `inset + content_size + inset` equals
    /// `canvas_size` exactly at every size. The corner radius is rounded
    /// from the baseline ratio and clamped to half the content size.
    pub fn geometry_for(&self, canvas_size: u32) -> MaskGeometry {
        let factor = canvas_size as f32 / self.baseline as f32;
        let inset = (self.inset as f32 * factor).round() as u32;
        let content_size = canvas_size - 2 * inset;
        let corner_radius =
            ((self.corner_radius as f32 * factor).round() as u32).min(content_size / 2);

        MaskGeometry {
            canvas_size,
            inset,
            content_size,
            corner_radius,
        }
    }
}

/// Safe-zone geometry resolved for one concrete canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskGeometry {
    pub canvas_size: u32,
    pub inset: u32,
    pub content_size: u32,
    pub corner_radius: u32,
}

// ============================================================================
// Masking
// ============================================================================

/// Clips the source to a centered rounded rectangle on a transparent canvas.
///
/// The source is scaled to the content size, then restricted to the mask:
/// the result keeps the source color with alpha multiplied by the mask
/// alpha, so the antialiased mask edge carries through. The returned buffer
/// is `canvas_size` x `canvas_size`.
pub fn apply_mask(
    source: &RgbaImage,
    canvas_size: u32,
    proportions: &MaskProportions,
) -> Result<RgbaImage, IconError> {
    let geometry = proportions.geometry_for(canvas_size);
    let mask = rounded_rect_mask(geometry.content_size, geometry.corner_radius)?;
    let scaled = scale(source, geometry.content_size, geometry.content_size);

    let mut canvas = RgbaImage::new(canvas_size, canvas_size);

    for y in 0..geometry.content_size {
        for x in 0..geometry.content_size {
            let mask_alpha = mask.get_pixel(x, y)[3];
            if mask_alpha == 0 {
                continue;
            }

            let mut pixel = *scaled.get_pixel(x, y);
            pixel[3] = (pixel[3] as u16 * mask_alpha as u16 / 255) as u8;
            canvas.put_pixel(geometry.inset + x, geometry.inset + y, pixel);
        }
    }

    Ok(canvas)
}

/// Rasterizes an opaque rounded rectangle of the given size and radius.
fn rounded_rect_mask(size: u32, radius: u32) -> Result<RgbaImage, IconError> {
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}"><rect width="{size}" height="{size}" rx="{radius}" ry="{radius}" fill="#ffffff"/></svg>"##
    );

    let tree = Tree::from_str(&svg, &Options::default())
        .map_err(|e| IconError::MaskRender(e.to_string()))?;

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| IconError::MaskRender(format!("invalid mask size {size}")))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage, unpremultiplying.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if let Some(p) = pixmap.pixel(x, y) {
            let color = p.demultiply();
            pixel.0 = [color.red(), color.green(), color.blue(), color.alpha()];
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn geometry_matches_baseline_constants() {
        let geometry = MaskProportions::default().geometry_for(512);
        assert_eq!(geometry.inset, 50);
        assert_eq!(geometry.content_size, 412);
        assert_eq!(geometry.corner_radius, 128);
    }

    #[test]
    fn insets_close_exactly_at_every_catalog_size() {
        let proportions = MaskProportions::default();

        for canvas in [16, 32, 48, 64, 128, 192, 256, 512, 1024] {
            let g = proportions.geometry_for(canvas);
            assert_eq!(
                g.inset + g.content_size + g.inset,
                canvas,
                "insets must close over a {canvas}px canvas"
            );
            assert!(g.corner_radius <= g.content_size / 2);
        }
    }

    #[test]
    fn mask_output_has_canvas_dimensions() {
        let source = RgbaImage::from_pixel(512, 512, Rgba([255, 0, 0, 255]));
        let masked = apply_mask(&source, 128, &MaskProportions::default()).unwrap();
        assert_eq!(masked.width(), 128);
        assert_eq!(masked.height(), 128);
    }

    #[test]
    fn mask_clears_corners_and_keeps_center() {
        let source = RgbaImage::from_pixel(512, 512, Rgba([255, 0, 0, 255]));
        let masked = apply_mask(&source, 512, &MaskProportions::default()).unwrap();

        // The inset band and the content-area corners lie outside the
        // rounded rectangle.
        assert_eq!(masked.get_pixel(0, 0)[3], 0);
        assert_eq!(masked.get_pixel(25, 25)[3], 0);
        assert_eq!(masked.get_pixel(55, 55)[3], 0);

        let center = masked.get_pixel(256, 256);
        assert_eq!(center.0, [255, 0, 0, 255]);
    }

    #[test]
    fn mask_edge_is_antialiased() {
        let source = RgbaImage::from_pixel(512, 512, Rgba([0, 0, 255, 255]));
        let masked = apply_mask(&source, 512, &MaskProportions::default()).unwrap();

        let partial = masked
            .pixels()
            .filter(|p| p[3] > 0 && p[3] < 255)
            .count();
        assert!(partial > 0, "rounded corners should have partial coverage");
    }
}
