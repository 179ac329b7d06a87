//! Soft drop shadows behind masked icon content.
//!
//! The shadow is built in four steps: draw the icon's silhouette shifted by
//! the configured offset, recolor it to the shadow color while keeping the
//! alpha mask, blur it with a separable Gaussian kernel, then draw the
//! untouched icon back on top. The shadow is therefore only visible where
//! it extends beyond the icon's own silhouette.

use image::{Rgba, RgbaImage};

use super::{composite_over, premultiply, unpremultiply};

/// Drop shadow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropShadow {
    /// Shadow fill color; its alpha tints the silhouette.
    pub color: Rgba<u8>,
    /// Shift of the shadow layer, applied on both axes.
    pub offset: i32,
    /// Gaussian blur radius; the kernel spans `2 * blur_radius + 1` taps.
    pub blur_radius: u32,
}

impl Default for DropShadow {
    fn default() -> Self {
        Self {
            color: Rgba([0, 0, 0, 80]),
            offset: 1,
            blur_radius: 4,
        }
    }
}

/// Composites a drop shadow behind the icon.
///
/// The returned buffer has the same dimensions as the input. Foreground
/// pixels that are fully opaque come through bit-identical, since the
/// unshadowed icon is drawn last at its unshifted position.
pub fn apply_drop_shadow(icon: &RgbaImage, shadow: &DropShadow) -> RgbaImage {
    let (width, height) = icon.dimensions();

    let mut silhouette = RgbaImage::new(width, height);
    for (x, y, pixel) in icon.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }

        let dx = x as i64 + shadow.offset as i64;
        let dy = y as i64 + shadow.offset as i64;
        if dx < 0 || dy < 0 || dx >= width as i64 || dy >= height as i64 {
            continue;
        }

        // Solid fill restricted to the silhouette's alpha mask.
        let alpha = (shadow.color[3] as u16 * pixel[3] as u16 / 255) as u8;
        silhouette.put_pixel(
            dx as u32,
            dy as u32,
            Rgba([shadow.color[0], shadow.color[1], shadow.color[2], alpha]),
        );
    }

    let mut result = gaussian_blur(&silhouette, shadow.blur_radius);
    composite_over(&mut result, icon, 0, 0);
    result
}

// ============================================================================
// Gaussian blur
// ============================================================================

/// Builds the 1-D Gaussian kernel for the given radius.
///
/// The kernel spans `2 * radius + 1` taps with `sigma = radius / 3`, and is
/// normalized so the weights sum to exactly 1.0.
pub fn gaussian_kernel(radius: u32) -> Vec<f32> {
    let radius = radius as i32;
    let sigma = radius as f32 / 3.0;
    let two_sigma_squared = 2.0 * sigma * sigma;

    let mut weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / two_sigma_squared).exp())
        .collect();

    let total: f32 = weights.iter().sum();
    for weight in &mut weights {
        *weight /= total;
    }

    weights
}

/// Applies a separable Gaussian blur: one horizontal pass, one vertical.
///
/// Sample coordinates are clamped at the buffer edges; nothing outside the
/// buffer is read and nothing wraps around.
fn gaussian_blur(image: &RgbaImage, radius: u32) -> RgbaImage {
    if radius == 0 {
        return image.clone();
    }

    let (width, height) = image.dimensions();
    let kernel = gaussian_kernel(radius);

    let samples = premultiply(image);
    let horizontal = convolve(&samples, width, height, &kernel, Axis::Horizontal);
    let vertical = convolve(&horizontal, width, height, &kernel, Axis::Vertical);

    unpremultiply(&vertical, width, height)
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn convolve(
    samples: &[[f32; 4]],
    width: u32,
    height: u32,
    kernel: &[f32],
    axis: Axis,
) -> Vec<[f32; 4]> {
    let radius = (kernel.len() / 2) as i64;
    let width = width as i64;
    let height = height as i64;
    let mut output = vec![[0.0f32; 4]; samples.len()];

    for y in 0..height {
        for x in 0..width {
            let mut acc = [0.0f32; 4];

            for (tap, weight) in kernel.iter().enumerate() {
                let t = tap as i64 - radius;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + t).clamp(0, width - 1), y),
                    Axis::Vertical => (x, (y + t).clamp(0, height - 1)),
                };

                let sample = samples[(sy * width + sx) as usize];
                for channel in 0..4 {
                    acc[channel] += sample[channel] * weight;
                }
            }

            output[(y * width + x) as usize] = acc;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_weights_sum_to_one() {
        for radius in 1..=10 {
            let kernel = gaussian_kernel(radius);
            assert_eq!(kernel.len(), (2 * radius + 1) as usize);

            let total: f32 = kernel.iter().sum();
            assert!(
                (total - 1.0).abs() < 1e-5,
                "kernel for radius {radius} sums to {total}"
            );
        }
    }

    #[test]
    fn kernel_is_symmetric_and_peaks_at_center() {
        let kernel = gaussian_kernel(4);
        for i in 0..kernel.len() / 2 {
            assert_eq!(kernel[i], kernel[kernel.len() - 1 - i]);
        }
        let peak = kernel[kernel.len() / 2];
        assert!(kernel.iter().all(|w| *w <= peak));
    }

    fn opaque_square(canvas: u32, origin: u32, side: u32) -> RgbaImage {
        let mut image = RgbaImage::new(canvas, canvas);
        for y in origin..origin + side {
            for x in origin..origin + side {
                image.put_pixel(x, y, Rgba([255, 200, 0, 255]));
            }
        }
        image
    }

    #[test]
    fn output_dimensions_match_input() {
        let icon = opaque_square(64, 16, 32);
        let result = apply_drop_shadow(&icon, &DropShadow::default());
        assert_eq!(result.dimensions(), icon.dimensions());
    }

    #[test]
    fn opaque_foreground_pixels_survive_unchanged() {
        let icon = opaque_square(64, 16, 32);
        let result = apply_drop_shadow(&icon, &DropShadow::default());

        for y in 16..48 {
            for x in 16..48 {
                assert_eq!(result.get_pixel(x, y), icon.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn shadow_extends_beyond_silhouette() {
        let icon = opaque_square(64, 16, 32);
        let result = apply_drop_shadow(&icon, &DropShadow::default());

        // Just outside the square on the offset side, the blurred
        // silhouette should leave visible alpha.
        let below = result.get_pixel(32, 49);
        assert!(below[3] > 0, "shadow should spill below the square");
        assert!(below[3] < 255);

        // Well away from the square nothing is drawn.
        assert_eq!(result.get_pixel(2, 2)[3], 0);
    }

    #[test]
    fn shadow_uses_configured_color() {
        let icon = opaque_square(64, 16, 32);
        let shadow = DropShadow {
            color: Rgba([40, 0, 80, 255]),
            offset: 2,
            blur_radius: 3,
        };
        let result = apply_drop_shadow(&icon, &shadow);

        let spill = result.get_pixel(32, 50);
        assert!(spill[3] > 0);
        assert!(spill[0] > 0 || spill[2] > 0, "spill should carry the shadow color");
        assert_eq!(spill[1], 0);
    }
}
