//! Per-platform icon variant catalogs and classification.
//!
//! Each platform family declares the exact raster variants it requires as
//! an immutable table of [`IconVariant`] records. Apple platforms use a
//! slightly obscure notation where `32x32` and `16x16@2x` both describe an
//! icon that is 32x32 pixels in size; file names and descriptor fields are
//! derived from the logical (point) size and the scale factor.

use serde::{Deserialize, Serialize};

// ============================================================================
// Platforms
// ============================================================================

/// A platform family the pipeline can generate icons for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Desktop multi-density icon set, consumed by an external container
    /// packer (e.g. `iconutil` for `.icns`).
    Desktop,
    /// Mobile app icon set with an Apple-style descriptor.
    Mobile,
    /// Installable web app icons, referenced from a manifest.
    Web,
    /// Single-size taskbar icon.
    Taskbar,
    /// Browser favicon.
    Favicon,
    /// Mobile browser favicon (home-screen bookmark icon).
    TouchFavicon,
}

impl Platform {
    /// Every supported platform, in generation order.
    pub const ALL: [Platform; 6] = [
        Platform::Desktop,
        Platform::Mobile,
        Platform::Web,
        Platform::Taskbar,
        Platform::Favicon,
        Platform::TouchFavicon,
    ];

    /// Stable tag identifying the platform family.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Mobile => "mobile",
            Platform::Web => "web",
            Platform::Taskbar => "taskbar",
            Platform::Favicon => "favicon",
            Platform::TouchFavicon => "touch-favicon",
        }
    }

    /// Name of the output subdirectory for this platform.
    ///
    /// The desktop and mobile directories use the names their external
    /// consumers expect (`iconutil` and Xcode respectively).
    pub fn directory(&self) -> &'static str {
        match self {
            Platform::Desktop => "icon.iconset",
            Platform::Mobile => "AppIcon.appiconset",
            Platform::Web => "web",
            Platform::Taskbar => "taskbar",
            Platform::Favicon => "favicon",
            Platform::TouchFavicon => "touch-favicon",
        }
    }
}

// ============================================================================
// Variants
// ============================================================================

/// One required raster variant within a platform family.
///
/// Variants are immutable configuration data: the catalog tables below are
/// built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconVariant {
    /// Deterministic file name, derived from platform, size, and scale.
    pub file_name: String,
    /// Backing-store size in pixels; the rendered buffer matches exactly.
    pub pixel_size: u32,
    /// Density tier (1 for @1x, 2 for @2x, 3 for @3x).
    pub scale_factor: u32,
    /// Whether the variant gets the rounded safe-zone mask and drop shadow.
    pub maskable: bool,
    /// The platform family this variant belongs to.
    pub platform: Platform,
}

/// Returns the catalog of required variants for a platform, in declared order.
pub fn catalog(platform: Platform) -> Vec<IconVariant> {
    match platform {
        Platform::Desktop => {
            // Two density tiers per logical size.
            [16u32, 32, 128, 256, 512]
                .into_iter()
                .flat_map(|logical| {
                    [1u32, 2].into_iter().map(move |scale| IconVariant {
                        file_name: desktop_file_name(logical, scale),
                        pixel_size: logical * scale,
                        scale_factor: scale,
                        maskable: true,
                        platform,
                    })
                })
                .collect()
        }
        Platform::Mobile => [(120u32, 2u32), (152, 2), (167, 2), (180, 3), (1024, 1)]
            .iter()
            .map(|&(pixel_size, scale_factor)| IconVariant {
                file_name: format!("icon-{pixel_size}.png"),
                pixel_size,
                scale_factor,
                maskable: false,
                platform,
            })
            .collect(),
        Platform::Web => [192u32, 512]
            .iter()
            .map(|&pixel_size| IconVariant {
                file_name: format!("icon-{pixel_size}.png"),
                pixel_size,
                scale_factor: 1,
                maskable: true,
                platform,
            })
            .collect(),
        Platform::Taskbar => vec![IconVariant {
            file_name: "icon-48.png".to_string(),
            pixel_size: 48,
            scale_factor: 1,
            maskable: true,
            platform,
        }],
        Platform::Favicon => vec![IconVariant {
            file_name: "favicon.png".to_string(),
            pixel_size: 32,
            scale_factor: 1,
            maskable: false,
            platform,
        }],
        Platform::TouchFavicon => vec![IconVariant {
            file_name: "apple-favicon.png".to_string(),
            pixel_size: 180,
            scale_factor: 1,
            maskable: false,
            platform,
        }],
    }
}

/// Desktop file naming: `icon_{L}x{L}.png` at @1x, `icon_{L}x{L}@2x.png`
/// above, keyed by the logical size.
fn desktop_file_name(logical_size: u32, scale_factor: u32) -> String {
    if scale_factor == 1 {
        format!("icon_{logical_size}x{logical_size}.png")
    } else {
        format!("icon_{logical_size}x{logical_size}@{scale_factor}x.png")
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Device-class tag for an icon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    Marketing,
    Tablet,
    Phone,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Marketing => "marketing",
            Idiom::Tablet => "tablet",
            Idiom::Phone => "phone",
        }
    }
}

/// Classifies a pixel width into its device idiom.
///
/// 1024px is the marketing size; widths divisible by the tablet point grid
/// (76) are tablet; everything else is phone.
pub fn idiom(pixel_width: u32) -> Idiom {
    if pixel_width == 1024 {
        Idiom::Marketing
    } else if pixel_width % 76 == 0 {
        Idiom::Tablet
    } else {
        Idiom::Phone
    }
}

/// Formats the design-time point size, independent of backing-store density.
///
/// A 120px @2x variant has the logical size `"60x60"`. Uses integer
/// division.
pub fn logical_size(pixel_width: u32, scale_factor: u32) -> String {
    let points = pixel_width / scale_factor;
    format!("{points}x{points}")
}
