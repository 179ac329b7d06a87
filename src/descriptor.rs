//! Descriptor metadata accompanying a generated icon set.
//!
//! Apple-style platforms expect a `Contents.json` manifest describing each
//! image by logical size, idiom, file name, and scale; web platforms only
//! need an ordered list of file names for the external manifest /
//! service-worker generator. Both are serialized with `serde_json`, which
//! guarantees well-formed separators regardless of entry count.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "images": [
//!     { "size": "60x60", "idiom": "phone", "filename": "icon-120.png", "scale": "2x" }
//!   ],
//!   "info": { "version": 1, "author": "xcode" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{idiom, logical_size, IconVariant, Platform};
use crate::error::IconError;

/// Apple-style icon set manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsManifest {
    /// One entry per catalog variant, in catalog order.
    pub images: Vec<ImageEntry>,

    /// Fixed trailing info block.
    pub info: ManifestInfo,
}

/// One image record within a [`ContentsManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Logical size, e.g. `"60x60"` for a 120px @2x variant.
    pub size: String,
    /// Device idiom derived from the pixel size.
    pub idiom: String,
    /// Relative file name of the raster.
    pub filename: String,
    /// Density tier, e.g. `"2x"`.
    pub scale: String,
}

/// The `info` block every Apple-style manifest carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

impl ContentsManifest {
    /// Builds a manifest from catalog variants, preserving their order.
    pub fn from_variants(variants: &[IconVariant]) -> Self {
        let images = variants
            .iter()
            .map(|variant| ImageEntry {
                size: logical_size(variant.pixel_size, variant.scale_factor),
                idiom: idiom(variant.pixel_size).as_str().to_string(),
                filename: variant.file_name.clone(),
                scale: format!("{}x", variant.scale_factor),
            })
            .collect();

        Self {
            images,
            info: ManifestInfo::default(),
        }
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the web-style descriptor: the ordered file-name list.
pub fn file_list(variants: &[IconVariant]) -> Vec<String> {
    variants.iter().map(|v| v.file_name.clone()).collect()
}

/// Serializes the descriptor a platform requires, if it has one.
///
/// Returns the descriptor file name and its serialized contents, or `None`
/// for platforms that only ship rasters.
pub fn descriptor_for(
    platform: Platform,
    variants: &[IconVariant],
) -> Result<Option<(&'static str, String)>, IconError> {
    match platform {
        Platform::Desktop | Platform::Mobile => {
            let manifest = ContentsManifest::from_variants(variants);
            Ok(Some(("Contents.json", manifest.to_json_pretty()?)))
        }
        Platform::Web => {
            let names = file_list(variants);
            Ok(Some(("icons.json", serde_json::to_string_pretty(&names)?)))
        }
        Platform::Taskbar | Platform::Favicon | Platform::TouchFavicon => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn manifest_entry_count_matches_catalog() {
        for platform in [Platform::Desktop, Platform::Mobile] {
            let variants = catalog(platform);
            let manifest = ContentsManifest::from_variants(&variants);
            assert_eq!(manifest.images.len(), variants.len());
        }
    }

    #[test]
    fn mobile_manifest_fields() {
        let variants = catalog(Platform::Mobile);
        let manifest = ContentsManifest::from_variants(&variants);

        let first = &manifest.images[0];
        assert_eq!(first.size, "60x60");
        assert_eq!(first.idiom, "phone");
        assert_eq!(first.filename, "icon-120.png");
        assert_eq!(first.scale, "2x");

        let tablet = &manifest.images[1];
        assert_eq!(tablet.size, "76x76");
        assert_eq!(tablet.idiom, "tablet");

        let marketing = &manifest.images[4];
        assert_eq!(marketing.size, "1024x1024");
        assert_eq!(marketing.idiom, "marketing");
        assert_eq!(marketing.scale, "1x");
    }

    #[test]
    fn manifest_serializes_without_trailing_separator() {
        let variants = catalog(Platform::Mobile);
        let manifest = ContentsManifest::from_variants(&variants);
        let json = manifest.to_json_pretty().unwrap();

        assert!(!json.contains("},\n  ]"));
        assert!(!json.contains(",]"));

        // Parse-back proves the document is well formed and ordered.
        let restored: ContentsManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.images.len(), 5);
        assert_eq!(restored.images[4].filename, "icon-1024.png");
        assert_eq!(restored.info.version, 1);
        assert_eq!(restored.info.author, "xcode");
    }

    #[test]
    fn web_descriptor_lists_file_names_in_order() {
        let variants = catalog(Platform::Web);
        let names = file_list(&variants);
        assert_eq!(names, vec!["icon-192.png", "icon-512.png"]);
    }

    #[test]
    fn descriptor_presence_per_platform() {
        for platform in Platform::ALL {
            let variants = catalog(platform);
            let descriptor = descriptor_for(platform, &variants).unwrap();
            match platform {
                Platform::Desktop | Platform::Mobile => {
                    assert_eq!(descriptor.unwrap().0, "Contents.json");
                }
                Platform::Web => {
                    assert_eq!(descriptor.unwrap().0, "icons.json");
                }
                _ => assert!(descriptor.is_none()),
            }
        }
    }
}
