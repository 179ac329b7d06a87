//! Source and generated icon types.
//!
//! This module provides [`SourceImage`], the validated square input every
//! generation run starts from, and [`IconSet`], the ordered collection of
//! rendered variants produced for a single platform.

use std::path::Path;

use image::RgbaImage;

use crate::catalog::IconVariant;
use crate::error::IconError;

/// The decoded source image for one generation run.
///
/// A `SourceImage` is always square; this is validated when the value is
/// constructed, before any raster work begins. The pixel data is never
/// mutated; every variant is rendered from a fresh copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    data: RgbaImage,
}

impl SourceImage {
    /// Loads and validates a source image from disk.
    ///
    /// The file is decoded to 8-bit RGBA. Returns
    /// [`IconError::NonSquareSource`] if width and height differ.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let data = image::open(path.as_ref())?.to_rgba8();
        Self::from_image(data)
    }

    /// Wraps an already-decoded pixel buffer, validating squareness.
    pub fn from_image(data: RgbaImage) -> Result<Self, IconError> {
        if data.width() != data.height() {
            return Err(IconError::NonSquareSource {
                width: data.width(),
                height: data.height(),
            });
        }
        Ok(Self { data })
    }

    /// Returns the side length in pixels.
    pub fn side(&self) -> u32 {
        self.data.width()
    }

    /// Returns the underlying pixel buffer.
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }
}

/// One rendered icon variant: the catalog entry plus its pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    /// The catalog entry this buffer was rendered for.
    pub variant: IconVariant,

    /// The rendered pixels, exactly `variant.pixel_size` on each side.
    pub image: RgbaImage,
}

/// The rendered icon set for one platform, in catalog order.
///
/// An `IconSet` only lives for the duration of a single generation run;
/// it is produced by the assembler, written to disk, and discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The rendered variants, in the order the platform catalog declares.
    pub icons: Vec<GeneratedIcon>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { icons: Vec::new() }
    }

    /// Appends a rendered variant to the set.
    pub fn push(&mut self, icon: GeneratedIcon) {
        self.icons.push(icon);
    }

    /// Returns the number of rendered variants.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if the set contains no variants.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns an iterator over the rendered variants.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedIcon> {
        self.icons.iter()
    }

    /// Returns the catalog entries of the set, in order.
    pub fn variants(&self) -> Vec<IconVariant> {
        self.icons.iter().map(|icon| icon.variant.clone()).collect()
    }
}

impl IntoIterator for IconSet {
    type Item = GeneratedIcon;
    type IntoIter = std::vec::IntoIter<GeneratedIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a GeneratedIcon;
    type IntoIter = std::slice::Iter<'a, GeneratedIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_square_source() {
        let source = SourceImage::from_image(RgbaImage::new(64, 64)).unwrap();
        assert_eq!(source.side(), 64);
    }

    #[test]
    fn rejects_non_square_source() {
        let result = SourceImage::from_image(RgbaImage::new(64, 32));
        assert!(matches!(
            result,
            Err(IconError::NonSquareSource {
                width: 64,
                height: 32
            })
        ));
    }

    #[test]
    fn icon_set_preserves_order() {
        use crate::catalog::{catalog, Platform};

        let mut set = IconSet::new();
        for variant in catalog(Platform::Mobile) {
            let size = variant.pixel_size;
            set.push(GeneratedIcon {
                variant,
                image: RgbaImage::new(size, size),
            });
        }

        assert_eq!(set.len(), 5);
        let sizes: Vec<u32> = set.iter().map(|i| i.variant.pixel_size).collect();
        assert_eq!(sizes, vec![120, 152, 167, 180, 1024]);
    }
}
