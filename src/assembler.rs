//! Per-platform generation: rendering, raster writes, descriptors.
//!
//! [`IconAssembler`] drives one generation run: it validates the inputs up
//! front, then walks each selected platform's catalog in declared order,
//! rendering every variant (scaling, plus masking and shadowing for
//! maskable entries), writing the PNG files, and finally emitting the
//! platform's descriptor. Runs are synchronous and deterministic: the same
//! source bytes and options produce byte-identical output. Writes are not
//! transactional, so a failed run may leave a partially populated directory.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::catalog::{catalog, IconVariant, Platform};
use crate::descriptor::descriptor_for;
use crate::error::IconError;
use crate::icon::{GeneratedIcon, IconSet, SourceImage};
use crate::layer::mask::apply_mask;
use crate::layer::shadow::apply_drop_shadow;
use crate::layer::{DropShadow, MaskProportions};
use crate::scale::scale;

/// Rendering options shared by every variant in a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Drop shadow applied behind maskable variants.
    pub shadow: DropShadow,
    /// Safe-zone proportions for maskable variants.
    pub mask: MaskProportions,
}

/// Orchestrates one generation run over a single source image.
pub struct IconAssembler<'a> {
    source: &'a SourceImage,
    options: RenderOptions,
}

impl<'a> IconAssembler<'a> {
    /// Creates an assembler with default shadow and mask options.
    pub fn new(source: &'a SourceImage) -> Self {
        Self {
            source,
            options: RenderOptions::default(),
        }
    }

    /// Creates an assembler with explicit rendering options.
    pub fn with_options(source: &'a SourceImage, options: RenderOptions) -> Self {
        Self { source, options }
    }

    /// Renders the pixel buffer for a single catalog variant.
    ///
    /// Non-maskable variants are plain scales of the source; maskable
    /// variants additionally get the rounded safe-zone mask and the drop
    /// shadow. The result is exactly `variant.pixel_size` on each side.
    pub fn render_variant(&self, variant: &IconVariant) -> Result<RgbaImage, IconError> {
        if variant.maskable {
            let masked = apply_mask(self.source.data(), variant.pixel_size, &self.options.mask)?;
            Ok(apply_drop_shadow(&masked, &self.options.shadow))
        } else {
            Ok(scale(
                self.source.data(),
                variant.pixel_size,
                variant.pixel_size,
            ))
        }
    }

    /// Renders a platform's full catalog into an in-memory icon set.
    pub fn render_platform(&self, platform: Platform) -> Result<IconSet, IconError> {
        let mut set = IconSet::new();

        for variant in catalog(platform) {
            let image = self.render_variant(&variant)?;
            set.push(GeneratedIcon { variant, image });
        }

        Ok(set)
    }

    /// Generates the selected platforms into `output_dir`.
    ///
    /// Validation runs before any raster work: the output directory must
    /// exist, and the source must be at least as large as the largest
    /// requested variant. Each platform gets its own subdirectory holding
    /// one PNG per catalog entry plus the platform's descriptor, if any.
    pub fn generate(&self, output_dir: &Path, platforms: &[Platform]) -> Result<(), IconError> {
        if !output_dir.is_dir() {
            return Err(IconError::MissingOutputDir(output_dir.to_path_buf()));
        }

        let required = platforms
            .iter()
            .flat_map(|&platform| catalog(platform))
            .map(|variant| variant.pixel_size)
            .max()
            .unwrap_or(0);
        if self.source.side() < required {
            return Err(IconError::SourceTooSmall {
                side: self.source.side(),
                required,
            });
        }

        for &platform in platforms {
            let platform_dir = output_dir.join(platform.directory());
            fs::create_dir_all(&platform_dir)?;

            let set = self.render_platform(platform)?;
            for icon in &set {
                write_png(&icon.image, &platform_dir.join(&icon.variant.file_name))?;
            }

            if let Some((name, contents)) = descriptor_for(platform, &set.variants())? {
                fs::write(platform_dir.join(name), contents)?;
            }
        }

        Ok(())
    }
}

/// Encodes a pixel buffer as PNG and writes it in one shot.
fn write_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    fs::write(path, buffer)?;
    Ok(())
}
