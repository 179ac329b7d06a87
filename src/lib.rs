//! polyicon: Multi-platform application icon generation
//!
//! This crate turns one high-resolution square source image into the full
//! set of raster variants each platform requires: desktop multi-density
//! icon sets, mobile app icons, installable web app icons, taskbar icons,
//! and favicons. Adaptive ("maskable") variants get the rounded safe-zone
//! mask and drop shadow those formats expect, and every platform's
//! descriptor metadata (`Contents.json`, web file lists) is emitted
//! alongside the rasters.
//!
//! # Example
//!
//! ```no_run
//! use polyicon::{IconAssembler, Platform, SourceImage};
//!
//! # fn main() -> Result<(), polyicon::IconError> {
//! let source = SourceImage::open("icon-1024.png")?;
//! let assembler = IconAssembler::new(&source);
//! assembler.generate("build/icons".as_ref(), &Platform::ALL)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! Each catalog variant flows through a fixed pipeline: progressive
//! bilinear scaling ([`scale`]), then, for maskable variants, the
//! rounded-rectangle safe-zone mask ([`layer::mask`]) and a Gaussian drop
//! shadow ([`layer::shadow`]). Catalogs and classification live in
//! [`catalog`], descriptor serialization in [`descriptor`], and
//! orchestration in [`assembler`].
//!
//! Runs are single-threaded and deterministic: identical source bytes and
//! options produce byte-identical output. External concerns like CLI
//! orchestration, signing, and packing rasters into native containers
//! (`.icns`) are out of scope; this crate produces the directories those
//! tools consume.

pub mod assembler;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod icon;
pub mod layer;
pub mod scale;

pub use assembler::{IconAssembler, RenderOptions};
pub use catalog::{catalog, idiom, logical_size, IconVariant, Idiom, Platform};
pub use descriptor::{ContentsManifest, ImageEntry, ManifestInfo};
pub use error::IconError;
pub use icon::{GeneratedIcon, IconSet, SourceImage};
pub use layer::{DropShadow, MaskGeometry, MaskProportions};
pub use scale::scale;
