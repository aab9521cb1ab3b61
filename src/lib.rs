//! Responsive image width planning from CSS `sizes` attributes.
//!
//! Given a `sizes` string and a catalog of target devices, compute the raster
//! widths a site must generate so every device, in every orientation and at
//! every pixel density, gets an image at least as wide as it renders.
//! Pure computation — no I/O, no pixel operations, `no_std` + `alloc`
//! compatible (the default tokenizer needs `std`).
//!
//! # Modules
//!
//! - [`sizes`] — `sizes` attribute parsing, media conditions, rule selection
//! - [`resolve`] — per-device resolution of rules to raster widths
//! - [`plan`] — catalog-wide aggregation and configuration
//! - [`similarity`] — dropping sizes that look the same as a larger one
//! - [`device`] — devices and the default catalog
//! - [`orientation`] — landscape/portrait and simulated rotation
//! - [`unit`] — `400px` / `100vw` scalar parsing
//!
//! # Example
//!
//! ```
//! let widths = zensizes::widths_from_sizes("(min-width: 1024px) 50vw, 100vw", None).unwrap();
//! assert!(!widths.is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod device;
pub mod error;
pub mod orientation;
pub mod plan;
pub mod resolve;
pub mod similarity;
pub mod sizes;
pub mod unit;

pub use device::{DEVICES, Device};
pub use error::SizesError;
pub use orientation::{Orientation, Viewport};
pub use plan::SizesPlan;
#[cfg(feature = "cssparser")]
pub use plan::{catalog_images, device_images, widths_from_sizes};
pub use resolve::{ResolvedImage, resolve_device};
pub use similarity::{
    Candidate, DEFAULT_MIN_SCALE, Dimension, filter_candidates, filter_dimensions, filter_sizes,
};
#[cfg(feature = "cssparser")]
pub use sizes::CssTokenizer;
pub use sizes::{Condition, MediaFeature, MediaNode, MediaTokenizer, SizeRule};
pub use unit::UnitValue;
