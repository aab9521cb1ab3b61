//! Per-device image resolution.
//!
//! For every viewport a device can present (natural, and rotated when the
//! device rotates) pick the first matching rule, turn its width token into
//! CSS pixels, and multiply by each pixel density.

use alloc::string::String;
use alloc::vec::Vec;

use num_traits::Float;

use crate::device::Device;
use crate::error::SizesError;
use crate::orientation::{Orientation, Viewport};
use crate::sizes::{self, SizeRule};
use crate::unit::UnitValue;

/// One raster image a device needs.
///
/// `density` is compared and hashed by bit pattern, so descriptors can be
/// deduplicated.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedImage {
    /// Raster width in device pixels, rounded up.
    pub width: u32,
    /// Pixel density the width was computed for.
    pub density: f64,
    /// Orientation of the viewport that produced it.
    pub orientation: Orientation,
}

impl PartialEq for ResolvedImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.density.to_bits() == other.density.to_bits()
            && self.orientation == other.orientation
    }
}

impl Eq for ResolvedImage {}

impl core::hash::Hash for ResolvedImage {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.density.to_bits().hash(state);
        self.orientation.hash(state);
    }
}

/// CSS pixel width a width token implies for a viewport.
///
/// `vw` is relative to the viewport width; `px` or no unit is absolute.
pub fn css_width(width: &str, viewport: Viewport) -> Result<f64, SizesError> {
    let v = UnitValue::parse(width)?;
    if v.is("vw") {
        Ok(f64::from(viewport.width) * v.magnitude / 100.0)
    } else if v.unit.is_empty() || v.is("px") {
        Ok(v.magnitude)
    } else {
        Err(SizesError::UnsupportedUnit {
            unit: String::from(v.unit),
            value: String::from(width.trim()),
        })
    }
}

/// Device pixels for a CSS width at a density. Never rounds down; at least 1.
pub fn raster_width(css_width: f64, density: f64) -> u32 {
    let px = Float::ceil(css_width * density);
    if px < 1.0 {
        1
    } else if px >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        px as u32
    }
}

/// Images one viewport needs, one per density in device order.
pub fn viewport_images(
    rules: &[SizeRule],
    viewport: Viewport,
    densities: &[f64],
) -> Result<Vec<ResolvedImage>, SizesError> {
    let width = sizes::select(rules, viewport);
    let css = css_width(width, viewport)?;
    let orientation = viewport.orientation();
    log::trace!(
        "{}x{} ({orientation}): {width:?} -> {css}px",
        viewport.width,
        viewport.height
    );
    Ok(densities
        .iter()
        .map(|&density| ResolvedImage {
            width: raster_width(css, density),
            density,
            orientation,
        })
        .collect())
}

/// Images a device needs: natural viewport first, then the rotated one.
///
/// No deduplication; identical descriptors from both orientations are kept.
pub fn resolve_device(
    rules: &[SizeRule],
    device: &Device,
) -> Result<Vec<ResolvedImage>, SizesError> {
    let mut images = Vec::with_capacity(device.densities.len() * 2);
    for viewport in device.viewports() {
        images.extend(viewport_images(rules, viewport, &device.densities)?);
    }
    Ok(images)
}
