//! Catalog-wide planning: which images to generate for a `sizes` string.
//!
//! [`SizesPlan`] holds the configuration (device catalog, similarity factor,
//! tokenizer). The free functions use the default plan.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::device::{DEVICES, Device};
use crate::error::SizesError;
use crate::resolve::{ResolvedImage, resolve_device};
use crate::similarity::{DEFAULT_MIN_SCALE, filter_sizes};
use crate::sizes::{self, MediaTokenizer, SizeRule};

#[cfg(feature = "cssparser")]
use crate::sizes::CssTokenizer;

/// Image planning configuration.
///
/// # Example
///
/// ```
/// use zensizes::{Device, SizesPlan};
///
/// let devices = [
///     Device::new(1280, 800, vec![1.0, 2.0]),
///     Device::new(375, 667, vec![2.0]).rotatable(),
/// ];
/// let widths = SizesPlan::new()
///     .devices(&devices)
///     .min_scale(1.0)
///     .widths("(min-width: 1024px) 50vw, 100vw")
///     .unwrap();
///
/// // 640 / 1280 from the desktop, 750 portrait and 1334 landscape from the phone
/// assert_eq!(widths, vec![1334, 1280, 750, 640]);
/// ```
#[derive(Clone, Debug)]
pub struct SizesPlan<'a, T> {
    devices: &'a [Device],
    min_scale: f64,
    tokenizer: T,
}

#[cfg(feature = "cssparser")]
impl SizesPlan<'static, CssTokenizer> {
    /// Default catalog, default factor, [`CssTokenizer`].
    pub fn new() -> Self {
        Self::with_tokenizer(CssTokenizer)
    }
}

#[cfg(feature = "cssparser")]
impl Default for SizesPlan<'static, CssTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: MediaTokenizer> SizesPlan<'a, T> {
    /// Default catalog and factor with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> SizesPlan<'static, T> {
        SizesPlan {
            devices: DEVICES,
            min_scale: DEFAULT_MIN_SCALE,
            tokenizer,
        }
    }

    /// Replace the device catalog.
    pub fn devices<'b>(self, devices: &'b [Device]) -> SizesPlan<'b, T> {
        SizesPlan {
            devices,
            min_scale: self.min_scale,
            tokenizer: self.tokenizer,
        }
    }

    /// Set the similarity factor, in `(0, 1]`. Checked when widths are computed.
    pub fn min_scale(mut self, factor: f64) -> Self {
        self.min_scale = factor;
        self
    }

    /// The configured catalog.
    pub fn catalog(&self) -> &'a [Device] {
        self.devices
    }

    /// Parse a `sizes` string with this plan's tokenizer.
    pub fn rules(&self, sizes: &str) -> Result<Vec<SizeRule>, SizesError> {
        sizes::parse_with(sizes, &self.tokenizer)
    }

    /// Distinct raster widths for the whole catalog, similar ones dropped.
    ///
    /// Sorted largest first.
    pub fn widths(&self, sizes: &str) -> Result<Vec<u32>, SizesError> {
        let rules = self.rules(sizes)?;
        self.widths_for_rules(&rules)
    }

    /// [`widths`](Self::widths) for rules parsed elsewhere.
    pub fn widths_for_rules(&self, rules: &[SizeRule]) -> Result<Vec<u32>, SizesError> {
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(SizesError::InvalidScale {
                factor: self.min_scale,
            });
        }
        let mut distinct = BTreeSet::new();
        for device in self.devices {
            distinct.extend(resolve_device(rules, device)?.iter().map(|i| i.width));
        }
        let distinct: Vec<u32> = distinct.into_iter().collect();
        let kept = filter_sizes(&distinct, self.min_scale);
        log::debug!(
            "{} rules over {} devices: {} distinct widths, {} kept at min scale {}",
            rules.len(),
            self.devices.len(),
            distinct.len(),
            kept.len(),
            self.min_scale
        );
        Ok(kept)
    }

    /// Images one device needs, natural orientation first. Not deduplicated.
    pub fn device_images(
        &self,
        sizes: &str,
        device: &Device,
    ) -> Result<Vec<ResolvedImage>, SizesError> {
        resolve_device(&self.rules(sizes)?, device)
    }

    /// Distinct image descriptors over the whole catalog, in first-seen order.
    pub fn images(&self, sizes: &str) -> Result<Vec<ResolvedImage>, SizesError> {
        let rules = self.rules(sizes)?;
        let mut images: Vec<ResolvedImage> = Vec::new();
        for device in self.devices {
            for image in resolve_device(&rules, device)? {
                if !images.contains(&image) {
                    images.push(image);
                }
            }
        }
        log::debug!(
            "{} rules over {} devices: {} distinct images",
            rules.len(),
            self.devices.len(),
            images.len()
        );
        Ok(images)
    }
}

/// Widths to generate for `sizes` across the default catalog.
///
/// `min_scale` defaults to [`DEFAULT_MIN_SCALE`].
///
/// ```
/// let widths = zensizes::widths_from_sizes("100vw", None).unwrap();
/// assert!(widths.windows(2).all(|w| w[0] > w[1]));
/// ```
#[cfg(feature = "cssparser")]
pub fn widths_from_sizes(sizes: &str, min_scale: Option<f64>) -> Result<Vec<u32>, SizesError> {
    SizesPlan::new()
        .min_scale(min_scale.unwrap_or(DEFAULT_MIN_SCALE))
        .widths(sizes)
}

/// Images one device needs for `sizes`.
#[cfg(feature = "cssparser")]
pub fn device_images(sizes: &str, device: &Device) -> Result<Vec<ResolvedImage>, SizesError> {
    SizesPlan::new().device_images(sizes, device)
}

/// Distinct image descriptors for `sizes` across the default catalog.
#[cfg(feature = "cssparser")]
pub fn catalog_images(sizes: &str) -> Result<Vec<ResolvedImage>, SizesError> {
    SizesPlan::new().images(sizes)
}
