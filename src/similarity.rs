//! Dropping candidate sizes that look the same as a larger one.
//!
//! Candidates are sorted largest first. The largest is always kept and
//! becomes the reference; each following candidate is kept only if its
//! scale product against the reference is below `factor`, in which case it
//! becomes the new reference. Everything else is discarded.
//!
//! # Example
//!
//! ```
//! use zensizes::filter_sizes;
//!
//! let kept = filter_sizes(&[200, 250, 380, 800, 801, 1000, 1050, 1100, 1440, 1900, 2000], 0.8);
//! assert_eq!(kept, vec![2000, 1440, 1100, 801, 380, 250, 200]);
//! ```

use alloc::vec::Vec;

/// Default similarity factor.
///
/// Two sizes whose scale product is at least this are considered
/// indistinguishable once rendered.
pub const DEFAULT_MIN_SCALE: f64 = 0.8;

/// Width × height candidate, compared by area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimension {
    /// Create a dimension.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel count.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Something the similarity filter can rank and compare.
pub trait Candidate: Copy {
    /// Sort key; larger sorts first.
    fn magnitude(&self) -> f64;

    /// Product of the per-axis ratios `self / reference`.
    fn scale_product(&self, reference: &Self) -> f64;
}

/// A flat width scales both axes by the same ratio.
impl Candidate for u32 {
    fn magnitude(&self) -> f64 {
        f64::from(*self)
    }

    fn scale_product(&self, reference: &Self) -> f64 {
        let ratio = f64::from(*self) / f64::from(*reference);
        ratio * ratio
    }
}

impl Candidate for Dimension {
    fn magnitude(&self) -> f64 {
        self.area() as f64
    }

    fn scale_product(&self, reference: &Self) -> f64 {
        (f64::from(self.width) / f64::from(reference.width))
            * (f64::from(self.height) / f64::from(reference.height))
    }
}

/// Filter any candidate list. Output is sorted largest first.
pub fn filter_candidates<C: Candidate>(candidates: &[C], factor: f64) -> Vec<C> {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    let mut kept = alloc::vec![first];
    let mut reference = first;
    for probe in iter {
        if probe.scale_product(&reference) < factor {
            kept.push(probe);
            reference = probe;
        }
    }
    kept
}

/// Filter flat widths.
pub fn filter_sizes(widths: &[u32], factor: f64) -> Vec<u32> {
    filter_candidates(widths, factor)
}

/// Filter width × height pairs by area.
pub fn filter_dimensions(dimensions: &[Dimension], factor: f64) -> Vec<Dimension> {
    filter_candidates(dimensions, factor)
}
