//! `sizes` attribute parsing.
//!
//! Turns a string like `(min-width: 1024px) 50vw, (min-width: 680px) 400px, 100vw`
//! into an ordered list of [`SizeRule`]s. Media-condition clauses are handed
//! to a [`MediaTokenizer`]; [`CssTokenizer`] is the default.
//!
//! # Example
//!
//! ```
//! use zensizes::sizes::{self, MediaFeature};
//!
//! let rules = sizes::parse("(min-width: 680px) 400px, 100vw").unwrap();
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules[0].conditions[0].feature, MediaFeature::MinWidth);
//! assert_eq!(rules[0].conditions[0].value(), "680px");
//! assert_eq!(rules[0].width, "400px");
//! assert!(rules[1].conditions.is_empty());
//! ```

mod parse;
mod tokenizer;

#[cfg(feature = "cssparser")]
pub use tokenizer::CssTokenizer;
pub use tokenizer::{MediaNode, MediaTokenizer};

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::SizesError;
use crate::orientation::Viewport;

/// Width used when no rule matches and no unconditional rule was given.
pub const FALLBACK_WIDTH: &str = "100vw";

/// The viewport dimensions a condition can test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MediaFeature {
    /// `viewport.width >= value`
    MinWidth,
    /// `viewport.width <= value`
    MaxWidth,
    /// `viewport.height >= value`
    MinHeight,
    /// `viewport.height <= value`
    MaxHeight,
}

impl MediaFeature {
    /// Look up a feature by its CSS name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        [
            Self::MinWidth,
            Self::MaxWidth,
            Self::MinHeight,
            Self::MaxHeight,
        ]
        .into_iter()
        .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// CSS name of the feature.
    pub fn name(self) -> &'static str {
        match self {
            Self::MinWidth => "min-width",
            Self::MaxWidth => "max-width",
            Self::MinHeight => "min-height",
            Self::MaxHeight => "max-height",
        }
    }
}

/// One `(feature: value)` test. Values are always pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// Tested dimension and comparison.
    pub feature: MediaFeature,
    /// Threshold in CSS pixels.
    pub px: f64,
}

impl Condition {
    /// Create a condition.
    pub const fn new(feature: MediaFeature, px: f64) -> Self {
        Self { feature, px }
    }

    /// The threshold rendered back as a `px` value, e.g. `"680px"`.
    pub fn value(&self) -> String {
        alloc::format!("{}px", self.px)
    }

    /// Whether the condition holds for a viewport.
    pub fn matches(&self, viewport: Viewport) -> bool {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        match self.feature {
            MediaFeature::MinWidth => width >= self.px,
            MediaFeature::MaxWidth => width <= self.px,
            MediaFeature::MinHeight => height >= self.px,
            MediaFeature::MaxHeight => height <= self.px,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {}px)", self.feature.name(), self.px)
    }
}

/// A width that applies when all of its conditions hold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeRule {
    /// ANDed conditions. Empty means the rule always matches.
    pub conditions: Vec<Condition>,
    /// Width token, e.g. `"400px"` or `"50vw"`. Resolved per viewport.
    pub width: String,
}

impl SizeRule {
    /// An unconditional rule.
    pub fn fallback(width: impl Into<String>) -> Self {
        Self {
            conditions: Vec::new(),
            width: width.into(),
        }
    }

    /// A rule with conditions.
    pub fn when(conditions: Vec<Condition>, width: impl Into<String>) -> Self {
        Self {
            conditions,
            width: width.into(),
        }
    }

    /// Whether every condition holds for the viewport.
    pub fn matches(&self, viewport: Viewport) -> bool {
        self.conditions.iter().all(|c| c.matches(viewport))
    }
}

impl fmt::Display for SizeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.conditions.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{c}")?;
        }
        if !self.conditions.is_empty() {
            f.write_str(" ")?;
        }
        f.write_str(&self.width)
    }
}

/// Pick the first rule that matches the viewport.
///
/// Returns the implicit [`FALLBACK_WIDTH`] when nothing matches.
pub fn select<'a>(rules: &'a [SizeRule], viewport: Viewport) -> &'a str {
    rules
        .iter()
        .find(|r| r.matches(viewport))
        .map_or(FALLBACK_WIDTH, |r| r.width.as_str())
}

/// Parse a `sizes` string with the default [`CssTokenizer`].
#[cfg(feature = "cssparser")]
pub fn parse(sizes: &str) -> Result<Vec<SizeRule>, SizesError> {
    parse_with(sizes, &CssTokenizer)
}

/// Parse a `sizes` string with a caller-supplied tokenizer.
pub fn parse_with<T: MediaTokenizer + ?Sized>(
    sizes: &str,
    tokenizer: &T,
) -> Result<Vec<SizeRule>, SizesError> {
    parse::parse_sizes(sizes, tokenizer)
}
