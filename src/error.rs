//! Error type shared by parsing, resolution and planning.

use alloc::string::String;

/// Sizes parsing or resolution error.
///
/// Every variant is fatal for the call that produced it: there is no
/// partial-result mode.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SizesError {
    /// A value uses a unit that is not allowed where it appears.
    ///
    /// Conditions accept only `px`; width tokens accept `px`, `vw`, or no unit.
    #[error("unsupported unit {unit:?} in {value:?}")]
    UnsupportedUnit { unit: String, value: String },

    /// A value has no numeric magnitude.
    #[error("invalid number in {value:?}")]
    InvalidNumber { value: String },

    /// A media feature other than `min-width`, `max-width`, `min-height`, `max-height`.
    #[error("unsupported media feature {feature:?}")]
    UnsupportedFeature { feature: String },

    /// The media-condition tokenizer could not read a clause.
    #[error("cannot tokenize media condition {clause:?}")]
    Tokenize { clause: String },

    /// Similarity factor outside `(0, 1]`.
    #[error("min scale must be in (0, 1], got {factor}")]
    InvalidScale { factor: f64 },
}
