//! Scalar value parsing: `"400px"` → `400.0` + `"px"`.

use alloc::string::String;

use crate::error::SizesError;

/// A number with its unit suffix, borrowed from the source string.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnitValue<'a> {
    /// Numeric magnitude.
    pub magnitude: f64,
    /// Unit suffix, lowercased by the caller if needed. Empty when absent.
    pub unit: &'a str,
}

impl<'a> UnitValue<'a> {
    /// Split a CSS-like scalar into magnitude and unit.
    ///
    /// Accepts an optional sign, digits, and a decimal point. Surrounding
    /// whitespace is ignored. The remainder after the number is the unit.
    ///
    /// ```
    /// use zensizes::UnitValue;
    ///
    /// let v = UnitValue::parse("71.5%").unwrap();
    /// assert_eq!(v.magnitude, 71.5);
    /// assert_eq!(v.unit, "%");
    /// ```
    pub fn parse(s: &'a str) -> Result<Self, SizesError> {
        let s = s.trim();
        let split = s
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
            .map_or(s.len(), |(i, _)| i);
        let (number, unit) = s.split_at(split);
        let magnitude = number
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SizesError::InvalidNumber {
                value: String::from(s),
            })?;
        Ok(Self {
            magnitude,
            unit: unit.trim(),
        })
    }

    /// Whether the unit matches `unit`, ignoring ASCII case.
    pub fn is(&self, unit: &str) -> bool {
        self.unit.eq_ignore_ascii_case(unit)
    }

    /// Pixel magnitude, or an error naming the unit when it is not `px`.
    pub fn px(&self, source: &str) -> Result<f64, SizesError> {
        if self.is("px") {
            Ok(self.magnitude)
        } else {
            Err(SizesError::UnsupportedUnit {
                unit: String::from(self.unit),
                value: String::from(source),
            })
        }
    }
}
