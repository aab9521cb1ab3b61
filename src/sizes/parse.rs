//! Segment splitting and condition extraction.

use alloc::string::String;
use alloc::vec::Vec;

use super::tokenizer::{MediaNode, MediaTokenizer};
use super::{Condition, MediaFeature, SizeRule};
use crate::error::SizesError;
use crate::unit::UnitValue;

/// Parse a full `sizes` string into rules, in source order.
pub(crate) fn parse_sizes<T: MediaTokenizer + ?Sized>(
    sizes: &str,
    tokenizer: &T,
) -> Result<Vec<SizeRule>, SizesError> {
    split_segments(sizes)
        .map(|segment| parse_segment(segment, tokenizer))
        .collect()
}

/// Split on commas. Commas only appear at the top level in valid input.
fn split_segments(sizes: &str) -> impl Iterator<Item = &str> {
    sizes.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// `[condition-clause] width-token`. A segment without whitespace is an
/// unconditional width.
fn parse_segment<T: MediaTokenizer + ?Sized>(
    segment: &str,
    tokenizer: &T,
) -> Result<SizeRule, SizesError> {
    let Some((clause, width)) = segment.rsplit_once(char::is_whitespace) else {
        return Ok(SizeRule::fallback(segment));
    };
    let clause = clause.trim_end();
    Ok(SizeRule::when(parse_conditions(clause, tokenizer)?, width))
}

/// Tokenize a clause and keep its feature expressions.
///
/// `and` is skipped. Any other keyword ends the clause: conditions read so
/// far are kept, the rest is ignored.
fn parse_conditions<T: MediaTokenizer + ?Sized>(
    clause: &str,
    tokenizer: &T,
) -> Result<Vec<Condition>, SizesError> {
    let mut conditions = Vec::new();
    for node in tokenizer.tokenize(strip_outer_parens(clause))? {
        match node {
            MediaNode::FeatureExpression { feature, value } => {
                conditions.push(parse_condition(&feature, &value)?);
            }
            MediaNode::Keyword(k) if k.eq_ignore_ascii_case("and") => {}
            MediaNode::Keyword(k) => {
                log::warn!(
                    "unsupported keyword {k:?} in {clause:?}, ignoring the rest of the clause"
                );
                break;
            }
            MediaNode::MediaType(_) => {}
        }
    }
    Ok(conditions)
}

fn parse_condition(feature: &str, value: &str) -> Result<Condition, SizesError> {
    let feature =
        MediaFeature::from_name(feature).ok_or_else(|| SizesError::UnsupportedFeature {
            feature: String::from(feature),
        })?;
    let px = UnitValue::parse(value)?.px(value)?;
    Ok(Condition::new(feature, px))
}

/// Remove a redundant outer `( … )` around several separately
/// parenthesized conditions.
///
/// Only fires when the interior contains `)(` with nothing in between, so
/// `((a) and (b))` is passed through untouched.
fn strip_outer_parens(clause: &str) -> &str {
    match clause.strip_prefix('(').and_then(|c| c.strip_suffix(')')) {
        Some(inner) if inner.contains(")(") => inner,
        _ => clause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits on whitespace: `(feature:value)` groups and bare keywords.
    fn simple_tokenizer(clause: &str) -> Result<Vec<MediaNode>, SizesError> {
        clause
            .split_whitespace()
            .map(|word| {
                if let Some(inner) = word.strip_prefix('(').and_then(|w| w.strip_suffix(')')) {
                    let (f, v) = inner.split_once(':').ok_or_else(|| SizesError::Tokenize {
                        clause: String::from(clause),
                    })?;
                    Ok(MediaNode::FeatureExpression {
                        feature: String::from(f),
                        value: String::from(v),
                    })
                } else {
                    Ok(MediaNode::Keyword(String::from(word)))
                }
            })
            .collect()
    }

    fn parse(s: &str) -> Result<Vec<SizeRule>, SizesError> {
        parse_sizes(s, &simple_tokenizer)
    }

    #[test]
    fn bare_width_is_fallback() {
        assert_eq!(parse("100vw").unwrap(), alloc::vec![SizeRule::fallback("100vw")]);
    }

    #[test]
    fn conditional_then_fallback() {
        let rules = parse("(min-width:680px) 400px, 100vw").unwrap();
        assert_eq!(
            rules,
            alloc::vec![
                SizeRule::when(
                    alloc::vec![Condition::new(MediaFeature::MinWidth, 680.0)],
                    "400px"
                ),
                SizeRule::fallback("100vw"),
            ]
        );
    }

    #[test]
    fn empty_segments_skipped() {
        assert_eq!(parse(" , 50vw ,, ").unwrap(), alloc::vec![SizeRule::fallback("50vw")]);
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn width_is_last_whitespace_run() {
        let rules = parse("(min-width:100px) and (max-width:200px) \t 30vw").unwrap();
        assert_eq!(rules[0].width, "30vw");
        assert_eq!(rules[0].conditions.len(), 2);
    }

    #[test]
    fn stops_at_not_and_or() {
        let rules = parse("(min-width:100px) or (max-width:200px) 30vw").unwrap();
        assert_eq!(
            rules[0].conditions,
            alloc::vec![Condition::new(MediaFeature::MinWidth, 100.0)]
        );
        let rules = parse("not (max-width:200px) 30vw").unwrap();
        assert!(rules[0].conditions.is_empty());
    }

    #[test]
    fn non_px_condition_is_fatal() {
        let err = parse("(min-width:40em) 400px, 100vw").unwrap_err();
        assert_eq!(
            err,
            SizesError::UnsupportedUnit {
                unit: String::from("em"),
                value: String::from("40em"),
            }
        );
        assert!(matches!(
            parse("(max-width:50%) 10px"),
            Err(SizesError::UnsupportedUnit { unit, .. }) if unit == "%"
        ));
    }

    #[test]
    fn unknown_feature_is_fatal() {
        assert_eq!(
            parse("(orientation:1px) 10px"),
            Err(SizesError::UnsupportedFeature {
                feature: String::from("orientation")
            })
        );
    }

    #[test]
    fn tokenizer_errors_propagate() {
        assert!(matches!(
            parse("(min-width) 10px"),
            Err(SizesError::Tokenize { .. })
        ));
    }

    #[test]
    fn outer_parens_stripped_only_for_adjacent_groups() {
        assert_eq!(
            strip_outer_parens("((min-width:1px)(max-width:2px))"),
            "(min-width:1px)(max-width:2px)"
        );
        assert_eq!(
            strip_outer_parens("((min-width:1px) and (max-width:2px))"),
            "((min-width:1px) and (max-width:2px))"
        );
        assert_eq!(strip_outer_parens("(min-width:1px)"), "(min-width:1px)");
        assert_eq!(
            strip_outer_parens("(min-width:1px) and (max-width:2px)"),
            "(min-width:1px) and (max-width:2px)"
        );
    }

    #[test]
    fn tokenizer_sees_stripped_clause() {
        let seen = core::cell::RefCell::new(Vec::new());
        let recording = |clause: &str| -> Result<Vec<MediaNode>, SizesError> {
            seen.borrow_mut().push(String::from(clause));
            Ok(Vec::new())
        };
        parse_sizes("((min-width:1px)(max-width:2px)) 10px", &recording).unwrap();
        assert_eq!(seen.borrow()[0], "(min-width:1px)(max-width:2px)");
    }
}
