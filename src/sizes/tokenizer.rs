//! Media-condition tokenization.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::SizesError;

/// A node produced by tokenizing one media-condition clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaNode {
    /// A parenthesized `feature: value` test, value kept verbatim.
    FeatureExpression { feature: String, value: String },
    /// A combinator or modifier: `and`, `not`, `or`, `only`.
    Keyword(String),
    /// A media type such as `screen` or `print`.
    MediaType(String),
}

/// Splits a media-condition clause into nodes.
///
/// Implementations must preserve source order. Parenthesized groups that
/// contain further conditions may be flattened.
pub trait MediaTokenizer {
    /// Tokenize one clause, e.g. `(min-width: 680px) and (max-width: 900px)`.
    fn tokenize(&self, clause: &str) -> Result<Vec<MediaNode>, SizesError>;
}

impl<F> MediaTokenizer for F
where
    F: Fn(&str) -> Result<Vec<MediaNode>, SizesError>,
{
    fn tokenize(&self, clause: &str) -> Result<Vec<MediaNode>, SizesError> {
        self(clause)
    }
}

#[cfg(feature = "cssparser")]
pub use css::CssTokenizer;

#[cfg(feature = "cssparser")]
mod css {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use cssparser::{ParseError, Parser, ParserInput, Token};

    use super::{MediaNode, MediaTokenizer};
    use crate::error::SizesError;

    const KEYWORDS: &[&str] = &["and", "not", "only", "or"];

    /// [`MediaTokenizer`] backed by the `cssparser` crate.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct CssTokenizer;

    impl MediaTokenizer for CssTokenizer {
        fn tokenize(&self, clause: &str) -> Result<Vec<MediaNode>, SizesError> {
            let mut input = ParserInput::new(clause);
            let mut parser = Parser::new(&mut input);
            let mut nodes = Vec::new();
            read_condition(&mut parser, &mut nodes).map_err(|_| SizesError::Tokenize {
                clause: String::from(clause),
            })?;
            Ok(nodes)
        }
    }

    /// Read a sequence of parenthesized blocks and identifiers until the
    /// parser is exhausted.
    fn read_condition<'i>(
        parser: &mut Parser<'i, '_>,
        nodes: &mut Vec<MediaNode>,
    ) -> Result<(), ParseError<'i, ()>> {
        loop {
            let token = match parser.next() {
                Ok(t) => t.clone(),
                Err(_) => return Ok(()),
            };
            match token {
                Token::ParenthesisBlock => {
                    parser.parse_nested_block(|p| read_block(p, nodes))?;
                }
                Token::Ident(ident) => {
                    let lower = ident.to_ascii_lowercase();
                    if KEYWORDS.contains(&lower.as_str()) {
                        nodes.push(MediaNode::Keyword(lower));
                    } else {
                        nodes.push(MediaNode::MediaType(lower));
                    }
                }
                t => return Err(parser.new_unexpected_token_error(t)),
            }
        }
    }

    /// Contents of one `( … )`: either `feature: value` or a nested condition.
    ///
    /// A feature name must be followed by `:` and a value; only a group
    /// opening with another `(` or a keyword is read as a nested condition.
    fn read_block<'i>(
        parser: &mut Parser<'i, '_>,
        nodes: &mut Vec<MediaNode>,
    ) -> Result<(), ParseError<'i, ()>> {
        let start = parser.state();
        if let Ok(feature) = parser.expect_ident_cloned()
            && !KEYWORDS.contains(&feature.to_ascii_lowercase().as_str())
        {
            parser.expect_colon()?;
            parser.skip_whitespace();
            let value_start = parser.position();
            while parser.next().is_ok() {}
            let value = parser.slice_from(value_start).trim();
            if value.is_empty() {
                return Err(parser.new_custom_error(()));
            }
            nodes.push(MediaNode::FeatureExpression {
                feature: feature.to_ascii_lowercase(),
                value: value.to_string(),
            });
            return Ok(());
        }
        parser.reset(&start);
        read_condition(parser, nodes)
    }
}

#[cfg(all(test, feature = "cssparser"))]
mod tests {
    use super::*;

    fn feature(f: &str, v: &str) -> MediaNode {
        MediaNode::FeatureExpression {
            feature: String::from(f),
            value: String::from(v),
        }
    }

    #[test]
    fn single_feature() {
        let nodes = CssTokenizer.tokenize("(min-width: 680px)").unwrap();
        assert_eq!(nodes, alloc::vec![feature("min-width", "680px")]);
    }

    #[test]
    fn anded_features_keep_keyword() {
        let nodes = CssTokenizer
            .tokenize("(min-width: 680px) and (max-width:900px)")
            .unwrap();
        assert_eq!(
            nodes,
            alloc::vec![
                feature("min-width", "680px"),
                MediaNode::Keyword(String::from("and")),
                feature("max-width", "900px"),
            ]
        );
    }

    #[test]
    fn value_kept_verbatim() {
        let nodes = CssTokenizer.tokenize("(max-width: 40em)").unwrap();
        assert_eq!(nodes, alloc::vec![feature("max-width", "40em")]);
        let nodes = CssTokenizer.tokenize("(MIN-WIDTH: 71.5%)").unwrap();
        assert_eq!(nodes, alloc::vec![feature("min-width", "71.5%")]);
    }

    #[test]
    fn media_type_and_modifiers() {
        let nodes = CssTokenizer
            .tokenize("only screen and (min-width: 100px)")
            .unwrap();
        assert_eq!(
            nodes,
            alloc::vec![
                MediaNode::Keyword(String::from("only")),
                MediaNode::MediaType(String::from("screen")),
                MediaNode::Keyword(String::from("and")),
                feature("min-width", "100px"),
            ]
        );
    }

    #[test]
    fn nested_groups_are_flattened() {
        let nodes = CssTokenizer
            .tokenize("((min-width: 100px) and (max-width: 200px))")
            .unwrap();
        assert_eq!(
            nodes,
            alloc::vec![
                feature("min-width", "100px"),
                MediaNode::Keyword(String::from("and")),
                feature("max-width", "200px"),
            ]
        );
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(
            CssTokenizer.tokenize("(min-width: 100px) , 3"),
            Err(SizesError::Tokenize { .. })
        ));
        assert!(CssTokenizer.tokenize("(min-width:)").is_err());
    }

    #[test]
    fn feature_without_value_is_an_error() {
        assert_eq!(
            CssTokenizer.tokenize("(min-width)"),
            Err(SizesError::Tokenize {
                clause: String::from("(min-width)")
            })
        );
        assert!(matches!(
            CssTokenizer.tokenize("(min-width: 100px) and (max-width)"),
            Err(SizesError::Tokenize { .. })
        ));
        assert!(CssTokenizer.tokenize("((max-width))").is_err());
    }

    #[test]
    fn keyword_inside_group_is_a_nested_condition() {
        let nodes = CssTokenizer.tokenize("(not (max-width: 200px))").unwrap();
        assert_eq!(
            nodes,
            alloc::vec![
                MediaNode::Keyword(String::from("not")),
                feature("max-width", "200px"),
            ]
        );
    }

    #[test]
    fn closures_are_tokenizers() {
        let t = |_: &str| -> Result<Vec<MediaNode>, SizesError> {
            Ok(alloc::vec![feature("max-width", "10px")])
        };
        assert_eq!(t.tokenize("anything").unwrap().len(), 1);
    }
}
