//! Tag grammar and style tree for mtxt markup.
//!
//! mtxt markup is plain text interleaved with explicit open/close style tags.
//! Producers wrap text with style encodings once; the result is later compiled
//! to whichever output backend is active. This crate holds the backend-neutral
//! half of that pipeline:
//!
//! - [`grammar`]: tag syntax, plus encode/decode and [`wrap_with_styles`]
//! - [`tokenizer`]: splits markup into [`Segment`]s
//! - [`tree`]: assembles segments into a [`Forest`] of [`Node`]s
//!
//! # Example
//!
//! ```rust
//! use mtxt_markup::{parse, wrap_with_styles, Node};
//!
//! let markup = format!("Hello {}", wrap_with_styles(&["bold"], "world"));
//! assert_eq!(
//!     parse(&markup),
//!     vec![
//!         Node::Text("Hello "),
//!         Node::styled("bold", vec![Node::Text("world")]),
//!     ]
//! );
//! ```
//!
//! # Leniency
//!
//! Every function here is total over all strings. Unmatched closing tags are
//! dropped, unmatched opening tags style everything to the end of input, and
//! style names are never validated. There is no escape mechanism: literal
//! text containing the delimiter sequences is read as tags.

pub mod grammar;
pub mod tokenizer;
pub mod tree;

pub use grammar::{
    closing_tag, match_closing_tag, match_opening_tag, opening_tag, wrap, wrap_with_styles,
    CLOSE_DELIM, OPEN_DELIM, OPEN_END,
};
pub use tokenizer::{tokenize, Segment, Tokenizer};
pub use tree::{build_tree, parse, plain_text, Forest, Node, TreeBuilder};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn literal_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"\\[\\]\n-]{1,60}".prop_filter("no delimiters", |s| {
            !s.contains(OPEN_DELIM) && !s.contains(CLOSE_DELIM)
        })
    }

    fn style_name() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z][a-zA-Z]{0,12}",
            "hex#[0-9a-f]{6}",
            "bgHex#[0-9a-f]{3}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn literal_text_round_trips(text in literal_text()) {
            prop_assert_eq!(parse(&text), vec![Node::Text(&text)]);
        }

        #[test]
        fn wrap_then_parse_nests_last_style_outermost(
            styles in prop::collection::vec(style_name(), 1..6),
            text in literal_text(),
        ) {
            let markup = wrap_with_styles(&styles, &text);
            let forest = parse(&markup);
            prop_assert_eq!(forest.len(), 1);

            let mut node = &forest[0];
            for expected in styles.iter().rev() {
                match node {
                    Node::Styled { style, children } => {
                        prop_assert_eq!(*style, expected.as_str());
                        prop_assert_eq!(children.len(), 1);
                        node = &children[0];
                    }
                    Node::Text(_) => prop_assert!(false, "ran out of styled levels"),
                }
            }
            prop_assert_eq!(node, &Node::Text(&text));
        }

        #[test]
        fn nesting_depth_preserved(depth in 1usize..12, text in literal_text()) {
            let mut markup = String::new();
            for level in 0..depth {
                markup.push_str(&opening_tag(&format!("s{}", level)));
            }
            markup.push_str(&text);
            for _ in 0..depth {
                markup.push_str(CLOSE_DELIM);
            }

            let mut builder = TreeBuilder::new();
            builder.extend(Tokenizer::new(&markup));
            prop_assert_eq!(builder.max_depth(), depth);

            let forest = builder.finish();
            prop_assert_eq!(forest.len(), 1);
            prop_assert_eq!(forest[0].depth(), depth);
        }

        #[test]
        fn segments_reassemble_input(
            parts in prop::collection::vec(
                prop_oneof![
                    literal_text(),
                    style_name().prop_map(|s| opening_tag(&s)),
                    Just(CLOSE_DELIM.to_string()),
                ],
                0..10,
            )
        ) {
            let input = parts.concat();
            let rebuilt: String = tokenize(&input).iter().map(Segment::as_str).collect();
            prop_assert_eq!(rebuilt, input);
        }
    }
}
