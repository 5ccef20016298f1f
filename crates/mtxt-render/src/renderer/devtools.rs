//! Devtools console backend.
//!
//! Host consoles style output through a template string holding one `%c`
//! placeholder per styled run, followed by one CSS declaration per
//! placeholder. Every text run gets its own placeholder; a styled node then
//! stamps its own declaration over every placeholder beneath it, replacing
//! (not merging with) whatever its descendants set.

use mtxt_markup::Node;

use crate::style::StyleVocabulary;

/// The host console's style placeholder.
pub const PLACEHOLDER: &str = "%c";

/// Format string plus one declaration per placeholder, in document order.
///
/// `runs` holds the literal text following each placeholder, so `runs`,
/// `styles` and the placeholders of `format` always line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleOutput {
    pub format: String,
    pub styles: Vec<String>,
    pub runs: Vec<String>,
}

impl ConsoleOutput {
    /// The format string followed by every declaration: the argument list a
    /// host console call expects.
    pub fn into_parts(self) -> Vec<String> {
        let mut parts = Vec::with_capacity(self.styles.len() + 1);
        parts.push(self.format);
        parts.extend(self.styles);
        parts
    }

    /// The text runs without their placeholders. Literal `%c` inside a run
    /// is kept.
    pub fn plain_text(&self) -> String {
        self.runs.concat()
    }

    fn append(&mut self, other: ConsoleOutput) {
        self.format.push_str(&other.format);
        self.styles.extend(other.styles);
        self.runs.extend(other.runs);
    }
}

/// Renders a style tree to the host console's template convention.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer<'v> {
    vocabulary: &'v StyleVocabulary,
}

impl<'v> ConsoleRenderer<'v> {
    /// Creates a renderer over `vocabulary`.
    pub fn new(vocabulary: &'v StyleVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Renders a forest.
    pub fn render(&self, forest: &[Node<'_>]) -> ConsoleOutput {
        let mut output = ConsoleOutput::default();
        for node in forest {
            output.append(self.render_node(node));
        }
        output
    }

    fn render_node(&self, node: &Node<'_>) -> ConsoleOutput {
        match node {
            Node::Text(text) => ConsoleOutput {
                format: format!("{}{}", PLACEHOLDER, text),
                styles: vec![String::new()],
                runs: vec![text.to_string()],
            },
            Node::Styled { style, children } => {
                let mut inner = self.render(children);
                let css = self.vocabulary.resolve(style).css();
                for declaration in inner.styles.iter_mut() {
                    declaration.clone_from(&css);
                }
                inner
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtxt_markup::parse;

    fn render(markup: &str) -> ConsoleOutput {
        let vocabulary = StyleVocabulary::default();
        ConsoleRenderer::new(&vocabulary).render(&parse(markup))
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(render(""), ConsoleOutput::default());
    }

    #[test]
    fn test_text_runs_get_empty_declarations() {
        let output = render("Hello [mtxt-style[[bold]]], world! [[/mtxt-style]]");
        assert_eq!(output.format, "%cHello %c, world! ");
        assert_eq!(output.styles, vec!["", "font-weight: bold;"]);
    }

    #[test]
    fn test_hex_declarations() {
        let output = render("[mtxt-style[[hex#ff0000]]]a[[/mtxt-style]][mtxt-style[[bgHex#0f0]]]b[[/mtxt-style]]");
        assert_eq!(output.format, "%ca%cb");
        assert_eq!(output.styles, vec!["color: #ff0000", "background-color: #0f0"]);
    }

    #[test]
    fn test_ancestor_overwrites_descendants() {
        let output = render(
            "[mtxt-style[[red]]]a[mtxt-style[[bold]]]b[[/mtxt-style]]c[[/mtxt-style]]",
        );
        assert_eq!(output.format, "%ca%cb%cc");
        assert_eq!(output.styles, vec!["color: red;"; 3]);
    }

    #[test]
    fn test_unresolved_ancestor_clears_descendants() {
        let output = render("[mtxt-style[[sparkly]]][mtxt-style[[bold]]]b[[/mtxt-style]][[/mtxt-style]]");
        assert_eq!(output.styles, vec![""]);
    }

    #[test]
    fn test_empty_styled_node_contributes_nothing() {
        let output = render("[mtxt-style[[red]]][[/mtxt-style]]x");
        assert_eq!(output.format, "%cx");
        assert_eq!(output.styles, vec![""]);
    }

    #[test]
    fn test_literal_placeholder_survives_plain_text() {
        let output = render("50%cats [mtxt-style[[bold]]]100%c[[/mtxt-style]]");
        assert_eq!(output.format, "%c50%cats %c100%c");
        assert_eq!(output.runs, vec!["50%cats ", "100%c"]);
        assert_eq!(output.plain_text(), "50%cats 100%c");
    }

    #[test]
    fn test_into_parts() {
        let parts = render("a[mtxt-style[[dim]]]b[[/mtxt-style]]").into_parts();
        assert_eq!(parts, vec!["%ca%cb", "", "opacity: 0.6;"]);
    }
}
