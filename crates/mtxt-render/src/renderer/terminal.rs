//! ANSI terminal backend.

use mtxt_markup::Node;

use crate::style::StyleVocabulary;

/// Renders a style tree to a single string with inline escape codes.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer<'v> {
    vocabulary: &'v StyleVocabulary,
    force_styling: bool,
}

impl<'v> TerminalRenderer<'v> {
    /// Creates a renderer that always emits escape codes.
    pub fn new(vocabulary: &'v StyleVocabulary) -> Self {
        Self {
            vocabulary,
            force_styling: true,
        }
    }

    /// When false, the `console` crate decides from the environment
    /// (TTY, `NO_COLOR`, `CLICOLOR_FORCE`) whether escape codes are written.
    pub fn force_styling(mut self, force: bool) -> Self {
        self.force_styling = force;
        self
    }

    /// Renders a forest.
    pub fn render(&self, forest: &[Node<'_>]) -> String {
        let mut out = String::new();
        for node in forest {
            out.push_str(&self.render_node(node));
        }
        out
    }

    fn render_node(&self, node: &Node<'_>) -> String {
        match node {
            Node::Text(text) => text.to_string(),
            Node::Styled { style, children } => {
                let inner = self.render(children);
                match self.vocabulary.resolve(style).terminal_style() {
                    Some(terminal) => {
                        let terminal = if self.force_styling {
                            terminal.force_styling(true)
                        } else {
                            terminal
                        };
                        terminal.apply_to(inner).to_string()
                    }
                    // Unresolved: identity, local to this node
                    None => inner,
                }
            }
        }
    }
}
