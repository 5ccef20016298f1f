//! Builds the nested style tree from a flat segment stream.
//!
//! The builder keeps an explicit stack of open styled nodes. Closing tags pop
//! unconditionally and are dropped when nothing is open; nodes still open at
//! the end of input stay in the tree with whatever children they collected.

use crate::tokenizer::{Segment, Tokenizer};

/// A node of the parsed style tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// Literal text.
    Text(&'a str),
    /// Everything between an opening tag and its matching close.
    Styled {
        style: &'a str,
        children: Vec<Node<'a>>,
    },
}

/// Ordered top-level nodes; the intermediate form handed to every renderer.
pub type Forest<'a> = Vec<Node<'a>>;

impl<'a> Node<'a> {
    /// Creates a styled node.
    pub fn styled(style: &'a str, children: Vec<Node<'a>>) -> Self {
        Node::Styled { style, children }
    }

    /// Concatenated literal text under this node, ignoring styling.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain(&mut out);
        out
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Styled { children, .. } => {
                for child in children {
                    child.push_plain(out);
                }
            }
        }
    }

    /// Number of styled levels from this node down to its deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Text(_) => 0,
            Node::Styled { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Concatenated literal text of a whole forest.
pub fn plain_text(forest: &[Node<'_>]) -> String {
    forest.iter().map(Node::plain_text).collect()
}

/// Consumes segments in order and assembles the forest.
#[derive(Debug, Default)]
pub struct TreeBuilder<'a> {
    roots: Forest<'a>,
    stack: Vec<(&'a str, Vec<Node<'a>>)>,
    max_depth: usize,
}

impl<'a> TreeBuilder<'a> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            stack: Vec::new(),
            max_depth: 0,
        }
    }

    /// Feeds one segment.
    pub fn push(&mut self, segment: Segment<'a>) {
        match segment {
            Segment::Text(text) => self.attach(Node::Text(text)),
            Segment::Open { style, .. } => {
                self.stack.push((style, Vec::new()));
                self.max_depth = self.max_depth.max(self.stack.len());
            }
            Segment::Close(_) => {
                // Nothing open: the close is dropped
                if let Some((style, children)) = self.stack.pop() {
                    self.attach(Node::Styled { style, children });
                }
            }
        }
    }

    /// Deepest the open-node stack has been so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of nodes currently open.
    pub fn open_depth(&self) -> usize {
        self.stack.len()
    }

    /// Finishes the pass, keeping unclosed nodes with their children.
    pub fn finish(mut self) -> Forest<'a> {
        while let Some((style, children)) = self.stack.pop() {
            self.attach(Node::Styled { style, children });
        }
        self.roots
    }

    /// Appends to the innermost open node, or to the top level.
    ///
    /// An open node is attached to its parent only once it closes. Its
    /// position is unaffected: while it is open nothing else reaches the
    /// parent's child list.
    fn attach(&mut self, node: Node<'a>) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.roots.push(node),
        }
    }
}

impl<'a> Extend<Segment<'a>> for TreeBuilder<'a> {
    fn extend<I: IntoIterator<Item = Segment<'a>>>(&mut self, iter: I) {
        for segment in iter {
            self.push(segment);
        }
    }
}

/// Builds a forest from already tokenized segments.
pub fn build_tree<'a, I>(segments: I) -> Forest<'a>
where
    I: IntoIterator<Item = Segment<'a>>,
{
    let mut builder = TreeBuilder::new();
    builder.extend(segments);
    builder.finish()
}

/// Tokenizes and tree-builds `input` in one pass.
///
/// ```rust
/// use mtxt_markup::{parse, Node};
///
/// let forest = parse("Hello [mtxt-style[[red]]]world[[/mtxt-style]]!");
/// assert_eq!(
///     forest,
///     vec![
///         Node::Text("Hello "),
///         Node::styled("red", vec![Node::Text("world")]),
///         Node::Text("!"),
///     ]
/// );
/// ```
pub fn parse(input: &str) -> Forest<'_> {
    build_tree(Tokenizer::new(input))
}
