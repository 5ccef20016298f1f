//! Highlighter interface and the syntect-backed implementation.
//!
//! A highlighter turns source code into a tree of [`HighlightNode`]s whose
//! elements carry highlight.js class names (`hljs-keyword`, `hljs-string`,
//! …). Themes select on those class names, so any highlighter producing the
//! same vocabulary of classes can be plugged in.
//!
//! [`SyntaxHighlighter`] parses with a syntect [`SyntaxSet`] and maps the
//! TextMate scopes it produces onto that class vocabulary.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class for reserved words.
pub const KEYWORD: &str = "hljs-keyword";
/// Class for literal constants such as `true` or `null`.
pub const LITERAL: &str = "hljs-literal";
/// Class for standard-library names.
pub const BUILT_IN: &str = "hljs-built_in";
/// Class for string literals.
pub const STRING: &str = "hljs-string";
/// Class for numeric literals.
pub const NUMBER: &str = "hljs-number";
/// Class for comments.
pub const COMMENT: &str = "hljs-comment";
/// Class for declared names: functions, types, classes.
pub const TITLE: &str = "hljs-title";
pub const OPERATOR: &str = "hljs-operator";
pub const PARAMS: &str = "hljs-params";
pub const VARIABLE: &str = "hljs-variable";
pub const ATTR: &str = "hljs-attr";
pub const NAME: &str = "hljs-name";
pub const META: &str = "hljs-meta";

/// Scope prefixes and the class they map to. The first matching prefix
/// wins, so narrower prefixes precede the ones they refine.
const SCOPE_CLASSES: &[(&str, &str)] = &[
    ("comment", COMMENT),
    ("string", STRING),
    ("constant.numeric", NUMBER),
    ("constant.language", LITERAL),
    ("keyword.operator", OPERATOR),
    ("keyword", KEYWORD),
    ("storage.type", KEYWORD),
    ("storage.modifier", KEYWORD),
    ("support", BUILT_IN),
    ("entity.name.tag", NAME),
    ("entity.name", TITLE),
    ("entity.other.inherited-class", TITLE),
    ("entity.other.attribute-name", ATTR),
    ("variable.parameter", PARAMS),
    ("variable.language", VARIABLE),
    ("meta.annotation", META),
    ("meta.attribute", META),
];

static DEFAULT_SYNTAXES: Lazy<Arc<SyntaxSet>> =
    Lazy::new(|| Arc::new(SyntaxSet::load_defaults_newlines()));

/// The syntax definitions bundled with syntect, loaded once.
pub fn default_syntaxes() -> Arc<SyntaxSet> {
    Arc::clone(&DEFAULT_SYNTAXES)
}

/// A node of highlighted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightNode {
    Text(String),
    Element {
        classes: Vec<String>,
        children: Vec<HighlightNode>,
    },
}

impl HighlightNode {
    /// An element with a single class around a single text child.
    pub fn span(class: &str, text: impl Into<String>) -> Self {
        HighlightNode::Element {
            classes: vec![class.to_string()],
            children: vec![HighlightNode::Text(text.into())],
        }
    }

    /// Returns true if this element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        match self {
            HighlightNode::Element { classes, .. } => classes.iter().any(|c| c == class),
            HighlightNode::Text(_) => false,
        }
    }

    /// The source text under this node.
    pub fn text(&self) -> String {
        match self {
            HighlightNode::Text(text) => text.clone(),
            HighlightNode::Element { children, .. } => children.iter().map(Self::text).collect(),
        }
    }
}

/// Turns source code into highlight nodes.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, source: &str) -> Vec<HighlightNode>;
}

/// Highlights one syntax of a syntect [`SyntaxSet`].
///
/// ```rust
/// use mtxt::code::{Highlighter, SyntaxHighlighter, KEYWORD};
///
/// let rust = SyntaxHighlighter::builtin("rs").unwrap();
/// assert_eq!(rust.name(), "Rust");
///
/// let nodes = rust.highlight("fn main() {}");
/// assert!(nodes[0].has_class(KEYWORD));
/// assert_eq!(nodes.iter().map(|n| n.text()).collect::<String>(), "fn main() {}");
/// ```
#[derive(Clone)]
pub struct SyntaxHighlighter {
    syntaxes: Arc<SyntaxSet>,
    index: usize,
}

impl fmt::Debug for SyntaxHighlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxHighlighter")
            .field("syntax", &self.name())
            .finish_non_exhaustive()
    }
}

impl SyntaxHighlighter {
    /// Looks up `token` among the bundled syntaxes.
    pub fn builtin(token: &str) -> Option<Self> {
        Self::find(default_syntaxes(), token)
    }

    /// Looks up `token` in `syntaxes`, matching a syntax name or one of its
    /// file extensions, ignoring ASCII case.
    pub fn find(syntaxes: Arc<SyntaxSet>, token: &str) -> Option<Self> {
        let index = syntaxes.syntaxes().iter().position(|syntax| {
            syntax.name.eq_ignore_ascii_case(token)
                || syntax
                    .file_extensions
                    .iter()
                    .any(|ext| ext.eq_ignore_ascii_case(token))
        })?;
        Some(Self { syntaxes, index })
    }

    pub(crate) fn at(syntaxes: Arc<SyntaxSet>, index: usize) -> Self {
        Self { syntaxes, index }
    }

    pub fn syntax(&self) -> &SyntaxReference {
        &self.syntaxes.syntaxes()[self.index]
    }

    pub fn name(&self) -> &str {
        &self.syntax().name
    }
}

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, source: &str) -> Vec<HighlightNode> {
        let mut state = ParseState::new(self.syntax());
        let mut stack = ScopeStack::new();
        let mut classes = ScopeClasses::default();
        let mut tree = TreeBuilder::default();
        let mut done = 0;

        'lines: for line in LinesWithEndings::from(source) {
            let ops = match state.parse_line(line, &self.syntaxes) {
                Ok(ops) => ops,
                Err(error) => {
                    tracing::warn!(syntax = self.name(), ?error, "highlighting stopped");
                    break;
                }
            };

            let mut last = 0;
            for (index, op) in &ops {
                if *index > last {
                    tree.push(&classes.of(&stack), &line[last..*index]);
                    done += index - last;
                    last = *index;
                }
                if let Err(error) = stack.apply(op) {
                    tracing::warn!(syntax = self.name(), ?error, "highlighting stopped");
                    break 'lines;
                }
            }
            tree.push(&classes.of(&stack), &line[last..]);
            done += line.len() - last;
        }

        // Whatever could not be parsed stays as plain text
        tree.push(&[], &source[done..]);
        tree.finish()
    }
}

fn is_scope_prefix(prefix: &str, name: &str) -> bool {
    name.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

fn scope_class(name: &str) -> Option<&'static str> {
    SCOPE_CLASSES
        .iter()
        .find(|(prefix, _)| is_scope_prefix(prefix, name))
        .map(|(_, class)| *class)
}

/// Memoized scope to class mapping for one highlight run.
#[derive(Default)]
struct ScopeClasses {
    cache: HashMap<Scope, Option<&'static str>>,
}

impl ScopeClasses {
    /// The classes of every mapped scope on `stack`, outermost first, with
    /// immediate repeats collapsed.
    fn of(&mut self, stack: &ScopeStack) -> Vec<&'static str> {
        let mut path: Vec<&'static str> = Vec::new();
        for scope in stack.as_slice() {
            let class = *self
                .cache
                .entry(*scope)
                .or_insert_with(|| scope_class(&scope.build_string()));
            if let Some(class) = class {
                if path.last() != Some(&class) {
                    path.push(class);
                }
            }
        }
        path
    }
}

/// Builds nested elements from text runs tagged with class paths. Runs that
/// share a path prefix share the corresponding elements.
#[derive(Default)]
struct TreeBuilder {
    root: Vec<HighlightNode>,
    open: Vec<(&'static str, Vec<HighlightNode>)>,
}

impl TreeBuilder {
    fn push(&mut self, path: &[&'static str], text: &str) {
        if text.is_empty() {
            return;
        }

        let shared = self
            .open
            .iter()
            .zip(path)
            .take_while(|((open, _), class)| open == *class)
            .count();
        while self.open.len() > shared {
            self.close();
        }
        for class in &path[shared..] {
            self.open.push((*class, Vec::new()));
        }

        let children = match self.open.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        };
        match children.last_mut() {
            Some(HighlightNode::Text(previous)) => previous.push_str(text),
            _ => children.push(HighlightNode::Text(text.to_string())),
        }
    }

    fn close(&mut self) {
        if let Some((class, children)) = self.open.pop() {
            let element = HighlightNode::Element {
                classes: vec![class.to_string()],
                children,
            };
            match self.open.last_mut() {
                Some((_, parent)) => parent.push(element),
                None => self.root.push(element),
            }
        }
    }

    fn finish(mut self) -> Vec<HighlightNode> {
        while !self.open.is_empty() {
            self.close();
        }
        self.root
    }
}
