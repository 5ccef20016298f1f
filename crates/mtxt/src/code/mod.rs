//! Syntax-highlighted code as mtxt markup.
//!
//! Source is highlighted by a registered [`Highlighter`] into class-tagged
//! [`HighlightNode`]s, then a [`CodeTheme`] maps those classes to style
//! encodings. The result is ordinary markup, ready for either backend.
//!
//! ```rust
//! use mtxt::code::{code, CodeOptions, CodeTheme, LanguageRegistry};
//!
//! let registry = LanguageRegistry::with_builtin_languages();
//! let theme = CodeTheme::new("tiny").rule(".hljs-keyword", &["bold"]);
//!
//! let markup = code(&registry, &CodeOptions::new("rust", "let x = 1;").theme(theme)).unwrap();
//! assert!(markup.starts_with("[mtxt-style[[bold]]]let[[/mtxt-style]] x"));
//! ```
//!
//! Source text is copied verbatim, so code that itself contains mtxt tag
//! delimiters will be read as markup.

pub mod highlight;
pub mod registry;
pub mod theme;

pub use highlight::{
    default_syntaxes, HighlightNode, Highlighter, SyntaxHighlighter, BUILT_IN, COMMENT, KEYWORD,
    LITERAL, NUMBER, STRING, TITLE,
};
pub use registry::LanguageRegistry;
pub use theme::{CodeTheme, Selector, ThemeRule, DEFAULT_THEME};

use mtxt_markup::wrap;

use crate::error::CodeError;

/// What to highlight, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeOptions {
    pub lang: String,
    pub content: String,
    pub theme: Option<CodeTheme>,
}

impl CodeOptions {
    pub fn new(lang: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            content: content.into(),
            theme: None,
        }
    }

    pub fn theme(mut self, theme: CodeTheme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Highlights `options.content` as `options.lang` and styles it with
/// `options.theme`, or the default theme when unset.
pub fn code(registry: &LanguageRegistry, options: &CodeOptions) -> Result<String, CodeError> {
    let highlighter = registry
        .get(&options.lang)
        .ok_or_else(|| CodeError::UnknownLanguage(options.lang.clone()))?;

    let nodes = highlighter.highlight(&options.content);
    Ok(match &options.theme {
        Some(theme) => apply_theme(&nodes, theme),
        None => apply_theme(&nodes, &CodeTheme::default()),
    })
}

/// Styles highlight nodes with a theme.
///
/// Every element collects the styles of all matching rules, in rule order.
/// Its rendered children are then wrapped by each collected style in turn,
/// each one becoming the new outermost tag. Rules with a malformed selector
/// are skipped with a warning.
pub fn apply_theme(nodes: &[HighlightNode], theme: &CodeTheme) -> String {
    let rules: Vec<(Selector, &[String])> = theme
        .rules()
        .iter()
        .filter_map(|rule| match Selector::parse(&rule.selector) {
            Some(selector) => Some((selector, rule.styles.as_slice())),
            None => {
                tracing::warn!(
                    theme = theme.name(),
                    selector = %rule.selector,
                    "invalid selector skipped"
                );
                None
            }
        })
        .collect();

    render_nodes(nodes, &rules)
}

fn render_nodes(nodes: &[HighlightNode], rules: &[(Selector, &[String])]) -> String {
    nodes.iter().map(|node| render_node(node, rules)).collect()
}

fn render_node(node: &HighlightNode, rules: &[(Selector, &[String])]) -> String {
    match node {
        HighlightNode::Text(text) => text.clone(),
        HighlightNode::Element { classes, children } => {
            let inner = render_nodes(children, rules);
            rules
                .iter()
                .filter(|(selector, _)| selector.matches(classes))
                .flat_map(|(_, styles)| styles.iter())
                .fold(inner, |acc, style| wrap(style, &acc))
        }
    }
}
