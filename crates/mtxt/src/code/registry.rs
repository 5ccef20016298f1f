//! Language registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use syntect::parsing::SyntaxSet;

use super::highlight::{default_syntaxes, Highlighter, SyntaxHighlighter};

static BUILTIN: Lazy<LanguageRegistry> =
    Lazy::new(|| LanguageRegistry::with_syntaxes(default_syntaxes()));

/// Highlighters addressable by language name.
#[derive(Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, Arc<dyn Highlighter>>,
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.names())
            .finish()
    }
}

impl LanguageRegistry {
    /// An empty registry; every language must be registered explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every syntax bundled with syntect.
    pub fn with_builtin_languages() -> Self {
        BUILTIN.clone()
    }

    /// A registry holding every syntax of `syntaxes`, each under its
    /// lowercased name and each of its file extensions. When two syntaxes
    /// claim the same name the first one keeps it.
    pub fn with_syntaxes(syntaxes: Arc<SyntaxSet>) -> Self {
        let mut registry = Self::new();
        for (index, syntax) in syntaxes.syntaxes().iter().enumerate() {
            let highlighter: Arc<dyn Highlighter> =
                Arc::new(SyntaxHighlighter::at(Arc::clone(&syntaxes), index));
            let names = std::iter::once(syntax.name.to_lowercase())
                .chain(syntax.file_extensions.iter().map(|ext| ext.to_lowercase()));
            for name in names {
                registry
                    .languages
                    .entry(name)
                    .or_insert_with(|| Arc::clone(&highlighter));
            }
        }
        tracing::debug!(languages = registry.languages.len(), "language registry loaded");
        registry
    }

    /// Registers or replaces the highlighter for `name`.
    pub fn register<H: Highlighter + 'static>(&mut self, name: impl Into<String>, highlighter: H) {
        self.register_shared(name, Arc::new(highlighter));
    }

    /// Registers an already shared highlighter.
    pub fn register_shared(&mut self, name: impl Into<String>, highlighter: Arc<dyn Highlighter>) {
        self.languages.insert(name.into(), highlighter);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<H: Highlighter + 'static>(mut self, name: impl Into<String>, highlighter: H) -> Self {
        self.register(name, highlighter);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Highlighter> {
        self.languages.get(name).map(|h| h.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
