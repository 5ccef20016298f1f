//! Isolated writing contexts.
//!
//! [`write`] hands a fresh [`Writer`] to a closure and returns everything
//! pushed into it, joined with the writer's separator. Each call gets its own
//! entries, separator, code theme and language registry; nothing leaks between
//! calls.
//!
//! ```rust
//! use mtxt::{cols, write};
//!
//! let out = write(|w| {
//!     let ok = cols().green().paint("ok");
//!     w.push(&["Status: ", ok.as_str()]);
//!     w.push_with(&["a", "b", "c"], ", ");
//! });
//! assert_eq!(
//!     out,
//!     "Status: [mtxt-style[[green]]]ok[[/mtxt-style]]\na, b, c"
//! );
//! ```

use crate::code::{self, CodeOptions, CodeTheme, LanguageRegistry};
use crate::error::CodeError;
use crate::layout::{hr, HrOptions};

/// Line separator of a fresh writer.
pub const DEFAULT_JOIN: &str = "\n";

/// Accumulates markup entries.
#[derive(Debug, Clone)]
pub struct Writer {
    entries: Vec<String>,
    join: String,
    theme: Option<CodeTheme>,
    registry: LanguageRegistry,
}

impl Default for Writer {
    fn default() -> Self {
        Self::with_registry(LanguageRegistry::with_builtin_languages())
    }
}

impl Writer {
    /// A writer that highlights the bundled languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer that highlights through `registry`.
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self {
            entries: Vec::new(),
            join: DEFAULT_JOIN.to_string(),
            theme: None,
            registry,
        }
    }

    /// Appends one entry: `parts` concatenated.
    pub fn push<S: AsRef<str>>(&mut self, parts: &[S]) -> &mut Self {
        self.push_with(parts, "")
    }

    /// Appends one entry: `parts` joined with `separator`.
    pub fn push_with<S: AsRef<str>>(&mut self, parts: &[S], separator: &str) -> &mut Self {
        let entry = parts
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(separator);
        self.entries.push(entry);
        self
    }

    /// Sets the separator placed between entries.
    pub fn join_with(&mut self, separator: impl Into<String>) -> &mut Self {
        self.join = separator.into();
        self
    }

    /// Appends a horizontal rule.
    pub fn hr(&mut self, options: &HrOptions) -> &mut Self {
        self.entries.push(hr(options));
        self
    }

    /// Sets the theme used by [`code`](Self::code) when the options carry none.
    pub fn set_code_theme(&mut self, theme: CodeTheme) -> &mut Self {
        self.theme = Some(theme);
        self
    }

    /// Highlights code with this writer's registry and theme. The result is
    /// returned, not pushed.
    pub fn code(&self, options: &CodeOptions) -> Result<String, CodeError> {
        match (&options.theme, &self.theme) {
            (None, Some(theme)) => {
                let options = options.clone().theme(theme.clone());
                code::code(&self.registry, &options)
            }
            _ => code::code(&self.registry, options),
        }
    }

    /// The entries pushed so far.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Joins the entries.
    pub fn finish(self) -> String {
        self.entries.join(&self.join)
    }
}

/// Runs `f` against a fresh [`Writer`] and returns the joined output.
pub fn write<F>(f: F) -> String
where
    F: FnOnce(&mut Writer),
{
    let mut writer = Writer::new();
    f(&mut writer);
    writer.finish()
}

/// Like [`write`], highlighting through `registry`.
pub fn write_with<F>(registry: LanguageRegistry, f: F) -> String
where
    F: FnOnce(&mut Writer),
{
    let mut writer = Writer::with_registry(registry);
    f(&mut writer);
    writer.finish()
}
