//! Code themes: ordered selector rules mapping highlight classes to styles.
//!
//! Selectors are parsed with `cssparser`. A selector is a comma-separated
//! list of class compounds; an element matches when it carries every class
//! of at least one compound. Classes separated by whitespace belong to the
//! same compound, so `.a .b` reads as `.a.b`. Other selector syntax is
//! rejected.
//!
//! Themes load from YAML. Rule order is preserved:
//!
//! ```yaml
//! name: sunset
//! styles:
//!   .hljs-keyword: [hex#ff6b35, bold]
//!   .hljs-string: hex#ffd166
//!   .hljs-comment: [gray, italic]
//! ```

use std::path::Path;

use cssparser::{ParseError, Parser, ParserInput, Token};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::CodeError;

/// Name of the theme used when none is given.
pub const DEFAULT_THEME: &str = "github_dark";

/// A parsed class selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Vec<String>>,
}

impl Selector {
    /// Parses a class selector list, `None` if malformed.
    ///
    /// ```rust
    /// use mtxt::code::Selector;
    ///
    /// assert!(Selector::parse(".hljs-string.hljs-title").is_some());
    /// assert!(Selector::parse(".hljs-title, .hljs-name").is_some());
    /// assert!(Selector::parse("div.a").is_none());
    /// ```
    pub fn parse(selector: &str) -> Option<Self> {
        let mut input = ParserInput::new(selector);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(|input| input.parse_comma_separated(parse_compound))
            .ok()
            .map(|compounds| Self { compounds })
    }

    /// The alternatives of the list, each the classes it requires.
    pub fn compounds(&self) -> &[Vec<String>] {
        &self.compounds
    }

    /// Returns true if `classes` contains every class of some compound.
    pub fn matches(&self, classes: &[String]) -> bool {
        self.compounds
            .iter()
            .any(|compound| compound.iter().all(|required| classes.contains(required)))
    }
}

fn parse_compound<'i>(input: &mut Parser<'i, '_>) -> Result<Vec<String>, ParseError<'i, ()>> {
    let mut classes = Vec::new();
    while !input.is_exhausted() {
        input.expect_delim('.')?;
        // The class name must follow the dot directly
        let token = input.next_including_whitespace()?.clone();
        match token {
            Token::Ident(name) => classes.push(name.as_ref().to_string()),
            other => return Err(input.new_unexpected_token_error(other)),
        }
    }
    if classes.is_empty() {
        return Err(input.new_custom_error::<(), ()>(()));
    }
    Ok(classes)
}

/// One theme entry: a selector and the style encodings it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRule {
    pub selector: String,
    pub styles: Vec<String>,
}

/// An ordered list of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTheme {
    name: String,
    rules: Vec<ThemeRule>,
}

impl Default for CodeTheme {
    fn default() -> Self {
        Self::github_dark()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    name: Option<String>,
    #[serde(default)]
    styles: Mapping,
}

impl CodeTheme {
    /// An empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule.
    pub fn rule(mut self, selector: impl Into<String>, styles: &[&str]) -> Self {
        self.rules.push(ThemeRule {
            selector: selector.into(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[ThemeRule] {
        &self.rules
    }

    /// Looks up a built-in theme. Accepts `snake_case`, `kebab-case` and
    /// `camelCase` spellings.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "github_dark" | "github-dark" | "githubDark" => Some(Self::github_dark()),
            "monokai" => Some(Self::monokai()),
            "vs" => Some(Self::vs()),
            "far" => Some(Self::far()),
            _ => None,
        }
    }

    /// Names of the built-in themes.
    pub fn builtin_names() -> &'static [&'static str] {
        &["far", "github_dark", "monokai", "vs"]
    }

    pub fn github_dark() -> Self {
        Self::new("github_dark")
            .rule(".hljs-keyword", &["hex#ff7b72"])
            .rule(".hljs-literal", &["hex#79c0ff"])
            .rule(".hljs-number", &["hex#79c0ff"])
            .rule(".hljs-built_in", &["hex#ffa657"])
            .rule(".hljs-string", &["hex#a5d6ff"])
            .rule(".hljs-title", &["hex#d2a8ff"])
            .rule(".hljs-comment", &["hex#8b949e"])
    }

    pub fn monokai() -> Self {
        Self::new("monokai")
            .rule(".hljs-keyword", &["hex#f92672"])
            .rule(".hljs-literal", &["hex#ae81ff"])
            .rule(".hljs-number", &["hex#ae81ff"])
            .rule(".hljs-built_in", &["hex#a6e22e"])
            .rule(".hljs-string", &["hex#e6db74"])
            .rule(".hljs-title", &["hex#a6e22e"])
            .rule(".hljs-comment", &["hex#75715e"])
    }

    pub fn vs() -> Self {
        Self::new("vs")
            .rule(".hljs-keyword", &["hex#0000ff"])
            .rule(".hljs-literal", &["hex#0000ff"])
            .rule(".hljs-built_in", &["hex#2b91af"])
            .rule(".hljs-string", &["hex#a31515"])
            .rule(".hljs-title", &["hex#a31515"])
            .rule(".hljs-comment", &["hex#008000"])
    }

    pub fn far() -> Self {
        Self::new("far")
            .rule(".hljs-keyword", &["hex#ffffff", "bold"])
            .rule(".hljs-literal", &["hex#ffffff", "bold"])
            .rule(".hljs-number", &["hex#00ff00"])
            .rule(".hljs-built_in", &["hex#00ffff"])
            .rule(".hljs-string", &["hex#ffff00"])
            .rule(".hljs-title", &["hex#00ffff"])
            .rule(".hljs-comment", &["hex#888888"])
    }

    /// Parses a theme from YAML. A missing `name` becomes `"custom"`.
    pub fn from_yaml(yaml: &str) -> Result<Self, CodeError> {
        Self::parse_yaml(yaml, None)
    }

    /// Reads and parses a YAML theme file. A missing `name` becomes the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CodeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_yaml(&content, Some(path))
    }

    fn parse_yaml(yaml: &str, path: Option<&Path>) -> Result<Self, CodeError> {
        let error = |message: String| CodeError::ThemeParse {
            path: path.map(Path::to_path_buf),
            message,
        };

        let file: ThemeFile = serde_yaml::from_str(yaml).map_err(|e| error(e.to_string()))?;
        let name = file
            .name
            .or_else(|| {
                path.and_then(Path::file_stem)
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "custom".to_string());

        let mut theme = Self::new(name);
        for (selector, styles) in file.styles {
            let selector = match selector {
                Value::String(s) => s,
                other => return Err(error(format!("selector must be a string, got {:?}", other))),
            };
            let styles = match styles {
                Value::String(s) => vec![s],
                Value::Sequence(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(error(format!(
                            "style for '{}' must be a string, got {:?}",
                            selector, other
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
                other => {
                    return Err(error(format!(
                        "styles for '{}' must be a string or a list, got {:?}",
                        selector, other
                    )))
                }
            };
            theme.rules.push(ThemeRule { selector, styles });
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod selectors {
        use super::*;

        fn classes(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_single_class() {
            let selector = Selector::parse(".hljs-keyword").unwrap();
            assert!(selector.matches(&classes(&["hljs-keyword"])));
            assert!(selector.matches(&classes(&["other", "hljs-keyword"])));
            assert!(!selector.matches(&classes(&["hljs-string"])));
        }

        #[test]
        fn test_compound_requires_every_class() {
            let selector = Selector::parse(".hljs-string.hljs-title").unwrap();
            assert_eq!(selector.compounds(), [classes(&["hljs-string", "hljs-title"])]);
            assert!(selector.matches(&classes(&["hljs-title", "hljs-string"])));
            assert!(!selector.matches(&classes(&["hljs-string"])));
        }

        #[test]
        fn test_list_matches_any_alternative() {
            let selector = Selector::parse(".hljs-title, .hljs-name").unwrap();
            assert_eq!(
                selector.compounds(),
                [classes(&["hljs-title"]), classes(&["hljs-name"])]
            );
            assert!(selector.matches(&classes(&["hljs-name"])));
            assert!(selector.matches(&classes(&["hljs-title"])));
            assert!(!selector.matches(&classes(&["hljs-string"])));
        }

        #[test]
        fn test_whitespace_joins_compound() {
            assert_eq!(Selector::parse(".a .b"), Selector::parse(".a.b"));
            assert_eq!(Selector::parse("  .a  "), Selector::parse(".a"));
        }

        #[test]
        fn test_comments_and_escapes() {
            let selector = Selector::parse("/* keywords */ .hljs-keyword").unwrap();
            assert_eq!(selector.compounds(), [classes(&["hljs-keyword"])]);
            let selector = Selector::parse(".built\\_in").unwrap();
            assert_eq!(selector.compounds(), [classes(&["built_in"])]);
        }

        #[test]
        fn test_malformed() {
            for bad in ["", ".", "..a", ".a.", "a", "div.a", ".a > .b", ". a", ".a,", ",.a", "#id"] {
                assert!(Selector::parse(bad).is_none(), "{bad:?} should be rejected");
            }
        }
    }

    #[test]
    fn test_builtins() {
        for name in CodeTheme::builtin_names() {
            let theme = CodeTheme::builtin(name).unwrap();
            assert_eq!(theme.name(), *name);
            assert!(theme.rules().iter().all(|r| Selector::parse(&r.selector).is_some()));
        }
        assert_eq!(CodeTheme::builtin("githubDark"), Some(CodeTheme::github_dark()));
        assert!(CodeTheme::builtin("solarized").is_none());
        assert_eq!(CodeTheme::default().name(), DEFAULT_THEME);
    }

    #[test]
    fn test_yaml_preserves_order() {
        let theme = CodeTheme::from_yaml(
            "name: sunset\nstyles:\n  .hljs-string: hex#ffd166\n  .hljs-keyword: [hex#ff6b35, bold]\n",
        )
        .unwrap();
        assert_eq!(theme.name(), "sunset");
        assert_eq!(
            theme.rules(),
            [
                ThemeRule {
                    selector: ".hljs-string".into(),
                    styles: vec!["hex#ffd166".into()],
                },
                ThemeRule {
                    selector: ".hljs-keyword".into(),
                    styles: vec!["hex#ff6b35".into(), "bold".into()],
                },
            ]
        );
    }

    #[test]
    fn test_yaml_keeps_malformed_selectors() {
        let theme = CodeTheme::from_yaml("styles:\n  \"a b\": red\n").unwrap();
        assert_eq!(theme.name(), "custom");
        assert_eq!(theme.rules().len(), 1);
    }

    #[test]
    fn test_yaml_errors() {
        assert!(matches!(
            CodeTheme::from_yaml("styles:\n  .a: {fg: red}\n"),
            Err(CodeError::ThemeParse { .. })
        ));
        assert!(matches!(
            CodeTheme::from_yaml("colors: []\n"),
            Err(CodeError::ThemeParse { .. })
        ));
    }
}
