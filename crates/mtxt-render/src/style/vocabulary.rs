//! Named style vocabulary shared by both backends.
//!
//! Every named style pairs a terminal [`Style`] with the CSS declaration the
//! devtools console needs to approximate it, so the two backends stay visually
//! consistent. The default population covers the conventional ANSI names:
//!
//! | group              | names                                                        |
//! |--------------------|--------------------------------------------------------------|
//! | modifiers          | reset bold dim italic underline inverse hidden strikethrough |
//! | foreground         | black red green yellow blue magenta cyan white gray grey     |
//! | bright foreground  | blackBright redBright … whiteBright                          |
//! | background         | bgBlack bgRed … bgWhite bgGray bgGrey                        |
//! | bright background  | bgBlackBright bgRedBright … bgWhiteBright                    |
//!
//! Vocabularies are plain values: callers that need extra names build their
//! own instance with [`StyleVocabulary::add`] or load one from YAML.

use std::collections::HashMap;

use console::{Color, Style};

use super::hex::{HexColor, ParametricStyle};
use crate::util::rgb_to_ansi256;

/// A style known by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedStyle {
    terminal: Style,
    css: String,
}

impl NamedStyle {
    /// Pairs a terminal style with its CSS declaration.
    pub fn new(terminal: Style, css: impl Into<String>) -> Self {
        Self {
            terminal,
            css: css.into(),
        }
    }

    /// The terminal-native style.
    pub fn terminal(&self) -> &Style {
        &self.terminal
    }

    /// The CSS declaration string.
    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Outcome of resolving a style encoding against a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'v, 'e> {
    /// Found in the vocabulary.
    Named(&'v NamedStyle),
    /// `hex#…` foreground color.
    Foreground(HexColor<'e>),
    /// `bgHex#…` background color.
    Background(HexColor<'e>),
    /// Neither named nor parametric. Renders as identity.
    Unresolved,
}

impl Resolved<'_, '_> {
    /// Terminal style for this resolution, `None` when unresolved.
    pub fn terminal_style(&self) -> Option<Style> {
        match self {
            Resolved::Named(named) => Some(named.terminal().clone()),
            Resolved::Foreground(color) => {
                Some(Style::new().fg(Color::Color256(rgb_to_ansi256(color.rgb()))))
            }
            Resolved::Background(color) => {
                Some(Style::new().bg(Color::Color256(rgb_to_ansi256(color.rgb()))))
            }
            Resolved::Unresolved => None,
        }
    }

    /// CSS declaration for this resolution, empty when unresolved.
    pub fn css(&self) -> String {
        match self {
            Resolved::Named(named) => named.css().to_string(),
            Resolved::Foreground(color) => format!("color: {}", color.literal()),
            Resolved::Background(color) => format!("background-color: {}", color.literal()),
            Resolved::Unresolved => String::new(),
        }
    }

    /// Returns true if the encoding resolved to nothing.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolved::Unresolved)
    }
}

/// Mapping from style name to [`NamedStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVocabulary {
    styles: HashMap<String, NamedStyle>,
}

impl Default for StyleVocabulary {
    fn default() -> Self {
        let styles = default_styles()
            .into_iter()
            .map(|(name, terminal, css)| (name.to_string(), NamedStyle::new(terminal, css)))
            .collect();
        Self { styles }
    }
}

impl StyleVocabulary {
    /// Creates a vocabulary with no names at all.
    ///
    /// Parametric hex styles still resolve against an empty vocabulary.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Adds or replaces a named style. Returns self for chaining.
    ///
    /// ```rust
    /// use mtxt_render::StyleVocabulary;
    /// use console::Style;
    ///
    /// let vocabulary = StyleVocabulary::default()
    ///     .add("warning", Style::new().yellow().bold(), "color: orange; font-weight: bold;");
    /// assert_eq!(vocabulary.css("warning"), Some("color: orange; font-weight: bold;"));
    /// ```
    pub fn add(mut self, name: impl Into<String>, terminal: Style, css: impl Into<String>) -> Self {
        self.insert(name, NamedStyle::new(terminal, css));
        self
    }

    /// Adds or replaces a named style in place.
    pub fn insert(&mut self, name: impl Into<String>, style: NamedStyle) {
        self.styles.insert(name.into(), style);
    }

    /// Copies every entry of `other` over this vocabulary.
    pub fn merge(mut self, other: StyleVocabulary) -> Self {
        self.styles.extend(other.styles);
        self
    }

    /// Looks up a named style.
    pub fn get(&self, name: &str) -> Option<&NamedStyle> {
        self.styles.get(name)
    }

    /// Looks up the terminal style for a name.
    pub fn terminal(&self, name: &str) -> Option<&Style> {
        self.get(name).map(NamedStyle::terminal)
    }

    /// Looks up the CSS declaration for a name.
    pub fn css(&self, name: &str) -> Option<&str> {
        self.get(name).map(NamedStyle::css)
    }

    /// Returns true if `name` is part of the vocabulary.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Style names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of named styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if no names are defined.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolves a style encoding: named lookup, then foreground hex, then
    /// background hex, else [`Resolved::Unresolved`].
    pub fn resolve<'v, 'e>(&'v self, encoding: &'e str) -> Resolved<'v, 'e> {
        if let Some(named) = self.styles.get(encoding) {
            return Resolved::Named(named);
        }
        match ParametricStyle::parse(encoding) {
            Some(ParametricStyle::Foreground(color)) => Resolved::Foreground(color),
            Some(ParametricStyle::Background(color)) => Resolved::Background(color),
            None => {
                tracing::trace!(style = encoding, "unresolved style passed through");
                Resolved::Unresolved
            }
        }
    }
}

/// The documented default population.
fn default_styles() -> Vec<(&'static str, Style, &'static str)> {
    vec![
        // Modifiers
        (
            "reset",
            Style::new(),
            "color: inherit; background-color: inherit; font-weight: normal; font-style: normal; text-decoration: none; opacity: 1; filter: none;",
        ),
        ("bold", Style::new().bold(), "font-weight: bold;"),
        ("dim", Style::new().dim(), "opacity: 0.6;"),
        ("italic", Style::new().italic(), "font-style: italic;"),
        ("underline", Style::new().underlined(), "text-decoration: underline;"),
        ("inverse", Style::new().reverse(), "filter: invert(100%);"),
        ("hidden", Style::new().hidden(), "opacity: 0;"),
        (
            "strikethrough",
            Style::new().strikethrough(),
            "text-decoration: line-through;",
        ),
        // Foreground
        ("black", Style::new().black(), "color: black;"),
        ("red", Style::new().red(), "color: red;"),
        ("green", Style::new().green(), "color: green;"),
        ("yellow", Style::new().yellow(), "color: yellow;"),
        ("blue", Style::new().blue(), "color: blue;"),
        ("magenta", Style::new().magenta(), "color: magenta;"),
        ("cyan", Style::new().cyan(), "color: cyan;"),
        ("white", Style::new().white(), "color: white;"),
        ("gray", Style::new().black().bright(), "color: gray;"),
        ("grey", Style::new().black().bright(), "color: grey;"),
        // Bright foreground
        ("blackBright", Style::new().black().bright(), "color: #3f3f3f;"),
        ("redBright", Style::new().red().bright(), "color: #ff0000;"),
        ("greenBright", Style::new().green().bright(), "color: #00ff00;"),
        ("yellowBright", Style::new().yellow().bright(), "color: #ffff00;"),
        ("blueBright", Style::new().blue().bright(), "color: #0000ff;"),
        ("magentaBright", Style::new().magenta().bright(), "color: #ff00ff;"),
        ("cyanBright", Style::new().cyan().bright(), "color: #00ffff;"),
        ("whiteBright", Style::new().white().bright(), "color: #ffffff;"),
        // Background
        ("bgBlack", Style::new().on_black(), "background-color: black;"),
        ("bgRed", Style::new().on_red(), "background-color: red;"),
        ("bgGreen", Style::new().on_green(), "background-color: green;"),
        ("bgYellow", Style::new().on_yellow(), "background-color: yellow;"),
        ("bgBlue", Style::new().on_blue(), "background-color: blue;"),
        ("bgMagenta", Style::new().on_magenta(), "background-color: magenta;"),
        ("bgCyan", Style::new().on_cyan(), "background-color: cyan;"),
        ("bgWhite", Style::new().on_white(), "background-color: white;"),
        ("bgGray", Style::new().on_black().on_bright(), "background-color: gray;"),
        ("bgGrey", Style::new().on_black().on_bright(), "background-color: grey;"),
        // Bright background
        (
            "bgBlackBright",
            Style::new().on_black().on_bright(),
            "background-color: #3f3f3f;",
        ),
        (
            "bgRedBright",
            Style::new().on_red().on_bright(),
            "background-color: #ff0000;",
        ),
        (
            "bgGreenBright",
            Style::new().on_green().on_bright(),
            "background-color: #00ff00;",
        ),
        (
            "bgYellowBright",
            Style::new().on_yellow().on_bright(),
            "background-color: #ffff00;",
        ),
        (
            "bgBlueBright",
            Style::new().on_blue().on_bright(),
            "background-color: #0000ff;",
        ),
        (
            "bgMagentaBright",
            Style::new().on_magenta().on_bright(),
            "background-color: #ff00ff;",
        ),
        (
            "bgCyanBright",
            Style::new().on_cyan().on_bright(),
            "background-color: #00ffff;",
        ),
        (
            "bgWhiteBright",
            Style::new().on_white().on_bright(),
            "background-color: #ffffff;",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_population() {
        let vocabulary = StyleVocabulary::default();
        assert_eq!(vocabulary.len(), 44);
        assert_eq!(vocabulary.css("bold"), Some("font-weight: bold;"));
        assert_eq!(vocabulary.css("bgBlue"), Some("background-color: blue;"));
        assert_eq!(vocabulary.css("blackBright"), Some("color: #3f3f3f;"));
        assert!(vocabulary.contains("grey"));
    }

    #[test]
    fn test_names_are_sorted() {
        let vocabulary = StyleVocabulary::empty()
            .add("zeta", Style::new(), "")
            .add("alpha", Style::new(), "");
        assert_eq!(vocabulary.names(), vec!["alpha", "zeta"]);
    }

    mod resolution {
        use super::*;

        #[test]
        fn test_named_wins() {
            let vocabulary = StyleVocabulary::default();
            match vocabulary.resolve("red") {
                Resolved::Named(named) => assert_eq!(named.css(), "color: red;"),
                other => panic!("expected named, got {:?}", other),
            }
        }

        #[test]
        fn test_named_shadows_parametric() {
            let vocabulary =
                StyleVocabulary::empty().add("hex#fff", Style::new().bold(), "font-weight: bold;");
            assert!(matches!(vocabulary.resolve("hex#fff"), Resolved::Named(_)));
        }

        #[test]
        fn test_hex_families() {
            let vocabulary = StyleVocabulary::default();
            assert_eq!(vocabulary.resolve("hex#ff0000").css(), "color: #ff0000");
            assert_eq!(
                vocabulary.resolve("bgHex#0f0").css(),
                "background-color: #0f0"
            );
        }

        #[test]
        fn test_unresolved() {
            let vocabulary = StyleVocabulary::default();
            let resolved = vocabulary.resolve("sparkly");
            assert!(resolved.is_unresolved());
            assert_eq!(resolved.css(), "");
            assert!(resolved.terminal_style().is_none());
            assert!(vocabulary.resolve("hex#ff00").is_unresolved());
        }

        #[test]
        fn test_hex_terminal_styles() {
            let vocabulary = StyleVocabulary::empty();
            assert_eq!(
                vocabulary.resolve("hex#ff0000").terminal_style(),
                Some(Style::new().fg(Color::Color256(196)))
            );
            assert_eq!(
                vocabulary.resolve("bgHex#ff0000").terminal_style(),
                Some(Style::new().bg(Color::Color256(196)))
            );
        }
    }

    #[test]
    fn test_merge_overrides() {
        let custom = StyleVocabulary::empty().add("red", Style::new().magenta(), "color: crimson;");
        let merged = StyleVocabulary::default().merge(custom);
        assert_eq!(merged.css("red"), Some("color: crimson;"));
        assert_eq!(merged.len(), 44);
    }
}
