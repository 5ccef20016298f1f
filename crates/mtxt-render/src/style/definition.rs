//! YAML style vocabularies.
//!
//! Each top-level key is a style name; its value lists terminal attributes
//! and, optionally, an explicit CSS declaration:
//!
//! ```yaml
//! warning:
//!   fg: yellow
//!   bold: true
//! accent:
//!   fg: "#ff6b35"
//!   bg: bright_black
//! badge:
//!   fg: white
//!   bg: blue
//!   css: "color: white; background-color: royalblue; border-radius: 3px;"
//! ```
//!
//! Colors are the eight ANSI names (plus `gray`/`grey`), their `bright_`
//! variants, or `#rgb`/`#rrggbb` literals. Without `css`, the declaration is
//! derived from the attributes using the same fragments as the default
//! vocabulary.

use std::collections::HashMap;
use std::path::Path;

use console::{Color, Style};
use serde::Deserialize;

use super::hex::HexColor;
use super::vocabulary::{NamedStyle, StyleVocabulary};
use crate::error::VocabularyError;
use crate::util::rgb_to_ansi256;
use mtxt_markup::OPEN_END;

/// One style entry as written in YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSpec {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
    pub css: Option<String>,
}

/// A color accepted in style specs.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SpecColor {
    Named { color: Color, css: &'static str },
    Bright { color: Color, css: &'static str },
    Rgb { rgb: (u8, u8, u8), css: String },
}

impl SpecColor {
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            let hex = HexColor::parse(value)?;
            return Some(SpecColor::Rgb {
                rgb: hex.rgb(),
                css: value.to_string(),
            });
        }

        let lower = value.to_lowercase();
        if let Some(base) = lower.strip_prefix("bright_") {
            let (color, css) = match base {
                "black" => (Color::Black, "#3f3f3f"),
                "red" => (Color::Red, "#ff0000"),
                "green" => (Color::Green, "#00ff00"),
                "yellow" => (Color::Yellow, "#ffff00"),
                "blue" => (Color::Blue, "#0000ff"),
                "magenta" => (Color::Magenta, "#ff00ff"),
                "cyan" => (Color::Cyan, "#00ffff"),
                "white" => (Color::White, "#ffffff"),
                _ => return None,
            };
            return Some(SpecColor::Bright { color, css });
        }

        let (color, css) = match lower.as_str() {
            "black" => (Color::Black, "black"),
            "red" => (Color::Red, "red"),
            "green" => (Color::Green, "green"),
            "yellow" => (Color::Yellow, "yellow"),
            "blue" => (Color::Blue, "blue"),
            "magenta" => (Color::Magenta, "magenta"),
            "cyan" => (Color::Cyan, "cyan"),
            "white" => (Color::White, "white"),
            // gray renders as bright black in terminals
            "gray" | "grey" => {
                return Some(SpecColor::Bright {
                    color: Color::Black,
                    css: "gray",
                })
            }
            _ => return None,
        };
        Some(SpecColor::Named { color, css })
    }

    fn css(&self) -> &str {
        match self {
            SpecColor::Named { css, .. } | SpecColor::Bright { css, .. } => *css,
            SpecColor::Rgb { css, .. } => css.as_str(),
        }
    }

    fn apply_fg(&self, style: Style) -> Style {
        match self {
            SpecColor::Named { color, .. } => style.fg(*color),
            SpecColor::Bright { color, .. } => style.fg(*color).bright(),
            SpecColor::Rgb { rgb, .. } => style.fg(Color::Color256(rgb_to_ansi256(*rgb))),
        }
    }

    fn apply_bg(&self, style: Style) -> Style {
        match self {
            SpecColor::Named { color, .. } => style.bg(*color),
            SpecColor::Bright { color, .. } => style.bg(*color).on_bright(),
            SpecColor::Rgb { rgb, .. } => style.bg(Color::Color256(rgb_to_ansi256(*rgb))),
        }
    }
}

impl StyleSpec {
    /// Builds the named style for `name`.
    pub fn build(&self, name: &str) -> Result<NamedStyle, VocabularyError> {
        let invalid = |value: &str| VocabularyError::InvalidColor {
            style: name.to_string(),
            value: value.to_string(),
        };

        let fg = self
            .fg
            .as_deref()
            .map(|v| SpecColor::parse(v).ok_or_else(|| invalid(v)))
            .transpose()?;
        let bg = self
            .bg
            .as_deref()
            .map(|v| SpecColor::parse(v).ok_or_else(|| invalid(v)))
            .transpose()?;

        let mut style = Style::new();
        let mut css: Vec<String> = Vec::new();

        if let Some(color) = &fg {
            style = color.apply_fg(style);
            css.push(format!("color: {};", color.css()));
        }
        if let Some(color) = &bg {
            style = color.apply_bg(style);
            css.push(format!("background-color: {};", color.css()));
        }
        if self.bold {
            style = style.bold();
            css.push("font-weight: bold;".into());
        }
        if self.dim {
            style = style.dim();
            css.push("opacity: 0.6;".into());
        }
        if self.italic {
            style = style.italic();
            css.push("font-style: italic;".into());
        }
        if self.underline {
            style = style.underlined();
        }
        if self.strikethrough {
            style = style.strikethrough();
        }
        match (self.underline, self.strikethrough) {
            (true, true) => css.push("text-decoration: underline line-through;".into()),
            (true, false) => css.push("text-decoration: underline;".into()),
            (false, true) => css.push("text-decoration: line-through;".into()),
            (false, false) => {}
        }
        if self.inverse {
            style = style.reverse();
            css.push("filter: invert(100%);".into());
        }
        if self.hidden {
            style = style.hidden();
            css.push("opacity: 0;".into());
        }

        let css = match &self.css {
            Some(explicit) => explicit.clone(),
            None => css.join(" "),
        };
        Ok(NamedStyle::new(style, css))
    }
}

/// Rejects names that could never appear as a tag payload.
fn validate_name(name: &str) -> Result<(), VocabularyError> {
    let malformed = name.trim().is_empty() || name.trim() != name;
    if malformed || name.contains('\n') || name.contains(OPEN_END) {
        return Err(VocabularyError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl StyleVocabulary {
    /// Parses a vocabulary from YAML. The result holds only the YAML entries;
    /// use [`merge`](StyleVocabulary::merge) to layer it over the defaults.
    ///
    /// ```rust
    /// use mtxt_render::StyleVocabulary;
    ///
    /// let custom = StyleVocabulary::from_yaml("warning:\n  fg: yellow\n  bold: true\n").unwrap();
    /// assert_eq!(custom.css("warning"), Some("color: yellow; font-weight: bold;"));
    ///
    /// let vocabulary = StyleVocabulary::default().merge(custom);
    /// assert!(vocabulary.contains("red"));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, VocabularyError> {
        Self::parse_yaml(yaml, None)
    }

    /// Reads and parses a YAML vocabulary file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_yaml(&content, Some(path))
    }

    fn parse_yaml(yaml: &str, path: Option<&Path>) -> Result<Self, VocabularyError> {
        let specs: HashMap<String, StyleSpec> = if yaml.trim().is_empty() {
            HashMap::new()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| VocabularyError::Parse {
                path: path.map(Path::to_path_buf),
                message: e.to_string(),
            })?
        };

        let mut vocabulary = StyleVocabulary::empty();
        for (name, spec) in specs {
            validate_name(&name)?;
            let style = spec.build(&name)?;
            vocabulary.insert(name, style);
        }
        Ok(vocabulary)
    }
}
