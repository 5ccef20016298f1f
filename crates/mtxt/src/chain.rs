//! Chainable style builder.
//!
//! A [`Chain`] accumulates style encodings and wraps text with them as mtxt
//! markup. Each accessor returns a new chain, so partial chains can be kept
//! and reused:
//!
//! ```rust
//! use mtxt::{cols, hex};
//!
//! let warning = cols().yellow().bold();
//! assert_eq!(
//!     warning.paint("careful"),
//!     "[mtxt-style[[yellow]]][mtxt-style[[bold]]]careful[[/mtxt-style]][[/mtxt-style]]"
//! );
//!
//! let brand = hex("#ff6b35").underline();
//! assert_eq!(brand.styles(), ["underline", "hex#ff6b35"]);
//! ```
//!
//! Accessors prepend, and [`wrap_with_styles`] makes the first style the
//! innermost, so the style added last ends up closest to the text.

use mtxt_markup::wrap_with_styles;
use mtxt_render::{bg_hex_encoding, hex_encoding};

/// An immutable, ordered list of style encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Chain {
    styles: Vec<String>,
}

/// Starts an empty chain.
pub fn cols() -> Chain {
    Chain::default()
}

/// Starts a chain with a foreground hex color (`#rgb` or `#rrggbb`).
pub fn hex(literal: &str) -> Chain {
    cols().with_style(hex_encoding(literal))
}

/// Starts a chain with a background hex color (`#rgb` or `#rrggbb`).
pub fn bg_hex(literal: &str) -> Chain {
    cols().with_style(bg_hex_encoding(literal))
}

impl Chain {
    /// Returns a new chain with `style` prepended.
    pub fn with_style(&self, style: impl Into<String>) -> Self {
        let mut styles = Vec::with_capacity(self.styles.len() + 1);
        styles.push(style.into());
        styles.extend(self.styles.iter().cloned());
        Self { styles }
    }

    /// The accumulated encodings, most recently added first.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Returns true if no style has been added.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Concatenates `content` and wraps it with every accumulated style.
    pub fn apply<S: AsRef<str>>(&self, content: &[S]) -> String {
        let text: String = content.iter().map(|s| s.as_ref()).collect();
        wrap_with_styles(&self.styles, &text)
    }

    /// Wraps a single string.
    pub fn paint(&self, text: &str) -> String {
        wrap_with_styles(&self.styles, text)
    }
}

macro_rules! style_accessors {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl Chain {
            $(
                #[doc = concat!("Prepends `", $name, "`.")]
                pub fn $method(&self) -> Self {
                    self.with_style($name)
                }
            )*
        }
    };
}

style_accessors! {
    reset => "reset",
    bold => "bold",
    dim => "dim",
    italic => "italic",
    underline => "underline",
    inverse => "inverse",
    hidden => "hidden",
    strikethrough => "strikethrough",

    black => "black",
    red => "red",
    green => "green",
    yellow => "yellow",
    blue => "blue",
    magenta => "magenta",
    cyan => "cyan",
    white => "white",
    gray => "gray",
    grey => "grey",

    black_bright => "blackBright",
    red_bright => "redBright",
    green_bright => "greenBright",
    yellow_bright => "yellowBright",
    blue_bright => "blueBright",
    magenta_bright => "magentaBright",
    cyan_bright => "cyanBright",
    white_bright => "whiteBright",

    bg_black => "bgBlack",
    bg_red => "bgRed",
    bg_green => "bgGreen",
    bg_yellow => "bgYellow",
    bg_blue => "bgBlue",
    bg_magenta => "bgMagenta",
    bg_cyan => "bgCyan",
    bg_white => "bgWhite",
    bg_gray => "bgGray",
    bg_grey => "bgGrey",

    bg_black_bright => "bgBlackBright",
    bg_red_bright => "bgRedBright",
    bg_green_bright => "bgGreenBright",
    bg_yellow_bright => "bgYellowBright",
    bg_blue_bright => "bgBlueBright",
    bg_magenta_bright => "bgMagentaBright",
    bg_cyan_bright => "bgCyanBright",
    bg_white_bright => "bgWhiteBright",
}
