//! Parametric style encodings.
//!
//! A parametric style is a family prefix followed by a `#`-prefixed 3 or 6
//! digit hex literal:
//!
//! - `hex#ff6b35` / `hex#fff`: foreground color
//! - `bgHex#ff6b35` / `bgHex#fff`: background color
//!
//! Anything that only partially matches (wrong digit count, non-hex digits,
//! different prefix casing) is not parametric.

/// Prefix of the foreground hex family.
pub const HEX_PREFIX: &str = "hex";

/// Prefix of the background hex family.
pub const BG_HEX_PREFIX: &str = "bgHex";

/// A hex color literal as written in a style encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor<'a> {
    literal: &'a str,
    rgb: (u8, u8, u8),
}

impl<'a> HexColor<'a> {
    /// Parses `#rgb` or `#rrggbb`.
    ///
    /// ```rust
    /// use mtxt_render::style::HexColor;
    ///
    /// let color = HexColor::parse("#f60").unwrap();
    /// assert_eq!(color.rgb(), (255, 102, 0));
    /// assert_eq!(color.literal(), "#f60");
    /// assert!(HexColor::parse("#ff00").is_none());
    /// ```
    pub fn parse(literal: &'a str) -> Option<Self> {
        let digits = literal.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let rgb = match digits.len() {
            // #rgb -> #rrggbb
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
                (channel(0)? * 17, channel(1)? * 17, channel(2)? * 17)
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                (channel(0)?, channel(2)?, channel(4)?)
            }
            _ => return None,
        };

        Some(Self { literal, rgb })
    }

    /// The literal including its `#`, exactly as written.
    pub fn literal(&self) -> &'a str {
        self.literal
    }

    /// The decoded RGB triplet.
    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }
}

/// A style encoding from one of the hex families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametricStyle<'a> {
    /// `hex#…`
    Foreground(HexColor<'a>),
    /// `bgHex#…`
    Background(HexColor<'a>),
}

impl<'a> ParametricStyle<'a> {
    /// Classifies `encoding` as a parametric style, if it is one.
    pub fn parse(encoding: &'a str) -> Option<Self> {
        if let Some(literal) = encoding.strip_prefix(BG_HEX_PREFIX) {
            return HexColor::parse(literal).map(ParametricStyle::Background);
        }
        encoding
            .strip_prefix(HEX_PREFIX)
            .and_then(HexColor::parse)
            .map(ParametricStyle::Foreground)
    }
}

/// Builds a foreground hex encoding, e.g. `hex_encoding("#fff") == "hex#fff"`.
pub fn hex_encoding(literal: &str) -> String {
    format!("{}{}", HEX_PREFIX, literal)
}

/// Builds a background hex encoding, e.g. `bg_hex_encoding("#fff") == "bgHex#fff"`.
pub fn bg_hex_encoding(literal: &str) -> String {
    format!("{}{}", BG_HEX_PREFIX, literal)
}
