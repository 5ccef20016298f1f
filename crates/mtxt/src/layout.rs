//! Layout helpers producing mtxt markup.
//!
//! Every helper returns markup text, so results compose with each other and
//! with [`Chain`](crate::Chain) output before being rendered once.
//!
//! Widths are measured in terminal columns on the visible text: markup tags
//! inside the input do not count.

use mtxt_markup::{parse, plain_text, wrap_with_styles};
use mtxt_render::terminal_width;
use unicode_width::UnicodeWidthStr;

use crate::chain::{cols, Chain};

/// Width used when the terminal cannot be measured.
pub const DEFAULT_WIDTH: usize = 80;

const BAR: &str = "│";

/// A color for a layout element: a style name or a prepared chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    Style(String),
    Chain(Chain),
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Style("gray".to_string())
    }
}

impl From<&str> for Paint {
    fn from(name: &str) -> Self {
        Paint::Style(name.to_string())
    }
}

impl From<String> for Paint {
    fn from(name: String) -> Self {
        Paint::Style(name)
    }
}

impl From<Chain> for Paint {
    fn from(chain: Chain) -> Self {
        Paint::Chain(chain)
    }
}

impl Paint {
    /// The paint as a chain.
    pub fn chain(&self) -> Chain {
        match self {
            Paint::Style(name) => cols().with_style(name.as_str()),
            Paint::Chain(chain) => chain.clone(),
        }
    }

    /// Wraps `text`; empty text stays empty.
    pub fn paint(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.chain().paint(text)
    }
}

/// Visible width of markup text in terminal columns.
pub fn display_width(markup: &str) -> usize {
    plain_text(&parse(markup)).width()
}

// ============================================================================
// Horizontal rule
// ============================================================================

/// Where the title sits on a horizontal rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Options for [`hr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrOptions {
    pub rule: char,
    pub align: Align,
    pub space: usize,
    pub title: Option<String>,
    pub title_color: Paint,
    pub rule_color: Paint,
    pub width: Option<usize>,
}

impl Default for HrOptions {
    fn default() -> Self {
        Self {
            rule: '_',
            align: Align::Center,
            space: 1,
            title: None,
            title_color: Paint::default(),
            rule_color: Paint::default(),
            width: None,
        }
    }
}

impl HrOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: char) -> Self {
        self.rule = rule;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn space(mut self, space: usize) -> Self {
        self.space = space;
        self
    }

    pub fn title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn title_color(mut self, paint: impl Into<Paint>) -> Self {
        self.title_color = paint.into();
        self
    }

    pub fn rule_color(mut self, paint: impl Into<Paint>) -> Self {
        self.rule_color = paint.into();
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Builds a horizontal rule, optionally carrying a title.
///
/// The rule spans `width` columns (the terminal width when unset). A title is
/// surrounded by `space` blanks on each side and placed according to `align`.
///
/// ```rust
/// use mtxt::{hr, Align, HrOptions};
/// use mtxt::layout::display_width;
///
/// let rule = hr(&HrOptions::new().title("Intro").align(Align::Left).width(20));
/// assert_eq!(display_width(&rule), 20);
/// ```
pub fn hr(options: &HrOptions) -> String {
    let width = options
        .width
        .filter(|w| *w > 0)
        .unwrap_or_else(|| terminal_width(DEFAULT_WIDTH));

    let title = match options.title.as_deref() {
        Some(title) if !title.is_empty() => {
            let gap = " ".repeat(options.space);
            format!("{gap}{title}{gap}")
        }
        _ => String::new(),
    };
    let remaining = width.saturating_sub(title.width());
    let run = |n: usize| options.rule_color.paint(&options.rule.to_string().repeat(n));
    let title = options.title_color.paint(&title);

    match options.align {
        Align::Center => {
            let left = remaining / 2;
            format!("{}{}{}", run(left), title, run(remaining - left))
        }
        Align::Left => format!("{}{}", title, run(remaining)),
        Align::Right => format!("{}{}", run(remaining), title),
    }
}

// ============================================================================
// Box
// ============================================================================

/// Corner style of [`boxed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxStyle {
    /// ┌ ┐ └ ┘
    #[default]
    Square,
    /// ╭ ╮ ╰ ╯
    Rounded,
}

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BoxStyle {
    fn chars(&self) -> BoxChars {
        match self {
            BoxStyle::Square => BoxChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BoxStyle::Rounded => BoxChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// Options for [`boxed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxOptions {
    pub color: Paint,
    pub style: BoxStyle,
}

impl BoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, paint: impl Into<Paint>) -> Self {
        self.color = paint.into();
        self
    }

    pub fn rounded(mut self) -> Self {
        self.style = BoxStyle::Rounded;
        self
    }
}

/// Draws a box around the trimmed text, one bordered row per line.
pub fn boxed(text: &str, options: &BoxOptions) -> String {
    let chars = options.style.chars();
    let lines: Vec<&str> = text.trim().split('\n').collect();
    let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

    let horizontal = chars.horizontal.to_string().repeat(width + 2);
    let vertical = options.color.paint(&chars.vertical.to_string());

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(options.color.paint(&format!(
        "{}{}{}",
        chars.top_left, horizontal, chars.top_right
    )));
    for line in &lines {
        let fill = " ".repeat(width - display_width(line));
        rows.push(format!("{vertical} {line}{fill} {vertical}"));
    }
    rows.push(options.color.paint(&format!(
        "{}{}{}",
        chars.bottom_left, horizontal, chars.bottom_right
    )));
    rows.join("\n")
}

// ============================================================================
// Padding and bars
// ============================================================================

/// Options for [`pad`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadOptions {
    /// Spaces on both sides of every line.
    pub x: usize,
    /// Blank lines above and below.
    pub y: usize,
}

/// Pads every line horizontally and the whole block vertically.
pub fn pad(text: &str, options: &PadOptions) -> String {
    let side = " ".repeat(options.x);
    let edge = "\n".repeat(options.y);
    let body = text
        .split('\n')
        .map(|line| format!("{side}{line}{side}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{edge}{body}{edge}")
}

/// Prefixes every line of the trimmed text with an unstyled bar.
pub fn leftbar(text: &str) -> String {
    text.trim()
        .split('\n')
        .map(|line| format!("{BAR} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Options for [`vbar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VBarOptions {
    pub bar: String,
    pub color: Paint,
    pub bold: bool,
    /// Spaces between bar and text.
    pub pad: usize,
}

impl Default for VBarOptions {
    fn default() -> Self {
        Self {
            bar: BAR.to_string(),
            color: Paint::default(),
            bold: false,
            pad: 1,
        }
    }
}

impl VBarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bar(mut self, bar: impl Into<String>) -> Self {
        self.bar = bar.into();
        self
    }

    pub fn color(mut self, paint: impl Into<Paint>) -> Self {
        self.color = paint.into();
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }
}

/// Prefixes every line of the trimmed text with a colored bar.
pub fn vbar(text: &str, options: &VBarOptions) -> String {
    let mut styles = options.color.chain().styles().to_vec();
    if options.bold {
        // bold outermost, color closest to the bar
        styles.push("bold".to_string());
    }
    let bar = wrap_with_styles(&styles, &options.bar);
    let gap = " ".repeat(options.pad);

    text.trim()
        .split('\n')
        .map(|line| format!("{bar}{gap}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
