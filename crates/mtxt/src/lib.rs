//! # mtxt - styled text for terminals and devtools consoles
//!
//! Producers style text once, as backend-neutral markup; the markup is
//! compiled at output time to ANSI escape codes for terminals or to the `%c`
//! template convention of devtools consoles.
//!
//! This crate is the user-facing entry point. It re-exports the markup
//! grammar ([`mtxt_markup`]) and the renderers ([`mtxt_render`]) and adds:
//!
//! - [`Chain`]: chainable style builder (`cols().bold().red().paint(..)`)
//! - [`layout`]: rules, boxes, padding and bars
//! - [`code`]: syntax-highlighted code through themes
//! - [`write`]: isolated writing contexts
//! - [`log`], [`warn`], [`error`]: render and print in one call
//!
//! ## Quick start
//!
//! ```rust
//! use mtxt::{cols, hex, render_to_console, render_to_terminal};
//!
//! let markup = format!("Hello {}", cols().bold().paint("world"));
//!
//! assert_eq!(
//!     render_to_terminal(&[markup.as_str()]),
//!     vec!["Hello \x1b[1mworld\x1b[0m"]
//! );
//! assert_eq!(
//!     render_to_console(&[markup.as_str()]),
//!     vec!["%cHello %cworld", "", "font-weight: bold;"]
//! );
//!
//! let accent = hex("#ff6b35").paint("accent");
//! assert_eq!(render_to_console(&[accent.as_str()]), vec!["%caccent", "color: #ff6b35"]);
//! ```
//!
//! ## Custom configuration
//!
//! Rendering depends only on a [`RenderConfig`]: mode, separators, style
//! vocabulary and runtime detector. Build a [`Renderer`] or [`Printer`] from
//! one instead of relying on the defaults.
//!
//! ```rust
//! use mtxt::{cols, RenderConfig, RenderMode, Renderer, Style, StyleVocabulary};
//!
//! let vocabulary = StyleVocabulary::default()
//!     .add("brand", Style::new().magenta().bold(), "color: rebeccapurple; font-weight: bold;");
//! let renderer = Renderer::new(
//!     RenderConfig::new().mode(RenderMode::Console).vocabulary(vocabulary),
//! );
//!
//! let markup = cols().with_style("brand").paint("mtxt");
//! assert_eq!(
//!     renderer.render(&[markup.as_str()]).into_parts(),
//!     vec!["%cmtxt", "color: rebeccapurple; font-weight: bold;"]
//! );
//! ```

pub mod chain;
pub mod code;
pub mod error;
pub mod layout;
pub mod print;
pub mod write;

pub use chain::{bg_hex, cols, hex, Chain};
pub use code::{
    code, CodeOptions, CodeTheme, HighlightNode, Highlighter, LanguageRegistry, SyntaxHighlighter,
};
pub use error::CodeError;
pub use layout::{
    boxed, hr, leftbar, pad, vbar, Align, BoxOptions, BoxStyle, HrOptions, PadOptions, Paint,
    VBarOptions,
};
pub use print::{error, log, warn, Level, Printer};
pub use write::{write, write_with, Writer};

pub use mtxt_markup::{
    self as markup, build_tree, parse, tokenize, wrap, wrap_with_styles, Node, Segment,
};
pub use mtxt_render::{
    self as render, detect_runtime, render, render_to_console, render_to_terminal,
    terminal_width, RenderConfig, RenderMode, RenderOutput, Renderer, Runtime, RuntimeDetector,
    Style, StyleVocabulary, VocabularyError,
};
