//! Terminal and devtools-console renderers for mtxt markup.
//!
//! Markup produced with [`mtxt_markup::wrap_with_styles`] is compiled here to
//! whichever output convention the running environment understands:
//!
//! - **Terminal**: one string with inline ANSI escape codes, via [`console`].
//! - **Console**: a `%c` template string plus one CSS declaration per
//!   placeholder, the argument convention of browser-style devtools consoles.
//!
//! Both backends resolve style encodings against the same
//! [`StyleVocabulary`], so the visible text is identical either way.
//!
//! # Quick start
//!
//! ```rust
//! use mtxt_render::{render_to_console, render_to_terminal};
//! use mtxt_markup::wrap_with_styles;
//!
//! let markup = wrap_with_styles(&["red"], "hi");
//!
//! assert_eq!(render_to_terminal(&[markup.as_str()]), vec!["\x1b[31mhi\x1b[0m"]);
//! assert_eq!(render_to_console(&[markup.as_str()]), vec!["%chi", "color: red;"]);
//! ```
//!
//! # Style encodings
//!
//! A style encoding resolves, in order, to:
//!
//! 1. a named style from the vocabulary (`bold`, `red`, `bgBlueBright`, …)
//! 2. `hex#rgb` / `hex#rrggbb`: foreground color
//! 3. `bgHex#rgb` / `bgHex#rrggbb`: background color
//!
//! Anything else renders as identity. Vocabularies can be extended in code
//! with [`StyleVocabulary::add`] or loaded from YAML with
//! [`StyleVocabulary::from_file`].
//!
//! # Configuration
//!
//! [`RenderConfig`] carries everything a render call depends on: mode, join
//! behavior, separators, vocabulary and runtime detector. Nothing is global;
//! the free [`render`] functions use a default configuration.

pub mod dispatch;
pub mod error;
pub mod renderer;
pub mod runtime;
pub mod style;
mod util;

pub use dispatch::{
    render, render_to_console, render_to_terminal, Backend, RenderConfig, RenderMode,
    RenderOutput, Renderer, DEFAULT_SEPARATOR,
};
pub use error::VocabularyError;
pub use renderer::{ConsoleOutput, ConsoleRenderer, TerminalRenderer, PLACEHOLDER};
pub use runtime::{
    detect_runtime, terminal_width, terminal_width_for, NativeRuntime, Runtime, RuntimeDetector,
};
pub use style::{
    bg_hex_encoding, hex_encoding, HexColor, NamedStyle, ParametricStyle, Resolved, StyleSpec,
    StyleVocabulary,
};
pub use util::rgb_to_ansi256;

// Re-export for custom vocabularies.
pub use console::Style;
