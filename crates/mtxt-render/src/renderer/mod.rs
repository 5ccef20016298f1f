//! Backends that compile a style tree to output.
//!
//! Both renderers walk the same [`Forest`](mtxt_markup::Forest) and resolve
//! style encodings against the same [`StyleVocabulary`](crate::StyleVocabulary),
//! so their plain-text content is always identical. They differ in how styles
//! combine:
//!
//! - [`TerminalRenderer`]: every node wraps its rendered children with its own
//!   escape codes; nesting falls out of string wrapping.
//! - [`ConsoleRenderer`]: every node overwrites the declarations of all
//!   placeholders beneath it; the outermost resolved style wins.

pub mod devtools;
pub mod terminal;

pub use devtools::{ConsoleOutput, ConsoleRenderer, PLACEHOLDER};
pub use terminal::TerminalRenderer;
