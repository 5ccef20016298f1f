//! Style vocabulary and style-encoding resolution.
//!
//! - [`vocabulary`]: named styles and the three-way resolution used by both renderers
//! - [`hex`]: the `hex#…` / `bgHex#…` parametric families
//! - [`definition`]: YAML-defined vocabularies

pub mod definition;
pub mod hex;
pub mod vocabulary;

pub use definition::StyleSpec;
pub use hex::{bg_hex_encoding, hex_encoding, HexColor, ParametricStyle, BG_HEX_PREFIX, HEX_PREFIX};
pub use vocabulary::{NamedStyle, Resolved, StyleVocabulary};
