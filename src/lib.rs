//! Tessera Core - Deterministic Pattern Engine
//!
//! Turns any string into a seamless, tileable SVG pattern. The same input
//! and options always produce byte-identical output.
//!
//! # Pipeline
//! 1. Hash the input (SHA-1 hex digest)
//! 2. Tint the background from the digest
//! 3. Pick a generator (explicit, or from the digest)
//! 4. Tile shapes, duplicating edge cells so the pattern wraps
//! 5. Serialize as SVG, data URI or CSS data URL

pub mod color;
pub mod error;
pub mod generators;
pub mod hashing;
pub mod palette;
pub mod pattern;
pub mod report;
pub mod svg;

pub use color::{Hsl, Rgb};
pub use error::PatternError;
pub use generators::{Generator, GeneratorKind, Seams};
pub use hashing::{canonical_json, sha256_hex, Digest};
pub use palette::{remap, Palette};
pub use pattern::{GenerationOptions, Pattern};
pub use report::RenderReport;
pub use svg::{AttrValue, SvgDocument, SvgNode, Tag, Transform};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
