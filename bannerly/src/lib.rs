//! A crate for parsing FIGlet-style font descriptions and rendering short
//! strings as multi-line ASCII-art banners.
//!
//! # Features
//!
//! - A font-description parser for the `flf2a` text format
//!   ([`ParsedFont`](crate::font::ParsedFont))
//! - Interchangeable procedural and parsed fonts behind one trait
//!   ([`Font`](crate::font::Font))
//! - A read-only catalog of named fonts ([`FontCatalog`](crate::catalog::FontCatalog))
//! - A compositor that reports warnings and failures as values
//!   ([`Renderer`](crate::render::Renderer), [`RenderResult`](crate::render::RenderResult))
//!
//! # Example
//!
//! ```
//! # use bannerly::font::BlockFont;
//! # use bannerly::render::Renderer;
//! let font = BlockFont::new();
//! let result = Renderer::new(&font).render("HI");
//! assert!(result.success());
//! assert_eq!(
//!     result.lines(),
//!     ["####", "H I ", "H I ", "H I ", "####"]
//! );
//! ```
//!
//! ## Feature flags
//!
//! - `fonts` (default): adds the embedded fonts in the
//!   [`bannerly-fonts`](https://crates.io/crates/bannerly-fonts) package (via a dependency),
//!   which can be loaded using [`FigletFont::built_in()`](crate::font::FigletFont::built_in)

pub mod catalog;
pub mod font;
pub mod render;
