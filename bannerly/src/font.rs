//! Font capability contract and the built-in font variants.

mod parser;

use std::collections::HashMap;

#[cfg(feature = "fonts")]
pub use bannerly_fonts::FontFile;

pub use parser::{FontError, ParsedFont, PRINTABLE_ASCII};

/// A fixed-height ASCII-art font.
///
/// The two built-in implementations, [`BlockFont`] (procedural) and
/// [`FigletFont`] (parsed from a font description), are interchangeable:
/// nothing consuming this trait may depend on which variant is behind it.
/// Implementations are immutable after construction and shared freely across
/// threads.
pub trait Font: Send + Sync {
    /// Display name of the font.
    fn name(&self) -> &str;

    /// Fixed number of rows per glyph.
    fn height(&self) -> usize;

    /// Character substituted for unsupported input outside strict mode.
    fn placeholder(&self) -> char;

    /// Returns true if the font has a glyph for `character`.
    fn supports(&self, character: char) -> bool;

    /// The rows of the glyph for `character`.
    ///
    /// Falls back to the placeholder glyph for unsupported characters; only
    /// [`supports`](Font::supports) determines substitution policy upstream,
    /// so callers should not rely on this method ever failing.
    fn glyph(&self, character: char) -> &[String];
}

/// A font decoded from a font-description text.
#[derive(Debug)]
pub struct FigletFont {
    name: String,
    parsed: ParsedFont,
}

impl FigletFont {
    const PLACEHOLDER: char = '?';

    /// Wraps an already-parsed glyph table under a display name.
    #[must_use]
    pub fn new(name: impl Into<String>, parsed: ParsedFont) -> Self {
        Self {
            name: name.into(),
            parsed,
        }
    }

    /// Decodes a font description and wraps it under a display name.
    ///
    /// # Errors
    /// Returns `Err` when the description is malformed; see [`FontError`].
    pub fn from_description(name: impl Into<String>, text: &str) -> Result<Self, FontError> {
        Ok(Self::new(name, ParsedFont::parse(text)?))
    }

    /// Decodes a font from the `bannerly-fonts` crate.
    ///
    /// Only available with the `fonts` feature.
    #[expect(clippy::missing_panics_doc, reason = "should be caught in tests")]
    #[cfg(feature = "fonts")]
    #[must_use]
    pub fn built_in(font: FontFile) -> Self {
        Self::from_description(font.name(), font.as_str()).expect("Should be tested")
    }
}

impl Font for FigletFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn height(&self) -> usize {
        self.parsed.height().get()
    }

    fn placeholder(&self) -> char {
        Self::PLACEHOLDER
    }

    fn supports(&self, character: char) -> bool {
        self.parsed.contains(character)
    }

    fn glyph(&self, character: char) -> &[String] {
        self.parsed
            .glyph(character)
            .or_else(|| self.parsed.glyph(Self::PLACEHOLDER))
            .expect("placeholder glyph present in every parsed font")
    }
}

/// Built-in compact procedural font.
///
/// Generates a templated glyph for A–Z, 0–9 and space; letters are normalized
/// to uppercase, anything else is unsupported.
#[derive(Debug)]
pub struct BlockFont {
    glyphs: HashMap<char, Vec<String>>,
}

impl BlockFont {
    const HEIGHT: usize = 5;
    const PLACEHOLDER: char = '?';

    /// Builds the glyph table.
    #[must_use]
    pub fn new() -> Self {
        let mut glyphs = HashMap::new();
        for character in ('A'..='Z').chain('0'..='9') {
            drop(glyphs.insert(character, Self::template(character)));
        }
        drop(glyphs.insert(' ', vec!["  ".to_owned(); Self::HEIGHT]));
        drop(glyphs.insert(Self::PLACEHOLDER, Self::template(Self::PLACEHOLDER)));
        Self { glyphs }
    }

    fn template(character: char) -> Vec<String> {
        vec![
            "##".to_owned(),
            format!("{character} "),
            format!("{character} "),
            format!("{character} "),
            "##".to_owned(),
        ]
    }

    fn normalize(character: char) -> char {
        if character.is_alphabetic() {
            character.to_uppercase().next().unwrap_or(character)
        } else {
            character
        }
    }
}

impl Default for BlockFont {
    fn default() -> Self {
        Self::new()
    }
}

impl Font for BlockFont {
    fn name(&self) -> &str {
        "block"
    }

    fn height(&self) -> usize {
        Self::HEIGHT
    }

    fn placeholder(&self) -> char {
        Self::PLACEHOLDER
    }

    fn supports(&self, character: char) -> bool {
        self.glyphs.contains_key(&Self::normalize(character))
    }

    fn glyph(&self, character: char) -> &[String] {
        self.glyphs
            .get(&Self::normalize(character))
            .unwrap_or_else(|| &self.glyphs[&Self::PLACEHOLDER])
    }
}
