//! A read-only-after-init registry of named fonts.

use crate::font::Font;

#[cfg(feature = "fonts")]
use crate::font::{BlockFont, FigletFont, FontFile};

/// Maps font names to font instances.
///
/// Populated once at startup and read-only thereafter; pass it by reference
/// into call sites that need font lookup so the compositor stays a pure
/// function of its arguments. Lookup is case-insensitive, listing follows
/// registration order, and the first registered font is the default.
pub struct FontCatalog {
    fonts: Vec<Box<dyn Font>>,
}

impl FontCatalog {
    /// Creates a catalog seeded with its default font.
    #[must_use]
    pub fn new(default: Box<dyn Font>) -> Self {
        Self {
            fonts: vec![default],
        }
    }

    /// Creates a catalog with all built-in fonts: `banner` (the default),
    /// `term` and `block`.
    ///
    /// Only available with the `fonts` feature.
    #[cfg(feature = "fonts")]
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new(Box::new(FigletFont::built_in(FontFile::Banner)));
        catalog.register(Box::new(FigletFont::built_in(FontFile::Term)));
        catalog.register(Box::new(BlockFont::new()));
        catalog
    }

    /// Appends a font. Registration order is the listing order.
    pub fn register(&mut self, font: Box<dyn Font>) {
        self.fonts.push(font);
    }

    /// The default font, fixed at construction.
    #[must_use]
    pub fn default_font(&self) -> &dyn Font {
        self.fonts[0].as_ref()
    }

    /// Looks a font up by name, ignoring ASCII case. Returns `None` when no
    /// font with that name is registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Font> {
        self.fonts
            .iter()
            .find(|font| font.name().eq_ignore_ascii_case(name))
            .map(Box::as_ref)
    }

    /// All registered fonts, in registration order.
    pub fn fonts(&self) -> impl Iterator<Item = &dyn Font> {
        self.fonts.iter().map(Box::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use crate::font::{BlockFont, Font as _};

    use super::FontCatalog;

    #[test]
    fn default_font_is_the_seed() {
        let catalog = FontCatalog::new(Box::new(BlockFont::new()));
        assert_eq!(catalog.default_font().name(), "block");
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = FontCatalog::new(Box::new(BlockFont::new()));
        assert!(catalog.get("BLOCK").is_some());
        assert!(catalog.get("Block").is_some());
        assert!(catalog.get("gothic").is_none());
    }

    #[cfg(feature = "fonts")]
    #[test]
    fn builtin_catalog_lists_in_registration_order() {
        let catalog = FontCatalog::builtin();
        let names: Vec<&str> = catalog.fonts().map(|font| font.name()).collect();
        assert_eq!(names, ["banner", "term", "block"]);
        assert_eq!(catalog.default_font().name(), "banner");
        assert!(catalog.get("TERM").is_some());
    }

    #[cfg(feature = "fonts")]
    #[test]
    fn builtin_heights_fit_the_output_limit() {
        use crate::render::MAX_OUTPUT_HEIGHT;

        for font in FontCatalog::builtin().fonts() {
            let height = font.height();
            assert!(height > 0 && height <= MAX_OUTPUT_HEIGHT, "{}", font.name());
        }
    }
}
