//! The glyph compositor and its structured result type.

use std::collections::BTreeSet;

use itertools::Itertools as _;

use crate::font::Font;

/// Maximum supported output width, in characters per row.
pub const MAX_OUTPUT_WIDTH: usize = 300;

/// Maximum supported output height, in rows.
pub const MAX_OUTPUT_HEIGHT: usize = 24;

/// The outcome of one render call.
///
/// On success `lines` holds one string per output row and `warnings` one
/// message per distinct substituted character. On failure `lines` is empty
/// and the first (and only) warning explains what went wrong. Never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    lines: Vec<String>,
    warnings: Vec<String>,
    success: bool,
}

impl RenderResult {
    fn completed(lines: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            lines,
            warnings,
            success: true,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            warnings: vec![message.into()],
            success: false,
        }
    }

    /// The rendered rows, top to bottom. Empty on failure.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Warnings in ascending code-point order of the characters they name,
    /// or the single failure message.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether the render completed.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }
}

/// Composes per-character glyphs into aligned multi-line output.
///
/// A pure function of `(text, font, strict)`: identical inputs always produce
/// identical results, and failure never yields partial output.
///
/// ```
/// # use bannerly::font::BlockFont;
/// # use bannerly::render::Renderer;
/// let font = BlockFont::new();
/// let result = Renderer::new(&font).strict(true).render("A*B");
/// assert!(!result.success());
/// assert!(result.warnings()[0].contains("'*'"));
/// ```
#[must_use]
#[derive(Clone, Copy)]
pub struct Renderer<'font> {
    font: &'font dyn Font,
    strict: bool,
}

impl<'font> Renderer<'font> {
    /// Creates a renderer for the given font. Strict mode defaults to off.
    pub const fn new(font: &'font dyn Font) -> Self {
        Self {
            font,
            strict: false,
        }
    }

    /// Sets strict mode: any unsupported input character fails the render
    /// instead of being substituted with the placeholder.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Renders the given text.
    ///
    /// Inputs are validated first (blank text, zero or over-limit font
    /// height), then glyphs are appended row by row with no separator between
    /// characters, then the assembled rows are checked against
    /// [`MAX_OUTPUT_WIDTH`]. All failures are reported through the returned
    /// [`RenderResult`], never as a panic.
    pub fn render(&self, text: &str) -> RenderResult {
        if text.trim().is_empty() {
            return RenderResult::failure("No text provided.");
        }
        let height = self.font.height();
        if height == 0 {
            return RenderResult::failure("Font height must be greater than zero.");
        }
        if height > MAX_OUTPUT_HEIGHT {
            return RenderResult::failure(format!("Output exceeds {MAX_OUTPUT_HEIGHT} lines."));
        }

        let mut rows = vec![String::new(); height];
        // BTreeSet keys unsupported characters by code point, deduplicated
        // and already in ascending order for reporting.
        let mut unsupported = BTreeSet::new();

        for source in text.chars() {
            let character = if self.font.supports(source) {
                source
            } else {
                unsupported.insert(source);
                if self.strict {
                    let listed = unsupported.iter().map(|c| format!("'{c}'")).join(", ");
                    return RenderResult::failure(format!(
                        "Unsupported characters found and --strict mode enabled: {listed}"
                    ));
                }
                self.font.placeholder()
            };

            let glyph = self.font.glyph(character);
            if glyph.len() != height {
                return RenderResult::failure(
                    "Font glyph height does not match the font definition.",
                );
            }
            for (row, glyph_row) in rows.iter_mut().zip(glyph) {
                row.push_str(glyph_row);
            }
        }

        if rows.iter().any(|row| row.chars().count() > MAX_OUTPUT_WIDTH) {
            return RenderResult::failure(format!("Output exceeds {MAX_OUTPUT_WIDTH} characters."));
        }

        let placeholder = self.font.placeholder();
        let warnings = unsupported
            .iter()
            .map(|character| {
                format!("Character '{character}' not supported, rendered as '{placeholder}'.")
            })
            .collect();
        RenderResult::completed(rows, warnings)
    }
}
