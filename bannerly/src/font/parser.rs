use std::collections::HashMap;
use std::num::NonZero;

use itertools::Itertools as _;
use thiserror::Error;

/// The 95 printable ASCII characters that every font description must cover,
/// in ascending code-point order.
pub const PRINTABLE_ASCII: std::ops::RangeInclusive<char> = ' '..='~';

/// An immutable glyph table decoded from a font-description text.
///
/// Built once per description via [`ParsedFont::parse`] and never mutated
/// afterwards, so a single instance is safe to share with any number of
/// concurrent readers.
#[derive(Debug)]
pub struct ParsedFont {
    height: NonZero<usize>,
    glyphs: HashMap<char, Vec<String>>,
}

impl ParsedFont {
    /// The 5-character tag every font description header must begin with.
    pub const SIGNATURE: &'static str = "flf2a";

    /// End-mark assumed when the first glyph-data line is empty.
    const FALLBACK_END_MARK: char = '@';

    /// Decodes a font-description text.
    ///
    /// The header supplies the hard-blank character (immediately after the
    /// signature), the glyph height (field 1) and the comment line count
    /// (field 5); the remaining header fields are ignored. After the comments,
    /// exactly `height` lines per character are consumed for the codes
    /// `' '..='~'` in ascending order. Every trailing occurrence of the
    /// end-mark (the last character of the first glyph-data line) is stripped
    /// from each row, and every hard-blank becomes a literal space.
    ///
    /// # Errors
    /// Returns `Err` on a malformed description; see [`FontError`] for details.
    pub fn parse(text: &str) -> Result<Self, FontError> {
        if text.trim().is_empty() {
            return Err(FontError::Empty);
        }
        let normalized = text.replace('\r', "");
        let lines: Vec<&str> = normalized.split('\n').collect();
        let header = lines[0];

        let Some(after_signature) = header.strip_prefix(Self::SIGNATURE) else {
            return Err(FontError::BadSignature(header.to_owned()));
        };
        let Some(hard_blank) = after_signature.chars().next() else {
            return Err(FontError::MissingHardBlank);
        };
        let mut fields = header.split(' ').filter(|field| !field.is_empty());
        let Some([_signature, height, _baseline, _max_length, _old_layout, comment_lines]) =
            fields.next_array()
        else {
            return Err(FontError::NotEnoughHeaderFields(header.to_owned()));
        };
        let Some(height) = NonZero::new(int_field("Height", height)?) else {
            return Err(FontError::ZeroHeight);
        };
        let comment_lines: usize = int_field("Comment_Lines", comment_lines)?;

        let mut index = 1 + comment_lines;
        if index >= lines.len() {
            return Err(FontError::MissingData);
        }
        let end_mark = lines[index]
            .chars()
            .last()
            .unwrap_or(Self::FALLBACK_END_MARK);

        let mut glyphs = HashMap::new();
        for character in PRINTABLE_ASCII {
            let mut glyph = Vec::with_capacity(height.get());
            for _ in 0..height.get() {
                let Some(raw) = lines.get(index) else {
                    return Err(FontError::TruncatedGlyph(character));
                };
                index += 1;
                glyph.push(decode_row(raw, end_mark, hard_blank));
            }
            drop(glyphs.insert(character, glyph));
        }

        Ok(Self { height, glyphs })
    }

    /// Number of rows in every glyph of this font.
    #[must_use]
    pub const fn height(&self) -> NonZero<usize> {
        self.height
    }

    /// Returns true if the table has an entry for `character`.
    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.glyphs.contains_key(&character)
    }

    /// The rows of the glyph for `character`, if the table has an entry.
    #[must_use]
    pub fn glyph(&self, character: char) -> Option<&[String]> {
        self.glyphs.get(&character).map(Vec::as_slice)
    }
}

/// Strips every trailing end-mark and decodes hard-blanks to spaces.
fn decode_row(raw: &str, end_mark: char, hard_blank: char) -> String {
    raw.trim_end_matches(end_mark)
        .replace(hard_blank, " ")
}

fn int_field(name: &'static str, value: &str) -> Result<usize, FontError> {
    value.parse().map_err(|_| FontError::Field {
        name,
        value: value.to_owned(),
    })
}

/// An error in decoding a font description
#[derive(Debug, Error)]
pub enum FontError {
    /// The description is empty or whitespace-only.
    #[error("font text is empty")]
    Empty,
    /// The header does not begin with `"flf2a"`.
    #[error(r#""{0}" does not begin with "flf2a""#)]
    BadSignature(String),
    /// The header ends immediately after the signature, leaving no hard-blank.
    #[error("no hard-blank character after the signature")]
    MissingHardBlank,
    /// The header has fewer than six space-separated fields.
    #[error(r#"header "{0}" does not include enough fields"#)]
    NotEnoughHeaderFields(String),
    /// One of the integer header fields cannot be parsed.
    #[error("\"{value}\" cannot be parsed as the parameter `{name}`")]
    Field {
        /// Field name as published by the format.
        name: &'static str,
        /// The unparseable text.
        value: String,
    },
    /// The height field is 0.
    #[error("height parameter is 0")]
    ZeroHeight,
    /// The comment section runs past the end of the text.
    #[error("glyph data section is missing")]
    MissingData,
    /// The data section ends before all required glyph rows are read.
    #[error("glyph data ends before character {0:?} is complete")]
    TruncatedGlyph(char),
}

#[cfg(test)]
mod tests {
    use super::{FontError, ParsedFont, PRINTABLE_ASCII};

    /// A minimal description: height 3, hard-blank `$`, one comment line,
    /// end-mark `@`, every glyph `"X "` / `"X@"` / `"X@@"` shaped.
    fn sample_font() -> String {
        let mut text = String::from("flf2a$ 3 3 4 0 1\na comment line\n");
        for _ in PRINTABLE_ASCII {
            text.push_str("X$@\nX@@\nX@@@\n");
        }
        text
    }

    #[test]
    fn parses_sample() {
        let font = ParsedFont::parse(&sample_font()).unwrap();
        assert_eq!(font.height().get(), 3);
        for character in PRINTABLE_ASCII {
            let glyph = font.glyph(character).unwrap();
            assert_eq!(glyph.len(), 3, "glyph height for {character:?}");
        }
    }

    #[test]
    fn strips_every_trailing_end_mark_and_decodes_hard_blanks() {
        let font = ParsedFont::parse(&sample_font()).unwrap();
        let glyph = font.glyph(' ').unwrap();
        // "X$@" -> end-mark stripped once, hard-blank decoded
        assert_eq!(glyph[0], "X ");
        // "X@@" -> both trailing end-marks stripped
        assert_eq!(glyph[1], "X");
        assert_eq!(glyph[2], "X");
    }

    #[test]
    fn covers_exactly_printable_ascii() {
        let font = ParsedFont::parse(&sample_font()).unwrap();
        assert!(font.contains(' '));
        assert!(font.contains('~'));
        assert!(font.contains('?'));
        assert!(!font.contains('\n'));
        assert!(!font.contains('\u{7f}'));
        assert_eq!(PRINTABLE_ASCII.count(), 95);
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = sample_font();
        let first = ParsedFont::parse(&text).unwrap();
        let second = ParsedFont::parse(&text).unwrap();
        assert_eq!(first.height(), second.height());
        for character in PRINTABLE_ASCII {
            assert_eq!(first.glyph(character), second.glyph(character));
        }
    }

    #[test]
    fn rejects_blank_text() {
        assert!(matches!(ParsedFont::parse("  \n "), Err(FontError::Empty)));
    }

    #[test]
    fn rejects_bad_signature() {
        let error = ParsedFont::parse("tlf2a$ 3 3 4 0 1\n").unwrap_err();
        assert!(matches!(error, FontError::BadSignature(_)));
    }

    #[test]
    fn rejects_short_header() {
        let error = ParsedFont::parse("flf2a$ 3 3\nrows").unwrap_err();
        assert!(matches!(error, FontError::NotEnoughHeaderFields(_)));
    }

    #[test]
    fn rejects_unparseable_height() {
        let error = ParsedFont::parse("flf2a$ tall 3 4 0 0\nrows").unwrap_err();
        assert!(matches!(error, FontError::Field { name: "Height", .. }));
    }

    #[test]
    fn rejects_zero_height() {
        let error = ParsedFont::parse("flf2a$ 0 3 4 0 0\nrows").unwrap_err();
        assert!(matches!(error, FontError::ZeroHeight));
    }

    #[test]
    fn rejects_missing_data_section() {
        let error = ParsedFont::parse("flf2a$ 3 3 4 0 9").unwrap_err();
        assert!(matches!(error, FontError::MissingData));
    }

    #[test]
    fn rejects_truncated_glyph_data() {
        let error = ParsedFont::parse("flf2a$ 3 3 4 0 0\nX@\nX@\nX@@\n").unwrap_err();
        // The first glyph (space) completes; the second (`!`) cannot.
        assert!(matches!(error, FontError::TruncatedGlyph('!')));
    }

    #[test]
    fn default_end_mark_when_first_glyph_line_is_empty() {
        let mut text = String::from("flf2a$ 1 1 4 0 0\n");
        text.push('\n'); // space glyph: empty line, end-mark defaults to '@'
        for _ in PRINTABLE_ASCII.skip(1) {
            text.push_str("#@@\n");
        }
        let font = ParsedFont::parse(&text).unwrap();
        assert_eq!(font.glyph(' ').unwrap()[0], "");
        assert_eq!(font.glyph('!').unwrap()[0], "#");
    }

    #[test]
    fn carriage_returns_are_normalized() {
        let text = sample_font().replace('\n', "\r\n");
        let font = ParsedFont::parse(&text).unwrap();
        assert_eq!(font.glyph('A').unwrap()[0], "X ");
    }
}
