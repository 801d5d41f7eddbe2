//! Collection of `.flf` font descriptions to be used by the
//! [`bannerly`](https://crates.io/crates/bannerly) crate.

macro_rules! fonts {
    ($($name:ident => $file_name:expr,)*) => {

        /// Included fonts
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum FontFile {
            $(
                #[doc = concat!("Font `", $file_name, ".flf`")]
                $name,
            )*
        }

        impl FontFile {
            /// An array containing all the variants
            pub const ALL: [Self; const{0 $(+ {_ = $file_name; 1} )*}] = [$(Self::$name),*];

            /// The contents of a font description file
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => include_str!(concat!("../fonts/", $file_name, ".flf")),)*
                }
            }

            /// The file stem
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $file_name,)*
                }
            }

            /// Match a font name to an included font
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($file_name => Some(Self::$name),)*
                    _ => None,
                }
            }

        }

    };
}

fonts! {
    Banner => "banner",
    Term => "term",
}

#[cfg(test)]
mod tests {
    use super::FontFile;

    #[test]
    fn names_round_trip() {
        for font in FontFile::ALL {
            assert_eq!(FontFile::from_name(font.name()), Some(font));
        }
        assert_eq!(FontFile::from_name("no-such-font"), None);
    }

    #[test]
    fn descriptions_carry_the_format_signature() {
        for font in FontFile::ALL {
            assert!(font.as_str().starts_with("flf2a"), "{font:?}");
        }
    }
}
