//! A TOML 1.0.0 parser and typed path accessor library.
//!
//! `tomlite` parses a complete TOML document into an owned [`types::Document`] tree and
//! gives you typed, dot-path lookups over it. Unlike the format-preserving parser this
//! crate descends from, the returned document borrows nothing from the source text and
//! cannot be used to re-serialize the original formatting back out.
//!
//! # Examples
//!
//! ```
//! let doc = tomlite::parse(r#"
//! [table]
//! "Key One" = "A Value"
//! Key2 = 1918-07-02
//! "#).unwrap();
//!
//! assert_eq!(doc.get_string("table.\"Key One\""), Some("A Value"));
//! ```

mod access;
mod assembler;
pub mod error;
mod grammar;
mod scalars;
pub mod types;

pub use error::TomlError;
use types::Document;

pub(crate) fn offset(root: &str, rest: &str) -> usize {
    rest.as_ptr() as usize - root.as_ptr() as usize
}

/// Parses a complete TOML 1.0.0 document.
///
/// A leading UTF-8 BOM is stripped before parsing, if present. On success the document
/// has already passed every structural check (no duplicate keys, no table redefinitions,
/// no array-of-tables/table collisions) — there is no such thing as a partially valid
/// result from this function.
pub fn parse(input: &str) -> Result<Document, TomlError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    log::trace!("parsing {} byte document", input.len());
    let parsed = grammar::parse_document(input, input)?;
    assembler::assemble(input, parsed)
}

/// Like [`parse`], but panics on a parse error instead of returning one. Convenient for
/// embedded configuration that's known-good at compile time (tests, examples, fixtures).
pub fn parse_or_panic(input: &str) -> Document {
    match parse(input) {
        Ok(doc) => doc,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_readme_example() {
        let doc = parse(
            r#"
[table]
"Key One" = "A Value"
Key2 = 1918-07-02
"#,
        )
        .unwrap();
        assert_eq!(doc.get_string("table.\"Key One\""), Some("A Value"));
    }

    #[test]
    fn test_bom_stripped() {
        let doc = parse("\u{feff}a = 1\n").unwrap();
        assert_eq!(doc.get_int("a"), Some(1));
    }

    #[test]
    fn test_parse_or_panic_on_good_input() {
        let doc = parse_or_panic("a = 1\n");
        assert_eq!(doc.get_int("a"), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_parse_or_panic_on_bad_input() {
        parse_or_panic("a = \n");
    }
}
