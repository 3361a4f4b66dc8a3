//! Structural parser: keys, key-value pairs, table headers, arrays, and inline tables.
//!
//! Grounded on the teacher's `toml.rs` `expression`/`table_comment`/`keyval_comment`/
//! `ws_comment` alternation structure and its `Expression`/`NLExpression` section-stream
//! shape. This module folds the whole document into a flat stream of root pairs plus
//! tagged sections; [`crate::assembler`] turns that stream into a tree.
//!
//! The alternation and repetition points (table-header vs. array-of-tables-header
//! dispatch, the run of key-value lines inside a section, the comma-separated element
//! lists of arrays and inline tables) are expressed with `nom`'s `alt`/`many0`/
//! `separated_list0`, matching the teacher's own reach for `nom` at exactly these seams.
//! Each recognizer still does its own lexing (it needs the document root for byte
//! offsets), so it's lifted into `nom::IResult` via [`lift`]: `nom::Err::Failure` once a
//! branch has consumed its discriminator, `nom::Err::Error` while a combinator is still
//! free to try the next alternative — the same commit convention §4.1 describes.

use nom::branch::alt;
use nom::character::complete::char as nom_char;
use nom::multi::{many0, separated_list0};
use nom::IResult;

use crate::error::TomlError;
use crate::offset;
use crate::scalars;
use crate::types::{StrType, Table, Value};

/// Lifts a plain recognizer's result into a `nom::IResult`, as a hard `Failure`: once a
/// recognizer like this has run at all it has already committed past its discriminator,
/// so nothing above it should backtrack and try a sibling alternative instead.
fn lift<T>(res: Result<(&str, T), TomlError>) -> IResult<&str, T, TomlError> {
    res.map_err(nom::Err::Failure)
}

/// Unwraps a `nom::Err<TomlError>` back into a plain `TomlError`, for callers that stay
/// on the `Result<(&str, T), TomlError>` convention used throughout this crate.
fn unwrap_nom_err(err: nom::Err<TomlError>) -> TomlError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => unreachable!("no recognizer in this module uses nom's streaming mode"),
    }
}

/// A single `key = value` line, with its (possibly dotted) key already split into parts.
#[derive(Debug, Clone)]
pub struct KeyVal {
    pub path: Vec<String>,
    pub value: Value,
}

/// A `[header]` or `[[header]]` block: its path plus the pairs that followed it, up to
/// the next header or end of input.
#[derive(Debug, Clone)]
pub enum Section {
    Table { path: Vec<String>, pairs: Vec<KeyVal> },
    ArrayOfTables { path: Vec<String>, pairs: Vec<KeyVal> },
}

/// The whole document, still flat: pairs that precede any header, then the sections.
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub root_pairs: Vec<KeyVal>,
    pub sections: Vec<Section>,
}

fn ws_nl_comment(input: &str) -> &str {
    let mut rest = input;
    loop {
        let (r, _) = scalars::ws(rest).expect("ws always succeeds");
        rest = r;
        if let Ok((r, _)) = scalars::line_ending(rest) {
            rest = r;
            continue;
        }
        if let Ok((r, _)) = scalars::comment(rest) {
            rest = r;
            continue;
        }
        break;
    }
    rest
}

/// A simple (undotted) key: bare, or a basic/literal quoted string (not multi-line).
pub fn simple_key<'a>(root: &str, input: &'a str) -> Result<(&'a str, String), TomlError> {
    match input.chars().next() {
        Some('"') => {
            if input.starts_with("\"\"\"") {
                Err(TomlError::syntax(offset(root, input), "multi-line strings are not allowed as keys"))
            } else {
                scalars::basic_string(root, input)
            }
        }
        Some('\'') => {
            if input.starts_with("'''") {
                Err(TomlError::syntax(offset(root, input), "multi-line strings are not allowed as keys"))
            } else {
                scalars::literal_string(root, input)
            }
        }
        Some(c) if scalars::is_bare_key_char(c) => {
            let (rest, key) =
                scalars::bare_key(input).map_err(|_| TomlError::syntax(offset(root, input), "expected a key"))?;
            Ok((rest, key.to_string()))
        }
        _ => Err(TomlError::syntax(offset(root, input), "expected a key")),
    }
}

/// A key, possibly dotted: `a.b.c`, with whitespace permitted around each `.`.
pub fn dotted_key<'a>(root: &str, input: &'a str) -> Result<(&'a str, Vec<String>), TomlError> {
    let (mut rest, first) = simple_key(root, input)?;
    let mut parts = vec![first];
    loop {
        let (after_ws, _) = scalars::ws(rest).expect("ws always succeeds");
        match after_ws.strip_prefix('.') {
            Some(after_dot) => {
                let (after_ws2, _) = scalars::ws(after_dot).expect("ws always succeeds");
                let (rest2, part) = simple_key(root, after_ws2)?;
                parts.push(part);
                rest = rest2;
            }
            None => break,
        }
    }
    Ok((rest, parts))
}

/// Dispatches on the first character to recognize a value, per the spec's dispatch
/// table. Arrays and inline tables recurse back through this function for their
/// elements/members.
pub fn value<'a>(root: &str, input: &'a str) -> Result<(&'a str, Value), TomlError> {
    match input.chars().next() {
        None => Err(TomlError::syntax(offset(root, input), "expected a value")),
        Some('"') => {
            if input.starts_with("\"\"\"") {
                let (rest, s) = scalars::multiline_basic_string(root, input)?;
                Ok((rest, Value::String(s, StrType::MLBasic)))
            } else {
                let (rest, s) = scalars::basic_string(root, input)?;
                Ok((rest, Value::String(s, StrType::Basic)))
            }
        }
        Some('\'') => {
            if input.starts_with("'''") {
                let (rest, s) = scalars::multiline_literal_string(root, input)?;
                Ok((rest, Value::String(s, StrType::MLLiteral)))
            } else {
                let (rest, s) = scalars::literal_string(root, input)?;
                Ok((rest, Value::String(s, StrType::Literal)))
            }
        }
        Some('t') | Some('f') => {
            let (rest, b) = scalars::boolean(root, input)?;
            Ok((rest, Value::Boolean(b)))
        }
        Some('[') => array(root, input),
        Some('{') => inline_table(root, input),
        Some('i') | Some('n') => {
            let (rest, f) = scalars::special_float(root, input)?;
            Ok((rest, Value::Float(f)))
        }
        Some('+') | Some('-') => {
            if input[1..].starts_with("inf") || input[1..].starts_with("nan") {
                let (rest, f) = scalars::special_float(root, input)?;
                Ok((rest, Value::Float(f)))
            } else if scalars::looks_like_float(input) {
                let (rest, f) = scalars::float(root, input)?;
                Ok((rest, Value::Float(f)))
            } else {
                let (rest, i) = scalars::integer(root, input)?;
                Ok((rest, Value::Integer(i)))
            }
        }
        Some(c) if c.is_ascii_digit() => {
            if scalars::looks_like_date(input) {
                scalars::date_time_value(root, input)
            } else if scalars::looks_like_time(input) {
                let (rest, t) = scalars::time(root, input)?;
                Ok((rest, Value::LocalTime(t)))
            } else if scalars::looks_like_float(input) {
                let (rest, f) = scalars::float(root, input)?;
                Ok((rest, Value::Float(f)))
            } else {
                let (rest, i) = scalars::integer(root, input)?;
                Ok((rest, Value::Integer(i)))
            }
        }
        Some(c) => Err(TomlError::syntax(offset(root, input), format!("unexpected character {:?}", c))),
    }
}

/// A comma separator between array elements: any amount of whitespace, newlines, and
/// comments are allowed on either side (§4.2's "array" production).
fn array_comma(input: &str) -> IResult<&str, (), TomlError> {
    let (r, _) = nom_char(',')(ws_nl_comment(input))?;
    Ok((ws_nl_comment(r), ()))
}

fn array<'a>(root: &str, input: &'a str) -> Result<(&'a str, Value), TomlError> {
    let rest = input.strip_prefix('[').expect("caller checked '['");
    let rest = ws_nl_comment(rest);
    if let Some(r) = rest.strip_prefix(']') {
        return Ok((r, Value::Array(Vec::new())));
    }
    let (rest, values) = separated_list0(array_comma, |i| lift(value(root, i)))(rest).map_err(unwrap_nom_err)?;
    let rest = ws_nl_comment(rest);
    // A single trailing comma before ']' is permitted, but `separated_list0` above
    // already consumed every comma that was followed by another value.
    let rest = match rest.strip_prefix(',') {
        Some(r) => ws_nl_comment(r),
        None => rest,
    };
    match rest.strip_prefix(']') {
        Some(r) => Ok((r, Value::Array(values))),
        None => Err(TomlError::syntax(offset(root, rest), "expected ',' or ']'")),
    }
}

/// A single `key = value` pair inside `{ ... }`, with its dotted key already split.
fn inline_pair<'a>(root: &str, input: &'a str) -> Result<(&'a str, (Vec<String>, Value)), TomlError> {
    let (r, path) = dotted_key(root, input)?;
    let (r, _) = scalars::ws(r).expect("ws always succeeds");
    let r = r
        .strip_prefix('=')
        .ok_or_else(|| TomlError::syntax(offset(root, r), "expected '='"))?;
    let (r, _) = scalars::ws(r).expect("ws always succeeds");
    let (r, v) = value(root, r)?;
    Ok((r, (path, v)))
}

/// The horizontal-whitespace-only comma separator between inline-table members: unlike
/// an array's, newlines and comments are forbidden between `{` and `}` (§4.2).
fn inline_comma(input: &str) -> IResult<&str, (), TomlError> {
    let (r, _) = scalars::ws(input).expect("ws always succeeds");
    let (r, _) = nom_char(',')(r)?;
    let (r, _) = scalars::ws(r).expect("ws always succeeds");
    Ok((r, ()))
}

fn inline_table<'a>(root: &str, input: &'a str) -> Result<(&'a str, Value), TomlError> {
    let rest = input.strip_prefix('{').expect("caller checked '{'");
    let (rest, _) = scalars::ws(rest).expect("ws always succeeds");
    if let Some(r) = rest.strip_prefix('}') {
        return Ok((r, Value::InlineTable(Table::new())));
    }
    // A trailing comma is forbidden here, so (unlike `array`) nothing follows the
    // `separated_list0` call to tolerate one: a comma with no pair after it simply fails
    // inside `inline_pair`, as a hard `nom::Err::Failure`.
    let (rest, pairs) = separated_list0(inline_comma, |i| lift(inline_pair(root, i)))(rest).map_err(unwrap_nom_err)?;
    let (rest, _) = scalars::ws(rest).expect("ws always succeeds");
    let rest = rest
        .strip_prefix('}')
        .ok_or_else(|| TomlError::syntax(offset(root, rest), "expected ',' or '}'"))?;

    let mut table = Table::new();
    let mut dotted_created = std::collections::HashSet::new();
    for (path, v) in pairs {
        crate::assembler::assign_pair(&mut table, &mut dotted_created, &path, v)?;
    }
    Ok((rest, Value::InlineTable(table)))
}

fn keyval<'a>(root: &str, input: &'a str) -> Result<(&'a str, KeyVal), TomlError> {
    let (rest, path) = dotted_key(root, input)?;
    let (rest, _) = scalars::ws(rest).expect("ws always succeeds");
    let rest = rest
        .strip_prefix('=')
        .ok_or_else(|| TomlError::syntax(offset(root, rest), "expected '='"))?;
    let (rest, _) = scalars::ws(rest).expect("ws always succeeds");
    let (rest, value) = value(root, rest)?;
    Ok((rest, KeyVal { path, value }))
}

fn skip_blank(input: &str) -> &str {
    let mut rest = input;
    loop {
        let (r, _) = scalars::ws(rest).expect("ws always succeeds");
        rest = r;
        if let Ok((r, _)) = scalars::comment(rest) {
            rest = r;
        }
        if rest.is_empty() {
            return rest;
        }
        if let Ok((r, _)) = scalars::line_ending(rest) {
            rest = r;
            continue;
        }
        return rest;
    }
}

fn end_of_line<'a>(root: &str, input: &'a str) -> Result<&'a str, TomlError> {
    let (rest, _) = scalars::ws(input).expect("ws always succeeds");
    let rest = match scalars::comment(rest) {
        Ok((r, _)) => r,
        Err(_) => rest,
    };
    if rest.is_empty() {
        return Ok(rest);
    }
    if let Ok((r, _)) = scalars::line_ending(rest) {
        return Ok(r);
    }
    Err(TomlError::syntax(offset(root, rest), "expected end of line"))
}

fn header_path<'a>(root: &str, input: &'a str) -> Result<(&'a str, Vec<String>), TomlError> {
    let (r, _) = scalars::ws(input).expect("ws always succeeds");
    let (r, path) = dotted_key(root, r)?;
    let (r, _) = scalars::ws(r).expect("ws always succeeds");
    Ok((r, path))
}

/// One key-value line: a keyval, its end-of-line, and any following blank/comment lines.
/// Returns a recoverable `nom::Err::Error` on the two conditions that end a run of
/// key-value lines (end of input, or the next `[header]`/`[[header]]`) without consuming
/// anything, so `many0` stops cleanly instead of misreporting the header line itself as a
/// malformed key-value pair.
fn keyval_line<'a>(root: &str, input: &'a str) -> IResult<&'a str, KeyVal, TomlError> {
    if input.is_empty() || input.starts_with('[') {
        return Err(nom::Err::Error(TomlError::syntax(offset(root, input), "not a key-value line")));
    }
    let (rest, kv) = lift(keyval(root, input))?;
    let rest = end_of_line(root, rest).map_err(nom::Err::Failure)?;
    Ok((skip_blank(rest), kv))
}

/// The run of key-value lines at the start of a section (or the document root), up to
/// the next header or end of input.
fn keyval_lines<'a>(root: &str, input: &'a str) -> Result<(&'a str, Vec<KeyVal>), TomlError> {
    many0(|i| keyval_line(root, i))(skip_blank(input)).map_err(unwrap_nom_err)
}

fn table_header<'a>(root: &'a str, input: &'a str) -> IResult<&'a str, Section, TomlError> {
    let rest = input
        .strip_prefix('[')
        .ok_or_else(|| nom::Err::Error(TomlError::syntax(offset(root, input), "expected '['")))?;
    let (rest, path) = lift(header_path(root, rest))?;
    let rest = rest
        .strip_prefix(']')
        .ok_or_else(|| nom::Err::Failure(TomlError::syntax(offset(root, rest), "expected ']'")))?;
    let rest = end_of_line(root, rest).map_err(nom::Err::Failure)?;
    let (rest, pairs) = lift(keyval_lines(root, rest))?;
    Ok((rest, Section::Table { path, pairs }))
}

fn array_of_tables_header<'a>(root: &'a str, input: &'a str) -> IResult<&'a str, Section, TomlError> {
    let rest = input
        .strip_prefix("[[")
        .ok_or_else(|| nom::Err::Error(TomlError::syntax(offset(root, input), "expected '[['")))?;
    let (rest, path) = lift(header_path(root, rest))?;
    let rest = rest
        .strip_prefix("]]")
        .ok_or_else(|| nom::Err::Failure(TomlError::syntax(offset(root, rest), "expected ']]'")))?;
    let rest = end_of_line(root, rest).map_err(nom::Err::Failure)?;
    let (rest, pairs) = lift(keyval_lines(root, rest))?;
    Ok((rest, Section::ArrayOfTables { path, pairs }))
}

/// A single `[header]` or `[[header]]` section. `[[` must be tried first: on `[[a]]`,
/// `table_header` would otherwise consume the single leading `[` and commit, then fail
/// deep inside `header_path` on the second `[` it wasn't expecting — exactly the
/// "load-bearing" dispatch order §4.1 calls out for dates vs. numbers, generalized here
/// to headers vs. array-of-tables headers.
fn section<'a>(root: &'a str, input: &'a str) -> IResult<&'a str, Section, TomlError> {
    alt((|i| array_of_tables_header(root, i), |i| table_header(root, i)))(input)
}

/// Parses the whole document into root pairs plus a flat list of sections.
pub fn parse_document(root: &str, input: &str) -> Result<Parsed, TomlError> {
    let (rest, root_pairs) = keyval_lines(root, input)?;
    let (rest, sections) = many0(|i| section(root, i))(rest).map_err(unwrap_nom_err)?;

    if !rest.is_empty() {
        return Err(TomlError::syntax(offset(root, rest), "expected a table header"));
    }

    Ok(Parsed { root_pairs, sections })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dotted_key() {
        let src = "a.b.c = 1";
        let (rest, path) = dotted_key(src, src).unwrap();
        assert_eq!(rest, " = 1");
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_root_pairs_then_table() {
        let src = "a = 1\nb = 2\n[tbl]\nc = 3\n";
        let parsed = parse_document(src, src).unwrap();
        assert_eq!(parsed.root_pairs.len(), 2);
        assert_eq!(parsed.sections.len(), 1);
        match &parsed.sections[0] {
            Section::Table { path, pairs } => {
                assert_eq!(path, &vec!["tbl".to_string()]);
                assert_eq!(pairs.len(), 1);
            }
            _ => panic!("expected a table section"),
        }
    }

    #[test]
    fn test_array_value() {
        let src = "[1, 2, 3]";
        let (rest, v) = value(src, src).unwrap();
        assert_eq!(rest, "");
        assert_eq!(v, Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    }

    #[test]
    fn test_inline_table_forbids_trailing_comma() {
        let src = "{ a = 1, }";
        assert!(value(src, src).is_err());
    }
}
