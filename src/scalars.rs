//! Scalar recognizers: strings, numbers, booleans, and date/time literals.
//!
//! Grounded on the teacher crate's `internals/util.rs` (`newline`, `ws`, `comment`) and the
//! combinator-alternation shape of `toml.rs`, reworked onto modern `nom` function combinators
//! since the teacher's `method!`/`chain!` macros were removed from `nom` after the teacher's
//! pinned `^1.2.0`. Low-level token shape is recognized with `nom`; semantic validation
//! (overflow, calendar range checks, escape decoding) happens immediately after, since those
//! failures are commits, not backtrack points, per the specification's combinator convention.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::recognize,
    sequence::pair,
    IResult,
};

use crate::error::TomlError;
use crate::offset;
use crate::types::{Date, Offset, Time};

pub(crate) fn is_bare_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn not_eol(c: char) -> bool {
    c == '\t' || (c >= '\u{20}' && c != '\u{7f}')
}

/// Horizontal whitespace: spaces and tabs only.
pub fn ws(input: &str) -> IResult<&str, &str> {
    take_while(|c| c == ' ' || c == '\t')(input)
}

/// `\r\n` or `\n`.
pub fn line_ending(input: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), tag("\n")))(input)
}

/// `#` followed by the rest of the line, not including the terminator.
pub fn comment(input: &str) -> IResult<&str, &str> {
    let (rest, _) = tag("#")(input)?;
    take_while(not_eol)(rest)
}

/// One or more bare-key characters (`[A-Za-z0-9_-]`).
pub fn bare_key(input: &str) -> IResult<&str, &str> {
    take_while1(is_bare_key_char)(input)
}

fn word_boundary(rest: &str) -> bool {
    !rest.chars().next().map(is_bare_key_char).unwrap_or(false)
}

pub fn boolean<'a>(root: &str, input: &'a str) -> Result<(&'a str, bool), TomlError> {
    if let Some(rest) = input.strip_prefix("true") {
        if word_boundary(rest) {
            return Ok((rest, true));
        }
    }
    if let Some(rest) = input.strip_prefix("false") {
        if word_boundary(rest) {
            return Ok((rest, false));
        }
    }
    Err(TomlError::syntax(offset(root, input), "expected 'true' or 'false'"))
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

fn decode_escape<'a>(root: &str, input: &'a str) -> Result<(&'a str, char), TomlError> {
    match input.chars().next() {
        Some('"') => Ok((&input[1..], '"')),
        Some('\\') => Ok((&input[1..], '\\')),
        Some('b') => Ok((&input[1..], '\u{08}')),
        Some('f') => Ok((&input[1..], '\u{0C}')),
        Some('n') => Ok((&input[1..], '\n')),
        Some('r') => Ok((&input[1..], '\r')),
        Some('t') => Ok((&input[1..], '\t')),
        Some('u') => decode_unicode_escape(root, &input[1..], 4),
        Some('U') => decode_unicode_escape(root, &input[1..], 8),
        Some(c) => Err(TomlError::lexical(offset(root, input), format!("unknown escape sequence '\\{}'", c))),
        None => Err(TomlError::lexical(offset(root, input), "unterminated escape sequence")),
    }
}

fn decode_unicode_escape<'a>(root: &str, input: &'a str, digits: usize) -> Result<(&'a str, char), TomlError> {
    if input.len() < digits || !input.is_char_boundary(digits) {
        return Err(TomlError::lexical(offset(root, input), "incomplete unicode escape"));
    }
    let hex = &input[..digits];
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TomlError::lexical(offset(root, input), "invalid unicode escape"));
    }
    let code = u32::from_str_radix(hex, 16).expect("already verified all-hex-digit");
    let ch = char::from_u32(code)
        .ok_or_else(|| TomlError::lexical(offset(root, input), "escape does not encode a valid unicode scalar value"))?;
    Ok((&input[digits..], ch))
}

/// `"..."`, decoding escapes. Does not accept the multi-line `"""..."""` form.
pub fn basic_string<'a>(root: &str, input: &'a str) -> Result<(&'a str, String), TomlError> {
    let mut rest = input
        .strip_prefix('"')
        .ok_or_else(|| TomlError::syntax(offset(root, input), "expected '\"'"))?;
    let mut out = String::new();
    loop {
        match rest.chars().next() {
            None => return Err(TomlError::lexical(offset(root, rest), "unterminated basic string")),
            Some('"') => return Ok((&rest[1..], out)),
            Some('\\') => {
                let (new_rest, ch) = decode_escape(root, &rest[1..])?;
                out.push(ch);
                rest = new_rest;
            }
            Some(c) if c == '\t' || (c >= '\u{20}' && c != '\u{7f}') => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
            Some(c) => {
                return Err(TomlError::lexical(offset(root, rest), format!("invalid character {:?} in basic string", c)))
            }
        }
    }
}

/// `'...'`: no escapes permitted.
pub fn literal_string<'a>(root: &str, input: &'a str) -> Result<(&'a str, String), TomlError> {
    let mut rest = input
        .strip_prefix('\'')
        .ok_or_else(|| TomlError::syntax(offset(root, input), "expected '\\''"))?;
    let mut out = String::new();
    loop {
        match rest.chars().next() {
            None => return Err(TomlError::lexical(offset(root, rest), "unterminated literal string")),
            Some('\'') => return Ok((&rest[1..], out)),
            Some(c) if c == '\t' || (c >= '\u{20}' && c != '\u{7f}') => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
            Some(c) => {
                return Err(TomlError::lexical(offset(root, rest), format!("invalid character {:?} in literal string", c)))
            }
        }
    }
}

/// Consumes a backslash line-continuation: trailing whitespace, a newline, then any
/// further blank/whitespace-only lines. Returns `None` if `input` isn't one.
fn try_line_continuation(input: &str) -> Option<&str> {
    let after_ws = input.trim_start_matches([' ', '\t']);
    if !(after_ws.starts_with('\n') || after_ws.starts_with("\r\n")) {
        return None;
    }
    let mut rest = after_ws;
    loop {
        if let Some(r) = rest.strip_prefix("\r\n") {
            rest = r;
        } else if let Some(r) = rest.strip_prefix('\n') {
            rest = r;
        } else {
            break;
        }
        rest = rest.trim_start_matches([' ', '\t']);
    }
    Some(rest)
}

fn consume_closing_quotes<'a>(rest: &'a str, quote: char, out: &mut String) -> &'a str {
    let mut rest = rest;
    let mut extra = 0;
    while extra < 2 {
        if let Some(stripped) = rest.strip_prefix(quote) {
            out.push(quote);
            rest = stripped;
            extra += 1;
        } else {
            break;
        }
    }
    rest
}

/// `"""..."""`, with line-continuation and trailing-quote rules applied.
pub fn multiline_basic_string<'a>(root: &str, input: &'a str) -> Result<(&'a str, String), TomlError> {
    let mut rest = input
        .strip_prefix("\"\"\"")
        .ok_or_else(|| TomlError::syntax(offset(root, input), "expected '\"\"\"'"))?;
    if let Some(r) = rest.strip_prefix("\r\n") {
        rest = r;
    } else if let Some(r) = rest.strip_prefix('\n') {
        rest = r;
    }
    let mut out = String::new();
    loop {
        if let Some(r) = rest.strip_prefix("\"\"\"") {
            return Ok((consume_closing_quotes(r, '"', &mut out), out));
        }
        match rest.chars().next() {
            None => return Err(TomlError::lexical(offset(root, rest), "unterminated multi-line basic string")),
            Some('\\') => {
                let after = &rest[1..];
                if let Some(continued) = try_line_continuation(after) {
                    rest = continued;
                    continue;
                }
                let (new_rest, ch) = decode_escape(root, after)?;
                out.push(ch);
                rest = new_rest;
            }
            Some('\r') if rest.starts_with("\r\n") => {
                out.push('\n');
                rest = &rest[2..];
            }
            Some(c) => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
}

/// `'''...'''`: no escapes, same line-discipline as the basic multi-line form.
pub fn multiline_literal_string<'a>(root: &str, input: &'a str) -> Result<(&'a str, String), TomlError> {
    let mut rest = input
        .strip_prefix("'''")
        .ok_or_else(|| TomlError::syntax(offset(root, input), "expected \"'''\""))?;
    if let Some(r) = rest.strip_prefix("\r\n") {
        rest = r;
    } else if let Some(r) = rest.strip_prefix('\n') {
        rest = r;
    }
    let mut out = String::new();
    loop {
        if let Some(r) = rest.strip_prefix("'''") {
            return Ok((consume_closing_quotes(r, '\'', &mut out), out));
        }
        match rest.chars().next() {
            None => return Err(TomlError::lexical(offset(root, rest), "unterminated multi-line literal string")),
            Some('\r') if rest.starts_with("\r\n") => {
                out.push('\n');
                rest = &rest[2..];
            }
            Some(c) => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

fn validate_underscores(root: &str, input: &str, token: &str) -> Result<(), TomlError> {
    let chars: Vec<char> = token.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let prev_ok = i > 0 && chars[i - 1].is_ascii_hexdigit();
            let next_ok = i + 1 < chars.len() && chars[i + 1].is_ascii_hexdigit();
            if !prev_ok || !next_ok {
                return Err(TomlError::lexical(offset(root, input), "underscore must be between digits"));
            }
        }
    }
    Ok(())
}

fn radix_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_hexdigit() || c == '_')(input)
}

fn prefixed_int(input: &str) -> IResult<&str, (&str, &str)> {
    alt((
        |i| {
            let (r, _) = tag("0x")(i)?;
            let (r, d) = radix_digits(r)?;
            Ok((r, ("0x", d)))
        },
        |i| {
            let (r, _) = tag("0o")(i)?;
            let (r, d) = radix_digits(r)?;
            Ok((r, ("0o", d)))
        },
        |i| {
            let (r, _) = tag("0b")(i)?;
            let (r, d) = radix_digits(r)?;
            Ok((r, ("0b", d)))
        },
    ))(input)
}

fn decimal_int_token(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        nom::combinator::opt(nom::character::complete::one_of("+-")),
        take_while1(|c: char| c.is_ascii_digit() || c == '_'),
    ))(input)
}

/// Integer literal: decimal (optionally signed) or `0x`/`0o`/`0b` prefixed (unsigned).
pub fn integer<'a>(root: &str, input: &'a str) -> Result<(&'a str, i64), TomlError> {
    if let Ok((rest, (prefix, token))) = prefixed_int(input) {
        validate_underscores(root, input, token)?;
        let clean: String = token.chars().filter(|&c| c != '_').collect();
        let radix = match prefix {
            "0x" => 16,
            "0o" => 8,
            "0b" => 2,
            _ => unreachable!(),
        };
        let value = i64::from_str_radix(&clean, radix)
            .map_err(|_| TomlError::lexical(offset(root, input), format!("invalid {} integer literal", prefix)))?;
        return Ok((rest, value));
    }
    let (rest, token) =
        decimal_int_token(input).map_err(|_| TomlError::lexical(offset(root, input), "expected integer"))?;
    let digits_only = token.trim_start_matches(['+', '-']);
    validate_underscores(root, input, digits_only)?;
    if digits_only.len() > 1 && digits_only.starts_with('0') {
        return Err(TomlError::lexical(offset(root, input), "leading zero not allowed in decimal integer"));
    }
    let clean: String = token.chars().filter(|&c| c != '_').collect();
    let value: i64 = clean
        .parse()
        .map_err(|_| TomlError::overflow(offset(root, input), token))?;
    Ok((rest, value))
}

/// `true` if `input` starts with a float-shaped token: digits, then `.digits` and/or an
/// exponent. Integers lack both; this is the disambiguator the spec requires.
pub fn looks_like_float(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut idx = 0;
    if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
        idx += 1;
    }
    let digits_start = idx;
    while idx < bytes.len() && (bytes[idx].is_ascii_digit() || bytes[idx] == b'_') {
        idx += 1;
    }
    if idx == digits_start {
        return false;
    }
    idx < bytes.len() && matches!(bytes[idx], b'.' | b'e' | b'E')
}

/// Float literal: signed decimal with a required fraction and/or exponent.
pub fn float<'a>(root: &str, input: &'a str) -> Result<(&'a str, f64), TomlError> {
    let bytes = input.as_bytes();
    let mut idx = 0;
    if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
        idx += 1;
    }
    let int_start = idx;
    while idx < bytes.len() && (bytes[idx].is_ascii_digit() || bytes[idx] == b'_') {
        idx += 1;
    }
    if idx == int_start {
        return Err(TomlError::lexical(offset(root, input), "expected digits"));
    }
    validate_underscores(root, input, &input[int_start..idx])?;

    let mut has_frac = false;
    if idx < bytes.len() && bytes[idx] == b'.' {
        has_frac = true;
        idx += 1;
        let frac_start = idx;
        while idx < bytes.len() && (bytes[idx].is_ascii_digit() || bytes[idx] == b'_') {
            idx += 1;
        }
        if idx == frac_start {
            return Err(TomlError::lexical(offset(root, input), "expected fractional digits"));
        }
        validate_underscores(root, input, &input[frac_start..idx])?;
    }

    let mut has_exp = false;
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        has_exp = true;
        idx += 1;
        if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
            idx += 1;
        }
        let exp_start = idx;
        while idx < bytes.len() && (bytes[idx].is_ascii_digit() || bytes[idx] == b'_') {
            idx += 1;
        }
        if idx == exp_start {
            return Err(TomlError::lexical(offset(root, input), "expected exponent digits"));
        }
        validate_underscores(root, input, &input[exp_start..idx])?;
    }

    if !has_frac && !has_exp {
        return Err(TomlError::lexical(offset(root, input), "float requires a fraction or exponent"));
    }
    let token = &input[..idx];
    let clean: String = token.chars().filter(|&c| c != '_').collect();
    let value: f64 = clean
        .parse()
        .map_err(|_| TomlError::lexical(offset(root, input), format!("invalid float literal {:?}", token)))?;
    Ok((&input[idx..], value))
}

/// `inf`/`-inf`/`+inf`/`nan`/`-nan`/`+nan`.
pub fn special_float<'a>(root: &str, input: &'a str) -> Result<(&'a str, f64), TomlError> {
    for (literal, val) in [
        ("+inf", f64::INFINITY),
        ("-inf", f64::NEG_INFINITY),
        ("inf", f64::INFINITY),
        ("+nan", f64::NAN),
        ("-nan", f64::NAN),
        ("nan", f64::NAN),
    ] {
        if let Some(rest) = input.strip_prefix(literal) {
            if word_boundary(rest) {
                return Ok((rest, val));
            }
        }
    }
    Err(TomlError::syntax(offset(root, input), "expected 'inf' or 'nan'"))
}

// ---------------------------------------------------------------------------
// Date / time
// ---------------------------------------------------------------------------

fn is_leap_year(year: u16) -> bool {
    (year.is_multiple_of(4) && !year.is_multiple_of(100)) || year.is_multiple_of(400)
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `true` if `input` begins with the fixed `DDDD-DD-DD` shape. Shape only: a positive
/// match always calls [`date`], whose failures are then hard errors, not backtrack
/// points — the spec's "date/time before number" ordering depends on this.
pub fn looks_like_date(input: &str) -> bool {
    input.len() >= 10
        && all_digits(&input[0..4])
        && input.as_bytes()[4] == b'-'
        && all_digits(&input[5..7])
        && input.as_bytes()[7] == b'-'
        && all_digits(&input[8..10])
}

/// `true` if `input` begins with the fixed `DD:DD:DD` shape (a standalone local time).
pub fn looks_like_time(input: &str) -> bool {
    input.len() >= 8 && all_digits(&input[0..2]) && input.as_bytes()[2] == b':' && all_digits(&input[3..5]) && input.as_bytes()[5] == b':' && all_digits(&input[6..8])
}

pub fn date<'a>(root: &str, input: &'a str) -> Result<(&'a str, Date), TomlError> {
    let year: u16 = input[0..4].parse().expect("shape already validated");
    let month: u8 = input[5..7].parse().expect("shape already validated");
    let day: u8 = input[8..10].parse().expect("shape already validated");
    if !(1..=12).contains(&month) {
        return Err(TomlError::lexical(offset(root, input), format!("month {} out of range", month)));
    }
    let max_day = days_in_month(year, month);
    if day == 0 || day > max_day {
        return Err(TomlError::lexical(offset(root, input), format!("day {} out of range for {}-{:02}", day, year, month)));
    }
    Ok((&input[10..], Date { year, month, day }))
}

fn normalize_fraction(frac: &str) -> u32 {
    let mut s = frac.to_string();
    if s.len() > 9 {
        s.truncate(9);
    } else {
        while s.len() < 9 {
            s.push('0');
        }
    }
    s.parse().unwrap_or(0)
}

pub fn time<'a>(root: &str, input: &'a str) -> Result<(&'a str, Time), TomlError> {
    let hour: u8 = input[0..2].parse().expect("shape already validated");
    let minute: u8 = input[3..5].parse().expect("shape already validated");
    let second: u8 = input[6..8].parse().expect("shape already validated");
    if hour > 23 {
        return Err(TomlError::lexical(offset(root, input), format!("hour {} out of range", hour)));
    }
    if minute > 59 {
        return Err(TomlError::lexical(offset(root, input), format!("minute {} out of range", minute)));
    }
    if second > 60 {
        return Err(TomlError::lexical(offset(root, input), format!("second {} out of range", second)));
    }
    let mut rest = &input[8..];
    let mut nanosecond = 0u32;
    if let Some(after_dot) = rest.strip_prefix('.') {
        let end = after_dot.find(|c: char| !c.is_ascii_digit()).unwrap_or(after_dot.len());
        let frac = &after_dot[..end];
        if frac.is_empty() {
            return Err(TomlError::lexical(offset(root, rest), "empty fractional seconds"));
        }
        nanosecond = normalize_fraction(frac);
        rest = &after_dot[end..];
    }
    Ok((rest, Time { hour, minute, second, nanosecond }))
}

pub fn toml_offset<'a>(root: &str, input: &'a str) -> Result<(&'a str, Offset), TomlError> {
    if let Some(rest) = input.strip_prefix('Z').or_else(|| input.strip_prefix('z')) {
        return Ok((rest, Offset { minutes: 0 }));
    }
    let sign = match input.chars().next() {
        Some('+') => 1i16,
        Some('-') => -1i16,
        _ => return Err(TomlError::syntax(offset(root, input), "expected 'Z' or an offset")),
    };
    let rest = &input[1..];
    if rest.len() < 5 || !all_digits(&rest[0..2]) || rest.as_bytes()[2] != b':' || !all_digits(&rest[3..5]) {
        return Err(TomlError::syntax(offset(root, input), "expected HH:MM offset"));
    }
    let hh: i16 = rest[0..2].parse().expect("shape already validated");
    let mm: i16 = rest[3..5].parse().expect("shape already validated");
    if hh > 23 || mm > 59 {
        return Err(TomlError::lexical(offset(root, input), "offset out of range"));
    }
    Ok((&rest[5..], Offset { minutes: sign * (hh * 60 + mm) }))
}

/// Parses a date, and if followed by a time separator and a time, a full date-time
/// (local or, if a UTC offset follows, an offset date-time).
pub fn date_time_value<'a>(root: &str, input: &'a str) -> Result<(&'a str, crate::types::Value), TomlError> {
    use crate::types::Value;

    let (rest, d) = date(root, input)?;
    let after_sep = rest
        .strip_prefix('T')
        .or_else(|| rest.strip_prefix('t'))
        .or_else(|| rest.strip_prefix(' '));
    if let Some(after_sep) = after_sep {
        if looks_like_time(after_sep) {
            let (rest2, t) = time(root, after_sep)?;
            if matches!(rest2.chars().next(), Some('Z') | Some('z') | Some('+') | Some('-')) {
                let (rest3, off) = toml_offset(root, rest2)?;
                return Ok((rest3, Value::OffsetDateTime(d, t, off)));
            }
            return Ok((rest2, Value::LocalDateTime(d, t)));
        }
    }
    Ok((rest, Value::LocalDate(d)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Value;

    #[test]
    fn test_ws_and_newline() {
        assert_eq!(ws(" \t  x"), Ok(("x", " \t  ")));
        assert_eq!(line_ending("\r\nrest"), Ok(("rest", "\r\n")));
        assert_eq!(line_ending("\nrest"), Ok(("rest", "\n")));
    }

    #[test]
    fn test_comment() {
        assert_eq!(comment("# hello\nrest"), Ok(("\nrest", " hello")));
    }

    #[test]
    fn test_basic_string_escapes() {
        let src = r#""tab:\there""#;
        let (rest, s) = basic_string(src, src).unwrap();
        assert_eq!(rest, "");
        assert_eq!(s, "tab:\there");
        let src2 = r#""Hi""#;
        let (_, s2) = basic_string(src2, src2).unwrap();
        assert_eq!(s2, "Hi");
    }

    #[test]
    fn test_multiline_basic_line_continuation() {
        let src = "\"\"\"\nhello \\\n    world\"\"\"";
        let (rest, s) = multiline_basic_string(src, src).unwrap();
        assert_eq!(rest, "");
        assert_eq!(s, "hello world");
    }

    #[test]
    fn test_integer_radices() {
        assert_eq!(integer("0o755", "0o755").unwrap().1, 0o755);
        assert_eq!(integer("0xDEAD_BEEF", "0xDEAD_BEEF").unwrap().1, 0xDEAD_BEEF);
        assert_eq!(integer("0b11111111", "0b11111111").unwrap().1, 0b11111111);
        assert_eq!(integer("1_000", "1_000").unwrap().1, 1000);
    }

    #[test]
    fn test_integer_leading_zero_rejected() {
        assert!(integer("0755", "0755").is_err());
    }

    #[test]
    fn test_integer_overflow() {
        let huge = "99999999999999999999";
        assert!(matches!(integer(huge, huge), Err(TomlError::Overflow { .. })));
    }

    #[test]
    fn test_float_and_special() {
        let (_, f) = float("0.1", "0.1").unwrap();
        assert_eq!(f, 0.1);
        let (_, n) = special_float("nan", "nan").unwrap();
        assert!(n.is_nan());
        let (_, neg_inf) = special_float("-inf", "-inf").unwrap();
        assert_eq!(neg_inf, f64::NEG_INFINITY);
    }

    #[test]
    fn test_date_time_offset() {
        let src = "1979-05-27T07:32:00-08:00";
        let (rest, v) = date_time_value(src, src).unwrap();
        assert_eq!(rest, "");
        match v {
            Value::OffsetDateTime(d, t, o) => {
                assert_eq!(d, Date { year: 1979, month: 5, day: 27 });
                assert_eq!(t, Time { hour: 7, minute: 32, second: 0, nanosecond: 0 });
                assert_eq!(o, Offset { minutes: -480 });
            }
            other => panic!("expected OffsetDateTime, got {:?}", other),
        }
    }

    #[test]
    fn test_leap_day() {
        let src = "2000-02-29";
        assert!(date(src, src).is_ok());
        let src2 = "2001-02-29";
        assert!(date(src2, src2).is_err());
    }
}
