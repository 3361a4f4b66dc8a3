//! End-to-end parsing tests, in the style of `toml-rs`'s own `tests/parser.rs`: whole
//! documents in, assertions on the resulting tree or on the error out.

#[test]
fn simple_key_value() {
    let doc = tomlite::parse("key = \"value\"\n").unwrap();
    assert_eq!(doc.get_string("key"), Some("value"));
}

#[test]
fn mixed_root_and_table() {
    let src = r#"
title = "TOML Example"

[owner]
name = "Tom Preston-Werner"
dob = 1979-05-27T07:32:00-08:00
"#;
    let doc = tomlite::parse(src).unwrap();
    assert_eq!(doc.get_string("title"), Some("TOML Example"));
    assert_eq!(doc.get_string("owner.name"), Some("Tom Preston-Werner"));
}

#[test]
fn escape_decoding() {
    let doc = tomlite::parse("s = \"line1\\nline2\\ttabbed\\u00e9\"\n").unwrap();
    assert_eq!(doc.get_string("s"), Some("line1\nline2\ttabbed\u{e9}"));
}

#[test]
fn multiline_with_continuation() {
    let src = "s = \"\"\"\nRoses are red\nViolets are \\\n    blue\"\"\"\n";
    let doc = tomlite::parse(src).unwrap();
    assert_eq!(doc.get_string("s"), Some("Roses are red\nViolets are blue"));
}

#[test]
fn array_of_tables() {
    let src = r#"
[[products]]
name = "Hammer"
sku = 738594937

[[products]]
name = "Nail"
sku = 284758393
color = "gray"
"#;
    let doc = tomlite::parse(src).unwrap();
    let products = doc.get_value("products").unwrap().as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].as_table().unwrap().get_string("name"), Some("Hammer"));
    assert_eq!(products[1].as_table().unwrap().get_string("color"), Some("gray"));
}

#[test]
fn duplicate_key_is_a_structural_error() {
    let err = tomlite::parse("a = 1\na = 2\n").unwrap_err();
    assert!(matches!(err, tomlite::TomlError::Structural(_)));
}

#[test]
fn special_floats() {
    let doc = tomlite::parse("a = inf\nb = -inf\nc = nan\n").unwrap();
    assert_eq!(doc.get_float("a"), Some(f64::INFINITY));
    assert_eq!(doc.get_float("b"), Some(f64::NEG_INFINITY));
    assert!(doc.get_float("c").unwrap().is_nan());
}

#[test]
fn integer_radices() {
    let doc = tomlite::parse("hex = 0xDEADBEEF\noct = 0o755\nbin = 0b11010110\n").unwrap();
    assert_eq!(doc.get_int("hex"), Some(0xDEADBEEF));
    assert_eq!(doc.get_int("oct"), Some(0o755));
    assert_eq!(doc.get_int("bin"), Some(0b11010110));
}

#[test]
fn empty_document_parses_to_empty_table() {
    let doc = tomlite::parse("").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn integer_overflow_is_rejected() {
    let err = tomlite::parse("a = 99999999999999999999\n").unwrap_err();
    assert!(matches!(err, tomlite::TomlError::Overflow { .. }));
}

#[test]
fn invalid_leap_day_is_rejected() {
    assert!(tomlite::parse("a = 2001-02-29\n").is_err());
    assert!(tomlite::parse("a = 2000-02-29\n").is_ok());
}

#[test]
fn inline_table_and_dotted_keys() {
    let src = "point = { x = 1, y = 2 }\nserver.host = \"localhost\"\nserver.port = 8080\n";
    let doc = tomlite::parse(src).unwrap();
    let point = doc.get_inline_table("point").unwrap();
    assert_eq!(point.get_int("x"), Some(1));
    assert_eq!(doc.get_int("server.port"), Some(8080));
}
