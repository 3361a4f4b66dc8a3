//! Document assembler: folds the flat section stream from [`crate::grammar`] into a tree,
//! enforcing the duplicate-key, table-reopen, and array-of-tables rules.
//!
//! No teacher file covers this directly — the teacher mutates a format-preserving CST in
//! place rather than folding a flat stream into a tree — so this is grounded on
//! `examples/other_examples/a267bc1a_toml-rs-toml-rs__src-lib.rs.rs` (root-table-then-headers
//! folding) and `examples/other_examples/a1824766_ibeckermayer-toml__crates-toml_edit-src-parser-inline_table.rs.rs`
//! (array-of-tables-append vs. table-reopen). Written in the teacher's own idiom of a
//! sequential loop propagating errors with `?` over a mutable accumulator.

use std::collections::HashSet;

use crate::error::{StructuralError, TomlError};
use crate::grammar::{KeyVal, Parsed, Section};
use crate::types::{Document, Table, Value};

/// Applies a single (possibly dotted) key-value pair to `table`, creating any missing
/// intermediate tables along the way. Shared by the document assembler and by
/// [`crate::grammar`]'s inline-table parsing, since TOML applies the same rule in both
/// places: a dotted key may only descend through tables it itself creates.
///
/// `dotted_created` tracks, as dotted-path strings relative to `table`, which intermediate
/// tables this same section has already created via a dotted key. A pre-existing table at
/// an intermediate segment that isn't in that set was opened by something other than this
/// section's own dotted keys (a prior `[header]`, an array-of-tables entry, ...) and may not
/// be re-opened this way (§3, §4.3 step 1).
pub(crate) fn assign_pair(
    table: &mut Table,
    dotted_created: &mut HashSet<String>,
    path: &[String],
    value: Value,
) -> Result<(), StructuralError> {
    let (last, prefix) = path.split_last().expect("a key-value pair always has at least one key segment");
    let mut current = table;
    let mut so_far = String::new();
    for key in prefix {
        if !so_far.is_empty() {
            so_far.push('.');
        }
        so_far.push_str(key);
        if !current.contains_key(key) {
            current.insert_new(key.clone(), Value::Table(Table::new()));
            dotted_created.insert(so_far.clone());
        } else if !dotted_created.contains(&so_far) {
            return Err(StructuralError::CannotReopenTableViaDottedKey { key: key.clone() });
        }
        current = match current.get_mut(key).expect("just inserted or already present") {
            Value::Table(t) => t,
            Value::InlineTable(_) => return Err(StructuralError::CannotExtendInlineTable { key: key.clone() }),
            _ => return Err(StructuralError::KeyConflictType { key: key.clone() }),
        };
    }
    if !current.insert_new(last.clone(), value) {
        return Err(StructuralError::DuplicateKey { key: last.clone() });
    }
    Ok(())
}

/// Descends one path segment for a `[header]`/`[[header]]` path: into an existing table,
/// or into the last element of an existing array of tables (this is what lets
/// `[products.details]` follow `[[products]]`). Returns the concrete segment reached —
/// the key itself for a plain table, or `key#index` for an array-of-tables element, so
/// that two headers with the same nominal path but reached through distinct array
/// elements (`[[fruit]]` ... `[fruit.physical]` ... `[[fruit]]` ... `[fruit.physical]`)
/// are tracked as distinct tables rather than colliding as one.
fn descend<'a>(current: &'a mut Table, key: &str) -> Result<(&'a mut Table, String), TomlError> {
    match current.get_mut(key).expect("caller checked contains_key") {
        Value::Table(t) => Ok((t, key.to_string())),
        Value::Array(arr) => {
            let index = arr.len().saturating_sub(1);
            match arr.last_mut() {
                Some(Value::Table(t)) => Ok((t, format!("{}#{}", key, index))),
                _ => Err(TomlError::from(StructuralError::KeyConflictType { key: key.to_string() })),
            }
        }
        Value::InlineTable(_) => Err(TomlError::from(StructuralError::CannotExtendInlineTable { key: key.to_string() })),
        _ => Err(TomlError::from(StructuralError::KeyConflictType { key: key.to_string() })),
    }
}

/// Walks `prefix`, creating any missing intermediate tables, and returns the table
/// reached plus the concrete (array-index-qualified) path taken to get there.
fn walk_prefix<'a>(doc: &'a mut Table, prefix: &[String]) -> Result<(&'a mut Table, Vec<String>), TomlError> {
    let mut current = doc;
    let mut concrete = Vec::with_capacity(prefix.len());
    for key in prefix {
        if !current.contains_key(key) {
            current.insert_new(key.clone(), Value::Table(Table::new()));
        }
        let (next, segment) = descend(current, key)?;
        concrete.push(segment);
        current = next;
    }
    Ok((current, concrete))
}

/// Resolves a `[header]` path to the table it names, creating it if this is the first
/// time it's named (whether implicitly, via an earlier dotted key, or explicitly here).
/// Also returns the concrete path reached, for the caller's table-redefinition check.
fn ensure_table_path<'a>(doc: &'a mut Table, path: &[String]) -> Result<(&'a mut Table, Vec<String>), TomlError> {
    let (last, prefix) = path.split_last().expect("a table header path is non-empty");
    let (current, mut concrete) = walk_prefix(doc, prefix)?;
    if !current.contains_key(last) {
        current.insert_new(last.clone(), Value::Table(Table::new()));
    }
    concrete.push(last.clone());
    match current.get_mut(last).expect("just inserted or already present") {
        Value::Table(t) => Ok((t, concrete)),
        Value::InlineTable(_) => Err(TomlError::from(StructuralError::CannotExtendInlineTable { key: last.clone() })),
        _ => Err(TomlError::from(StructuralError::KeyConflictType { key: last.clone() })),
    }
}

/// Resolves a `[[header]]` path to a freshly-appended table within the named array,
/// creating the array on first use.
fn ensure_array_of_tables_entry<'a>(doc: &'a mut Table, path: &[String]) -> Result<&'a mut Table, TomlError> {
    let (last, prefix) = path.split_last().expect("an array-of-tables header path is non-empty");
    let (current, _concrete) = walk_prefix(doc, prefix)?;
    if !current.contains_key(last) {
        current.insert_new(last.clone(), Value::Array(vec![Value::Table(Table::new())]));
    } else {
        match current.get_mut(last).expect("just checked contains_key") {
            Value::Array(arr) if arr.iter().all(|v| matches!(v, Value::Table(_))) => {
                arr.push(Value::Table(Table::new()));
            }
            _ => return Err(TomlError::from(StructuralError::ArrayOfTablesTypeMismatch { key: last.clone() })),
        }
    }
    match current.get_mut(last).expect("just ensured present") {
        Value::Array(arr) => match arr.last_mut().expect("just pushed or created non-empty") {
            Value::Table(t) => Ok(t),
            _ => unreachable!("array of tables invariant checked above"),
        },
        _ => unreachable!("just matched Array above"),
    }
}

fn apply_pairs(table: &mut Table, pairs: Vec<KeyVal>) -> Result<(), TomlError> {
    let mut dotted_created = HashSet::new();
    for kv in pairs {
        assign_pair(table, &mut dotted_created, &kv.path, kv.value)?;
        log::trace!("assigned key");
    }
    Ok(())
}

/// Folds a flat [`Parsed`] section stream into a [`Document`] tree.
pub fn assemble(_root: &str, parsed: Parsed) -> Result<Document, TomlError> {
    let mut doc = Table::new();
    apply_pairs(&mut doc, parsed.root_pairs)?;

    let mut explicit_tables: HashSet<Vec<String>> = HashSet::new();
    for section in parsed.sections {
        match section {
            Section::Table { path, pairs } => {
                log::debug!("opening table [{}]", path.join("."));
                let (table, concrete_path) = ensure_table_path(&mut doc, &path)?;
                if !explicit_tables.insert(concrete_path) {
                    return Err(TomlError::from(StructuralError::CannotRedefineTable { key: path.join(".") }));
                }
                apply_pairs(table, pairs)?;
            }
            Section::ArrayOfTables { path, pairs } => {
                log::debug!("appending array-of-tables entry [[{}]]", path.join("."));
                let table = ensure_array_of_tables_entry(&mut doc, &path)?;
                apply_pairs(table, pairs)?;
            }
        }
    }
    Ok(doc)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar::parse_document;

    fn assemble_str(src: &str) -> Result<Document, TomlError> {
        let parsed = parse_document(src, src)?;
        assemble(src, parsed)
    }

    #[test]
    fn test_simple_document() {
        let doc = assemble_str("a = 1\n[tbl]\nb = 2\n").unwrap();
        assert_eq!(doc.get("a").unwrap().as_int(), Some(1));
        assert_eq!(doc.get("tbl").unwrap().as_table().unwrap().get("b").unwrap().as_int(), Some(2));
    }

    #[test]
    fn test_array_of_tables() {
        let doc = assemble_str("[[fruit]]\nname = \"apple\"\n[[fruit]]\nname = \"banana\"\n").unwrap();
        let arr = doc.get("fruit").unwrap().as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0].as_table().unwrap().get("name").unwrap().as_str(), Some("apple"));
        assert_eq!(arr[1].as_table().unwrap().get("name").unwrap().as_str(), Some("banana"));
    }

    #[test]
    fn test_array_of_tables_subtable() {
        let doc = assemble_str("[[products]]\nname = \"widget\"\n[products.details]\nweight = 3\n").unwrap();
        let arr = doc.get("products").unwrap().as_array().unwrap();
        let details = arr[0].as_table().unwrap().get("details").unwrap().as_table().unwrap();
        assert_eq!(details.get("weight").unwrap().as_int(), Some(3));
    }

    #[test]
    fn test_same_named_subtable_in_distinct_array_of_tables_entries() {
        let doc = assemble_str(
            "[[fruit]]\nname = \"apple\"\n[fruit.physical]\ncolor = \"red\"\n\
             [[fruit]]\nname = \"banana\"\n[fruit.physical]\ncolor = \"yellow\"\n",
        )
        .unwrap();
        let arr = doc.get("fruit").unwrap().as_array().unwrap();
        assert_eq!(arr.len(), 2);
        let physical = |i: usize| arr[i].as_table().unwrap().get("physical").unwrap().as_table().unwrap();
        assert_eq!(physical(0).get("color").unwrap().as_str(), Some("red"));
        assert_eq!(physical(1).get("color").unwrap().as_str(), Some("yellow"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        assert!(assemble_str("a = 1\na = 2\n").is_err());
    }

    #[test]
    fn test_table_redefinition_rejected() {
        assert!(assemble_str("[a]\nx = 1\n[a]\ny = 2\n").is_err());
    }

    #[test]
    fn test_array_header_after_array_of_tables_rejected() {
        assert!(assemble_str("[[arr]]\nx = 1\n[arr]\ny = 2\n").is_err());
    }

    #[test]
    fn test_dotted_key_cannot_reopen_header_table() {
        assert!(assemble_str("[fruit.apple]\ntexture = \"smooth\"\n\n[fruit]\napple.color = \"red\"\n").is_err());
    }

    #[test]
    fn test_dotted_keys_can_build_a_table_within_one_section() {
        let doc = assemble_str("[a]\nb.c = 1\nb.d = 2\n").unwrap();
        let b = doc.get("a").unwrap().as_table().unwrap().get("b").unwrap().as_table().unwrap();
        assert_eq!(b.get("c").unwrap().as_int(), Some(1));
        assert_eq!(b.get("d").unwrap().as_int(), Some(2));
    }

    #[test]
    fn test_implicit_table_then_explicit_header_allowed() {
        let doc = assemble_str("[a.b]\nx = 1\n[a]\ny = 2\n").unwrap();
        let a = doc.get("a").unwrap().as_table().unwrap();
        assert_eq!(a.get("y").unwrap().as_int(), Some(2));
        assert_eq!(a.get("b").unwrap().as_table().unwrap().get("x").unwrap().as_int(), Some(1));
    }
}
