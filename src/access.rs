//! The typed, path-based accessor façade.
//!
//! Grounded on the teacher's `TOMLParser::get_value`/`get_children` (`src/lib.rs`) and the
//! path-splitting helpers around `Children::combine_keys` (`src/types.rs`), reworked from
//! parser-owned lookups (the teacher's `Parser` struct holds the live tree) onto plain
//! `Document` methods, since here `Document` is a freestanding owned tree rather than a
//! handle into a running parser.

use crate::types::{Table, Value};

fn unquote_segment(segment: &str) -> &str {
    for quote in ['"', '\''] {
        if segment.len() >= 2 && segment.starts_with(quote) && segment.ends_with(quote) {
            return &segment[1..segment.len() - 1];
        }
    }
    segment
}

impl Table {
    /// Looks up a value by a dot-separated path, e.g. `"package.name"` or
    /// `"table.\"Key One\""`.
    ///
    /// This is a naive split on `.`: a key that itself contains a literal dot (only
    /// possible via a quoted key) can't be addressed this way. A segment wrapped in a
    /// single matching pair of `"` or `'` has those quotes stripped before lookup, so
    /// quoted keys containing spaces or other non-bare characters still work. Use
    /// [`Table::get_value_by_path`] with pre-split segments for the literal-dot case.
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        let segments: Vec<&str> = path.split('.').map(unquote_segment).collect();
        self.get_value_by_path(&segments)
    }

    /// Looks up a value by pre-split path segments, descending through tables (plain or
    /// inline) for every segment but the last.
    pub fn get_value_by_path(&self, path: &[&str]) -> Option<&Value> {
        let (last, prefix) = path.split_last()?;
        let mut current = self;
        for key in prefix {
            current = current.get(key)?.as_table()?;
        }
        current.get(last)
    }

    pub fn get_string(&self, path: &str) -> Option<&str> {
        self.get_value(path)?.as_str()
    }

    pub fn get_int(&self, path: &str) -> Option<i64> {
        self.get_value(path)?.as_int()
    }

    pub fn get_float(&self, path: &str) -> Option<f64> {
        self.get_value(path)?.as_float()
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get_value(path)?.as_bool()
    }

    pub fn get_table(&self, path: &str) -> Option<&Table> {
        self.get_value(path)?.as_table()
    }

    /// A string array at `path`; `None` if the value is missing, isn't an array, or
    /// contains a non-string element.
    pub fn get_string_array(&self, path: &str) -> Option<Vec<&str>> {
        let values = self.get_value(path)?.as_array()?;
        values.iter().map(Value::as_str).collect()
    }

    pub fn get_inline_table(&self, path: &str) -> Option<&Table> {
        match self.get_value(path)? {
            Value::InlineTable(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::parse;

    #[test]
    fn test_nested_path_access() {
        let doc = parse("[package]\nname = \"tomlite\"\nkeywords = [\"toml\", \"parser\"]\n").unwrap();
        assert_eq!(doc.get_string("package.name"), Some("tomlite"));
        assert_eq!(doc.get_string_array("package.keywords"), Some(vec!["toml", "parser"]));
        assert_eq!(doc.get_value_by_path(&["package", "name"]).and_then(|v| v.as_str()), Some("tomlite"));
    }

    #[test]
    fn test_missing_path_is_none() {
        let doc = parse("a = 1\n").unwrap();
        assert_eq!(doc.get_int("a.b"), None);
        assert_eq!(doc.get_string("missing"), None);
    }
}
