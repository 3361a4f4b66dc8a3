//! The value and document model produced by [`crate::parse`].
//!
//! `Value` represents the 11 kinds of value a TOML document can hold. Unlike the
//! format-preserving `Value` this crate descends from, every variant here owns fully
//! decoded data: escapes are already resolved, newlines already normalized, and no part
//! of a `Document` borrows from the input text it was parsed from.

use std::fmt;

/// The calendar fields shared by all four date/time variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// Wall-clock fields, with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Always normalized to 9 digits (zero-padded or truncated from the source fraction).
    pub nanosecond: u32,
}

/// UTC offset in minutes, as carried by an offset date-time. `0` also represents `Z`/`z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub minutes: i16,
}

/// The 7 kinds of scalar value a TOML document can hold, plus the three container/table kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A decoded string. `StrType` only records which quoting flavor produced it; the
    /// decoded contents are identical regardless of flavor.
    String(String, StrType),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float, including `inf`/`-inf`/`nan`.
    Float(f64),
    Boolean(bool),
    /// A date-time with a UTC offset.
    OffsetDateTime(Date, Time, Offset),
    /// A date-time with no UTC offset (naive wall-clock).
    LocalDateTime(Date, Time),
    LocalDate(Date),
    LocalTime(Time),
    Array(Vec<Value>),
    /// A table introduced by `{ ... }` syntax. Permanently distinct from `Table`: once
    /// built it may never be extended by a later header or dotted assignment.
    InlineTable(Table),
    /// A table introduced by a `[header]` or created implicitly by a dotted key.
    Table(Table),
}

/// The four TOML string quoting flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrType {
    Basic,
    MLBasic,
    Literal,
    MLLiteral,
}

/// An ordered, key-unique mapping from string keys to `Value`s.
///
/// Insertion order is preserved (matching source order) even though the specification
/// treats it as non-semantic, the same way the teacher's `Children::Keys` side index
/// preserved child-key order for its own callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    entries: Vec<(String, Value)>,
}

impl Table {
    pub fn new() -> Self {
        Table { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Inserts `key = value`. Returns `false` without modifying the table if `key`
    /// already exists, since duplicate keys are a structural error the caller (the
    /// assembler) must report, not silently overwrite.
    pub fn insert_new(&mut self, key: String, value: Value) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value));
        true
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The root of a parsed TOML document. A plain `Table`; kept as a distinct alias so the
/// public API reads `Document` at the boundary (`parse` returns one) while the tree
/// internals are expressed as `Table` everywhere else.
pub type Document = Table;

impl fmt::Display for StrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrType::Basic => "basic",
            StrType::MLBasic => "multi-line basic",
            StrType::Literal => "literal",
            StrType::MLLiteral => "multi-line literal",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s, _) => write!(f, "{:?}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::OffsetDateTime(d, t, o) => write!(f, "{}{}{}", d, t, o),
            Value::LocalDateTime(d, t) => write!(f, "{}{}", d, t),
            Value::LocalDate(d) => write!(f, "{}", d),
            Value::LocalTime(t) => write!(f, "{}", t),
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::InlineTable(t) | Value::Table(t) => {
                write!(f, "{{")?;
                for (i, (k, v)) in t.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            return write!(f, "Z");
        }
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s, _) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) | Value::InlineTable(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn is_inline_table(&self) -> bool {
        matches!(self, Value::InlineTable(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_insert_new_rejects_duplicates() {
        let mut t = Table::new();
        assert!(t.insert_new("a".into(), Value::Integer(1)));
        assert!(!t.insert_new("a".into(), Value::Integer(2)));
        assert_eq!(t.get("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn table_preserves_insertion_order() {
        let mut t = Table::new();
        t.insert_new("z".into(), Value::Integer(1));
        t.insert_new("a".into(), Value::Integer(2));
        assert_eq!(t.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    }

    #[test]
    fn date_time_display() {
        let d = Date { year: 1979, month: 5, day: 27 };
        assert_eq!(format!("{}", d), "1979-05-27");
        let t = Time { hour: 7, minute: 32, second: 0, nanosecond: 0 };
        assert_eq!(format!("{}", t), "07:32:00");
        let o = Offset { minutes: -480 };
        assert_eq!(format!("{}", o), "-08:00");
    }
}
