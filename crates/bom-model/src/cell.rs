//! Cell values of the working table.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a BOM row.
///
/// Cells are read as text; the quantity column is later coerced to
/// [`CellValue::Integer`] where possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// Build a cell from a raw field; an empty field is [`CellValue::Empty`].
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Empty
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// True for missing cells and text that is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Integer(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Textual rendering used for reports and width measurement.
    ///
    /// Missing cells render as the empty string.
    pub fn display_text(&self) -> String {
        self.to_string()
    }

    /// Sort order for a single key: integers before text, blanks last.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self.is_blank(), other.is_blank()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Integer(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Integer(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_raw_is_empty() {
        assert_eq!(CellValue::from_raw(""), CellValue::Empty);
        assert_eq!(CellValue::from_raw(" "), CellValue::Text(" ".to_string()));
    }

    #[test]
    fn blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::from(" \t").is_blank());
        assert!(!CellValue::Integer(0).is_blank());
        assert!(!CellValue::from("R1").is_blank());
    }

    #[test]
    fn blanks_sort_last() {
        let empty = CellValue::Empty;
        let text = CellValue::from("A");
        assert_eq!(empty.sort_cmp(&text), Ordering::Greater);
        assert_eq!(text.sort_cmp(&empty), Ordering::Less);
        assert_eq!(empty.sort_cmp(&CellValue::from("  ")), Ordering::Equal);
    }

    #[test]
    fn integers_sort_numerically_before_text() {
        assert_eq!(
            CellValue::Integer(2).sort_cmp(&CellValue::Integer(10)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Integer(99).sort_cmp(&CellValue::from("1")),
            Ordering::Less
        );
    }

    #[test]
    fn display_renders_missing_as_empty() {
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(CellValue::Integer(12).display_text(), "12");
    }
}
