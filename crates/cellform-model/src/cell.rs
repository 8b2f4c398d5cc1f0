//! A1-style cell names

use crate::ModelError;
use std::fmt;
use std::str::FromStr;

/// Column letters beyond this many cannot be represented in a `u32`
const MAX_COLUMN_LETTERS: usize = 6;

/// A cell position such as `B7`
///
/// Columns are written in bijective base 26 (`A`..`Z`, `AA`..`AZ`, ...),
/// rows in decimal. Both are 1-based. Letters are accepted in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellName {
    column: u32,
    row: u32,
}

impl CellName {
    /// Create a cell name from 1-based coordinates
    pub fn new(column: u32, row: u32) -> Option<Self> {
        (column > 0 && row > 0).then_some(Self { column, row })
    }

    pub const fn column(&self) -> u32 {
        self.column
    }

    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Whether `other` lies at or below-right of `self`
    pub const fn spans_to(&self, other: &CellName) -> bool {
        self.column <= other.column && self.row <= other.row
    }
}

/// Uppercase column letters for a 1-based column number
pub fn column_label(mut column: u32) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        column -= 1;
        letters.push(char::from(b'A' + (column % 26) as u8));
        column /= 26;
    }
    letters.iter().rev().collect()
}

impl FromStr for CellName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidCellName(s.to_string());

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || letters.len() > MAX_COLUMN_LETTERS {
            return Err(invalid());
        }
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let column = letters.bytes().fold(0u32, |acc, b| {
            acc * 26 + u32::from(b.to_ascii_uppercase() - b'A' + 1)
        });
        let row = digits.parse::<u32>().map_err(|_| invalid())?;

        Self::new(column, row).ok_or_else(invalid)
    }
}

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_label(self.column), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("A1", 1, 1)]
    #[case("b7", 2, 7)]
    #[case("Z10", 26, 10)]
    #[case("AA3", 27, 3)]
    #[case("az100", 52, 100)]
    fn test_parse_cell_name(#[case] input: &str, #[case] column: u32, #[case] row: u32) {
        let cell: CellName = input.parse().unwrap();
        assert_eq!((cell.column(), cell.row()), (column, row));
    }

    #[rstest]
    #[case("")]
    #[case("A")]
    #[case("12")]
    #[case("A0")]
    #[case("A01")]
    #[case("A1B")]
    #[case("A-1")]
    #[case("ABCDEFG1")]
    #[case("A99999999999")]
    fn test_reject_malformed_name(#[case] input: &str) {
        assert!(input.parse::<CellName>().is_err(), "{input:?} parsed");
    }

    #[test]
    fn test_display_uppercases() {
        let cell: CellName = "ab12".parse().unwrap();
        assert_eq!(cell.to_string(), "AB12");
        assert_eq!(column_label(702), "ZZ");
        assert_eq!(column_label(703), "AAA");
    }

    #[test]
    fn test_spans_to() {
        let a1: CellName = "A1".parse().unwrap();
        let b2: CellName = "B2".parse().unwrap();
        let a3: CellName = "A3".parse().unwrap();
        assert!(a1.spans_to(&b2));
        assert!(a1.spans_to(&a1));
        assert!(!b2.spans_to(&a1));
        assert!(!a3.spans_to(&b2));
    }
}
