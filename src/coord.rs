//! Board coordinates and the text codec used at the input boundary.
//!
//! Labels put the **row** letter first and the 1-based column second, so
//! `A1` is `(0, 0)` and `J10` is `(9, 9)` on a standard board.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::MAX_BOARD_SIZE;

/// A zero-based `(row, col)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if both axes are below `size`.
    pub fn fits(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match row_letter(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Reasons a text token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token was empty or only whitespace.
    Empty,
    /// Leading character is not a row letter valid for this board.
    InvalidLetter(char),
    /// Numeric part is missing or not a number.
    InvalidNumber,
    /// Number parsed but lies outside `1..=size`.
    OutOfRange(usize),
    /// Placement token carried the wrong number of cells.
    WrongCount { expected: usize, found: usize },
    /// Start/end span is neither a row nor a column.
    Diagonal,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input"),
            ParseError::InvalidLetter(c) => write!(f, "Invalid row letter '{}'", c),
            ParseError::InvalidNumber => write!(f, "Expected a number"),
            ParseError::OutOfRange(n) => write!(f, "Number {} is out of range", n),
            ParseError::WrongCount { expected, found } => {
                write!(f, "Expected {} cells, got {}", expected, found)
            }
            ParseError::Diagonal => write!(f, "Ships cannot be placed diagonally"),
        }
    }
}

fn row_letter(row: usize) -> Option<char> {
    if row < 26 {
        Some((b'A' + row as u8) as char)
    } else {
        None
    }
}

/// Encode a zero-based position as a label such as `C7`.
pub fn encode(row: usize, col: usize) -> String {
    use alloc::string::ToString;
    Coordinate::new(row, col).to_string()
}

/// Decode a label such as `c7` into a coordinate on a `size`×`size` board.
pub fn decode(label: &str, size: usize) -> Result<Coordinate, ParseError> {
    let label = label.trim();
    let mut chars = label.chars();
    let letter = chars.next().ok_or(ParseError::Empty)?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return Err(ParseError::InvalidLetter(letter));
    }
    let row = (letter as u8 - b'A') as usize;
    if row >= size {
        return Err(ParseError::InvalidLetter(letter));
    }
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber);
    }
    let number: usize = digits.parse().map_err(|_| ParseError::InvalidNumber)?;
    if number == 0 || number > size {
        return Err(ParseError::OutOfRange(number));
    }
    Ok(Coordinate::new(row, number - 1))
}

/// Parse a placement for a ship of `length` cells.
///
/// Accepts either every cell (`A1 A2 A3`) or a start/end span (`A1 A3`).
pub fn parse_placement(
    text: &str,
    length: usize,
    size: usize,
) -> Result<Vec<Coordinate>, ParseError> {
    let labels: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if labels.is_empty() {
        return Err(ParseError::Empty);
    }
    let cells = labels
        .iter()
        .map(|l| decode(l, size))
        .collect::<Result<Vec<_>, _>>()?;
    if cells.len() == length {
        return Ok(cells);
    }
    if cells.len() != 2 {
        return Err(ParseError::WrongCount {
            expected: length,
            found: cells.len(),
        });
    }
    expand_span(cells[0], cells[1], length)
}

fn expand_span(
    start: Coordinate,
    end: Coordinate,
    length: usize,
) -> Result<Vec<Coordinate>, ParseError> {
    let (lo, hi, fixed, horizontal) = if start.row == end.row {
        (start.col.min(end.col), start.col.max(end.col), start.row, true)
    } else if start.col == end.col {
        (start.row.min(end.row), start.row.max(end.row), start.col, false)
    } else {
        return Err(ParseError::Diagonal);
    };
    let span = hi - lo + 1;
    if span != length {
        return Err(ParseError::WrongCount {
            expected: length,
            found: span,
        });
    }
    Ok((lo..=hi)
        .map(|i| {
            if horizontal {
                Coordinate::new(fixed, i)
            } else {
                Coordinate::new(i, fixed)
            }
        })
        .collect())
}

/// Parse a single ship size, which must fit on a `size`×`size` board.
pub fn parse_size(text: &str, size: usize) -> Result<usize, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let n: usize = text.parse().map_err(|_| ParseError::InvalidNumber)?;
    if n == 0 || n > size.min(MAX_BOARD_SIZE) {
        return Err(ParseError::OutOfRange(n));
    }
    Ok(n)
}

/// Parse a comma separated list of ship sizes, e.g. `5,4,3,3,2`.
pub fn parse_fleet(text: &str, size: usize) -> Result<Vec<usize>, ParseError> {
    let sizes = text
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_size(s, size))
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("a1", 10), Ok(Coordinate::new(0, 0)));
        assert_eq!(decode(" J10 ", 10), Ok(Coordinate::new(9, 9)));
        assert_eq!(decode("c7", 10), Ok(Coordinate::new(2, 6)));
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert_eq!(decode("", 10), Err(ParseError::Empty));
        assert_eq!(decode("   ", 10), Err(ParseError::Empty));
        assert_eq!(decode("11", 10), Err(ParseError::InvalidLetter('1')));
        assert_eq!(decode("A", 10), Err(ParseError::InvalidNumber));
        assert_eq!(decode("Ax", 10), Err(ParseError::InvalidNumber));
        assert_eq!(decode("A-1", 10), Err(ParseError::InvalidNumber));
        assert_eq!(decode("A0", 10), Err(ParseError::OutOfRange(0)));
        assert_eq!(decode("A11", 10), Err(ParseError::OutOfRange(11)));
        assert_eq!(decode("K1", 10), Err(ParseError::InvalidLetter('K')));
        assert_eq!(decode("E1", 4), Err(ParseError::InvalidLetter('E')));
    }

    #[test]
    fn encode_matches_decode() {
        assert_eq!(encode(0, 0), "A1");
        assert_eq!(encode(9, 9), "J10");
        for r in 0..MAX_BOARD_SIZE {
            for c in 0..MAX_BOARD_SIZE {
                assert_eq!(decode(&encode(r, c), MAX_BOARD_SIZE), Ok(Coordinate::new(r, c)));
            }
        }
    }

    #[test]
    fn placement_accepts_explicit_lists() {
        let cells = parse_placement("A1 A2,A3", 3, 10).unwrap();
        assert_eq!(
            cells,
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)]
        );
    }

    #[test]
    fn placement_expands_spans() {
        let cells = parse_placement("D2 B2", 3, 10).unwrap();
        assert_eq!(
            cells,
            vec![Coordinate::new(1, 1), Coordinate::new(2, 1), Coordinate::new(3, 1)]
        );
        assert_eq!(parse_placement("A1 B2", 3, 10), Err(ParseError::Diagonal));
        assert_eq!(
            parse_placement("A1 A5", 3, 10),
            Err(ParseError::WrongCount { expected: 3, found: 5 })
        );
        assert_eq!(
            parse_placement("A1 A2 A3 A4", 3, 10),
            Err(ParseError::WrongCount { expected: 3, found: 4 })
        );
    }

    #[test]
    fn sizes_and_fleets() {
        assert_eq!(parse_size("3", 10), Ok(3));
        assert_eq!(parse_size("0", 10), Err(ParseError::OutOfRange(0)));
        assert_eq!(parse_size("7", 6), Err(ParseError::OutOfRange(7)));
        assert_eq!(parse_size("x", 6), Err(ParseError::InvalidNumber));
        assert_eq!(parse_fleet("5, 4,3,3,2", 10), Ok(vec![5, 4, 3, 3, 2]));
        assert_eq!(parse_fleet("", 10), Err(ParseError::Empty));
    }
}
