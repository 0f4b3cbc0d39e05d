// layout.rs - The persisted board layout and its text codec
//
// Format, one record per line, comma-separated:
//   line 1:     rows,columns
//   lines 2..N: x,y        (one live cell per line)
// No header, no comments, no blank lines between records.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::board::{Cell, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// The decoded form of a persisted board: dimensions plus live cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rows: u32,
    pub columns: u32,
    pub cells: Vec<Cell>,
}

#[derive(Debug)]
pub enum LayoutError {
    /// Dimension line parsed but is outside `1..=100`.
    InvalidDimension { line: usize, value: i64 },
    /// Missing dimension line, non-integer field, or incomplete record.
    MalformedLayout { line: usize, reason: String },
    /// File open/read/write failure.
    Io(io::Error),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidDimension { line, value } => {
                write!(
                    f,
                    "line {}: dimension {} outside {}..={}",
                    line, value, MIN_BOARD_SIZE, MAX_BOARD_SIZE
                )
            }
            LayoutError::MalformedLayout { line, reason } => {
                write!(f, "line {}: {}", line, reason)
            }
            LayoutError::Io(err) => write!(f, "layout file: {}", err),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LayoutError {
    fn from(err: io::Error) -> Self {
        LayoutError::Io(err)
    }
}

/// Parse the full layout text. Nothing is returned until every line has
/// parsed, so a caller that feeds the result to `Board::load` gets
/// all-or-nothing semantics for free.
pub fn parse(text: &str) -> Result<Layout, LayoutError> {
    let mut lines = text.lines().enumerate();

    let dims_line = match lines.next() {
        Some((_, line)) if !line.trim().is_empty() => line,
        _ => {
            return Err(LayoutError::MalformedLayout {
                line: 1,
                reason: "missing dimension line".into(),
            });
        }
    };
    let (rows_raw, columns_raw) = split_record(dims_line, 1)?;
    let rows = parse_dimension(rows_raw, 1)?;
    let columns = parse_dimension(columns_raw, 1)?;

    let mut cells = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            // tolerate a trailing newline
            continue;
        }
        let number = index + 1;
        let (x_raw, y_raw) = split_record(line, number)?;
        cells.push((parse_coord(x_raw, number)?, parse_coord(y_raw, number)?));
    }

    Ok(Layout {
        rows,
        columns,
        cells,
    })
}

/// Encode back into the text format. Records come out in the order the
/// layout holds them; `Board::layout` hands them over sorted.
pub fn encode(layout: &Layout) -> String {
    let mut out = String::new();
    out.push_str(&format!("{},{}\n", layout.rows, layout.columns));
    for &(x, y) in &layout.cells {
        out.push_str(&format!("{},{}\n", x, y));
    }
    out
}

pub fn read_file(path: &Path) -> Result<Layout, LayoutError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

pub fn write_file(path: &Path, layout: &Layout) -> Result<(), LayoutError> {
    fs::write(path, encode(layout))?;
    Ok(())
}

fn split_record(line: &str, number: usize) -> Result<(&str, &str), LayoutError> {
    let mut fields = line.split(',');
    let first = fields.next().unwrap_or("");
    let second = fields.next().ok_or_else(|| LayoutError::MalformedLayout {
        line: number,
        reason: format!("expected two comma-separated fields, got {:?}", line),
    })?;
    if fields.next().is_some() {
        return Err(LayoutError::MalformedLayout {
            line: number,
            reason: format!("expected two comma-separated fields, got {:?}", line),
        });
    }
    Ok((first, second))
}

fn parse_coord(field: &str, number: usize) -> Result<i32, LayoutError> {
    field
        .trim()
        .parse()
        .map_err(|_| LayoutError::MalformedLayout {
            line: number,
            reason: format!("{:?} is not an integer", field),
        })
}

fn parse_dimension(field: &str, number: usize) -> Result<u32, LayoutError> {
    let value: i64 = field
        .trim()
        .parse()
        .map_err(|_| LayoutError::MalformedLayout {
            line: number,
            reason: format!("{:?} is not an integer", field),
        })?;
    if value < MIN_BOARD_SIZE as i64 || value > MAX_BOARD_SIZE as i64 {
        return Err(LayoutError::InvalidDimension {
            line: number,
            value,
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimensions_and_cells() {
        let layout = parse("5,7\n0,0\n-2,3\n4,4\n").unwrap();
        assert_eq!((layout.rows, layout.columns), (5, 7));
        assert_eq!(layout.cells, vec![(0, 0), (-2, 3), (4, 4)]);
    }

    #[test]
    fn parses_dimensions_only() {
        let layout = parse("20,20").unwrap();
        assert_eq!((layout.rows, layout.columns), (20, 20));
        assert!(layout.cells.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse(""),
            Err(LayoutError::MalformedLayout { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_integer_dimension() {
        assert!(matches!(
            parse("five,5\n"),
            Err(LayoutError::MalformedLayout { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_dimension() {
        assert!(matches!(
            parse("0,5\n"),
            Err(LayoutError::InvalidDimension { line: 1, value: 0 })
        ));
        assert!(matches!(
            parse("5,101\n"),
            Err(LayoutError::InvalidDimension {
                line: 1,
                value: 101
            })
        ));
    }

    #[test]
    fn rejects_incomplete_coordinate_pair() {
        assert!(matches!(
            parse("5,5\n3\n"),
            Err(LayoutError::MalformedLayout { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_extra_fields() {
        assert!(matches!(
            parse("5,5\n1,2,3\n"),
            Err(LayoutError::MalformedLayout { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_non_integer_coordinate() {
        assert!(matches!(
            parse("5,5\n1,x\n"),
            Err(LayoutError::MalformedLayout { line: 2, .. })
        ));
    }

    #[test]
    fn encode_matches_format() {
        let layout = Layout {
            rows: 3,
            columns: 4,
            cells: vec![(0, 1), (2, -3)],
        };
        assert_eq!(encode(&layout), "3,4\n0,1\n2,-3\n");
    }

    #[test]
    fn encode_parse_round_trip() {
        let layout = Layout {
            rows: 10,
            columns: 10,
            cells: vec![(-1, -1), (0, 0), (9, 9)],
        };
        assert_eq!(parse(&encode(&layout)).unwrap(), layout);
    }
}
