// main.rs - Plaintext pattern -> board layout converter
//
// Reads a conwaylife.com Plaintext file ('O' marks a live cell, lines
// starting with '!' are comments) and writes the comma-separated layout
// format the game loads. The board comes out square, padded so patterns
// have room to evolve past their initial footprint.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use life_engine::{Layout, MAX_BOARD_SIZE, layout};

const DEFAULT_PADDING: u32 = 10;

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    padding: u32,
    shift_x: i32,
    shift_y: i32,
    /// Fixed board size instead of the padded fit.
    size: Option<u32>,
}

const USAGE: &str = "usage: layout-convert <input.cells> \
[--output FILE] [--padding N] [--shift-x N] [--shift-y N] [--size N]";

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);

    let mut input = None;
    let mut output = None;
    let mut padding = DEFAULT_PADDING;
    let mut shift_x = 0;
    let mut shift_y = 0;
    let mut size = None;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{} needs a value", flag))
        };
        match arg.as_str() {
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--padding" => padding = value("--padding")?.parse().context("--padding")?,
            "--shift-x" => shift_x = value("--shift-x")?.parse().context("--shift-x")?,
            "--shift-y" => shift_y = value("--shift-y")?.parse().context("--shift-y")?,
            "--size" => size = Some(value("--size")?.parse().context("--size")?),
            "--help" | "-h" => bail!("{}", USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {:?}\n{}", arg, USAGE),
        }
    }

    let input = input.with_context(|| format!("input file required\n{}", USAGE))?;
    Ok(Args {
        input,
        output,
        padding,
        shift_x,
        shift_y,
        size,
    })
}

/// Turn Plaintext into a layout. Each 'O' becomes a live cell at
/// (column + shift_x, row + shift_y), rows and columns counted from
/// `padding` so the pattern does not sit flush against the edge.
fn convert(text: &str, padding: u32, shift_x: i32, shift_y: i32, size: Option<u32>) -> Result<Layout> {
    let mut rows = padding as i32;
    let mut cols = padding as i32;
    let mut cells = Vec::new();

    for line in text.lines() {
        if line.starts_with('!') {
            continue;
        }

        let mut col = padding as i32;
        for ch in line.chars() {
            if ch == 'O' {
                cells.push((col + shift_x, rows + shift_y));
            }
            col += 1;
            cols = cols.max(col);
        }
        rows += 1;
    }

    if cells.is_empty() {
        bail!("no live cells ('O') found in input");
    }

    let board_size = match size {
        Some(fixed) => fixed,
        None => (rows.max(cols) + padding as i32 - 1) as u32,
    };
    if board_size < 1 || board_size > MAX_BOARD_SIZE {
        bail!(
            "board size {} outside 1..={}; pattern too large or bad --size",
            board_size,
            MAX_BOARD_SIZE
        );
    }

    Ok(Layout {
        rows: board_size,
        columns: board_size,
        cells,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let converted = convert(&text, args.padding, args.shift_x, args.shift_y, args.size)?;

    let out_path = args
        .output
        .unwrap_or_else(|| args.input.with_extension("csv"));
    layout::write_file(&out_path, &converted)
        .with_context(|| format!("writing {}", out_path.display()))?;

    println!("Board size: {}x{}", converted.rows, converted.columns);
    println!("Live cells: {}", converted.cells.len());
    println!("Wrote {}", out_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_are_skipped() {
        let layout = convert("!Name: Blinker\n!\nOOO\n", 10, 0, 0, None).unwrap();
        assert_eq!(layout.cells, vec![(10, 10), (11, 10), (12, 10)]);
    }

    #[test]
    fn board_is_square_and_padded() {
        // 3 columns of pattern + 10 padding -> cols tracked to 13, one row
        // of pattern -> rows 11; square side max(11, 13) + 10 - 1 = 22.
        let layout = convert("OOO\n", 10, 0, 0, None).unwrap();
        assert_eq!((layout.rows, layout.columns), (22, 22));
    }

    #[test]
    fn shift_moves_every_cell() {
        let layout = convert("O.O\n", 0, 5, -2, None).unwrap();
        assert_eq!(layout.cells, vec![(5, -2), (7, -2)]);
    }

    #[test]
    fn fixed_size_overrides_padding_math() {
        let layout = convert("O\n", 10, 0, 0, Some(40)).unwrap();
        assert_eq!((layout.rows, layout.columns), (40, 40));
    }

    #[test]
    fn dead_marks_and_blank_rows_advance_position() {
        let layout = convert(".O\n\n.O\n", 0, 0, 0, None).unwrap();
        assert_eq!(layout.cells, vec![(1, 0), (1, 2)]);
    }

    #[test]
    fn oversized_pattern_is_an_error() {
        let wide = "O".repeat(200);
        assert!(convert(&wide, 10, 0, 0, None).is_err());
    }

    #[test]
    fn empty_pattern_is_an_error() {
        assert!(convert("!just a comment\n...\n", 10, 0, 0, None).is_err());
    }

    #[test]
    fn output_loads_back_through_the_codec() {
        let converted = convert(".O.\n..O\nOOO\n", 10, 0, 0, None).unwrap();
        let round = layout::parse(&layout::encode(&converted)).unwrap();
        assert_eq!(round, converted);
    }
}
