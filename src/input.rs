//! The two-line text format read by the `knights_tour` tool:
//!
//! ```text
//! m n k
//! r c
//! ```
//!
//! `m n` are the board rows and columns, `k` the backtrack budget, `r c` the 0-based start.
//! Only the shape is checked here; value ranges are [`crate::scenario::InputLimits`]' job.

use std::io::BufRead;

use crate::scenario::{TourError, TourRequest};

pub fn parse_request<R: BufRead>(mut reader: R) -> Result<TourRequest, TourError> {
    let first = read_fields(&mut reader, 1, &["rows", "cols", "backtrack_limit"])?;
    let second = read_fields(&mut reader, 2, &["start_row", "start_col"])?;

    Ok(TourRequest {
        rows: non_negative("rows", first[0])?,
        cols: non_negative("cols", first[1])?,
        backtrack_limit: non_negative::<u64>("backtrack_limit", first[2])?,
        start_row: non_negative("start_row", second[0])?,
        start_col: non_negative("start_col", second[1])?,
    })
}

fn read_fields<R: BufRead>(
    reader: &mut R,
    line_no: usize,
    names: &[&str],
) -> Result<Vec<i64>, TourError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(TourError::Parse {
            line: line_no,
            reason: format!("input ended, expected {}", names.join(" ")),
        });
    }

    let fields = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i64>().map_err(|_| TourError::Parse {
                line: line_no,
                reason: format!("{tok:?} is not an integer"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if fields.len() != names.len() {
        return Err(TourError::Parse {
            line: line_no,
            reason: format!(
                "expected {} integers ({}), got {}",
                names.len(),
                names.join(" "),
                fields.len()
            ),
        });
    }
    Ok(fields)
}

fn non_negative<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T, TourError> {
    T::try_from(value).map_err(|_| TourError::OutOfRange {
        field,
        value,
        min: 0,
        max: i64::MAX,
    })
}
