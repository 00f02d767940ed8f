//! Delimited grid parsing for bulk table content
//!
//! Bulk content encodes a row-major grid: rows are separated by the line
//! break character, cells within a row by the horizontal tab character.
//! There is no escaping mechanism, so literal tabs or newlines inside a
//! cell are indistinguishable from delimiters.

use crate::utils::error::{TabulateError, TabulateResult};

/// Separator between cells within a row
pub const CELL_SEPARATOR: char = '\t';

/// Separator between rows
pub const ROW_SEPARATOR: char = '\n';

/// Parse bulk content into a row-major grid of cell values.
///
/// Trailing empty rows produced by a terminating row separator are
/// dropped, so `"a\tb\n"` parses to a single row.
pub fn parse_grid(body: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = body
        .split(ROW_SEPARATOR)
        .map(|row| row.split(CELL_SEPARATOR).map(str::to_string).collect())
        .collect();

    while rows
        .last()
        .is_some_and(|cells| cells.len() == 1 && cells[0].is_empty())
    {
        rows.pop();
    }

    rows
}

/// Check that every row has the same cell count as the first row.
///
/// The first row's cell count is authoritative for the whole grid. The
/// error reports the first offending row (1-based).
pub fn validate_rectangular(rows: &[Vec<String>]) -> TabulateResult<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };

    let expected = first.len();
    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() != expected {
            return Err(TabulateError::malformed_at(
                format!("expected {} cells, found {}", expected, row.len()),
                index + 1,
            ));
        }
    }

    Ok(())
}

/// Transpose a rectangular row-major grid into column-major order.
///
/// Column `i` collects the i-th cell of every row, in row order. The
/// input must already be validated with [`validate_rectangular`].
pub fn transpose(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut columns: Vec<Vec<String>> = (0..first.len())
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();

    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            column.push(cell);
        }
    }

    columns
}
