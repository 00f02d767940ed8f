//! Fixed-width table builder and renderer

use super::grid::{parse_grid, transpose, validate_rectangular};
use crate::utils::error::{TabulateError, TabulateResult};

/// Minimum (and default) padding on each side of cell content
const DEFAULT_PADDING: usize = 1;

/// Fixed-width ASCII table builder.
///
/// Columns are accumulated one at a time or parsed from delimited bulk
/// content, then rendered as a box-drawn text block. All cell data is
/// copied into the builder at ingestion time, so the rendered output is
/// purely a function of the builder's current state: [`Tabulator::render`]
/// can be called any number of times and always produces the same string.
///
/// A table is either fully headered or fully headerless. If the caller
/// mixes headered and headerless columns, the header list ends up shorter
/// than the column list and rendering falls back to headerless output.
#[derive(Debug)]
pub struct Tabulator {
    /// Columns of the table, left to right. Each column is a top-to-bottom
    /// list of cell values.
    columns: Vec<Vec<String>>,
    /// Header labels, in lockstep with `columns` when every column was
    /// added with a header.
    headers: Vec<String>,
    /// Computed width of each column, including padding on both sides.
    widths: Vec<usize>,
    /// Spaces inserted on each side of cell content.
    padding: usize,
}

impl Tabulator {
    /// Create a new builder with the default padding of 1.
    pub fn new() -> Self {
        Tabulator {
            columns: Vec::new(),
            headers: Vec::new(),
            widths: Vec::new(),
            padding: DEFAULT_PADDING,
        }
    }

    /// Create a new builder with the specified padding.
    ///
    /// Fails with [`TabulateError::InvalidConfiguration`] if `padding` is
    /// less than 1.
    pub fn with_padding(padding: usize) -> TabulateResult<Self> {
        if padding < 1 {
            return Err(TabulateError::invalid_configuration(
                "padding value cannot be less than 1",
            ));
        }
        let mut tabulator = Tabulator::new();
        tabulator.padding = padding;
        Ok(tabulator)
    }

    /// The padding this builder was constructed with.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Number of columns added so far.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows per column, 0 for an empty builder.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Whether a header row will be rendered: true only when every column
    /// was added with a header.
    pub fn has_headers(&self) -> bool {
        !self.columns.is_empty() && self.headers.len() == self.columns.len()
    }

    /// Append a data column.
    ///
    /// The column width is the longest cell (0 for an empty column) plus
    /// padding on both sides. Fails with [`TabulateError::MalformedInput`]
    /// if the column's row count differs from the columns already added.
    pub fn add_column(&mut self, column: Vec<String>) -> TabulateResult<()> {
        if let Some(first) = self.columns.first() {
            if column.len() != first.len() {
                return Err(TabulateError::malformed(format!(
                    "column {} has {} rows, expected {}",
                    self.columns.len() + 1,
                    column.len(),
                    first.len()
                )));
            }
        }

        let longest = column
            .iter()
            .map(|cell| display_len(cell))
            .max()
            .unwrap_or(0);
        self.widths.push(longest + self.padding * 2);
        self.columns.push(column);
        Ok(())
    }

    /// Append a data column with a header label.
    ///
    /// The column is widened to fit the header when the label plus padding
    /// exceeds the width computed from the cells.
    pub fn add_column_with_header(
        &mut self,
        column: Vec<String>,
        header: &str,
    ) -> TabulateResult<()> {
        self.add_column(column)?;
        self.headers.push(header.to_string());

        let required = display_len(header) + self.padding * 2;
        if let Some(width) = self.widths.last_mut() {
            if required > *width {
                *width = required;
            }
        }
        Ok(())
    }

    /// Parse delimited bulk content and append its columns.
    ///
    /// `body` is split into rows on `\n` and into cells on `\t`; the
    /// resulting grid is transposed so each cell index becomes one column.
    /// The first row's cell count is authoritative: a row with a different
    /// cell count fails with [`TabulateError::MalformedInput`] and nothing
    /// is added. Trailing empty rows from a terminating newline are dropped.
    pub fn add_content(&mut self, body: &str) -> TabulateResult<()> {
        let rows = parse_grid(body);
        validate_rectangular(&rows)?;

        for column in transpose(rows) {
            self.add_column(column)?;
        }
        Ok(())
    }

    /// Parse delimited bulk content with a header line and append its
    /// columns.
    ///
    /// `headers` must parse to exactly one row whose cell count matches the
    /// body's column count; its i-th cell becomes the header of the i-th
    /// transposed column.
    pub fn add_content_with_headers(&mut self, body: &str, headers: &str) -> TabulateResult<()> {
        let header_rows = parse_grid(headers);
        if header_rows.len() != 1 {
            return Err(TabulateError::malformed(format!(
                "header content must be a single row, found {} rows",
                header_rows.len()
            )));
        }

        let rows = parse_grid(body);
        validate_rectangular(&rows)?;
        let columns = transpose(rows);

        let labels = &header_rows[0];
        if labels.len() != columns.len() {
            return Err(TabulateError::malformed(format!(
                "{} header cells for {} columns",
                labels.len(),
                columns.len()
            )));
        }

        for (column, label) in columns.into_iter().zip(labels) {
            self.add_column_with_header(column, label)?;
        }
        Ok(())
    }

    /// Render the table as a box-drawn string.
    ///
    /// An empty table (no columns, or columns with zero rows) renders as an
    /// empty string. Each line is newline-terminated; rows are framed by
    /// `-` separator lines, with `=` separators marking the header block
    /// when one is present.
    pub fn render(&self) -> String {
        let mut output = String::new();

        let Some(first_column) = self.columns.first() else {
            return output;
        };
        if first_column.is_empty() {
            return output;
        }

        // Total width is recomputed locally on every call, so repeated
        // renders of the same builder yield identical output.
        let width = self.widths.iter().sum::<usize>() + 1;
        let has_header = self.headers.len() == self.columns.len();
        let row_separator = horizontal_separator(width, '-');

        if has_header {
            output.push_str(&horizontal_separator(width, '='));
            self.push_row(&mut output, self.headers.iter().map(String::as_str));
        }

        for i in 0..first_column.len() {
            if has_header && i == 0 {
                output.push_str(&horizontal_separator(width, '='));
            } else {
                output.push_str(&row_separator);
            }
            let cells = self.columns.iter().map(|column| column[i].as_str());
            self.push_row(&mut output, cells);
        }
        output.push_str(&row_separator);

        output
    }

    /// Append one table row: each cell padded on both sides and filled out
    /// to its column width, framed by `|` characters.
    fn push_row<'a>(&self, output: &mut String, cells: impl Iterator<Item = &'a str>) {
        let pad = " ".repeat(self.padding);
        for (cell, &width) in cells.zip(self.widths.iter()) {
            output.push('|');
            output.push_str(&pad);
            output.push_str(cell);
            output.push_str(&pad);

            let used = display_len(cell) + self.padding * 2;
            output.push_str(&" ".repeat(width.saturating_sub(used)));
        }
        output.push_str("|\n");
    }
}

impl Default for Tabulator {
    fn default() -> Self {
        Self::new()
    }
}

/// A full-width horizontal border line: `+`, the separator character
/// repeated across the table width, `+`, newline.
fn horizontal_separator(width: usize, sep: char) -> String {
    let mut line = String::with_capacity(width + 3);
    line.push('+');
    for _ in 0..width {
        line.push(sep);
    }
    line.push_str("+\n");
    line
}

/// Cell length in characters. No display-width awareness: every char
/// counts as one cell of horizontal space.
fn display_len(s: &str) -> usize {
    s.chars().count()
}
