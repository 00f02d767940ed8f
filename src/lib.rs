//! # tabulax
//!
//! Fixed-width ASCII table formatter written in Rust.
//!
//! ## Features
//!
//! - **Box-Drawn Output**: bordered tables using only `+ - = |` and spaces
//! - **Two Ingestion Paths**: explicit columns or tab/newline delimited bulk content
//! - **Optional Headers**: per-column labels with a double-line header divider
//! - **Configurable Padding**: spaces on each side of every cell
//! - **Fail-Fast Validation**: ragged input is rejected before it can corrupt output
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Column Mode
//!
//! ```rust
//! use tabulax::Tabulator;
//!
//! let mut table = Tabulator::new();
//! table.add_column_with_header(vec!["1".into(), "2".into()], "ID").unwrap();
//! table.add_column_with_header(vec!["Ada".into(), "Grace".into()], "Name").unwrap();
//!
//! let rendered = table.render();
//! assert!(rendered.contains("| ID | Name  |"));
//! ```
//!
//! ### Content Mode
//!
//! ```rust
//! use tabulax::tabulate;
//!
//! let rendered = tabulate("Value 1\tValue a\nValue 2\tValue b\n").unwrap();
//! assert!(rendered.starts_with("+-"));
//! ```

/// Core formatting modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use core::table::{parse_grid, transpose, validate_rectangular, Tabulator};

// Re-export utilities
pub use utils::error::{TabulateError, TabulateResult};

/// Format delimited bulk content as a headerless table
///
/// # Arguments
/// * `body` - Rows separated by `\n`, cells separated by `\t`
///
/// # Returns
/// The rendered table, or an error for non-rectangular input
pub fn tabulate(body: &str) -> TabulateResult<String> {
    let mut table = Tabulator::new();
    table.add_content(body)?;
    Ok(table.render())
}

/// Format delimited bulk content as a headered table
///
/// # Arguments
/// * `body` - Rows separated by `\n`, cells separated by `\t`
/// * `headers` - A single row of header labels, one per column
///
/// # Returns
/// The rendered table, or an error for non-rectangular input or a
/// header/column count mismatch
pub fn tabulate_with_headers(body: &str, headers: &str) -> TabulateResult<String> {
    let mut table = Tabulator::new();
    table.add_content_with_headers(body, headers)?;
    Ok(table.render())
}

/// Format delimited bulk content with explicit padding
///
/// Headers are optional; `padding` must be at least 1.
pub fn tabulate_with_padding(
    body: &str,
    headers: Option<&str>,
    padding: usize,
) -> TabulateResult<String> {
    let mut table = Tabulator::with_padding(padding)?;
    match headers {
        Some(header_line) => table.add_content_with_headers(body, header_line)?,
        None => table.add_content(body)?,
    }
    Ok(table.render())
}
