//! Table Builder System
//!
//! A fixed-width, box-drawn text table builder.
//!
//! This module provides the whole layout/formatting engine:
//! - Per-column width computation (cells and optional header labels)
//! - Delimiter-based bulk content parsing (`\t` cells, `\n` rows)
//! - Border and padding rendering with `+ - = |` ASCII characters
//!
//! # Architecture
//!
//! ```text
//! Bulk content -> Grid parse -> Shape validation -> Transpose -> Columns
//! Columns + headers -> Width computation -> Bordered rendering
//! ```
//!
//! # Example
//!
//! ```
//! use tabulax::Tabulator;
//!
//! let mut table = Tabulator::new();
//! table.add_content("Value 1\tValue a\nValue 2\tValue b\n").unwrap();
//! let rendered = table.render();
//! assert!(rendered.starts_with("+-"));
//! ```

mod builder;
mod grid;


// Re-export public API
pub use builder::Tabulator;
pub use grid::{parse_grid, transpose, validate_rectangular, CELL_SEPARATOR, ROW_SEPARATOR};
