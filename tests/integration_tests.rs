//! Integration tests for the tabulax public API

use tabulax::{tabulate, tabulate_with_headers, tabulate_with_padding, TabulateError, Tabulator};

fn values(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Value {}", i)).collect()
}

// ============================================================================
// Column Mode Tests
// ============================================================================

mod column_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_headerless_two_columns() {
        let mut table = Tabulator::new();
        table.add_column(values(5)).unwrap();
        table.add_column(values(5)).unwrap();

        let expected = concat!(
            "+-------------------+\n",
            "| Value 1 | Value 1 |\n",
            "+-------------------+\n",
            "| Value 2 | Value 2 |\n",
            "+-------------------+\n",
            "| Value 3 | Value 3 |\n",
            "+-------------------+\n",
            "| Value 4 | Value 4 |\n",
            "+-------------------+\n",
            "| Value 5 | Value 5 |\n",
            "+-------------------+\n",
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_headered_two_columns() {
        let mut table = Tabulator::new();
        table.add_column_with_header(values(5), "Header 1").unwrap();
        table.add_column_with_header(values(5), "Header 2").unwrap();

        let expected = concat!(
            "+=====================+\n",
            "| Header 1 | Header 2 |\n",
            "+=====================+\n",
            "| Value 1  | Value 1  |\n",
            "+---------------------+\n",
            "| Value 2  | Value 2  |\n",
            "+---------------------+\n",
            "| Value 3  | Value 3  |\n",
            "+---------------------+\n",
            "| Value 4  | Value 4  |\n",
            "+---------------------+\n",
            "| Value 5  | Value 5  |\n",
            "+---------------------+\n",
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_mixed_headers_fall_back_to_headerless() {
        let mut headered = Tabulator::new();
        headered
            .add_column_with_header(values(3), "Header 1")
            .unwrap();
        headered.add_column(values(3)).unwrap();

        let mut headerless = Tabulator::new();
        headerless.add_column(values(3)).unwrap();
        headerless.add_column(values(3)).unwrap();

        assert_eq!(headered.render(), headerless.render());
    }

    #[test]
    fn test_column_widths_cover_cells_and_headers() {
        let padding = 3;
        let mut table = Tabulator::with_padding(padding).unwrap();
        table
            .add_column_with_header(values(2), "A Longer Header")
            .unwrap();
        table.add_column_with_header(values(2), "B").unwrap();

        let rendered = table.render();
        let header_line = rendered.lines().nth(1).unwrap();

        // Every column spans at least its longest content plus padding
        assert!(header_line.contains("   A Longer Header   "));
        let first_data_line = rendered.lines().nth(3).unwrap();
        assert!(first_data_line.contains("   Value 1   "));
        assert!(first_data_line.len() >= "Value 1".len() + 2 * padding);
    }

    #[test]
    fn test_render_twice_is_identical() {
        let mut table = Tabulator::new();
        table.add_column_with_header(values(4), "Header 1").unwrap();
        table.add_column_with_header(values(4), "Header 2").unwrap();

        assert_eq!(table.render(), table.render());
    }

    #[test]
    fn test_empty_table_renders_empty_string() {
        let mut table = Tabulator::new();
        table.add_column(Vec::new()).unwrap();
        assert_eq!(table.render(), "");
    }
}

// ============================================================================
// Content Mode Tests
// ============================================================================

mod content_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bulk_content_matches_column_mode() {
        let mut bulk = Tabulator::new();
        bulk.add_content("Value 1\tValue a\nValue 2\tValue b\nValue 3\tValue c\n")
            .unwrap();

        let mut manual = Tabulator::new();
        manual
            .add_column(vec!["Value 1".into(), "Value 2".into(), "Value 3".into()])
            .unwrap();
        manual
            .add_column(vec!["Value a".into(), "Value b".into(), "Value c".into()])
            .unwrap();

        assert_eq!(bulk.render(), manual.render());
        assert_eq!(bulk.row_count(), 3);
        assert_eq!(bulk.column_count(), 2);
    }

    #[test]
    fn test_bulk_content_with_headers_matches_column_mode() {
        let mut bulk = Tabulator::new();
        bulk.add_content_with_headers(
            "Value 1\tValue 1\nValue 2\tValue 2\nValue 3\tValue 3\n",
            "Header 1\tHeader 2\n",
        )
        .unwrap();

        let mut manual = Tabulator::new();
        manual
            .add_column_with_header(values(3), "Header 1")
            .unwrap();
        manual
            .add_column_with_header(values(3), "Header 2")
            .unwrap();

        assert_eq!(bulk.render(), manual.render());
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        let mut with_newline = Tabulator::new();
        with_newline.add_content("a\tb\nc\td\n").unwrap();

        let mut without_newline = Tabulator::new();
        without_newline.add_content("a\tb\nc\td").unwrap();

        assert_eq!(with_newline.row_count(), 2);
        assert_eq!(with_newline.render(), without_newline.render());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let mut table = Tabulator::new();
        let err = table.add_content("a\tb\tc\nd\te\n").unwrap_err();

        match err {
            TabulateError::MalformedInput { row, .. } => assert_eq!(row, Some(2)),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_header_column_count_mismatch_rejected() {
        let mut table = Tabulator::new();
        let err = table
            .add_content_with_headers("a\tb\n", "Header 1\tHeader 2\tHeader 3\n")
            .unwrap_err();

        assert!(err.to_string().contains("3 header cells for 2 columns"));
    }
}

// ============================================================================
// Convenience Function Tests
// ============================================================================

mod convenience {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tabulate() {
        let rendered = tabulate("a\tbb\nc\tdd\n").unwrap();
        let expected = concat!(
            "+--------+\n",
            "| a | bb |\n",
            "+--------+\n",
            "| c | dd |\n",
            "+--------+\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_tabulate_with_headers() {
        let rendered = tabulate_with_headers("1\ta\n2\tb\n", "Num\tLetter\n").unwrap();
        let expected = concat!(
            "+==============+\n",
            "| Num | Letter |\n",
            "+==============+\n",
            "| 1   | a      |\n",
            "+--------------+\n",
            "| 2   | b      |\n",
            "+--------------+\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_tabulate_with_padding() {
        let rendered = tabulate_with_padding("x\ty\n", None, 2).unwrap();
        assert_eq!(
            rendered,
            concat!("+-----------+\n", "|  x  |  y  |\n", "+-----------+\n")
        );
    }

    #[test]
    fn test_padding_below_minimum_rejected() {
        let err = tabulate_with_padding("x\n", None, 0).unwrap_err();
        assert!(matches!(err, TabulateError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_empty_input_renders_empty_string() {
        assert_eq!(tabulate("").unwrap(), "");
    }
}
