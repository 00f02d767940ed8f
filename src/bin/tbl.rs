//! tabulax CLI - render tab/newline delimited input as a boxed ASCII table

#[cfg(feature = "cli")]
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use tabulax::Tabulator;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tbl")]
#[command(version)]
#[command(about = "tabulax - fixed-width ASCII table formatter", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Tab-separated header labels, one per column
    #[arg(long)]
    headers: Option<String>,

    /// Treat the first input row as the header row
    #[arg(long, conflicts_with = "headers")]
    first_row_headers: bool,

    /// Spaces inserted on each side of every cell
    #[arg(short, long, default_value_t = 1)]
    padding: usize,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Determine header source
    let (body, headers) = if cli.first_row_headers {
        match input.split_once('\n') {
            Some((first, rest)) => (rest.to_string(), Some(first.to_string())),
            None => (String::new(), Some(input)),
        }
    } else {
        (input, cli.headers)
    };

    let result = render_table(&body, headers.as_deref(), cli.padding);
    let result = match result {
        Ok(rendered) => rendered,
        Err(err) => {
            eprintln!("✗ {}", err);
            std::process::exit(1);
        }
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(result.as_bytes())?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn render_table(
    body: &str,
    headers: Option<&str>,
    padding: usize,
) -> Result<String, tabulax::TabulateError> {
    let mut table = Tabulator::with_padding(padding)?;
    match headers {
        Some(header_line) => table.add_content_with_headers(body, header_line)?,
        None => table.add_content(body)?,
    }
    Ok(table.render())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabulax --features cli");
    eprintln!("  tbl [OPTIONS] [INPUT_FILE]");
}
