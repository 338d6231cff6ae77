//! RowDB - CLI Client

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rowdb::{ExecutionEngine, QueryResult};

/// Print welcome banner
fn print_banner(path: &Path) {
    println!(
        r#"
 ____               ____  ____
|  _ \ _____      _|  _ \| __ )
| |_) / _ \ \ /\ / / | | |  _ \
|  _ < (_) \ V  V /| |_| | |_) |
|_| \_\___/ \_/\_/ |____/|____/

 A minimal persistent row store in Rust
 Backing file: {}
 Type '.help' for help, '.quit' to exit
"#,
        path.display()
    );
}

/// Print help message
fn print_help() {
    println!(
        r#"
Commands:
  .help              Show this help message
  .quit              Exit RowDB
  .rows              Show the current row count
  .clear             Clear screen

Statements:
  INSERT <id> '<content>'   Append one row (content up to 255 bytes)
  SELECT                    List every row in insertion order

Keywords are case-sensitive. Examples:
  INSERT 0 'alice'
  INSERT 1 'bob'
  SELECT
"#
    );
}

/// Format a query result the way the reference driver prints rows
fn format_result(result: &QueryResult) -> String {
    let mut output = String::new();

    if let Some(message) = &result.message {
        output.push_str(&format!("{}\n", message));
    } else {
        for row in &result.rows {
            output.push_str(&format!("{}\n", row));
        }
        output.push_str(&format!("{} row(s) returned\n", result.rows.len()));
    }

    output
}

/// Host-side bootstrap: the core never creates the storage medium, so make
/// sure the backing file exists before the table is opened.
fn ensure_backing_file(path: &Path) -> anyhow::Result<()> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .with_context(|| format!("cannot create backing file '{}'", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "data.db".to_string());
    let path = Path::new(&path);

    ensure_backing_file(path)?;
    let mut engine = ExecutionEngine::open(path)
        .with_context(|| format!("cannot open table on '{}'", path.display()))?;

    print_banner(path);

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("rowdb> ") {
            Ok(line) => {
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }
                rl.add_history_entry(command)?;

                if let Some(meta) = command.strip_prefix('.') {
                    match meta {
                        "help" => print_help(),
                        "rows" => println!("{} row(s)", engine.table().num_rows()),
                        "clear" => {
                            print!("\x1B[2J\x1B[1;1H");
                            std::io::stdout().flush()?;
                        }
                        "quit" | "exit" => break,
                        other => println!("Unknown command '.{}'", other),
                    }
                    continue;
                }

                match engine.execute(command) {
                    Ok(result) => print!("{}", format_result(&result)),
                    Err(err) if err.is_recoverable() => println!("Error: {}", err),
                    Err(err) => {
                        eprintln!("Fatal: {}", err);
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Readline error: {}", err);
                break;
            }
        }
    }

    engine.close().context("failed to close table")?;
    println!("Goodbye!");
    Ok(())
}
