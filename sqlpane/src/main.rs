use std::collections::HashMap;
use std::io::{self, IsTerminal, Read, Write};

use arrow::util::pretty::pretty_format_batches;
use sqlpane::{
    Adapter, CatalogItem, Connection, Cursor, DataFusionAdapter, DataFusionConnection, Error,
};

#[allow(clippy::print_stdout)]
fn print_banner() {
    // Use Cargo package metadata baked into the binary at compile time
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VER: &str = env!("CARGO_PKG_VERSION");
    println!("{} version {}", NAME, VER);
    println!("Enter \".help\" for usage hints.");
    println!("Connected to a transient in-memory DataFusion session.");
}

#[allow(clippy::print_stdout)]
fn print_help() {
    println!(".help           Show this message");
    println!(".catalog        Print the catalog tree");
    println!(".limit N        Cap rows fetched per query (.limit off to clear)");
    println!(".exit/.quit     Exit the shell");
    println!("Any other line is executed as SQL against the session");
    println!();
    println!("Command-line options:");
    println!("  --help                Show this usage information");
}

struct Shell {
    connection: DataFusionConnection,
    limit: Option<usize>,
}

impl Shell {
    fn connect() -> Result<Self, Error> {
        let adapter = DataFusionAdapter::new(Vec::new(), HashMap::new());
        let connection = adapter.connect()?;
        Ok(Self {
            connection,
            limit: None,
        })
    }

    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn execute(&self, sql: &str) -> Result<(), Error> {
        if sql.trim().is_empty() {
            return Ok(());
        }
        match self.connection.execute(sql)? {
            None => println!("OK (no rows to display)"),
            Some(mut cursor) => {
                if let Some(limit) = self.limit {
                    cursor.set_limit(limit);
                }
                let batch = cursor.fetchall()?;
                match pretty_format_batches(&[batch]) {
                    Ok(table) => println!("{}", table),
                    Err(e) => eprintln!("Query executed but failed to format batch: {:?}", e),
                }
            }
        }
        Ok(())
    }

    fn print_catalog(&self) -> Result<(), Error> {
        let catalog = self.connection.get_catalog()?;
        print_items(&catalog.items, 0);
        Ok(())
    }
}

#[allow(clippy::print_stdout)]
fn print_items(items: &[CatalogItem], depth: usize) {
    for item in items {
        println!("{}{} [{}]", "  ".repeat(depth), item.label, item.type_label);
        print_items(&item.children, depth + 1);
    }
}

#[allow(clippy::print_stdout)]
fn repl(shell: &mut Shell) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        line.clear();
        print!("sqlpane> ");
        stdout.flush()?;
        if stdin.read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }
        let input = line.trim_end().trim();
        if input.is_empty() {
            continue;
        }
        if input.starts_with('.') {
            let mut parts = input.split_whitespace();
            let cmd = parts.next().unwrap_or("");
            match cmd {
                ".help" => print_help(),
                ".catalog" => {
                    if let Err(e) = shell.print_catalog() {
                        eprintln!("Catalog listing failed: {}", e);
                    }
                }
                ".limit" => match parts.next() {
                    Some("off") => shell.limit = None,
                    Some(value) => match value.parse::<usize>() {
                        Ok(n) => shell.limit = Some(n),
                        Err(_) => println!(".limit requires a row count or \"off\""),
                    },
                    None => println!(".limit requires a row count or \"off\""),
                },
                ".exit" | ".quit" => break,
                _ => println!("Unknown command: {}", cmd),
            }
        } else if let Err(e) = shell.execute(input) {
            eprintln!("Execution failed: {}", e);
        };
    }

    Ok(())
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn process_stream<R: Read>(shell: &Shell, reader: R) -> io::Result<()> {
    let mut buf = String::new();
    let mut rdr = io::BufReader::new(reader);
    rdr.read_to_string(&mut buf)?;

    let sql = buf.trim();
    if sql.is_empty() {
        return Ok(());
    }

    if let Err(e) = shell.execute(sql) {
        eprintln!("Execution failed: {}", e);
    }
    Ok(())
}

#[allow(clippy::print_stderr)]
fn main() {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_banner();
                print_help();
                return;
            }
            other => {
                eprintln!("Unrecognized argument: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
    }

    let mut shell = match Shell::connect() {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    print_banner();

    if !io::stdin().is_terminal() {
        if let Err(e) = process_stream(&shell, io::stdin()) {
            eprintln!("Error processing stdin: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&mut shell) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
