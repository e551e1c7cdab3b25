use dice_command::{CommandParser, ParseOptions};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let case_insensitive = std::env::args().skip(1).any(|arg| arg == "-i");
    let parser =
        CommandParser::new().with_options(ParseOptions::new().with_case_insensitive(case_insensitive));

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let parsed = parser.parse(&line);
        println!("{}", parsed.command);
        println!("{:#?}", parsed.command);
        for error in &parsed.errors {
            eprintln!("Error: {}", error);
        }

        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
