use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use clap::Parser as ClapParser;
use dude::{display_error, lexer::lexer::Whitespace, parse_with_config, ParseConfig};
use log::{LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

#[derive(ClapParser, Debug)]
#[command(name = "dude", about = "Parse a dude source file and report the first error")]
struct Cli {
    /// Source file to parse.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the syntax tree.
    #[arg(short, long)]
    print: bool,

    /// Print the program back as canonical source.
    #[arg(short, long)]
    render: bool,

    /// Print how long parsing took.
    #[arg(short, long)]
    time: bool,

    /// Log every grammar production entered.
    #[arg(long)]
    trace: bool,

    /// Split words on single spaces only, as the parser does by default.
    #[arg(long)]
    strict_spacing: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.trace && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), error);
            exit(1);
        }
    };

    let whitespace = if cli.strict_spacing {
        Whitespace::Single
    } else {
        Whitespace::Any
    };
    let config = ParseConfig::default()
        .with_trace(cli.trace)
        .with_whitespace(whitespace);

    // Files usually end with a newline, which is not a separator under strict spacing
    let source = if cli.strict_spacing {
        contents.trim_end_matches(['\n', '\r'])
    } else {
        contents.as_str()
    };

    let start = Instant::now();
    let (program, error) = parse_with_config(source, config);
    let elapsed = start.elapsed();

    if cli.time {
        println!("Parsed in {:?}", elapsed);
    }

    if cli.print {
        println!("{:#?}", program);
    }

    if cli.render {
        println!("{}", program);
    }

    if let Some(error) = error {
        display_error(&error, &cli.file, source);
        exit(1);
    }
}
