use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use codelab_editor::parser::{DEFAULT_MAX_INPUT_SIZE, FORMAT_NAME};
use codelab_editor::{EditorParser, ParserRegistry};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Decode a codelab export and dump the assembled document as JSON
#[derive(ClapParser, Debug)]
#[command(name = "codelab-editor", version)]
struct Cli {
    /// Export file to read, `-` for stdin
    input: PathBuf,

    /// Input format name
    #[arg(long, default_value = FORMAT_NAME)]
    format: String,

    /// Reject exports larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
    max_input_size: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start = Instant::now();

    let mut registry = ParserRegistry::new();
    registry.register(
        FORMAT_NAME,
        EditorParser::builder()
            .max_input_size(cli.max_input_size)
            .build(),
    );

    let parser = registry.get_or_err(&cli.format)?;
    let mut input = open_input(&cli.input)?;
    let codelab = parser
        .parse(&mut *input)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    tracing::info!(
        steps = codelab.steps.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed export"
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&codelab)?
    } else {
        serde_json::to_string(&codelab)?
    };
    println!("{}", json);

    Ok(())
}
