use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rust_decimal::Decimal;
use tracing::{info, Level};

use excellon2gcode::{convert, ToolConfig};

/// Path value meaning standard input or output
const STDIO: &str = "-";

#[derive(Parser)]
#[command(name = "excellon2gcode")]
#[command(about = "Convert an Excellon drill file to g-code", long_about = None)]
#[command(version)]
struct Cli {
    /// Drill file to read, `-` for standard input
    #[arg(short, long, value_name = "FILE", default_value = STDIO)]
    input: PathBuf,

    /// Where to write the g-code, `-` for standard output
    #[arg(short, long, value_name = "FILE", default_value = STDIO)]
    output: PathBuf,

    /// Safe Z height to retract to between holes
    #[arg(short = 'Z', long, default_value = "0.125", allow_hyphen_values = true)]
    height: Decimal,

    /// Z depth to drill down to
    #[arg(short = 'z', long, default_value = "-0.125", allow_hyphen_values = true)]
    depth: Decimal,

    /// Log more detail to standard error, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // stdout may be carrying the program itself
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn open_input(path: &Path) -> Result<Box<dyn io::BufRead>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ToolConfig::new(cli.height, cli.depth);
    let input = open_input(&cli.input)?;
    let mut output = open_output(&cli.output)?;

    let count = convert(input, &mut output, &config).with_context(|| {
        format!(
            "failed to convert {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;
    output.flush().context("failed to flush output")?;

    info!(points = count, "wrote drilling program");
    Ok(())
}
