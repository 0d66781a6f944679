//! CLI entry point for treedoc

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use treedoc::logging::setup_logger;
use treedoc::{GenerateConfig, OutputFormat, WalkerConfig, generate_document};

#[derive(Parser, Debug)]
#[command(name = "treedoc")]
#[command(about = "Generate markdown or text documentation of a folder structure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate folder structure without file contents
    Structure(CommonArgs),
    /// Generate folder structure with file contents
    StructureWithCode(CommonArgs),
}

/// Flags shared by both subcommands.
#[derive(Args, Debug)]
struct CommonArgs {
    /// Directory to document
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Patterns to ignore (e.g. "node_modules/**" "*.log")
    #[arg(short = 'i', long = "ignore", num_args = 1..)]
    ignore: Vec<String>,

    /// Output file name (default: output.md or output.txt)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Maximum depth to traverse
    #[arg(short = 'd', long = "depth")]
    depth: Option<usize>,

    /// Include file sizes in the output
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

impl CommonArgs {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }

    fn generate_config(&self, include_contents: bool) -> GenerateConfig {
        GenerateConfig {
            walker: WalkerConfig {
                include_contents,
                ignore_patterns: self.ignore.clone(),
                max_depth: self.depth,
                show_size: self.size,
            },
            format: self.format,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose).context("Failed to initialise logger")?;

    match cli.command {
        Command::Structure(args) => {
            let output = write_document(&args, false)?;
            println!("Structure has been written to {}", output.display());
        }
        Command::StructureWithCode(args) => {
            let output = write_document(&args, true)?;
            println!("Structure with code has been written to {}", output.display());
        }
    }
    Ok(())
}

/// Generate the document for `args` and write it, replacing any existing file.
fn write_document(args: &CommonArgs, include_contents: bool) -> Result<PathBuf> {
    let config = args.generate_config(include_contents);
    let output = args.output_path();
    debug!("Command parameters: {:?}, output={}", config, output.display());

    let document = generate_document(&args.path, &config)
        .with_context(|| format!("Failed to document {}", args.path.display()))?;

    fs::write(&output, &document)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {} bytes to {}", document.len(), output.display());

    Ok(output)
}
