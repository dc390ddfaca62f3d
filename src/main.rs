//! Sheetdigest - condensed, paginated reports from spreadsheets and text documents

mod config;

use anyhow::{Result, bail};
use sheetdigest_core::{Digest, storage};
use sheetdigest_engine::DEFAULT_SUMMARY_SENTENCES;
use std::env;
use std::path::{Path, PathBuf};

fn print_usage() {
    eprintln!("Usage: sheetdigest [OPTIONS] <FILE>...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <FILE>...                 Input files (.csv, .xlsx, .ods, .txt, .md, .pdf, .docx)");
    eprintln!("                            Several tabular files make one multi-sheet report;");
    eprintln!("                            text documents are summarized one at a time");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <FILE>       Write the report to FILE (.md for markdown, text otherwise)");
    eprintln!("  --layout <FILE>           Load page layout from a TOML file");
    eprintln!("  --no-config               Ignore the user's layout.toml");
    eprintln!(
        "  --sentences <N>           Sentences kept in text summaries (default: {})",
        DEFAULT_SUMMARY_SENTENCES
    );
    eprintln!("  -h, --help                Print help");
}

struct Options {
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    layout_file: Option<PathBuf>,
    no_config: bool,
    sentences: usize,
}

/// Parse command-line arguments. Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options {
        inputs: Vec::new(),
        output: None,
        layout_file: None,
        no_config: false,
        sentences: DEFAULT_SUMMARY_SENTENCES,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "-o" | "--output" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--output requires a file path");
                };
                options.output = Some(PathBuf::from(value));
            }
            "--layout" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--layout requires a file path");
                };
                options.layout_file = Some(PathBuf::from(value));
            }
            "--no-config" => options.no_config = true,
            "--sentences" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("--sentences requires a number");
                };
                options.sentences = match value.parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => bail!("--sentences expects a positive number, got '{}'", value),
                };
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                bail!("Unknown option: {}", arg);
            }
            _ => options.inputs.push(PathBuf::from(&args[i])),
        }
        i += 1;
    }

    if options.inputs.is_empty() {
        bail!("no input file given");
    }
    Ok(Some(options))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Markdown,
    Text,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("md") => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

fn run(options: Options) -> Result<()> {
    let (policy, warnings) =
        config::load_layout(options.layout_file.as_deref(), !options.no_config)?;
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let digest = Digest::from_paths(&options.inputs)?.with_summary_sentences(options.sentences);
    log::info!(
        "{} input(s), {} sheet(s)",
        digest.sources.len(),
        digest.sheet_count()
    );
    let pages = digest.pages(&policy);

    match options.output {
        Some(path) => {
            match OutputFormat::from_path(&path) {
                OutputFormat::Markdown => storage::write_markdown(&path, &pages)?,
                OutputFormat::Text => storage::write_text(&path, &pages)?,
            }
            println!("Exported {} page(s) to {}", pages.len(), path.display());
        }
        None => print!("{}", storage::render_text(&pages)),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
