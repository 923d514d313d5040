use anyhow::{Context, Result};
use fountain_neuraxis_config::{Config, OutputFormat};
use fountain_neuraxis_engine::{Diagnostic, Document, io};
use std::path::{Path, PathBuf};
use std::process;

mod args;
mod output;

use args::CliArgs;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = CliArgs::parse();

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let format = args.format.unwrap_or(config.output);
    let target = match args.path.or(config.scripts_path) {
        Some(path) => path,
        None => {
            eprintln!("Error: No script path provided and no scripts_path configured");
            eprintln!("Usage: fountain-neuraxis-cli [--format <FORMAT>] <PATH>");
            eprintln!("Or set scripts_path in {}", config_path.display());
            process::exit(1);
        }
    };

    let files = resolve_scripts(&target)?;
    log::info!("Parsing {} screenplay(s) from {}", files.len(), target.display());

    let mut documents = Vec::with_capacity(files.len());
    for file in files {
        let doc = load_reporting(&file)?;
        documents.push((file, doc));
    }

    print_documents(&documents, format)
}

/// A single file, or every `.fountain` file under a folder.
fn resolve_scripts(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_dir() {
        let files = io::scan_fountain_files(target)
            .with_context(|| format!("Failed to scan {}", target.display()))?;
        if files.is_empty() {
            log::warn!("No .fountain files found in {}", target.display());
        }
        Ok(files)
    } else {
        Ok(vec![target.to_path_buf()])
    }
}

fn load_reporting(file: &Path) -> Result<Document> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let doc = io::load_document(file, &mut diagnostics)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    for d in &diagnostics {
        eprintln!("{}:{}: {}", file.display(), d.line, d.kind);
    }
    Ok(doc)
}

fn print_documents(documents: &[(PathBuf, Document)], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = match documents {
                [(_, doc)] => output::render_json(doc)?,
                _ => output::render_json_batch(documents)?,
            };
            println!("{json}");
        }
        OutputFormat::Outline => {
            let many = documents.len() > 1;
            for (path, doc) in documents {
                if many {
                    println!("{}", output::file_header(path));
                }
                print!("{}", output::render_outline(doc)?);
            }
        }
    }
    Ok(())
}
