//! wiretext - accessibility-aware text wireframes
//!
//! A CLI tool for validating text wireframes, rendering them to SVG, and
//! preparing them for language-model based design tools.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ReportFormat, StoreAction, TargetArg};
use std::path::{Path, PathBuf};
use wiretext::line_classifier;
use wiretext::patterns::PatternLibrary;
use wiretext::pipeline;
use wiretext::storage::{import_document_id, DirectoryStore, DocumentStore};
use wiretext::{RenderConfig, SaveRequest};

/// Main entry point for the wiretext CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            out_dir,
        } => {
            handle_render_command(input, output, config, out_dir)?;
        }

        Commands::Validate {
            input,
            format,
            strict,
        } => {
            handle_validate_command(&input, format, strict)?;
        }

        Commands::Highlight { input, html } => {
            handle_highlight_command(&input, html)?;
        }

        Commands::Export {
            input,
            target,
            output,
        } => {
            handle_export_command(&input, target, output)?;
        }

        Commands::Save { input, dir } => {
            handle_save_command(&input, &dir)?;
        }

        Commands::Store { root, action } => {
            handle_store_command(root, action)?;
        }

        Commands::Patterns { library, show } => {
            handle_patterns_command(library, show)?;
        }
    }

    Ok(())
}

/// Initialize logging; `RUST_LOG` applies unless `-v` asks for more
fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Debug);
        }
    }
    builder.init();
}

fn read_input(input: &Path) -> Result<String> {
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read wireframe {}", input.display()))
}

/// Handle the render command
fn handle_render_command(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => RenderConfig::load(&path)
            .with_context(|| format!("Failed to load render config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(output) = output {
        if !input.is_file() {
            anyhow::bail!(
                "An output path can only be given for a single input file; use --out-dir for directories"
            );
        }
        let bytes = pipeline::render_file(&input, &output, &config)
            .with_context(|| format!("Failed to render {}", input.display()))?;
        println!("✓ Wrote {} ({} bytes)", output.display(), bytes);
        return Ok(());
    }

    let inputs = pipeline::discover_wireframes(&input)
        .with_context(|| format!("Failed to find wireframes in {}", input.display()))?;
    if inputs.is_empty() {
        println!("No .txt wireframes found in {}", input.display());
        return Ok(());
    }

    let rendered = pipeline::render_all(&inputs, &input, out_dir.as_deref(), &config)
        .context("Failed to render wireframes")?;
    for file in &rendered {
        println!("✓ Wrote {} ({} bytes)", file.output.display(), file.bytes);
    }
    if rendered.len() > 1 {
        println!("\n✓ Rendered {} wireframes", rendered.len());
    }

    Ok(())
}

/// Handle the validate command
fn handle_validate_command(input: &Path, format: ReportFormat, strict: bool) -> Result<()> {
    let text = read_input(input)?;
    let diagnostics = wiretext::validate(&text);

    match format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&diagnostics)
                .context("Failed to serialize diagnostics")?;
            println!("{}", json);
        }
        ReportFormat::Text => {
            if diagnostics.is_empty() {
                println!("✓ No accessibility issues found in {}", input.display());
            } else {
                for diagnostic in &diagnostics {
                    println!("⚠ {}", diagnostic);
                }
                println!(
                    "\n{} issue{} found in {}",
                    diagnostics.len(),
                    if diagnostics.len() == 1 { "" } else { "s" },
                    input.display()
                );
            }
        }
    }

    if strict && !diagnostics.is_empty() {
        anyhow::bail!("{} accessibility issue(s) found", diagnostics.len());
    }

    Ok(())
}

/// Handle the highlight command
fn handle_highlight_command(input: &Path, html: bool) -> Result<()> {
    let text = read_input(input)?;

    if html {
        println!("{}", line_classifier::highlight_html(&text));
        return Ok(());
    }

    for (line_number, line) in text.lines().enumerate() {
        let category = line_classifier::classify_line(line);
        println!("{:>4}  {:<11} {}", line_number + 1, category.name(), line);
    }

    Ok(())
}

/// Handle the export command
fn handle_export_command(input: &Path, target: TargetArg, output: Option<PathBuf>) -> Result<()> {
    let text = read_input(input)?;
    let wrapped = wiretext::wrap_for(target.into(), &text);

    match output {
        Some(path) => {
            std::fs::write(&path, &wrapped)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {} prompt to {}", wiretext::ExportTarget::from(target), path.display());
        }
        None => print!("{}", wrapped),
    }

    Ok(())
}

/// Handle the save command
fn handle_save_command(input: &Path, dir: &Path) -> Result<()> {
    let text = read_input(input)?;
    let request = SaveRequest::new(&text, chrono::Utc::now().date_naive());

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    let path = dir.join(&request.filename);
    std::fs::write(&path, &request.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Saved {}", path.display());
    Ok(())
}

/// Handle the store command
fn handle_store_command(root: PathBuf, action: StoreAction) -> Result<()> {
    let mut store = DirectoryStore::new(root);

    match action {
        StoreAction::Save { input, id } => {
            let text = read_input(&input)?;
            let id = id.unwrap_or_else(|| {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                import_document_id(&text, &stem)
            });
            store
                .save(&id, &text)
                .with_context(|| format!("Failed to store {}", input.display()))?;
            println!("✓ Stored '{}' in {}", id, store.root().display());
        }
        StoreAction::Load { id } => {
            let content = store
                .load(&id)
                .with_context(|| format!("Failed to load '{}'", id))?;
            print!("{}", content);
        }
        StoreAction::List => {
            let ids = store.list().context("Failed to list stored documents")?;
            if ids.is_empty() {
                println!("No documents in {}", store.root().display());
            }
            for id in ids {
                println!("{}", id);
            }
        }
    }

    Ok(())
}

/// Handle the patterns command
fn handle_patterns_command(library_path: Option<PathBuf>, show: Option<String>) -> Result<()> {
    let library = match library_path {
        Some(path) => PatternLibrary::load_or_empty(path),
        None => PatternLibrary::builtin(),
    };

    if let Some(id) = show {
        let pattern = library
            .find(&id)
            .with_context(|| format!("Pattern '{}' not found. Run 'wiretext patterns' to list them", id))?;
        print!("{}", pattern.syntax);
        return Ok(());
    }

    if library.is_empty() {
        println!("No patterns available");
        return Ok(());
    }

    for category in &library.categories {
        println!("{}:", category.name);
        for pattern in &category.patterns {
            println!("  {:<22} {} - {}", pattern.id, pattern.label, pattern.description);
        }
        println!();
    }

    if !library.examples.is_empty() {
        println!("Examples:");
        for example in &library.examples {
            println!("  {:<22} {}", example.file, example.name);
        }
    }

    Ok(())
}
