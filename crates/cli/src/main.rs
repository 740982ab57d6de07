#![deny(unsafe_code)]
//! CLI binary for texgen.
//!
//! Subcommands:
//! - `build` (default) : regenerate every texture in the manifest
//! - `render <generator>` : render one texture to a PNG
//! - `list` : print available generators, their default sizes and params

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process;
use texgen_core::{Generator, Recipe, TextureError};
use texgen_generators::snapshot::render_recipe;
use texgen_generators::{GeneratorKind, Manifest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "texgen", about = "Procedural texture generator for game assets")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log per-render detail (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Regenerate every texture listed in the manifest.
    Build {
        /// Asset root that manifest output paths are relative to.
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// JSON manifest to use instead of the built-in one.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Render a single texture and write a PNG.
    Render {
        /// Generator name (e.g. "ground-tile").
        generator: String,

        /// Image width in pixels (defaults to the generator's size).
        #[arg(short = 'W', long)]
        width: Option<usize>,

        /// Image height in pixels (defaults to the generator's size).
        #[arg(short = 'H', long)]
        height: Option<usize>,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Generator parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// List available generators.
    List,
}

/// Running `texgen` with no subcommand builds the built-in manifest into `.`.
impl Default for Command {
    fn default() -> Self {
        Command::Build {
            root: PathBuf::from("."),
            manifest: None,
        }
    }
}

/// Log filter used when `RUST_LOG` is unset.
///
/// JSON mode keeps stderr quiet apart from warnings so scripted callers only
/// see the report on stdout and an error object on failure.
fn default_filter(verbose: bool, json: bool) -> &'static str {
    match (json, verbose) {
        (true, false) => "warn",
        (_, true) => "debug",
        (false, false) => "info",
    }
}

fn init_tracing(default: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build(root: &Path, manifest: Option<&Path>) -> Result<Value, CliError> {
    let manifest = match manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::builtin(),
    };
    let written = manifest.build(root)?;
    tracing::info!(count = written.len(), "build finished");

    let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
    Ok(json!({ "written": paths }))
}

fn list() -> Result<Value, CliError> {
    let mut generators = Vec::new();
    for &name in GeneratorKind::list_generators() {
        let (width, height) = GeneratorKind::default_size(name)
            .ok_or_else(|| TextureError::UnknownGenerator(name.into()))?;
        let generator = GeneratorKind::from_name(name, width, height, 1, &json!({}))?;
        generators.push(json!({
            "name": name,
            "width": width,
            "height": height,
            "params": generator.param_schema(),
        }));
    }
    Ok(json!({ "generators": generators }))
}

fn render(
    generator: &str,
    width: Option<usize>,
    height: Option<usize>,
    seed: u64,
    params: &str,
    output: &Path,
) -> Result<Value, CliError> {
    let params: Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

    let (default_w, default_h) = GeneratorKind::default_size(generator)
        .ok_or_else(|| TextureError::UnknownGenerator(generator.to_string()))?;
    let mut recipe = Recipe::new(
        generator,
        width.unwrap_or(default_w),
        height.unwrap_or(default_h),
        seed,
        output,
    );
    recipe.params = params;

    let written = render_recipe(&recipe, Path::new(""))?;

    let mut report = serde_json::to_value(&recipe)?;
    report["output"] = Value::String(written.display().to_string());
    Ok(report)
}

/// Executes a command and returns its machine-readable report.
fn run(command: &Command) -> Result<Value, CliError> {
    match command {
        Command::Build { root, manifest } => build(root, manifest.as_deref()),
        Command::List => list(),
        Command::Render {
            generator,
            width,
            height,
            seed,
            params,
            output,
        } => render(generator, *width, *height, *seed, params, output),
    }
}

/// Prints a report as JSON, or as text for the commands that have a text form.
fn print_report(command: &Command, report: &Value, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if let Command::List = command {
        println!("Generators:");
        for entry in report["generators"].as_array().into_iter().flatten() {
            let params: Vec<&str> = entry["params"]
                .as_object()
                .map(|o| o.keys().map(String::as_str).collect())
                .unwrap_or_default();
            println!(
                "  {:<12} {}x{}  params: {}",
                entry["name"].as_str().unwrap_or_default(),
                entry["width"],
                entry["height"],
                params.join(", ")
            );
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(default_filter(cli.verbose, cli.json));
    let command = cli.command.unwrap_or_default();
    let result = run(&command).and_then(|report| print_report(&command, &report, cli.json));
    if let Err(e) = result {
        if cli.json {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            tracing::error!("{e}");
        }
        process::exit(e.exit_code());
    }
}
