//! Command-line interface for yamlet
//! This binary decodes yamlet documents and prints them in any registered format.
//!
//! Usage:
//!   yamlet `<path>` [--format `<format>`] [--config `<file>`]   - Decode and print a document
//!   yamlet `<path>` --check                                   - Verify the document round-trips
//!   yamlet --list-formats                                     - List all available formats

use clap::Parser;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use yamlet_config::{Loader, YamletConfig};
use yamlet_parser::formats::{
    FormatRegistry, JsonFormat, TreevizFormat, TreevizOptions, YamletFormat,
};
use yamlet_parser::loader::DocumentLoader;
use yamlet_parser::{decode_str, encode_to_string};

#[derive(Parser, Debug)]
#[command(name = "yamlet", version, about = "A tool for inspecting and converting yamlet files")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to the yamlet file
    #[arg(required_unless_present = "list_formats")]
    path: Option<PathBuf>,

    /// Output format (default: convert.default_format from the configuration)
    #[arg(short, long)]
    format: Option<String>,

    /// Configuration file layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decode, re-encode and decode again, and report whether the trees match
    #[arg(long, conflicts_with = "format")]
    check: bool,

    /// List available output formats
    #[arg(long)]
    list_formats: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = build_registry(&config);

    if cli.list_formats {
        handle_list_formats_command(&registry);
        return ExitCode::SUCCESS;
    }

    let Some(path) = cli.path.as_deref() else {
        eprintln!("A path is required unless listing formats");
        return ExitCode::FAILURE;
    };

    let result = if cli.check {
        handle_check_command(path)
    } else {
        let format = cli
            .format
            .as_deref()
            .unwrap_or(&config.convert.default_format);
        handle_convert_command(&registry, path, format)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        if let Some(source) = e.source() {
            debug!(cause = %source, "error source");
        }
        ExitCode::FAILURE
    })
}

fn load_config(path: Option<&Path>) -> Result<YamletConfig, yamlet_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build()
}

/// A registry whose json and treeviz formats follow the configuration
fn build_registry(config: &YamletConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(YamletFormat);
    registry.register(JsonFormat::new(config.convert.json.pretty));
    registry.register(TreevizFormat::new(TreevizOptions {
        max_label_chars: config.inspect.treeviz.max_label_chars,
        show_attributes: config.inspect.treeviz.show_attributes,
    }));
    registry
}

/// Decode `path` and print it in `format`
fn handle_convert_command(
    registry: &FormatRegistry,
    path: &Path,
    format: &str,
) -> Result<ExitCode, Box<dyn Error>> {
    // Fail on an unknown format before touching the file
    let target = registry.get(format)?;
    let root = DocumentLoader::from_path(path)?.parse();
    info!(path = %path.display(), format, nodes = root.node_count(), "converting");

    let mut output = target.serialize(&root)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    print!("{}", output);
    Ok(ExitCode::SUCCESS)
}

/// Report whether `path` survives encode → decode unchanged
fn handle_check_command(path: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let original = DocumentLoader::from_path(path)?.parse();
    let encoded = encode_to_string(&original);
    let reparsed = decode_str(&encoded);

    // Node equality ignores attribute order; the re-encoded text does not
    if reparsed == original && encode_to_string(&reparsed) == encoded {
        println!(
            "ok: {} round-trips ({} nodes)",
            path.display(),
            original.node_count() - 1
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("mismatch: {} does not round-trip", path.display());
        eprintln!("re-encoded as:\n{}", encoded);
        Ok(ExitCode::FAILURE)
    }
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut capabilities = Vec::new();
        if format.supports_parsing() {
            capabilities.push("parse");
        }
        if format.supports_serialization() {
            capabilities.push("serialize");
        }
        println!("  {} ({})", name, capabilities.join(", "));
        println!("    {}", format.description());
        println!();
    }
}
