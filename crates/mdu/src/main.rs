mod assembler;
mod config;
mod encoder;
mod image;
mod media;
mod pipeline;
mod renderer;
mod scaffold;
mod syntax_highlighter;
mod types;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, MduConfig};
use crate::pipeline::Bundler;
use crate::scaffold::{scaffold, ScaffoldOutcome};

#[derive(ClapParser)]
#[command(name = "mdu")]
#[command(about = "Bundle a Markdown document and its assets into a single self-contained HTML file")]
#[command(version)]
struct Cli {
    /// Config file (default: mdu.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle the document into a .mdu file (default)
    Build {
        /// Markdown source
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stylesheet inlined into the document
        #[arg(long)]
        style: Option<PathBuf>,

        /// Script inlined into the document
        #[arg(long)]
        script: Option<PathBuf>,

        /// Favicon (optional)
        #[arg(long)]
        icon: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Disable syntax highlighting of fenced code blocks
        #[arg(long)]
        no_highlight: bool,
    },

    /// Create the default stylesheet, script and a starter document
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Build {
            input,
            output,
            style,
            script,
            icon,
            title,
            no_highlight,
        }) => {
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(style) = style {
                config.style = style;
            }
            if let Some(script) = script {
                config.script = script;
            }
            if let Some(icon) = icon {
                config.icon = icon;
            }
            if let Some(title) = title {
                config.title = title;
            }
            if no_highlight {
                config.highlight = false;
            }
            build(config)?;
        }
        Some(Commands::Init { force }) => init(&config, force)?,
        None => build(config)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "mdu=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn build(config: MduConfig) -> Result<()> {
    let start_time = Instant::now();
    println!("Bundling {}...", config.input.display());

    let bundler = Bundler::new(config)?;
    let report = bundler.bundle()?;

    if !report.missing.is_empty() {
        eprintln!(
            "⚠️  {} asset(s) could not be inlined and were left as written:",
            report.missing.len()
        );
        for path in &report.missing {
            eprintln!("   - {}", path.display());
        }
    }

    println!(
        "✅ Wrote {} ({} bytes) in {:.2}s",
        report.output.display(),
        report.bytes,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn init(config: &MduConfig, force: bool) -> Result<()> {
    for outcome in scaffold(config, force)? {
        match outcome {
            ScaffoldOutcome::Created(path) => println!("Created {}", path.display()),
            ScaffoldOutcome::Skipped(path) => {
                println!("⏭  Skipping (exists): {}", path.display())
            }
        }
    }

    println!("\nEdit {} and run `mdu build`.", config.input.display());

    Ok(())
}
