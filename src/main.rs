use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use sdui::config::Config;
use sdui::document;
use sdui::logging::{init_tracing, LogSink};

/// Render a server-driven UI document in the terminal.
#[derive(Debug, Parser)]
#[command(name = "sdui", version, about)]
struct Cli {
    /// Screen document (JSON).
    document: PathBuf,

    /// Config file (default: ~/.config/sdui/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decode the document, report the result and exit.
    #[arg(long, conflicts_with = "dump")]
    check: bool,

    /// Print the decoded document in normalized form and exit.
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if cli.check || cli.dump {
        init_tracing(&config.logging, LogSink::Stderr);
        return headless(&cli);
    }

    init_tracing(&config.logging, LogSink::File);
    tracing::info!(document = %cli.document.display(), "Starting viewer");
    sdui::ui::run(&cli.document, &config).context("Terminal viewer failed")?;
    Ok(ExitCode::SUCCESS)
}

fn headless(cli: &Cli) -> anyhow::Result<ExitCode> {
    let screen = match document::load(&cli.document) {
        Ok(screen) => screen,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.dump {
        let text = serde_json::to_string_pretty(&screen.to_document())
            .context("Failed to serialize document")?;
        println!("{text}");
    } else {
        println!("ok: {} components", screen.components.len());
    }
    Ok(ExitCode::SUCCESS)
}
