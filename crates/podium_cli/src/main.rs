//! Podium - deck layout and theme pipeline
//!
//! Takes a generated slide deck (clean JSON or raw model output), assigns a
//! layout to every slide, resolves a theme, and emits a render plan any
//! renderer can paint from:
//! - `podium compose deck.json` - decode, classify, theme, and compose
//! - `podium themes` - list the built-in theme catalog

mod compose;
mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use podium_core::Deck;
use podium_theme::ThemePreset;

use crate::compose::{compose_deck, resolve_theme};
use crate::config::PodiumConfig;

/// Assign layouts and themes to generated slide decks
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "Assign layouts and themes to generated slide decks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a deck payload and emit a themed render plan
    Compose {
        /// Deck file: clean JSON or raw model output
        input: PathBuf,

        /// Theme to apply (overrides the deck's theme and the config default)
        #[arg(short, long)]
        theme: Option<String>,

        /// Config file or directory containing podium.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Write the render plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in themes
    Themes,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compose {
            input,
            theme,
            config,
            output,
        } => compose_command(&input, theme.as_deref(), &config, output.as_deref()),
        Command::Themes => {
            themes_command();
            Ok(())
        }
    }
}

fn compose_command(
    input: &Path,
    theme_flag: Option<&str>,
    config_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let config = PodiumConfig::load_from_dir(config_path)?;

    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let deck = Deck::from_model_output(&raw)
        .with_context(|| format!("Failed to decode a deck from {}", input.display()))?;

    let preset = resolve_theme(theme_flag, &deck, &config);
    info!(
        "composing {} slides from {} as {}",
        deck.slides.len(),
        input.display(),
        preset.id()
    );

    let plan = compose_deck(&deck, preset);
    let json = if config.output.pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}

fn themes_command() {
    for preset in ThemePreset::all() {
        println!("{:<15} {}", preset.id(), preset.display_name());
    }
}
