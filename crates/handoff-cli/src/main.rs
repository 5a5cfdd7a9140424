//! `handoff` — command-line checks for Handoff model records.
//!
//! # Usage
//!
//! ```text
//! handoff check profile profiles.json
//! cat leads.json | handoff check lead
//! handoff token activation
//! handoff schema > schema.sql
//! ```
//!
//! Settings come from `handoff.toml` (or `--config`) and `HANDOFF_*`
//! environment variables, the latter taking precedence.

mod check;

use std::{
  io::{self, Read},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use check::EntityKind;
use clap::{Parser, Subcommand, ValueEnum};
use handoff_core::{schema::SCHEMA, token};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate Handoff model records")]
struct Cli {
  /// Path to a TOML settings file.
  #[arg(short, long, value_name = "FILE", default_value = "handoff.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Validate a JSON object or array of records and print their projections.
  Check {
    entity: EntityKind,
    /// Input file; stdin when omitted.
    file:   Option<PathBuf>,
  },
  /// Print a fresh random hex token.
  Token { kind: TokenKind },
  /// Print the table definitions.
  Schema,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TokenKind {
  /// 32 hex characters, for `profileActivationToken`.
  Activation,
  /// 64 hex characters, for `profileSalt`.
  Salt,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
struct CliConfig {
  /// Pretty-print JSON output.
  #[serde(default)]
  pretty:    bool,
  /// Stop at the first rejected record.
  #[serde(default)]
  fail_fast: bool,
}

/// Layer `HANDOFF_*` environment variables over the optional TOML file.
fn load_settings(path: &Path) -> Result<CliConfig> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("HANDOFF"))
    .build()
    .with_context(|| format!("reading settings from {}", path.display()))?
    .try_deserialize()
    .context("parsing settings")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout carries only JSON or DDL.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = load_settings(&cli.config)?;
  tracing::debug!(?settings, "loaded settings");

  match cli.command {
    Command::Check { entity, file } => run_check(entity, file, &settings),
    Command::Token { kind } => {
      let bytes = match kind {
        TokenKind::Activation => token::ACTIVATION_TOKEN_BYTES,
        TokenKind::Salt => token::SALT_BYTES,
      };
      println!("{}", token::random_hex(bytes));
      Ok(())
    }
    Command::Schema => {
      print!("{SCHEMA}");
      Ok(())
    }
  }
}

fn run_check(
  entity: EntityKind,
  file: Option<PathBuf>,
  settings: &CliConfig,
) -> Result<()> {
  let raw = match &file {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("reading {}", path.display()))?,
    None => {
      let mut buf = String::new();
      io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
      buf
    }
  };
  let document: serde_json::Value =
    serde_json::from_str(&raw).context("input is not valid JSON")?;

  let report = check::check(entity, document, settings.fail_fast);

  let output = if settings.pretty {
    serde_json::to_string_pretty(&report.accepted)
  } else {
    serde_json::to_string(&report.accepted)
  }
  .context("encoding output")?;
  println!("{output}");

  if report.rejected > 0 {
    bail!("{} record(s) rejected", report.rejected);
  }
  Ok(())
}
