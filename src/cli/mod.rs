//! Command-line interface for showcase.
//!
//! Dry-runs a submission through the validation pipeline and shows the
//! resolved policy configuration. Nothing is written anywhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config;
use crate::core::{content_pipeline, counted_featured, FeaturedLimit, MutationExecutor, Phase};
use crate::domain::{ContentEditInput, EntityKind};

/// showcase - validation core for the portfolio admin area
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a submission file against the rules and featured limit
    Check {
        /// Entity kind the submission targets
        #[arg(short, long, value_enum)]
        kind: EntityKind,

        /// Submission file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of items of this kind currently featured (ignored unless
        /// the submission is featured)
        #[arg(long, default_value = "0")]
        featured_count: u32,

        /// Override the configured featured maximum
        #[arg(long)]
        max: Option<u32>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check {
                kind,
                input,
                featured_count,
                max,
            } => check_submission(kind, &input, featured_count, max).await,
            Commands::Config => show_config(),
        }
    }
}

/// Read a submission, picking the parser from the file extension
fn read_submission(path: &Path) -> Result<ContentEditInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read submission file: {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse submission JSON: {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse submission YAML: {}", path.display()))
    }
}

async fn check_submission(
    kind: EntityKind,
    path: &Path,
    featured_count: u32,
    max: Option<u32>,
) -> Result<()> {
    let input = read_submission(path)?;

    let limit = match max {
        Some(0) => anyhow::bail!("--max must be greater than 0"),
        Some(max) => FeaturedLimit::new(kind, max),
        None => config::config()?.policy.limit_for(kind),
    };

    let current = counted_featured(&input, featured_count);
    let executor = MutationExecutor::new(
        format!("check_{}", kind),
        content_pipeline(kind, input, current, limit),
    );
    let validated = executor.execute().await;
    let state = executor.state();

    match (state.phase(), validated) {
        (Phase::Succeeded, Some(validated)) => {
            eprintln!("[{} accepted ({}/{} featured)]", kind, current, limit.max());
            println!("{}", serde_json::to_string_pretty(&validated)?);
            Ok(())
        }
        _ => {
            let error = state
                .error
                .context("Executor finished without a result or an error")?;
            eprintln!("[{} rejected: {}]", kind, error.tag());
            anyhow::bail!("{}", error.message())
        }
    }
}

fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Showcase Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Featured limits:");
    println!("  Highlights: {}", cfg.policy.max_featured_highlights);
    println!("  Projects:   {}", cfg.policy.max_featured_projects);

    Ok(())
}
