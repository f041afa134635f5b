use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use quote_cli::answers::AnswersFile;
use quote_cli::config::{AppConfig, Overrides};
use quote_cli::{app, logging, prompts};
use quote_core::flow::FlowVariant;
use quote_core::{TerminalView, Wizard};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Online budget questionnaire for an architecture and engineering studio.
///
/// Walks a lead through the questionnaire, prices the project and sends the
/// lead to the configured backend.
#[derive(Debug, Parser)]
#[command(name = "quote-cli", version)]
struct Cli {
    /// TOML file with `[pricing]`, `[submit]` and `[logging]` tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Submission backend (`log` or `form-post`).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Endpoint for the `form-post` backend.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Log filter, e.g. `debug` or `quote_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the questionnaire interactively.
    Run(VariantArg),

    /// Answer the questionnaire from a TOML answers file and print the quote.
    Quote {
        #[arg(long)]
        answers: PathBuf,

        #[command(flatten)]
        variant: VariantArg,
    },
}

#[derive(Debug, Args)]
struct VariantArg {
    /// `branching` (classification-driven) or `linear` (room tiers only).
    #[arg(long, default_value = "branching", value_parser = parse_variant)]
    variant: FlowVariant,
}

fn parse_variant(s: &str) -> Result<FlowVariant, String> {
    FlowVariant::parse(s).ok_or_else(|| format!("unknown variant '{s}'"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_overrides(Overrides {
            backend: cli.backend,
            endpoint: cli.endpoint,
            log_level: cli.log_level,
            log_file: cli.log_file,
        });

    if let Some(level) = &config.logging.level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }

    debug!("creating {} submitter", config.submit.backend);
    let registry = app::build_registry();
    let submitter = registry
        .create(&config.submit)
        .await
        .with_context(|| format!("creating '{}' submitter", config.submit.backend))?;

    match cli.command {
        Command::Run(VariantArg { variant }) => {
            let mut wizard = Wizard::new(variant, config.pricing);
            prompts::run(&mut wizard, &*submitter, &config.result).await?;
        }
        Command::Quote { answers, variant } => {
            let file = AnswersFile::load(&answers)?;
            let mut wizard = Wizard::new(variant.variant, config.pricing);

            let view = file.run(&mut wizard, &*submitter).await?;
            println!("{}", app::render_terminal(&view, &config.result));

            if let TerminalView::Failed(error) = view {
                bail!("submission failed: {error}");
            }
            info!(answers = %answers.display(), "quote delivered");
        }
    }

    Ok(())
}
