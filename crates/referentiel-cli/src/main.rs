//! Référentiel CLI - manage compétences and compétences poste

mod console;

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use referentiel_core::catalogue::{Catalogue, JobSkills, Record, Skills};
use referentiel_core::config::Config;
use referentiel_core::controller::{ListController, Outcome, RecordForm};
use referentiel_core::gateway::HttpGateway;
use referentiel_core::Error;
use tracing::{debug, info};

use console::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "referentiel")]
#[command(author, version, about = "Manage compétences and compétences poste", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    /// API base URL (overrides configuration)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage compétences
    Skills {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage compétences poste
    JobSkills {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RecordAction {
    /// List records
    List {
        /// Only show rows containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Create a record
    Add {
        nom: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Update a record
    Edit {
        id: i64,
        #[arg(short, long)]
        nom: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a record
    Delete { id: i64 },
    /// Export records to CSV
    Export {
        /// Export only these ids (defaults to every record)
        #[arg(short, long = "select", value_name = "ID")]
        select: Vec<i64>,
        /// Output directory (defaults to export.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

/// Settings shared by every record command
struct Session {
    api_url: String,
    timeout_secs: u64,
    export_dir: PathBuf,
    format: OutputFormat,
    quiet: bool,
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("referentiel=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Skills { action } => {
            let session = open_session(cli.api_url, cli.format, cli.quiet, cli.yes)?;
            cmd_records::<Skills>(&session, action).await
        }

        Commands::JobSkills { action } => {
            let session = open_session(cli.api_url, cli.format, cli.quiet, cli.yes)?;
            cmd_records::<JobSkills>(&session, action).await
        }

        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

fn open_session(
    api_url: Option<String>,
    format: OutputFormat,
    quiet: bool,
    yes: bool,
) -> anyhow::Result<Session> {
    let config = Config::load()?;
    let api_url = api_url.unwrap_or_else(|| config.api.resolved_base_url());
    debug!(api_url = %api_url, "Session opened");

    Ok(Session {
        api_url,
        timeout_secs: config.api.timeout_secs,
        export_dir: config.export.directory,
        format,
        quiet,
        yes,
    })
}

// ============================================================================
// Command Implementations
// ============================================================================

async fn cmd_records<K: Catalogue>(session: &Session, action: RecordAction) -> anyhow::Result<()> {
    let gateway = HttpGateway::<K>::builder()
        .api_url(session.api_url.as_str())
        .timeout_secs(session.timeout_secs)
        .build()?;
    let notifier = ConsoleNotifier::stdin(session.yes, session.quiet);
    let mut controller = ListController::<K, _, _>::new(gateway, notifier);

    if controller.reload().await == Outcome::Failed {
        return Err(anyhow!(
            "Could not load {} from {}",
            K::COMMAND,
            controller.gateway().endpoint()
        ));
    }

    match action {
        RecordAction::List { filter } => {
            if let Some(filter) = filter {
                controller.apply_filter(filter);
            }
            print_records::<K>(&controller.visible_items(), session)?;
        }
        RecordAction::Add { nom, description } => {
            controller.open_add();
            let form = controller.add_form_mut();
            form.nom = nom;
            form.description = description.unwrap_or_default();

            let outcome = controller.submit_add().await;
            finish(outcome, controller.add_form())?;
        }
        RecordAction::Edit {
            id,
            nom,
            description,
        } => {
            let record = controller
                .find(id)
                .cloned()
                .ok_or(Error::RecordNotFound(id, K::COMMAND))?;
            controller.open_edit(&record);
            let form = controller.edit_form_mut();
            if let Some(nom) = nom {
                form.nom = nom;
            }
            if let Some(description) = description {
                form.description = description;
            }

            let outcome = controller.submit_edit().await;
            finish(outcome, controller.edit_form())?;
        }
        RecordAction::Delete { id } => {
            if controller.find(id).is_none() {
                return Err(Error::RecordNotFound(id, K::COMMAND).into());
            }
            let outcome = controller.request_delete(id).await;
            finish(outcome, &RecordForm::default())?;
        }
        RecordAction::Export { select, output } => {
            for id in select {
                if !controller.select(id) {
                    return Err(Error::RecordNotFound(id, K::COMMAND).into());
                }
            }

            let dir = output.unwrap_or_else(|| session.export_dir.clone());
            let exported = controller
                .export_csv(&dir)
                .with_context(|| format!("Failed to write export to {}", dir.display()))?;
            if let Some(path) = exported {
                info!(path = %path.display(), "Export saved");
                if !session.quiet {
                    println!("{}", path.display());
                }
            }
        }
    }
    Ok(())
}

/// Turn a controller outcome into the command's exit status
///
/// The controller has already notified the user; this only decides
/// whether the process fails.
fn finish(outcome: Outcome, form: &RecordForm) -> anyhow::Result<()> {
    match outcome {
        Outcome::Done | Outcome::Cancelled => Ok(()),
        Outcome::Invalid => {
            let errors: Vec<String> = form.validate().iter().map(|e| e.to_string()).collect();
            let detail = if errors.is_empty() {
                "no record selected".to_string()
            } else {
                errors.join(", ")
            };
            Err(Error::InvalidInput(detail).into())
        }
        Outcome::Duplicate => Err(Error::DuplicateName(form.trimmed_nom()).into()),
        Outcome::Failed => Err(anyhow!("The backend rejected the request")),
    }
}

fn print_records<K: Catalogue>(records: &[&K::Record], session: &Session) -> anyhow::Result<()> {
    if session.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        if !session.quiet {
            println!("No records found.");
            println!("\nCreate one with: referentiel {} add <nom>", K::COMMAND);
        }
        return Ok(());
    }

    for record in records {
        println!("{}", format_record(*record));
    }
    Ok(())
}

fn format_record<R: Record>(record: &R) -> String {
    let id = record
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    match record.description() {
        Some(description) if !description.is_empty() => {
            format!("  {} - {} ({})", id, record.nom(), description)
        }
        _ => format!("  {} - {}", id, record.nom()),
    }
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
