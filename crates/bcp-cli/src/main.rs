//! bcp - Business continuity register
//!
//! A terminal front end for the risk register:
//! - Record risks with impact and probability ratings
//! - Attach contingency plans to registered risks
//! - Search both by keyword
//! - Review overall readiness

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bcp_core::{constants, paths, Rating, Store};

mod commands;

/// bcp - Business Continuity Plan register
#[derive(Parser)]
#[command(name = "bcp")]
#[command(about = "Track business risks and their contingency plans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data file (defaults to $BCP_DATA_FILE, then ./bcp_data.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Print lists, search results, and reviews as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage registered risks
    Risk {
        #[command(subcommand)]
        action: RiskCommands,
    },

    /// Manage contingency plans
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },

    /// Search risks and plans by keyword
    Search { keyword: String },

    /// Review system readiness
    Review,
}

#[derive(Subcommand)]
enum RiskCommands {
    /// Register a new risk
    Add {
        name: String,
        /// Impact rating: low, medium or high
        #[arg(short, long)]
        impact: Rating,
        /// Probability rating: low, medium or high
        #[arg(short, long)]
        probability: Rating,
    },
    /// List all registered risks
    List,
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Add a contingency plan for a registered risk
    Add {
        /// Name of the risk this plan responds to
        #[arg(short, long)]
        risk: String,
        /// Plan steps
        #[arg(short, long)]
        steps: String,
        /// Person responsible for the plan
        #[arg(short = 'o', long)]
        responsible: String,
    },
    /// List all contingency plans
    List,
}

/// Log to ~/.bcp/logs/bcp.log so stdout stays clean for command output
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    // Each invocation is one command; keep earlier runs in the log
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(constants::dirs::LOG_FILE_NAME));
    let writer: Box<dyn Write + Send> = match log_file {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(writer))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let store = Store::new(paths::resolve_data_file(cli.file.as_deref()));
    tracing::info!("Using data file {:?}", store.path());

    let mut doc = commands::load_document(&store);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Risk { action } => match action {
            RiskCommands::Add {
                name,
                impact,
                probability,
            } => commands::add_risk(&store, &mut doc, &name, impact, probability, &mut out)?,
            RiskCommands::List => commands::list_risks(&doc, cli.json, &mut out)?,
        },
        Commands::Plan { action } => match action {
            PlanCommands::Add {
                risk,
                steps,
                responsible,
            } => commands::add_plan(&store, &mut doc, &risk, &steps, &responsible, &mut out)?,
            PlanCommands::List => commands::list_plans(&doc, cli.json, &mut out)?,
        },
        Commands::Search { keyword } => commands::search(&doc, &keyword, cli.json, &mut out)?,
        Commands::Review => commands::review(&doc, cli.json, &mut out)?,
    }

    Ok(())
}
