use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use settleup::cli::{
    handle_expense_command, handle_export_command, handle_group_command, handle_log_command,
    handle_settle_command, handle_summary_command, ExpenseCommands, ExportArgs, GroupCommands,
};
use settleup::config::{paths::SettlePaths, settings::Settings};
use settleup::storage::Storage;

/// Environment variable holding the tracing filter (e.g. "settleup=debug")
const LOG_ENV: &str = "SETTLEUP_LOG";

#[derive(Parser)]
#[command(
    name = "settleup",
    author = "Kaylee Beyene",
    version,
    about = "Track shared group expenses and settle up",
    long_about = "SettleUp records shared and individual expenses within a group, \
                  keeps each member's budget and balance up to date, and works out \
                  the fewest transfers needed to settle everyone's debts."
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group management commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show a shareable text summary of a group
    Summary {
        /// Group name or ID
        group: String,
    },

    /// Show balances and the transfers that settle a group
    Settle {
        /// Group name or ID
        group: String,
    },

    /// Export groups to JSON, YAML, CSV or a text summary
    Export(ExportArgs),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Initialize data directory and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("settleup=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = SettlePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Group(cmd)) => {
            handle_group_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary { group }) => {
            handle_summary_command(&storage, &settings, &group)?;
        }
        Some(Commands::Settle { group }) => {
            handle_settle_command(&storage, &settings, &group)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Log { count }) => {
            handle_log_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing SettleUp at: {}", paths.base_dir().display());
            settleup::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Create your first group with:");
            println!("  settleup group create \"Weekend Trip\" --member Alice --member Bob");
        }
        Some(Commands::Config) => {
            println!("SettleUp Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.groups_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", if paths.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Default member budget: {}",
                settings.format_money(settings.default_member_budget)
            );
            println!(
                "  Share tolerance:       {}",
                settings.format_money(settings.share_tolerance)
            );
            println!("  Enforce budgets:       {}", settings.enforce_budgets);
        }
        None => {
            println!("SettleUp - Shared expenses, settled");
            println!();
            println!("Run 'settleup --help' for usage information.");
        }
    }

    Ok(())
}
