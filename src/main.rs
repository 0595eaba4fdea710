use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tuition::cli::{handle_audit_command, handle_fee_command, handle_student_command};
use tuition::config::{paths::TuitionPaths, settings::Settings};
use tuition::storage::Storage;

/// Environment variable holding the log filter, e.g. `TUITION_LOG=debug`
const LOG_ENV: &str = "TUITION_LOG";

#[derive(Parser)]
#[command(
    name = "tuition",
    version,
    about = "Track monthly tuition fees per student",
    long_about = "Tuition keeps a sparse ledger of monthly fee payments. Months are \
                  given as MMYY codes (0925 is September 2025); any enrolled month \
                  without a recorded payment counts as unpaid."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Student roster commands
    #[command(subcommand)]
    Student(tuition::cli::StudentCommands),

    /// Fee tracking commands
    #[command(subcommand)]
    Fee(tuition::cli::FeeCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TuitionPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Student(cmd)) => handle_student_command(&storage, cmd)?,
        Some(Commands::Fee(cmd)) => handle_fee_command(&storage, &settings, cmd)?,
        Some(Commands::Audit { count }) => handle_audit_command(&storage, count)?,
        Some(Commands::Init) => {
            if !tuition::storage::init::needs_initialization(&paths) {
                println!("Already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }
            println!("Initializing tuition ledger at: {}", paths.base_dir().display());
            tuition::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Add a student with 'tuition student add <name> --enrolled MMYY'.");
        }
        Some(Commands::Config) => {
            println!("Tuition Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", storage.audit().path().display());
            println!(
                "Initialized:      {}",
                if storage.is_initialized() { "Yes" } else { "No" }
            );
            println!(
                "Fee records:      {} across {} student(s)",
                storage.ledger().record_count()?,
                storage.ledger().student_count()?
            );
            println!();
            println!("Settings:");
            println!("  History window:     {} month(s)", settings.history_window());
            println!("  Human month names:  {}", settings.human_month_names);
        }
        None => {
            println!("Tuition - monthly fee tracking");
            println!();
            println!("Run 'tuition --help' for usage information.");
        }
    }

    Ok(())
}
