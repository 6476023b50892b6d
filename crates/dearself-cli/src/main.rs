use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dearself", version, about = "DearSelf wellness tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account and session management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Today's summary across all trackers
    Dashboard {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Guided breathing exercises
    Breathe {
        #[command(subcommand)]
        action: commands::breathe::BreatheAction,
    },
    /// Water intake tracking
    Hydration {
        #[command(subcommand)]
        action: commands::hydration::HydrationAction,
    },
    /// Daily mood check-in
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Daily step count
    Steps {
        #[command(subcommand)]
        action: commands::steps::StepsAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action).await,
        Commands::Dashboard { json } => commands::dashboard::run(json).await,
        Commands::Task { action } => commands::task::run(action).await,
        Commands::Breathe { action } => commands::breathe::run(action).await,
        Commands::Hydration { action } => commands::hydration::run(action).await,
        Commands::Mood { action } => commands::mood::run(action).await,
        Commands::Steps { action } => commands::steps::run(action).await,
        Commands::Journal { action } => commands::journal::run(action).await,
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
