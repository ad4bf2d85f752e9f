mod breathe;
mod journal;
mod metronome;
mod render;
mod views;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use calm_core::{Notice, find_group};
use calm_store::CalmHome;
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "calm", about = "Box breathing, a private journal, and calming catalogs")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    /// Print listings and notices as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guided box breathing timer
    Breathe {
        /// Stop after this many full cycles
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        cycles: Option<u64>,

        /// Tick length in milliseconds (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: Option<u64>,
    },

    /// Write, list, and delete private journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Sign in, creating the user on first use
    Login {
        name: String,
    },

    /// End the current session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Therapy tool hub
    Tools,

    /// Support groups
    Groups {
        #[command(subcommand)]
        action: Option<GroupAction>,
    },

    /// Calming music catalog
    Music,

    /// Yoga session catalog
    Yoga,
}

#[derive(Subcommand)]
enum JournalAction {
    /// Save a new entry (reads stdin when TEXT is omitted)
    Write { text: Option<String> },

    /// List your entries, newest first
    List,

    /// Delete one of your entries
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum GroupAction {
    /// Join a support group by id
    Join { id: u32 },
}

fn data_dir() -> Option<PathBuf> {
    std::env::var("CALM_DATA_DIR").ok().map(PathBuf::from)
}

fn open_home() -> Result<CalmHome> {
    CalmHome::open(data_dir().as_deref()).context("failed to open calm data directory")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Breathe { cycles, tick_ms } => cmd_breathe(*cycles, *tick_ms).await,
        Commands::Journal { action } => cmd_journal(&cli, action),
        Commands::Login { name } => cmd_login(name),
        Commands::Logout => cmd_logout(),
        Commands::Whoami => cmd_whoami(),
        Commands::Tools => {
            views::tools(&mut std::io::stdout(), cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Groups { action: None } => {
            views::groups(&mut std::io::stdout(), cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Groups {
            action: Some(GroupAction::Join { id }),
        } => cmd_join_group(&cli, *id),
        Commands::Music => {
            views::music(&mut std::io::stdout(), cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Yoga => {
            views::yoga(&mut std::io::stdout(), cli.json).map(|_| ExitCode::SUCCESS)
        }
    }
}

fn report(cli: &Cli, notice: &Notice, success: bool) -> Result<ExitCode> {
    views::notice(
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        notice,
        cli.json,
    )?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn cmd_breathe(cycles: Option<u64>, tick_ms: Option<u64>) -> Result<ExitCode> {
    let home = open_home()?;
    let breathing = &home.config().breathing;
    let pattern = breathing.pattern().context("invalid breathing pattern")?;
    let period = Duration::from_millis(tick_ms.unwrap_or(breathing.tick_ms));
    tracing::info!(
        "box breathing {} at {}ms per tick",
        pattern.describe(),
        period.as_millis()
    );

    let controls = breathe::spawn_stdin_reader();
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let summary = breathe::run(
        pattern,
        period,
        cycles,
        controls,
        &mut std::io::stdout(),
        shutdown,
    )
    .await?;
    tracing::debug!(
        "session ended: {:?} after {} ticks",
        summary.reason,
        summary.ticks
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_journal(cli: &Cli, action: &JournalAction) -> Result<ExitCode> {
    let home = open_home()?;
    let store = home.store();

    let outcome = match action {
        JournalAction::Write { text } => {
            let text = journal::read_text(text.clone(), &mut std::io::stdin())?;
            journal::write(store, text)
        }
        JournalAction::List => journal::list(store, &mut std::io::stdout(), cli.json)?,
        JournalAction::Delete { id } => journal::delete(store, *id),
    };

    match &outcome.notice {
        Some(notice) => report(cli, notice, outcome.success),
        None if outcome.success => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}

fn cmd_login(name: &str) -> Result<ExitCode> {
    let home = open_home()?;
    let session = home
        .store()
        .sign_in(name)
        .context("failed to sign in")?;
    println!("Signed in as {}.", session.user_name);
    Ok(ExitCode::SUCCESS)
}

fn cmd_logout() -> Result<ExitCode> {
    let home = open_home()?;
    if home.store().sign_out().context("failed to sign out")? {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_whoami() -> Result<ExitCode> {
    let home = open_home()?;
    match home
        .store()
        .current_session()
        .context("failed to read session")?
    {
        Some(session) => {
            println!("{}", session.user_name);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Not signed in.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_join_group(cli: &Cli, id: u32) -> Result<ExitCode> {
    match find_group(id) {
        Some(group) => {
            tracing::debug!("join requested for group '{}'", group.name);
            report(
                cli,
                &Notice::info("Coming Soon", "Support group chat feature coming soon!"),
                true,
            )
        }
        None => report(
            cli,
            &Notice::error(format!("No support group with id {id}.")),
            false,
        ),
    }
}
