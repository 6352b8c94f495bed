use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use stores::Stores;
use tracing::{error, info};
use uuid::Uuid;

/// Schema maintenance for the autoscaler database.
#[derive(Parser, Debug)]
#[command(name = "autoscaler-dbctl", version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Apply or inspect schema migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum MigrateAction {
    /// Apply pending migrations
    Up {
        /// Number of migrations to apply (default: all pending)
        steps: Option<u32>,
    },
    /// Revert applied migrations
    Down {
        /// Number of migrations to revert
        #[arg(default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and reapply all migrations
    Fresh,
    /// List applied and pending migrations
    Status,
}

fn init_logging() {
    // .env first so RUST_LOG and DATABASE_URL from it take effect
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "dbctl", event = "logger_init", "tracing subscriber initialized");
}

async fn run(action: MigrateAction) -> Result<()> {
    let cfg = configs::AppConfig::load_and_validate()?;
    let stores = Stores::open(&cfg).await?;
    stores.ping().await?;
    let db = stores.connection();

    match action {
        MigrateAction::Up { steps } => Migrator::up(db, steps).await?,
        MigrateAction::Down { steps } => Migrator::down(db, Some(steps)).await?,
        MigrateAction::Fresh => Migrator::fresh(db).await?,
        MigrateAction::Status => {
            for m in Migrator::get_applied_migrations(db).await? {
                info!(service = "dbctl", migration = m.name(), state = "applied", "migration status");
            }
            for m in Migrator::get_pending_migrations(db).await? {
                info!(service = "dbctl", migration = m.name(), state = "pending", "migration status");
            }
        }
    }

    stores.close().await?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    init_logging();

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    let Commands::Migrate { action: command } = Cli::parse().command;

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "dbctl", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "dbctl", event = "start", %run_id, version, command = ?command, "dbctl starting");
    match rt.block_on(run(command)) {
        Ok(()) => {
            info!(service = "dbctl", event = "done", %run_id, command = ?command, "dbctl finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "dbctl", event = "failed", %run_id, error = %e, "dbctl failed");
            std::process::ExitCode::FAILURE
        }
    }
}
