use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use ingestor::services::snapshot::{refresh_all, spawn_periodic_refresh};
use ingestor::{
    build_state, connect_db, ingest_file, AppError, AppState, DbProfile, IngestConfig,
    JsonReplayParser, RedisCache,
};
use migration::{migrate, MigrationCommand};
use tracing::{error, info, warn};

mod telemetry;

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    PostgresTest,
    SqliteFile,
}

#[derive(Clone, Copy, ValueEnum)]
enum MigrateAction {
    Up,
    Down,
    Fresh,
    Status,
}

#[derive(Subcommand)]
enum Command {
    /// Apply or inspect schema migrations
    Migrate {
        #[arg(value_enum, default_value = "up")]
        action: MigrateAction,
    },
    /// Publish the users and maps snapshots once
    Snapshot,
    /// Ingest decoded replay files one after another
    Ingest {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Parser)]
#[command(name = "replay-ingest")]
#[command(about = "Normalize decoded match replays into relational storage")]
struct Cli {
    /// Storage backend
    #[arg(long, value_enum, default_value = "postgres")]
    db: Db,

    /// SQLite file, used with `--db sqlite-file`
    #[arg(long, default_value = "replays.sqlite")]
    sqlite_path: String,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn profile(&self) -> DbProfile {
        match self.db {
            Db::Postgres => DbProfile::Prod,
            Db::PostgresTest => DbProfile::Test,
            Db::SqliteFile => DbProfile::SqliteFile {
                path: self.sqlite_path.clone(),
            },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, code = %err.code(), "replay-ingest failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let profile = cli.profile();

    match cli.command {
        Command::Migrate { action } => {
            let command = match action {
                MigrateAction::Up => MigrationCommand::Up,
                MigrateAction::Down => MigrationCommand::Down,
                MigrateAction::Fresh => MigrationCommand::Fresh,
                MigrateAction::Status => MigrationCommand::Status,
            };
            let conn = connect_db(&profile).await?;
            migrate(&conn, command)
                .await
                .map_err(|e| AppError::db(format!("migration failed: {e}")))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Snapshot => {
            let state = connect_state(profile).await?;
            refresh_all(&state).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ingest { paths } => {
            let state = connect_state(profile).await?;
            refresh_all(&state).await?;
            let refresher = state
                .config()
                .snapshot_interval
                .map(|every| spawn_periodic_refresh(state.clone(), every));

            let parser = JsonReplayParser;
            let mut errored = 0usize;
            for path in &paths {
                match ingest_file(&state, &parser, path).await {
                    Ok(summary) => info!(
                        file = %path.display(),
                        game_id = %summary.game_id,
                        status = "processed",
                        "file done"
                    ),
                    Err(err) => {
                        errored += 1;
                        warn!(
                            file = %path.display(),
                            status = "errored",
                            code = %err.code(),
                            retryable = err.is_retryable(),
                            error = %err,
                            "file done"
                        );
                    }
                }
            }

            if let Some(handle) = refresher {
                handle.abort();
            }
            info!(files = paths.len(), errored, "ingest run finished");
            Ok(if errored == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

async fn connect_state(profile: DbProfile) -> Result<AppState, AppError> {
    let config = IngestConfig::from_env()?;
    let cache = RedisCache::connect(config.require_redis_url()?).await?;
    build_state()
        .with_db(profile)
        .with_cache(cache)
        .with_config(config)
        .build()
        .await
}
