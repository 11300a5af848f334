pub use sea_orm_migration::prelude::*;
pub use sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20261019_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261019_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Status,
}

/// Run a migration command against an open connection.
/// Used by the ingest binary and by test state bootstrap.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let applied_before = count_applied_migrations(db).await.unwrap_or(0);

    tracing::info!(
        ?command,
        ?backend,
        defined = Migrator::migrations().len(),
        applied = applied_before,
        "migration starting"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if command != MigrationCommand::Status {
                let applied_after = count_applied_migrations(db).await.unwrap_or(0);
                tracing::info!(?command, applied = applied_after, "migration finished");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(?command, error = %e, "migration failed");
            Err(e)
        }
    }
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}
