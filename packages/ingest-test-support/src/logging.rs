//! Test logging bootstrap shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Storage drivers stay at `error` unless a directive asks for them;
/// rollback tests provoke constraint failures on purpose.
const DEFAULT_DIRECTIVES: &str = "warn,sqlx=error,sea_orm=error,ingestor::infra::db_errors=error";

/// Install the test subscriber once per process.
///
/// `TEST_LOG` wins over `RUST_LOG`; e.g. `TEST_LOG=ingestor=debug` shows the
/// per-step ingestion trail.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}
