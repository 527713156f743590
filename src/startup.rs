use std::net::SocketAddr;
use std::thread::JoinHandle;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, router};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. SQL statement logging
/// is kept quiet unless explicitly enabled.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,serenity=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Starts the health endpoint on its own thread.
///
/// The server gets a dedicated single-threaded runtime so it keeps answering
/// even while the bot's runtime is busy or reconnecting. A bind failure is
/// logged and ends the thread without affecting the bot.
///
/// # Arguments
/// - `port` - Port to listen on, bound on all interfaces
pub fn spawn_health_server(port: u16) -> Result<JoinHandle<()>, AppError> {
    let handle = std::thread::Builder::new()
        .name("health-server".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!("Failed to build health server runtime: {}", e);
                    return;
                }
            };

            if let Err(e) = runtime.block_on(serve_health(port)) {
                tracing::error!("Health server stopped: {}", e);
            }
        })?;

    Ok(handle)
}

/// Serves the health router until the process exits.
pub async fn serve_health(port: u16) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Health endpoint listening on {}", addr);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
