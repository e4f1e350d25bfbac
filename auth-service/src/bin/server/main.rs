use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenService;
use auth_service::config::Config;
use auth_service::credential::hashing::HashingPool;
use auth_service::credential::models::Credentials;
use auth_service::credential::ports::AuthenticatorPort;
use auth_service::credential::service::Authenticator;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::postgres;
use auth_service::outbound::repositories::PostgresCredentialStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_name = %config.database.name,
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        hashing_max_concurrent = config.password.max_concurrent,
        "Configuration loaded"
    );

    let pg_pool = postgres::connect(&config.database).await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let hasher = PasswordHasher::with_cost(
        config.password.memory_cost_kib,
        config.password.time_cost,
        config.password.parallelism,
    )?;
    let hashing = HashingPool::new(hasher, config.password.max_concurrent);
    let tokens = TokenService::new(config.jwt.secret.as_bytes(), config.jwt.ttl()?);
    let store = Arc::new(PostgresCredentialStore::new(pg_pool));

    let authenticator = Arc::new(Authenticator::new(store, hashing, tokens));

    // Seed the bootstrap account before accepting any request.
    authenticator
        .provision(Credentials::new(
            config.bootstrap.identifier.clone(),
            config.bootstrap.password.clone(),
        ))
        .await?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(authenticator);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}
