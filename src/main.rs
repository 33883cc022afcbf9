use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_activity::application::{
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use user_activity::config::AppConfig;
use user_activity::domain::{activity::ActivityStore, user::UserDirectory};
use user_activity::infrastructure::{
    database,
    repositories::{PostgresActivityStore, PostgresUserDirectory},
    security::token::BiscuitTokenVerifier,
    time::SystemClock,
};
use user_activity::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let store: Arc<dyn ActivityStore> = Arc::new(PostgresActivityStore::new(pool.clone()));
    let user_directory: Arc<dyn UserDirectory> = Arc::new(PostgresUserDirectory::new(pool));
    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenVerifier::new(config.biscuit_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        store,
        user_directory,
        token_manager,
        clock,
        config.panel_limit(),
    ));

    let dispatcher = services.event_dispatcher();
    tracing::info!(sinks = dispatcher.len(), "event subscribers registered");

    let state = HttpState {
        services: Arc::clone(&services),
        events: Arc::new(dispatcher),
    };

    let app = build_router(
        state,
        RouterOptions {
            expose_api: config.expose_api(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(expose_api = config.expose_api(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
