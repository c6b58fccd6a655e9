mod api;
mod middleware;
mod store;

use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::{AuthState, RateLimitState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = threadscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let engine = threadscope_engine::Engine::from_vocabulary_path(config.vocabulary_path.as_deref())?;
    match &config.vocabulary_path {
        Some(path) => tracing::info!(path = %path.display(), "loaded vocabulary"),
        None => tracing::info!("using built-in vocabulary"),
    }

    let auth = AuthState::from_env(matches!(
        config.env,
        threadscope_core::Environment::Development
    ))?;
    let rate_limit = RateLimitState::per_minute(config.rate_limit_per_minute);
    let bind_addr = config.bind_addr;
    tracing::info!(env = %config.env, %bind_addr, "starting threadscope server");

    let app = build_app(AppState::new(engine, config), auth, rate_limit);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
