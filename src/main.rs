//! TOPSIS Ranker server entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use topsis_ranker::adapters::{app_router, ResendMailer, TopsisHandlers};
use topsis_ranker::application::RunTopsisHandler;
use topsis_ranker::config::AppConfig;
use topsis_ranker::ports::ResultMailer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);

    if !config.mail_enabled() {
        info!("No email configuration; result emails disabled");
    }
    let mailer = config.email.as_ref().map(|email| {
        info!(from = %email.from_header(), "Result emails enabled");
        Arc::new(ResendMailer::new(email)) as Arc<dyn ResultMailer>
    });

    let run_handler = RunTopsisHandler::new(config.scoring.scorer(), config.limits.clone(), mailer);
    let app = app_router(
        TopsisHandlers::new(Arc::new(run_handler)),
        &config.server,
        &config.limits,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.server.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
