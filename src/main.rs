use std::sync::Arc;

use anyhow::Context;

use civic_sms::config::ServiceConfig;
use civic_sms::notify;
use civic_sms::pipeline::{ReportAssembler, ReportProcessor};
use civic_sms::store::{MemoryReportStore, ReportStore};
use civic_sms::webhook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env().context("invalid configuration")?;

    eprintln!("civic-sms v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   SMS webhook: http://0.0.0.0:{}/sms", config.port);
    eprintln!("   Reports API: http://0.0.0.0:{}/reports", config.port);

    // ── Collaborators (built once, shared by every request) ─────────────
    let store: Arc<dyn ReportStore> = Arc::new(MemoryReportStore::new());

    let notifier = notify::from_config(&config).context("failed to set up notifications")?;
    if config.notify_webhooks.is_empty() {
        eprintln!("   Notifications: log only");
    } else {
        eprintln!(
            "   Notifications: {} webhook(s)",
            config.notify_webhooks.len()
        );
    }

    let processor = Arc::new(ReportProcessor::new(
        ReportAssembler::with_defaults(),
        store,
        notifier,
    ));

    let app = webhook::routes(processor, config.list_limit);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!(port = config.port, "HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}
