//! Sentiment Dashboard Binary
//!
//! Runs the dashboard against an in-memory board and drives it from stdin.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sentiment-dashboard
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_MARKET_REFRESH_SECS`: Market/card refresh period (default: 300)
//! - `DASHBOARD_SENTIMENT_REFRESH_SECS`: Feed refresh period (default: 300)
//! - `DASHBOARD_SIMULATED_LATENCY_MS`: Delay before results apply (default: 1000)
//! - `DASHBOARD_NEWS_SLOTS` / `DASHBOARD_SOCIAL_SLOTS`: Feed rows (default: 4)
//! - `DASHBOARD_RANDOM_SEED`: Seed for reproducible data (default: unset)
//! - `OTEL_ENABLED`: Enable OpenTelemetry (default: false)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;
use std::time::Duration;

use sentiment_dashboard::infrastructure::console::HELP;
use sentiment_dashboard::infrastructure::random::from_seed;
use sentiment_dashboard::infrastructure::telemetry;
use sentiment_dashboard::{
    ConsoleCommand, Dashboard, DashboardConfig, DashboardView, InMemoryDashboard, TracingNotifier,
    init_metrics, render_board, render_metrics,
};
use tokio::signal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Graceful shutdown timeout.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let _telemetry_guard = telemetry::init();

    tracing::info!("Starting Sentiment Dashboard");

    let _metrics_handle = init_metrics();

    let config = DashboardConfig::from_env()?;
    log_config(&config);

    let view = Arc::new(InMemoryDashboard::new(config.layout.page_layout()));
    let dashboard = Dashboard::new(
        &config,
        Arc::clone(&view) as Arc<dyn DashboardView>,
        Arc::new(TracingNotifier),
        from_seed(config.random_seed),
    );

    let shutdown_token = CancellationToken::new();
    let scheduler = dashboard.start(&shutdown_token);

    tracing::info!("Dashboard ready");
    println!("{HELP}");

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        await_shutdown(signal_token).await;
    });

    let mut lines = spawn_stdin_reader();
    loop {
        let line = tokio::select! {
            () = shutdown_token.cancelled() => break,
            line = lines.recv() => line,
        };
        let Some(line) = line else {
            tracing::info!("Input closed, initiating shutdown");
            break;
        };

        match ConsoleCommand::parse(&line) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => run_command(&dashboard, &view, command)?,
            Err(e) => println!("{e}"),
        }
    }

    shutdown_token.cancel();
    if tokio::time::timeout(SHUTDOWN_TIMEOUT, scheduler.shutdown())
        .await
        .is_err()
    {
        tracing::warn!(
            timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
            "Refresh tasks did not stop in time"
        );
    }

    tracing::info!("Sentiment Dashboard stopped");
    Ok(())
}

/// Execute one console command.
fn run_command(
    dashboard: &Dashboard,
    view: &InMemoryDashboard,
    command: ConsoleCommand,
) -> anyhow::Result<()> {
    let interactions = dashboard.interactions();
    match command {
        ConsoleCommand::Search(input) => {
            if interactions.submit_search(&input).is_none() {
                println!("nothing to search for");
            }
        }
        ConsoleCommand::Nav(label) => {
            if let Err(e) = interactions.select_section(&label) {
                println!("{e}");
            }
        }
        ConsoleCommand::Show => print!("{}", render_board(&view.snapshot())),
        ConsoleCommand::Snapshot => {
            println!("{}", serde_json::to_string_pretty(&view.snapshot())?);
        }
        ConsoleCommand::Metrics => match render_metrics() {
            Some(text) => print!("{text}"),
            None => println!("metrics not initialized"),
        },
        ConsoleCommand::Help => println!("{HELP}"),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

/// Read stdin lines on a dedicated thread.
///
/// The channel closes at end of input. The thread is never joined, so a
/// pending read does not hold up shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(config: &DashboardConfig) {
    tracing::info!(
        market_interval_secs = config.refresh.market_interval.as_secs(),
        sentiment_interval_secs = config.refresh.sentiment_interval.as_secs(),
        latency_ms =
            u64::try_from(config.refresh.simulated_latency.as_millis()).unwrap_or(u64::MAX),
        news_slots = config.layout.news_slots,
        social_slots = config.layout.social_slots,
        seeded = config.random_seed.is_some(),
        "Configuration loaded"
    );
    tracing::debug!(
        card = ?config.thresholds.card,
        news = ?config.thresholds.news,
        social = ?config.thresholds.social,
        "Sentiment thresholds"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
        () = shutdown_token.cancelled() => return,
    }

    shutdown_token.cancel();
}
