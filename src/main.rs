use anyhow::{Context, Result};
use chrono::Utc;
use kart_api::application::{
    ports::{security::AuthProvider, time::Clock},
    services::ApplicationServices,
};
use kart_api::config::{AppConfig, LogFormat};
use kart_api::domain::{coupon::CouponRepository, order::OrderRepository, product::ProductRepository};
use kart_api::infrastructure::{
    repositories::{InMemoryCouponRepository, InMemoryOrderRepository, InMemoryProductRepository},
    security::StaticAuthProvider,
    time::SystemClock,
};
use kart_api::presentation::http::{routes::build_router, state::HttpState};
use std::{fs::File, io::BufReader, net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format());

    let product_repo: Arc<dyn ProductRepository> = Arc::new(load_products(&config)?);
    let coupon_repo: Arc<dyn CouponRepository> = Arc::new(load_coupons(&config)?);
    let order_repo: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());

    tracing::warn!("serving with the static test credential table");
    let auth_provider: Arc<dyn AuthProvider> =
        Arc::new(StaticAuthProvider::with_test_credentials(Utc::now()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        product_repo,
        order_repo,
        coupon_repo,
        auth_provider,
        clock,
    ));

    let state = HttpState {
        services,
        settings: Arc::new(config.http_settings()),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn load_products(config: &AppConfig) -> Result<InMemoryProductRepository> {
    match config.products_path() {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read product catalog {}", path.display()))?;
            let repo = InMemoryProductRepository::from_json(&json)
                .with_context(|| format!("failed to parse product catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), products = repo.products().len(), "loaded product catalog");
            Ok(repo)
        }
        None => InMemoryProductRepository::sample().context("bundled product catalog is invalid"),
    }
}

fn load_coupons(config: &AppConfig) -> Result<InMemoryCouponRepository> {
    match config.coupons_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open coupon file {}", path.display()))?;
            let repo = InMemoryCouponRepository::from_reader(BufReader::new(file))
                .context("failed to fill coupons store")?;
            tracing::info!(path = %path.display(), coupons = repo.len(), "loaded coupons");
            Ok(repo)
        }
        None => Ok(InMemoryCouponRepository::sample()),
    }
}

fn init_tracing(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));
    let result = match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    if result.is_err() {
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
