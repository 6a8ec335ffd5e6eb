//! Payment relay server binary.

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payment_relay::adapters::http::{build_app, PaymentAppState};
use payment_relay::adapters::rate_limiter::InMemoryRateLimiter;
use payment_relay::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use payment_relay::adapters::storage::InMemoryPaymentStore;
use payment_relay::config::AppConfig;
use payment_relay::domain::payment::{ReceiptGenerator, SignatureVerifier};
use payment_relay::ports::{PaymentGateway, PaymentStore, RateLimiter};

#[tokio::main]
async fn main() {
    // Missing or invalid configuration is fatal; refuse to serve
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {e}");
        process::exit(1);
    }

    init_tracing(&config.server.log_level);

    tracing::info!(
        environment = ?config.server.environment,
        test_mode = config.payment.is_test_mode(),
        "starting payment relay"
    );

    let gateway: Arc<dyn PaymentGateway> =
        match RazorpayGateway::new(RazorpayConfig::from(&config.payment)) {
            Ok(gateway) => Arc::new(gateway),
            Err(e) => {
                tracing::error!(error = %e, "failed to construct gateway client");
                process::exit(1);
            }
        };
    let store: Arc<dyn PaymentStore> = Arc::new(InMemoryPaymentStore::new());
    let verifier = Arc::new(SignatureVerifier::new(
        config.payment.razorpay_key_secret.clone(),
    ));
    let receipts = Arc::new(ReceiptGenerator::new());
    let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::with_defaults());

    let state = PaymentAppState {
        gateway,
        store,
        verifier,
        receipts,
    };
    let app = build_app(state, &config.server, limiter);

    let addr = config.server.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind listener");
            process::exit(1);
        }
    };

    tracing::info!(%addr, "listening");

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "server terminated");
        process::exit(1);
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
