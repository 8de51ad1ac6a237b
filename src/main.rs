use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::service::PaymentService;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::bank::BankClient;
use payment_gateway::interfaces::http::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about = "Merchant-facing payment gateway", long_about = None)]
struct Cli {
    /// Address to serve the merchant API on
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Base URL of the acquiring bank
    #[arg(long, default_value = "http://localhost:8080/")]
    bank_url: Url,

    /// Timeout for each bank call, in seconds
    #[arg(long, default_value_t = 30)]
    bank_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let bank = BankClient::new(cli.bank_url, Duration::from_secs(cli.bank_timeout_secs))
        .into_diagnostic()?;
    let store = InMemoryPaymentStore::new();
    let service = PaymentService::new(Arc::new(bank), Arc::new(store));

    let app = http::router(AppState {
        service: Arc::new(service),
    });

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .into_diagnostic()?;
    tracing::info!(addr = %cli.listen, "payment gateway listening");
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
