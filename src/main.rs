use fressnapftracker::app_config::AppConfig;
use fressnapftracker::payload_loader::load_payloads_from;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let payloads = config.payloads();
    let loaded = load_payloads_from(payloads.directory(), payloads.extension(), payloads.kind()).await?;

    for payload in &loaded {
        info!("{}: {}", payload.file_name(), payload.payload());
    }

    info!("🔥 Inspected {} {:?} payload(s)", loaded.len(), payloads.kind());

    Ok(())
}
