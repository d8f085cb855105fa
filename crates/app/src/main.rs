use clap::Parser;
use index_sync_core::{CloudSearchStore, NotificationEvent, PipelineConfig, S3Store, SyncPipeline};
use std::io::Read;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "index-sync", version)]
struct Cli {
    /// Path to a JSON notification event; reads stdin when omitted.
    event_file: Option<std::path::PathBuf>,

    /// Region used to derive storage and search-endpoint addresses.
    #[arg(long, env = "REGION", default_value = "us-east-1")]
    region: String,

    /// Override the object-store base URL (local stacks).
    #[arg(long, env = "S3_ENDPOINT")]
    s3_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let raw = match &cli.event_file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let event: NotificationEvent = serde_json::from_str(&raw)?;

    let mut storage = S3Store::new(&cli.region);
    if let Some(endpoint) = cli.s3_endpoint.clone() {
        storage = storage.with_endpoint(endpoint);
    }

    let pipeline = SyncPipeline::new(
        storage,
        CloudSearchStore::new(),
        PipelineConfig {
            region: cli.region.clone(),
        },
    );

    info!(version = env!("CARGO_PKG_VERSION"), region = %cli.region, "index-sync boot");
    pipeline.handle(&event).await;

    Ok(())
}
