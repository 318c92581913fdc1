use clap::Parser;
use frame_ingest::utils::logger;
use frame_ingest::{ingest_frames_into_landing_layer, CliConfig, Registry};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("starting frame-ingest");
    let context = config.preset.context();
    if config.verbose {
        tracing::debug!("context: {:?}", context);
    }

    let registry = Registry::builtin();

    match ingest_frames_into_landing_layer(&registry, &context) {
        Ok(()) => {
            tracing::info!("ingestion completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("ingestion failed: {}", e);
            Err(e.into())
        }
    }
}
