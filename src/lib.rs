pub mod adapters;
pub mod composition;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use composition::ingest_frames_into_landing_layer;
pub use config::registry::{ComponentRef, Registry};
pub use config::{CliConfig, Context, Preset};
pub use core::use_case::DownloadAndStore;
pub use utils::error::{IngestError, Result};
