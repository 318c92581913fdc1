use crate::domain::model::StoreValue;
use crate::domain::ports::{Parser, Source, Storage};
use crate::utils::error::Result;

/// Download, parse, persist. Pure orchestration glue: the concrete source,
/// parser and storage are decided by the caller, and any stage error
/// propagates unchanged.
pub struct DownloadAndStore {
    source: Box<dyn Source>,
    parser: Box<dyn Parser>,
    storage: Box<dyn Storage>,
}

impl DownloadAndStore {
    pub fn new(source: Box<dyn Source>, parser: Box<dyn Parser>, storage: Box<dyn Storage>) -> Self {
        Self {
            source,
            parser,
            storage,
        }
    }

    pub fn execute(&self) -> Result<()> {
        tracing::info!("downloading payload");
        let raw = self.source.download();

        tracing::info!("parsing payload");
        let parsed = self.parser.parse(raw);

        tracing::info!("persisting payload");
        self.storage.save(&StoreValue::Json(parsed))
    }
}
