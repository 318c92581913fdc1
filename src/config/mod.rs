pub mod registry;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use self::registry::ComponentRef;

#[derive(Debug, Clone, Parser)]
#[command(name = "frame-ingest")]
#[command(about = "Download frame data and land it in a storage backend")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = Preset::Local)]
    pub preset: Preset,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Built-in context presets. Currently identical; the notebook preset exists
/// so hosted-notebook runs have their own knob to turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Local,
    Notebook,
}

impl Preset {
    pub fn context(&self) -> Context {
        match self {
            Preset::Local => Context::local_default(),
            Preset::Notebook => Context::notebook_default(),
        }
    }
}

/// Immutable run configuration: which implementation backs each of the three
/// pipeline roles, plus environment metadata. Created once per run and passed
/// by reference through the composition root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    pub environment: String,
    pub project_package_name: String,
    pub source: ComponentRef,
    pub parser: ComponentRef,
    pub storage: ComponentRef,
}

impl Context {
    pub fn base_catalog_name(&self) -> String {
        format!("{}_catalog_base", self.environment)
    }

    pub fn local_default() -> Self {
        Self {
            environment: "dev".to_string(),
            project_package_name: "frame_ingest".to_string(),
            source: ComponentRef::parse("frame_ingest.adapters.sources.GraphQlApi"),
            parser: ComponentRef::parse("frame_ingest.adapters.parser.PassthroughParser"),
            storage: ComponentRef::parse("frame_ingest.adapters.storage.PathStorage"),
        }
    }

    pub fn notebook_default() -> Self {
        Self {
            environment: "dev".to_string(),
            project_package_name: "frame_ingest".to_string(),
            source: ComponentRef::parse("frame_ingest.adapters.sources.GraphQlApi"),
            parser: ComponentRef::parse("frame_ingest.adapters.parser.PassthroughParser"),
            storage: ComponentRef::parse("frame_ingest.adapters.storage.PathStorage"),
        }
    }
}
