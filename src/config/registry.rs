use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::adapters::parser::PassthroughParser;
use crate::adapters::sources::{FrameApi, GraphQlApi};
use crate::domain::ports::{Parser, Source};
use crate::utils::error::{IngestError, Result};

/// Namespace assigned to a reference with no dot in it.
pub const ROOT_NAMESPACE: &str = ".";

/// Identifier pair naming a loadable implementation. Built by splitting a
/// fully-qualified dotted string at its last separator; immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRef {
    namespace: String,
    name: String,
}

impl ComponentRef {
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((namespace, name)) => Self {
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            None => Self {
                namespace: ROOT_NAMESPACE.to_string(),
                name: qualified.to_string(),
            },
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace == ROOT_NAMESPACE {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

impl From<&str> for ComponentRef {
    fn from(qualified: &str) -> Self {
        Self::parse(qualified)
    }
}

pub type SourceFactory = fn() -> Box<dyn Source>;
pub type ParserFactory = fn() -> Box<dyn Parser>;

/// Storage variants the registry can hand out. Storage instantiation is
/// parameterized, so resolution yields this tag rather than a zero-argument
/// factory; the composition root matches on it exhaustively to pick the
/// constructor-argument shape. Adding a backend means adding a variant, a
/// tag string and a match arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageProvider {
    LinuxPath,
    UnityCatalogVolume,
}

impl StorageProvider {
    pub fn storage_type(&self) -> &'static str {
        match self {
            StorageProvider::LinuxPath => "linux-path",
            StorageProvider::UnityCatalogVolume => "unity-catalog-volume",
        }
    }
}

/// A registered implementation: a factory for the zero-argument roles, a
/// provider tag for storage.
#[derive(Debug)]
pub enum Component {
    Source(SourceFactory),
    Parser(ParserFactory),
    Storage(StorageProvider),
}

impl Component {
    fn role(&self) -> &'static str {
        match self {
            Component::Source(_) => "source",
            Component::Parser(_) => "parser",
            Component::Storage(_) => "storage",
        }
    }
}

/// Registry mapping component references to implementations.
///
/// Replaces a live module/symbol loader: the set of valid configurations is
/// populated at startup and auditable in one place. Resolution yields the
/// implementation (factory or provider tag), never an instance.
#[derive(Default)]
pub struct Registry {
    namespaces: HashMap<String, HashMap<String, Component>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every built-in implementation, keyed by
    /// dotted paths mirroring the crate's module tree.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "frame_ingest.adapters.sources.FrameApi",
            Component::Source(|| Box::new(FrameApi)),
        );
        registry.register(
            "frame_ingest.adapters.sources.GraphQlApi",
            Component::Source(|| Box::new(GraphQlApi)),
        );
        registry.register(
            "frame_ingest.adapters.parser.PassthroughParser",
            Component::Parser(|| Box::new(PassthroughParser)),
        );
        registry.register(
            "frame_ingest.adapters.storage.PathStorage",
            Component::Storage(StorageProvider::LinuxPath),
        );
        registry.register(
            "frame_ingest.adapters.storage.UnityCatalogVolumeStorage",
            Component::Storage(StorageProvider::UnityCatalogVolume),
        );
        registry
    }

    pub fn register(&mut self, qualified: &str, component: Component) {
        let reference = ComponentRef::parse(qualified);
        self.namespaces
            .entry(reference.namespace)
            .or_default()
            .insert(reference.name, component);
    }

    pub fn resolve(&self, reference: &ComponentRef) -> Result<&Component> {
        let namespace = self.namespaces.get(reference.namespace()).ok_or_else(|| {
            IngestError::UnknownNamespace {
                namespace: reference.namespace().to_string(),
            }
        })?;
        namespace
            .get(reference.name())
            .ok_or_else(|| IngestError::UnknownComponent {
                namespace: reference.namespace().to_string(),
                name: reference.name().to_string(),
            })
    }

    pub fn resolve_source(&self, reference: &ComponentRef) -> Result<SourceFactory> {
        match self.resolve(reference)? {
            Component::Source(factory) => Ok(*factory),
            other => Err(wrong_role(reference, "source", other.role())),
        }
    }

    pub fn resolve_parser(&self, reference: &ComponentRef) -> Result<ParserFactory> {
        match self.resolve(reference)? {
            Component::Parser(factory) => Ok(*factory),
            other => Err(wrong_role(reference, "parser", other.role())),
        }
    }

    pub fn resolve_storage(&self, reference: &ComponentRef) -> Result<StorageProvider> {
        match self.resolve(reference)? {
            Component::Storage(provider) => Ok(*provider),
            other => Err(wrong_role(reference, "storage", other.role())),
        }
    }
}

fn wrong_role(reference: &ComponentRef, wanted: &str, found: &str) -> IngestError {
    IngestError::Config {
        message: format!("`{reference}` names a {found} implementation, expected a {wanted}"),
    }
}
