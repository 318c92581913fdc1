use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("no component namespace `{namespace}` is registered")]
    UnknownNamespace { namespace: String },

    #[error("namespace `{namespace}` does not export `{name}`")]
    UnknownComponent { namespace: String, name: String },

    #[error("unsupported value kind `{kind}` cannot be converted to bytes")]
    UnsupportedType { kind: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
