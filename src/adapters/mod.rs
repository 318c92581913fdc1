// Adapters layer: concrete implementations behind the domain ports.

pub mod parser;
pub mod sources;
pub mod storage;
