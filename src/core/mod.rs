pub mod convert;
pub mod persist;
pub mod use_case;

pub use crate::domain::model::{Frame, RawPayload, StoreValue};
pub use crate::domain::ports::{Parser, Source, Storage};
pub use crate::utils::error::Result;
