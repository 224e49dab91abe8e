pub mod engine;
pub mod lookup;
pub mod parser;

pub use crate::domain::model::{Directory, Person, RowError, RowErrorKind};
pub use crate::domain::ports::{ConfigProvider, ErrorSink, Fetcher};
pub use crate::utils::error::Result;
