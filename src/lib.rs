pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FileErrorLog, HttpFetcher, MemoryErrorLog};
pub use crate::core::{engine::LookupEngine, lookup::LookupSession, parser::parse_directory};
pub use crate::domain::model::{Directory, Person};
pub use crate::utils::error::{LookupError, Result};
