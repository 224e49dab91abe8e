use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ERROR_LOG: &str = "error.log";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "birthday-lookup")]
#[command(about = "Download a people CSV and look up birthdays by ID")]
pub struct CliConfig {
    #[arg(long, help = "URL to the datafile")]
    pub url: String,

    #[arg(long, default_value = DEFAULT_ERROR_LOG, help = "File that skipped rows are appended to")]
    pub error_log: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn url(&self) -> &str {
        &self.url
    }

    fn error_log_path(&self) -> &str {
        &self.error_log
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_path("error_log", &self.error_log)?;
        Ok(())
    }
}
