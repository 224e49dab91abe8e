use crate::domain::model::RowError;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// One GET; the whole body on a 2xx response.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Destination for rows the parser had to skip.
pub trait ErrorSink {
    fn report(&mut self, error: &RowError);
}

pub trait ConfigProvider: Send + Sync {
    fn url(&self) -> &str;
    fn error_log_path(&self) -> &str;
}
