use crate::core::parser::parse_directory;
use crate::core::{Directory, ErrorSink, Fetcher};
use crate::utils::error::Result;

pub struct LookupEngine<F: Fetcher, S: ErrorSink> {
    fetcher: F,
    sink: S,
}

impl<F: Fetcher, S: ErrorSink> LookupEngine<F, S> {
    pub fn new(fetcher: F, sink: S) -> Self {
        Self { fetcher, sink }
    }

    /// Downloads `url` and parses it. Only fetch and decode failures are returned;
    /// bad rows end up in the sink.
    pub async fn build_directory(&mut self, url: &str) -> Result<Directory> {
        tracing::info!("Fetching people from {}", url);
        let payload = self.fetcher.fetch(url).await?;

        tracing::info!("Parsing {} bytes", payload.len());
        let directory = parse_directory(&payload, &mut self.sink)?;

        tracing::info!("Directory ready with {} people", directory.len());
        Ok(directory)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryErrorLog;
    use crate::utils::error::LookupError;
    use async_trait::async_trait;

    struct StaticFetcher {
        body: Vec<u8>,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(self.body.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl Fetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            Err(LookupError::HttpStatus {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    #[tokio::test]
    async fn test_build_directory_routes_bad_rows_to_sink() {
        let fetcher = StaticFetcher {
            body: b"1,Alice,01/02/1990\n2,Bob,31/13/2000\n3,Carol,15/08/1985".to_vec(),
        };
        let mut engine = LookupEngine::new(fetcher, MemoryErrorLog::new());

        let directory = engine.build_directory("http://test.local/people.csv").await.unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(engine.sink().len(), 1);

        let log = engine.into_sink();
        assert!(log.lines()[0].contains("Error processing line #2: for ID #2:"));
    }

    #[tokio::test]
    async fn test_build_directory_fetch_failure_skips_parsing() {
        let mut engine = LookupEngine::new(FailingFetcher, MemoryErrorLog::new());

        let err = engine
            .build_directory("http://test.local/people.csv")
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), 2);
        assert!(engine.sink().is_empty());
    }

    #[tokio::test]
    async fn test_build_directory_decode_failure() {
        let fetcher = StaticFetcher {
            body: vec![0x31, 0x2c, 0xc3, 0x28],
        };
        let mut engine = LookupEngine::new(fetcher, MemoryErrorLog::new());

        let err = engine.build_directory("http://test.local/people.csv").await.unwrap_err();

        assert!(matches!(err, LookupError::Decode(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
