use std::path::PathBuf;
use std::sync::Arc;

use parolla_core::{FetchConfig, Result};

use crate::logging::Logger;
use crate::output::{ensure_dir, output_path, write_pretty};
use crate::source::PayloadSource;

/// Fetch, extract, write, repeat. One iteration at a time, stopping at the
/// first error.
pub struct BatchFetcher {
    config: FetchConfig,
    source: Arc<dyn PayloadSource>,
    logger: Logger,
}

impl BatchFetcher {
    pub fn new(config: FetchConfig, source: Arc<dyn PayloadSource>) -> Self {
        Self {
            config,
            source,
            logger: Logger::new().with_prefix("[parolla]"),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub async fn run(&self) -> Result<()> {
        self.config.validate()?;
        ensure_dir(&self.config.output_dir).await?;
        self.logger.info(&format!(
            "Fetching {} payloads from {} into {}",
            self.config.count,
            self.config.url,
            self.config.output_dir.display()
        ));

        for index in 1..=self.config.count {
            match self.fetch_one(index).await {
                Ok(path) => println!("{} saved.", path.display()),
                Err(e) => {
                    self.logger.error(&format!("Aborting at iteration {}: {}", index, e));
                    return Err(e);
                }
            }
        }

        self.logger.debug("Batch complete");
        Ok(())
    }

    /// Runs iteration `index` and returns the path it wrote.
    pub async fn fetch_one(&self, index: u32) -> Result<PathBuf> {
        let payload = self.source.fetch(&self.config.url).await?;
        let value = self.config.field.extract(&payload)?;

        let path = output_path(&self.config.output_dir, &self.config.file_prefix, index);
        write_pretty(&path, &value).await?;
        Ok(path)
    }
}
