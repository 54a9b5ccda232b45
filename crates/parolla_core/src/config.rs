use std::path::PathBuf;

use url::Url;

use crate::{Error, FieldPath, Result};

pub const DEFAULT_URL: &str = "https://api.radkod.com/parolla/api/v1/modes/unlimited";
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";
pub const DEFAULT_COUNT: u32 = 1000;
pub const DEFAULT_FIELD: &str = "data.questions";
pub const DEFAULT_FILE_PREFIX: &str = "questions";

/// Everything a batch run needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub url: Url,
    pub output_dir: PathBuf,
    pub count: u32,
    pub field: FieldPath,
    pub file_prefix: String,
}

impl FetchConfig {
    /// Parses `url` and fills the remaining fields with defaults. Call
    /// [`FetchConfig::validate`] once all overrides are applied.
    pub fn new(url: &str, output_dir: impl Into<PathBuf>, count: u32) -> Result<Self> {
        Ok(Self {
            url: parse_url(url)?,
            output_dir: output_dir.into(),
            count,
            field: FieldPath::parse(DEFAULT_FIELD)?,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        })
    }

    pub fn with_field(mut self, field: FieldPath) -> Self {
        self.field = field;
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::Config("count must be at least 1".to_string()));
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "file prefix must not contain path separators: {}",
                self.file_prefix
            )));
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("default URL is valid"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            count: DEFAULT_COUNT,
            field: FieldPath::parse(DEFAULT_FIELD).expect("default field path is valid"),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
}
