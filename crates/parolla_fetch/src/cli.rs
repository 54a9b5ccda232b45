use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use parolla_core::config::{
    DEFAULT_COUNT, DEFAULT_FIELD, DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR, DEFAULT_URL,
};
use parolla_core::{FetchConfig, FieldPath, Result};

use crate::fetcher::BatchFetcher;
use crate::logging::Logger;
use crate::source::HttpSource;

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Endpoint queried on every iteration
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Directory the numbered files are written to (created if missing)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of requests to make
    #[arg(long, short = 'n', default_value_t = DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Dotted path of the field to keep from each response
    #[arg(long, default_value = DEFAULT_FIELD)]
    pub field: FieldPath,

    /// File name prefix, files are named `<prefix><index>.json`
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    pub prefix: String,
}

impl FetchArgs {
    pub fn into_config(self) -> Result<FetchConfig> {
        let config = FetchConfig::new(&self.url, self.output_dir, self.count)?
            .with_field(self.field)
            .with_file_prefix(self.prefix);
        config.validate()?;
        Ok(config)
    }
}

pub async fn handle_command(args: FetchArgs, logger: Logger) -> Result<()> {
    let config = args.into_config()?;
    BatchFetcher::new(config, Arc::new(HttpSource::new()))
        .with_logger(logger.with_prefix("[parolla]"))
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        fetch: FetchArgs,
    }

    fn parse(args: &[&str]) -> std::result::Result<FetchArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("parolla").chain(args.iter().copied()))
            .map(|cli| cli.fetch)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap().into_config().unwrap();
        assert_eq!(config.url.as_str(), DEFAULT_URL);
        assert_eq!(config.output_dir, PathBuf::from("public/data"));
        assert_eq!(config.count, 1000);
        assert_eq!(config.field.to_string(), "data.questions");
        assert_eq!(config.file_prefix, "questions");
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "--url",
            "http://localhost:8080/q",
            "-o",
            "/tmp/out",
            "-n",
            "3",
            "--field",
            "payload.items",
            "--prefix",
            "items",
        ])
        .unwrap()
        .into_config()
        .unwrap();
        assert_eq!(config.url.as_str(), "http://localhost:8080/q");
        assert_eq!(config.count, 3);
        assert_eq!(config.field.segments(), ["payload", "items"]);
        assert_eq!(config.file_prefix, "items");
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(parse(&["--count", "0"]).is_err());
    }

    #[test]
    fn test_bad_field_rejected() {
        assert!(parse(&["--field", "data..questions"]).is_err());
    }

    #[test]
    fn test_prefix_checked_after_overrides() {
        let args = parse(&["--prefix", "nested/questions"]).unwrap();
        assert!(matches!(args.into_config(), Err(parolla_core::Error::Config(_))));
    }

    #[test]
    fn test_bad_url_rejected() {
        let args = parse(&["--url", "not a url"]).unwrap();
        assert!(args.into_config().is_err());
    }
}
