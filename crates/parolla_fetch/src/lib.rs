pub mod cli;
pub mod fetcher;
pub mod logging;
pub mod output;
pub mod source;

pub use cli::{handle_command, FetchArgs};
pub use fetcher::BatchFetcher;
pub use source::{HttpSource, PayloadSource};

pub mod prelude {
    pub use super::source::PayloadSource;
    pub use parolla_core::{Error, FetchConfig, FieldPath, Result};
}
