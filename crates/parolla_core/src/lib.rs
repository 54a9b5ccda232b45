pub mod config;
pub mod error;
pub mod path;

pub use config::FetchConfig;
pub use error::Error;
pub use path::FieldPath;

pub type Result<T> = std::result::Result<T, Error>;
