pub mod errors;
pub mod types;

pub use errors::{ConfigError, GlintError};
pub use types::{Color, Size};

pub type Result<T> = std::result::Result<T, GlintError>;
