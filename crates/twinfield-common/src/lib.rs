pub mod errors;
pub mod id;

pub use errors::{ConfigError, TwinfieldError};
pub use id::{new_correlation_id, new_id, HandleId, SessionId};

pub type Result<T> = std::result::Result<T, TwinfieldError>;
