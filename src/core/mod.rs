

pub mod config;
pub mod error;

pub use self::config::{MatchWeights, MatchingConfig};
pub use self::error::{MatchError, Result};
