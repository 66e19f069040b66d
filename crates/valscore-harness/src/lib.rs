pub mod config;
pub mod error;
pub mod fixtures;
pub mod score;
pub mod weights;

pub use config::*;
pub use error::{HarnessError, Result};
pub use fixtures::*;
pub use score::*;
pub use weights::*;
