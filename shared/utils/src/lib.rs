pub mod config;
pub mod error;
pub mod logging;
pub mod sanitize;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use sanitize::*;
