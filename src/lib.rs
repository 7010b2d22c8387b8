pub mod client;
pub mod config;
pub mod dataset;
pub mod error;
pub mod present;
pub mod session;

pub use config::Config;
pub use error::{HarnessError, Result};
