pub mod config;
pub mod error;
pub mod export;
pub mod frames;
pub mod gif;
pub mod pipeline;
pub mod sheet;
pub mod tools;

pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
