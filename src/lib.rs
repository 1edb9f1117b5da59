pub mod boundary;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod source;
pub mod ui;
pub mod version;

pub use error::{Result, StampError};
