//! Infrastructure layer providing external service integrations.
//!
//! This module contains configuration loading, log setup, and the one-way
//! exports of users and plans to files.

pub mod config;
pub mod errors;
pub mod export;
pub mod logging;

pub use config::*;
pub use errors::*;
pub use export::*;
pub use logging::*;
