//! Streamly Admin Library
//!
//! State, rendering, and export logic for the Streamly terminal admin panel.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
