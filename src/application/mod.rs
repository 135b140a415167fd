//! Application layer managing page state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! which page is shown, which dialog is open, and how user intents turn into
//! collection changes and notifications.

pub mod navigation;
pub mod state;

pub use navigation::*;
pub use state::*;
