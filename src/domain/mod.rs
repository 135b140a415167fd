pub mod collection;
pub mod errors;
pub mod forms;
pub mod models;
pub mod notifications;
pub mod seed;
pub mod stats;

pub use collection::*;
pub use errors::*;
pub use forms::*;
pub use models::*;
pub use notifications::*;
