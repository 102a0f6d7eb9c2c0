//! Stateless filesystem fact queries: does a path exist, is a directory
//! empty. Each query is a pure read of the filesystem plus a JSON result
//! envelope for the controlling host.

pub mod cli;
pub mod error;
pub mod exists;
pub mod is_empty;
pub mod module;

pub use error::{Error, Result};
pub use exists::exists;
pub use is_empty::is_empty;
