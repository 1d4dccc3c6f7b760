//! Application-level error with context, an optional source and an optional
//! caller location.

pub mod location;
mod error;
mod context;

pub use location::Location;
pub use error::Error;
pub use context::Context;

pub type Result<T> = core::result::Result<T, Error>;
