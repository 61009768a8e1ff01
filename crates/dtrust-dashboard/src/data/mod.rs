//! Dashboard records and the sources they are loaded from.

pub mod fixtures;
pub mod source;
pub mod types;
pub mod validate;

pub use source::*;
pub use types::*;
