pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{Entity, Relation};
