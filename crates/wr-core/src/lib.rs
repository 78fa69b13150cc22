//! wr-core: shared foundation for the water-resource network crates.
//!
//! Contains:
//! - ids (compact ids for builder nodes and table parameters, terminal sub-indices)
//! - numeric (finite-value checks for constraint literals)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{WrError, WrResult};
pub use ids::*;
pub use numeric::*;
