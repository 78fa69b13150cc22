//! wr-params: parameters and the references node constraints make to them.
//!
//! A node constraint is a [`ConstraintField`]: a literal, the name of an entry
//! in the shared [`ParameterTable`], or an inline [`ParameterDef`]. The
//! [`resolve`] function turns a field into the [`wr_network::ConstraintValue`]
//! a model builder accepts, materializing inline definitions under a derived
//! name. The table only ever grows.

pub mod definition;
pub mod error;
pub mod field;
pub mod resolve;
pub mod table;

pub use definition::{AggFunc, ParameterDef};
pub use error::{ParameterError, ParameterResult};
pub use field::ConstraintField;
pub use resolve::{materialize, prepare, resolve};
pub use table::{ParameterEntry, ParameterTable};
