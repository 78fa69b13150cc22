//! wr-network: the model-builder side of network configuration.
//!
//! Provides:
//! - The `ModelBuilder` trait: the capability surface node declarations talk to
//! - `ConstraintValue` and `ConstraintRole`, the vocabulary of constraint calls
//! - `Network`, an in-memory builder that records nodes and every mutating call
//!
//! # Example
//!
//! ```
//! use wr_network::{ConstraintRole, ConstraintValue, ModelBuilder, Network};
//!
//! let mut network = Network::new();
//! network.add_input_node("reservoir1", None).unwrap();
//! network
//!     .set_node_constraint(
//!         "reservoir1",
//!         None,
//!         ConstraintRole::MaxFlow,
//!         ConstraintValue::Literal(15.0),
//!     )
//!     .unwrap();
//!
//! assert_eq!(network.nodes().len(), 1);
//! assert_eq!(network.calls().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod network;

pub use builder::{ConstraintRole, ConstraintValue, ModelBuilder, NodeKind};
pub use error::{NetworkError, NetworkResult};
pub use network::{BuilderCall, Network, NodeRecord};
