//! wr-schema: node declarations and how they configure a model builder.
//!
//! A network is declared as a list of [`NodeDeclaration`]s plus named
//! parameters. Configuration is two-phase: every node registers its
//! terminals with the [`wr_network::ModelBuilder`], then every node attaches
//! its constraints, resolving each field through [`wr_params::resolve`].

pub mod configure;
pub mod document;
pub mod error;
pub mod nodes;
pub mod validate;

pub use configure::{ConfigurationPass, ConfigureSummary, NodeState, configure};
pub use document::{
    LATEST_VERSION, NamedParameter, NetworkDocument, document_dir, load_json, load_yaml, save_json,
    save_yaml,
};
pub use error::{SchemaError, SchemaResult};
pub use nodes::{
    DelayNode, FlowConstraints, InputNode, LinkNode, NetworkNode, NodeAttribute, NodeDeclaration,
    OutputNode,
};
pub use validate::{ValidationError, validate_document};
