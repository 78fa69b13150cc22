//! Network definition documents.
//!
//! A document names the network, lists shared parameters and declares its
//! nodes. It is stored as YAML or JSON:
//!
//! ```yaml
//! version: 1
//! name: two-node
//! parameters:
//!   - name: cost_curve_A
//!     type: Constant
//!     value: -10.0
//! nodes:
//!   - type: Input
//!     name: reservoir1
//!     max_flow: { type: Constant, value: 15.0 }
//!   - type: Output
//!     name: demand1
//!     cost: cost_curve_A
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use wr_network::ModelBuilder;
use wr_params::{ParameterDef, ParameterTable, prepare};

use crate::configure::{ConfigureSummary, configure};
use crate::error::SchemaResult;
use crate::nodes::NodeDeclaration;
use crate::validate::validate_document;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<NamedParameter>,
    #[serde(default)]
    pub nodes: Vec<NodeDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParameter {
    pub name: String,
    #[serde(flatten)]
    pub definition: ParameterDef,
}

impl NetworkDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            parameters: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Build the shared table from the document's named parameters.
    ///
    /// Data files are anchored at `path`, and every cross-reference between
    /// parameters must name another entry of the document.
    pub fn parameter_table(&self, path: &Path) -> SchemaResult<ParameterTable> {
        let mut table = ParameterTable::new();
        for parameter in &self.parameters {
            let definition = prepare(&parameter.definition, &parameter.name, path)?;
            table.insert(parameter.name.as_str(), definition)?;
        }
        table.check_references()?;
        Ok(table)
    }

    /// Build the parameter table and run the configuration pass against `builder`.
    pub fn configure(
        &self,
        builder: &mut dyn ModelBuilder,
        path: &Path,
    ) -> SchemaResult<(ParameterTable, ConfigureSummary)> {
        validate_document(self)?;
        let mut table = self.parameter_table(path)?;
        let summary = configure(&self.nodes, builder, path, &mut table)?;
        Ok((table, summary))
    }
}

/// Directory relative data files are resolved against for a document at `path`.
pub fn document_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

pub fn load_yaml(path: &Path) -> SchemaResult<NetworkDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: NetworkDocument = serde_yaml::from_str(&content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_yaml(path: &Path, document: &NetworkDocument) -> SchemaResult<()> {
    validate_document(document)?;
    let content = serde_yaml::to_string(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> SchemaResult<NetworkDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: NetworkDocument = serde_json::from_str(&content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_json(path: &Path, document: &NetworkDocument) -> SchemaResult<()> {
    validate_document(document)?;
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(path, content)?;
    Ok(())
}
