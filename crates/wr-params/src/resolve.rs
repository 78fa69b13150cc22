//! Turning constraint fields into values a model builder accepts.

use std::path::Path;
use std::{fs, io};
use tracing::debug;
use wr_core::ensure_finite;
use wr_network::{ConstraintValue, ModelBuilder};

use crate::definition::ParameterDef;
use crate::error::{ParameterError, ParameterResult};
use crate::field::ConstraintField;
use crate::table::ParameterTable;

/// Resolve `field` to the value the builder should be given.
///
/// - `Literal`: passed through inline when the builder accepts literals,
///   otherwise materialized as a `Constant` under `derived_name`.
/// - `Reference`: returned unchanged once it is found in `table`.
/// - `Inline`: materialized under `derived_name`.
///
/// The table is only touched when something is materialized, and is left as
/// it was whenever an error is returned.
pub fn resolve(
    field: &ConstraintField,
    derived_name: &str,
    builder: &dyn ModelBuilder,
    path: &Path,
    table: &mut ParameterTable,
) -> ParameterResult<ConstraintValue> {
    match field {
        ConstraintField::Literal(value) => {
            let value = ensure_finite(*value, "constraint literal").map_err(|source| {
                ParameterError::Invalid {
                    name: derived_name.to_string(),
                    source,
                }
            })?;
            if builder.accepts_inline_literals() {
                Ok(ConstraintValue::Literal(value))
            } else {
                materialize(&ParameterDef::Constant { value }, derived_name, path, table)
            }
        }
        ConstraintField::Reference(name) => {
            table.require(name)?;
            Ok(ConstraintValue::Parameter(name.clone()))
        }
        ConstraintField::Inline(definition) => materialize(definition, derived_name, path, table),
    }
}

/// Insert `definition` into `table` under `name` and return a reference to it.
pub fn materialize(
    definition: &ParameterDef,
    name: &str,
    path: &Path,
    table: &mut ParameterTable,
) -> ParameterResult<ConstraintValue> {
    if table.contains(name) {
        return Err(ParameterError::NameCollision {
            name: name.to_string(),
        });
    }
    let definition = prepare(definition, name, path)?;
    for reference in definition.references() {
        table.require(reference)?;
    }

    debug!(parameter = name, kind = definition.kind_name(), "materialized parameter");
    table.insert(name, definition)?;
    Ok(ConstraintValue::Parameter(name.to_string()))
}

/// Validate a definition and anchor any data file it names at `path`.
///
/// A relative timeseries `url` is joined onto `path`; the resulting file
/// must exist. Its contents are left for the engine to read. A path that
/// cannot be inspected at all is reported as unreadable, not missing.
pub fn prepare(definition: &ParameterDef, name: &str, path: &Path) -> ParameterResult<ParameterDef> {
    definition
        .validate()
        .map_err(|source| ParameterError::Invalid {
            name: name.to_string(),
            source,
        })?;

    match definition {
        ParameterDef::Timeseries { url, column } => {
            let resolved = path.join(url);
            match fs::metadata(&resolved) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => {
                    return Err(ParameterError::MissingDataFile {
                        name: name.to_string(),
                        path: resolved,
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(ParameterError::MissingDataFile {
                        name: name.to_string(),
                        path: resolved,
                    });
                }
                Err(e) => {
                    return Err(ParameterError::UnreadableDataFile {
                        name: name.to_string(),
                        path: resolved,
                        kind: e.kind(),
                    });
                }
            }
            Ok(ParameterDef::Timeseries {
                url: resolved,
                column: column.clone(),
            })
        }
        other => Ok(other.clone()),
    }
}
