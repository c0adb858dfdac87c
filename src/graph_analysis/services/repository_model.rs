use crate::graph_analysis::domain::{DependencyGraph, PackageName, RawRepository};
use crate::shared::error::VisualizerError;
use serde_json::Value;

/// Name of the entry field holding a package's dependency list
const DEPENDENCIES_FIELD: &str = "dependencies";

/// RepositoryModel service turning a decoded repository into a forward graph
///
/// The resulting graph is complete: every package that appears in some
/// dependency list is also a key, with an empty list if the repository
/// declares nothing for it.
pub struct RepositoryModel;

impl RepositoryModel {
    /// Normalizes a raw repository into a forward `DependencyGraph`
    ///
    /// Declared packages keep document order and are followed by
    /// undeclared leaves in the order they were first referenced.
    ///
    /// # Errors
    /// Returns `VisualizerError::SchemaError` naming the offending package if:
    /// - A package entry is neither a mapping nor null
    /// - A `dependencies` field is present but not a list
    /// - A dependency list contains something other than a string
    /// - A package or dependency name is empty
    pub fn normalize(raw: RawRepository) -> Result<DependencyGraph, VisualizerError> {
        let mut graph = DependencyGraph::new();

        for (package, entry) in raw.into_entries() {
            if package.is_empty() {
                return Err(schema_error(&package, "package name must not be empty"));
            }
            let dependencies = Self::dependency_list(&package, entry)?;
            graph.insert(PackageName::new(package), dependencies);
        }

        let referenced: Vec<PackageName> = graph
            .packages()
            .flat_map(|(_, dependencies)| dependencies.iter().cloned())
            .collect();
        for dependency in &referenced {
            graph.ensure_package(dependency);
        }

        Ok(graph)
    }

    /// Extracts the dependency list of one entry, preserving its order
    fn dependency_list(package: &str, entry: Value) -> Result<Vec<PackageName>, VisualizerError> {
        let field = match entry {
            Value::Null => return Ok(Vec::new()),
            Value::Object(mut fields) => fields.remove(DEPENDENCIES_FIELD),
            other => {
                return Err(schema_error(
                    package,
                    &format!("expected a mapping, found {}", describe(&other)),
                ))
            }
        };

        let items = match field {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(schema_error(
                    package,
                    &format!(
                        "'{}' must be a list, found {}",
                        DEPENDENCIES_FIELD,
                        describe(&other)
                    ),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(name) if name.is_empty() => Err(schema_error(
                    package,
                    &format!("{}[{}] must not be empty", DEPENDENCIES_FIELD, index),
                )),
                Value::String(name) => Ok(PackageName::new(name)),
                other => Err(schema_error(
                    package,
                    &format!(
                        "{}[{}] must be a package name, found {}",
                        DEPENDENCIES_FIELD,
                        index,
                        describe(&other)
                    ),
                )),
            })
            .collect()
    }
}

fn schema_error(package: &str, details: &str) -> VisualizerError {
    VisualizerError::SchemaError {
        package: package.to_string(),
        details: details.to_string(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
