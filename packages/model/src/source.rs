use crate::error::{ManifestError, ManifestResult};
use crate::scalar::AttrValue;
use serde::Deserialize;
use std::path::Path;

/// Capability a model must expose to be scanned for constants and choices
///
/// Reflection over a backend class happens at the boundary; the extractor only
/// sees the model's declared name and its attributes in declaration order.
pub trait HasNamedFields {
    /// Declared object name from the model's metadata
    fn object_name(&self) -> &str;

    /// Class-level attributes in declaration order
    fn named_fields(&self) -> Vec<(&str, &AttrValue)>;
}

/// A model described as data, e.g. loaded from a manifest file
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefinition {
    pub object_name: String,
    pub attributes: Vec<(String, AttrValue)>,
}

impl ModelDefinition {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            attributes: vec![],
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

impl HasNamedFields for ModelDefinition {
    fn object_name(&self) -> &str {
        &self.object_name
    }

    fn named_fields(&self) -> Vec<(&str, &AttrValue)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModel {
    object_name: String,
    #[serde(default)]
    attributes: serde_json::Map<String, serde_json::Value>,
}

impl From<RawModel> for ModelDefinition {
    fn from(raw: RawModel) -> Self {
        Self {
            object_name: raw.object_name,
            attributes: raw
                .attributes
                .into_iter()
                .map(|(name, value)| (name, AttrValue::from(value)))
                .collect(),
        }
    }
}

/// Parse manifest JSON: an array of `{ "objectName", "attributes" }` objects
///
/// Attribute order in the document is preserved.
pub fn parse_manifest(source: &str) -> Result<Vec<ModelDefinition>, serde_json::Error> {
    let raw: Vec<RawModel> = serde_json::from_str(source)?;
    Ok(raw.into_iter().map(ModelDefinition::from).collect())
}

/// Read and parse a manifest file
pub fn load_manifest(path: &Path) -> ManifestResult<Vec<ModelDefinition>> {
    let source = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(&source).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
