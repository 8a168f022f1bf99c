use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};

/// One canonical member of a generated enum
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumMember {
    /// Upper-snake-case identifier, unique within its enum
    pub name: String,
    /// Runtime value of the member (string or integer)
    pub value: Scalar,
    /// Human-readable display text
    pub label: String,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Constants and enums extracted from a single model
///
/// Both collections keep the declaration order of the source model and hold
/// unique keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTypes {
    pub model_name: String,
    pub constants: Vec<(String, Scalar)>,
    pub enums: Vec<(String, Vec<EnumMember>)>,
}

impl ModelTypes {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert_constant(name.into(), value.into());
        self
    }

    pub fn with_enum(mut self, name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        self.insert_enum(name.into(), members);
        self
    }

    pub fn has_content(&self) -> bool {
        !self.constants.is_empty() || !self.enums.is_empty()
    }

    pub fn constant(&self, name: &str) -> Option<&Scalar> {
        self.constants
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn enum_members(&self, name: &str) -> Option<&[EnumMember]> {
        self.enums
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, members)| members.as_slice())
    }

    /// Insert or replace a constant; a replaced key keeps its original position
    pub fn insert_constant(&mut self, name: String, value: Scalar) {
        match self.constants.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.constants.push((name, value)),
        }
    }

    /// Insert or replace an enum; a replaced key keeps its original position
    pub fn insert_enum(&mut self, name: String, members: Vec<EnumMember>) {
        match self.enums.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = members,
            None => self.enums.push((name, members)),
        }
    }
}
