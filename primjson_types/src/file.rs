/* On-disk declaration format consumed in place of the host's attribute discovery */

use crate::types::{Accessibility, DeclarationKind};
use serde_derive::{Deserialize, Serialize};

/// One YAML declaration file, standing in for a single compilation unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct DeclarationFile {
    /// Namespace for every type in the file unless a type overrides it.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub types: Vec<DeclaredType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DeclaredType {
    pub name: String,
    #[serde(default)]
    pub kind: DeclarationKind,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub partial: bool,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    /// Marks the type as a wrapper requesting a generated adapter.
    #[serde(default)]
    pub json_primitive: bool,
    /// Marks the type as the dedicated adapter for the named wrapper.
    #[serde(default)]
    pub converter_for: Option<String>,
    #[serde(default)]
    pub conversions: Vec<DeclaredConversion>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DeclaredConversion {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub explicit: bool,
}

impl DeclarationFile {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(content)
    }
}
