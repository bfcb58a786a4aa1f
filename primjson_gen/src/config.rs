/* Generator options */

use crate::errors::{GenError, GenResult};
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GENERATOR_NAME: &str = "PrimitiveJsonConverter.Generator";
pub const DEFAULT_ADAPTER_SUFFIX: &str = "PrimitiveJsonConverter";
pub const DEFAULT_FILE_SUFFIX: &str = ".g.cs";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorOptions {
    /* Tool name and version stamped into GeneratedCodeAttribute */
    pub generator_name: String,
    pub generator_version: String,
    /* One indentation level in generated text */
    pub indent: String,
    /* Derived adapter name is `<Wrapper><adapter_suffix>` */
    pub adapter_suffix: String,
    /* Appended to every logical source name */
    pub file_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            indent: "\t".to_string(),
            adapter_suffix: DEFAULT_ADAPTER_SUFFIX.to_string(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
        }
    }
}

impl GeneratorOptions {
    /* Load options from a YAML file; omitted keys keep their defaults */
    pub fn load(path: &Path) -> GenResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options: Self = serde_yml::from_str(&content).map_err(|source| GenError::Options {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values that would make adapter names or logical names collide.
    ///
    /// An empty adapter suffix names the adapter after its wrapper, and an
    /// empty file suffix makes the converter and companion sources share a
    /// name with the declarations they extend.
    pub fn validate(&self) -> GenResult<()> {
        if self.adapter_suffix.is_empty() {
            return Err(GenError::InvalidOption {
                option: "adapter-suffix",
                reason: "must not be empty",
            });
        }
        if !self.adapter_suffix.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(GenError::InvalidOption {
                option: "adapter-suffix",
                reason: "must contain only identifier characters",
            });
        }
        if self.file_suffix.is_empty() {
            return Err(GenError::InvalidOption {
                option: "file-suffix",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.generator_version = version.into();
        self
    }
}
