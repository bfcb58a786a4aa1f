/* Host-owned lookup from wrapper type to adapter */

use super::interpreter::Adapter;
use crate::codegen::AdapterIr;
use crate::errors::{RuntimeError, RuntimeResult};
use crate::pipeline::GenerationOutput;
use indexmap::IndexMap;
use tracing::debug;

/// Append-only map keyed by the wrapper's `global::`-qualified name.
///
/// Populated once from a run's adapter list; nothing is ever replaced or
/// removed.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    adapters: IndexMap<String, Adapter>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_output(output: &GenerationOutput) -> RuntimeResult<Self> {
        let mut registry = Self::new();
        for ir in &output.adapters {
            registry.register(ir.clone())?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, ir: AdapterIr) -> RuntimeResult<&Adapter> {
        let adapter = Adapter::new(ir);
        let key = adapter.wrapper_type();
        if self.adapters.contains_key(&key) {
            return Err(RuntimeError::DuplicateAdapter { type_name: key });
        }
        debug!(wrapper = %key, adapter = %adapter.name(), "registered adapter");
        let (index, _) = self.adapters.insert_full(key, adapter);
        Ok(&self.adapters[index])
    }

    /// Look up by `global::`-qualified or dotted wrapper name.
    pub fn get(&self, type_name: &str) -> RuntimeResult<&Adapter> {
        self.adapters
            .get(type_name)
            .or_else(|| self.adapters.values().find(|adapter| adapter.can_convert(type_name)))
            .ok_or_else(|| RuntimeError::UnknownAdapter {
                type_name: type_name.to_string(),
            })
    }

    pub fn can_convert(&self, type_name: &str) -> bool {
        self.get(type_name).is_ok()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adapter> {
        self.adapters.values()
    }
}
