/* Companion declaration binding a wrapper to its generated adapter */

use super::ir::AdapterIr;
use super::text::SourceBuilder;
use crate::config::GeneratorOptions;
use primjson_types::TypeIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedCompanion {
    pub logical_name: String,
    pub text: String,
}

/// Emit an empty partial re-declaration of `wrapper` carrying the
/// `JsonConverter(typeof(...))` attribute that routes it through `adapter`.
///
/// Only meaningful for generated adapters; an explicit adapter is already
/// bound by the user.
pub fn synthesize_companion(
    wrapper: &TypeIdentity,
    adapter_qualified_name: &str,
    options: &GeneratorOptions,
) -> SynthesizedCompanion {
    let mut source = SourceBuilder::new(&options.indent);
    source
        .auto_generated_comment()
        .pragma_disable()
        .enter_namespace(&wrapper.namespace)
        .generated_code_attribute(&options.generator_name, &options.generator_version)
        .line(format!(
            "[global::System.Text.Json.Serialization.JsonConverter(typeof({}))]",
            adapter_qualified_name
        ))
        .empty_block(format!(
            "{} partial {} {}",
            wrapper.accessibility.keyword(),
            wrapper.kind.keyword(),
            wrapper.name
        ))
        .leave();
    source.pragma_restore();

    SynthesizedCompanion {
        logical_name: format!("{}{}", wrapper.dotted_name(), options.file_suffix),
        text: source.finish(),
    }
}

impl AdapterIr {
    /// Companion for this adapter's wrapper, or `None` for explicit adapters.
    pub fn companion(&self, options: &GeneratorOptions) -> Option<SynthesizedCompanion> {
        self.is_generated()
            .then(|| synthesize_companion(&self.wrapper, &self.adapter_qualified_name(), options))
    }
}
