//! Adapter IR shared by the text emitter and the runtime interpreter.
//!
//! One `AdapterIr` is built per accepted `PrimitiveMapping`. The converter
//! synthesizer renders it to source text and `runtime::Adapter` executes it,
//! so both read the same marshal row, names and null handling.

use super::marshal::{NullHandling, ReadAccessor, TokenKind, WriteAccessor, rule_for};
use crate::config::GeneratorOptions;
use primjson_types::{
    Accessibility, AdapterBinding, DeclarationKind, Namespace, PrimitiveKind, PrimitiveMapping,
    TypeIdentity,
};
use serde_derive::{Deserialize, Serialize};

/// Schema version written into every serialized adapter IR.
pub const ADAPTER_IR_VERSION: u32 = 1;

/// Where the adapter's declaration comes from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "origin", rename_all = "kebab-case")]
pub enum AdapterOrigin {
    /// Derived name, emitted as a public partial class.
    Generated,
    /// User-declared partial class, completed with the user's modifiers.
    Explicit {
        accessibility: Accessibility,
        kind: DeclarationKind,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct AdapterIr {
    pub version: u32,
    pub adapter_name: String,
    pub adapter_namespace: Namespace,
    pub origin: AdapterOrigin,
    pub wrapper: TypeIdentity,
    pub primitive: PrimitiveKind,
    pub token_kinds: Vec<TokenKind>,
    pub read: ReadAccessor,
    pub write: WriteAccessor,
    pub null_handling: NullHandling,
}

impl AdapterIr {
    pub fn from_mapping(mapping: &PrimitiveMapping, options: &GeneratorOptions) -> Self {
        let rule = rule_for(mapping.primitive);
        let (adapter_name, adapter_namespace, origin) = match &mapping.binding {
            AdapterBinding::Absent => (
                format!("{}{}", mapping.wrapper.name, options.adapter_suffix),
                mapping.wrapper.namespace.clone(),
                AdapterOrigin::Generated,
            ),
            AdapterBinding::Explicit { adapter } => (
                adapter.name.clone(),
                adapter.namespace.clone(),
                AdapterOrigin::Explicit {
                    accessibility: adapter.accessibility,
                    kind: adapter.kind,
                },
            ),
        };

        Self {
            version: ADAPTER_IR_VERSION,
            adapter_name,
            adapter_namespace,
            origin,
            wrapper: mapping.wrapper.clone(),
            primitive: mapping.primitive,
            token_kinds: rule.token_kinds.to_vec(),
            read: rule.read,
            write: rule.write,
            null_handling: rule.null_handling,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.origin, AdapterOrigin::Generated)
    }

    pub fn adapter_qualified_name(&self) -> String {
        self.adapter_namespace.qualify(&self.adapter_name)
    }

    pub fn adapter_dotted_name(&self) -> String {
        self.adapter_namespace.dotted(&self.adapter_name)
    }

    pub fn wrapper_qualified_name(&self) -> String {
        self.wrapper.qualified_name()
    }

    /// Stable per-wrapper source name, e.g. `Sample.DiceRollPrimitiveJsonConverter.g.cs`.
    pub fn logical_name(&self, options: &GeneratorOptions) -> String {
        format!("{}{}", self.adapter_dotted_name(), options.file_suffix)
    }

    /* `<modifiers> partial <kind> <Name>` without the base type */
    pub fn declaration_head(&self) -> String {
        match &self.origin {
            AdapterOrigin::Generated => format!("public partial class {}", self.adapter_name),
            AdapterOrigin::Explicit { accessibility, kind } => format!(
                "{} partial {} {}",
                accessibility.keyword(),
                kind.keyword(),
                self.adapter_name
            ),
        }
    }

    pub fn accepts(&self, kind: TokenKind) -> bool {
        self.token_kinds.contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primjson_types::SourceLocation;

    fn identity(name: &str, namespace: Namespace, accessibility: Accessibility) -> TypeIdentity {
        TypeIdentity {
            name: name.to_string(),
            kind: DeclarationKind::Class,
            namespace,
            accessibility,
            is_partial: true,
            location: SourceLocation::new("Sample.cs", 1, 1),
        }
    }

    #[test]
    fn generated_adapter_lives_beside_wrapper() {
        let mapping = PrimitiveMapping {
            primitive: PrimitiveKind::Int32,
            wrapper: identity("DiceRoll", Namespace::Local("Sample".into()), Accessibility::Public),
            binding: AdapterBinding::Absent,
        };
        let ir = AdapterIr::from_mapping(&mapping, &GeneratorOptions::default());
        assert!(ir.is_generated());
        assert_eq!(ir.adapter_qualified_name(), "global::Sample.DiceRollPrimitiveJsonConverter");
        assert_eq!(
            ir.logical_name(&GeneratorOptions::default()),
            "Sample.DiceRollPrimitiveJsonConverter.g.cs"
        );
        assert_eq!(ir.declaration_head(), "public partial class DiceRollPrimitiveJsonConverter");
        assert_eq!(ir.token_kinds, [TokenKind::Number]);
    }

    #[test]
    fn explicit_adapter_keeps_its_own_namespace_and_modifiers() {
        let adapter = identity("NameConverter", Namespace::Local("Sample.Json".into()), Accessibility::Internal);
        let mapping = PrimitiveMapping {
            primitive: PrimitiveKind::String,
            wrapper: identity("EnvironmentName", Namespace::Local("Sample".into()), Accessibility::Public),
            binding: AdapterBinding::Explicit { adapter },
        };
        let ir = AdapterIr::from_mapping(&mapping, &GeneratorOptions::default());
        assert_eq!(ir.adapter_namespace, Namespace::Local("Sample.Json".into()));
        assert_eq!(ir.declaration_head(), "internal partial class NameConverter");
        assert_eq!(ir.wrapper_qualified_name(), "global::Sample.EnvironmentName");
        assert_eq!(ir.null_handling, NullHandling::Reference);
    }

    #[test]
    fn ir_serializes_to_json() {
        let mapping = PrimitiveMapping {
            primitive: PrimitiveKind::Boolean,
            wrapper: identity("Flag", Namespace::Global, Accessibility::Public),
            binding: AdapterBinding::Absent,
        };
        let ir = AdapterIr::from_mapping(&mapping, &GeneratorOptions::default());
        let json = serde_json::to_value(&ir).expect("serialize");
        assert_eq!(json["version"], ADAPTER_IR_VERSION);
        assert_eq!(json["origin"]["origin"], "generated");
        assert_eq!(json["token-kinds"], serde_json::json!(["True", "False"]));

        let back: AdapterIr = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, ir);
    }
}
