/* Converter synthesis: one JsonConverter<Wrapper> per accepted mapping */

use super::ir::AdapterIr;
use super::text::SourceBuilder;
use crate::config::GeneratorOptions;
use primjson_types::PrimitiveMapping;

const CONVERTER_BASE: &str = "global::System.Text.Json.Serialization.JsonConverter";

/// Adapter source plus the names the pipeline and runtime need from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAdapter {
    pub adapter_name: String,
    pub logical_name: String,
    pub text: String,
    pub ir: AdapterIr,
}

pub struct ConverterSynthesizer<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> ConverterSynthesizer<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn synthesize(&self, mapping: &PrimitiveMapping) -> SynthesizedAdapter {
        let ir = AdapterIr::from_mapping(mapping, self.options);
        SynthesizedAdapter {
            adapter_name: ir.adapter_name.clone(),
            logical_name: ir.logical_name(self.options),
            text: self.render(&ir),
            ir,
        }
    }

    pub fn render(&self, ir: &AdapterIr) -> String {
        let wrapper = ir.wrapper_qualified_name();
        let primitive = ir.primitive.qualified_name();

        let mut source = SourceBuilder::new(&self.options.indent);
        source
            .auto_generated_comment()
            .pragma_disable()
            .line("using System.Text.Json;")
            .line("#nullable enable")
            .enter_namespace(&ir.adapter_namespace)
            .generated_code_attribute(&self.options.generator_name, &self.options.generator_version)
            .enter_block(format!("{} : {}<{}>", ir.declaration_head(), CONVERTER_BASE, wrapper));

        source
            .enter_block("public override global::System.Boolean CanConvert(global::System.Type typeToConvert)")
            .line(format!("return typeToConvert == typeof({});", wrapper))
            .leave();

        let token_test = ir
            .token_kinds
            .iter()
            .map(|kind| format!("reader.TokenType == JsonTokenType.{}", kind))
            .collect::<Vec<_>>()
            .join(" || ");
        source
            .enter_block(format!(
                "public override {}? Read(ref Utf8JsonReader reader, global::System.Type typeToConvert, JsonSerializerOptions options)",
                wrapper
            ))
            .enter_block(format!("if ({})", token_test))
            .line(format!("return ({}?) reader.{}();", wrapper, ir.read.name()))
            .leave()
            .blank()
            .line("return null;")
            .leave();

        source
            .enter_block(format!(
                "public override void Write(Utf8JsonWriter writer, {} value, JsonSerializerOptions options)",
                wrapper
            ))
            .line(format!("{}? temp = ({}?)value;", primitive, primitive))
            .enter_block(format!("if (temp{})", ir.null_handling.presence_test()))
            .line(format!("writer.{}(temp{});", ir.write.name(), ir.null_handling.unwrap_suffix()))
            .leave()
            .enter_block("else")
            .line("writer.WriteNullValue();")
            .leave()
            .leave();

        /* class body, then namespace */
        source.leave().leave();

        source.line("#nullable disable").pragma_restore();
        source.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primjson_types::{
        Accessibility, AdapterBinding, DeclarationKind, Namespace, PrimitiveKind, SourceLocation, TypeIdentity,
    };

    fn mapping(primitive: PrimitiveKind, namespace: Namespace) -> PrimitiveMapping {
        PrimitiveMapping {
            primitive,
            wrapper: TypeIdentity {
                name: "Wrapped".to_string(),
                kind: DeclarationKind::Record,
                namespace,
                accessibility: Accessibility::Public,
                is_partial: true,
                location: SourceLocation::new("Wrapped.cs", 1, 1),
            },
            binding: AdapterBinding::Absent,
        }
    }

    #[test]
    fn boolean_read_accepts_both_literals() {
        let options = GeneratorOptions::default();
        let adapter = ConverterSynthesizer::new(&options).synthesize(&mapping(PrimitiveKind::Boolean, Namespace::Global));
        assert!(adapter.text.contains(
            "\t\tif (reader.TokenType == JsonTokenType.True || reader.TokenType == JsonTokenType.False)\n"
        ));
        assert!(adapter.text.contains("\t\t\twriter.WriteBooleanValue(temp.Value);\n"));
    }

    #[test]
    fn value_primitives_use_has_value() {
        let options = GeneratorOptions::default();
        let adapter = ConverterSynthesizer::new(&options).synthesize(&mapping(PrimitiveKind::Guid, Namespace::Global));
        assert!(adapter.text.contains("global::System.Guid? temp = (global::System.Guid?)value;"));
        assert!(adapter.text.contains("if (temp.HasValue)"));
        assert!(adapter.text.contains("return (global::Wrapped?) reader.GetGuid();"));
    }

    #[test]
    fn namespaced_output_is_balanced() {
        let options = GeneratorOptions::default();
        let adapter =
            ConverterSynthesizer::new(&options).synthesize(&mapping(PrimitiveKind::Int64, Namespace::Local("A.B".into())));
        assert_eq!(adapter.logical_name, "A.B.WrappedPrimitiveJsonConverter.g.cs");
        assert!(adapter.text.contains("namespace A.B\n{\n\t[global::System.CodeDom"));
        assert_eq!(adapter.text.matches('{').count(), adapter.text.matches('}').count());
        assert!(adapter.text.ends_with("}\n#nullable disable\n// Disable CS1591 - Missing XML comment on public member\n#pragma warning restore 1591\n// Disable CS8604 - Possible null reference argument for parameter.\n#pragma warning restore 8604\n"));
    }

    #[test]
    fn honours_indent_and_version_options() {
        let options = GeneratorOptions {
            indent: "    ".to_string(),
            ..GeneratorOptions::default()
        }
        .with_version("9.9.9");
        let adapter = ConverterSynthesizer::new(&options).synthesize(&mapping(PrimitiveKind::Int32, Namespace::Global));
        assert!(adapter.text.contains("GeneratedCodeAttribute(\"PrimitiveJsonConverter.Generator\", \"9.9.9\")"));
        assert!(adapter.text.contains("\n    public override global::System.Boolean CanConvert"));
        assert!(!adapter.text.contains('\t'));
    }
}
