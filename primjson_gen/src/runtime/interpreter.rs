/* Executes an AdapterIr with the same semantics the emitted converter has */

use super::accessors;
use super::token::{TokenReader, TokenWriter};
use super::value::WrapperValue;
use crate::codegen::AdapterIr;
use crate::errors::{RuntimeError, RuntimeResult};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    ir: AdapterIr,
}

impl Adapter {
    pub fn new(ir: AdapterIr) -> Self {
        Self { ir }
    }

    pub fn ir(&self) -> &AdapterIr {
        &self.ir
    }

    pub fn name(&self) -> &str {
        &self.ir.adapter_name
    }

    /// Wrapper type this adapter serves, `global::`-qualified.
    pub fn wrapper_type(&self) -> String {
        self.ir.wrapper_qualified_name()
    }

    pub fn can_convert(&self, type_name: &str) -> bool {
        type_name == self.ir.wrapper_qualified_name() || type_name == self.ir.wrapper.dotted_name()
    }

    /// Read one value. An accepted token kind is decoded and wrapped; any
    /// other value, structured ones included, is consumed and yields `None`.
    pub fn read(&self, reader: &mut TokenReader) -> RuntimeResult<Option<WrapperValue>> {
        let kind = reader.current().ok_or(RuntimeError::UnexpectedEnd)?.kind();
        if !self.ir.accepts(kind) {
            trace!(adapter = %self.ir.adapter_name, %kind, "token kind not accepted");
            reader.skip_value()?;
            return Ok(None);
        }

        let token = reader.advance()?;
        let value = accessors::read(self.ir.read, &token)?;
        Ok(Some(WrapperValue::new(self.wrapper_type(), value)))
    }

    /// Write exactly one token: the primitive via the write accessor, or null.
    pub fn write(&self, value: Option<&WrapperValue>, writer: &mut TokenWriter) -> RuntimeResult<()> {
        match value.and_then(|wrapper| wrapper.value.as_ref()) {
            Some(primitive) => writer.write(accessors::write(self.ir.write, primitive)?),
            None => writer.write_null(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorOptions;
    use crate::runtime::{JsonToken, PrimitiveValue};
    use primjson_types::{
        Accessibility, AdapterBinding, DeclarationKind, Namespace, PrimitiveKind, PrimitiveMapping, SourceLocation,
        TypeIdentity,
    };

    fn adapter(primitive: PrimitiveKind) -> Adapter {
        let mapping = PrimitiveMapping {
            primitive,
            wrapper: TypeIdentity {
                name: "Flag".to_string(),
                kind: DeclarationKind::Record,
                namespace: Namespace::Local("Sample".into()),
                accessibility: Accessibility::Public,
                is_partial: true,
                location: SourceLocation::new("Flag.cs", 1, 1),
            },
            binding: AdapterBinding::Absent,
        };
        Adapter::new(AdapterIr::from_mapping(&mapping, &GeneratorOptions::default()))
    }

    #[test]
    fn can_convert_accepts_both_spellings() {
        let adapter = adapter(PrimitiveKind::Boolean);
        assert!(adapter.can_convert("global::Sample.Flag"));
        assert!(adapter.can_convert("Sample.Flag"));
        assert!(!adapter.can_convert("Flag"));
    }

    #[test]
    fn boolean_reads_false_literal() {
        let mut reader = TokenReader::new(vec![JsonToken::False]);
        let value = adapter(PrimitiveKind::Boolean).read(&mut reader).expect("read");
        assert_eq!(value, Some(WrapperValue::new("global::Sample.Flag", PrimitiveValue::Boolean(false))));
        assert!(reader.is_at_end());
    }

    #[test]
    fn unexpected_structure_is_skipped_whole() {
        let mut reader = TokenReader::from_json_str(r#"[{"a":1},2]"#).expect("json");
        reader.advance().expect("outer array");
        let value = adapter(PrimitiveKind::Int32).read(&mut reader).expect("read");
        assert_eq!(value, None);
        assert_eq!(reader.current(), Some(&JsonToken::number(2)));
    }

    #[test]
    fn malformed_payload_of_accepted_kind_is_an_error() {
        let mut reader = TokenReader::new(vec![JsonToken::string("not-a-guid")]);
        let result = adapter(PrimitiveKind::Guid).read(&mut reader);
        assert!(matches!(result, Err(RuntimeError::Accessor { accessor: "GetGuid", .. })));
    }

    #[test]
    fn absent_wrapper_writes_null() {
        let mut writer = TokenWriter::new();
        adapter(PrimitiveKind::Int64).write(None, &mut writer).expect("write");
        assert_eq!(writer.tokens(), &[JsonToken::Null]);
    }
}
