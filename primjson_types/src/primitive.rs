/* Supported primitive kinds and type-name normalization */

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Closed allow-list of primitives a value object may wrap.
///
/// Variant names are the metadata names the host reports for the
/// corresponding `System` types.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    Decimal,
    String,
    Guid,
    Boolean,
    Byte,
    DateTime,
    DateTimeOffset,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 15] = [
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::UInt16,
        PrimitiveKind::UInt32,
        PrimitiveKind::UInt64,
        PrimitiveKind::Single,
        PrimitiveKind::Double,
        PrimitiveKind::Decimal,
        PrimitiveKind::String,
        PrimitiveKind::Guid,
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::DateTime,
        PrimitiveKind::DateTimeOffset,
    ];

    pub fn metadata_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::UInt64 => "UInt64",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Decimal => "Decimal",
            PrimitiveKind::String => "String",
            PrimitiveKind::Guid => "Guid",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::DateTime => "DateTime",
            PrimitiveKind::DateTimeOffset => "DateTimeOffset",
        }
    }

    pub fn from_metadata_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.metadata_name() == name)
    }

    /// Fully-qualified spelling used in generated code, e.g. `global::System.Int32`.
    pub fn qualified_name(&self) -> String {
        format!("global::System.{}", self.metadata_name())
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.metadata_name())
    }
}

/* C# keyword aliases for the built-in types */
const KEYWORD_ALIASES: &[(&str, &str)] = &[
    ("short", "Int16"),
    ("int", "Int32"),
    ("long", "Int64"),
    ("ushort", "UInt16"),
    ("uint", "UInt32"),
    ("ulong", "UInt64"),
    ("float", "Single"),
    ("double", "Double"),
    ("decimal", "Decimal"),
    ("string", "String"),
    ("bool", "Boolean"),
    ("byte", "Byte"),
];

/* Metadata name of a nullable value type; never in the allow-list */
const NULLABLE_METADATA_NAME: &str = "Nullable";

/// Reduce a type spelling to the simple metadata name the host would report.
///
/// `global::System.Int32` and `int` become `Int32`; `Sample.DiceRoll` becomes
/// `DiceRoll`. A `?` on a reference type is only an annotation and is
/// dropped, but `int?` and `Nullable<int>` are `Nullable<Int32>` to the host
/// and report as `Nullable`.
pub fn normalize_type_name(raw: &str) -> String {
    let name = raw.trim();
    if let Some(inner) = name.strip_suffix('?') {
        let inner = normalize_type_name(inner);
        return match PrimitiveKind::from_metadata_name(&inner) {
            Some(kind) if kind != PrimitiveKind::String => NULLABLE_METADATA_NAME.to_string(),
            _ => inner,
        };
    }

    let name = name.strip_prefix("global::").unwrap_or(name);
    for prefix in ["System.Nullable<", "Nullable<"] {
        if name.starts_with(prefix) && name.ends_with('>') {
            return NULLABLE_METADATA_NAME.to_string();
        }
    }

    let simple = name.rsplit('.').next().unwrap_or(name);
    KEYWORD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == simple)
        .map(|(_, metadata)| metadata.to_string())
        .unwrap_or_else(|| simple.to_string())
}
