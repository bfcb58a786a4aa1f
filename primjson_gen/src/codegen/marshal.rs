/* Per-primitive marshalling table
 *
 * Pure data: token kinds accepted on read, the reader/writer members to call,
 * and whether the primitive has value or reference null semantics. Adding a
 * supported primitive means adding one arm to `rule_for`.
 */

use primjson_types::PrimitiveKind;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Token kinds as named by the host's `JsonTokenType`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    None,
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    PropertyName,
    Comment,
    String,
    Number,
    True,
    False,
    Null,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::None => "None",
            TokenKind::StartObject => "StartObject",
            TokenKind::EndObject => "EndObject",
            TokenKind::StartArray => "StartArray",
            TokenKind::EndArray => "EndArray",
            TokenKind::PropertyName => "PropertyName",
            TokenKind::Comment => "Comment",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Null => "Null",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reader members, one per primitive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadAccessor {
    GetInt16,
    GetInt32,
    GetInt64,
    GetUInt16,
    GetUInt32,
    GetUInt64,
    GetSingle,
    GetDouble,
    GetDecimal,
    GetString,
    GetGuid,
    GetBoolean,
    GetByte,
    GetDateTime,
    GetDateTimeOffset,
}

impl ReadAccessor {
    pub fn name(&self) -> &'static str {
        match self {
            ReadAccessor::GetInt16 => "GetInt16",
            ReadAccessor::GetInt32 => "GetInt32",
            ReadAccessor::GetInt64 => "GetInt64",
            ReadAccessor::GetUInt16 => "GetUInt16",
            ReadAccessor::GetUInt32 => "GetUInt32",
            ReadAccessor::GetUInt64 => "GetUInt64",
            ReadAccessor::GetSingle => "GetSingle",
            ReadAccessor::GetDouble => "GetDouble",
            ReadAccessor::GetDecimal => "GetDecimal",
            ReadAccessor::GetString => "GetString",
            ReadAccessor::GetGuid => "GetGuid",
            ReadAccessor::GetBoolean => "GetBoolean",
            ReadAccessor::GetByte => "GetByte",
            ReadAccessor::GetDateTime => "GetDateTime",
            ReadAccessor::GetDateTimeOffset => "GetDateTimeOffset",
        }
    }
}

/// Writer members.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteAccessor {
    WriteNumberValue,
    WriteStringValue,
    WriteBooleanValue,
}

impl WriteAccessor {
    pub fn name(&self) -> &'static str {
        match self {
            WriteAccessor::WriteNumberValue => "WriteNumberValue",
            WriteAccessor::WriteStringValue => "WriteStringValue",
            WriteAccessor::WriteBooleanValue => "WriteBooleanValue",
        }
    }
}

/// Null semantics of the underlying primitive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NullHandling {
    /* Nullable<T>: test `.HasValue`, unwrap with `.Value` */
    Value,
    /* Reference: test `is not null`, unwrap with `!` */
    Reference,
}

impl NullHandling {
    pub fn presence_test(&self) -> &'static str {
        match self {
            NullHandling::Value => ".HasValue",
            NullHandling::Reference => " is not null",
        }
    }

    pub fn unwrap_suffix(&self) -> &'static str {
        match self {
            NullHandling::Value => ".Value",
            NullHandling::Reference => "!",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub struct MarshalRule {
    pub token_kinds: &'static [TokenKind],
    pub read: ReadAccessor,
    pub write: WriteAccessor,
    pub null_handling: NullHandling,
}

impl MarshalRule {
    pub fn accepts(&self, kind: TokenKind) -> bool {
        self.token_kinds.contains(&kind)
    }
}

const fn number(read: ReadAccessor) -> MarshalRule {
    MarshalRule {
        token_kinds: &[TokenKind::Number],
        read,
        write: WriteAccessor::WriteNumberValue,
        null_handling: NullHandling::Value,
    }
}

const fn string_value(read: ReadAccessor) -> MarshalRule {
    MarshalRule {
        token_kinds: &[TokenKind::String],
        read,
        write: WriteAccessor::WriteStringValue,
        null_handling: NullHandling::Value,
    }
}

const INT16: MarshalRule = number(ReadAccessor::GetInt16);
const INT32: MarshalRule = number(ReadAccessor::GetInt32);
const INT64: MarshalRule = number(ReadAccessor::GetInt64);
const UINT16: MarshalRule = number(ReadAccessor::GetUInt16);
const UINT32: MarshalRule = number(ReadAccessor::GetUInt32);
const UINT64: MarshalRule = number(ReadAccessor::GetUInt64);
const SINGLE: MarshalRule = number(ReadAccessor::GetSingle);
const DOUBLE: MarshalRule = number(ReadAccessor::GetDouble);
const DECIMAL: MarshalRule = number(ReadAccessor::GetDecimal);
const BYTE: MarshalRule = number(ReadAccessor::GetByte);
const GUID: MarshalRule = string_value(ReadAccessor::GetGuid);
const DATE_TIME: MarshalRule = string_value(ReadAccessor::GetDateTime);
const DATE_TIME_OFFSET: MarshalRule = string_value(ReadAccessor::GetDateTimeOffset);

const STRING: MarshalRule = MarshalRule {
    token_kinds: &[TokenKind::String],
    read: ReadAccessor::GetString,
    write: WriteAccessor::WriteStringValue,
    null_handling: NullHandling::Reference,
};

const BOOLEAN: MarshalRule = MarshalRule {
    token_kinds: &[TokenKind::True, TokenKind::False],
    read: ReadAccessor::GetBoolean,
    write: WriteAccessor::WriteBooleanValue,
    null_handling: NullHandling::Value,
};

pub fn rule_for(kind: PrimitiveKind) -> &'static MarshalRule {
    match kind {
        PrimitiveKind::Int16 => &INT16,
        PrimitiveKind::Int32 => &INT32,
        PrimitiveKind::Int64 => &INT64,
        PrimitiveKind::UInt16 => &UINT16,
        PrimitiveKind::UInt32 => &UINT32,
        PrimitiveKind::UInt64 => &UINT64,
        PrimitiveKind::Single => &SINGLE,
        PrimitiveKind::Double => &DOUBLE,
        PrimitiveKind::Decimal => &DECIMAL,
        PrimitiveKind::String => &STRING,
        PrimitiveKind::Guid => &GUID,
        PrimitiveKind::Boolean => &BOOLEAN,
        PrimitiveKind::Byte => &BYTE,
        PrimitiveKind::DateTime => &DATE_TIME,
        PrimitiveKind::DateTimeOffset => &DATE_TIME_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_accessor_matches_metadata_name() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(rule_for(kind).read.name(), format!("Get{}", kind.metadata_name()));
        }
    }

    #[test]
    fn only_string_has_reference_semantics() {
        let references: Vec<PrimitiveKind> = PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| rule_for(*kind).null_handling == NullHandling::Reference)
            .collect();
        assert_eq!(references, [PrimitiveKind::String]);
    }

    #[test]
    fn boolean_accepts_both_literal_tokens() {
        let rule = rule_for(PrimitiveKind::Boolean);
        assert!(rule.accepts(TokenKind::True));
        assert!(rule.accepts(TokenKind::False));
        assert!(!rule.accepts(TokenKind::String));
    }

    #[test]
    fn guid_and_dates_travel_as_strings() {
        for kind in [PrimitiveKind::Guid, PrimitiveKind::DateTime, PrimitiveKind::DateTimeOffset] {
            let rule = rule_for(kind);
            assert_eq!(rule.token_kinds, &[TokenKind::String]);
            assert_eq!(rule.write, WriteAccessor::WriteStringValue);
            assert_eq!(rule.null_handling, NullHandling::Value);
        }
    }
}
