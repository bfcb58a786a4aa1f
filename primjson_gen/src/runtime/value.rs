use chrono::{DateTime, FixedOffset, NaiveDateTime};
use primjson_types::PrimitiveKind;
use std::fmt;
use uuid::Uuid;

/// An unwrapped primitive, one variant per supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Single(f32),
    Double(f64),
    /* Validated decimal literal; see `DecimalText` */
    Decimal(DecimalText),
    String(String),
    Guid(Uuid),
    Boolean(bool),
    Byte(u8),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
}

impl PrimitiveValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            PrimitiveValue::Int16(_) => PrimitiveKind::Int16,
            PrimitiveValue::Int32(_) => PrimitiveKind::Int32,
            PrimitiveValue::Int64(_) => PrimitiveKind::Int64,
            PrimitiveValue::UInt16(_) => PrimitiveKind::UInt16,
            PrimitiveValue::UInt32(_) => PrimitiveKind::UInt32,
            PrimitiveValue::UInt64(_) => PrimitiveKind::UInt64,
            PrimitiveValue::Single(_) => PrimitiveKind::Single,
            PrimitiveValue::Double(_) => PrimitiveKind::Double,
            PrimitiveValue::Decimal(_) => PrimitiveKind::Decimal,
            PrimitiveValue::String(_) => PrimitiveKind::String,
            PrimitiveValue::Guid(_) => PrimitiveKind::Guid,
            PrimitiveValue::Boolean(_) => PrimitiveKind::Boolean,
            PrimitiveValue::Byte(_) => PrimitiveKind::Byte,
            PrimitiveValue::DateTime(_) => PrimitiveKind::DateTime,
            PrimitiveValue::DateTimeOffset(_) => PrimitiveKind::DateTimeOffset,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Int16(v) => write!(f, "{}", v),
            PrimitiveValue::Int32(v) => write!(f, "{}", v),
            PrimitiveValue::Int64(v) => write!(f, "{}", v),
            PrimitiveValue::UInt16(v) => write!(f, "{}", v),
            PrimitiveValue::UInt32(v) => write!(f, "{}", v),
            PrimitiveValue::UInt64(v) => write!(f, "{}", v),
            PrimitiveValue::Single(v) => write!(f, "{}", v),
            PrimitiveValue::Double(v) => write!(f, "{}", v),
            PrimitiveValue::Decimal(v) => write!(f, "{}", v),
            PrimitiveValue::String(v) => write!(f, "{:?}", v),
            PrimitiveValue::Guid(v) => write!(f, "{}", v.hyphenated()),
            PrimitiveValue::Boolean(v) => write!(f, "{}", v),
            PrimitiveValue::Byte(v) => write!(f, "{}", v),
            PrimitiveValue::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
            PrimitiveValue::DateTimeOffset(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

/// Round-trip text form used when writing date-times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Decimal number kept as text: optional sign, integral digits, optional
/// fraction, at most 28 significant digits. Exponent forms are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalText(String);

/* Precision limit of the host's decimal type */
const MAX_DECIMAL_DIGITS: usize = 28;

impl DecimalText {
    pub fn parse(text: &str) -> Option<Self> {
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let (integral, fraction) = match unsigned.split_once('.') {
            Some((integral, fraction)) => (integral, Some(fraction)),
            None => (unsigned, None),
        };

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integral) || !fraction.is_none_or(all_digits) {
            return None;
        }

        let significant = integral.trim_start_matches('0').len() + fraction.map_or(0, str::len);
        if significant > MAX_DECIMAL_DIGITS {
            return None;
        }
        Some(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrapper instance as seen by an adapter: the wrapper's type name and the
/// primitive it converts to. `value` is `None` when the conversion yields
/// null, which only reference-semantics primitives can do.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapperValue {
    pub type_name: String,
    pub value: Option<PrimitiveValue>,
}

impl WrapperValue {
    pub fn new(type_name: impl Into<String>, value: PrimitiveValue) -> Self {
        Self {
            type_name: type_name.into(),
            value: Some(value),
        }
    }

    pub fn null(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_text_validation() {
        assert!(DecimalText::parse("12.50").is_some());
        assert!(DecimalText::parse("-0.001").is_some());
        assert!(DecimalText::parse("1e3").is_none());
        assert!(DecimalText::parse(".5").is_none());
        assert!(DecimalText::parse("5.").is_none());
        assert!(DecimalText::parse("1234567890123456789012345678").is_some());
        assert!(DecimalText::parse("12345678901234567890123456789").is_none());
    }

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(PrimitiveValue::Byte(7).kind(), PrimitiveKind::Byte);
        assert_eq!(PrimitiveValue::String("x".into()).kind(), PrimitiveKind::String);
        assert_eq!(PrimitiveValue::Guid(Uuid::nil()).to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
