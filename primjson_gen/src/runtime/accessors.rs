//! Reader and writer accessor semantics.
//!
//! A read accessor decodes a token whose kind the marshal row already
//! accepted; failure here is the host reader's format error, not a kind
//! mismatch. A write accessor produces exactly one token.

use super::token::JsonToken;
use super::value::{DATE_TIME_FORMAT, DecimalText, PrimitiveValue};
use crate::codegen::{ReadAccessor, WriteAccessor};
use crate::errors::{RuntimeError, RuntimeResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
use std::str::FromStr;
use uuid::Uuid;

fn accessor_error(accessor: ReadAccessor, token: &JsonToken) -> RuntimeError {
    RuntimeError::Accessor {
        accessor: accessor.name(),
        token: format!("{:?}", token),
    }
}

fn parse_number<T: FromStr>(accessor: ReadAccessor, token: &JsonToken) -> RuntimeResult<T> {
    match token {
        JsonToken::Number(text) => text.parse().map_err(|_| accessor_error(accessor, token)),
        _ => Err(accessor_error(accessor, token)),
    }
}

/* Text parsing saturates to infinity; the host rejects out-of-range floats */
fn parse_finite<T: FromStr + Into<f64> + Copy>(accessor: ReadAccessor, token: &JsonToken) -> RuntimeResult<T> {
    let value: T = parse_number(accessor, token)?;
    if value.into().is_finite() {
        Ok(value)
    } else {
        Err(accessor_error(accessor, token))
    }
}

fn string_payload(accessor: ReadAccessor, token: &JsonToken) -> RuntimeResult<&str> {
    match token {
        JsonToken::String(text) => Ok(text),
        _ => Err(accessor_error(accessor, token)),
    }
}

/* Offset-less text is taken as UTC; offset text is normalized to UTC */
fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0))
}

fn parse_date_time_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset);
    }
    let utc = FixedOffset::east_opt(0)?;
    parse_date_time(text).map(|naive| naive.and_utc().with_timezone(&utc))
}

pub fn read(accessor: ReadAccessor, token: &JsonToken) -> RuntimeResult<PrimitiveValue> {
    let value = match accessor {
        ReadAccessor::GetInt16 => PrimitiveValue::Int16(parse_number(accessor, token)?),
        ReadAccessor::GetInt32 => PrimitiveValue::Int32(parse_number(accessor, token)?),
        ReadAccessor::GetInt64 => PrimitiveValue::Int64(parse_number(accessor, token)?),
        ReadAccessor::GetUInt16 => PrimitiveValue::UInt16(parse_number(accessor, token)?),
        ReadAccessor::GetUInt32 => PrimitiveValue::UInt32(parse_number(accessor, token)?),
        ReadAccessor::GetUInt64 => PrimitiveValue::UInt64(parse_number(accessor, token)?),
        ReadAccessor::GetByte => PrimitiveValue::Byte(parse_number(accessor, token)?),
        ReadAccessor::GetSingle => PrimitiveValue::Single(parse_finite(accessor, token)?),
        ReadAccessor::GetDouble => PrimitiveValue::Double(parse_finite(accessor, token)?),
        ReadAccessor::GetDecimal => match token {
            JsonToken::Number(text) => {
                PrimitiveValue::Decimal(DecimalText::parse(text).ok_or_else(|| accessor_error(accessor, token))?)
            }
            _ => return Err(accessor_error(accessor, token)),
        },
        ReadAccessor::GetString => PrimitiveValue::String(string_payload(accessor, token)?.to_string()),
        ReadAccessor::GetGuid => {
            let text = string_payload(accessor, token)?;
            PrimitiveValue::Guid(Uuid::parse_str(text).map_err(|_| accessor_error(accessor, token))?)
        }
        ReadAccessor::GetBoolean => match token {
            JsonToken::True => PrimitiveValue::Boolean(true),
            JsonToken::False => PrimitiveValue::Boolean(false),
            _ => return Err(accessor_error(accessor, token)),
        },
        ReadAccessor::GetDateTime => {
            let text = string_payload(accessor, token)?;
            PrimitiveValue::DateTime(parse_date_time(text).ok_or_else(|| accessor_error(accessor, token))?)
        }
        ReadAccessor::GetDateTimeOffset => {
            let text = string_payload(accessor, token)?;
            PrimitiveValue::DateTimeOffset(
                parse_date_time_offset(text).ok_or_else(|| accessor_error(accessor, token))?,
            )
        }
    };
    Ok(value)
}

pub fn write(accessor: WriteAccessor, value: &PrimitiveValue) -> RuntimeResult<JsonToken> {
    let token = match (accessor, value) {
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Int16(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Int32(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Int64(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::UInt16(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::UInt32(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::UInt64(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Byte(v)) => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Single(v)) if v.is_finite() => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Double(v)) if v.is_finite() => JsonToken::number(v),
        (WriteAccessor::WriteNumberValue, PrimitiveValue::Decimal(v)) => JsonToken::number(v),
        (WriteAccessor::WriteStringValue, PrimitiveValue::String(v)) => JsonToken::string(v.as_str()),
        (WriteAccessor::WriteStringValue, PrimitiveValue::Guid(v)) => JsonToken::string(v.hyphenated().to_string()),
        (WriteAccessor::WriteStringValue, PrimitiveValue::DateTime(v)) => {
            JsonToken::string(v.format(DATE_TIME_FORMAT).to_string())
        }
        (WriteAccessor::WriteStringValue, PrimitiveValue::DateTimeOffset(v)) => {
            JsonToken::string(v.to_rfc3339_opts(SecondsFormat::AutoSi, false))
        }
        (WriteAccessor::WriteBooleanValue, PrimitiveValue::Boolean(true)) => JsonToken::True,
        (WriteAccessor::WriteBooleanValue, PrimitiveValue::Boolean(false)) => JsonToken::False,
        _ => {
            return Err(RuntimeError::ValueMismatch {
                accessor: accessor.name(),
                value: value.to_string(),
            });
        }
    };
    Ok(token)
}
