/* Token stream model of the host's JSON reader and writer */

use crate::codegen::TokenKind;
use crate::errors::{RuntimeError, RuntimeResult};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "token", content = "text")]
pub enum JsonToken {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    PropertyName(String),
    String(String),
    /// Raw number text as it appears on the wire.
    Number(String),
    True,
    False,
    Null,
}

impl JsonToken {
    pub fn kind(&self) -> TokenKind {
        match self {
            JsonToken::StartObject => TokenKind::StartObject,
            JsonToken::EndObject => TokenKind::EndObject,
            JsonToken::StartArray => TokenKind::StartArray,
            JsonToken::EndArray => TokenKind::EndArray,
            JsonToken::PropertyName(_) => TokenKind::PropertyName,
            JsonToken::String(_) => TokenKind::String,
            JsonToken::Number(_) => TokenKind::Number,
            JsonToken::True => TokenKind::True,
            JsonToken::False => TokenKind::False,
            JsonToken::Null => TokenKind::Null,
        }
    }

    pub fn number(value: impl ToString) -> Self {
        JsonToken::Number(value.to_string())
    }

    pub fn string(value: impl Into<String>) -> Self {
        JsonToken::String(value.into())
    }

    /// Flatten a parsed JSON document into the token sequence a reader would see.
    pub fn tokenize(value: &Value) -> Vec<JsonToken> {
        let mut tokens = Vec::new();
        push_tokens(value, &mut tokens);
        tokens
    }
}

fn push_tokens(value: &Value, tokens: &mut Vec<JsonToken>) {
    match value {
        Value::Null => tokens.push(JsonToken::Null),
        Value::Bool(true) => tokens.push(JsonToken::True),
        Value::Bool(false) => tokens.push(JsonToken::False),
        Value::Number(number) => tokens.push(JsonToken::Number(number.to_string())),
        Value::String(text) => tokens.push(JsonToken::String(text.clone())),
        Value::Array(items) => {
            tokens.push(JsonToken::StartArray);
            for item in items {
                push_tokens(item, tokens);
            }
            tokens.push(JsonToken::EndArray);
        }
        Value::Object(fields) => {
            tokens.push(JsonToken::StartObject);
            for (name, field) in fields {
                tokens.push(JsonToken::PropertyName(name.clone()));
                push_tokens(field, tokens);
            }
            tokens.push(JsonToken::EndObject);
        }
    }
}

/// Forward-only cursor over a token sequence.
#[derive(Debug, Clone, Default)]
pub struct TokenReader {
    tokens: Vec<JsonToken>,
    position: usize,
}

impl TokenReader {
    pub fn new(tokens: Vec<JsonToken>) -> Self {
        Self { tokens, position: 0 }
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::new(JsonToken::tokenize(&value)))
    }

    pub fn current(&self) -> Option<&JsonToken> {
        self.tokens.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub fn advance(&mut self) -> RuntimeResult<JsonToken> {
        let token = self.current().cloned().ok_or(RuntimeError::UnexpectedEnd)?;
        self.position += 1;
        Ok(token)
    }

    /// Consume one complete value: a scalar, a property and its value, or a
    /// whole object/array including nested content.
    pub fn skip_value(&mut self) -> RuntimeResult<()> {
        match self.advance()? {
            JsonToken::StartObject | JsonToken::StartArray => {
                let mut depth = 1usize;
                while depth > 0 {
                    match self.advance()? {
                        JsonToken::StartObject | JsonToken::StartArray => depth += 1,
                        JsonToken::EndObject | JsonToken::EndArray => depth -= 1,
                        _ => {}
                    }
                }
                Ok(())
            }
            JsonToken::PropertyName(_) => self.skip_value(),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenWriter {
    tokens: Vec<JsonToken>,
}

impl TokenWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, token: JsonToken) {
        self.tokens.push(token);
    }

    pub fn write_null(&mut self) {
        self.tokens.push(JsonToken::Null);
    }

    pub fn tokens(&self) -> &[JsonToken] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<JsonToken> {
        self.tokens
    }
}
