//! Diagnostics reported for declarations that cannot be mapped.
//!
//! Every kind carries a fixed descriptor (id, title, message format) so the
//! host can surface them the same way it surfaces compiler warnings.

use primjson_types::SourceLocation;
use serde_derive::Serialize;
use std::fmt;

pub const DIAGNOSTIC_CATEGORY: &str = "PrimitiveGen";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        })
    }
}

/// Static description of one diagnostic kind. `{0}` in `message_format` is
/// replaced by the offending type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message_format: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
}

const NO_CONVERSION_PAIR: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "PRIM001",
    title: "Not enough conversion operators",
    message_format: "Type '{0}' must contain a pair of conversion operators to use 'JsonPrimitiveAttribute'",
    category: DIAGNOSTIC_CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

const AMBIGUOUS_CONVERSION_PAIRS: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "PRIM002",
    title: "Too many conversion operators",
    message_format: "Type '{0}' must contain only one pair of conversion operators to use 'JsonPrimitiveAttribute'",
    category: DIAGNOSTIC_CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

const WRAPPER_NOT_PARTIAL: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "PRIM003",
    title: "JsonPrimitive type is not partial",
    message_format: "Type '{0}' must be partial to use 'JsonPrimitiveAttribute'",
    category: DIAGNOSTIC_CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

const ADAPTER_NOT_PARTIAL: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "PRIM004",
    title: "JsonPrimitiveConverter type is not partial",
    message_format: "Type '{0}' must be partial to use 'JsonPrimitiveConverterAttribute'",
    category: DIAGNOSTIC_CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

const ADAPTER_NOT_CLASS_KIND: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "PRIM005",
    title: "JsonPrimitiveConverter type is not a class",
    message_format: "Type '{0}' must be a class to use 'JsonPrimitiveConverterAttribute'",
    category: DIAGNOSTIC_CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    NoConversionPair,
    AmbiguousConversionPairs,
    WrapperNotPartial,
    AdapterNotPartial,
    AdapterNotClassKind,
}

impl DiagnosticKind {
    pub fn descriptor(&self) -> &'static DiagnosticDescriptor {
        match self {
            DiagnosticKind::NoConversionPair => &NO_CONVERSION_PAIR,
            DiagnosticKind::AmbiguousConversionPairs => &AMBIGUOUS_CONVERSION_PAIRS,
            DiagnosticKind::WrapperNotPartial => &WRAPPER_NOT_PARTIAL,
            DiagnosticKind::AdapterNotPartial => &ADAPTER_NOT_PARTIAL,
            DiagnosticKind::AdapterNotClassKind => &ADAPTER_NOT_CLASS_KIND,
        }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor().id
    }
}

/// A rejected type: what went wrong, where, and which declaration to blame.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: SourceLocation,
    pub type_name: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: SourceLocation, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            type_name: type_name.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.descriptor().severity
    }

    pub fn message(&self) -> String {
        self.kind.descriptor().message_format.replace("{0}", &self.type_name)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.location,
            self.severity(),
            self.kind.id(),
            self.message()
        )
    }
}
