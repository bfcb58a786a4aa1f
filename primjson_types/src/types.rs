use crate::primitive::{PrimitiveKind, normalize_type_name};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    #[default]
    Class,
    Struct,
    Record,
    RecordStruct,
}

impl DeclarationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Record => "record",
            DeclarationKind::RecordStruct => "record struct",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::PrivateProtected => "private protected",
        }
    }
}

/* Enclosing namespace of a declared type */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Namespace {
    #[default]
    Global,
    Local(String),
}

impl Namespace {
    /// `None`, an empty path, `global` and the host's `<global namespace>`
    /// marker all denote the global namespace.
    pub fn from_path(path: Option<&str>) -> Self {
        match path.map(str::trim) {
            None | Some("") | Some("global") | Some("<global namespace>") => Namespace::Global,
            Some(path) => Namespace::Local(path.to_string()),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Namespace::Global)
    }

    /// `global::`-qualified spelling of a type declared in this namespace.
    pub fn qualify(&self, type_name: &str) -> String {
        match self {
            Namespace::Global => format!("global::{}", type_name),
            Namespace::Local(path) => format!("global::{}.{}", path, type_name),
        }
    }

    /// Dotted spelling without the `global::` alias, e.g. `Sample.DiceRoll`.
    pub fn dotted(&self, type_name: &str) -> String {
        match self {
            Namespace::Global => type_name.to_string(),
            Namespace::Local(path) => format!("{}.{}", path, type_name),
        }
    }
}

impl From<String> for Namespace {
    fn from(path: String) -> Self {
        Namespace::from_path(Some(&path))
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        match namespace {
            Namespace::Global => "global".to_string(),
            Namespace::Local(path) => path,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self { file: file.into(), line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.file, self.line, self.column)
    }
}

/// Identity of a wrapper or adapter type within one analysis run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub struct TypeIdentity {
    pub name: String,
    pub kind: DeclarationKind,
    pub namespace: Namespace,
    pub accessibility: Accessibility,
    pub is_partial: bool,
    pub location: SourceLocation,
}

impl TypeIdentity {
    pub fn qualified_name(&self) -> String {
        self.namespace.qualify(&self.name)
    }

    pub fn dotted_name(&self) -> String {
        self.namespace.dotted(&self.name)
    }
}

/// One declared implicit conversion, `input -> output`, by simple metadata name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionSignature {
    pub input: String,
    pub output: String,
}

impl ConversionSignature {
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input: normalize_type_name(input),
            output: normalize_type_name(output),
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            input: self.output.clone(),
            output: self.input.clone(),
        }
    }
}

impl fmt::Display for ConversionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.output)
    }
}

/// A discovered type plus its declared conversions.
///
/// Conversions keep declaration order; a repeated `(input, output)` pair
/// collapses onto its first occurrence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescription {
    pub identity: TypeIdentity,
    conversions: Vec<ConversionSignature>,
}

impl TypeDescription {
    pub fn new(identity: TypeIdentity, conversions: impl IntoIterator<Item = ConversionSignature>) -> Self {
        let mut unique: Vec<ConversionSignature> = Vec::new();
        for conversion in conversions {
            if !unique.contains(&conversion) {
                unique.push(conversion);
            }
        }
        Self { identity, conversions: unique }
    }

    pub fn conversions(&self) -> &[ConversionSignature] {
        &self.conversions
    }

    pub fn has_conversions(&self) -> bool {
        !self.conversions.is_empty()
    }
}

/// Whether a wrapper names a dedicated, user-declared adapter type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(tag = "binding", rename_all = "kebab-case")]
pub enum AdapterBinding {
    #[default]
    Absent,
    Explicit { adapter: TypeIdentity },
}

/// One unit of work handed over by discovery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "candidate", rename_all = "kebab-case")]
pub enum Candidate {
    /* Type annotated to request a generated adapter */
    Wrapper(TypeDescription),
    /* Type annotated as the dedicated adapter for `wrapper` */
    Adapter {
        adapter: TypeIdentity,
        wrapper: TypeDescription,
    },
}

impl Candidate {
    pub fn wrapper(&self) -> &TypeDescription {
        match self {
            Candidate::Wrapper(description) => description,
            Candidate::Adapter { wrapper, .. } => wrapper,
        }
    }

    pub fn binding(&self) -> AdapterBinding {
        match self {
            Candidate::Wrapper(_) => AdapterBinding::Absent,
            Candidate::Adapter { adapter, .. } => AdapterBinding::Explicit { adapter: adapter.clone() },
        }
    }
}

/// The single accepted outcome of validation for one wrapper type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub struct PrimitiveMapping {
    pub primitive: PrimitiveKind,
    pub wrapper: TypeIdentity,
    pub binding: AdapterBinding,
}
