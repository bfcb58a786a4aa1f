//! Candidate discovery from YAML declaration files.
//!
//! Stands in for the host's attribute-driven discovery: each file plays the
//! role of one compilation unit, and the loaded set yields wrapper and adapter
//! candidates to the pipeline through [`TypeSource`].

use crate::errors::{GenError, GenResult};
use indexmap::IndexMap;
use primjson_types::{
    Candidate, ConversionSignature, DeclarationFile, DeclaredType, Namespace, SourceLocation, TypeDescription,
    TypeIdentity,
};
use std::path::Path;
use tracing::{debug, warn};

/// Finite, restartable supply of candidates. Calling `candidates` twice
/// yields the same sequence.
pub trait TypeSource {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_;
}

impl TypeSource for Vec<Candidate> {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.iter().cloned()
    }
}

impl TypeSource for [Candidate] {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.iter().cloned()
    }
}

#[derive(Debug, Clone)]
struct Declaration {
    identity: TypeIdentity,
    conversions: Vec<ConversionSignature>,
    json_primitive: bool,
    converter_for: Option<String>,
}

impl Declaration {
    fn description(&self) -> TypeDescription {
        TypeDescription::new(self.identity.clone(), self.conversions.iter().cloned())
    }
}

/// Merged declarations keyed by dotted qualified name, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    declarations: IndexMap<String, Declaration>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> GenResult<Self> {
        let mut set = Self::new();
        for path in paths {
            set.load_file(path.as_ref())?;
        }
        Ok(set)
    }

    pub fn load_file(&mut self, path: &Path) -> GenResult<()> {
        let content = std::fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = DeclarationFile::from_yaml_str(&content).map_err(|source| GenError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_file(&file, &path.display().to_string());
        Ok(())
    }

    /// Merge one declaration file; `origin` is the file name used in locations.
    pub fn add_file(&mut self, file: &DeclarationFile, origin: &str) {
        for declared in &file.types {
            let namespace = Namespace::from_path(declared.namespace.as_deref().or(file.namespace.as_deref()));
            self.add_type(declared, namespace, origin);
        }
    }

    fn add_type(&mut self, declared: &DeclaredType, namespace: Namespace, origin: &str) {
        let conversions = declared
            .conversions
            .iter()
            .filter(|conversion| !conversion.explicit)
            .map(|conversion| ConversionSignature::new(&conversion.from, &conversion.to));

        let key = namespace.dotted(&declared.name);
        match self.declarations.get_mut(&key) {
            Some(existing) => {
                debug!(type_name = %key, origin, "merging split declaration");
                existing.conversions.extend(conversions);
                existing.identity.is_partial |= declared.partial;
                existing.json_primitive |= declared.json_primitive;
                if existing.converter_for.is_none() {
                    existing.converter_for = declared.converter_for.clone();
                }
            }
            None => {
                let identity = TypeIdentity {
                    name: declared.name.clone(),
                    kind: declared.kind,
                    namespace,
                    accessibility: declared.accessibility,
                    is_partial: declared.partial,
                    location: SourceLocation::new(origin, declared.line, declared.column),
                };
                self.declarations.insert(
                    key,
                    Declaration {
                        identity,
                        conversions: conversions.collect(),
                        json_primitive: declared.json_primitive,
                        converter_for: declared.converter_for.clone(),
                    },
                );
            }
        }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn description(&self, dotted_name: &str) -> Option<TypeDescription> {
        self.declarations.get(dotted_name).map(Declaration::description)
    }

    /* Exact dotted name, then the adapter's own namespace, then a unique simple name */
    fn resolve_reference(&self, reference: &str, from: &Namespace) -> Option<&Declaration> {
        let reference = reference.trim();
        let reference = reference.strip_prefix("global::").unwrap_or(reference);

        if let Some(found) = self.declarations.get(reference) {
            return Some(found);
        }
        if let Some(found) = self.declarations.get(&from.dotted(reference)) {
            return Some(found);
        }

        let simple = reference.rsplit('.').next().unwrap_or(reference);
        let mut matches = self.declarations.values().filter(|d| d.identity.name == simple);
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    fn candidates_for(&self, declaration: &Declaration) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if declaration.json_primitive {
            candidates.push(Candidate::Wrapper(declaration.description()));
        }

        if let Some(reference) = &declaration.converter_for {
            match self.resolve_reference(reference, &declaration.identity.namespace) {
                None => {
                    warn!(
                        adapter = %declaration.identity.dotted_name(),
                        reference = %reference,
                        "adapter target not found; ignoring adapter"
                    );
                }
                Some(target) if target.conversions.is_empty() => {
                    warn!(
                        adapter = %declaration.identity.dotted_name(),
                        wrapper = %target.identity.dotted_name(),
                        "adapter target declares no conversions; ignoring adapter"
                    );
                }
                Some(target) => candidates.push(Candidate::Adapter {
                    adapter: declaration.identity.clone(),
                    wrapper: target.description(),
                }),
            }
        }

        candidates
    }
}

impl TypeSource for DeclarationSet {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.declarations
            .values()
            .flat_map(move |declaration| self.candidates_for(declaration))
    }
}
