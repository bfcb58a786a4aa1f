//! Resolution and synthesis pipeline.
//!
//! `Generator::generate` turns a batch of candidates into generated sources,
//! diagnostics and the adapter IR list. It holds no state between calls, so
//! identical batches produce identical output.

use crate::codegen::{AdapterIr, ConverterSynthesizer};
use crate::config::GeneratorOptions;
use crate::diagnostics::Diagnostic;
use crate::discovery::TypeSource;
use crate::errors::GenResult;
use crate::resolve::resolve_pairings;
use crate::validate::{Verdict, validate};
use indexmap::IndexMap;
use indexmap::map::Entry;
use primjson_types::Candidate;
use serde_derive::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The two output channels of a run.
pub trait GeneratorSink {
    fn emit_source(&mut self, logical_name: &str, text: &str) -> GenResult<()>;
    fn report_diagnostic(&mut self, diagnostic: &Diagnostic) -> GenResult<()>;
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratedSource {
    pub logical_name: String,
    pub text: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationOutput {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Vec<Diagnostic>,
    /// Accepted adapters in emission order, for populating a runtime registry.
    pub adapters: Vec<AdapterIr>,
}

impl GenerationOutput {
    pub fn source(&self, logical_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|source| source.logical_name == logical_name)
    }

    pub fn replay(&self, sink: &mut dyn GeneratorSink) -> GenResult<()> {
        for source in &self.sources {
            sink.emit_source(&source.logical_name, &source.text)?;
        }
        for diagnostic in &self.diagnostics {
            sink.report_diagnostic(diagnostic)?;
        }
        Ok(())
    }
}

impl GeneratorSink for GenerationOutput {
    fn emit_source(&mut self, logical_name: &str, text: &str) -> GenResult<()> {
        self.sources.push(GeneratedSource {
            logical_name: logical_name.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn report_diagnostic(&mut self, diagnostic: &Diagnostic) -> GenResult<()> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }
}

pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Like `new`, but rejects options that would produce colliding names.
    pub fn try_new(options: GeneratorOptions) -> GenResult<Self> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn generate<S: TypeSource + ?Sized>(&self, source: &S) -> GenerationOutput {
        let synthesizer = ConverterSynthesizer::new(&self.options);
        let mut output = GenerationOutput::default();
        let mut logical_names: HashSet<String> = HashSet::new();

        for candidate in collapse(source.candidates()) {
            let wrapper = candidate.wrapper();
            let pairings = resolve_pairings(wrapper);

            match validate(wrapper, &pairings, &candidate.binding()) {
                Verdict::Accepted(mapping) => {
                    let adapter = synthesizer.synthesize(&mapping);
                    let companion = adapter.ir.companion(&self.options);

                    /* A sink must never see one logical name twice */
                    let companion_name = companion.as_ref().map(|c| &c.logical_name);
                    let clash = std::iter::once(&adapter.logical_name)
                        .chain(companion_name)
                        .find(|name| logical_names.contains(*name))
                        .or(companion_name.filter(|name| **name == adapter.logical_name));
                    if let Some(name) = clash {
                        warn!(
                            wrapper = %mapping.wrapper.dotted_name(),
                            adapter = %adapter.adapter_name,
                            logical_name = %name,
                            "logical name already emitted; skipping adapter"
                        );
                        continue;
                    }

                    info!(
                        wrapper = %mapping.wrapper.dotted_name(),
                        adapter = %adapter.adapter_name,
                        primitive = %mapping.primitive,
                        "synthesized converter"
                    );
                    logical_names.insert(adapter.logical_name.clone());
                    output.sources.push(GeneratedSource {
                        logical_name: adapter.logical_name,
                        text: adapter.text,
                    });
                    if let Some(companion) = companion {
                        debug!(logical_name = %companion.logical_name, "synthesized companion");
                        logical_names.insert(companion.logical_name.clone());
                        output.sources.push(GeneratedSource {
                            logical_name: companion.logical_name,
                            text: companion.text,
                        });
                    }
                    output.adapters.push(adapter.ir);
                }
                Verdict::Rejected(diagnostics) => {
                    for diagnostic in &diagnostics {
                        debug!(%diagnostic, "rejected candidate");
                    }
                    output.diagnostics.extend(diagnostics);
                }
            }
        }

        output
    }

    /// Generate and replay the result into `sink`.
    pub fn run<S: TypeSource + ?Sized>(&self, source: &S, sink: &mut dyn GeneratorSink) -> GenResult<GenerationOutput> {
        let output = self.generate(source);
        output.replay(sink)?;
        Ok(output)
    }
}

/* One candidate per wrapper: an explicit adapter supersedes a bare wrapper
 * annotation, and the first explicit adapter wins. Position is the wrapper's
 * first appearance. */
fn collapse(candidates: impl Iterator<Item = Candidate>) -> Vec<Candidate> {
    let mut slots: IndexMap<String, Candidate> = IndexMap::new();

    for candidate in candidates {
        let key = candidate.wrapper().identity.dotted_name();
        match slots.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if matches!(slot.get(), Candidate::Wrapper(_)) && matches!(candidate, Candidate::Adapter { .. }) {
                    slot.insert(candidate);
                    continue;
                }
                if let (Candidate::Adapter { adapter: kept, .. }, Candidate::Adapter { adapter: dropped, .. }) =
                    (slot.get(), &candidate)
                {
                    warn!(
                        wrapper = %slot.key(),
                        kept = %kept.dotted_name(),
                        dropped = %dropped.dotted_name(),
                        "several adapters declared for one wrapper; keeping the first"
                    );
                } else {
                    debug!(wrapper = %slot.key(), "duplicate wrapper candidate ignored");
                }
            }
        }
    }

    slots.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use primjson_types::{
        Accessibility, ConversionSignature, DeclarationKind, Namespace, SourceLocation, TypeDescription, TypeIdentity,
    };

    fn identity(name: &str, kind: DeclarationKind, is_partial: bool) -> TypeIdentity {
        TypeIdentity {
            name: name.to_string(),
            kind,
            namespace: Namespace::Local("Sample".into()),
            accessibility: Accessibility::Public,
            is_partial,
            location: SourceLocation::new("Sample.cs", 1, 1),
        }
    }

    fn wrapper(name: &str, primitive: &str) -> TypeDescription {
        TypeDescription::new(
            identity(name, DeclarationKind::Record, true),
            [ConversionSignature::new(primitive, name), ConversionSignature::new(name, primitive)],
        )
    }

    fn names(output: &GenerationOutput) -> Vec<&str> {
        output.sources.iter().map(|s| s.logical_name.as_str()).collect()
    }

    #[test]
    fn generated_adapter_precedes_companion() {
        let source = vec![Candidate::Wrapper(wrapper("DiceRoll", "int"))];
        let output = Generator::new(GeneratorOptions::default()).generate(&source);
        assert_eq!(
            names(&output),
            ["Sample.DiceRollPrimitiveJsonConverter.g.cs", "Sample.DiceRoll.g.cs"]
        );
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.adapters.len(), 1);
    }

    #[test]
    fn explicit_adapter_supersedes_bare_wrapper() {
        let source = vec![
            Candidate::Wrapper(wrapper("Name", "string")),
            Candidate::Adapter {
                adapter: identity("NameConverter", DeclarationKind::Class, true),
                wrapper: wrapper("Name", "string"),
            },
            Candidate::Adapter {
                adapter: identity("OtherNameConverter", DeclarationKind::Class, true),
                wrapper: wrapper("Name", "string"),
            },
        ];
        let output = Generator::new(GeneratorOptions::default()).generate(&source);
        assert_eq!(names(&output), ["Sample.NameConverter.g.cs"]);
        assert_eq!(output.adapters[0].adapter_name, "NameConverter");
    }

    #[test]
    fn failures_do_not_block_other_wrappers() {
        let mut not_partial = wrapper("Broken", "int");
        not_partial.identity.is_partial = false;
        let source = vec![
            Candidate::Wrapper(not_partial),
            Candidate::Wrapper(wrapper("Fine", "long")),
        ];
        let output = Generator::new(GeneratorOptions::default()).generate(&source);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::WrapperNotPartial);
        assert_eq!(output.adapters.len(), 1);
        assert_eq!(output.adapters[0].wrapper.name, "Fine");
    }

    #[test]
    fn colliding_logical_names_are_emitted_once() {
        let source = vec![
            Candidate::Wrapper(wrapper("Name", "string")),
            Candidate::Adapter {
                adapter: identity("NamePrimitiveJsonConverter", DeclarationKind::Class, true),
                wrapper: wrapper("Title", "string"),
            },
        ];
        let output = Generator::new(GeneratorOptions::default()).generate(&source);
        assert_eq!(
            names(&output),
            ["Sample.NamePrimitiveJsonConverter.g.cs", "Sample.Name.g.cs"]
        );
        assert_eq!(output.adapters.len(), 1);
        assert_eq!(output.adapters[0].wrapper.name, "Name");
    }

    #[test]
    fn empty_adapter_suffix_never_doubles_a_logical_name() {
        let options = GeneratorOptions {
            adapter_suffix: String::new(),
            ..GeneratorOptions::default()
        };
        assert!(Generator::try_new(options.clone()).is_err());

        let output = Generator::new(options).generate(&vec![Candidate::Wrapper(wrapper("Level", "int"))]);
        assert!(output.sources.is_empty());
        assert!(output.adapters.is_empty());
    }

    #[test]
    fn run_replays_into_sink() {
        let source = vec![
            Candidate::Wrapper(wrapper("DiceRoll", "int")),
            Candidate::Wrapper(TypeDescription::new(identity("Lonely", DeclarationKind::Class, true), Vec::new())),
        ];
        let mut sink = GenerationOutput::default();
        let output = Generator::new(GeneratorOptions::default())
            .run(&source, &mut sink)
            .expect("in-memory sink");
        assert_eq!(sink.sources, output.sources);
        assert_eq!(sink.diagnostics, output.diagnostics);
        assert_eq!(sink.diagnostics[0].kind, DiagnosticKind::NoConversionPair);
    }
}
