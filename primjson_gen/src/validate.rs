/* Acceptance rules applied once pairings are enumerated */

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::resolve::Pairing;
use primjson_types::{AdapterBinding, DeclarationKind, PrimitiveMapping, TypeDescription};
use tracing::debug;

/// Outcome for one wrapper type: a mapping, or the diagnostics explaining why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(PrimitiveMapping),
    /* Never empty; two entries only when both adapter-shape rules fail */
    Rejected(Vec<Diagnostic>),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Validate a wrapper's pairings against its declaration and adapter binding.
///
/// Pairing problems are reported at the wrapper's location; adapter-shape
/// problems at the adapter's location, naming the adapter.
pub fn validate(wrapper: &TypeDescription, pairings: &[Pairing], binding: &AdapterBinding) -> Verdict {
    let identity = &wrapper.identity;

    let pairing = match pairings {
        [] => {
            return Verdict::Rejected(vec![Diagnostic::new(
                DiagnosticKind::NoConversionPair,
                identity.location.clone(),
                &identity.name,
            )]);
        }
        [pairing] => *pairing,
        _ => {
            return Verdict::Rejected(vec![Diagnostic::new(
                DiagnosticKind::AmbiguousConversionPairs,
                identity.location.clone(),
                &identity.name,
            )]);
        }
    };

    match binding {
        AdapterBinding::Absent => {
            if !identity.is_partial {
                return Verdict::Rejected(vec![Diagnostic::new(
                    DiagnosticKind::WrapperNotPartial,
                    identity.location.clone(),
                    &identity.name,
                )]);
            }
        }
        AdapterBinding::Explicit { adapter } => {
            let mut diagnostics = Vec::new();
            if adapter.kind != DeclarationKind::Class {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::AdapterNotClassKind,
                    adapter.location.clone(),
                    &adapter.name,
                ));
            }
            if !adapter.is_partial {
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::AdapterNotPartial,
                    adapter.location.clone(),
                    &adapter.name,
                ));
            }
            if !diagnostics.is_empty() {
                return Verdict::Rejected(diagnostics);
            }
        }
    }

    debug!(wrapper = %identity.dotted_name(), primitive = %pairing.primitive, "mapping accepted");
    Verdict::Accepted(PrimitiveMapping {
        primitive: pairing.primitive,
        wrapper: identity.clone(),
        binding: binding.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use primjson_types::{Accessibility, Namespace, PrimitiveKind, SourceLocation, TypeIdentity};

    fn identity(name: &str, kind: DeclarationKind, is_partial: bool, line: u32) -> TypeIdentity {
        TypeIdentity {
            name: name.to_string(),
            kind,
            namespace: Namespace::Local("Sample".into()),
            accessibility: Accessibility::Public,
            is_partial,
            location: SourceLocation::new("Sample.cs", line, 5),
        }
    }

    fn wrapper(is_partial: bool) -> TypeDescription {
        TypeDescription::new(identity("DiceRoll", DeclarationKind::Record, is_partial, 10), Vec::new())
    }

    fn int_pairing() -> Vec<Pairing> {
        vec![Pairing { primitive: PrimitiveKind::Int32 }]
    }

    fn kinds(verdict: &Verdict) -> Vec<DiagnosticKind> {
        match verdict {
            Verdict::Rejected(diagnostics) => diagnostics.iter().map(|d| d.kind).collect(),
            Verdict::Accepted(_) => Vec::new(),
        }
    }

    #[test]
    fn zero_pairings_is_missing_pair_at_wrapper() {
        let verdict = validate(&wrapper(true), &[], &AdapterBinding::Absent);
        let Verdict::Rejected(diagnostics) = verdict else {
            panic!("expected rejection");
        };
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::NoConversionPair);
        assert_eq!(diagnostics[0].location.line, 10);
        assert_eq!(diagnostics[0].type_name, "DiceRoll");
    }

    #[test]
    fn several_pairings_are_ambiguous_even_with_bad_adapter() {
        let pairings = [
            Pairing { primitive: PrimitiveKind::Int32 },
            Pairing { primitive: PrimitiveKind::String },
        ];
        let adapter = identity("DiceRollConverter", DeclarationKind::Struct, false, 3);
        let verdict = validate(&wrapper(true), &pairings, &AdapterBinding::Explicit { adapter });
        assert_eq!(kinds(&verdict), [DiagnosticKind::AmbiguousConversionPairs]);
    }

    #[test]
    fn partial_requirement_applies_without_adapter() {
        let rejected = validate(&wrapper(false), &int_pairing(), &AdapterBinding::Absent);
        assert_eq!(kinds(&rejected), [DiagnosticKind::WrapperNotPartial]);

        let accepted = validate(&wrapper(true), &int_pairing(), &AdapterBinding::Absent);
        assert_eq!(
            accepted,
            Verdict::Accepted(PrimitiveMapping {
                primitive: PrimitiveKind::Int32,
                wrapper: wrapper(true).identity,
                binding: AdapterBinding::Absent,
            })
        );
    }

    #[test]
    fn explicit_adapter_does_not_require_partial_wrapper() {
        let adapter = identity("DiceRollConverter", DeclarationKind::Class, true, 3);
        let verdict = validate(&wrapper(false), &int_pairing(), &AdapterBinding::Explicit { adapter });
        assert!(verdict.is_accepted());
    }

    #[test]
    fn adapter_shape_defects_are_reported_at_adapter() {
        let not_class = identity("DiceRollConverter", DeclarationKind::Struct, true, 3);
        let verdict = validate(&wrapper(true), &int_pairing(), &AdapterBinding::Explicit { adapter: not_class });
        assert_eq!(kinds(&verdict), [DiagnosticKind::AdapterNotClassKind]);

        let not_partial = identity("DiceRollConverter", DeclarationKind::Class, false, 3);
        let verdict = validate(&wrapper(true), &int_pairing(), &AdapterBinding::Explicit { adapter: not_partial });
        assert_eq!(kinds(&verdict), [DiagnosticKind::AdapterNotPartial]);

        let both = identity("DiceRollConverter", DeclarationKind::Record, false, 3);
        let Verdict::Rejected(diagnostics) =
            validate(&wrapper(true), &int_pairing(), &AdapterBinding::Explicit { adapter: both })
        else {
            panic!("expected rejection");
        };
        assert_eq!(
            diagnostics.iter().map(|d| d.kind).collect::<Vec<_>>(),
            [DiagnosticKind::AdapterNotClassKind, DiagnosticKind::AdapterNotPartial]
        );
        assert!(diagnostics.iter().all(|d| d.type_name == "DiceRollConverter" && d.location.line == 3));
    }
}
