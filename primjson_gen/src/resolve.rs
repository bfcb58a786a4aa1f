/* Pairing of a wrapper's declared conversions into wrapper <-> primitive mappings */

use indexmap::IndexSet;
use primjson_types::{PrimitiveKind, TypeDescription};
use serde_derive::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A mutually-inverse pair of conversions between the wrapper and `primitive`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub primitive: PrimitiveKind,
}

/* A side of a conversion is relevant when it names the wrapper itself or a supported primitive */
fn is_interesting(type_name: &str, wrapper_name: &str) -> bool {
    type_name == wrapper_name || PrimitiveKind::from_metadata_name(type_name).is_some()
}

/// Enumerate every wrapper/primitive pairing, in declaration order.
///
/// This only enumerates; deciding whether zero or several pairings is an
/// error belongs to the validator.
pub fn resolve_pairings(description: &TypeDescription) -> Vec<Pairing> {
    let wrapper = description.identity.name.as_str();

    let interesting: IndexSet<(&str, &str)> = description
        .conversions()
        .iter()
        .filter(|c| is_interesting(&c.input, wrapper) && is_interesting(&c.output, wrapper))
        .map(|c| (c.input.as_str(), c.output.as_str()))
        .collect();

    let mut consumed: HashSet<(&str, &str)> = HashSet::new();
    let mut pairings = Vec::new();

    for &(input, output) in &interesting {
        let signature = (input, output);
        let inverse = (output, input);
        if consumed.contains(&signature) || consumed.contains(&inverse) || !interesting.contains(&inverse) {
            continue;
        }
        consumed.insert(signature);
        consumed.insert(inverse);

        /* Exactly one side must be the wrapper; the other must be a primitive */
        let primitive_side = match (input == wrapper, output == wrapper) {
            (true, false) => output,
            (false, true) => input,
            _ => continue,
        };
        let Some(primitive) = PrimitiveKind::from_metadata_name(primitive_side) else {
            continue;
        };

        debug!(wrapper, %primitive, "resolved conversion pairing");
        pairings.push(Pairing { primitive });
    }

    pairings
}
