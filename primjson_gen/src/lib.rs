/* Converter generator for single-primitive value objects
 *
 * Pipeline: discovery -> resolve (pairings) -> validate (mapping or
 * diagnostics) -> codegen (converter + companion text). The runtime module
 * executes the same adapter IR the converter text is rendered from.
 */

pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod errors;
pub mod pipeline;
pub mod resolve;
pub mod runtime;
pub mod validate;

pub use config::GeneratorOptions;
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use discovery::{DeclarationSet, TypeSource};
pub use errors::{GenError, GenResult, RuntimeError, RuntimeResult};
pub use pipeline::{GeneratedSource, GenerationOutput, Generator, GeneratorSink};
