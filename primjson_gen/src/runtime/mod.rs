//! Runtime model of synthesized adapters.
//!
//! Executes the same `AdapterIr` the converter synthesizer renders, so the
//! read/write contract of generated code can be checked without the host.

pub mod accessors;
pub mod interpreter;
pub mod registry;
pub mod token;
pub mod value;

pub use interpreter::Adapter;
pub use registry::AdapterRegistry;
pub use token::{JsonToken, TokenReader, TokenWriter};
pub use value::{DecimalText, PrimitiveValue, WrapperValue};
