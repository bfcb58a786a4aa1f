pub mod companion;
pub mod converter;
pub mod ir;
pub mod marshal;
pub mod text;

pub use companion::{SynthesizedCompanion, synthesize_companion};
pub use converter::{ConverterSynthesizer, SynthesizedAdapter};
pub use ir::{ADAPTER_IR_VERSION, AdapterIr, AdapterOrigin};
pub use marshal::{MarshalRule, NullHandling, ReadAccessor, TokenKind, WriteAccessor, rule_for};
pub use text::SourceBuilder;
