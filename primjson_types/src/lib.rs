/* Declared-type model for the primitive JSON converter generator
 *
 * Holds the data handed from discovery to the generator: type identities,
 * conversion signatures, adapter bindings and the accepted primitive mapping,
 * plus the YAML declaration format used in place of compiler discovery.
 */

pub mod file;
pub mod primitive;
pub mod types;

pub use file::{DeclarationFile, DeclaredConversion, DeclaredType};
pub use primitive::{PrimitiveKind, normalize_type_name};
pub use types::*;
