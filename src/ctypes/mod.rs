// Tue Jan 13 2026 - Alex

pub mod arch;
pub mod base;
pub mod ctype;
pub mod endian;
pub mod error;
pub mod os;
pub mod registry;
pub mod scalar;
pub mod value;

pub use arch::Arch;
pub use ctype::CType;
pub use endian::Endian;
pub use error::TypeError;
pub use os::Os;
pub use registry::{TypeEntry, TypeLayer, TypeRegistry, TypeTarget};
pub use scalar::{ScalarType, TypeKind};
pub use value::Value;
