// Tue Jan 13 2026 - Alex

pub mod config;
pub mod ctypes;
pub mod hexdump;
pub mod structure;
pub mod template;
pub mod ui;

pub use config::{Config, ConfigError};
pub use ctypes::{Arch, CType, Endian, Os, ScalarType, TypeError, TypeRegistry, Value};
pub use hexdump::{Format, HexdumpError, HexdumpFormatter, HexdumpParser, ParserConfig};
pub use structure::{StructBuilder, StructInstance, StructLayout, StructureError};
pub use template::{Template, TemplateCompiler, TemplateError};
