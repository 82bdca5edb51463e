// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Unknown type: {0}")]
    UnknownType(String),
    #[error("Cannot typedef {name} to unresolvable type {target}")]
    InvalidTypedef { name: String, target: String },
    #[error("Typedef {name} -> {target} would create a cycle")]
    CyclicTypedef { name: String, target: String },
    #[error("Invalid endianness: {0}")]
    InvalidEndian(String),
    #[error("Unsupported endianness {endian} for type {name}")]
    UnsupportedEndian { name: String, endian: String },
    #[error("Unknown architecture: {0}")]
    UnknownArch(String),
    #[error("Unknown operating system: {0}")]
    UnknownOs(String),
}
