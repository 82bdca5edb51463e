// Tue Jan 13 2026 - Alex

use crate::ctypes::{TypeError, TypeKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Unsupported type for packing: {0}")]
    UnsupportedType(String),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error("Expected {expected} values, got {actual}")]
    ValueCount { expected: usize, actual: usize },
    #[error("Value {value} out of range for {name}")]
    ValueOutOfRange { name: String, value: String },
    #[error("Expected a {expected} value for {name}")]
    TypeMismatch { name: String, expected: TypeKind },
    #[error("String of {length} bytes does not fit in {name}[{max}]")]
    StringTooLong { name: String, length: usize, max: usize },
    #[error("Need {needed} bytes, only {available} available")]
    InsufficientData { needed: usize, available: usize },
}
