// Tue Jan 13 2026 - Alex

use crate::ctypes::TypeError;
use crate::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexdumpError {
    #[error("Unsupported hexdump type: {0}")]
    UnsupportedType(String),
    #[error("Invalid format: {0} (expected hexdump or od)")]
    InvalidFormat(String),
    #[error("Invalid base: {0} (expected 2, 8, 10 or 16)")]
    InvalidBase(u32),
    #[error("Malformed line {line}: {message}")]
    MalformedLine { line: usize, message: String },
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}
