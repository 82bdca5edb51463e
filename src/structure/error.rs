// Tue Jan 13 2026 - Alex

use crate::ctypes::TypeError;
use crate::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Duplicate field {field} in struct {name}")]
    DuplicateField { name: String, field: String },
    #[error("Struct {0} cannot contain itself")]
    CyclicLayout(String),
    #[error("Invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },
    #[error("Unpacked values do not match layout of {0}")]
    LayoutMismatch(String),
}
