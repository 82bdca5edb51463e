// Tue Jan 13 2026 - Alex

use crate::ctypes::ScalarType;
use crate::structure::StructLayout;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum CType {
    Scalar(ScalarType),
    Struct(Arc<StructLayout>),
}

impl CType {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => t.name(),
            Self::Struct(layout) => layout.name(),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Self::Scalar(t) => t.size(),
            Self::Struct(layout) => layout.size(),
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            Self::Scalar(t) => Some(t),
            Self::Struct(_) => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Arc<StructLayout>> {
        match self {
            Self::Struct(layout) => Some(layout),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Char arrays travel as one combined string rather than `length` elements.
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Scalar(t) if t.is_char())
    }
}

impl PartialEq for CType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Struct(a), Self::Struct(b)) => Arc::ptr_eq(a, b) || a.name() == b.name(),
            _ => false,
        }
    }
}

impl From<ScalarType> for CType {
    fn from(t: ScalarType) -> Self {
        Self::Scalar(t)
    }
}

impl From<Arc<StructLayout>> for CType {
    fn from(layout: Arc<StructLayout>) -> Self {
        Self::Struct(layout)
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(t) => write!(f, "{}", t),
            Self::Struct(layout) => write!(f, "struct {}", layout.name()),
        }
    }
}
