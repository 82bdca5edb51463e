// Tue Jan 13 2026 - Alex

use crate::ctypes::CType;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ctype: CType,
    length: Option<usize>,
}

impl Field {
    pub fn new(name: &str, ctype: CType, length: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            ctype,
            length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ctype(&self) -> &CType {
        &self.ctype
    }

    pub fn length(&self) -> Option<usize> {
        self.length
    }

    pub fn is_array(&self) -> bool {
        self.length.is_some()
    }

    /// Fixed-length char arrays and C strings hold one combined value.
    pub fn is_string(&self) -> bool {
        match &self.ctype {
            CType::Scalar(t) => t.is_string() || (t.is_char() && self.length.is_some()),
            CType::Struct(_) => false,
        }
    }

    pub fn size(&self) -> usize {
        self.ctype.size() * self.length.unwrap_or(1)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.length {
            Some(length) => write!(f, "{} {}[{}]", self.ctype, self.name, length),
            None => write!(f, "{} {}", self.ctype, self.name),
        }
    }
}
