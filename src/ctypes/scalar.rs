// Tue Jan 13 2026 - Alex

use crate::ctypes::{Endian, TypeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Int,
    UInt,
    Float,
    Char,
    String,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "string",
        };
        write!(f, "{}", s)
    }
}

/// A C scalar. `endian: None` means native byte order.
#[derive(Debug, Clone, Serialize)]
pub struct ScalarType {
    name: String,
    size: usize,
    kind: TypeKind,
    signed: bool,
    endian: Option<Endian>,
}

impl ScalarType {
    pub fn int(name: &str, size: usize) -> Self {
        Self::new(name, size, TypeKind::Int, true)
    }

    pub fn uint(name: &str, size: usize) -> Self {
        Self::new(name, size, TypeKind::UInt, false)
    }

    pub fn float(name: &str, size: usize) -> Self {
        Self::new(name, size, TypeKind::Float, true)
    }

    pub fn char(name: &str, signed: bool) -> Self {
        Self::new(name, 1, TypeKind::Char, signed)
    }

    /// NUL-terminated C string. Variable length, so it reports a size of 0.
    pub fn string(name: &str) -> Self {
        Self::new(name, 0, TypeKind::String, true)
    }

    fn new(name: &str, size: usize, kind: TypeKind, signed: bool) -> Self {
        Self {
            name: name.to_string(),
            size,
            kind,
            signed,
            endian: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn endian(&self) -> Option<Endian> {
        self.endian
    }

    pub fn effective_endian(&self) -> Endian {
        self.endian.unwrap_or_else(Endian::native)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, TypeKind::Int | TypeKind::UInt)
    }

    pub fn is_float(&self) -> bool {
        self.kind == TypeKind::Float
    }

    pub fn is_char(&self) -> bool {
        self.kind == TypeKind::Char
    }

    pub fn is_string(&self) -> bool {
        self.kind == TypeKind::String
    }

    fn is_byte_order_sensitive(&self) -> bool {
        matches!(self.kind, TypeKind::Int | TypeKind::UInt | TypeKind::Float) && self.size > 1
    }

    pub fn pack_code(&self) -> Option<String> {
        let base = match (self.kind, self.size) {
            (TypeKind::Int, 1) => "c",
            (TypeKind::UInt, 1) => "C",
            (TypeKind::Int, 2) => "s",
            (TypeKind::UInt, 2) => "S",
            (TypeKind::Int, 4) => "l",
            (TypeKind::UInt, 4) => "L",
            (TypeKind::Int, 8) => "q",
            (TypeKind::UInt, 8) => "Q",
            (TypeKind::Float, 4) => {
                return Some(
                    match self.endian {
                        None => "F",
                        Some(Endian::Little) => "e",
                        Some(Endian::Big) => "g",
                    }
                    .to_string(),
                )
            }
            (TypeKind::Float, 8) => {
                return Some(
                    match self.endian {
                        None => "D",
                        Some(Endian::Little) => "E",
                        Some(Endian::Big) => "G",
                    }
                    .to_string(),
                )
            }
            (TypeKind::Char, 1) => return Some("Z".to_string()),
            (TypeKind::String, _) => return Some("Z*".to_string()),
            _ => return None,
        };

        match self.endian {
            Some(endian) if self.size > 1 => Some(format!("{}{}", base, endian.pack_modifier())),
            _ => Some(base.to_string()),
        }
    }

    /// Substitutes the variant for `endian`. Types without a byte order are returned unchanged.
    pub fn with_endian(&self, endian: Endian) -> Result<Self, TypeError> {
        if self.pack_code().is_none() {
            return Err(TypeError::UnsupportedEndian {
                name: self.name.clone(),
                endian: endian.to_string(),
            });
        }
        if !self.is_byte_order_sensitive() || self.endian == Some(endian) {
            return Ok(self.clone());
        }

        let stem = self
            .name
            .strip_suffix("_le")
            .or_else(|| self.name.strip_suffix("_be"))
            .unwrap_or(&self.name);

        Ok(Self {
            name: format!("{}_{}", stem, endian.suffix()),
            endian: Some(endian),
            ..self.clone()
        })
    }

    pub fn min_value(&self) -> i128 {
        match self.kind {
            TypeKind::Int if self.size > 0 && self.size <= 8 => -(1i128 << (self.size * 8 - 1)),
            TypeKind::Char if self.signed => i8::MIN as i128,
            _ => 0,
        }
    }

    pub fn max_value(&self) -> i128 {
        match self.kind {
            TypeKind::Int if self.size > 0 && self.size <= 8 => (1i128 << (self.size * 8 - 1)) - 1,
            TypeKind::UInt if self.size > 0 && self.size <= 8 => (1i128 << (self.size * 8)) - 1,
            TypeKind::Char => u8::MAX as i128,
            _ => 0,
        }
    }
}

impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.size == other.size
            && self.signed == other.signed
            && (!self.is_byte_order_sensitive() || self.effective_endian() == other.effective_endian())
    }
}

impl Eq for ScalarType {}

impl Hash for ScalarType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.size.hash(state);
        self.signed.hash(state);
        if self.is_byte_order_sensitive() {
            self.effective_endian().hash(state);
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_codes() {
        assert_eq!(ScalarType::uint("uint8", 1).pack_code().unwrap(), "C");
        assert_eq!(ScalarType::int("int32", 4).pack_code().unwrap(), "l");
        assert_eq!(
            ScalarType::uint("uint32", 4).with_endian(Endian::Big).unwrap().pack_code().unwrap(),
            "L>"
        );
        assert_eq!(
            ScalarType::float("float64", 8).with_endian(Endian::Little).unwrap().pack_code().unwrap(),
            "E"
        );
        assert_eq!(ScalarType::char("char", true).pack_code().unwrap(), "Z");
        assert_eq!(ScalarType::string("string").pack_code().unwrap(), "Z*");
        assert!(ScalarType::uint("uint24", 3).pack_code().is_none());
    }

    #[test]
    fn test_endian_variant_naming() {
        let be = ScalarType::uint("uint16", 2).with_endian(Endian::Big).unwrap();
        assert_eq!(be.name(), "uint16_be");
        let le = be.with_endian(Endian::Little).unwrap();
        assert_eq!(le.name(), "uint16_le");
        assert_eq!(le.endian(), Some(Endian::Little));

        let byte = ScalarType::uint("uint8", 1).with_endian(Endian::Big).unwrap();
        assert_eq!(byte.name(), "uint8");
        assert_eq!(byte.endian(), None);
    }

    #[test]
    fn test_unsupported_endian_variant() {
        let err = ScalarType::int("int24", 3).with_endian(Endian::Big).unwrap_err();
        assert!(matches!(err, TypeError::UnsupportedEndian { ref name, .. } if name == "int24"));
    }

    #[test]
    fn test_equality_ignores_name() {
        let native = ScalarType::uint("uint32", 4);
        let explicit = native.with_endian(Endian::native()).unwrap();
        assert_eq!(native, explicit.with_name("DWORD"));
        assert_ne!(ScalarType::uint("a", 4), ScalarType::int("b", 4));
        assert_ne!(ScalarType::char("char", true), ScalarType::char("uchar", false));
    }

    #[test]
    fn test_value_ranges() {
        let t = ScalarType::int("int16", 2);
        assert_eq!(t.min_value(), -32768);
        assert_eq!(t.max_value(), 32767);
        assert_eq!(ScalarType::uint("uint64", 8).max_value(), u64::MAX as i128);
    }
}
