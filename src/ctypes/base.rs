// Tue Jan 13 2026 - Alex

use crate::ctypes::registry::{TypeEntry, TypeLayer};
use crate::ctypes::{CType, Endian, ScalarType};
use once_cell::sync::Lazy;

const INTEGERS: &[(&str, usize, bool)] = &[
    ("int8", 1, true),
    ("uint8", 1, false),
    ("int16", 2, true),
    ("uint16", 2, false),
    ("int32", 4, true),
    ("uint32", 4, false),
    ("int64", 8, true),
    ("uint64", 8, false),
];

const FLOATS: &[(&str, usize)] = &[("float32", 4), ("float64", 8)];

/// C names that are fixed-width everywhere. Address-size names live in the arch layer.
pub const BASE_TYPEDEFS: &[(&str, &str)] = &[
    ("byte", "uint8"),
    ("short", "int16"),
    ("ushort", "uint16"),
    ("int", "int32"),
    ("uint", "uint32"),
    ("long_long", "int64"),
    ("ulong_long", "uint64"),
    ("float", "float32"),
    ("double", "float64"),
];

/// Names that get `_le`, `_be`, `_ne` and `_net` forms.
pub const ENDIAN_NAMES: &[&str] = &[
    "int16", "uint16", "int32", "uint32", "int64", "uint64", "short", "ushort", "int", "uint",
    "long_long", "ulong_long", "float32", "float64", "float", "double",
];

static BASE_LAYER: Lazy<TypeLayer> = Lazy::new(build_base_layer);

pub fn base_layer() -> TypeLayer {
    BASE_LAYER.clone()
}

fn build_base_layer() -> TypeLayer {
    let mut layer = TypeLayer::new("base");

    let mut scalars: Vec<ScalarType> = Vec::new();
    for &(name, size, signed) in INTEGERS {
        if signed {
            scalars.push(ScalarType::int(name, size));
        } else {
            scalars.push(ScalarType::uint(name, size));
        }
    }
    for &(name, size) in FLOATS {
        scalars.push(ScalarType::float(name, size));
    }

    for scalar in scalars {
        if scalar.size() > 1 {
            for endian in [Endian::Little, Endian::Big] {
                if let Ok(variant) = scalar.with_endian(endian) {
                    define(&mut layer, variant);
                }
            }
        }
        define(&mut layer, scalar);
    }

    define(&mut layer, ScalarType::char("char", true));
    define(&mut layer, ScalarType::char("uchar", false));
    define(&mut layer, ScalarType::string("string"));

    for &(name, target) in BASE_TYPEDEFS {
        alias(&mut layer, name, target);
    }

    for &name in ENDIAN_NAMES {
        let target = BASE_TYPEDEFS
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, target)| *target)
            .unwrap_or(name);
        if name != target {
            alias(&mut layer, &format!("{}_le", name), &format!("{}_le", target));
            alias(&mut layer, &format!("{}_be", name), &format!("{}_be", target));
        }
        alias(&mut layer, &format!("{}_ne", name), target);
        alias(&mut layer, &format!("{}_net", name), &format!("{}_be", target));
    }

    layer
}

fn define(layer: &mut TypeLayer, scalar: ScalarType) {
    let name = scalar.name().to_string();
    layer.insert(&name, TypeEntry::Type(CType::Scalar(scalar)));
}

/// Base aliases always point at a terminal entry of the same layer.
fn alias(layer: &mut TypeLayer, name: &str, target: &str) {
    if let Some(entry) = layer.get(target).cloned() {
        layer.insert(
            name,
            TypeEntry::Alias {
                chain: vec![target.to_string()],
                target: entry.ctype().clone(),
            },
        );
    } else {
        log::warn!("base typedef {} -> {} has no target", name, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::TypeKind;

    fn scalar<'a>(layer: &'a TypeLayer, name: &str) -> &'a ScalarType {
        layer.get(name).unwrap().ctype().as_scalar().unwrap()
    }

    #[test]
    fn test_base_scalars() {
        let layer = base_layer();
        assert_eq!(scalar(&layer, "int64").size(), 8);
        assert_eq!(scalar(&layer, "uint16_be").endian(), Some(Endian::Big));
        assert_eq!(scalar(&layer, "uchar").kind(), TypeKind::Char);
        assert!(!scalar(&layer, "uchar").is_signed());
        assert_eq!(scalar(&layer, "string").kind(), TypeKind::String);
    }

    #[test]
    fn test_endian_aliases() {
        let layer = base_layer();
        assert_eq!(scalar(&layer, "int_be").pack_code().unwrap(), "l>");
        assert_eq!(scalar(&layer, "ushort_le").pack_code().unwrap(), "S<");
        assert_eq!(scalar(&layer, "uint32_net").endian(), Some(Endian::Big));
        assert_eq!(scalar(&layer, "double_ne").endian(), None);
        assert_eq!(scalar(&layer, "float_be").pack_code().unwrap(), "g");
        assert!(layer.get("short_ne").unwrap().is_alias());
    }
}
