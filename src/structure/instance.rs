// Tue Jan 13 2026 - Alex

use crate::ctypes::{CType, Endian, ScalarType, TypeKind, Value};
use crate::structure::{EachField, Field, StructLayout, StructureError};
use std::fmt;
use std::sync::Arc;

/// Field values of one struct, always exactly the fields its layout declares.
#[derive(Clone)]
pub struct StructInstance {
    layout: Arc<StructLayout>,
    values: Vec<Value>,
}

impl StructInstance {
    pub fn new(layout: Arc<StructLayout>) -> Self {
        let values = layout
            .fields()
            .map(|f| StructLayout::default_value(f.ctype(), f.length()))
            .collect();
        Self { layout, values }
    }

    pub fn from_bytes(layout: Arc<StructLayout>, data: &[u8], endian: Option<Endian>) -> Result<Self, StructureError> {
        let mut instance = Self::new(layout);
        instance.unpack(data, endian)?;
        Ok(instance)
    }

    pub fn layout(&self) -> &Arc<StructLayout> {
        &self.layout
    }

    pub fn name(&self) -> &str {
        self.layout.name()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn entry(&self, index: usize) -> Option<(&Field, &Value)> {
        Some((self.layout.field_at(index)?, self.values.get(index)?))
    }

    fn index_of(&self, name: &str) -> Result<usize, StructureError> {
        self.layout
            .field_index(name)
            .ok_or_else(|| StructureError::FieldNotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&Value, StructureError> {
        let index = self.index_of(name)?;
        Ok(&self.values[index])
    }

    /// Mutable access skips shape checks; prefer [`StructInstance::set`].
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value, StructureError> {
        let index = self.index_of(name)?;
        Ok(&mut self.values[index])
    }

    /// Fixed `char` arrays hold one NUL-padded string; bytes after an embedded NUL do not survive
    /// a pack/unpack round trip.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), StructureError> {
        let index = self.index_of(name)?;
        let field = self.layout.field_at(index).ok_or_else(|| StructureError::FieldNotFound(name.to_string()))?;
        let value = normalize_field(field, value.into())?;
        self.values[index] = value;
        Ok(())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout.field_names().zip(self.values.iter())
    }

    pub fn each_field(&self) -> EachField<'_> {
        EachField::new(self)
    }

    /// Flat value list in wire order, matching the layout's template.
    pub fn values(&self) -> Vec<Value> {
        let mut flat = Vec::new();
        for entry in self.each_field() {
            match (entry.field.ctype(), entry.value) {
                (CType::Struct(_), _) => {}
                (CType::Scalar(_), Value::Array(items)) => flat.extend(items.iter().cloned()),
                (CType::Scalar(_), value) => flat.push(value.clone()),
            }
        }
        flat
    }

    pub fn pack(&self, endian: Option<Endian>) -> Result<Vec<u8>, StructureError> {
        let template = self.layout.template(endian)?;
        Ok(template.pack(&self.values())?)
    }

    pub fn unpack(&mut self, data: &[u8], endian: Option<Endian>) -> Result<&mut Self, StructureError> {
        let template = self.layout.template(endian)?;
        let flat = template.unpack(data)?;
        let mut values = flat.into_iter();
        self.populate(&mut values)?;
        if values.next().is_some() {
            return Err(StructureError::LayoutMismatch(self.name().to_string()));
        }
        Ok(self)
    }

    fn populate(&mut self, values: &mut impl Iterator<Item = Value>) -> Result<(), StructureError> {
        let layout = self.layout.clone();
        let mismatch = || StructureError::LayoutMismatch(layout.name().to_string());

        for (index, field) in layout.fields().enumerate() {
            let slot = &mut self.values[index];
            match (field.ctype(), field.length()) {
                (CType::Struct(_), None) => {
                    slot.as_struct_mut().ok_or_else(mismatch)?.populate(values)?;
                }
                (CType::Struct(_), Some(_)) => {
                    let Value::Array(items) = slot else {
                        return Err(mismatch());
                    };
                    for item in items.iter_mut() {
                        item.as_struct_mut().ok_or_else(mismatch)?.populate(values)?;
                    }
                }
                (CType::Scalar(_), Some(length)) if !field.is_string() => {
                    let items: Vec<Value> = values.by_ref().take(length).collect();
                    if items.len() != length {
                        return Err(mismatch());
                    }
                    *slot = Value::Array(items);
                }
                (CType::Scalar(_), _) => {
                    *slot = values.next().ok_or_else(mismatch)?;
                }
            }
        }
        Ok(())
    }
}

fn invalid(field: &Field, message: impl Into<String>) -> StructureError {
    StructureError::InvalidValue {
        field: field.name().to_string(),
        message: message.into(),
    }
}

fn normalize_field(field: &Field, value: Value) -> Result<Value, StructureError> {
    match (field.ctype(), field.length()) {
        (CType::Struct(layout), None) => match value {
            Value::Struct(s) if s.name() == layout.name() => Ok(Value::Struct(s)),
            _ => Err(invalid(field, format!("expected struct {}", layout.name()))),
        },
        (CType::Struct(layout), Some(length)) => match value {
            Value::Array(items)
                if items.len() == length
                    && items.iter().all(|v| matches!(v, Value::Struct(s) if s.name() == layout.name())) =>
            {
                Ok(Value::Array(items))
            }
            _ => Err(invalid(field, format!("expected {} x struct {}", length, layout.name()))),
        },
        (CType::Scalar(_), Some(length)) if field.is_string() => match value {
            Value::Bytes(b) if b.len() <= length => Ok(Value::Bytes(b)),
            Value::Bytes(b) => Err(invalid(field, format!("{} bytes exceed length {}", b.len(), length))),
            _ => Err(invalid(field, "expected a string")),
        },
        (CType::Scalar(scalar), Some(length)) => match value {
            Value::Array(items) if items.len() == length => items
                .into_iter()
                .map(|v| normalize_scalar(field, scalar, v))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            _ => Err(invalid(field, format!("expected {} elements", length))),
        },
        (CType::Scalar(scalar), None) => normalize_scalar(field, scalar, value),
    }
}

fn normalize_scalar(field: &Field, scalar: &ScalarType, value: Value) -> Result<Value, StructureError> {
    let out_of_range = |v: i128| invalid(field, format!("{} out of range for {}", v, scalar.name()));

    match scalar.kind() {
        TypeKind::Int | TypeKind::UInt | TypeKind::Char => {
            let v = match &value {
                Value::Bytes(b) if scalar.is_char() && b.len() == 1 => b[0] as i128,
                other => other
                    .as_i128()
                    .ok_or_else(|| invalid(field, format!("expected {}", scalar.kind())))?,
            };
            if v < scalar.min_value() || v > scalar.max_value() {
                return Err(out_of_range(v));
            }
            Ok(match scalar.kind() {
                TypeKind::Int => Value::Int(v as i64),
                TypeKind::UInt => Value::UInt(v as u64),
                _ => Value::Char(v as u8),
            })
        }
        TypeKind::Float => value
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| invalid(field, "expected float")),
        TypeKind::String => match value {
            Value::Bytes(b) => Ok(Value::Bytes(b)),
            _ => Err(invalid(field, "expected a string")),
        },
    }
}

impl PartialEq for StructInstance {
    fn eq(&self, other: &Self) -> bool {
        self.layout.name() == other.layout.name() && self.values == other.values
    }
}

impl fmt::Debug for StructInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.layout.name());
        for (name, value) in self.fields() {
            s.field(name, value);
        }
        s.finish()
    }
}

impl fmt::Display for StructInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", self.layout.name())?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::TypeRegistry;
    use crate::structure::StructBuilder;

    fn packet(registry: &TypeRegistry) -> Arc<StructLayout> {
        StructBuilder::new("packet", registry)
            .field("length", "uint32")
            .array("data", "uchar", 4)
            .endian(Endian::Big)
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults_cover_every_field() {
        let registry = TypeRegistry::new();
        let instance = packet(&registry).new_instance();
        assert_eq!(instance.len(), 2);
        assert_eq!(instance.get("length").unwrap(), &Value::UInt(0));
        assert_eq!(instance.get("data").unwrap(), &Value::Bytes(Vec::new()));
    }

    #[test]
    fn test_pack_concrete_packet() {
        let registry = TypeRegistry::new();
        let mut instance = packet(&registry).new_instance();
        instance.set("length", 5u32).unwrap();
        instance.set("data", "AB").unwrap();

        let bytes = instance.pack(None).unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x05, 0x41, 0x42, 0x00, 0x00]);

        let decoded = StructInstance::from_bytes(packet(&registry), &bytes, None).unwrap();
        assert_eq!(decoded, instance);
    }

    #[test]
    fn test_set_normalizes_and_checks() {
        let registry = TypeRegistry::new();
        let layout = StructBuilder::new("s", &registry)
            .field("a", "int16")
            .field("c", "char")
            .array("v", "uint8", 2)
            .build()
            .unwrap();
        let mut instance = layout.new_instance();

        instance.set("a", 7u8).unwrap();
        assert_eq!(instance.get("a").unwrap(), &Value::Int(7));
        instance.set("c", b'x').unwrap();
        assert_eq!(instance.get("c").unwrap(), &Value::Char(b'x'));

        assert!(matches!(instance.set("a", 40000u32), Err(StructureError::InvalidValue { .. })));
        assert!(matches!(instance.set("v", vec![Value::UInt(1)]), Err(StructureError::InvalidValue { .. })));
        assert!(matches!(instance.set("zz", 1u8), Err(StructureError::FieldNotFound(_))));
    }

    #[test]
    fn test_nested_round_trip() {
        let registry = TypeRegistry::new();
        let point = StructBuilder::new("point", &registry)
            .field("x", "int32")
            .field("y", "int32")
            .build()
            .unwrap();
        let shape = StructBuilder::new("shape", &registry)
            .field("kind", "uint8")
            .field_type("origin", CType::Struct(point.clone()), None)
            .field_type("corners", CType::Struct(point.clone()), Some(2))
            .array("name", "char", 6)
            .build()
            .unwrap();

        let mut instance = shape.new_instance();
        instance.set("kind", 3u8).unwrap();
        let mut origin = point.new_instance();
        origin.set("x", -4i32).unwrap();
        origin.set("y", 9i32).unwrap();
        instance.set("origin", origin.clone()).unwrap();
        let mut corner = point.new_instance();
        corner.set("x", 1i32).unwrap();
        instance
            .set("corners", vec![Value::Struct(corner), Value::Struct(origin)])
            .unwrap();
        instance.set("name", "tri").unwrap();

        let bytes = instance.pack(Some(Endian::Little)).unwrap();
        assert_eq!(bytes.len(), 1 + 8 + 16 + 6);
        assert_eq!(&bytes[1..5], &(-4i32).to_le_bytes());

        let mut decoded = shape.new_instance();
        decoded.unpack(&bytes, Some(Endian::Little)).unwrap();
        assert_eq!(decoded, instance);
    }

    #[test]
    fn test_boundary_values_round_trip() {
        let registry = TypeRegistry::new();
        let layout = StructBuilder::new("limits", &registry)
            .field("i8", "int8")
            .field("u16", "uint16")
            .field("i32", "int32")
            .field("i64_min", "int64")
            .field("i64_max", "int64")
            .field("u64", "uint64")
            .field("c", "char")
            .field("f", "float32")
            .array("fs", "float32", 2)
            .build()
            .unwrap();

        let mut instance = layout.new_instance();
        instance.set("i8", i8::MIN).unwrap();
        instance.set("u16", u16::MAX).unwrap();
        instance.set("i32", i32::MIN).unwrap();
        instance.set("i64_min", i64::MIN).unwrap();
        instance.set("i64_max", i64::MAX).unwrap();
        instance.set("u64", u64::MAX).unwrap();
        instance.set("c", -128i32).unwrap();
        instance.set("f", 1.1f32).unwrap();
        instance
            .set("fs", vec![Value::from(-f32::MAX), Value::from(f32::MIN_POSITIVE)])
            .unwrap();

        assert_eq!(instance.get("c").unwrap(), &Value::Char(0x80));
        assert!(instance.set("u64", -1i32).is_err());
        assert!(instance.set("c", -129i32).is_err());

        for endian in [Some(Endian::Little), Some(Endian::Big)] {
            let bytes = instance.pack(endian).unwrap();
            assert_eq!(bytes.len(), layout.size());
            let decoded = StructInstance::from_bytes(layout.clone(), &bytes, endian).unwrap();
            assert_eq!(decoded, instance);
            assert_eq!(decoded.get("u64").unwrap(), &Value::UInt(u64::MAX));
            assert_eq!(decoded.get("f").unwrap(), &Value::Float(1.1f32 as f64));
        }
    }

    #[test]
    fn test_unpack_short_buffer() {
        let registry = TypeRegistry::new();
        let mut instance = packet(&registry).new_instance();
        assert!(matches!(
            instance.unpack(&[0, 0, 0], None),
            Err(StructureError::Template(_))
        ));
    }
}
