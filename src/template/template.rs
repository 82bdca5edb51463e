// Tue Jan 13 2026 - Alex

use crate::ctypes::{Endian, ScalarType, TypeKind, Value};
use crate::template::TemplateError;
use bytes::{Buf, BufMut, BytesMut};
use std::fmt;

/// One run of a single scalar type. Char runs longer than one element
/// travel as a single NUL-padded string.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateElement {
    scalar: ScalarType,
    count: usize,
    as_string: bool,
}

impl TemplateElement {
    pub fn new(scalar: ScalarType, length: Option<usize>) -> Self {
        let as_string = scalar.is_char() && length.is_some();
        Self {
            count: length.unwrap_or(1),
            scalar,
            as_string,
        }
    }

    pub fn scalar(&self) -> &ScalarType {
        &self.scalar
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_string(&self) -> bool {
        self.as_string || self.scalar.is_string()
    }

    /// Number of flat values this element consumes or produces.
    pub fn value_count(&self) -> usize {
        if self.is_string() {
            1
        } else {
            self.count
        }
    }

    pub fn size(&self) -> usize {
        self.scalar.size() * self.count
    }

    fn pack_code(&self) -> Result<String, TemplateError> {
        let code = self
            .scalar
            .pack_code()
            .ok_or_else(|| TemplateError::UnsupportedType(self.scalar.name().to_string()))?;
        if self.scalar.is_string() {
            Ok(code)
        } else {
            Ok(format!("{}{}", code, self.count))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    elements: Vec<TemplateElement>,
    pack_string: String,
    size: usize,
    variable: bool,
}

impl Template {
    pub fn new(elements: Vec<TemplateElement>) -> Result<Self, TemplateError> {
        let mut pack_string = String::new();
        for element in &elements {
            pack_string.push_str(&element.pack_code()?);
        }
        let size = elements.iter().map(|e| e.size()).sum();
        let variable = elements.iter().any(|e| e.scalar.is_string());

        Ok(Self {
            elements,
            pack_string,
            size,
            variable,
        })
    }

    pub fn elements(&self) -> &[TemplateElement] {
        &self.elements
    }

    pub fn pack_string(&self) -> &str {
        &self.pack_string
    }

    /// Fixed byte size. Variable-length strings contribute nothing.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_variable(&self) -> bool {
        self.variable
    }

    pub fn value_count(&self) -> usize {
        self.elements.iter().map(|e| e.value_count()).sum()
    }

    pub fn pack(&self, values: &[Value]) -> Result<Vec<u8>, TemplateError> {
        let expected = self.value_count();
        if values.len() != expected {
            return Err(TemplateError::ValueCount {
                expected,
                actual: values.len(),
            });
        }

        let mut buf = BytesMut::with_capacity(self.size);
        let mut values = values.iter();
        for element in &self.elements {
            if element.as_string {
                let value = values.next().ok_or(TemplateError::ValueCount {
                    expected,
                    actual: 0,
                })?;
                put_fixed_string(&mut buf, element, value)?;
                continue;
            }
            for _ in 0..element.value_count() {
                let value = values.next().ok_or(TemplateError::ValueCount {
                    expected,
                    actual: 0,
                })?;
                put_scalar(&mut buf, &element.scalar, value)?;
            }
        }
        Ok(buf.to_vec())
    }

    pub fn unpack(&self, data: &[u8]) -> Result<Vec<Value>, TemplateError> {
        let mut buf = data;
        let mut values = Vec::with_capacity(self.value_count());

        for element in &self.elements {
            if element.as_string {
                ensure(&buf, element.count)?;
                let raw = &buf[..element.count];
                let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
                values.push(Value::Bytes(raw[..end].to_vec()));
                buf.advance(element.count);
                continue;
            }
            for _ in 0..element.value_count() {
                values.push(get_scalar(&mut buf, &element.scalar)?);
            }
        }
        Ok(values)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.pack_string, self.size)
    }
}

fn ensure(buf: &&[u8], needed: usize) -> Result<(), TemplateError> {
    if buf.remaining() < needed {
        return Err(TemplateError::InsufficientData {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}

fn put_fixed_string(buf: &mut BytesMut, element: &TemplateElement, value: &Value) -> Result<(), TemplateError> {
    let bytes = match value {
        Value::Bytes(b) => b.as_slice(),
        _ => {
            return Err(TemplateError::TypeMismatch {
                name: element.scalar.name().to_string(),
                expected: TypeKind::String,
            })
        }
    };
    if bytes.len() > element.count {
        return Err(TemplateError::StringTooLong {
            name: element.scalar.name().to_string(),
            length: bytes.len(),
            max: element.count,
        });
    }
    buf.put_slice(bytes);
    buf.put_bytes(0, element.count - bytes.len());
    Ok(())
}

pub(crate) fn put_scalar(buf: &mut BytesMut, scalar: &ScalarType, value: &Value) -> Result<(), TemplateError> {
    let mismatch = || TemplateError::TypeMismatch {
        name: scalar.name().to_string(),
        expected: scalar.kind(),
    };
    let endian = scalar.effective_endian();

    match scalar.kind() {
        TypeKind::Int | TypeKind::UInt => {
            let v = value.as_i128().ok_or_else(mismatch)?;
            if v < scalar.min_value() || v > scalar.max_value() {
                return Err(TemplateError::ValueOutOfRange {
                    name: scalar.name().to_string(),
                    value: v.to_string(),
                });
            }
            let bits = if v < 0 { v as i64 as u64 } else { v as u64 };
            match endian {
                Endian::Little => buf.put_uint_le(bits, scalar.size()),
                Endian::Big => buf.put_uint(bits, scalar.size()),
            }
        }
        TypeKind::Float => {
            let v = value.as_f64().ok_or_else(mismatch)?;
            match (scalar.size(), endian) {
                (4, Endian::Little) => buf.put_f32_le(v as f32),
                (4, Endian::Big) => buf.put_f32(v as f32),
                (8, Endian::Little) => buf.put_f64_le(v),
                (8, Endian::Big) => buf.put_f64(v),
                _ => return Err(TemplateError::UnsupportedType(scalar.name().to_string())),
            }
        }
        TypeKind::Char => {
            let byte = match value {
                Value::Bytes(b) if b.len() == 1 => b[0] as i128,
                other => other.as_i128().ok_or_else(mismatch)?,
            };
            if byte < scalar.min_value() || byte > scalar.max_value() {
                return Err(TemplateError::ValueOutOfRange {
                    name: scalar.name().to_string(),
                    value: byte.to_string(),
                });
            }
            buf.put_u8(byte as u8);
        }
        TypeKind::String => {
            let bytes = value.as_bytes().ok_or_else(mismatch)?;
            buf.put_slice(bytes);
            buf.put_u8(0);
        }
    }
    Ok(())
}

pub(crate) fn get_scalar(buf: &mut &[u8], scalar: &ScalarType) -> Result<Value, TemplateError> {
    let size = scalar.size();
    ensure(buf, size)?;
    let endian = scalar.effective_endian();

    let value = match scalar.kind() {
        TypeKind::Int => Value::Int(match endian {
            Endian::Little => buf.get_int_le(size),
            Endian::Big => buf.get_int(size),
        }),
        TypeKind::UInt => Value::UInt(match endian {
            Endian::Little => buf.get_uint_le(size),
            Endian::Big => buf.get_uint(size),
        }),
        TypeKind::Float => match (size, endian) {
            (4, Endian::Little) => Value::Float(buf.get_f32_le() as f64),
            (4, Endian::Big) => Value::Float(buf.get_f32() as f64),
            (8, Endian::Little) => Value::Float(buf.get_f64_le()),
            (8, Endian::Big) => Value::Float(buf.get_f64()),
            _ => return Err(TemplateError::UnsupportedType(scalar.name().to_string())),
        },
        TypeKind::Char => Value::Char(buf.get_u8()),
        TypeKind::String => {
            let end = buf.iter().position(|&b| b == 0);
            let bytes = buf[..end.unwrap_or(buf.len())].to_vec();
            let consumed = end.map(|e| e + 1).unwrap_or(buf.len());
            buf.advance(consumed);
            Value::Bytes(bytes)
        }
    };
    Ok(value)
}
