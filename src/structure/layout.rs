// Tue Jan 13 2026 - Alex

use crate::ctypes::{CType, Endian, TypeKind, Value};
use crate::structure::{Field, StructInstance, StructureError, TemplateCache};
use crate::template::{Template, TemplateCompiler};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Ordered field list. Insertion order is wire order; the index doubles as the
/// accessor table for [`StructInstance`].
pub struct StructLayout {
    name: String,
    fields: IndexMap<String, Field>,
    endian: Option<Endian>,
    templates: TemplateCache,
}

impl StructLayout {
    pub(crate) fn new(name: &str, fields: IndexMap<String, Field>, endian: Option<Endian>) -> Self {
        Self {
            name: name.to_string(),
            fields,
            endian,
            templates: TemplateCache::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endian(&self) -> Option<Endian> {
        self.endian
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    pub fn field_at(&self, index: usize) -> Option<&Field> {
        self.fields.get_index(index).map(|(_, f)| f)
    }

    pub fn size(&self) -> usize {
        self.fields.values().map(|f| f.size()).sum()
    }

    /// True if `name` is this struct or appears anywhere in its nested field types.
    pub fn depends_on(&self, name: &str) -> bool {
        self.name == name
            || self.fields.values().any(|f| match f.ctype() {
                CType::Struct(inner) => inner.depends_on(name),
                CType::Scalar(_) => false,
            })
    }

    /// Returns the template for `endian`, falling back to the layout's own tag.
    pub fn template(&self, endian: Option<Endian>) -> Result<Arc<Template>, StructureError> {
        let key = endian.or(self.endian);
        let template = self.templates.get_or_compile(key, || {
            let fields: Vec<(CType, Option<usize>)> = self
                .fields
                .values()
                .map(|f| (f.ctype().clone(), f.length()))
                .collect();
            TemplateCompiler::new().with_endian(key).compile(&fields)
        })?;
        Ok(template)
    }

    pub fn cached_templates(&self) -> usize {
        self.templates.size()
    }

    pub fn new_instance(self: &Arc<Self>) -> StructInstance {
        StructInstance::new(self.clone())
    }

    pub fn default_value(ctype: &CType, length: Option<usize>) -> Value {
        match (ctype, length) {
            (CType::Struct(layout), None) => Value::Struct(layout.new_instance()),
            (CType::Struct(layout), Some(n)) => Value::Array((0..n).map(|_| Value::Struct(layout.new_instance())).collect()),
            (CType::Scalar(t), Some(_)) if t.is_char() || t.is_string() => Value::Bytes(Vec::new()),
            (CType::Scalar(_), Some(n)) => Value::Array((0..n).map(|_| Self::default_value(ctype, None)).collect()),
            (CType::Scalar(t), None) => match t.kind() {
                TypeKind::Int => Value::Int(0),
                TypeKind::UInt => Value::UInt(0),
                TypeKind::Float => Value::Float(0.0),
                TypeKind::Char => Value::Char(0),
                TypeKind::String => Value::Bytes(Vec::new()),
            },
        }
    }
}

impl fmt::Debug for StructLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructLayout")
            .field("name", &self.name)
            .field("fields", &self.fields.values().map(|f| f.to_string()).collect::<Vec<_>>())
            .field("endian", &self.endian)
            .finish()
    }
}

impl fmt::Display for StructLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "struct {} {{", self.name)?;
        for field in self.fields.values() {
            writeln!(f, "    {};", field)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::TypeRegistry;
    use crate::structure::{StructBuilder, StructInstance};

    #[test]
    fn test_default_values() {
        let registry = TypeRegistry::new();
        let int = registry.resolve("int").unwrap();
        let float = registry.resolve("double").unwrap();
        let chr = registry.resolve("char").unwrap();

        assert_eq!(StructLayout::default_value(&int, None), Value::Int(0));
        assert_eq!(StructLayout::default_value(&float, None), Value::Float(0.0));
        assert_eq!(StructLayout::default_value(&chr, None), Value::Char(0));
        assert_eq!(StructLayout::default_value(&chr, Some(4)), Value::Bytes(Vec::new()));
        let string = registry.resolve("string").unwrap();
        assert_eq!(StructLayout::default_value(&string, Some(2)), Value::Bytes(Vec::new()));
        assert_eq!(
            StructLayout::default_value(&int, Some(2)),
            Value::Array(vec![Value::Int(0), Value::Int(0)])
        );
    }

    #[test]
    fn test_default_string_array_packs() {
        let registry = TypeRegistry::new();
        let layout = StructBuilder::new("names", &registry)
            .field("count", "uint8")
            .array("names", "string", 2)
            .build()
            .unwrap();

        let instance = layout.new_instance();
        let bytes = instance.pack(None).unwrap();
        assert_eq!(bytes, vec![0, 0]);
        let decoded = StructInstance::from_bytes(layout.clone(), &bytes, None).unwrap();
        assert_eq!(decoded, instance);
    }

    #[test]
    fn test_template_cached_per_endian() {
        let registry = TypeRegistry::new();
        let layout = StructBuilder::new("hdr", &registry)
            .field("magic", "uint32")
            .endian(Endian::Big)
            .build()
            .unwrap();

        let a = layout.template(None).unwrap();
        let b = layout.template(Some(Endian::Big)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.pack_string(), "L>1");

        let le = layout.template(Some(Endian::Little)).unwrap();
        assert_eq!(le.pack_string(), "L<1");
        assert_eq!(layout.cached_templates(), 2);
    }

    #[test]
    fn test_depends_on() {
        let registry = TypeRegistry::new();
        let inner = StructBuilder::new("inner", &registry).field("a", "uint8").build().unwrap();
        let outer = StructBuilder::new("outer", &registry)
            .field_type("i", CType::Struct(inner), Some(2))
            .build()
            .unwrap();
        assert!(outer.depends_on("inner"));
        assert!(!outer.depends_on("other"));
        assert_eq!(outer.size(), 2);
    }
}
