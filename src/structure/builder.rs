// Tue Jan 13 2026 - Alex

use crate::ctypes::{CType, Endian, TypeRegistry, TypeTarget};
use crate::structure::{Field, StructLayout, StructureError};
use indexmap::IndexMap;
use std::sync::Arc;

pub struct StructBuilder<'a> {
    name: String,
    registry: &'a TypeRegistry,
    fields: Vec<(String, TypeTarget, Option<usize>)>,
    endian: Option<Endian>,
}

impl<'a> StructBuilder<'a> {
    pub fn new(name: &str, registry: &'a TypeRegistry) -> Self {
        Self {
            name: name.to_string(),
            registry,
            fields: Vec::new(),
            endian: None,
        }
    }

    pub fn field(mut self, name: &str, type_name: &str) -> Self {
        self.fields.push((name.to_string(), TypeTarget::from(type_name), None));
        self
    }

    pub fn array(mut self, name: &str, type_name: &str, length: usize) -> Self {
        self.fields.push((name.to_string(), TypeTarget::from(type_name), Some(length)));
        self
    }

    pub fn field_type(mut self, name: &str, ctype: CType, length: Option<usize>) -> Self {
        self.fields.push((name.to_string(), TypeTarget::Type(ctype), length));
        self
    }

    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = Some(endian);
        self
    }

    pub fn with_endian(mut self, endian: Option<Endian>) -> Self {
        self.endian = endian;
        self
    }

    pub fn build(self) -> Result<Arc<StructLayout>, StructureError> {
        let mut fields = IndexMap::with_capacity(self.fields.len());

        for (field_name, target, length) in self.fields {
            let ctype = match target {
                TypeTarget::Name(type_name) => {
                    if type_name == self.name {
                        return Err(StructureError::CyclicLayout(self.name));
                    }
                    self.registry.resolve(&type_name)?
                }
                TypeTarget::Type(ctype) => ctype,
            };

            if let CType::Struct(inner) = &ctype {
                if inner.depends_on(&self.name) {
                    return Err(StructureError::CyclicLayout(self.name));
                }
            }

            if fields.contains_key(&field_name) {
                return Err(StructureError::DuplicateField {
                    name: self.name,
                    field: field_name,
                });
            }
            let field = Field::new(&field_name, ctype, length);
            fields.insert(field_name, field);
        }

        log::debug!("defined struct {} with {} fields", self.name, fields.len());
        Ok(Arc::new(StructLayout::new(&self.name, fields, self.endian)))
    }
}
