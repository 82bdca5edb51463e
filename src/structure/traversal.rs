// Tue Jan 13 2026 - Alex

use crate::ctypes::{CType, Value};
use crate::structure::{Field, StructInstance};

#[derive(Debug, Clone, Copy)]
pub struct FieldEntry<'a> {
    pub owner: &'a StructInstance,
    pub name: &'a str,
    pub field: &'a Field,
    pub value: &'a Value,
}

/// Depth-first walk over every field, descending into nested structs and
/// arrays of structs in layout order. A clone resumes from the same position;
/// call [`StructInstance::each_field`] again for a fresh walk.
#[derive(Clone)]
pub struct EachField<'a> {
    stack: Vec<(&'a StructInstance, usize)>,
}

impl<'a> EachField<'a> {
    pub(crate) fn new(root: &'a StructInstance) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a> Iterator for EachField<'a> {
    type Item = FieldEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (owner, index) = {
                let top = self.stack.last_mut()?;
                let index = top.1;
                top.1 += 1;
                (top.0, index)
            };

            let Some((field, value)) = owner.entry(index) else {
                self.stack.pop();
                continue;
            };

            if let CType::Struct(_) = field.ctype() {
                match value {
                    Value::Struct(inner) => self.stack.push((inner, 0)),
                    Value::Array(items) => {
                        for item in items.iter().rev() {
                            if let Value::Struct(inner) = item {
                                self.stack.push((inner, 0));
                            }
                        }
                    }
                    _ => {}
                }
            }

            return Some(FieldEntry {
                owner,
                name: field.name(),
                field,
                value,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::TypeRegistry;
    use crate::structure::StructBuilder;

    #[test]
    fn test_each_field_depth_first() {
        let registry = TypeRegistry::new();
        let inner = StructBuilder::new("inner", &registry)
            .field("a", "uint8")
            .field("b", "uint8")
            .build()
            .unwrap();
        let outer = StructBuilder::new("outer", &registry)
            .field("head", "uint16")
            .field_type("one", CType::Struct(inner.clone()), None)
            .field_type("many", CType::Struct(inner), Some(2))
            .field("tail", "uint32")
            .build()
            .unwrap();
        let instance = outer.new_instance();

        let walk: Vec<(String, String)> = instance
            .each_field()
            .map(|e| (e.owner.name().to_string(), e.name.to_string()))
            .collect();
        let expected = [
            ("outer", "head"),
            ("outer", "one"),
            ("inner", "a"),
            ("inner", "b"),
            ("outer", "many"),
            ("inner", "a"),
            ("inner", "b"),
            ("inner", "a"),
            ("inner", "b"),
            ("outer", "tail"),
        ];
        assert_eq!(walk.len(), expected.len());
        for ((owner, name), (e_owner, e_name)) in walk.iter().zip(expected.iter()) {
            assert_eq!((owner.as_str(), name.as_str()), (*e_owner, *e_name));
        }

        assert_eq!(instance.each_field().count(), instance.each_field().count());
        assert_eq!(instance.values().len(), 8);
    }
}
