// Tue Jan 13 2026 - Alex

use crate::ctypes::{CType, Endian, TypeRegistry, Value};
use crate::structure::{StructBuilder, StructInstance, StructLayout, StructureError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableLayout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endian: Option<Endian>,
    pub fields: Vec<SerializableField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl From<&StructLayout> for SerializableLayout {
    fn from(layout: &StructLayout) -> Self {
        Self {
            name: layout.name().to_string(),
            endian: layout.endian(),
            fields: layout
                .fields()
                .map(|f| SerializableField {
                    name: f.name().to_string(),
                    type_name: f.ctype().name().to_string(),
                    length: f.length(),
                })
                .collect(),
            size: Some(layout.size()),
        }
    }
}

impl SerializableLayout {
    pub fn build(&self, registry: &TypeRegistry) -> Result<Arc<StructLayout>, StructureError> {
        let mut builder = StructBuilder::new(&self.name, registry).with_endian(self.endian);
        for field in &self.fields {
            builder = match field.length {
                Some(length) => builder.array(&field.name, &field.type_name, length),
                None => builder.field(&field.name, &field.type_name),
            };
        }
        builder.build()
    }

    /// Builds each definition in order and registers it, so later ones may embed earlier ones.
    pub fn define_all(definitions: &[Self], registry: &mut TypeRegistry) -> Result<Vec<Arc<StructLayout>>, StructureError> {
        let mut layouts = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let layout = definition.build(registry)?;
            registry.define_struct(layout.clone());
            layouts.push(layout);
        }
        Ok(layouts)
    }
}

pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Int(v) => serde_json::Value::from(*v),
        Value::UInt(v) => serde_json::Value::from(*v),
        Value::Float(v) => serde_json::Value::from(*v),
        Value::Char(c) => serde_json::Value::from((*c as char).to_string()),
        Value::Bytes(b) => serde_json::Value::from(String::from_utf8_lossy(b).into_owned()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Struct(s) => instance_to_json(s),
    }
}

pub fn instance_to_json(instance: &StructInstance) -> serde_json::Value {
    let map = instance
        .fields()
        .map(|(name, value)| (name.to_string(), value_to_json(value)))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

pub fn describe(ctype: &CType) -> serde_json::Value {
    match ctype {
        CType::Scalar(t) => serde_json::json!({
            "name": t.name(),
            "kind": t.kind(),
            "size": t.size(),
            "signed": t.is_signed(),
            "endian": t.endian(),
            "pack": t.pack_code(),
        }),
        CType::Struct(layout) => serde_json::to_value(SerializableLayout::from(layout.as_ref()))
            .unwrap_or(serde_json::Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITIONS: &str = r#"[
        {"name": "point", "fields": [{"name": "x", "type": "int16"}, {"name": "y", "type": "int16"}]},
        {"name": "record", "endian": "big", "fields": [
            {"name": "id", "type": "uint32"},
            {"name": "where", "type": "point"},
            {"name": "tag", "type": "char", "length": 4}
        ]}
    ]"#;

    #[test]
    fn test_define_from_json() {
        let mut registry = TypeRegistry::new();
        let definitions: Vec<SerializableLayout> = serde_json::from_str(DEFINITIONS).unwrap();
        let layouts = SerializableLayout::define_all(&definitions, &mut registry).unwrap();

        let record = &layouts[1];
        assert_eq!(record.endian(), Some(Endian::Big));
        assert_eq!(record.size(), 12);
        assert!(registry.resolve("record").unwrap().is_struct());

        let bytes = [0, 0, 0, 1, 0, 2, 0, 3, b'a', b'b', 0, 0];
        let instance = StructInstance::from_bytes(record.clone(), &bytes, None).unwrap();
        let json = instance_to_json(&instance);
        assert_eq!(json["id"], 1);
        assert_eq!(json["where"]["y"], 3);
        assert_eq!(json["tag"], "ab");
    }

    #[test]
    fn test_serializable_from_layout() {
        let registry = TypeRegistry::new();
        let layout = StructBuilder::new("s", &registry).array("v", "uint16", 3).build().unwrap();
        let serializable = SerializableLayout::from(layout.as_ref());
        assert_eq!(serializable.fields[0].type_name, "uint16");
        assert_eq!(serializable.fields[0].length, Some(3));
        assert_eq!(serializable.size, Some(6));
    }
}
