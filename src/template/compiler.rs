// Tue Jan 13 2026 - Alex

use crate::ctypes::{CType, Endian};
use crate::template::{Template, TemplateElement, TemplateError};

/// Flattens a field/type list into a single [`Template`]. Nested structs are
/// inlined, repeated once per array element.
pub struct TemplateCompiler {
    endian: Option<Endian>,
}

impl TemplateCompiler {
    pub fn new() -> Self {
        Self { endian: None }
    }

    pub fn with_endian(mut self, endian: Option<Endian>) -> Self {
        self.endian = endian;
        self
    }

    pub fn compile(&self, fields: &[(CType, Option<usize>)]) -> Result<Template, TemplateError> {
        let mut elements = Vec::new();
        for (ctype, length) in fields {
            Self::flatten(&mut elements, ctype, *length, self.endian)?;
        }
        let template = Template::new(elements)?;
        log::debug!(
            "compiled template {} ({} bytes, endian {:?})",
            template.pack_string(),
            template.size(),
            self.endian
        );
        Ok(template)
    }

    fn flatten(
        elements: &mut Vec<TemplateElement>,
        ctype: &CType,
        length: Option<usize>,
        endian: Option<Endian>,
    ) -> Result<(), TemplateError> {
        match ctype {
            CType::Scalar(scalar) => {
                let scalar = match endian {
                    Some(endian) => scalar.with_endian(endian)?,
                    None => scalar.clone(),
                };
                if scalar.pack_code().is_none() {
                    return Err(TemplateError::UnsupportedType(scalar.name().to_string()));
                }
                elements.push(TemplateElement::new(scalar, length));
            }
            CType::Struct(layout) => {
                let inner = endian.or(layout.endian());
                for _ in 0..length.unwrap_or(1) {
                    for field in layout.fields() {
                        Self::flatten(elements, field.ctype(), field.length(), inner)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for TemplateCompiler {
    fn default() -> Self {
        Self::new()
    }
}

pub fn compile(fields: &[(CType, Option<usize>)], endian: Option<Endian>) -> Result<Template, TemplateError> {
    TemplateCompiler::new().with_endian(endian).compile(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::{ScalarType, TypeRegistry};
    use crate::structure::StructBuilder;

    #[test]
    fn test_compile_substitutes_endian() {
        let registry = TypeRegistry::new();
        let fields = vec![
            (registry.resolve("uint32").unwrap(), None),
            (registry.resolve("uchar").unwrap(), Some(4)),
            (registry.resolve("int16").unwrap(), Some(2)),
        ];
        let big = compile(&fields, Some(Endian::Big)).unwrap();
        assert_eq!(big.pack_string(), "L>1Z4s>2");
        assert_eq!(big.size(), 12);

        let native = compile(&fields, None).unwrap();
        assert_eq!(native.pack_string(), "L1Z4s2");
    }

    #[test]
    fn test_compile_inlines_nested_structs() {
        let registry = TypeRegistry::new();
        let point = StructBuilder::new("point", &registry)
            .field("x", "int16")
            .field("y", "int16")
            .build()
            .unwrap();
        let fields = vec![(CType::Struct(point), Some(3)), (registry.resolve("uint8").unwrap(), None)];
        let template = compile(&fields, Some(Endian::Little)).unwrap();
        assert_eq!(template.elements().len(), 7);
        assert_eq!(template.size(), 13);
        assert_eq!(template.value_count(), 7);
    }

    #[test]
    fn test_compile_rejects_unsupported() {
        let fields = vec![(CType::Scalar(ScalarType::int("int24", 3)), None)];
        assert!(matches!(compile(&fields, None), Err(TemplateError::UnsupportedType(name)) if name == "int24"));
        assert!(matches!(compile(&fields, Some(Endian::Big)), Err(TemplateError::Type(_))));
    }
}
