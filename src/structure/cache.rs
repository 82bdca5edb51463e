// Tue Jan 13 2026 - Alex

use crate::ctypes::Endian;
use crate::template::{Template, TemplateError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Compiled templates keyed by the resolved endian option.
pub struct TemplateCache {
    cache: RwLock<HashMap<Option<Endian>, Arc<Template>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: Option<Endian>) -> Option<Arc<Template>> {
        self.cache.read().get(&key).cloned()
    }

    pub fn insert(&self, key: Option<Endian>, template: Template) -> Arc<Template> {
        self.cache.write().entry(key).or_insert_with(|| Arc::new(template)).clone()
    }

    /// Two threads missing the same key may both compile; the first insert wins.
    pub fn get_or_compile<F>(&self, key: Option<Endian>, compile: F) -> Result<Arc<Template>, TemplateError>
    where
        F: FnOnce() -> Result<Template, TemplateError>,
    {
        if let Some(template) = self.get(key) {
            log::trace!("template cache hit for {:?}", key);
            return Ok(template);
        }
        let template = compile()?;
        Ok(self.insert(key, template))
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn size(&self) -> usize {
        self.cache.read().len()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::ScalarType;
    use crate::template::TemplateElement;
    use std::cell::Cell;

    fn template() -> Result<Template, TemplateError> {
        Template::new(vec![TemplateElement::new(ScalarType::uint("uint8", 1), None)])
    }

    #[test]
    fn test_compiles_once_per_key() {
        let cache = TemplateCache::new();
        let calls = Cell::new(0);
        let compile = || {
            calls.set(calls.get() + 1);
            template()
        };

        let a = cache.get_or_compile(Some(Endian::Big), compile).unwrap();
        let b = cache.get_or_compile(Some(Endian::Big), compile).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.get(), 1);

        cache.get_or_compile(None, compile).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.size(), 2);
        cache.clear();
        assert_eq!(cache.size(), 0);
    }
}
