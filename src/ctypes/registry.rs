// Tue Jan 13 2026 - Alex

use crate::ctypes::arch::Arch;
use crate::ctypes::os::Os;
use crate::ctypes::{base, CType, Endian, ScalarType, TypeError};
use crate::structure::StructLayout;
use ahash::AHashMap;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum TypeEntry {
    Type(CType),
    /// `chain` holds every name followed to reach `target`, nearest first.
    Alias { chain: Vec<String>, target: CType },
}

impl TypeEntry {
    pub fn ctype(&self) -> &CType {
        match self {
            Self::Type(t) => t,
            Self::Alias { target, .. } => target,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias { .. })
    }

    fn chain_contains(&self, name: &str) -> bool {
        match self {
            Self::Type(_) => false,
            Self::Alias { chain, .. } => chain.iter().any(|n| n == name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeLayer {
    name: String,
    entries: AHashMap<String, TypeEntry>,
}

impl TypeLayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: AHashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: &str, entry: TypeEntry) {
        self.entries.insert(name.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum TypeTarget {
    Name(String),
    Type(CType),
}

impl From<&str> for TypeTarget {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TypeTarget {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<CType> for TypeTarget {
    fn from(t: CType) -> Self {
        Self::Type(t)
    }
}

impl From<ScalarType> for TypeTarget {
    fn from(t: ScalarType) -> Self {
        Self::Type(CType::Scalar(t))
    }
}

impl From<Arc<StructLayout>> for TypeTarget {
    fn from(layout: Arc<StructLayout>) -> Self {
        Self::Type(CType::Struct(layout))
    }
}

/// Layered name → type table. Layers are searched newest-first and every alias is
/// stored already resolved, so lookups never chase forwarding pointers.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    layers: Vec<TypeLayer>,
    arch: Arch,
    os: Option<Os>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::with_arch(Arch::host())
    }

    pub fn with_arch(arch: Arch) -> Self {
        let mut registry = Self {
            layers: vec![base::base_layer()],
            arch,
            os: None,
        };
        arch.install(&mut registry);
        registry
    }

    pub fn for_platform(arch: Arch, os: Option<Os>) -> Self {
        let mut registry = Self::with_arch(arch);
        if let Some(os) = os {
            os.install(&mut registry);
            registry.os = Some(os);
        }
        registry
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn os(&self) -> Option<Os> {
        self.os
    }

    pub fn address_size(&self) -> usize {
        self.arch.address_size()
    }

    pub fn endian(&self) -> Endian {
        self.arch.endian()
    }

    pub fn push_layer(&mut self, name: &str) {
        log::debug!("pushing type layer {}", name);
        self.layers.push(TypeLayer::new(name));
    }

    pub fn layers(&self) -> &[TypeLayer] {
        &self.layers
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeEntry> {
        self.layers.iter().rev().find_map(|layer| layer.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn resolve(&self, name: &str) -> Result<CType, TypeError> {
        self.lookup(name)
            .map(|entry| entry.ctype().clone())
            .ok_or_else(|| TypeError::UnknownType(name.to_string()))
    }

    pub fn resolve_scalar(&self, name: &str) -> Result<ScalarType, TypeError> {
        match self.resolve(name)? {
            CType::Scalar(t) => Ok(t),
            CType::Struct(_) => Err(TypeError::UnknownType(name.to_string())),
        }
    }

    pub fn typedef(&mut self, name: &str, target: impl Into<TypeTarget>) -> Result<(), TypeError> {
        let entry = match target.into() {
            TypeTarget::Type(t) => TypeEntry::Alias {
                chain: vec![t.name().to_string()],
                target: t,
            },
            TypeTarget::Name(target) => {
                if target == name {
                    return Err(TypeError::CyclicTypedef {
                        name: name.to_string(),
                        target,
                    });
                }
                let existing = self.lookup(&target).ok_or_else(|| TypeError::InvalidTypedef {
                    name: name.to_string(),
                    target: target.clone(),
                })?;
                if existing.chain_contains(name) {
                    return Err(TypeError::CyclicTypedef {
                        name: name.to_string(),
                        target,
                    });
                }

                let mut chain = vec![target.clone()];
                if let TypeEntry::Alias { chain: rest, .. } = existing {
                    chain.extend(rest.iter().cloned());
                }
                TypeEntry::Alias {
                    chain,
                    target: existing.ctype().clone(),
                }
            }
        };

        self.top_layer().insert(name, entry);
        Ok(())
    }

    /// Applies an ordered name → name table; later rows may refer to earlier ones.
    pub fn typedefs(&mut self, table: &[(&str, &str)]) -> Result<(), TypeError> {
        for (name, target) in table {
            self.typedef(name, *target)?;
        }
        Ok(())
    }

    pub fn define_scalar(&mut self, scalar: ScalarType) {
        let name = scalar.name().to_string();
        self.top_layer().insert(&name, TypeEntry::Type(CType::Scalar(scalar)));
    }

    pub fn define_struct(&mut self, layout: Arc<StructLayout>) {
        let name = layout.name().to_string();
        log::debug!("registering struct {}", name);
        self.top_layer().insert(&name, TypeEntry::Type(CType::Struct(layout)));
    }

    /// Every visible name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self.layers.iter().flat_map(|l| l.names()).collect();
        names.into_iter().collect()
    }

    fn top_layer(&mut self) -> &mut TypeLayer {
        if self.layers.len() == 1 {
            self.layers.push(TypeLayer::new("user"));
        }
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
