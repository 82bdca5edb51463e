// Tue Jan 13 2026 - Alex

use crate::ctypes::base::ENDIAN_NAMES;
use crate::ctypes::{Endian, TypeError, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arch {
    X86,
    X86_64,
    Ia64,
    Arm,
    ArmBe,
    Arm64,
    Arm64Be,
    Mips,
    MipsLe,
    Mips64,
    Mips64Le,
    Ppc,
    Ppc64,
    Sparc,
    Sparc64,
}

struct ArchInfo {
    arch: Arch,
    name: &'static str,
    aliases: &'static [&'static str],
    endian: Endian,
    address_size: usize,
}

const ARCHES: &[ArchInfo] = &[
    ArchInfo { arch: Arch::X86, name: "x86", aliases: &["i386", "i686"], endian: Endian::Little, address_size: 4 },
    ArchInfo { arch: Arch::X86_64, name: "x86_64", aliases: &["amd64", "x64"], endian: Endian::Little, address_size: 8 },
    ArchInfo { arch: Arch::Ia64, name: "ia64", aliases: &[], endian: Endian::Little, address_size: 8 },
    ArchInfo { arch: Arch::Arm, name: "arm", aliases: &["arm_le", "armv7"], endian: Endian::Little, address_size: 4 },
    ArchInfo { arch: Arch::ArmBe, name: "arm_be", aliases: &["armeb"], endian: Endian::Big, address_size: 4 },
    ArchInfo { arch: Arch::Arm64, name: "arm64", aliases: &["aarch64", "arm64_le"], endian: Endian::Little, address_size: 8 },
    ArchInfo { arch: Arch::Arm64Be, name: "arm64_be", aliases: &["aarch64_be"], endian: Endian::Big, address_size: 8 },
    ArchInfo { arch: Arch::Mips, name: "mips", aliases: &["mips_be"], endian: Endian::Big, address_size: 4 },
    ArchInfo { arch: Arch::MipsLe, name: "mips_le", aliases: &["mipsel"], endian: Endian::Little, address_size: 4 },
    ArchInfo { arch: Arch::Mips64, name: "mips64", aliases: &["mips64_be"], endian: Endian::Big, address_size: 8 },
    ArchInfo { arch: Arch::Mips64Le, name: "mips64_le", aliases: &["mips64el"], endian: Endian::Little, address_size: 8 },
    ArchInfo { arch: Arch::Ppc, name: "ppc", aliases: &["powerpc"], endian: Endian::Big, address_size: 4 },
    ArchInfo { arch: Arch::Ppc64, name: "ppc64", aliases: &["powerpc64"], endian: Endian::Big, address_size: 8 },
    ArchInfo { arch: Arch::Sparc, name: "sparc", aliases: &[], endian: Endian::Big, address_size: 4 },
    ArchInfo { arch: Arch::Sparc64, name: "sparc64", aliases: &[], endian: Endian::Big, address_size: 8 },
];

const ILP32_TYPEDEFS: &[(&str, &str)] = &[
    ("long", "int32"),
    ("ulong", "uint32"),
    ("pointer", "uint32"),
    ("size_t", "uint32"),
    ("ssize_t", "int32"),
    ("ptrdiff_t", "int32"),
    ("intptr_t", "int32"),
    ("uintptr_t", "uint32"),
];

const LP64_TYPEDEFS: &[(&str, &str)] = &[
    ("long", "int64"),
    ("ulong", "uint64"),
    ("pointer", "uint64"),
    ("size_t", "uint64"),
    ("ssize_t", "int64"),
    ("ptrdiff_t", "int64"),
    ("intptr_t", "int64"),
    ("uintptr_t", "uint64"),
];

impl Arch {
    pub fn all() -> impl Iterator<Item = Arch> {
        ARCHES.iter().map(|info| info.arch)
    }

    pub fn host() -> Self {
        let name = if cfg!(target_arch = "x86") {
            "x86"
        } else if cfg!(target_arch = "aarch64") {
            "arm64"
        } else if cfg!(target_arch = "arm") {
            "arm"
        } else if cfg!(target_arch = "powerpc64") {
            "ppc64"
        } else if cfg!(target_arch = "powerpc") {
            "ppc"
        } else {
            "x86_64"
        };
        name.parse().unwrap_or(Self::X86_64)
    }

    fn info(self) -> &'static ArchInfo {
        ARCHES
            .iter()
            .find(|info| info.arch == self)
            .unwrap_or(&ARCHES[1])
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn endian(self) -> Endian {
        self.info().endian
    }

    pub fn address_size(self) -> usize {
        self.info().address_size
    }

    pub fn typedefs(self) -> &'static [(&'static str, &'static str)] {
        if self.address_size() == 8 {
            LP64_TYPEDEFS
        } else {
            ILP32_TYPEDEFS
        }
    }

    /// Pushes this architecture's layer. On a foreign byte order every generic name is
    /// rebound to its explicit-endian variant.
    pub fn install(self, registry: &mut TypeRegistry) {
        registry.push_layer(self.name());
        let endian = self.endian();
        let foreign = !endian.is_native();
        let suffix = endian.suffix();

        if foreign {
            for name in ENDIAN_NAMES {
                let target = format!("{}_{}", name, suffix);
                if let Err(e) = registry.typedef(name, target.as_str()) {
                    log::warn!("skipping {} typedef {}: {}", self.name(), name, e);
                }
            }
        }

        for &(name, target) in self.typedefs() {
            let resolved = if foreign {
                format!("{}_{}", target, suffix)
            } else {
                target.to_string()
            };
            let entries = [
                (name.to_string(), resolved),
                (format!("{}_le", name), format!("{}_le", target)),
                (format!("{}_be", name), format!("{}_be", target)),
            ];
            for (alias, target) in entries {
                if let Err(e) = registry.typedef(&alias, target.as_str()) {
                    log::warn!("skipping {} typedef {}: {}", self.name(), alias, e);
                }
            }
        }
        log::debug!(
            "installed arch {} ({}-endian, {}-byte addresses)",
            self.name(),
            endian,
            self.address_size()
        );
    }
}

impl FromStr for Arch {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ARCHES
            .iter()
            .find(|info| info.name == lower || info.aliases.contains(&lower.as_str()))
            .map(|info| info.arch)
            .ok_or_else(|| TypeError::UnknownArch(s.to_string()))
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_from_str() {
        assert_eq!("amd64".parse::<Arch>().unwrap(), Arch::X86_64);
        assert_eq!("MIPSEL".parse::<Arch>().unwrap(), Arch::MipsLe);
        assert!(matches!("vax".parse::<Arch>(), Err(TypeError::UnknownArch(_))));
    }

    #[test]
    fn test_address_size_aliases() {
        let x86 = TypeRegistry::with_arch(Arch::X86);
        assert_eq!(x86.resolve("long").unwrap().size(), 4);
        assert_eq!(x86.resolve("pointer").unwrap().size(), 4);

        let x64 = TypeRegistry::with_arch(Arch::X86_64);
        assert_eq!(x64.resolve("size_t").unwrap().size(), 8);
        assert_eq!(x64.resolve("ulong_be").unwrap().as_scalar().unwrap().endian(), Some(Endian::Big));
    }

    #[test]
    fn test_foreign_endian_arch() {
        let (arch, expected) = if Endian::native() == Endian::Little {
            (Arch::Mips, Endian::Big)
        } else {
            (Arch::MipsLe, Endian::Little)
        };
        let registry = TypeRegistry::with_arch(arch);
        for name in ["int", "uint32", "long", "double", "pointer"] {
            let t = registry.resolve_scalar(name).unwrap();
            assert_eq!(t.endian(), Some(expected), "{}", name);
        }
        assert_eq!(registry.resolve_scalar("uint8").unwrap().endian(), None);
    }

    #[test]
    fn test_every_arch_installs_cleanly() {
        for arch in Arch::all() {
            let registry = TypeRegistry::with_arch(arch);
            for (name, _) in arch.typedefs() {
                assert_eq!(registry.resolve(name).unwrap().size(), arch.address_size());
            }
        }
    }
}
