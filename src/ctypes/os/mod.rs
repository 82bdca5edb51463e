// Wed Jan 14 2026 - Alex

mod bsd;
mod linux;
mod macos;
mod unix;
mod windows;

use crate::ctypes::{TypeError, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One typedef table. `ilp32`/`lp64` are chosen by the architecture's address size.
pub struct OsTable {
    pub name: &'static str,
    pub common: &'static [(&'static str, &'static str)],
    pub ilp32: &'static [(&'static str, &'static str)],
    pub lp64: &'static [(&'static str, &'static str)],
}

impl OsTable {
    pub fn entries(&self, address_size: usize) -> impl Iterator<Item = &(&'static str, &'static str)> {
        let sized = if address_size == 8 { self.lp64 } else { self.ilp32 };
        self.common.iter().chain(sized.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    FreeBsd,
    NetBsd,
    OpenBsd,
    MacOs,
    Windows,
}

impl Os {
    pub fn all() -> impl Iterator<Item = Os> {
        [Self::Linux, Self::FreeBsd, Self::NetBsd, Self::OpenBsd, Self::MacOs, Self::Windows].into_iter()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::FreeBsd => "freebsd",
            Self::NetBsd => "netbsd",
            Self::OpenBsd => "openbsd",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }

    /// Tables applied in order; later tables override earlier ones.
    pub fn tables(self) -> &'static [&'static OsTable] {
        match self {
            Self::Linux => &[&unix::UNIX, &linux::LINUX],
            Self::FreeBsd => &[&unix::UNIX, &bsd::BSD, &bsd::FREEBSD],
            Self::NetBsd => &[&unix::UNIX, &bsd::BSD, &bsd::NETBSD],
            Self::OpenBsd => &[&unix::UNIX, &bsd::BSD, &bsd::OPENBSD],
            Self::MacOs => &[&unix::UNIX, &bsd::BSD, &macos::MACOS],
            Self::Windows => &[&windows::WINDOWS],
        }
    }

    pub fn install(self, registry: &mut TypeRegistry) {
        registry.push_layer(self.name());
        let address_size = registry.address_size();
        let mut count = 0usize;
        for table in self.tables() {
            for &(name, target) in table.entries(address_size) {
                match registry.typedef(name, target) {
                    Ok(()) => count += 1,
                    Err(e) => log::warn!("skipping {} typedef {}: {}", table.name, name, e),
                }
            }
        }
        log::debug!("installed os {} with {} typedefs", self.name(), count);
    }
}

impl FromStr for Os {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "freebsd" => Ok(Self::FreeBsd),
            "netbsd" => Ok(Self::NetBsd),
            "openbsd" => Ok(Self::OpenBsd),
            "macos" | "darwin" | "osx" => Ok(Self::MacOs),
            "windows" | "win32" => Ok(Self::Windows),
            _ => Err(TypeError::UnknownOs(s.to_string())),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
