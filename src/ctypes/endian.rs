// Tue Jan 13 2026 - Alex

use crate::ctypes::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    pub fn net() -> Self {
        Self::Big
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Little => "le",
            Self::Big => "be",
        }
    }

    pub fn pack_modifier(self) -> char {
        match self {
            Self::Little => '<',
            Self::Big => '>',
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::native()
    }
}

impl FromStr for Endian {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" | "net" | "network" => Ok(Self::Big),
            "native" | "ne" => Ok(Self::native()),
            _ => Err(TypeError::InvalidEndian(s.to_string())),
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little"),
            Self::Big => write!(f, "big"),
        }
    }
}
