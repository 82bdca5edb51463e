// Tue Jan 13 2026 - Alex

use crate::ctypes::{Arch, Endian, Os, TypeError, TypeRegistry};
use crate::hexdump::{Format, ParserConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexdumpSettings {
    pub format: Format,
    #[serde(rename = "type")]
    pub type_name: String,
    pub address_base: Option<u32>,
    pub base: Option<u32>,
    pub named_chars: bool,
    pub row_width: usize,
    pub repeats: bool,
}

impl Default for HexdumpSettings {
    fn default() -> Self {
        Self {
            format: Format::Hexdump,
            type_name: "byte".to_string(),
            address_base: None,
            base: None,
            named_chars: false,
            row_width: 16,
            repeats: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arch: Option<String>,
    pub os: Option<String>,
    pub endian: Option<Endian>,
    pub hexdump: HexdumpSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arch: None,
            os: None,
            endian: None,
            hexdump: HexdumpSettings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_arch(mut self, arch: &str) -> Self {
        self.arch = Some(arch.to_string());
        self
    }

    pub fn with_os(mut self, os: &str) -> Self {
        self.os = Some(os.to_string());
        self
    }

    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = Some(endian);
        self
    }

    pub fn with_hexdump(mut self, hexdump: HexdumpSettings) -> Self {
        self.hexdump = hexdump;
        self
    }

    pub fn arch(&self) -> Result<Arch, ConfigError> {
        match &self.arch {
            Some(name) => Ok(name.parse()?),
            None => Ok(Arch::host()),
        }
    }

    pub fn os(&self) -> Result<Option<Os>, ConfigError> {
        self.os.as_deref().map(str::parse::<Os>).transpose().map_err(ConfigError::from)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arch()?;
        self.os()?;
        let settings = &self.hexdump;
        for base in [settings.address_base, settings.base].into_iter().flatten() {
            if ![2, 8, 10, 16].contains(&base) {
                return Err(ConfigError::Invalid(format!("base must be 2, 8, 10 or 16, got {}", base)));
            }
        }
        if settings.row_width == 0 {
            return Err(ConfigError::Invalid("row_width must be greater than 0".to_string()));
        }
        if settings.type_name.is_empty() {
            return Err(ConfigError::Invalid("hexdump type must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn registry(&self) -> Result<TypeRegistry, ConfigError> {
        Ok(TypeRegistry::for_platform(self.arch()?, self.os()?))
    }

    /// Applies the configured byte order to the dump type when it has a variant for it.
    pub fn parser_config(&self, registry: &TypeRegistry) -> ParserConfig {
        let settings = &self.hexdump;
        let mut type_name = settings.type_name.clone();
        if let Some(endian) = self.endian {
            let suffixed = format!("{}_{}", type_name, endian.suffix());
            let bare = !type_name.ends_with("_le") && !type_name.ends_with("_be");
            if bare && registry.contains(&suffixed) {
                type_name = suffixed;
            }
        }

        ParserConfig {
            format: settings.format,
            type_name,
            address_base: settings.address_base,
            base: settings.base,
            named_chars: settings.named_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arch().unwrap(), Arch::host());
        assert_eq!(config.os().unwrap(), None);
    }

    #[test]
    fn test_json_partial() {
        let config: Config =
            serde_json::from_str(r#"{"arch": "arm_be", "os": "linux", "hexdump": {"format": "od", "type": "uint16"}}"#)
                .unwrap();
        assert_eq!(config.arch().unwrap(), Arch::ArmBe);
        assert_eq!(config.os().unwrap(), Some(Os::Linux));
        assert_eq!(config.hexdump.format, Format::Od);
        assert_eq!(config.hexdump.row_width, 16);

        let registry = config.registry().unwrap();
        assert_eq!(registry.endian(), Endian::Big);
        assert_eq!(registry.resolve("long").unwrap().size(), 4);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(matches!(Config::new().with_arch("vax").validate(), Err(ConfigError::Type(_))));
        let mut config = Config::new();
        config.hexdump.base = Some(5);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parser_config_endian() {
        let config = Config::new()
            .with_arch("x86_64")
            .with_endian(Endian::Big)
            .with_hexdump(HexdumpSettings {
                type_name: "uint32".to_string(),
                ..Default::default()
            });
        let registry = config.registry().unwrap();
        assert_eq!(config.parser_config(&registry).type_name, "uint32_be");

        let config = config.with_hexdump(HexdumpSettings::default());
        assert_eq!(config.parser_config(&registry).type_name, "byte");
    }
}
