// Tue Jan 13 2026 - Alex

use crate::ctypes::{ScalarType, TypeKind, TypeRegistry, Value};
use crate::hexdump::chars;
use crate::hexdump::error::HexdumpError;
use crate::hexdump::parser::{char_cell_width, char_digits, check_base, dump_scalar, Format, ParserConfig};
use crate::template::get_scalar;
use itertools::Itertools;

const DEFAULT_ROW_WIDTH: usize = 16;

/// Renders bytes in the text layout `HexdumpParser` reads back.
#[derive(Debug, Clone)]
pub struct HexdumpFormatter {
    format: Format,
    scalar: ScalarType,
    address_base: u32,
    base: u32,
    named_chars: bool,
    row_width: usize,
    ascii: bool,
    repeats: bool,
}

impl HexdumpFormatter {
    pub fn new(format: Format, type_name: &str, registry: &TypeRegistry) -> Result<Self, HexdumpError> {
        let scalar = dump_scalar(type_name, registry)?;
        let ascii = format == Format::Hexdump && !scalar.is_char();
        Ok(Self {
            format,
            scalar,
            address_base: format.default_base(),
            base: format.default_base(),
            named_chars: false,
            row_width: DEFAULT_ROW_WIDTH,
            ascii,
            repeats: true,
        })
    }

    pub fn from_config(config: &ParserConfig, registry: &TypeRegistry) -> Result<Self, HexdumpError> {
        Ok(Self::new(config.format, &config.type_name, registry)?
            .with_address_base(config.address_base())
            .with_base(config.base())
            .with_named_chars(config.named_chars))
    }

    pub fn with_address_base(mut self, base: u32) -> Self {
        self.address_base = base;
        self
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    pub fn with_named_chars(mut self, named: bool) -> Self {
        self.named_chars = named;
        self
    }

    /// Rounded up to whole values.
    pub fn with_row_width(mut self, bytes: usize) -> Self {
        self.row_width = bytes;
        self
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    pub fn with_repeats(mut self, repeats: bool) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn scalar(&self) -> &ScalarType {
        &self.scalar
    }

    pub fn row_width(&self) -> usize {
        let size = self.scalar.size();
        self.row_width.max(1).div_ceil(size) * size
    }

    pub fn format(&self, data: &[u8]) -> Result<String, HexdumpError> {
        check_base(self.address_base)?;
        check_base(self.base)?;

        let width = self.row_width();
        let mut out = String::new();
        let mut previous: Option<&[u8]> = None;
        let mut starred = false;

        for (index, chunk) in data.chunks(width).enumerate() {
            if self.repeats && chunk.len() == width && previous == Some(chunk) {
                if !starred {
                    out.push_str("*\n");
                    starred = true;
                }
                continue;
            }
            starred = false;
            previous = Some(chunk);
            out.push_str(&self.format_row((index * width) as u64, chunk)?);
            out.push('\n');
        }

        out.push_str(&self.format_address(data.len() as u64));
        out.push('\n');
        Ok(out)
    }

    fn format_address(&self, address: u64) -> String {
        let width = self.format.address_width();
        match self.address_base {
            2 => format!("{:0width$b}", address),
            8 => format!("{:0width$o}", address),
            10 => format!("{:0width$}", address),
            _ => format!("{:0width$x}", address),
        }
    }

    fn format_row(&self, address: u64, chunk: &[u8]) -> Result<String, HexdumpError> {
        let size = self.scalar.size();
        let mut padded = chunk.to_vec();
        padded.resize(chunk.len().div_ceil(size) * size, 0);

        let mut buf = padded.as_slice();
        let mut values = Vec::with_capacity(padded.len() / size);
        while !buf.is_empty() {
            values.push(get_scalar(&mut buf, &self.scalar)?);
        }

        let mut line = self.format_address(address);
        if self.scalar.is_char() {
            let cell = char_cell_width(self.base);
            for value in &values {
                line.push_str(&format!("{:>cell$}", self.format_value(value)));
            }
            return Ok(line);
        }

        let columns = self.format_columns(&values);
        line.push_str("  ");
        if self.ascii {
            let full = self.column_width(self.row_width() / size);
            line.push_str(&format!("{:<full$}", columns));
            line.push_str("  |");
            line.extend(chunk.iter().map(|&b| if (0x20..0x7f).contains(&b) { b as char } else { '.' }));
            line.push('|');
        } else {
            line.push_str(&columns);
        }
        Ok(line)
    }

    /// `hexdump -C` splits byte rows into two groups of eight.
    fn group_gap(&self, index: usize) -> bool {
        self.format == Format::Hexdump && self.scalar.size() == 1 && index > 0 && index % 8 == 0
    }

    fn format_columns(&self, values: &[Value]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let token = self.format_value(value);
                if self.group_gap(i) {
                    format!(" {}", token)
                } else {
                    token
                }
            })
            .join(" ")
    }

    fn column_width(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let gaps = (1..count).filter(|&i| self.group_gap(i)).count();
        count * self.token_width() + (count - 1) + gaps
    }

    fn token_width(&self) -> usize {
        let size = self.scalar.size();
        match (self.scalar.kind(), self.base) {
            (TypeKind::Float, _) => 0,
            (TypeKind::Char, base) => char_digits(base),
            (_, 2) => size * 8,
            (_, 8) => (size * 8).div_ceil(3),
            (_, 16) => size * 2,
            _ if self.scalar.is_signed() => self.scalar.min_value().to_string().len(),
            _ => self.scalar.max_value().to_string().len(),
        }
    }

    fn format_value(&self, value: &Value) -> String {
        match value {
            Value::Float(v) if self.scalar.size() == 4 => format!("{:e}", *v as f32),
            Value::Float(v) => format!("{:e}", v),
            Value::Char(b) if self.scalar.is_char() => self.format_char(*b),
            Value::Int(v) if self.base == 10 => format!("{:>w$}", v, w = self.token_width()),
            other => self.format_bits(other.as_i128().unwrap_or(0), self.token_width()),
        }
    }

    fn format_bits(&self, value: i128, width: usize) -> String {
        let bits = self.scalar.size() * 8;
        let raw = (value as u128) & ((1u128 << bits) - 1);
        match self.base {
            2 => format!("{:0width$b}", raw),
            8 => format!("{:0width$o}", raw),
            10 => format!("{:>width$}", raw),
            _ => format!("{:0width$x}", raw),
        }
    }

    fn format_char(&self, byte: u8) -> String {
        let table = if self.named_chars {
            chars::name_for(byte)
        } else {
            chars::escape_for(byte)
        };
        if let Some(token) = table {
            return token.to_string();
        }
        if byte == b' ' || byte.is_ascii_graphic() {
            return (byte as char).to_string();
        }
        // Zero padded so a numeric token is never a single literal character.
        match self.base {
            10 => format!("{:0width$}", byte, width = char_digits(10)),
            base => self.format_bits(byte as i128, char_digits(base)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::Arch;
    use crate::hexdump::parser::HexdumpParser;

    fn registry() -> TypeRegistry {
        TypeRegistry::with_arch(Arch::X86_64)
    }

    #[test]
    fn test_canonical_layout() {
        let reg = registry();
        let f = HexdumpFormatter::new(Format::Hexdump, "byte", &reg).unwrap();
        let text = f.format(b"hello world\n").unwrap();
        assert_eq!(
            text,
            "00000000  68 65 6c 6c 6f 20 77 6f  72 6c 64 0a              |hello world.|\n0000000c\n"
        );
    }

    #[test]
    fn test_repeat_compression() {
        let reg = registry();
        let f = HexdumpFormatter::new(Format::Hexdump, "byte", &reg).unwrap().with_ascii(false);
        let text = f.format(&[0u8; 64]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "*");
        assert_eq!(lines[2], "00000040");
    }

    #[test]
    fn test_od_chars() {
        let reg = registry();
        let f = HexdumpFormatter::new(Format::Od, "char", &reg).unwrap();
        let text = f.format(b"hi \n\x01").unwrap();
        assert_eq!(text, "0000000   h   i      \\n 001\n0000005\n");

        let named = f.clone().with_named_chars(true).format(b"a \x1b").unwrap();
        assert_eq!(named, "0000000   a  sp esc\n0000003\n");
    }

    #[test]
    fn test_decimal_char_tokens_are_padded() {
        let reg = registry();
        let f = HexdumpFormatter::new(Format::Od, "char", &reg).unwrap().with_base(10);
        let text = f.format(&[0x01, b'1', 0x0e]).unwrap();
        assert_eq!(text, "0000000 001   1 014\n0000003\n");

        let config = ParserConfig::new(Format::Od).with_type("char").with_base(10);
        let parser = HexdumpParser::new(&config, &reg).unwrap();
        assert_eq!(parser.unhexdump(&text).unwrap(), [0x01, b'1', 0x0e]);
    }

    #[test]
    fn test_partial_words_round_trip() {
        let reg = registry();
        let data = [1u8, 2, 3, 4, 5];
        let f = HexdumpFormatter::new(Format::Od, "uint32_le", &reg).unwrap().with_base(16);
        let text = f.format(&data).unwrap();
        assert_eq!(text, "0000000  04030201 00000005\n0000005\n");

        let config = ParserConfig::new(Format::Od).with_type("uint32_le").with_base(16);
        let parser = HexdumpParser::new(&config, &reg).unwrap();
        assert_eq!(parser.unhexdump(&text).unwrap(), data);
    }

    #[test]
    fn test_invalid_base_on_format() {
        let reg = registry();
        let f = HexdumpFormatter::new(Format::Od, "byte", &reg).unwrap().with_base(7);
        assert_eq!(f.format(&[0]).unwrap_err(), HexdumpError::InvalidBase(7));
    }
}
