// Tue Jan 13 2026 - Alex

use crate::ctypes::{ScalarType, TypeKind, TypeRegistry, Value};
use crate::hexdump::chars;
use crate::hexdump::error::HexdumpError;
use crate::template::{get_scalar, put_scalar};
use bytes::BytesMut;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Enumerate;
use std::str::{FromStr, Lines};

static ASCII_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\|.*\|\s*$").expect("ascii column pattern"));

pub const SUPPORTED_TYPES: &[&str] = &[
    "char", "uchar", "byte", "int8", "uint8", "int16", "uint16", "int32", "uint32", "int64",
    "uint64", "short", "ushort", "int", "uint", "long", "ulong", "long_long", "ulong_long",
    "float", "double", "float32", "float64",
];

pub const SUPPORTED_BASES: &[u32] = &[2, 8, 10, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Hexdump,
    Od,
}

impl Format {
    pub fn default_base(&self) -> u32 {
        match self {
            Self::Hexdump => 16,
            Self::Od => 8,
        }
    }

    pub(crate) fn address_width(&self) -> usize {
        match self {
            Self::Hexdump => 8,
            Self::Od => 7,
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::Hexdump
    }
}

impl FromStr for Format {
    type Err = HexdumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hexdump" => Ok(Self::Hexdump),
            "od" => Ok(Self::Od),
            _ => Err(HexdumpError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hexdump => write!(f, "hexdump"),
            Self::Od => write!(f, "od"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    pub format: Format,
    #[serde(rename = "type")]
    pub type_name: String,
    pub address_base: Option<u32>,
    pub base: Option<u32>,
    pub named_chars: bool,
}

impl ParserConfig {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn with_type(mut self, type_name: &str) -> Self {
        self.type_name = type_name.to_string();
        self
    }

    pub fn with_address_base(mut self, base: u32) -> Self {
        self.address_base = Some(base);
        self
    }

    pub fn with_base(mut self, base: u32) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_named_chars(mut self, named: bool) -> Self {
        self.named_chars = named;
        self
    }

    pub fn address_base(&self) -> u32 {
        self.address_base.unwrap_or_else(|| self.format.default_base())
    }

    pub fn base(&self) -> u32 {
        self.base.unwrap_or_else(|| self.format.default_base())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            format: Format::Hexdump,
            type_name: "byte".to_string(),
            address_base: None,
            base: None,
            named_chars: false,
        }
    }
}

/// Resolves a type name usable as a dump column.
pub(crate) fn dump_scalar(name: &str, registry: &TypeRegistry) -> Result<ScalarType, HexdumpError> {
    let stem = name
        .strip_suffix("_le")
        .or_else(|| name.strip_suffix("_be"))
        .unwrap_or(name);
    if !SUPPORTED_TYPES.contains(&stem) {
        return Err(HexdumpError::UnsupportedType(name.to_string()));
    }
    let scalar = registry
        .resolve_scalar(name)
        .map_err(|_| HexdumpError::UnsupportedType(name.to_string()))?;
    if scalar.is_string() || scalar.size() == 0 {
        return Err(HexdumpError::UnsupportedType(name.to_string()));
    }
    Ok(scalar)
}

pub(crate) fn check_base(base: u32) -> Result<u32, HexdumpError> {
    if SUPPORTED_BASES.contains(&base) {
        Ok(base)
    } else {
        Err(HexdumpError::InvalidBase(base))
    }
}

/// Width of a numeric char token; cells add one separating column.
pub(crate) fn char_digits(base: u32) -> usize {
    match base {
        2 => 8,
        _ => 3,
    }
}

pub(crate) fn char_cell_width(base: u32) -> usize {
    char_digits(base) + 1
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub address: u64,
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(address: u64, values: Vec<Value>) -> Self {
        Self { address, values }
    }

    /// Address-only rows mark the end of a dump.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub rows: Vec<Row>,
    pub span: u64,
}

enum Line {
    Blank,
    Repeat,
    Row(Row),
}

#[derive(Debug, Clone)]
pub struct HexdumpParser {
    format: Format,
    scalar: ScalarType,
    address_base: u32,
    base: u32,
    named_chars: bool,
}

impl HexdumpParser {
    pub fn new(config: &ParserConfig, registry: &TypeRegistry) -> Result<Self, HexdumpError> {
        let scalar = dump_scalar(&config.type_name, registry)?;
        let address_base = check_base(config.address_base())?;
        let base = check_base(config.base())?;

        debug!(
            "Hexdump parser: format={} type={} address_base={} base={}",
            config.format,
            scalar.name(),
            address_base,
            base
        );

        Ok(Self {
            format: config.format,
            scalar,
            address_base,
            base,
            named_chars: config.named_chars,
        })
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn scalar(&self) -> &ScalarType {
        &self.scalar
    }

    pub fn address_base(&self) -> u32 {
        self.address_base
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn named_chars(&self) -> bool {
        self.named_chars
    }

    /// Lazily walks `text`. Each call starts from the first line.
    pub fn rows<'a>(&'a self, text: &'a str) -> Rows<'a> {
        Rows {
            parser: self,
            lines: text.lines().enumerate(),
            previous: None,
            repeat_pending: false,
            repeat: None,
            held: None,
            first_address: None,
            end_address: None,
            done: false,
        }
    }

    pub fn parse(&self, text: &str) -> Result<ParseResult, HexdumpError> {
        let mut rows = self.rows(text);
        let collected = rows.by_ref().collect::<Result<Vec<_>, _>>()?;
        Ok(ParseResult {
            rows: collected,
            span: rows.span().unwrap_or(0),
        })
    }

    pub fn unhexdump(&self, text: &str) -> Result<Vec<u8>, HexdumpError> {
        let mut rows = self.rows(text);
        let mut buf = BytesMut::new();
        for row in rows.by_ref() {
            let row = row?;
            for value in &row.values {
                put_scalar(&mut buf, &self.scalar, value)?;
            }
        }

        let span = rows.span().unwrap_or(0) as usize;
        buf.truncate(span);
        Ok(buf.to_vec())
    }

    pub fn pack(&self, values: &[Value]) -> Result<Vec<u8>, HexdumpError> {
        let mut buf = BytesMut::with_capacity(values.len() * self.scalar.size());
        for value in values {
            put_scalar(&mut buf, &self.scalar, value)?;
        }
        Ok(buf.to_vec())
    }

    /// Trailing bytes shorter than one value are ignored.
    pub fn unpack(&self, data: &[u8]) -> Result<Vec<Value>, HexdumpError> {
        let size = self.scalar.size();
        let mut buf = &data[..data.len() - data.len() % size];
        let mut values = Vec::with_capacity(data.len() / size);
        while !buf.is_empty() {
            values.push(get_scalar(&mut buf, &self.scalar)?);
        }
        Ok(values)
    }

    pub(crate) fn row_bytes(&self, row: &Row) -> u64 {
        (row.values.len() * self.scalar.size()) as u64
    }

    fn parse_line(&self, line: &str) -> Result<Line, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let line = if self.scalar.is_char() {
            line
        } else {
            ASCII_COLUMN
                .find(line)
                .map(|m| &line[..m.start()])
                .unwrap_or(line)
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Line::Blank);
        }
        if trimmed == "*" {
            return Ok(Line::Repeat);
        }

        let line = line.trim_start();
        let split = line.find(char::is_whitespace).unwrap_or(line.len());
        let (address, rest) = line.split_at(split);
        let address = u64::from_str_radix(address, self.address_base)
            .map_err(|_| format!("invalid address {:?}", address))?;

        let values = if self.scalar.is_char() {
            self.parse_char_cells(rest)?
        } else {
            rest.split_whitespace()
                .map(|token| self.parse_value(token))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Line::Row(Row::new(address, values)))
    }

    fn parse_char_cells(&self, rest: &str) -> Result<Vec<Value>, String> {
        if rest.trim().is_empty() {
            return Ok(Vec::new());
        }
        let cells: Vec<char> = rest.chars().collect();
        cells
            .chunks(char_cell_width(self.base))
            .map(|cell| {
                let cell: String = cell.iter().collect();
                self.parse_char(cell.trim()).map(Value::Char)
            })
            .collect()
    }

    fn parse_char(&self, token: &str) -> Result<u8, String> {
        if token.is_empty() {
            return Ok(b' ');
        }
        let table = if self.named_chars {
            chars::named_byte(token)
        } else {
            chars::escaped_byte(token)
        };
        if let Some(byte) = table {
            return Ok(byte);
        }

        let mut it = token.chars();
        if let (Some(c), None) = (it.next(), it.next()) {
            return u8::try_from(c as u32).map_err(|_| format!("character {:?} is not a byte", c));
        }

        u8::from_str_radix(token, self.base).map_err(|_| format!("invalid character token {:?}", token))
    }

    fn parse_value(&self, token: &str) -> Result<Value, String> {
        match self.scalar.kind() {
            TypeKind::Float => token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| format!("invalid float {:?}", token)),
            TypeKind::Char => self.parse_char(token).map(Value::Char),
            TypeKind::Int | TypeKind::UInt => self.parse_integer(token),
            TypeKind::String => Err(format!("unsupported column type {}", self.scalar.name())),
        }
    }

    fn parse_integer(&self, token: &str) -> Result<Value, String> {
        let v = i128::from_str_radix(token, self.base)
            .map_err(|_| format!("invalid base-{} integer {:?}", self.base, token))?;
        let out_of_range = || format!("{} out of range for {}", token, self.scalar.name());

        if self.scalar.kind() == TypeKind::UInt {
            if v < 0 || v > self.scalar.max_value() {
                return Err(out_of_range());
            }
            return Ok(Value::UInt(v as u64));
        }

        // Non-decimal dumps print signed columns as raw two's complement.
        let bits = (self.scalar.size() * 8) as u32;
        let unsigned_max = (1i128 << bits) - 1;
        let v = if v > self.scalar.max_value() && v <= unsigned_max {
            v - (1i128 << bits)
        } else {
            v
        };
        if v < self.scalar.min_value() || v > self.scalar.max_value() {
            return Err(out_of_range());
        }
        Ok(Value::Int(v as i64))
    }
}

#[derive(Clone)]
struct Repeat {
    next: u64,
    until: u64,
    step: u64,
    values: Vec<Value>,
}

/// Iterator over the rows of a dump, expanding `*` markers as it goes.
#[derive(Clone)]
pub struct Rows<'a> {
    parser: &'a HexdumpParser,
    lines: Enumerate<Lines<'a>>,
    previous: Option<Row>,
    repeat_pending: bool,
    repeat: Option<Repeat>,
    held: Option<Row>,
    first_address: Option<u64>,
    end_address: Option<u64>,
    done: bool,
}

impl<'a> Rows<'a> {
    /// Bytes from the first row to the end of the last row or end marker seen so far.
    ///
    /// A dump that ends with an address-only line spans up to that address. Without one, the
    /// span runs to the end of the last row's values rather than to its start address.
    pub fn span(&self) -> Option<u64> {
        match (self.first_address, self.end_address) {
            (Some(first), Some(end)) => Some(end.saturating_sub(first)),
            _ => None,
        }
    }

    fn emit(&mut self, row: Row) -> Row {
        let end = row.address.saturating_add(self.parser.row_bytes(&row));
        self.first_address.get_or_insert(row.address);
        self.end_address = Some(end);
        if !row.is_empty() {
            self.previous = Some(row.clone());
        }
        row
    }

    fn fail(&mut self, line: usize, message: String) -> Option<Result<Row, HexdumpError>> {
        self.done = true;
        Some(Err(HexdumpError::MalformedLine { line, message }))
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Result<Row, HexdumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(repeat) = self.repeat.as_mut() {
                if repeat.next < repeat.until {
                    let row = Row::new(repeat.next, repeat.values.clone());
                    repeat.next = repeat.next.saturating_add(repeat.step);
                    trace!("Repeated row at {:#x}", row.address);
                    return Some(Ok(self.emit(row)));
                }
                self.repeat = None;
            }
            if let Some(row) = self.held.take() {
                return Some(Ok(self.emit(row)));
            }

            let Some((index, line)) = self.lines.next() else {
                self.done = true;
                return None;
            };

            match self.parser.parse_line(line) {
                Err(message) => return self.fail(index + 1, message),
                Ok(Line::Blank) => continue,
                Ok(Line::Repeat) => {
                    if self.previous.is_none() {
                        return self.fail(index + 1, "repeat marker before any row".to_string());
                    }
                    self.repeat_pending = true;
                }
                Ok(Line::Row(row)) => {
                    if !std::mem::take(&mut self.repeat_pending) {
                        return Some(Ok(self.emit(row)));
                    }
                    if let Some(previous) = &self.previous {
                        let step = self.parser.row_bytes(previous);
                        if step > 0 {
                            self.repeat = Some(Repeat {
                                next: previous.address.saturating_add(step),
                                until: row.address,
                                step,
                                values: previous.values.clone(),
                            });
                        }
                    }
                    self.held = Some(row);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctypes::{Arch, TypeRegistry};

    fn registry() -> TypeRegistry {
        TypeRegistry::with_arch(Arch::X86_64)
    }

    fn parser(config: ParserConfig) -> HexdumpParser {
        HexdumpParser::new(&config, &registry()).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("od".parse::<Format>().unwrap(), Format::Od);
        assert_eq!("HEXDUMP".parse::<Format>().unwrap(), Format::Hexdump);
        assert!(matches!("xxd".parse::<Format>(), Err(HexdumpError::InvalidFormat(_))));
    }

    #[test]
    fn test_defaults_follow_format() {
        let p = parser(ParserConfig::new(Format::Od));
        assert_eq!((p.address_base(), p.base()), (8, 8));
        let p = parser(ParserConfig::new(Format::Hexdump));
        assert_eq!((p.address_base(), p.base()), (16, 16));
    }

    #[test]
    fn test_unsupported_construction() {
        let reg = registry();
        let config = ParserConfig::default().with_type("string");
        assert!(matches!(HexdumpParser::new(&config, &reg), Err(HexdumpError::UnsupportedType(_))));
        let config = ParserConfig::default().with_type("size_t");
        assert!(matches!(HexdumpParser::new(&config, &reg), Err(HexdumpError::UnsupportedType(_))));
        let config = ParserConfig::default().with_base(3);
        assert_eq!(HexdumpParser::new(&config, &reg).unwrap_err(), HexdumpError::InvalidBase(3));
    }

    #[test]
    fn test_hexdump_canonical_line() {
        let p = parser(ParserConfig::default());
        let text = "00000000  68 65 6c 6c 6f 20 77 6f  72 6c 64 0a              |hello world.|\n0000000c\n";
        let result = p.parse(text).unwrap();
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].values.len(), 12);
        assert_eq!(result.rows[0].values[0], Value::UInt(0x68));
        assert!(result.rows[1].is_empty());
        assert_eq!(result.span, 12);
        assert_eq!(p.unhexdump(text).unwrap(), b"hello world\n");
    }

    #[test]
    fn test_repeated_rows_expand_without_gaps() {
        let p = parser(ParserConfig::default());
        let zeros = vec!["00"; 16].join(" ");
        let text = format!("00000000  {z}\n*\n00000040  {z}\n00000050\n", z = zeros);

        let addresses: Vec<u64> = p.rows(&text).map(|r| r.unwrap().address).collect();
        assert_eq!(addresses, vec![0x00, 0x10, 0x20, 0x30, 0x40, 0x50]);
        assert_eq!(p.unhexdump(&text).unwrap(), vec![0u8; 0x50]);
    }

    #[test]
    fn test_repeat_before_end_marker() {
        let p = parser(ParserConfig::default());
        let text = format!("00000000  {}\n*\n00000030\n", vec!["ff"; 16].join(" "));
        let data = p.unhexdump(&text).unwrap();
        assert_eq!(data, vec![0xffu8; 0x30]);
    }

    #[test]
    fn test_repeat_before_rows_is_malformed() {
        let p = parser(ParserConfig::default());
        let err = p.parse("*\n00000010\n").unwrap_err();
        assert!(matches!(err, HexdumpError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_malformed_token_fails_parse() {
        let p = parser(ParserConfig::default());
        let err = p.parse("00000000  00 01\n00000002  zz\n").unwrap_err();
        assert!(matches!(err, HexdumpError::MalformedLine { line: 2, .. }));

        let mut rows = p.rows("00000000  zz\n00000001  00\n");
        assert!(rows.next().unwrap().is_err());
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_rows_restart() {
        let p = parser(ParserConfig::default());
        let text = "00000000  01 02\n00000002\n";
        assert_eq!(p.rows(text).count(), 2);
        assert_eq!(p.rows(text).count(), 2);
    }

    #[test]
    fn test_od_words() {
        let config = ParserConfig::new(Format::Od).with_type("uint16_le").with_base(16);
        let p = parser(config);
        let data = p.unhexdump("0000000  0102 0304\n0000004\n").unwrap();
        assert_eq!(data, vec![0x02, 0x01, 0x04, 0x03]);

        let config = ParserConfig::new(Format::Od).with_type("uint16_be").with_base(16);
        let p = parser(config);
        let data = p.unhexdump("0000000  0102\n0000002\n").unwrap();
        assert_eq!(data, vec![0x01, 0x02]);
    }

    #[test]
    fn test_signed_hex_wraps() {
        let config = ParserConfig::default().with_type("int16_le");
        let p = parser(config);
        let rows = p.parse("00000000  fffe 7fff\n").unwrap().rows;
        assert_eq!(rows[0].values, vec![Value::Int(-2), Value::Int(0x7fff)]);

        let config = ParserConfig::default().with_type("uint8");
        let p = parser(config);
        assert!(p.parse("00000000  100\n").is_err());
    }

    #[test]
    fn test_od_chars() {
        let p = parser(ParserConfig::new(Format::Od).with_type("char"));
        let text = "0000000   h   i      \\n  \\0 001\n0000006\n";
        let data = p.unhexdump(text).unwrap();
        assert_eq!(data, b"hi \n\0\x01");
    }

    #[test]
    fn test_od_named_chars() {
        let config = ParserConfig::new(Format::Od).with_type("char").with_named_chars(true);
        let p = parser(config);
        let data = p.unhexdump("0000000   a  sp nul esc del\n0000005\n").unwrap();
        assert_eq!(data, b"a \0\x1b\x7f");
    }

    #[test]
    fn test_floats() {
        let p = parser(ParserConfig::new(Format::Od).with_type("float64_le"));
        let rows = p.parse("0000000  1.5e0 -2.25\n").unwrap().rows;
        assert_eq!(rows[0].values, vec![Value::Float(1.5), Value::Float(-2.25)]);
    }

    #[test]
    fn test_pack_unpack() {
        let p = parser(ParserConfig::default().with_type("uint32_be"));
        let bytes = p.pack(&[Value::UInt(1), Value::UInt(0x0a0b0c0d)]).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 1, 0x0a, 0x0b, 0x0c, 0x0d]);
        assert_eq!(p.unpack(&bytes).unwrap(), vec![Value::UInt(1), Value::UInt(0x0a0b0c0d)]);
    }
}
