// Tue Jan 13 2026 - Alex

use binkit::ctypes::{Arch, TypeRegistry, Value};
use binkit::hexdump::{Format, HexdumpFormatter, HexdumpParser, ParserConfig};

fn sample() -> Vec<u8> {
    let mut data: Vec<u8> = (0..=255u8).collect();
    data.extend_from_slice(&[0u8; 64]);
    data.extend_from_slice(&[1, 2, 3, 4, 5]);
    data
}

fn round_trip(registry: &TypeRegistry, config: ParserConfig, data: &[u8]) {
    let text = HexdumpFormatter::from_config(&config, registry).unwrap().format(data).unwrap();
    let parser = HexdumpParser::new(&config, registry).unwrap();
    assert_eq!(parser.unhexdump(&text).unwrap(), data, "{:?}\n{}", config, text);
}

#[test]
fn test_integer_round_trips() {
    let registry = TypeRegistry::with_arch(Arch::X86_64);
    let data = sample();
    let cases = [
        (Format::Hexdump, "byte", 16),
        (Format::Hexdump, "uint16_le", 16),
        (Format::Hexdump, "int32_be", 10),
        (Format::Od, "uint32", 8),
        (Format::Od, "int16", 10),
        (Format::Od, "uint64_be", 2),
        (Format::Od, "int8", 16),
    ];
    for (format, type_name, base) in cases {
        let config = ParserConfig::new(format).with_type(type_name).with_base(base);
        round_trip(&registry, config, &data);
    }
}

#[test]
fn test_char_round_trips() {
    let registry = TypeRegistry::new();
    let data = sample();
    for named in [false, true] {
        for base in [8, 10, 16, 2] {
            let config = ParserConfig::new(Format::Od)
                .with_type("char")
                .with_base(base)
                .with_named_chars(named);
            round_trip(&registry, config, &data);
        }
    }
    round_trip(&registry, ParserConfig::new(Format::Hexdump).with_type("uchar"), b"a\\b |c|\td\n");
}

#[test]
fn test_decimal_char_escapes_round_trip() {
    let registry = TypeRegistry::new();
    let data: Vec<u8> = (0..=255u8).chain(b"0123456789".iter().copied()).collect();
    for type_name in ["char", "uchar"] {
        let config = ParserConfig::new(Format::Od).with_type(type_name).with_base(10);
        round_trip(&registry, config, &data);
    }

    let config = ParserConfig::new(Format::Od).with_type("char").with_base(10);
    let parser = HexdumpParser::new(&config, &registry).unwrap();
    let data = parser.unhexdump("0000000   7 007  \\a  \\0\n0000004\n").unwrap();
    assert_eq!(data, [b'7', 0x07, 0x07, 0x00]);
}

#[test]
fn test_float_round_trip() {
    let registry = TypeRegistry::new();
    let values = [0.0f64, -1.5, 3.25e-7, 6.02214076e23, f64::MAX];
    for type_name in ["float64_le", "double", "float32_be"] {
        let config = ParserConfig::new(Format::Od).with_type(type_name);
        let parser = HexdumpParser::new(&config, &registry).unwrap();
        let floats: Vec<Value> = values
            .iter()
            .filter(|v| type_name != "float32_be" || v.abs() < f32::MAX as f64)
            .map(|&v| Value::Float(v))
            .collect();
        let data = parser.pack(&floats).unwrap();
        round_trip(&registry, config, &data);
    }
}

#[test]
fn test_address_bases() {
    let registry = TypeRegistry::new();
    let data = sample();
    for address_base in [2, 8, 10, 16] {
        let config = ParserConfig::new(Format::Hexdump).with_address_base(address_base);
        round_trip(&registry, config, &data);
    }
}

#[test]
fn test_repeated_rows_addresses() {
    let registry = TypeRegistry::new();
    let parser = HexdumpParser::new(&ParserConfig::default(), &registry).unwrap();
    let row = vec!["2a"; 16].join(" ");
    let text = format!("00000000  {row}  |****************|\n*\n00000040  {row}  |****************|\n");

    let result = parser.parse(&text).unwrap();
    let addresses: Vec<u64> = result.rows.iter().map(|r| r.address).collect();
    assert_eq!(addresses, [0x00, 0x10, 0x20, 0x30, 0x40]);
    assert!(result.rows.iter().all(|r| r.values == result.rows[0].values));
    assert_eq!(result.span, 0x50);
}

#[test]
fn test_end_marker_truncates_padding() {
    let registry = TypeRegistry::new();
    let config = ParserConfig::new(Format::Od).with_type("uint32_le").with_base(16);
    let parser = HexdumpParser::new(&config, &registry).unwrap();
    let data = parser.unhexdump("0000000  64636261 00000065\n0000005\n").unwrap();
    assert_eq!(data, b"abcde");
}
