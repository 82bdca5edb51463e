// Tue Jan 13 2026 - Alex

/// Backslash escapes used by `od -c` and `hexdump -c`.
pub const ESCAPED_CHARS: &[(&str, u8)] = &[
    ("\\0", 0x00),
    ("\\a", 0x07),
    ("\\b", 0x08),
    ("\\t", 0x09),
    ("\\n", 0x0a),
    ("\\v", 0x0b),
    ("\\f", 0x0c),
    ("\\r", 0x0d),
    ("\\\\", 0x5c),
];

/// Mnemonics used by `od -a`.
pub const NAMED_CHARS: &[(&str, u8)] = &[
    ("nul", 0x00),
    ("soh", 0x01),
    ("stx", 0x02),
    ("etx", 0x03),
    ("eot", 0x04),
    ("enq", 0x05),
    ("ack", 0x06),
    ("bel", 0x07),
    ("bs", 0x08),
    ("ht", 0x09),
    ("nl", 0x0a),
    ("vt", 0x0b),
    ("ff", 0x0c),
    ("cr", 0x0d),
    ("so", 0x0e),
    ("si", 0x0f),
    ("dle", 0x10),
    ("dc1", 0x11),
    ("dc2", 0x12),
    ("dc3", 0x13),
    ("dc4", 0x14),
    ("nak", 0x15),
    ("syn", 0x16),
    ("etb", 0x17),
    ("can", 0x18),
    ("em", 0x19),
    ("sub", 0x1a),
    ("esc", 0x1b),
    ("fs", 0x1c),
    ("gs", 0x1d),
    ("rs", 0x1e),
    ("us", 0x1f),
    ("sp", 0x20),
    ("del", 0x7f),
];

fn lookup(table: &[(&str, u8)], token: &str) -> Option<u8> {
    table.iter().find(|(name, _)| *name == token).map(|(_, byte)| *byte)
}

fn reverse(table: &'static [(&'static str, u8)], byte: u8) -> Option<&'static str> {
    table.iter().find(|(_, b)| *b == byte).map(|(name, _)| *name)
}

pub fn escaped_byte(token: &str) -> Option<u8> {
    lookup(ESCAPED_CHARS, token)
}

pub fn named_byte(token: &str) -> Option<u8> {
    lookup(NAMED_CHARS, token)
}

pub fn escape_for(byte: u8) -> Option<&'static str> {
    reverse(ESCAPED_CHARS, byte)
}

pub fn name_for(byte: u8) -> Option<&'static str> {
    reverse(NAMED_CHARS, byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        assert_eq!(escaped_byte("\\n"), Some(b'\n'));
        assert_eq!(escaped_byte("\\\\"), Some(b'\\'));
        assert_eq!(named_byte("esc"), Some(0x1b));
        assert_eq!(named_byte("sp"), Some(b' '));
        assert_eq!(named_byte("xyz"), None);
        assert_eq!(name_for(0x7f), Some("del"));
        assert_eq!(escape_for(0), Some("\\0"));
        assert_eq!(escape_for(b'A'), None);
    }
}
