// Tue Jan 13 2026 - Alex

pub mod chars;
pub mod error;
pub mod formatter;
pub mod parser;

pub use error::HexdumpError;
pub use formatter::HexdumpFormatter;
pub use parser::{Format, HexdumpParser, ParseResult, ParserConfig, Row, Rows};
