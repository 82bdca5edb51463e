// Wed Jan 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "binkit")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "C type registry, struct codec and hexdump/od converter", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub arch: Option<String>,

    #[arg(long, global = true)]
    pub os: Option<String>,

    /// little, big, native or network
    #[arg(long, global = true)]
    pub endian: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert hexdump or od text back into bytes
    Unhexdump(UnhexdumpArgs),
    /// Render bytes as hexdump or od text
    Hexdump(HexdumpArgs),
    /// List every type known to the registry
    Types(TypesArgs),
    /// Print the size of one or more types
    Sizeof(SizeofArgs),
    /// Decode a struct from a binary file using JSON layouts
    Unpack(UnpackArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct DumpOptions {
    /// hexdump or od
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,

    #[arg(long)]
    pub address_base: Option<u32>,

    #[arg(short, long)]
    pub base: Option<u32>,

    #[arg(long)]
    pub named_chars: bool,
}

#[derive(Parser, Debug)]
pub struct UnhexdumpArgs {
    /// Defaults to stdin
    pub input: Option<PathBuf>,

    /// Defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub dump: DumpOptions,
}

#[derive(Parser, Debug)]
pub struct HexdumpArgs {
    /// Defaults to stdin
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub dump: DumpOptions,

    /// Bytes per row
    #[arg(short = 'w', long)]
    pub row_width: Option<usize>,

    /// Print every row instead of collapsing repeats to `*`
    #[arg(long)]
    pub no_squeeze: bool,

    #[arg(long)]
    pub no_ascii: bool,
}

#[derive(Parser, Debug)]
pub struct TypesArgs {
    /// Only names containing this text
    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SizeofArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct UnpackArgs {
    /// JSON array of struct layouts
    #[arg(long)]
    pub layouts: PathBuf,

    /// Struct to decode
    #[arg(short, long)]
    pub name: String,

    pub input: PathBuf,

    #[arg(long, default_value = "0")]
    pub offset: usize,
}

impl UnpackArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.layouts.exists() {
            return Err(format!("Layout file does not exist: {:?}", self.layouts));
        }
        if !self.input.exists() {
            return Err(format!("Input file does not exist: {:?}", self.input));
        }
        Ok(())
    }
}
