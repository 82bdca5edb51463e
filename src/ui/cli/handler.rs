// Wed Jan 15 2026 - Alex

use super::args::{Args, Command, DumpOptions, HexdumpArgs, SizeofArgs, TypesArgs, UnhexdumpArgs, UnpackArgs};
use crate::config::Config;
use crate::ctypes::{Endian, TypeRegistry};
use crate::hexdump::{HexdumpFormatter, HexdumpParser};
use crate::structure::{serializer, SerializableLayout, StructInstance};
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;
        if args.no_color {
            colored::control::set_override(false);
        }

        let config = self.load_config(&args)?;
        let mut registry = config.registry()?;
        log::debug!(
            "Registry for {} ({}): {}",
            registry.arch(),
            registry.os().map(|os| os.to_string()).unwrap_or_else(|| "no os".to_string()),
            registry.layer_names().join(" -> ")
        );

        match args.command {
            Command::Unhexdump(cmd) => self.handle_unhexdump(cmd, &config, &registry),
            Command::Hexdump(cmd) => self.handle_hexdump(cmd, &config, &registry),
            Command::Types(cmd) => self.handle_types(cmd, &registry),
            Command::Sizeof(cmd) => self.handle_sizeof(cmd, &registry),
            Command::Unpack(cmd) => self.handle_unpack(cmd, &config, &mut registry),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .init();

        Ok(())
    }

    fn load_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => Config::default(),
        };
        if let Some(arch) = &args.arch {
            config = config.with_arch(arch);
        }
        if let Some(os) = &args.os {
            config = config.with_os(os);
        }
        if let Some(endian) = &args.endian {
            config = config.with_endian(endian.parse::<Endian>()?);
        }
        config.validate()?;
        Ok(config)
    }

    /// Command-line dump options layered over the config file's settings.
    fn dump_config(&self, config: &Config, options: &DumpOptions) -> anyhow::Result<Config> {
        let mut settings = config.hexdump.clone();
        if let Some(format) = &options.format {
            settings.format = format.parse()?;
        }
        if let Some(type_name) = &options.type_name {
            settings.type_name = type_name.clone();
        }
        if options.address_base.is_some() {
            settings.address_base = options.address_base;
        }
        if options.base.is_some() {
            settings.base = options.base;
        }
        if options.named_chars {
            settings.named_chars = true;
        }

        let merged = config.clone().with_hexdump(settings);
        merged.validate()?;
        Ok(merged)
    }

    fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "[+]".green(), message);
        }
    }

    fn handle_unhexdump(&self, args: UnhexdumpArgs, config: &Config, registry: &TypeRegistry) -> anyhow::Result<()> {
        let config = self.dump_config(config, &args.dump)?;
        let parser = HexdumpParser::new(&config.parser_config(registry), registry)?;

        let text = String::from_utf8(read_input(args.input.as_deref())?).context("Dump text is not UTF-8")?;
        let data = parser.unhexdump(&text)?;
        write_output(args.output.as_deref(), &data)?;

        self.status(&format!(
            "Decoded {} bytes as {} ({})",
            data.len(),
            parser.scalar().name().cyan(),
            parser.format()
        ));
        Ok(())
    }

    fn handle_hexdump(&self, args: HexdumpArgs, config: &Config, registry: &TypeRegistry) -> anyhow::Result<()> {
        let config = self.dump_config(config, &args.dump)?;
        let mut formatter = HexdumpFormatter::from_config(&config.parser_config(registry), registry)?
            .with_row_width(args.row_width.unwrap_or(config.hexdump.row_width))
            .with_repeats(config.hexdump.repeats && !args.no_squeeze);
        if args.no_ascii {
            formatter = formatter.with_ascii(false);
        }

        let data = read_input(args.input.as_deref())?;
        let text = formatter.format(&data)?;
        write_output(args.output.as_deref(), text.as_bytes())?;

        self.status(&format!("Rendered {} bytes as {}", data.len(), formatter.scalar().name().cyan()));
        Ok(())
    }

    fn handle_types(&self, args: TypesArgs, registry: &TypeRegistry) -> anyhow::Result<()> {
        let names: Vec<&str> = registry
            .names()
            .into_iter()
            .filter(|name| args.filter.as_deref().map_or(true, |f| name.contains(f)))
            .collect();

        if args.json {
            let mut map = serde_json::Map::new();
            for name in &names {
                let ctype = registry.resolve(name)?;
                map.insert(name.to_string(), serializer::describe(&ctype));
            }
            println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(map))?);
            return Ok(());
        }

        for name in &names {
            let ctype = registry.resolve(name)?;
            let alias = registry.lookup(name).map_or(false, |entry| entry.is_alias());
            let target = if alias {
                format!("-> {}", ctype.name()).dimmed().to_string()
            } else {
                String::new()
            };
            println!("{:<24} {:>4}  {}", name.bold(), ctype.size(), target);
        }
        self.status(&format!("{} types for {}", names.len(), registry.arch()));
        Ok(())
    }

    fn handle_sizeof(&self, args: SizeofArgs, registry: &TypeRegistry) -> anyhow::Result<()> {
        for name in &args.names {
            let ctype = registry.resolve(name)?;
            println!("{} {}", name, ctype.size());
        }
        Ok(())
    }

    fn handle_unpack(&self, args: UnpackArgs, config: &Config, registry: &mut TypeRegistry) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let text = fs::read_to_string(&args.layouts)?;
        let layouts: Vec<SerializableLayout> =
            serde_json::from_str(&text).with_context(|| format!("Invalid layout file {:?}", args.layouts))?;
        SerializableLayout::define_all(&layouts, registry)?;

        let ctype = registry.resolve(&args.name)?;
        let layout = ctype
            .as_struct()
            .ok_or_else(|| anyhow::anyhow!("{} is not a struct", args.name))?;

        let data = fs::read(&args.input)?;
        let data = data
            .get(args.offset..)
            .ok_or_else(|| anyhow::anyhow!("Offset {} is past the end of the input", args.offset))?;
        let instance = StructInstance::from_bytes(layout.clone(), data, config.endian)?;

        println!("{}", serde_json::to_string_pretty(&serializer::instance_to_json(&instance))?);
        self.status(&format!("Decoded {} ({} bytes)", layout.name().cyan(), layout.size()));
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {:?}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, data).with_context(|| format!("Failed to write {:?}", path)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
