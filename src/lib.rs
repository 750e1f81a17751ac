pub mod cli;
pub mod error;
pub mod highlight;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ColorChoice};
use crate::error::{Error, ErrorKind, Result};

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose, args.quiet);

    let class_name = args.class_name();

    if args.dump_normalized {
        let doc = parser::load_file(&args.input)
            .with_context(|| format!("Reading {}", args.input.display()))?;
        let path = processor::normalize(&doc).with_context(|| "Normalizing path")?;
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    // 1. ── Parse + process + emit ─────────────────────────────────────
    let code = generate(&args.input, class_name)
        .with_context(|| format!("Generating {class_name} from {}", args.input.display()))?;

    // 2. ── Save or preview ────────────────────────────────────────────
    match &args.output {
        Some(out) => {
            let saved = save(&code, out, class_name)
                .with_context(|| format!("Saving {class_name}"))?;
            log::info!("Java file saved as {}", saved.display());
        }
        None => {
            let colored = match args.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => std::io::stdout().is_terminal(),
            };
            let text = if colored {
                highlight::paint(&code, &highlight::highlight(&code))
            } else {
                code
            };
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .with_context(|| "Writing preview")?;
        }
    }

    Ok(())
}

/// Whole pipeline for one file: load, normalize, emit.
///
/// Either the complete source comes back or an error; nothing is written.
pub fn generate(input: &Path, class_name: &str) -> Result<String> {
    let doc = parser::load_file(input)?;
    let path = processor::normalize(&doc)?;
    Ok(writer::java::emit(&path, class_name))
}

/// Writes `code` and returns the path actually used.
///
/// A directory (existing, or any path ending in a separator, which is
/// created) gets `<class_name>.java` inside it; a path without extension
/// gets `.java` appended.
pub fn save(code: &str, output: &Path, class_name: &str) -> Result<PathBuf> {
    if names_directory(output) && !output.is_dir() {
        std::fs::create_dir_all(output).map_err(|e| Error::io(output, e))?;
    }
    let target = output_file(output, class_name);
    std::fs::write(&target, code).map_err(|e| Error::io(&target, e))?;
    Ok(target)
}

/// Process exit code for a failed run; error kinds keep distinct codes.
///
/// 2 is left to clap's usage errors.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let kind = err
        .chain()
        .find_map(|c| c.downcast_ref::<Error>())
        .map(Error::kind);
    match kind {
        Some(ErrorKind::UnsupportedShape) => 3,
        Some(ErrorKind::Io) => 4,
        Some(ErrorKind::Malformed) => 5,
        None => 1,
    }
}

fn names_directory(output: &Path) -> bool {
    output.is_dir()
        || output
            .as_os_str()
            .to_string_lossy()
            .ends_with(std::path::is_separator)
}

fn output_file(output: &Path, class_name: &str) -> PathBuf {
    if names_directory(output) {
        output.join(format!("{class_name}.java"))
    } else if output.extension().is_none() {
        output.with_extension("java")
    } else {
        output.to_path_buf()
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match verbose {
        _ if quiet => log::LevelFilter::Error,
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG still overrides the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(err: Error) -> anyhow::Error {
        Err::<(), _>(err)
            .with_context(|| "Generating Auto from in.pp")
            .unwrap_err()
    }

    #[test]
    fn test_exit_code_per_kind() {
        let malformed = Error::malformed("lines[0] missing `name`");
        assert_eq!(exit_code(&anyhow::Error::new(malformed)), 5);
        assert_eq!(exit_code(&wrapped(Error::malformed("x"))), 5);

        let shape = Error::UnsupportedShape {
            segment: "S".into(),
            count: 2,
        };
        assert_eq!(exit_code(&wrapped(shape)), 3);

        let io = Error::io("in.pp", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(exit_code(&wrapped(io)), 4);

        assert_eq!(exit_code(&anyhow::anyhow!("stdout closed")), 1);
    }

    #[test]
    fn test_exit_codes_avoid_clap_usage_code() {
        let kinds = [
            Error::malformed("x"),
            Error::UnsupportedShape {
                segment: "S".into(),
                count: 3,
            },
            Error::io("p", std::io::Error::from(std::io::ErrorKind::PermissionDenied)),
        ];
        for err in kinds {
            assert_ne!(exit_code(&wrapped(err)), 2);
        }
    }

    #[test]
    fn test_output_file_resolution() {
        assert_eq!(
            output_file(Path::new("Blue.java"), "Auto"),
            PathBuf::from("Blue.java")
        );
        assert_eq!(output_file(Path::new("Blue"), "Auto"), PathBuf::from("Blue.java"));
        assert_eq!(
            output_file(Path::new("not_yet/"), "Auto"),
            Path::new("not_yet/").join("Auto.java")
        );
    }
}
