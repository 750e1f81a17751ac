use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Class name used when none (or an empty one) is given.
pub const DEFAULT_CLASS_NAME: &str = "Auto";

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Pedro Pathing .pp file into an autonomous OpMode")]
pub struct Cli {
    /// Input .pp (JSON) path file
    pub input: PathBuf,

    /// Java class name of the generated OpMode
    #[arg(short, long, default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Save to this file (or directory); prints a preview when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Colour the preview
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the normalized path as JSON instead of generating code
    #[arg(long)]
    pub dump_normalized: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Class name with the empty-string fallback applied, otherwise verbatim.
    pub fn class_name(&self) -> &str {
        if self.class_name.is_empty() {
            DEFAULT_CLASS_NAME
        } else {
            &self.class_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pedro-autogen", "path.pp"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("path.pp"));
        assert_eq!(cli.class_name(), "Auto");
        assert_eq!(cli.output, None);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_empty_class_name_falls_back() {
        let cli = Cli::try_parse_from(["pedro-autogen", "path.pp", "-c", ""]).unwrap();
        assert_eq!(cli.class_name(), DEFAULT_CLASS_NAME);
    }

    #[test]
    fn test_class_name_not_trimmed() {
        let cli = Cli::try_parse_from(["pedro-autogen", "path.pp", "-c", " Red "]).unwrap();
        assert_eq!(cli.class_name(), " Red ");
    }

    #[test]
    fn test_quiet() {
        let cli = Cli::try_parse_from(["pedro-autogen", "-q", "path.pp"]).unwrap();
        assert!(cli.quiet);
        assert!(!Cli::try_parse_from(["pedro-autogen", "path.pp"]).unwrap().quiet);

        let err = Cli::try_parse_from(["pedro-autogen", "-q", "-v", "path.pp"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "pedro-autogen",
            "in.pp",
            "--class-name",
            "BlueFar",
            "-o",
            "out/",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.class_name(), "BlueFar");
        assert_eq!(cli.output, Some(PathBuf::from("out/")));
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.verbose, 2);
    }
}
