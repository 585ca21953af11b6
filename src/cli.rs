use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Normalize country names across English, Chinese and short codes.", long_about = None)]
pub struct Cli {
    /// Country names, Chinese names or codes to resolve. Read from stdin when omitted.
    pub names: Vec<String>,

    /// Read names from a file, one per line.
    #[arg(short = 'f', long = "file", conflicts_with = "names")]
    pub file: Option<PathBuf>,

    // Mode Flags (Mutually Exclusive via 'mode' group)

    /// Map to the counterpart name: English to Chinese, Chinese or code to English.
    #[arg(short = 'n', long = "normalize", group = "mode")]
    pub normalize: bool,

    /// Map to the standard English name used by map datasets.
    #[arg(short = 'e', long = "english", group = "mode")]
    pub english: bool,

    /// Output format.
    #[arg(short = 'o', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the supported countries and exit.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Fail if any name cannot be resolved.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Quiet output. No summary line is printed.
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Store the effective mode and format as defaults in the config file.
    #[arg(long = "save-defaults")]
    pub save_defaults: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The mode selected by flags, if any.
    pub fn mode(&self) -> Option<Mode> {
        if self.normalize {
            Some(Mode::Normalize)
        } else if self.english {
            Some(Mode::English)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Normalize,
    #[default]
    English,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_mode() {
        let cli = Cli::try_parse_from(["countrynorm", "-n", "China", "us"]).unwrap();
        assert_eq!(cli.names, vec!["China", "us"]);
        assert_eq!(cli.mode(), Some(Mode::Normalize));
        assert_eq!(cli.format, None);

        let cli = Cli::try_parse_from(["countrynorm", "--english", "-o", "json", "中国"]).unwrap();
        assert_eq!(cli.mode(), Some(Mode::English));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["countrynorm", "-n", "-e", "China"]).is_err());
    }

    #[test]
    fn test_file_conflicts_with_names() {
        assert!(Cli::try_parse_from(["countrynorm", "-f", "names.txt", "China"]).is_err());
        let cli = Cli::try_parse_from(["countrynorm", "-f", "names.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("names.txt")));
        assert!(cli.names.is_empty());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["countrynorm", "-vv", "--list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.list);
        assert_eq!(cli.mode(), None);
    }
}
