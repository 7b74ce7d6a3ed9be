use std::path::{Path, PathBuf};

use clap::Parser;
use faultline_config::{FaultlineConfig, View};

/// Top-level CLI parser for the `faultline` binary.
#[derive(Debug, Parser)]
#[command(
    name = "faultline",
    version,
    about = "Print serialized faults as a rendering or one of their JSON projections"
)]
pub struct Cli {
    /// Input file holding one JSON fault or JSON lines; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Projection to print: render, public, diagnostic, full
    #[arg(long)]
    pub view: Option<View>,

    /// Print JSON views on a single line
    #[arg(long)]
    pub compact: bool,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings after CLI flags are layered over the loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub view: View,
    pub pretty: bool,
    pub log_level: String,
}

impl Cli {
    /// Flags override config; unset flags leave config values alone.
    #[must_use]
    pub fn settings(&self, config: &FaultlineConfig) -> Settings {
        let log_level = if self.quiet {
            "error".to_string()
        } else if self.verbose {
            "debug".to_string()
        } else {
            config.log.level.clone()
        };

        Settings {
            view: self.view.unwrap_or(config.output.view),
            pretty: config.output.pretty && !self.compact,
            log_level,
        }
    }

    /// `None` when input comes from stdin.
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_come_from_config() {
        let cli = Cli::try_parse_from(["faultline"]).expect("cli should parse");
        let settings = cli.settings(&FaultlineConfig::default());
        assert_eq!(
            settings,
            Settings {
                view: View::Render,
                pretty: true,
                log_level: "warn".into(),
            }
        );
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "faultline",
            "--view",
            "public",
            "--compact",
            "-v",
            "f.json",
        ])
        .expect("cli should parse");
        let settings = cli.settings(&FaultlineConfig::default());
        assert_eq!(settings.view, View::Public);
        assert!(!settings.pretty);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(cli.input_path(), Some(Path::new("f.json")));
    }

    #[test]
    fn dash_means_stdin() {
        let cli = Cli::try_parse_from(["faultline", "-"]).expect("cli should parse");
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!(Cli::try_parse_from(["faultline", "--view", "everything"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["faultline", "-q", "-v"]).is_err());
    }
}
