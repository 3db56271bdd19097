use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `cardpatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cardpatch",
    version,
    about = "Patch a team-theme stylesheet for advanced player cards"
)]
pub struct Cli {
    /// Path to the CSS file to patch (e.g. /path/to/color-scheme.css)
    pub stylesheet: PathBuf,

    /// Quiet mode (log errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_single_positional_path() {
        let cli = Cli::try_parse_from(["cardpatch", "/srv/css/color-scheme.css"])
            .expect("cli should parse");
        assert_eq!(cli.stylesheet, Path::new("/srv/css/color-scheme.css"));
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_parse_in_either_position() {
        let cli = Cli::try_parse_from(["cardpatch", "--verbose", "a.css"]).expect("cli should parse");
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["cardpatch", "a.css", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
    }

    #[test]
    fn missing_path_is_a_usage_error_with_exit_code_2() {
        let err = Cli::try_parse_from(["cardpatch"]).expect_err("parse should fail");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn extra_positional_is_a_usage_error_with_exit_code_2() {
        let err = Cli::try_parse_from(["cardpatch", "a.css", "b.css"]).expect_err("parse should fail");
        assert_eq!(err.exit_code(), 2);
    }
}
