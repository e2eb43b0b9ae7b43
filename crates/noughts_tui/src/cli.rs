//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - terminal tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with a simple computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional, defaults apply if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Let the computer play O
    #[arg(long)]
    pub vs_computer: bool,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["noughts"]);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        assert!(!cli.vs_computer);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["noughts", "--vs-computer", "-c", "alt.toml"]);
        assert!(cli.vs_computer);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }
}
