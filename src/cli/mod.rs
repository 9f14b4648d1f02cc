//! CLI command definitions and parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "unimatch",
    version,
    author = "neur0map",
    about = "University course recommendations from interests, grades, and preferences",
    long_about = "Unimatch scores a university course catalog against a student profile using \
                  term-vector similarity, filters out courses the student is not eligible for, \
                  fuses league-table ranks into each result, and explains every recommendation \
                  it makes."
)]
pub struct Cli {
    /// Global config file path (defaults to ~/.config/unimatch/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend courses for free-text interests or a saved profile
    Recommend {
        /// Free-text interests and goals (ignored when --profile is given)
        query: Option<String>,

        /// Path to a JSON profile file
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Courses CSV (overrides the configured path)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Rankings CSV (overrides the configured path)
        #[arg(long)]
        rankings: Option<PathBuf>,

        /// Result ordering
        #[arg(short, long, value_parser = ["compatibility", "universities"], default_value = "compatibility")]
        sort: String,

        /// Print the whole result set instead of the first batch
        #[arg(long)]
        all: bool,

        /// Show results in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that a courses CSV has every required column
    Validate {
        /// Courses CSV to check
        catalog: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Validate configuration file
    Validate {
        /// Path to config file (defaults to standard location)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
