use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pms")]
#[command(about = "Enumerate and document metadata standard attribute sets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory of atomic set CSV files
    #[arg(short, long, global = true, default_value = ".")]
    pub atomic_dir: PathBuf,

    /// YAML file of composite set definitions
    #[arg(short, long, global = true)]
    pub composites: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Prefix separator (overrides the configuration file)
    #[arg(short, long, global = true)]
    pub separator: Option<String>,

    /// Log level written to stderr (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List set names, or the qualified attribute names of one set
    #[command(alias = "ls")]
    List {
        /// Set to flatten
        set: Option<String>,
    },

    /// Print an indented rendering of a set
    #[command(alias = "p")]
    Print { set: String },

    /// Export a set as CSV rows for documentation tables
    Export {
        set: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the flattened attribute records of a set as JSON
    Json { set: String },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pms",
            "export",
            "downscaled",
            "--atomic-dir",
            "data/atomic",
            "-s",
            ".",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.atomic_dir.to_str(), Some("data/atomic"));
        assert_eq!(cli.separator.as_deref(), Some("."));
        assert!(matches!(
            cli.command,
            Commands::Export { ref set, output: None } if set == "downscaled"
        ));
    }

    #[test]
    fn list_without_set_is_allowed() {
        let cli = Cli::try_parse_from(["pms", "ls"]).expect("arguments should parse");
        assert!(matches!(cli.command, Commands::List { set: None }));
    }
}
