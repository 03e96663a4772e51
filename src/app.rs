use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Deserialize)]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "statline [OPTIONS] [PATH]...")]
#[derive(Clone)]
pub struct Args {
    /// Path to a config file (TOML)
    #[arg(long)]
    #[serde(default)]
    pub config: Option<PathBuf>,

    /// The paths to inspect. A directory is listed one level deep; a file is
    /// shown directly. Defaults to the current directory.
    #[arg(default_value = ".")]
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Show hidden entries ("." and ".." never appear).
    #[arg(short = 'a', long)]
    #[serde(default)]
    pub all: bool,

    /// Render a labeled metadata block per entry instead of one line.
    #[arg(short = 'b', long)]
    #[serde(default)]
    pub block: bool,

    /// Render the inode properties of each entry.
    #[arg(long, conflicts_with = "block")]
    #[serde(default)]
    pub inode: bool,
}

impl Args {
    /// Load `Args` from CLI + TOML file (if it exists).
    /// CLI values override those from the file.
    pub fn load() -> Self {
        let cli_args = Args::parse(); // read CLI

        if let Some(config_path) = cli_args.config.clone() {
            if let Some(file_args) = Self::from_file(&config_path) {
                return Self::merge(file_args, cli_args);
            }
        }

        cli_args
    }

    fn from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        toml::from_str::<Args>(&content).ok()
    }

    /// Merge two Args: CLI values override those from the file
    fn merge(mut file: Args, cli: Args) -> Args {
        if cli.config.is_some() {
            file.config = cli.config;
        }

        // Paths: the CLI wins unless it carries only the default.
        if cli.paths != vec![PathBuf::from(".")] || file.paths.is_empty() {
            file.paths = cli.paths;
        }

        // Boolean fields: if true in CLI → override
        macro_rules! merge_flag {
            ($field:ident) => {
                if cli.$field {
                    file.$field = true;
                }
            };
        }

        merge_flag!(all);
        merge_flag!(block);
        merge_flag!(inode);

        file
    }
}
