//! CLI arguments

use crate::config::{CollisionPolicy, SeedConfig};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Convert a property-records CSV into per-parcel JSON folders
#[derive(Parser, Debug)]
#[command(name = "parcel-seed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file
    #[arg(default_value = "seeding.csv")]
    pub input: PathBuf,

    /// Directory receiving one folder per parcel [default: output]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Run configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Exit with status 2 when the run stops part way
    #[arg(long)]
    pub strict: bool,

    /// What to do when two parcel ids map to the same folder
    #[arg(long, value_enum)]
    pub on_collision: Option<CollisionPolicy>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides
    pub fn resolve_config(&self) -> Result<SeedConfig> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::from_file(path)?,
            None => SeedConfig::default(),
        };

        if let Some(output_dir) = &self.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        if self.strict {
            config.strict = true;
        }
        if let Some(policy) = self.on_collision {
            config.on_collision = policy;
        }

        config.validate()?;
        Ok(config)
    }
}
