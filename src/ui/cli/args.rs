// Mon Oct 19 2026 - Alex

use crate::discovery::Dialect;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "swat4-discovery")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Extracts SWAT4 server addresses from discovery payloads", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract candidates from payload files (stdin when none are given)
    Extract(ExtractArgs),
    /// Extract every configured source snapshot and merge the results
    Discover(DiscoverArgs),
    /// Print or write the default source configuration
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    #[arg(short, long, default_value = "plain")]
    pub dialect: Dialect,

    pub files: Vec<PathBuf>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DiscoverArgs {
    #[arg(short, long)]
    pub config: PathBuf,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn validate(&self) -> Result<(), String> {
        for file in &self.files {
            if !file.exists() {
                return Err(format!("Input file does not exist: {:?}", file));
            }
        }
        Ok(())
    }
}

impl DiscoverArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.config.exists() {
            return Err(format!("Config file does not exist: {:?}", self.config));
        }
        Ok(())
    }
}
