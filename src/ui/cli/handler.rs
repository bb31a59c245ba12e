// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, ConfigArgs, DiscoverArgs, ExtractArgs};
use crate::config::DiscoveryConfig;
use crate::discovery::{merge_reports, Candidate, Dialect, ServerAddr, SourceReport};
use crate::utils::{format_duration, LoggingUtils, ScopedTimer};
use anyhow::Context;
use colored::Colorize;
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads and extracts every file in parallel. Reports come back in the order
/// of `files`; an unreadable file aborts the whole run.
pub fn extract_files(files: &[PathBuf], dialect: Dialect) -> anyhow::Result<Vec<SourceReport>> {
    files
        .par_iter()
        .map(|path| -> anyhow::Result<SourceReport> {
            let content =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            log::debug!("read {} bytes from {}", content.len(), path.display());
            Ok(SourceReport::extract(path.display().to_string(), dialect, &content))
        })
        .collect()
}

/// Errors when any report failed to extract.
pub fn ensure_extracted(reports: &[SourceReport], dialect: Dialect) -> anyhow::Result<()> {
    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} inputs could not be parsed as {}",
            failed,
            reports.len(),
            dialect
        );
    }
    Ok(())
}

/// Extracts every source that has a readable snapshot. Relative snapshot
/// paths are taken from `base`, the directory holding the config file.
pub fn extract_snapshots(config: &DiscoveryConfig, base: &Path) -> Vec<SourceReport> {
    config
        .sources
        .par_iter()
        .filter_map(|source| {
            let Some(path) = source.resolve_snapshot(base) else {
                log::warn!("skipping {}: no snapshot for {}", source.name, source.url);
                return None;
            };
            match fs::read(&path) {
                Ok(content) => Some(SourceReport::extract(
                    source.name.clone(),
                    source.dialect,
                    &content,
                )),
                Err(e) => {
                    log::warn!("skipping {}: cannot read {}: {}", source.name, path.display(), e);
                    None
                }
            }
        })
        .collect()
}

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args);

        match args.command {
            Command::Extract(extract_args) => self.handle_extract(extract_args),
            Command::Discover(discover_args) => self.handle_discover(discover_args),
            Command::Config(config_args) => self.handle_config(config_args),
        }
    }

    fn setup_logging(&self, args: &Args) {
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level));
    }

    fn status(&self, line: String) {
        if !self.quiet {
            eprintln!("{}", line);
        }
    }

    fn handle_extract(&self, args: ExtractArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let _timer = ScopedTimer::new("extract");

        let reports = if args.files.is_empty() {
            let mut content = Vec::new();
            io::stdin()
                .read_to_end(&mut content)
                .context("Failed to read stdin")?;
            vec![SourceReport::extract("<stdin>", args.dialect, &content)]
        } else {
            extract_files(&args.files, args.dialect)?
        };

        let mut candidates: Vec<&Candidate> = Vec::new();
        for report in &reports {
            match &report.outcome {
                Ok(found) => {
                    self.status(format!(
                        "{} {} candidates in {}",
                        "[+]".green(),
                        found.len(),
                        report.source
                    ));
                    candidates.extend(found);
                }
                Err(e) => eprintln!("{} {}: {}", "[!]".red(), report.source, e),
            }
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        } else if !candidates.is_empty() {
            println!("{}", candidates.iter().join("\n"));
        }

        ensure_extracted(&reports, args.dialect)
    }

    fn handle_discover(&self, args: DiscoverArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let timer = ScopedTimer::new("discover");

        let config = DiscoveryConfig::load(&args.config)
            .with_context(|| format!("Failed to load {}", args.config.display()))?;
        let base = args.config.parent().unwrap_or_else(|| Path::new("."));

        self.status(format!(
            "{} Loaded {} sources from {}",
            "[*]".blue(),
            config.sources.len(),
            args.config.display()
        ));

        let reports = extract_snapshots(&config, base);
        let addrs: BTreeSet<ServerAddr> = merge_reports(&reports);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&addrs)?);
        } else if !addrs.is_empty() {
            println!("{}", addrs.iter().join("\n"));
        }

        self.status(format!(
            "{} {} unique servers from {} sources in {}",
            "[+]".green(),
            addrs.len(),
            reports.len(),
            format_duration(timer.elapsed())
        ));
        Ok(())
    }

    fn handle_config(&self, args: ConfigArgs) -> anyhow::Result<()> {
        let config = DiscoveryConfig::default();

        match args.output {
            Some(path) => {
                config
                    .save(&path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                self.status(format!("{} Config written to: {}", "[+]".green(), path.display()));
            }
            None => println!("{}", serde_json::to_string_pretty(&config)?),
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
