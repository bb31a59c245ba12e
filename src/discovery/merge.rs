// Mon Oct 19 2026 - Alex

use crate::discovery::{Candidate, Dialect, ExtractError, ServerAddr};
use std::collections::BTreeSet;

/// Outcome of extracting one discovery source.
#[derive(Debug)]
pub struct SourceReport {
    pub source: String,
    pub outcome: Result<Vec<Candidate>, ExtractError>,
}

impl SourceReport {
    pub fn new(source: impl Into<String>, outcome: Result<Vec<Candidate>, ExtractError>) -> Self {
        Self {
            source: source.into(),
            outcome,
        }
    }

    pub fn extract(source: impl Into<String>, dialect: Dialect, content: &[u8]) -> Self {
        Self::new(source, dialect.extract(content))
    }

    pub fn candidates(&self) -> &[Candidate] {
        match &self.outcome {
            Ok(candidates) => candidates,
            Err(_) => &[],
        }
    }
}

/// Unions the candidates of all successful sources into unique addresses.
///
/// Failed sources are skipped. Candidates whose port does not fit in a `u16`
/// are dropped.
pub fn merge_reports(reports: &[SourceReport]) -> BTreeSet<ServerAddr> {
    let mut addrs = BTreeSet::new();

    for report in reports {
        match &report.outcome {
            Err(e) => {
                log::warn!("got error while scraping {}: {}", report.source, e);
            }
            Ok(candidates) if candidates.is_empty() => {
                log::info!("received no servers from {}", report.source);
            }
            Ok(candidates) => {
                log::info!("received {} servers from {}", candidates.len(), report.source);
                for candidate in candidates {
                    match candidate.to_server_addr() {
                        Some(addr) => {
                            addrs.insert(addr);
                        }
                        None => {
                            log::debug!("dropping {} from {}: invalid port", candidate, report.source);
                        }
                    }
                }
            }
        }
    }

    if addrs.is_empty() {
        log::warn!("discovered no servers from {} sources", reports.len());
    }

    addrs
}
