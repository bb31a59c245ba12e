// Mon Oct 19 2026 - Alex

use crate::discovery::{
    csv_two_columns, html_ip_port, master_server_api, plain_ip_port, Candidate, ExtractError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of a discovery payload, chosen per source by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Free text with `IPv4:port` tokens.
    #[default]
    #[serde(alias = "text")]
    Plain,
    /// HTML where markup may sit between address, colon and port.
    #[serde(alias = "html")]
    Markup,
    /// Comma-separated rows, host and port in the first two columns.
    #[serde(alias = "tabular")]
    Csv,
    /// JSON array of `{"ip", "port"}` objects.
    #[serde(alias = "json", alias = "api")]
    MasterServer,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Plain,
        Dialect::Markup,
        Dialect::Csv,
        Dialect::MasterServer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markup => "markup",
            Self::Csv => "csv",
            Self::MasterServer => "master_server",
        }
    }

    /// Text dialects skip anything they cannot read; structured ones fail.
    pub fn is_tolerant(&self) -> bool {
        !matches!(self, Self::MasterServer)
    }

    pub fn extract(&self, content: &[u8]) -> Result<Vec<Candidate>, ExtractError> {
        match self {
            Self::Plain => Ok(plain_ip_port(content)),
            Self::Markup => Ok(html_ip_port(content)),
            Self::Csv => Ok(csv_two_columns(content)),
            Self::MasterServer => master_server_api(content),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markup" | "html" => Ok(Self::Markup),
            "csv" | "tabular" => Ok(Self::Csv),
            "master_server" | "json" | "api" => Ok(Self::MasterServer),
            _ => Err(ExtractError::UnknownDialect(s.to_string())),
        }
    }
}
