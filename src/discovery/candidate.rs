// Mon Oct 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(host, port)` pair exactly as it appeared in a discovery payload.
///
/// Both halves stay textual; liveness and address parsing happen later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Candidate {
    pub host: String,
    pub port: String,
}

impl Candidate {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.host, &self.port)
    }

    /// `None` when the port text is not a number that fits in `u16`.
    pub fn to_server_addr(&self) -> Option<ServerAddr> {
        let port = self.port.trim().parse::<u16>().ok()?;
        Some(ServerAddr::new(self.host.trim(), port))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl<H: Into<String>, P: Into<String>> From<(H, P)> for Candidate {
    fn from((host, port): (H, P)) -> Self {
        Self::new(host, port)
    }
}

/// A deduplicated server address with a numeric port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServerAddr {
    pub host: String,
    pub port: u16,
}

impl ServerAddr {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_display() {
        let candidate = Candidate::new("1.2.3.4", "10480");
        assert_eq!(candidate.to_string(), "1.2.3.4:10480");
        assert_eq!(candidate.as_tuple(), ("1.2.3.4", "10480"));
    }

    #[test]
    fn test_candidate_from_tuple() {
        let candidate: Candidate = ("1.2.3.4", String::from("80")).into();
        assert_eq!(candidate, Candidate::new("1.2.3.4", "80"));
    }

    #[test]
    fn test_to_server_addr() {
        let addr = Candidate::new("1.2.3.4", " 10480 ").to_server_addr().unwrap();
        assert_eq!(addr, ServerAddr::new("1.2.3.4", 10480));
        assert_eq!(addr.to_string(), "1.2.3.4:10480");

        assert!(Candidate::new("1.2.3.4", "99999").to_server_addr().is_none());
        assert!(Candidate::new("1.2.3.4", "port").to_server_addr().is_none());
    }

    #[test]
    fn test_server_addr_ordering() {
        let mut addrs = vec![
            ServerAddr::new("2.2.2.2", 1),
            ServerAddr::new("1.1.1.1", 20),
            ServerAddr::new("1.1.1.1", 3),
        ];
        addrs.sort();
        assert_eq!(addrs[0], ServerAddr::new("1.1.1.1", 3));
        assert_eq!(addrs[2], ServerAddr::new("2.2.2.2", 1));
    }
}
