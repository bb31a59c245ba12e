// Mon Oct 19 2026 - Alex

//! Server discovery: turns raw payloads fetched from third-party server
//! listings into `(host, port)` candidates.
//!
//! Every extractor is a pure function over a byte slice. The caller picks the
//! [`Dialect`] matching the shape of each configured source.

pub mod candidate;
pub mod dialect;
pub mod error;
pub mod master;
pub mod merge;
pub mod pattern;
pub mod tabular;
pub mod text;

pub use candidate::{Candidate, ServerAddr};
pub use dialect::Dialect;
pub use error::ExtractError;
pub use master::master_server_api;
pub use merge::{merge_reports, SourceReport};
pub use tabular::csv_two_columns;
pub use text::{decode_text, html_ip_port, plain_ip_port};
