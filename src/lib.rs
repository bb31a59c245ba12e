// Mon Oct 19 2026 - Alex

pub mod config;
pub mod discovery;
pub mod ui;
pub mod utils;
pub mod xjson;

pub use config::{DiscoveryConfig, SourceConfig};
pub use discovery::{merge_reports, Candidate, Dialect, ExtractError, ServerAddr, SourceReport};
pub use xjson::{decode, encode, CacheSerializer, Value, XJsonError, XJsonSerializer};
