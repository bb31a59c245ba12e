// Mon Oct 19 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

/// One dotted-quad component. Each branch covers one numeric band
/// (250-255, 200-249, 0-199) so an octet above 255 can never match.
pub const IPV4_OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

pub const PORT: &str = r"[0-9]{1,5}";

pub fn ipv4() -> String {
    format!(r"(?:{octet}\.){{3}}{octet}", octet = IPV4_OCTET)
}

/// `IPv4:port` as a standalone token.
pub static PLAIN_IP_PORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?P<addr>{}):(?P<port>{})\b", ipv4(), PORT))
        .expect("plain ip:port pattern is valid")
});

/// Address and port split by markup, e.g. `<b>1.2.3.4</b>:<i>10480</i>`.
/// A colon must still appear between the two. The address may not run on
/// into another digit or dot, so `1.2.3.256` is never cut down to `1.2.3.25`.
pub static MARKUP_IP_PORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?P<addr>{})(?:[^0-9.:][^:]*)?:[^0-9]*(?P<port>{})\b",
        ipv4(),
        PORT
    ))
    .expect("markup ip:port pattern is valid")
});
