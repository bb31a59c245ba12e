// Mon Oct 19 2026 - Alex

use crate::discovery::pattern::{MARKUP_IP_PORT, PLAIN_IP_PORT};
use crate::discovery::Candidate;
use regex::Regex;
use std::borrow::Cow;

/// Decodes a payload as UTF-8, dropping any invalid byte sequences.
pub fn decode_text(content: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(content) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(content.utf8_chunks().map(|chunk| chunk.valid()).collect()),
    }
}

/// Finds every `IPv4:port` token in free text, in order of appearance.
pub fn plain_ip_port(content: &[u8]) -> Vec<Candidate> {
    let candidates = scan(&PLAIN_IP_PORT, content);
    log::debug!("plain: {} candidates in {} bytes", candidates.len(), content.len());
    candidates
}

/// Like [`plain_ip_port`], but tolerates markup between the address, the
/// colon and the port.
pub fn html_ip_port(content: &[u8]) -> Vec<Candidate> {
    let candidates = scan(&MARKUP_IP_PORT, content);
    log::debug!("markup: {} candidates in {} bytes", candidates.len(), content.len());
    candidates
}

fn scan(pattern: &Regex, content: &[u8]) -> Vec<Candidate> {
    let text = decode_text(content);

    pattern
        .captures_iter(&text)
        .filter_map(|caps| {
            let addr = caps.name("addr")?;
            let port = caps.name("port")?;
            Some(Candidate::new(addr.as_str(), port.as_str()))
        })
        .collect()
}
