// Mon Oct 19 2026 - Alex

use crate::discovery::text::decode_text;
use crate::discovery::Candidate;
use std::mem::take;

/// Emits the first two columns of every comma-separated row that has at
/// least two. Values are passed through untouched.
pub fn csv_two_columns(content: &[u8]) -> Vec<Candidate> {
    let text = decode_text(content);

    let candidates: Vec<Candidate> = parse_rows(&text)
        .into_iter()
        .filter_map(|row| {
            let mut columns = row.into_iter();
            let host = columns.next()?;
            let port = columns.next()?;
            Some(Candidate::new(host, port))
        })
        .collect();

    log::debug!("csv: {} candidates in {} bytes", candidates.len(), content.len());
    candidates
}

/// Quote-aware CSV row splitter. A quote only opens a quoted field at the
/// start of that field, `""` inside quotes is a literal quote, blank lines
/// are skipped.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // nothing consumed for the current field yet
    let mut fresh = true;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' if fresh => {
                in_quotes = true;
                fresh = false;
            }
            ',' => {
                row.push(take(&mut field));
                fresh = true;
            }
            '\n' | '\r' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if !(row.is_empty() && fresh) {
                    row.push(take(&mut field));
                    rows.push(take(&mut row));
                }
                fresh = true;
            }
            _ => {
                field.push(ch);
                fresh = false;
            }
        }
    }

    if !(row.is_empty() && fresh) {
        row.push(field);
        rows.push(row);
    }

    rows
}
