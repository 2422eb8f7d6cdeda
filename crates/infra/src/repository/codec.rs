//! `inventory.txt` line format.
//!
//! One record per line, fields separated by `,` in the fixed order
//! `country, code, product, cost, quantity`. A header line is optional on read
//! and always written.

use thiserror::Error;

use shoestock_core::{DomainError, ProductCode};
use shoestock_inventory::{Inventory, ShoeRecord, parse_count};

pub const DELIMITER: char = ',';
pub const HEADER: [&str; 5] = ["Country", "Code", "Product", "Cost", "Quantity"];

/// A line that could not be turned into a record. The line is skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number in the file.
    pub line: usize,
    pub reason: String,
    /// The offending line, trimmed.
    pub content: String,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode file contents line by line. Bad lines (including lines that are
/// not valid UTF-8) are collected, never fatal.
pub fn decode(bytes: &[u8]) -> (Inventory, Vec<ParseError>) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut inventory = Inventory::new();
    let mut issues = Vec::new();
    let mut first_content_line = true;

    for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.trim_ascii().is_empty() {
            continue;
        }

        let outcome = match std::str::from_utf8(raw) {
            Ok(line) => {
                let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
                if std::mem::take(&mut first_content_line) && is_header(&fields) {
                    continue;
                }
                decode_fields(&fields)
                    .and_then(|record| inventory.insert(record).map(|_| ()).map_err(reason))
            }
            Err(_) => {
                first_content_line = false;
                Err("not valid UTF-8".to_string())
            }
        };

        if let Err(reason) = outcome {
            let issue = ParseError {
                line: idx + 1,
                reason,
                content: String::from_utf8_lossy(raw).trim().to_string(),
            };
            tracing::debug!(line = issue.line, reason = %issue.reason, "skipping inventory line");
            issues.push(issue);
        }
    }

    (inventory, issues)
}

/// Encode every record, header first.
pub fn encode(records: &[ShoeRecord]) -> String {
    let sep = DELIMITER.to_string();
    let mut out = HEADER.join(sep.as_str());
    out.push('\n');
    for r in records {
        out.push_str(&encode_record(r));
        out.push('\n');
    }
    out
}

fn encode_record(r: &ShoeRecord) -> String {
    format!(
        "{country}{d}{code}{d}{product}{d}{cost}{d}{quantity}",
        d = DELIMITER,
        country = r.country(),
        code = r.code(),
        product = r.product(),
        cost = r.cost(),
        quantity = r.quantity(),
    )
}

fn is_header(fields: &[&str]) -> bool {
    fields.len() == HEADER.len()
        && fields
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.eq_ignore_ascii_case(name))
}

fn decode_fields(fields: &[&str]) -> Result<ShoeRecord, String> {
    let [country, code, product, cost, quantity] = fields else {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            fields.len()
        ));
    };
    let code = ProductCode::parse(code).map_err(reason)?;
    let cost = parse_count("cost", cost).map_err(reason)?;
    let quantity = parse_count("quantity", quantity).map_err(reason)?;
    ShoeRecord::new(country, code, product, cost, quantity).map_err(reason)
}

fn reason(err: DomainError) -> String {
    err.to_string()
}
