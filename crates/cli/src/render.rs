//! Tabular and card output.

use shoestock_core::ProductCode;
use shoestock_infra::ParseError;
use shoestock_inventory::{InventoryValuationSummary, ShoeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Plain-text table: header row, dashed rule, then rows. Columns are padded
/// to their widest cell and separated by two spaces.
pub fn table(headers: &[(&str, Align)], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .zip(headers)
            .map(|((cell, &width), (_, align))| match align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().map(|(h, _)| *h).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

pub fn records_table(records: &[ShoeRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.country().to_string(),
                r.code().to_string(),
                r.product().to_string(),
                r.cost().to_string(),
                r.quantity().to_string(),
            ]
        })
        .collect();
    table(
        &[
            ("Country", Align::Left),
            ("Code", Align::Left),
            ("Product", Align::Left),
            ("Cost", Align::Right),
            ("Quantity", Align::Right),
        ],
        &rows,
    )
}

pub fn values_table<'a>(values: impl Iterator<Item = (&'a ProductCode, u64)>) -> String {
    let rows: Vec<Vec<String>> = values
        .map(|(code, value)| vec![code.to_string(), value.to_string()])
        .collect();
    table(&[("Code", Align::Left), ("Value", Align::Right)], &rows)
}

pub fn valuation_summary(summary: &InventoryValuationSummary) -> String {
    format!(
        "Total value: {} across {} item(s), {} unit(s) in stock",
        summary.total_value, summary.total_items, summary.total_quantity
    )
}

/// Detail view of a single record.
pub fn card(record: &ShoeRecord) -> String {
    const RULE: &str = "-----------------------------------------------------";
    format!(
        "{RULE}\n\
         Country:   {}\n\
         Code:      {}\n\
         Product:   {}\n\
         Cost:      {}\n\
         Quantity:  {}\n\
         {RULE}",
        record.country(),
        record.code(),
        record.product(),
        record.cost(),
        record.quantity(),
    )
}

pub fn skipped_line(issue: &ParseError) -> String {
    format!("Skipped line {}: {} ({})", issue.line, issue.reason, issue.content)
}
