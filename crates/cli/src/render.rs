//! Plain-text rendering of tables, expiry reports, and the bar chart.

use shopstock_inventory::{ALERT_WINDOW_DAYS, ChartRow, ExpiryReport, Item, Table};

/// Widest a chart bar can be, in characters.
const MAX_BAR_WIDTH: usize = 40;

/// Placeholder shown for a row whose expiry date could not be read.
const NO_DATE: &str = "-";

/// Render the full inventory as a fixed-width table.
pub fn inventory(table: &Table) -> String {
    if table.is_empty() {
        return "Inventory is empty.".to_string();
    }
    rows_table(table.rows())
}

/// Render the four expiry partitions as titled sections.
pub fn expiry_report(report: &ExpiryReport) -> String {
    let sections = [
        ("Expired Items", &report.expired),
        (
            // Matches ALERT_WINDOW_DAYS; the title is part of the UI contract.
            "Items Expiring Within 3 Days",
            &report.expiring_soon,
        ),
        ("Valid / Not Expired Items", &report.valid),
        ("Items With Unknown Expiry Date", &report.unknown),
    ];
    debug_assert_eq!(ALERT_WINDOW_DAYS, 3);

    let mut out = String::new();
    for (title, rows) in sections {
        out.push_str(title);
        out.push('\n');
        if rows.is_empty() {
            out.push_str("  (none)\n");
        } else {
            for line in rows_table(rows).lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Render a horizontal bar chart of quantities, tagging expired items.
pub fn chart(rows: &[ChartRow]) -> String {
    if rows.is_empty() {
        return "No data available to show graphs.".to_string();
    }

    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let max_quantity = rows.iter().map(|r| r.quantity).fold(0.0f64, f64::max);

    let mut out = String::new();
    for row in rows {
        let bar = bar_for(row.quantity, max_quantity);
        out.push_str(&format!(
            "{:<name_width$} | {} {}{}\n",
            row.name,
            bar,
            row.quantity,
            if row.expired { " [expired]" } else { "" },
        ));
    }
    out.push_str("bars marked [expired] are past their expiry date");
    out
}

fn bar_for(quantity: f64, max_quantity: f64) -> String {
    if max_quantity <= 0.0 || quantity <= 0.0 {
        return String::new();
    }
    let width = ((quantity / max_quantity) * MAX_BAR_WIDTH as f64).round() as usize;
    "#".repeat(width.max(1))
}

fn rows_table(rows: &[Item]) -> String {
    let headers = ["Item", "Quantity", "Unit", "Expiry"];

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                row.quantity.to_string(),
                row.unit.to_string(),
                row.expiry
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| NO_DATE.to_string()),
            ]
        })
        .collect();

    // Last column is left unpadded so lines carry no trailing whitespace.
    let mut widths = [0usize; 3];
    for (i, width) in widths.iter_mut().enumerate() {
        *width = headers[i].len();
        for row in &cells {
            *width = (*width).max(row[i].len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<w0$}  {:>w1$}  {:<w2$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    ));
    for row in &cells {
        out.push_str(&format!(
            "{:<w0$}  {:>w1$}  {:<w2$}  {}\n",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    }
    out.trim_end().to_string()
}
