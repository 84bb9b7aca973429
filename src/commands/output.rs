//! Operator-facing rendering of flattened rows.

use crate::nba::flatten::{FlatRecord, TOP_TEAMS_COLUMNS};
use crate::Result;

/// Render records as an aligned text table, header first, no index column.
pub fn format_table(records: &[FlatRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| r.cells().iter().map(|c| c.to_string()).collect())
        .collect();

    let widths: Vec<usize> = TOP_TEAMS_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|v| v.chars().count())
                .chain(std::iter::once(c.name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = vec![pad_line(
        &TOP_TEAMS_COLUMNS.iter().map(|c| c.name).collect::<Vec<_>>(),
        &widths,
    )];
    for row in &rows {
        out.push(pad_line(&row.iter().map(String::as_str).collect::<Vec<_>>(), &widths));
    }
    out.join("\n")
}

fn pad_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(v, w)| format!("{:>width$}", v, width = *w))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Records as a pretty JSON array of column → value objects.
pub fn format_json(records: &[FlatRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
