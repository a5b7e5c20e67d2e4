//! Plain-text rendering of the alert table.
//!
//! The original sidebar shows parsed alerts as a sortable HTML table with a
//! severity tint per row. The CLI renders the same columns as aligned text,
//! tagging each row with its severity rank class instead of a color.

use crate::alerts::alert::AlertRecord;

/// Column headers, in display order.
const HEADERS: [&str; 7] = [
    "EMMA_ID", "Nivel", "Región", "Evento", "Inicio", "Fin", "Rango",
];

/// Renders alert records as an aligned plain-text table.
///
/// The records are printed in the order given; the parser already sorts them
/// by severity rank, so callers normally pass
/// [`ParseOutcome::records`](crate::alerts::ParseOutcome) through unchanged.
/// The trailing `Rango` column shows the rank class each row sorted under.
///
/// Returns the table as a single string with a trailing newline, or a short
/// notice when there are no records.
///
/// # Examples
///
/// ```
/// # use meteomapa::alerts::render_table;
/// let table = render_table(&[]);
/// assert_eq!(table, "no alerts\n");
/// ```
pub fn render_table(records: &[AlertRecord]) -> String {
    if records.is_empty() {
        return "no alerts\n".to_string();
    }

    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|record| {
            [
                record.emma_id.clone(),
                record.severity.clone(),
                record.area_desc.clone(),
                record.event.clone(),
                record.effective.clone(),
                record.expires.clone(),
                record.cap_severity().to_string(),
            ]
        })
        .collect();

    // Column width is the widest cell, headers included
    let mut widths: [usize; 7] = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_row(&mut table, &HEADERS.map(str::to_string), &widths);
    push_separator(&mut table, &widths);
    for row in &rows {
        push_row(&mut table, row, &widths);
    }

    table
}

/// Appends one padded table row.
fn push_row(table: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(line.trim_end());
    table.push('\n');
}

/// Appends the separator line under the headers.
fn push_separator(table: &mut String, widths: &[usize; 7]) {
    let line = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(&line);
    table.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(emma_id: &str, severity: &str, area: &str) -> AlertRecord {
        AlertRecord {
            emma_id: emma_id.to_string(),
            severity: severity.to_string(),
            area_desc: area.to_string(),
            event: "Wind".to_string(),
            effective: "2024-03-01T06:00:00+01:00".to_string(),
            expires: "2024-03-01T18:00:00+01:00".to_string(),
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "no alerts\n");
    }

    #[test]
    fn test_render_has_header_and_rows() {
        let records = vec![
            create_test_record("ES511", "Extreme wind", "Girona"),
            create_test_record("ES512", "Moderate", "Lleida"),
        ];

        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        // header + separator + two rows
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("EMMA_ID"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("ES511"));
        assert!(lines[3].contains("ES512"));
    }

    #[test]
    fn test_render_preserves_record_order() {
        let records = vec![
            create_test_record("ES513", "Severe", "Tarragona"),
            create_test_record("ES511", "Moderate", "Girona"),
        ];

        let table = render_table(&records);
        let first = table.find("ES513").unwrap();
        let second = table.find("ES511").unwrap();

        assert!(first < second);
    }

    #[test]
    fn test_render_tags_rank_class() {
        let records = vec![create_test_record("ES511", "Extreme wind", "Girona")];

        let table = render_table(&records);
        let row = table.lines().last().unwrap();

        assert!(row.ends_with("extreme"));
    }

    #[test]
    fn test_render_aligns_columns() {
        let records = vec![
            create_test_record("ES1", "Severe", "A"),
            create_test_record("ES51100", "Moderate", "Barcelona"),
        ];

        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        // "Nivel" column starts at the same offset in every line
        let offset = lines[0].find("Nivel").unwrap();
        assert!(lines[2].len() > offset);
        assert_eq!(&lines[2][offset..offset + 6], "Severe");
    }
}
