//! Table rendering for schedule and record listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use satchel_model::AssignmentRecord;
use satchel_triage::TriagedAssignment;

/// Builds the table for one urgency bucket: id, record fields, the
/// derived day count, and whether a document is attached.
pub fn bucket_table(rows: &[TriagedAssignment<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Subject"),
        header_cell("Due"),
        header_cell("Days left"),
        header_cell("Document"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.record.id),
            Cell::new(&row.record.title),
            Cell::new(&row.record.subject),
            Cell::new(row.record.due.as_str()),
            days_left_cell(row.days_left),
            document_cell(row.record.document.as_deref()),
        ]);
    }
    table
}

/// Builds the plain listing used when marking assignments complete.
pub fn record_table(records: &[AssignmentRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Subject"),
        header_cell("Due"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.title),
            Cell::new(&record.subject),
            Cell::new(record.due.as_str()),
        ]);
    }
    table
}

fn days_left_cell(days_left: Option<i64>) -> Cell {
    match days_left {
        Some(days) if days < 0 => Cell::new("OVERDUE")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(days) => Cell::new(format!("{days} days")),
        None => dim_cell("?"),
    }
}

fn document_cell(document: Option<&str>) -> Cell {
    match document {
        Some(_) => Cell::new("attached").fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use satchel_model::RecordId;
    use satchel_triage::triage;

    fn record(id: u64, title: &str, due: &str, document: &str) -> AssignmentRecord {
        AssignmentRecord::new(RecordId::new(id), title, "General", due, document).unwrap()
    }

    #[test]
    fn overdue_rows_show_the_overdue_marker() {
        let records = vec![record(1, "Late essay", "01/06/2025", "")];
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let schedule = triage(&records, today);
        let rendered = bucket_table(schedule.bucket(satchel_model::Urgency::Overdue)).to_string();
        assert!(rendered.contains("Late essay"));
        assert!(rendered.contains("OVERDUE"));
    }

    #[test]
    fn day_counts_and_sentinels_render() {
        let records = vec![
            record(1, "Soon", "13/06/2025", "notes.pdf"),
            record(2, "Mystery", "whenever", ""),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let schedule = triage(&records, today);

        let upcoming = bucket_table(schedule.bucket(satchel_model::Urgency::Upcoming)).to_string();
        assert!(upcoming.contains("3 days"));
        assert!(upcoming.contains("attached"));

        let later = bucket_table(schedule.bucket(satchel_model::Urgency::Later)).to_string();
        assert!(later.contains('?'));
        assert!(later.contains("whenever"));
    }

    #[test]
    fn record_table_lists_every_row() {
        let records = vec![
            record(1, "Essay", "01/01/2030", ""),
            record(2, "Quiz", "02/01/2030", ""),
        ];
        let rendered = record_table(&records).to_string();
        assert!(rendered.contains("Essay"));
        assert!(rendered.contains("Quiz"));
        assert!(rendered.contains("01/01/2030"));
    }
}
