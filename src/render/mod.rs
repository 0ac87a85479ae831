use crate::catalog::ApiRecord;
use crate::view::{EMPTY_STATE_MESSAGE, ViewState};
use std::fmt::Write;

pub const COLUMNS: [&str; 5] = ["Name", "Category", "Auth", "HTTPS", "CORS"];

pub fn glyph(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "✅",
        Some(false) => "❌",
        None => "–",
    }
}

/// The five display cells of a record, in column order.
pub fn cells(record: &ApiRecord) -> [String; 5] {
    [
        record.api_name.clone().unwrap_or_default(),
        record.category.clone().unwrap_or_default(),
        record.auth_type.clone().unwrap_or_default(),
        glyph(record.https_supported).to_string(),
        glyph(record.cors_supported).to_string(),
    ]
}

/// Plain-text table. The text columns are padded; the glyph columns are not,
/// since terminals disagree on emoji width.
pub fn render_table(rows: &[ApiRecord]) -> String {
    let body: Vec<[String; 5]> = rows.iter().map(cells).collect();

    let mut widths = [0usize; 3];
    for (i, width) in widths.iter_mut().enumerate() {
        *width = body
            .iter()
            .map(|r| r[i].chars().count())
            .chain(std::iter::once(COLUMNS[i].chars().count()))
            .max()
            .unwrap_or(0);
    }

    let mut out = String::new();
    let header = COLUMNS.map(String::from);
    write_row(&mut out, &header, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}-+-{}-+-{}-+-------+-----", rule[0], rule[1], rule[2]);

    for row in &body {
        write_row(&mut out, row, &widths);
    }

    out
}

fn write_row(out: &mut String, row: &[String; 5], widths: &[usize; 3]) {
    let _ = writeln!(
        out,
        "{:<w0$} | {:<w1$} | {:<w2$} | {} | {}",
        row[0],
        row[1],
        row[2],
        row[3],
        row[4],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
}

/// Renders a whole view the way the page lays it out: error, clarification,
/// SQL box, then either the empty-state message or the table.
pub fn render_view(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {}", error);
        return out;
    }

    if let Some(question) = &state.clarification {
        let _ = writeln!(out, "? {}", question);
    }

    if let Some(sql) = &state.sql {
        let _ = writeln!(out, "SQL:\n{}\n", sql.trim());
    }

    if state.show_empty_state() {
        let _ = writeln!(out, "{}", EMPTY_STATE_MESSAGE);
    } else {
        out.push_str(&render_table(&state.rows));
    }

    out
}
