//! Plain-text rendering of session state.

use textnext_core::search::SearchRecord;
use textnext_core::session::QuerySession;

const HEADERS: [&str; 4] = ["ID", "Description", "Date", "Phase"];
/// Longer descriptions are cut and end with an ellipsis.
const MAX_DESCRIPTION_WIDTH: usize = 72;

/// Renders records as an aligned table.
///
/// Returns an empty string for an empty result set, so nothing is shown
/// before the first successful search.
pub fn render_table(records: &[SearchRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                truncate(&r.text, MAX_DESCRIPTION_WIDTH),
                r.date.clone(),
                r.phase.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Loading indicator as a pure function of the loading flag.
pub fn render_loading(loading: bool) -> &'static str {
    if loading { "Searching..." } else { "" }
}

/// One-line summary of the session.
pub fn render_status(session: &QuerySession) -> String {
    format!(
        "query: {} | draft: {} | limit: {} | results: {}{}",
        session.last_submitted_query().unwrap_or("-"),
        session.query_draft().unwrap_or("-"),
        session.page_limit(),
        session.results().len(),
        if session.is_loading() { " | loading" } else { "" },
    )
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
