//! Plain-text rendering of grids and error screens for the terminal.

use std::fmt::Write;
use std::path::Path;

use crate::catalog::{ErrorView, Grid, GridEntry, EMPTY_VIEW_TITLE};

const CELL_WIDTH: usize = 28;

/// Render `grid` as rows of `grid.columns` cells, one block per section.
pub fn render_grid(grid: &Grid) -> String {
    if grid.is_empty() {
        return format!("{}\n", EMPTY_VIEW_TITLE);
    }

    let columns = usize::from(grid.columns.max(1));
    let mut out = String::new();

    for section in &grid.sections {
        if let Some(title) = section.title() {
            let _ = writeln!(out, "== {} ({}) ==", title, section.entries.len());
        }
        for row in section.entries.chunks(columns) {
            out.push_str(&row_line(row, |e| e.title.as_str()));
            out.push_str(&row_line(row, |e| e.subtitle.as_str()));
            out.push('\n');
        }
    }

    out
}

fn row_line<'a>(row: &'a [GridEntry], field: impl Fn(&'a GridEntry) -> &'a str) -> String {
    let cells: Vec<String> = row.iter().map(|e| fit(field(e), CELL_WIDTH)).collect();
    format!("{}\n", cells.join(" ").trim_end())
}

/// Truncate or pad `s` to exactly `width` characters.
fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count > width {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", s, " ".repeat(width - count))
    }
}

/// Render the error screen. Classified errors lead with their help text and
/// point at `config_path`, the file the failed command read.
pub fn render_error(view: &ErrorView, config_path: &Path) -> String {
    let mut out = String::new();
    if view.help.is_none() {
        let _ = writeln!(out, "Error: {}", view.markdown());
        return out;
    }

    let _ = writeln!(out, "{}", view.markdown());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}. Edit {} or pass --user-id / --api-key, then run `jellygrid validate`.",
        view.message,
        config_path.display()
    );
    out
}

/// One entry with all of its links.
pub fn render_entry_links(entry: &GridEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entry.title);
    let _ = writeln!(out, "  {}", entry.subtitle);
    let _ = writeln!(out, "  open:   {}", entry.details_url);
    let _ = writeln!(out, "  stream: {}", entry.stream_url);
    let _ = writeln!(out, "  cover:  {}", entry.cover_url);
    out
}
