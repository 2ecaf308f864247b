//! HTML table serialization and the page shell around it.

use std::fmt::Write;

use super::theme::Theme;
use crate::inspection::{Column, InspectionRecord};

/// CSS class applied to the rendered table.
pub const TABLE_CLASS: &str = "sleek-table";

/// Document title.
pub const PAGE_TITLE: &str = "Manhattan Critical Violations";

/// Page heading.
pub const PAGE_HEADING: &str = "Critical Restaurant Violations in Manhattan";

/// Escape text for use in HTML element content or a quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render records as a `<table>` fragment.
///
/// The header row is always present, even with no records.
pub fn render_table(records: &[InspectionRecord]) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "<table class=\"{}\">", TABLE_CLASS);
    out.push_str("  <thead>\n    <tr>\n");
    for column in Column::all() {
        let _ = writeln!(out, "      <th>{}</th>", escape(&column.to_string()));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for record in records {
        out.push_str("    <tr>\n");
        for column in Column::all() {
            let _ = writeln!(out, "      <td>{}</td>", escape(record.get(column)));
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

/// Render the complete HTML document.
pub fn render_page(records: &[InspectionRecord], theme: Theme) -> String {
    let table = render_table(records);
    let mut out = String::with_capacity(table.len() + 4096);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(out, "    <title>{}</title>", PAGE_TITLE);
    out.push_str(theme.head_links());
    out.push_str("    <style>");
    out.push_str(theme.stylesheet());
    out.push_str("    </style>\n</head>\n<body>\n");
    out.push_str("    <div class=\"container\">\n");
    let _ = writeln!(out, "        <h1>{}</h1>", PAGE_HEADING);
    out.push_str(&table);
    out.push_str("    </div>\n</body>\n</html>\n");

    out
}
