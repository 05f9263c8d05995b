use super::{RenderOptions, number, resolve_selection, text, time};
use crate::selection::{FieldSelection, IncludeSpec, select_fields};
use mailview_types::{EmailRecord, FieldValue, FormatMeta};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Column header names for well-known fields; anything else falls back to
/// the capitalized field name.
static FIELD_DISPLAY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("id", "ID"),
        ("from", "From"),
        ("to", "To"),
        ("cc", "CC"),
        ("bcc", "BCC"),
        ("subject", "Subject"),
        ("date", "Date"),
        ("isRead", "Status"),
        ("isStarred", "Starred"),
        ("isFlagged", "Flagged"),
        ("hasAttachments", "Attachments"),
        ("folder", "Folder"),
        ("bodyText", "Body"),
        ("bodyHtml", "HTML"),
        ("threadId", "Thread"),
        ("accountId", "Account"),
    ])
});

/// Fixed emission order for the detail view.
const DETAIL_FIELD_ORDER: &[&str] = &[
    "id",
    "from",
    "to",
    "cc",
    "bcc",
    "subject",
    "date",
    "isRead",
    "isStarred",
    "isFlagged",
    "attachments",
    "bodyText",
    "bodyHtml",
];

pub(super) fn render_list(
    records: &[EmailRecord],
    meta: &FormatMeta,
    options: &RenderOptions,
) -> String {
    if records.is_empty() {
        return String::from("No results found.");
    }

    let selection = resolve_selection(options, "list");
    let projected: Vec<EmailRecord> = records
        .iter()
        .map(|record| select_fields(record, &selection))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    lines.push(header_line(meta, records.len()));
    lines.push(String::new());

    // Columns resolve once, against the first projected record
    let columns = resolve_columns(&selection, &projected[0]);

    let headers: Vec<String> = columns
        .iter()
        .map(|field| format!(" {} ", field_display_name(field)))
        .collect();
    let separators: Vec<String> = columns
        .iter()
        .map(|field| "-".repeat(field_display_name(field).chars().count() + 2))
        .collect();
    lines.push(format!("|{}|", headers.join("|")));
    lines.push(format!("|{}|", separators.join("|")));

    for item in &projected {
        let cells: Vec<String> = columns
            .iter()
            .map(|field| format!(" {} ", cell_value(field, item.get(field))))
            .collect();
        lines.push(format!("|{}|", cells.join("|")));
    }

    if let Some(total_pages) = meta.total_pages.filter(|p| *p > 0) {
        let page = meta.page.filter(|p| *p > 0).unwrap_or(1);
        let total = meta.total.unwrap_or(records.len() as u64);
        lines.push(String::new());
        lines.push(format!(
            "Page {} of {} ({} total emails)",
            page, total_pages, total
        ));
    }

    lines.join("\n")
}

pub(super) fn render_detail(record: &EmailRecord, options: &RenderOptions) -> String {
    let selection = resolve_selection(options, "detail");
    let filtered = select_fields(record, &selection);

    let mut lines: Vec<String> = Vec::new();
    lines.push(String::from("## Email Details"));
    lines.push(String::new());

    for &field in DETAIL_FIELD_ORDER {
        let Some(value) = filtered.get(field) else {
            continue;
        };
        if matches!(value, FieldValue::Null) {
            continue;
        }

        match field {
            "id" => lines.push(format!("- **ID:** {}", value.display_text())),
            "from" => lines.push(format!(
                "- **From:** {}",
                text::escape_pipes(&value.display_text())
            )),
            "to" => lines.push(format!(
                "- **To:** {}",
                text::escape_pipes(&value.display_text())
            )),
            "cc" => lines.push(format!(
                "- **CC:** {}",
                text::escape_pipes(&value.display_text())
            )),
            "bcc" => lines.push(format!(
                "- **BCC:** {}",
                text::escape_pipes(&value.display_text())
            )),
            "subject" => lines.push(format!(
                "- **Subject:** {}",
                text::escape_pipes(&value.display_text())
            )),
            "date" => lines.push(format!(
                "- **Date:** {}",
                time::format_date_iso(&value.display_text())
            )),
            "isRead" => lines.push(format!(
                "- **Status:** {}",
                if value.is_truthy() { "Read" } else { "Unread" }
            )),
            "isStarred" => {
                if value.is_truthy() {
                    lines.push(String::from("- **Starred:** Yes"));
                }
            }
            "isFlagged" => {
                if value.is_truthy() {
                    lines.push(String::from("- **Flagged (Important):** Yes"));
                }
            }
            "attachments" => {
                if let FieldValue::List(items) = value {
                    if !items.is_empty() {
                        lines.push(format!("- **Attachments:** {}", items.len()));
                        for item in items {
                            let (filename, size) = attachment_parts(item);
                            lines.push(format!(
                                "  - {} ({})",
                                filename,
                                number::format_file_size(size)
                            ));
                        }
                    }
                }
            }
            // bodyText/bodyHtml render in the body section below
            _ => {}
        }
    }

    if filtered.contains_key("bodyText") || filtered.contains_key("bodyHtml") {
        lines.push(String::new());
        lines.push(String::from("### Body"));
        lines.push(String::new());

        let body = filtered
            .get("bodyText")
            .filter(|v| v.is_truthy())
            .or_else(|| filtered.get("bodyHtml").filter(|v| v.is_truthy()))
            .map(|v| v.display_text())
            .unwrap_or_default();
        lines.push(if body.is_empty() {
            String::from("(No content)")
        } else {
            body
        });
    }

    lines.join("\n")
}

fn header_line(meta: &FormatMeta, record_count: usize) -> String {
    let title = meta
        .folder
        .as_deref()
        .filter(|f| !f.is_empty())
        .unwrap_or("Results");
    let unread = meta.unread.unwrap_or(0);
    let total = meta.total.unwrap_or(record_count as u64);
    let counts = format!("{} unread, {} total", unread, total);

    match meta.showing.as_deref().filter(|s| !s.is_empty()) {
        Some(showing) => format!("## {} ({}) - Showing {}", title, counts, showing),
        None => format!("## {} ({})", title, counts),
    }
}

fn resolve_columns(selection: &FieldSelection, first: &EmailRecord) -> Vec<String> {
    match &selection.include {
        IncludeSpec::All => first
            .keys()
            .filter(|key| !selection.exclude.iter().any(|e| e == key))
            .map(str::to_string)
            .collect(),
        IncludeSpec::Fields(fields) => fields.clone(),
    }
}

fn field_display_name(field: &str) -> String {
    if let Some(name) = FIELD_DISPLAY_NAMES.get(field) {
        return (*name).to_string();
    }
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn cell_value(field: &str, value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if matches!(value, FieldValue::Null) {
        return String::new();
    }

    match field {
        "id" | "threadId" | "accountId" => value.display_text(),
        "from" | "to" | "cc" | "bcc" => {
            text::escape_table(&text::truncate(&value.display_text(), 20))
        }
        "subject" => text::escape_table(&text::truncate(&value.display_text(), 30)),
        "date" => time::format_date(&value.display_text()),
        "isRead" => String::from(if value.is_truthy() { "Read" } else { "Unread" }),
        "isStarred" | "isFlagged" | "hasAttachments" => {
            String::from(if value.is_truthy() { "Yes" } else { "No" })
        }
        "bodyText" | "bodyHtml" => text::escape_table(&text::truncate(&value.display_text(), 50)),
        "folder" => text::escape_table(&value.display_text()),
        _ => match value {
            FieldValue::List(_) | FieldValue::Object(_) => {
                text::escape_table(&serde_json::to_string(value).unwrap_or_default())
            }
            _ => text::escape_table(&text::truncate(&value.display_text(), 30)),
        },
    }
}

fn attachment_parts(item: &FieldValue) -> (String, u64) {
    match item {
        FieldValue::Object(entries) => {
            let filename = entries
                .iter()
                .find(|(k, _)| k == "filename")
                .map(|(_, v)| v.display_text())
                .unwrap_or_default();
            let size = entries
                .iter()
                .find(|(k, _)| k == "size")
                .and_then(|(_, v)| v.as_u64())
                .unwrap_or(0);
            (filename, size)
        }
        _ => (item.display_text(), 0),
    }
}
