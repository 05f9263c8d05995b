pub mod fields;
pub mod list;
pub mod read;
pub mod search;

use is_terminal::IsTerminal;
use mailview_render::{
    PageWindow, RenderOptions, calculate_range, parse_field_selection, validate_field_selection,
};
use mailview_types::{EmailRecord, FieldValue, FormatMeta};
use owo_colors::OwoColorize;

/// Advisory warning for selected fields the mailbox does not have. Never
/// blocks rendering; nonexistent fields are simply absent from output.
pub(crate) fn warn_unknown_fields(fields: Option<&str>, records: &[EmailRecord]) {
    let Some(fields) = fields else { return };

    let selection = parse_field_selection(fields);
    let available = crate::source::available_fields(records);
    let invalid = validate_field_selection(&selection, &available);
    if invalid.is_empty() {
        return;
    }

    let joined = invalid.join(", ");
    if std::io::stderr().is_terminal() {
        eprintln!("{} unknown fields: {}", "Warning:".yellow(), joined);
    } else {
        eprintln!("Warning: unknown fields: {}", joined);
    }
}

/// Slice the record sequence through the pagination window, derive the
/// listing metadata, and render.
pub(crate) fn render_listing(
    records: &[EmailRecord],
    total: u64,
    folder: Option<String>,
    view: &str,
    fields: Option<String>,
    window: PageWindow,
    format: mailview_render::OutputFormat,
) -> String {
    let start = (window.offset as usize).min(records.len());
    let end = (window.offset.saturating_add(window.limit) as usize).min(records.len());
    let slice = &records[start..end];

    let unread = records
        .iter()
        .filter(|r| !r.get("isRead").map(FieldValue::is_truthy).unwrap_or(false))
        .count() as u64;
    let range = calculate_range(window.offset, window.limit, total);
    let total_pages = (total > 0).then(|| total.div_ceil(window.limit));

    let meta = FormatMeta {
        total: Some(total),
        unread: Some(unread),
        folder,
        page: Some(window.page),
        total_pages,
        showing: Some(range.showing),
    };

    let options = RenderOptions {
        fields,
        view: Some(view.to_string()),
    };
    format.render_list(slice, &meta, &options)
}
