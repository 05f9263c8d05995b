use crate::source::Mailbox;
use crate::types::OutputFormat;
use anyhow::Result;
use mailview_render::resolve_pagination;
use mailview_types::EmailRecord;

pub fn handle(
    mailbox: &Mailbox,
    query: &str,
    fields: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    page: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    super::warn_unknown_fields(fields.as_deref(), &mailbox.emails);

    let needle = query.to_lowercase();
    let matches: Vec<EmailRecord> = mailbox
        .emails
        .iter()
        .filter(|record| record_matches(record, &needle))
        .cloned()
        .collect();

    let window = resolve_pagination(limit, offset, page);
    let total = matches.len() as u64;

    let output = super::render_listing(
        &matches,
        total,
        mailbox.folder.clone(),
        "search",
        fields,
        window,
        format.into(),
    );
    println!("{}", output);

    Ok(())
}

fn record_matches(record: &EmailRecord, needle: &str) -> bool {
    record.iter().any(|(_, value)| {
        value
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}
