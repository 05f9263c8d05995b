use crate::source::Mailbox;
use crate::types::OutputFormat;
use anyhow::Result;
use mailview_render::resolve_pagination;

pub fn handle(
    mailbox: &Mailbox,
    folder: Option<String>,
    fields: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    page: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    super::warn_unknown_fields(fields.as_deref(), &mailbox.emails);

    let window = resolve_pagination(limit, offset, page);
    let total = mailbox.total.unwrap_or(mailbox.emails.len() as u64);
    let folder = folder.or_else(|| mailbox.folder.clone());

    let output = super::render_listing(
        &mailbox.emails,
        total,
        folder,
        "list",
        fields,
        window,
        format.into(),
    );
    println!("{}", output);

    Ok(())
}
