use crate::source::Mailbox;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use mailview_render::RenderOptions;

pub fn handle(
    mailbox: &Mailbox,
    id: &str,
    fields: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    super::warn_unknown_fields(fields.as_deref(), &mailbox.emails);

    let record = mailbox
        .emails
        .iter()
        .find(|r| r.get("id").map(|v| v.display_text() == id).unwrap_or(false))
        .with_context(|| format!("email not found: {}", id))?;

    let options = RenderOptions {
        fields,
        view: Some("read".to_string()),
    };
    let renderer: mailview_render::OutputFormat = format.into();
    println!("{}", renderer.render_detail(record, &options));

    Ok(())
}
