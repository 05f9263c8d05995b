//! Output rendering. Three closed renderer variants share the same two
//! operations; dispatch is an exhaustive match so a new variant cannot be
//! added without teaching every operation about it.

mod ids;
mod json;
mod markdown;
pub mod number;
pub mod text;
pub mod time;

use crate::selection::{FieldSelection, default_field_selection, parse_field_selection};
use mailview_types::{EmailRecord, FormatMeta};
use std::fmt;

/// Per-render options carried from the CLI flag or query-string layer.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Raw field-selection string, e.g. `"id,from"` or `"*,^bodyText"`.
    pub fields: Option<String>,
    /// View name used to pick a default selection when `fields` is unset.
    /// Falls back to the operation's natural view (`list` / `detail`).
    pub view: Option<String>,
}

impl RenderOptions {
    pub fn with_fields(fields: Option<String>) -> Self {
        Self {
            fields,
            view: None,
        }
    }
}

fn resolve_selection(options: &RenderOptions, fallback_view: &str) -> FieldSelection {
    match &options.fields {
        Some(fields) => parse_field_selection(fields),
        None => default_field_selection(options.view.as_deref().unwrap_or(fallback_view)),
    }
}

/// The closed set of output renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    IdsOnly,
}

impl OutputFormat {
    /// Render a record sequence plus aggregation metadata.
    pub fn render_list(
        &self,
        records: &[EmailRecord],
        meta: &FormatMeta,
        options: &RenderOptions,
    ) -> String {
        match self {
            OutputFormat::Json => json::render_list(records, meta, options),
            OutputFormat::Markdown => markdown::render_list(records, meta, options),
            OutputFormat::IdsOnly => ids::render_list(records),
        }
    }

    /// Render a single record.
    pub fn render_detail(&self, record: &EmailRecord, options: &RenderOptions) -> String {
        match self {
            OutputFormat::Json => json::render_detail(record, options),
            OutputFormat::Markdown => markdown::render_detail(record, options),
            OutputFormat::IdsOnly => ids::render_detail(record),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::IdsOnly => write!(f, "ids"),
        }
    }
}
