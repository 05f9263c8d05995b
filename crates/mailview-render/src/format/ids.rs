use mailview_types::EmailRecord;

/// Bare id output for piping into other tools.
pub(super) fn render_list(records: &[EmailRecord]) -> String {
    records
        .iter()
        .map(|record| {
            record
                .get("id")
                .map(|id| id.display_text())
                .unwrap_or_default()
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub(super) fn render_detail(record: &EmailRecord) -> String {
    record
        .get("id")
        .filter(|id| id.is_truthy())
        .map(|id| id.display_text())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::format::{OutputFormat, RenderOptions};
    use mailview_types::{EmailRecord, FormatMeta};

    fn record(json: &str) -> EmailRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_list_joins_ids_with_spaces() {
        let records = vec![
            record(r#"{"id":1}"#),
            record(r#"{"id":2}"#),
            record(r#"{"id":3}"#),
        ];
        let out = OutputFormat::IdsOnly.render_list(
            &records,
            &FormatMeta::default(),
            &RenderOptions::default(),
        );
        assert_eq!(out, "1 2 3");
    }

    #[test]
    fn test_empty_list_is_empty_string() {
        let out = OutputFormat::IdsOnly.render_list(
            &[],
            &FormatMeta::default(),
            &RenderOptions::default(),
        );
        assert_eq!(out, "");
    }

    #[test]
    fn test_list_missing_id_renders_empty_slot() {
        let records = vec![record(r#"{"id":1}"#), record(r#"{"subject":"x"}"#)];
        let out = OutputFormat::IdsOnly.render_list(
            &records,
            &FormatMeta::default(),
            &RenderOptions::default(),
        );
        assert_eq!(out, "1 ");
    }

    #[test]
    fn test_detail_string_form_of_id() {
        let out = OutputFormat::IdsOnly
            .render_detail(&record(r#"{"id":42}"#), &RenderOptions::default());
        assert_eq!(out, "42");
    }

    #[test]
    fn test_detail_missing_or_falsy_id_is_empty() {
        let out = OutputFormat::IdsOnly
            .render_detail(&record(r#"{"subject":"x"}"#), &RenderOptions::default());
        assert_eq!(out, "");
        let out =
            OutputFormat::IdsOnly.render_detail(&record(r#"{"id":0}"#), &RenderOptions::default());
        assert_eq!(out, "");
    }
}
