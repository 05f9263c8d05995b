use super::{RenderOptions, resolve_selection};
use crate::selection::select_fields;
use mailview_types::{EmailRecord, FieldValue, FormatMeta};
use serde::Serialize;

/// Key substrings whose values must never reach output, regardless of field
/// selection. Matched case-insensitively, so `authToken` and `clientSecret`
/// are caught. Kept as a table so the policy is auditable in one place.
const REDACTED_KEY_SUBSTRINGS: &[&str] = &["password", "token", "secret"];

const REDACTION_MARKER: &str = "***REDACTED***";
const HTML_BODY_PLACEHOLDER: &str = "<HTML content>";

#[derive(Serialize)]
struct ListEnvelope<'a> {
    data: Vec<EmailRecord>,
    meta: &'a FormatMeta,
}

#[derive(Serialize)]
struct DetailEnvelope {
    data: EmailRecord,
}

pub(super) fn render_list(
    records: &[EmailRecord],
    meta: &FormatMeta,
    options: &RenderOptions,
) -> String {
    let selection = resolve_selection(options, "list");
    let data = records
        .iter()
        .map(|record| select_fields(&sanitize_record(record), &selection))
        .collect();
    to_pretty(&ListEnvelope { data, meta })
}

pub(super) fn render_detail(record: &EmailRecord, options: &RenderOptions) -> String {
    let selection = resolve_selection(options, "detail");
    let data = select_fields(&sanitize_record(record), &selection);
    to_pretty(&DetailEnvelope { data })
}

fn to_pretty<T: Serialize>(envelope: &T) -> String {
    serde_json::to_string_pretty(envelope).unwrap_or_else(|_| String::from("{}"))
}

/// Drops private (`_`-prefixed) keys, redacts credential-looking keys, and
/// replaces HTML bodies with a placeholder.
fn sanitize_record(record: &EmailRecord) -> EmailRecord {
    let mut result = EmailRecord::new();

    for (key, value) in record.iter() {
        if key.starts_with('_') {
            continue;
        }

        let key_lower = key.to_lowercase();
        if REDACTED_KEY_SUBSTRINGS.iter().any(|s| key_lower.contains(s)) {
            result.insert(key, REDACTION_MARKER);
        } else if key == "bodyHtml" {
            if value.is_truthy() {
                result.insert(key, HTML_BODY_PLACEHOLDER);
            } else {
                result.insert(key, FieldValue::Null);
            }
        } else {
            result.insert(key, value.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    fn record(json: &str) -> EmailRecord {
        serde_json::from_str(json).unwrap()
    }

    fn parse(output: &str) -> serde_json::Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_list_keeps_one_entry_per_record() {
        let records = vec![
            record(r#"{"id":1,"subject":"a"}"#),
            record(r#"{"id":2,"subject":"b"}"#),
            record(r#"{"id":3}"#),
        ];
        let out = OutputFormat::Json.render_list(
            &records,
            &FormatMeta::default(),
            &RenderOptions::default(),
        );
        let value = parse(&out);
        assert_eq!(value["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_list_uses_default_list_selection() {
        let records = vec![record(
            r#"{"id":1,"from":"a@b.c","subject":"s","date":"2026-02-10","isRead":true,"bodyText":"big"}"#,
        )];
        let out = OutputFormat::Json.render_list(
            &records,
            &FormatMeta::default(),
            &RenderOptions::default(),
        );
        let value = parse(&out);
        let item = &value["data"][0];
        assert!(item.get("bodyText").is_none());
        assert_eq!(item["id"], 1);
        assert_eq!(item["isRead"], true);
    }

    #[test]
    fn test_credential_keys_always_redact() {
        let records = vec![record(r#"{"id":1,"password":"hunter2","authToken":"abc","clientSecret":"s"}"#)];
        let out = OutputFormat::Json.render_list(
            &records,
            &FormatMeta::default(),
            &RenderOptions {
                fields: Some("*".to_string()),
                view: None,
            },
        );
        let value = parse(&out);
        let item = &value["data"][0];
        assert_eq!(item["password"], "***REDACTED***");
        assert_eq!(item["authToken"], "***REDACTED***");
        assert_eq!(item["clientSecret"], "***REDACTED***");
    }

    #[test]
    fn test_body_html_placeholder_and_null() {
        let truthy = record(r#"{"id":1,"bodyHtml":"<p>hi</p>"}"#);
        let falsy = record(r#"{"id":2,"bodyHtml":""}"#);
        let options = RenderOptions::with_fields(Some("*".to_string()));
        let out = OutputFormat::Json.render_detail(&truthy, &options);
        assert_eq!(parse(&out)["data"]["bodyHtml"], "<HTML content>");
        let out = OutputFormat::Json.render_detail(&falsy, &options);
        assert!(parse(&out)["data"]["bodyHtml"].is_null());
    }

    #[test]
    fn test_underscore_keys_are_dropped() {
        let rec = record(r#"{"id":1,"_rowid":99}"#);
        let out = OutputFormat::Json.render_detail(&rec, &RenderOptions::default());
        assert!(parse(&out)["data"].get("_rowid").is_none());
    }

    #[test]
    fn test_list_echoes_meta_entries() {
        let meta = FormatMeta {
            total: Some(150),
            unread: Some(3),
            folder: Some("INBOX".to_string()),
            page: Some(2),
            total_pages: Some(8),
            showing: Some("21-40".to_string()),
        };
        let out = OutputFormat::Json.render_list(&[], &meta, &RenderOptions::default());
        let value = parse(&out);
        assert_eq!(value["meta"]["total"], 150);
        assert_eq!(value["meta"]["totalPages"], 8);
        assert_eq!(value["meta"]["showing"], "21-40");
    }

    #[test]
    fn test_detail_has_no_meta_key() {
        let out =
            OutputFormat::Json.render_detail(&record(r#"{"id":1}"#), &RenderOptions::default());
        assert!(parse(&out).get("meta").is_none());
    }

    #[test]
    fn test_detail_defaults_to_wildcard() {
        let rec = record(r#"{"id":1,"bodyText":"all of it","folder":"INBOX"}"#);
        let out = OutputFormat::Json.render_detail(&rec, &RenderOptions::default());
        let value = parse(&out);
        assert_eq!(value["data"]["bodyText"], "all of it");
        assert_eq!(value["data"]["folder"], "INBOX");
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let out =
            OutputFormat::Json.render_detail(&record(r#"{"id":1}"#), &RenderOptions::default());
        assert_eq!(out, "{\n  \"data\": {\n    \"id\": 1\n  }\n}");
    }
}
