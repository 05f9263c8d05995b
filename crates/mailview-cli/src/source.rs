use anyhow::{Context, Result};
use mailview_types::EmailRecord;
use serde::Deserialize;
use std::fs;
use std::io::Read;

/// Field names whose raw text values carry dates.
const DATE_FIELDS: &[&str] = &["date", "lastDate"];

/// A loaded mailbox: the ordered record sequence plus the store-reported
/// total and folder name. Stands in for the external record store.
#[derive(Debug, Clone)]
pub struct Mailbox {
    pub folder: Option<String>,
    /// Store-reported total, which may exceed the records present when the
    /// document holds a single page. Defaults to the record count.
    pub total: Option<u64>,
    pub emails: Vec<EmailRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MailboxDoc {
    Records(Vec<EmailRecord>),
    Document {
        folder: Option<String>,
        total: Option<u64>,
        emails: Vec<EmailRecord>,
    },
}

pub fn load_mailbox(input: Option<&str>) -> Result<Mailbox> {
    let raw = read_input(input)?;
    parse_mailbox(&raw)
}

fn parse_mailbox(raw: &str) -> Result<Mailbox> {
    let doc: MailboxDoc = serde_json::from_str(raw).context("malformed mailbox document")?;

    let (folder, total, mut emails) = match doc {
        MailboxDoc::Records(emails) => (None, None, emails),
        MailboxDoc::Document {
            folder,
            total,
            emails,
        } => (folder, total, emails),
    };

    for record in &mut emails {
        record.mark_date_fields(DATE_FIELDS);
    }

    Ok(Mailbox {
        folder,
        total,
        emails,
    })
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) if path != "-" => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Union of field names across records, in first-seen order.
pub fn available_fields(records: &[EmailRecord]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !fields.iter().any(|f| f == key) {
                fields.push(key.to_string());
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailview_types::FieldValue;

    #[test]
    fn test_parse_bare_array_document() {
        let mailbox = parse_mailbox(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(mailbox.folder, None);
        assert_eq!(mailbox.total, None);
        assert_eq!(mailbox.emails.len(), 2);
    }

    #[test]
    fn test_parse_wrapped_document() {
        let mailbox =
            parse_mailbox(r#"{"folder":"INBOX","total":150,"emails":[{"id":1}]}"#).unwrap();
        assert_eq!(mailbox.folder.as_deref(), Some("INBOX"));
        assert_eq!(mailbox.total, Some(150));
        assert_eq!(mailbox.emails.len(), 1);
    }

    #[test]
    fn test_parse_tags_date_fields() {
        let mailbox = parse_mailbox(r#"[{"id":1,"date":"2026-02-10"}]"#).unwrap();
        assert_eq!(
            mailbox.emails[0].get("date"),
            Some(&FieldValue::Date("2026-02-10".into()))
        );
    }

    #[test]
    fn test_parse_rejects_non_mailbox_json() {
        assert!(parse_mailbox("42").is_err());
        assert!(parse_mailbox("not json").is_err());
    }

    #[test]
    fn test_available_fields_union_in_first_seen_order() {
        let records: Vec<EmailRecord> = vec![
            serde_json::from_str(r#"{"id":1,"from":"a@b.c"}"#).unwrap(),
            serde_json::from_str(r#"{"id":2,"subject":"s","from":"d@e.f"}"#).unwrap(),
        ];
        assert_eq!(available_fields(&records), vec!["id", "from", "subject"]);
    }
}
