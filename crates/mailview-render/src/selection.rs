//! Field selection: choosing which named attributes of a record survive
//! into output.
//!
//! The selection string syntax is shared by the CLI `--fields` flag and the
//! HTTP `fields` query parameter:
//!
//! - `` (empty) or `*` selects every field
//! - `id,from,subject` selects exactly those fields, in that order
//! - `*,^bodyText,^bodyHtml` selects every field except the excluded ones

use mailview_types::EmailRecord;
use std::collections::HashSet;

/// What a selection includes before the exclude set is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeSpec {
    /// Wildcard: every field of the source record.
    All,
    /// Fixed ordered field list; duplicates are preserved.
    Fields(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub include: IncludeSpec,
    /// Only meaningful alongside [`IncludeSpec::All`]; it can only remove
    /// fields, never add them.
    pub exclude: Vec<String>,
}

impl FieldSelection {
    pub fn all() -> Self {
        Self {
            include: IncludeSpec::All,
            exclude: Vec::new(),
        }
    }
}

/// Parse a selection string. Total: any input yields a defined selection.
pub fn parse_field_selection(input: &str) -> FieldSelection {
    if input.is_empty() || input == "*" {
        return FieldSelection::all();
    }

    let mut include = Vec::new();
    let mut exclude = Vec::new();
    let mut all = false;

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(name) = token.strip_prefix('^') {
            exclude.push(name.to_string());
        } else if token == "*" {
            // A wildcard discards explicit fields collected so far; excludes
            // keep accumulating across the whole string
            all = true;
            include.clear();
        } else if !all {
            include.push(token.to_string());
        }
    }

    FieldSelection {
        include: if all {
            IncludeSpec::All
        } else {
            IncludeSpec::Fields(include)
        },
        exclude,
    }
}

/// Default selection for a named view. Unrecognized views see everything.
pub fn default_field_selection(view: &str) -> FieldSelection {
    match view {
        "list" | "search" => FieldSelection {
            include: IncludeSpec::Fields(
                ["id", "from", "subject", "date", "isRead"]
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
            ),
            exclude: Vec::new(),
        },
        _ => FieldSelection::all(),
    }
}

/// Report selected field names that are not in `available`, explicit
/// includes first, then excludes, each in encounter order. Advisory only:
/// projection and rendering proceed regardless.
pub fn validate_field_selection(selection: &FieldSelection, available: &[String]) -> Vec<String> {
    let known: HashSet<&str> = available.iter().map(String::as_str).collect();
    let mut invalid = Vec::new();

    if let IncludeSpec::Fields(fields) = &selection.include {
        for field in fields {
            if !known.contains(field.as_str()) {
                invalid.push(field.clone());
            }
        }
    }

    for field in &selection.exclude {
        if !known.contains(field.as_str()) {
            invalid.push(field.clone());
        }
    }

    invalid
}

/// Project a record through a selection. The source is never mutated;
/// requested fields missing from the source are omitted, not materialized.
pub fn select_fields(record: &EmailRecord, selection: &FieldSelection) -> EmailRecord {
    match &selection.include {
        IncludeSpec::All => {
            let mut result = record.clone();
            for field in &selection.exclude {
                result.remove(field);
            }
            result
        }
        IncludeSpec::Fields(fields) => {
            let mut result = EmailRecord::new();
            for field in fields {
                if let Some(value) = record.get(field) {
                    result.insert(field.clone(), value.clone());
                }
            }
            result
        }
    }
}
