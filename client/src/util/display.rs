//! Text formatting for cards and the detail drawer.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use std::fmt::Display;

use serde_json::Value;

/// Placeholder for an absent value.
pub const DASH: &str = "-";

/// Coarse file category used to pick a card icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Spreadsheet,
    Image,
    Other,
}

impl FileKind {
    #[must_use]
    pub fn from_file_type(file_type: Option<&str>) -> Self {
        let Some(file_type) = file_type else {
            return Self::Other;
        };
        match file_type.trim().to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "excel" | "xls" | "xlsx" => Self::Spreadsheet,
            "image" | "png" | "jpg" | "jpeg" => Self::Image,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pdf => "file-pdf",
            Self::Spreadsheet => "file-excel",
            Self::Image => "file-image",
            Self::Other => "file-text",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Pdf => "#ff4d4f",
            Self::Spreadsheet => "#52c41a",
            Self::Image => "#1890ff",
            Self::Other => "#8c8c8c",
        }
    }
}

/// `2025-04-01T09:00:00.123Z` -> `2025-04-01 09:00:00`.
#[must_use]
pub fn format_timestamp(timestamp: &str) -> String {
    let head = timestamp.get(..19).unwrap_or(timestamp);
    head.replacen('T', " ", 1)
}

/// First eight characters of a trace id followed by an ellipsis.
#[must_use]
pub fn short_trace_id(trace_id: &str) -> String {
    match trace_id.char_indices().nth(8) {
        Some((cut, _)) => format!("{}...", &trace_id[..cut]),
        None => trace_id.to_owned(),
    }
}

#[must_use]
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| DASH.to_owned(), |v| v.to_string())
}

/// Who produced an extracted field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSource {
    /// Extracted by the pipeline (has a `data_source`).
    System,
    /// Entered or corrected by a reviewer.
    User,
}

impl FieldSource {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// One row of the drawer's extracted-data table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedField {
    pub field: String,
    pub value: String,
    pub source: FieldSource,
}

/// Flatten a result payload of `{field: {value, data_source}}` entries.
///
/// Non-object payloads yield no rows.
#[must_use]
pub fn extracted_fields(data: &Value) -> Vec<ExtractedField> {
    let Some(entries) = data.as_object() else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|(field, entry)| {
            let value = match entry.get("value") {
                None | Some(Value::Null) => DASH.to_owned(),
                Some(Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
            };
            let has_source = entry.get("data_source").is_some_and(|source| !source.is_null());
            ExtractedField {
                field: field.clone(),
                value,
                source: if has_source { FieldSource::System } else { FieldSource::User },
            }
        })
        .collect()
}
