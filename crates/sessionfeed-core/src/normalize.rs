//! Turns raw feed records into validated [`Session`] values.
//!
//! Every record goes through [`normalize_record`], which either yields a
//! session or a [`Rejection`]. Rejected records are dropped from the output
//! and only show up in `debug` logs.

use serde_json::Value;

use crate::types::{NormalizeOptions, Record, Rejection, Session};

/// Normalize every record, keeping input order and dropping rejects.
pub fn normalize(records: &[Record], options: &NormalizeOptions) -> Vec<Session> {
    let mut sessions = Vec::with_capacity(records.len());
    let mut rejected = 0usize;

    for (index, record) in records.iter().enumerate() {
        match normalize_record(record, options) {
            Ok(session) => sessions.push(session),
            Err(reason) => {
                rejected += 1;
                tracing::debug!(index, %reason, "Dropped session record");
            }
        }
    }

    tracing::info!(accepted = sessions.len(), rejected, "Normalized session records");
    sessions
}

/// Validate a single record. Checks run in a fixed order and stop at the
/// first failure.
pub fn normalize_record(record: &Record, options: &NormalizeOptions) -> Result<Session, Rejection> {
    if let Some(kind) = record.get("type").and_then(Value::as_str) {
        if kind == options.excluded_type {
            return Err(Rejection::ExcludedType(kind.to_string()));
        }
    }

    let number = parse_number(record)?;
    // Gate only, the type is not kept on the session.
    required_str(record, "type")?;
    let title = required_str(record, "title")?;
    let track = required_str(record, "track")?;
    let description = required_str(record, "description")?;

    Ok(Session {
        number,
        title: escape(title),
        track: track.to_string(),
        description: escape(description),
    })
}

/// Replace `:` with `&#58;` and `"` with `&quot;`.
///
/// `&` is left alone, so a literal `&quot;` in the input is indistinguishable
/// from an escaped quote afterwards.
pub fn escape(text: &str) -> String {
    text.replace(':', "&#58;").replace('"', "&quot;")
}

/// `id` wins when present, even if it is not a usable string.
fn parse_number(record: &Record) -> Result<i64, Rejection> {
    let (field, value) = match (record.get("id"), record.get("number")) {
        (Some(value), _) => ("id", value),
        (None, Some(value)) => ("number", value),
        (None, None) => return Err(Rejection::MissingNumber),
    };

    let raw = value.as_str().ok_or(Rejection::NonStringField(field))?;
    raw.parse::<i64>()
        .map_err(|_| Rejection::InvalidNumber(raw.to_string()))
}

fn required_str<'a>(record: &'a Record, field: &'static str) -> Result<&'a str, Rejection> {
    match record.get(field) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(Rejection::NonStringField(field)),
        None => Err(Rejection::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn valid() -> Value {
        json!({
            "id": "101",
            "type": "Session",
            "title": "What's new: Swift",
            "track": "Developer Tools",
            "description": "Say \"hello\": twice"
        })
    }

    #[test]
    fn accepts_complete_record() {
        let session = normalize_record(&record(valid()), &NormalizeOptions::default()).unwrap();
        assert_eq!(session.number, 101);
        assert_eq!(session.title, "What's new&#58; Swift");
        assert_eq!(session.track, "Developer Tools");
        assert_eq!(session.description, "Say &quot;hello&quot;&#58; twice");
    }

    #[test]
    fn excludes_lab_records() {
        let mut value = valid();
        value["type"] = json!("Lab");
        let result = normalize_record(&record(value), &NormalizeOptions::default());
        assert_eq!(result, Err(Rejection::ExcludedType("Lab".to_string())));
    }

    #[test]
    fn exclusion_is_case_sensitive() {
        let mut value = valid();
        value["type"] = json!("lab");
        assert!(normalize_record(&record(value), &NormalizeOptions::default()).is_ok());
    }

    #[test]
    fn excluded_type_is_configurable() {
        let options = NormalizeOptions {
            excluded_type: "Session".to_string(),
        };
        assert!(normalize_record(&record(valid()), &options).is_err());

        let mut lab = valid();
        lab["type"] = json!("Lab");
        assert!(normalize_record(&record(lab), &options).is_ok());
    }

    #[test]
    fn falls_back_to_number_field() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("id");
        value["number"] = json!("42");
        let session = normalize_record(&record(value), &NormalizeOptions::default()).unwrap();
        assert_eq!(session.number, 42);
    }

    #[test]
    fn rejects_non_string_number_field() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("id");
        value["number"] = json!(5);
        let result = normalize_record(&record(value), &NormalizeOptions::default());
        assert_eq!(result, Err(Rejection::NonStringField("number")));
    }

    #[test]
    fn non_string_id_does_not_fall_back() {
        let mut value = valid();
        value["id"] = json!(5);
        value["number"] = json!("5");
        let result = normalize_record(&record(value), &NormalizeOptions::default());
        assert_eq!(result, Err(Rejection::NonStringField("id")));
    }

    #[test]
    fn rejects_missing_identifier() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("id");
        let result = normalize_record(&record(value), &NormalizeOptions::default());
        assert_eq!(result, Err(Rejection::MissingNumber));
    }

    #[test]
    fn rejects_non_integer_identifier() {
        for raw in ["abc", "1.5", " 3", ""] {
            let mut value = valid();
            value["id"] = json!(raw);
            let result = normalize_record(&record(value), &NormalizeOptions::default());
            assert_eq!(result, Err(Rejection::InvalidNumber(raw.to_string())));
        }
    }

    #[test]
    fn signed_identifiers_parse() {
        let mut value = valid();
        value["id"] = json!("-12");
        let session = normalize_record(&record(value), &NormalizeOptions::default()).unwrap();
        assert_eq!(session.number, -12);
    }

    #[test]
    fn identifier_checked_before_other_fields() {
        let value = json!({ "id": "x" });
        let result = normalize_record(&record(value), &NormalizeOptions::default());
        assert_eq!(result, Err(Rejection::InvalidNumber("x".to_string())));
    }

    #[test]
    fn rejects_each_missing_field_in_order() {
        for field in ["type", "title", "track", "description"] {
            let mut value = valid();
            value.as_object_mut().unwrap().remove(field);
            let result = normalize_record(&record(value), &NormalizeOptions::default());
            assert_eq!(result, Err(Rejection::MissingField(field)));
        }
    }

    #[test]
    fn rejects_non_string_fields() {
        let mut value = valid();
        value["track"] = json!(null);
        let result = normalize_record(&record(value), &NormalizeOptions::default());
        assert_eq!(result, Err(Rejection::NonStringField("track")));
    }

    #[test]
    fn normalize_keeps_order_and_drops_rejects() {
        let records: Vec<Record> = vec![
            record(json!({"id":"3","type":"Session","title":"c","track":"T","description":"d"})),
            record(json!({"id":"1","type":"Lab","title":"a","track":"T","description":"d"})),
            record(json!({"id":"2","type":"Session","title":"b","track":"T"})),
            record(json!({"id":"1","type":"Session","title":"a","track":"T","description":"d"})),
        ];
        let sessions = normalize(&records, &NormalizeOptions::default());
        let numbers: Vec<i64> = sessions.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![3, 1]);
    }

    #[test]
    fn escape_replaces_every_occurrence() {
        assert_eq!(escape("a:b:c"), "a&#58;b&#58;c");
        assert_eq!(escape("\"\""), "&quot;&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn escape_output_contains_no_raw_characters() {
        let escaped = escape("\":\":x:\"");
        assert!(!escaped.contains(':'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn escaping_is_lossy_for_existing_entities() {
        // A literal entity and the raw character end up identical.
        assert_eq!(escape("&quot;"), escape("\""));
        assert_eq!(escape("&#58;"), escape(":"));
    }

    #[test]
    fn re_escaping_escaped_text_leaves_it_unchanged() {
        let once = escape("A: \"B\"");
        assert_eq!(escape(&once), once);
    }
}
