use serde_json::Value;

const TITLE_FIELDS: &[&str] = &["name", "title", "label", "id"];

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// One-line title for an arbitrary record: the first of name/title/label/id,
/// otherwise a compact `key: value` rendering
pub fn record_title(record: &Value, max_len: usize) -> String {
    for field in TITLE_FIELDS {
        match record.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => return truncate(s.trim(), max_len),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    truncate(&format_compact(record), max_len)
}

pub fn format_compact(value: &Value) -> String {
    let Some(obj) = value.as_object() else {
        return serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    };

    let pairs: Vec<String> = obj
        .iter()
        .map(|(k, v)| {
            let value_str = match v {
                Value::String(s) => serde_json::to_string(&truncate(s, 30))
                    .unwrap_or_else(|_| "\"...\"".to_string()),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => "null".to_string(),
                Value::Array(_) => "[...]".to_string(),
                Value::Object(_) => "{...}".to_string(),
            };
            format!("{}: {}", k, value_str)
        })
        .collect();

    if pairs.is_empty() {
        "{}".to_string()
    } else {
        pairs.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Cerimônia de abertura", 10), "Cerimôn...");
    }

    #[test]
    fn test_record_title_prefers_name() {
        let record = json!({"id": "r1", "name": "Ana Souza", "title": "ignored"});
        assert_eq!(record_title(&record, 40), "Ana Souza");
    }

    #[test]
    fn test_record_title_numeric_id() {
        assert_eq!(record_title(&json!({"id": 42}), 40), "42");
    }

    #[test]
    fn test_record_title_falls_back_to_compact() {
        let record = json!({"at": "2024-01-15", "ok": true});
        assert_eq!(record_title(&record, 80), "at: \"2024-01-15\", ok: true");
    }
}
