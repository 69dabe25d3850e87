//! Sample records shaped like the event platform's exports.

use serde_json::{Value, json};

/// Activity record in the camelCase export format
pub fn activity(id: &str, name: &str, starts_at: &str, ends_at: Option<&str>) -> Value {
    let mut record = json!({
        "id": id,
        "name": name,
        "startsAt": starts_at,
        "eventId": "evt-semana-2024",
    });
    if let Some(ends_at) = ends_at {
        record["endsAt"] = json!(ends_at);
    }
    record
}

/// Participant registration with a nested check-in timestamp
pub fn registration(id: &str, name: &str, checked_in_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "checkIn": { "at": checked_in_at, "method": "qr" },
    })
}

/// Four activities around 2024-01-15 (America/Sao_Paulo, UTC-3), deliberately
/// out of chronological order
pub fn sample_schedule() -> Vec<Value> {
    let mut keynote = activity(
        "a1",
        "Abertura",
        "2024-01-15T09:00:00-03:00",
        Some("2024-01-15T10:00:00-03:00"),
    );
    keynote["location"] = json!("Auditório");

    vec![
        activity(
            "a3",
            "Oficina de Rust",
            "2024-01-16T14:00:00-03:00",
            Some("2024-01-16T17:00:00-03:00"),
        ),
        keynote,
        activity("a4", "Encerramento", "2024-01-20T18:00:00-03:00", None),
        activity(
            "a2",
            "Coffee break",
            "2024-01-15T10:00:00-03:00",
            Some("2024-01-15T10:30:00-03:00"),
        ),
    ]
}

/// Serialize records as a JSON array
pub fn to_json_array(records: &[Value]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Serialize records as JSON Lines
pub fn to_json_lines(records: &[Value]) -> String {
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
