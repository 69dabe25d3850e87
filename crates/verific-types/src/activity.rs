use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

/// A scheduled activity of an event (talk, workshop, check-in window).
///
/// Field names follow the camelCase export of the event platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub starts_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl Activity {
    /// Length of the activity, or `None` when it has no end or ends before it starts
    pub fn duration(&self) -> Option<TimeDelta> {
        let ends_at = self.ends_at?;
        let duration = ends_at.signed_duration_since(self.starts_at);
        (duration >= TimeDelta::zero()).then_some(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(json: &str) -> Activity {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_camel_case() {
        let a = activity(
            r#"{"id":"a1","name":"Abertura","startsAt":"2024-01-15T09:00:00-03:00",
                "endsAt":"2024-01-15T10:30:00-03:00","location":"Auditorio","eventId":"ev"}"#,
        );
        assert_eq!(a.name, "Abertura");
        assert_eq!(a.location.as_deref(), Some("Auditorio"));
        assert_eq!(a.duration(), Some(TimeDelta::minutes(90)));
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let a = activity(r#"{"id":"a2","name":"Coffee","startsAt":"2024-01-15T15:00:00Z"}"#);
        assert_eq!(a.duration(), None);
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("endsAt").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_negative_duration_is_none() {
        let a = activity(
            r#"{"id":"a3","name":"Broken","startsAt":"2024-01-15T15:00:00Z",
                "endsAt":"2024-01-15T14:00:00Z"}"#,
        );
        assert_eq!(a.duration(), None);
    }
}
