use serde::Serialize;

/// Every CTA and popup report goes out under this one event name.
pub const CTA_EVENT: &str = "cta_click";

/// Payload handed to the analytics hook. `name` travels separately; the
/// remaining fields serialize into the hook's parameter object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    #[serde(skip)]
    pub name: String,
    pub event_category: String,
    pub event_label: String,
    pub location: String,
}

impl AnalyticsEvent {
    pub fn cta(category: &str, label: &str, location: &str) -> Self {
        Self {
            name: CTA_EVENT.to_string(),
            event_category: category.to_string(),
            event_label: label.to_string(),
            location: location.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_exclude_name() {
        let event = AnalyticsEvent::cta("engagement", "Start free trial", "hero");
        let params = serde_json::to_value(&event).unwrap();
        assert_eq!(
            params,
            serde_json::json!({
                "event_category": "engagement",
                "event_label": "Start free trial",
                "location": "hero",
            })
        );
    }
}
