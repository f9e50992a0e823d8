use serde::Serialize;

/// Event name used when none is configured.
pub(crate) const DEFAULT_EVENT_NAME: &str = "default-input-submit-event";

/// Payload carried by a submit event
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitDetail {
    pub value: String,
}

/// An application-defined notification emitted by a component.
///
/// `bubbles` lets the event travel from the host layer to the layers below it,
/// `composed` lets it leave the host at all. See
/// [`LayerManager::dispatch`](crate::app::layer_manager::LayerManager::dispatch).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub detail: SubmitDetail,
    pub bubbles: bool,
    pub composed: bool,
    /// Id of the component that emitted the event
    #[serde(skip)]
    pub target: u64,
}

impl CustomEvent {
    pub fn submit<T: Into<String>, V: Into<String>>(target: u64, event_type: T, value: V) -> Self {
        Self {
            event_type: event_type.into(),
            detail: SubmitDetail {
                value: value.into(),
            },
            bubbles: true,
            composed: true,
            target,
        }
    }

    pub fn is(&self, event_type: &str) -> bool {
        self.event_type == event_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_event_flags() {
        let event = CustomEvent::submit(7, DEFAULT_EVENT_NAME, "a");
        assert!(event.bubbles);
        assert!(event.composed);
        assert_eq!(event.target, 7);
        assert!(event.is("default-input-submit-event"));
        assert!(!event.is("search-submit"));
    }

    #[test]
    fn json_shape() {
        let event = CustomEvent::submit(7, "search-submit", "query");
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"search-submit","detail":{"value":"query"},"bubbles":true,"composed":true}"#
        );
    }
}
