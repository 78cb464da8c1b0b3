use crate::domain::{IndicatorFrame, PickerMode, PickerState};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Notification published by the picker core
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PickerEvent {
    ModeChanged { mode: PickerMode },
    SelectedDateChanged { date: NaiveDate },
    SelectedRangeChanged { start: NaiveDate, end: NaiveDate },
    VisibleMonthChanged { month: NaiveDate },
    StateChanged { state: PickerState },
    Frame { frame: IndicatorFrame },
}

impl PickerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PickerEvent::ModeChanged { .. } => "mode_changed",
            PickerEvent::SelectedDateChanged { .. } => "selected_date_changed",
            PickerEvent::SelectedRangeChanged { .. } => "selected_range_changed",
            PickerEvent::VisibleMonthChanged { .. } => "visible_month_changed",
            PickerEvent::StateChanged { .. } => "state_changed",
            PickerEvent::Frame { .. } => "frame",
        }
    }
}

/// Trait for plugins that observe picker notifications
pub trait PickerObserver {
    /// Called synchronously, in emission order, for every notification
    fn on_event(&self, event: &PickerEvent) -> Result<()>;

    /// Human-readable name for this observer
    fn name(&self) -> &str;
}

/// Registry for managing picker observers
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn PickerObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register a new observer
    pub fn register<O>(&mut self, observer: O)
    where
        O: PickerObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Deliver an event to every registered observer
    pub fn dispatch(&self, event: &PickerEvent) {
        for observer in &self.observers {
            if let Err(e) = observer.on_event(event) {
                // Keep going; one misbehaving observer must not starve the rest.
                log::warn!(
                    "Observer '{}' failed on {}: {:#}",
                    observer.name(),
                    event.name(),
                    e
                );
            }
        }
    }

    /// List all registered observers
    pub fn list_observers(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.list_observers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::test_harness::RecordingObserver;

    struct FailingObserver;

    impl PickerObserver for FailingObserver {
        fn on_event(&self, _event: &PickerEvent) -> Result<()> {
            anyhow::bail!("always fails")
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn failing_observer_does_not_stop_dispatch() {
        let recorder = RecordingObserver::new();
        let mut registry = ObserverRegistry::new();
        registry.register(FailingObserver);
        registry.register(recorder.clone());

        registry.dispatch(&PickerEvent::ModeChanged {
            mode: PickerMode::CustomRange,
        });

        assert_eq!(recorder.names(), vec!["mode_changed"]);
        assert_eq!(registry.list_observers(), vec!["Failing", "Recorder"]);
    }

    #[test]
    fn events_serialize_with_a_tag() {
        let event = PickerEvent::Frame {
            frame: IndicatorFrame::new(60, 90),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "frame");
        assert_eq!(json["frame"]["position"], 60);

        let event = PickerEvent::ModeChanged {
            mode: PickerMode::CustomRange,
        };
        assert_eq!(serde_json::to_value(&event).unwrap()["mode"], "CUSTOM_RANGE");
    }
}
