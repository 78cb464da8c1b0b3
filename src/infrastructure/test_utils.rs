/// Test utilities shared by the picker's unit tests
///
/// The picker reads "today" through a clock function, so every test pins the
/// clock to [`fixed_today`] and records notifications with a
/// [`RecordingObserver`] instead of inspecting log output.
///
/// ## Usage Examples
///
/// ```ignore
/// use crate::infrastructure::test_utils::test_harness::*;
///
/// #[test]
/// fn my_test() {
///     let recorder = RecordingObserver::new();
///     let mut manager = manager_with_recorder(SelectionBounds::unbounded(), &recorder);
///
///     manager.select_date(date(2024, 6, 1)).unwrap();
///     assert_eq!(recorder.names(), vec!["selected_date_changed", ...]);
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::application::StateManager;
    use crate::domain::SelectionBounds;
    use crate::infrastructure::{PickerEvent, PickerObserver};
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
    }

    /// Clock used by tests: 2024-06-15, a Saturday
    pub fn fixed_today() -> NaiveDate {
        date(2024, 6, 15)
    }

    /// Observer that keeps every event it sees; clones share the same log
    #[derive(Clone, Default)]
    pub struct RecordingObserver {
        events: Rc<RefCell<Vec<PickerEvent>>>,
    }

    impl RecordingObserver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<PickerEvent> {
            self.events.borrow().clone()
        }

        pub fn names(&self) -> Vec<&'static str> {
            self.events.borrow().iter().map(PickerEvent::name).collect()
        }

        pub fn count(&self, name: &str) -> usize {
            self.events
                .borrow()
                .iter()
                .filter(|e| e.name() == name)
                .count()
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl PickerObserver for RecordingObserver {
        fn on_event(&self, event: &PickerEvent) -> Result<()> {
            self.events.borrow_mut().push(event.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "Recorder"
        }
    }

    /// State manager on the fixed clock with `recorder` subscribed
    pub fn manager_with_recorder(
        bounds: SelectionBounds,
        recorder: &RecordingObserver,
    ) -> StateManager {
        let mut manager = StateManager::with_clock(bounds, fixed_today);
        manager.subscribe(recorder.clone());
        manager
    }

    mod tests {
        use super::*;

        #[test]
        fn clones_share_recorded_events() {
            let recorder = RecordingObserver::new();
            let clone = recorder.clone();
            clone
                .on_event(&PickerEvent::VisibleMonthChanged {
                    month: date(2024, 1, 1),
                })
                .unwrap();

            assert_eq!(recorder.names(), vec!["visible_month_changed"]);
            recorder.clear();
            assert!(clone.events().is_empty());
        }
    }
}
