use crate::domain::{PickerMode, PickerState, SelectionBounds, first_of_month, normalize_range};
use crate::error::Result;
use crate::infrastructure::{ObserverRegistry, PickerEvent, PickerObserver};
use chrono::{Local, NaiveDate};

/// Source of "today" for default selections and resets.
pub type Clock = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Single owner of the picker state.
///
/// Holds the current [`PickerState`] snapshot, enforces the selection bounds
/// and publishes one notification per accepted change. Every mutator validates
/// first and only then swaps in a new snapshot, so a failed call leaves the
/// state and the observers untouched.
#[derive(Debug)]
pub struct StateManager {
    bounds: SelectionBounds,
    clock: Clock,
    state: PickerState,
    observers: ObserverRegistry,
}

impl StateManager {
    pub fn new(bounds: SelectionBounds) -> Self {
        Self::with_clock(bounds, local_today)
    }

    /// Convenience for hosts holding raw optional bounds.
    pub fn from_dates(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Result<Self> {
        Ok(Self::new(SelectionBounds::new(min_date, max_date)?))
    }

    pub fn with_clock(bounds: SelectionBounds, clock: Clock) -> Self {
        let state = Self::default_state(bounds.clamp(clock()));
        Self {
            bounds,
            clock,
            state,
            observers: ObserverRegistry::new(),
        }
    }

    pub fn with_observers(mut self, observers: ObserverRegistry) -> Self {
        self.observers = observers;
        self
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: PickerObserver + 'static,
    {
        self.observers.register(observer);
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Latest snapshot. Callers get a copy, never a handle into the manager.
    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn bounds(&self) -> SelectionBounds {
        self.bounds
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.bounds.min_date()
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.bounds.max_date()
    }

    pub fn set_mode(&mut self, mode: PickerMode) {
        if mode == self.state.mode {
            return;
        }
        log::debug!("Picker mode change: {} -> {}", self.state.mode, mode);
        self.replace(self.state.with_mode(mode));
        self.emit(PickerEvent::ModeChanged { mode });
        self.emit_state();
    }

    /// Select a single date and drop any range end.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        let date = self.bounds.ensure_contains(date, "selected_date")?;
        if self.state.selected == (Some(date), None) {
            return Ok(());
        }
        log::debug!("Selecting date: {}", date.format("%Y-%m-%d"));

        let visible_month = first_of_month(date);
        self.replace(
            self.state
                .with_selection(Some(date), None)
                .with_visible_month(visible_month),
        );
        self.emit(PickerEvent::SelectedDateChanged { date });
        self.emit(PickerEvent::VisibleMonthChanged {
            month: visible_month,
        });
        self.emit_state();
        Ok(())
    }

    /// Select an inclusive range. Endpoints may be given in either order.
    ///
    /// Unlike [`select_date`](Self::select_date) this always notifies, even
    /// when the same range is selected again.
    pub fn select_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<()> {
        let (start, end) = normalize_range(start, end);
        let start = self.bounds.ensure_contains(start, "selected_range.start")?;
        let end = self.bounds.ensure_contains(end, "selected_range.end")?;
        log::debug!(
            "Selecting range: {} -> {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let visible_month = first_of_month(start);
        self.replace(
            self.state
                .with_selection(Some(start), Some(end))
                .with_visible_month(visible_month),
        );
        self.emit(PickerEvent::SelectedRangeChanged { start, end });
        self.emit(PickerEvent::VisibleMonthChanged {
            month: visible_month,
        });
        self.emit_state();
        Ok(())
    }

    /// Navigate the calendar. Out-of-bounds months are clamped, not rejected.
    pub fn set_visible_month(&mut self, month: NaiveDate) {
        let target = self.bounds.clamp_month(month);
        log::debug!("Updating visible month to {}", target.format("%Y-%m"));
        if target == self.state.visible_month {
            return;
        }
        self.replace(self.state.with_visible_month(target));
        self.emit(PickerEvent::VisibleMonthChanged { month: target });
        self.emit_state();
    }

    /// Back to today (clamped) in `DATE` mode. Always notifies.
    pub fn reset(&mut self) {
        let default_date = self.default_selection_date();
        let state = Self::default_state(default_date);
        log::debug!(
            "Resetting picker state to {}",
            default_date.format("%Y-%m-%d")
        );
        self.replace(state);
        self.emit(PickerEvent::ModeChanged { mode: state.mode });
        self.emit(PickerEvent::SelectedDateChanged { date: default_date });
        self.emit(PickerEvent::VisibleMonthChanged {
            month: state.visible_month,
        });
        self.emit_state();
    }

    /// Today, moved into the bounds if they exclude it.
    pub fn default_selection_date(&self) -> NaiveDate {
        self.bounds.clamp((self.clock)())
    }

    /// Single dispatch point for every notification, including indicator
    /// frames forwarded by the picker.
    pub(crate) fn emit(&self, event: PickerEvent) {
        self.observers.dispatch(&event);
    }

    fn emit_state(&self) {
        self.emit(PickerEvent::StateChanged { state: self.state });
    }

    fn replace(&mut self, state: PickerState) {
        self.state = state;
    }

    fn default_state(today: NaiveDate) -> PickerState {
        PickerState {
            mode: PickerMode::Date,
            selected: (Some(today), None),
            visible_month: first_of_month(today),
        }
    }
}
