use crate::application::{Clock, PickerConfig, StateManager, local_today};
use crate::domain::{
    DEFAULT_TRACK_WIDTH, DateRangeInput, IndicatorAnimator, IndicatorFrame, PickerMode,
    PickerState, SlidingTrack, TrackPlacement, generate_time_options,
};
use crate::error::Result;
use crate::infrastructure::{PickerEvent, PickerObserver};
use chrono::NaiveDate;

/// Widths of the mode buttons above the sliding track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeButtons {
    pub date_width: u32,
    pub gap: u32,
    pub custom_range_width: u32,
}

impl Default for ModeButtons {
    fn default() -> Self {
        Self {
            date_width: 36,
            gap: 24,
            custom_range_width: 90,
        }
    }
}

impl ModeButtons {
    /// Where the indicator sits when `mode` is active.
    pub fn indicator_target(&self, mode: PickerMode) -> IndicatorFrame {
        match mode {
            PickerMode::Date => IndicatorFrame::new(0, self.date_width),
            PickerMode::CustomRange => {
                IndicatorFrame::new(self.date_width + self.gap, self.custom_range_width)
            }
        }
    }
}

/// Headless picker: state, mode buttons and the sliding indicator wired
/// together the way the widget uses them.
///
/// The host forwards user intents (`click_mode`, `select_date`, ...) and
/// drives the animation by calling [`tick`](Self::tick) from its own timer.
/// Everything observable comes back through the subscribed observers.
#[derive(Debug)]
pub struct DateRangePicker {
    config: PickerConfig,
    state: StateManager,
    buttons: ModeButtons,
    animator: IndicatorAnimator,
    track: SlidingTrack,
}

impl DateRangePicker {
    pub fn new(config: PickerConfig) -> Result<Self> {
        Self::with_clock(config, local_today)
    }

    pub fn with_clock(config: PickerConfig, clock: Clock) -> Result<Self> {
        let config = config.validate(clock())?;
        let mut state = StateManager::with_clock(config.bounds()?, clock);

        // Observers are not attached yet, so seeding the state is silent.
        match config
            .initial_range
            .as_ref()
            .map(|range| (range.start_date(), range.end_date()))
        {
            Some((Some(start), Some(end))) => state.select_range(start, end)?,
            _ => {
                if let Some(date) = config.initial_date {
                    state.select_date(date)?;
                }
            }
        }
        state.set_mode(config.mode);

        let buttons = ModeButtons::default();
        let initial = buttons.indicator_target(config.mode);
        let mut track = SlidingTrack::new(DEFAULT_TRACK_WIDTH);
        track.set_frame(initial);

        Ok(Self {
            config,
            state,
            buttons,
            animator: IndicatorAnimator::with_defaults(initial),
            track,
        })
    }

    pub fn with_buttons(mut self, buttons: ModeButtons) -> Self {
        self.buttons = buttons;
        let frame = buttons.indicator_target(self.state.state().mode);
        self.animator.jump_to(frame);
        self.track.set_frame(frame);
        self
    }

    pub fn with_animator(mut self, animator: IndicatorAnimator) -> Self {
        self.animator = animator;
        self.animator.jump_to(self.track.frame());
        self
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: PickerObserver + 'static,
    {
        self.state.subscribe(observer);
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn state(&self) -> PickerState {
        self.state.state()
    }

    pub fn state_manager(&self) -> &StateManager {
        &self.state
    }

    pub fn buttons(&self) -> ModeButtons {
        self.buttons
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn indicator(&self) -> IndicatorFrame {
        self.track.frame()
    }

    pub fn track_placement(&self) -> TrackPlacement {
        self.track.placement()
    }

    /// A mode button was clicked: switch mode and slide the indicator under it.
    pub fn click_mode(&mut self, mode: PickerMode) {
        self.state.set_mode(mode);
        self.animator.retarget(self.buttons.indicator_target(mode));
    }

    /// Advance the indicator animation by one tick.
    pub fn tick(&mut self) -> Option<IndicatorFrame> {
        let frame = self.animator.tick()?;
        self.track.set_frame(frame);
        self.state.emit(PickerEvent::Frame { frame });
        Some(frame)
    }

    /// Tick until the indicator settles, returning every frame produced.
    pub fn finish_animation(&mut self) -> Vec<IndicatorFrame> {
        std::iter::from_fn(|| self.tick()).collect()
    }

    pub fn resize_track(&mut self, track_width: u32) -> TrackPlacement {
        self.track.resize(track_width)
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        self.state.select_date(date)
    }

    pub fn select_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<()> {
        self.state.select_range(start, end)
    }

    pub fn set_visible_month(&mut self, month: NaiveDate) {
        self.state.set_visible_month(month);
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.animator
            .retarget(self.buttons.indicator_target(PickerMode::Date));
    }

    /// Current selection in the shape handed back to the host.
    pub fn selected_range(&self) -> DateRangeInput {
        let (start, end) = self.state.state().selected;
        DateRangeInput::new(start, end)
    }

    /// Entries for the time selector, spaced by the configured step.
    pub fn time_options(&self) -> Vec<String> {
        generate_time_options(self.config.time_step_minutes)
    }
}
