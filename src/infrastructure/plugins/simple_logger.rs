use crate::infrastructure::{PickerEvent, PickerObserver};
use anyhow::Result;

/// Plugin that logs every picker notification through the `log` facade
pub struct EventLogger;

impl PickerObserver for EventLogger {
    fn on_event(&self, event: &PickerEvent) -> Result<()> {
        match event {
            PickerEvent::ModeChanged { mode } => log::info!("mode_changed: {}", mode),
            PickerEvent::SelectedDateChanged { date } => {
                log::info!("selected_date_changed: {}", date.format("%Y-%m-%d"))
            }
            PickerEvent::SelectedRangeChanged { start, end } => log::info!(
                "selected_range_changed: {} -> {}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
            PickerEvent::VisibleMonthChanged { month } => {
                log::info!("visible_month_changed: {}", month.format("%Y-%m"))
            }
            PickerEvent::StateChanged { state } => log::info!(
                "state_changed: mode={} selected={:?} visible_month={}",
                state.mode,
                state.selected,
                state.visible_month.format("%Y-%m")
            ),
            // Frames arrive every tick; keep them out of the default log level.
            PickerEvent::Frame { frame } => {
                log::debug!("frame: position={} width={}", frame.position, frame.width)
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "Event Logger"
    }
}
