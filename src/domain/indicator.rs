use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(40);
/// Track width assumed before the host has reported a real one.
pub const DEFAULT_TRACK_WIDTH: u32 = 262;

/// One (position, width) sample of the sliding indicator, in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub position: u32,
    pub width: u32,
}

impl IndicatorFrame {
    pub fn new(position: u32, width: u32) -> Self {
        Self { position, width }
    }
}

fn lerp(from: u32, to: u32, progress: f64) -> u32 {
    let value = from as f64 + (to as f64 - from as f64) * progress;
    value.round().max(0.0) as u32
}

/// Linear, frame-stepped interpolation of the indicator between two frames.
///
/// The animator owns no clock. The host calls [`tick`](Self::tick) on its own
/// schedule, and each call advances time by the fixed tick interval.
#[derive(Debug, Clone)]
pub struct IndicatorAnimator {
    tick_interval: Duration,
    duration: Duration,
    elapsed: Duration,
    current: IndicatorFrame,
    target: IndicatorFrame,
    /// Set only while an animation is in flight.
    origin: Option<IndicatorFrame>,
}

impl IndicatorAnimator {
    pub fn new(tick_interval: Duration, duration: Duration, initial: IndicatorFrame) -> Self {
        Self {
            tick_interval,
            duration,
            elapsed: Duration::ZERO,
            current: initial,
            target: initial,
            origin: None,
        }
    }

    pub fn with_defaults(initial: IndicatorFrame) -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, DEFAULT_ANIMATION_DURATION, initial)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frame most recently produced (or the settled frame when idle).
    pub fn current(&self) -> IndicatorFrame {
        self.current
    }

    pub fn target(&self) -> IndicatorFrame {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Begin, or redirect, an animation toward `target`.
    ///
    /// While idle the interpolation starts from `current`. While in flight
    /// the frame currently on screen is used instead, so a redirect never
    /// jumps.
    pub fn start(&mut self, current: IndicatorFrame, target: IndicatorFrame) {
        let origin = if self.is_running() {
            self.current
        } else {
            current
        };
        log::trace!(
            "Indicator animation ({}, {}) -> ({}, {})",
            origin.position,
            origin.width,
            target.position,
            target.width
        );
        self.current = origin;
        self.origin = Some(origin);
        self.target = target;
        self.elapsed = Duration::ZERO;
    }

    /// Redirect from wherever the indicator is now.
    pub fn retarget(&mut self, target: IndicatorFrame) {
        self.start(self.current, target);
    }

    /// Place the indicator immediately, cancelling any animation.
    pub fn jump_to(&mut self, frame: IndicatorFrame) {
        self.current = frame;
        self.target = frame;
        self.origin = None;
        self.elapsed = Duration::ZERO;
    }

    /// Stop ticking and leave the last frame where it is.
    pub fn stop(&mut self) {
        self.origin = None;
    }

    /// Advance one tick. Returns `None` once the animation has settled.
    pub fn tick(&mut self) -> Option<IndicatorFrame> {
        let origin = self.origin?;
        self.elapsed = self.elapsed.saturating_add(self.tick_interval);

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if progress >= 1.0 {
            self.current = self.target;
            self.origin = None;
            return Some(self.target);
        }

        self.current = IndicatorFrame {
            position: lerp(origin.position, self.target.position, progress),
            width: lerp(origin.width, self.target.width, progress),
        };
        Some(self.current)
    }
}

/// Widths of the three pieces laid out along the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPlacement {
    pub left_spacer: u32,
    pub indicator_width: u32,
    pub right_spacer: u32,
}

impl TrackPlacement {
    pub fn compute(track_width: u32, frame: IndicatorFrame) -> Self {
        let track_width = if track_width == 0 {
            DEFAULT_TRACK_WIDTH
        } else {
            track_width
        };
        let max_position = track_width.saturating_sub(frame.width);
        let clamped = frame.position.min(max_position);

        Self {
            left_spacer: clamped,
            indicator_width: frame.width,
            right_spacer: track_width.saturating_sub(clamped).saturating_sub(frame.width),
        }
    }
}

/// The strip hosting the indicator. Keeps the last applied frame so a
/// resize mid-animation re-lays out what is on screen, not the target.
#[derive(Debug, Clone)]
pub struct SlidingTrack {
    track_width: u32,
    frame: IndicatorFrame,
    placement: TrackPlacement,
}

impl SlidingTrack {
    pub fn new(track_width: u32) -> Self {
        let frame = IndicatorFrame::default();
        Self {
            track_width,
            frame,
            placement: TrackPlacement::compute(track_width, frame),
        }
    }

    pub fn set_frame(&mut self, frame: IndicatorFrame) -> TrackPlacement {
        self.frame = frame;
        self.update_layout()
    }

    pub fn resize(&mut self, track_width: u32) -> TrackPlacement {
        self.track_width = track_width;
        self.update_layout()
    }

    pub fn track_width(&self) -> u32 {
        self.track_width
    }

    pub fn frame(&self) -> IndicatorFrame {
        self.frame
    }

    pub fn placement(&self) -> TrackPlacement {
        self.placement
    }

    fn update_layout(&mut self) -> TrackPlacement {
        self.placement = TrackPlacement::compute(self.track_width, self.frame);
        self.placement
    }
}
