use crate::EasingFn;

/// One eased scroll from `from` to `to`, sampled by wall-clock timestamps.
///
/// The easing function is captured at construction, so swapping the preset on the controller
/// never affects an animation already in flight.
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: EasingFn,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: EasingFn) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
            easing,
        }
    }

    pub fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.elapsed(now_ms) >= self.duration_ms
    }

    /// Raw eased position at `now_ms`.
    ///
    /// Not clamped and not snapped to `to`: on the last frame the value may overshoot or fall
    /// short by a few units. The driver corrects the residual once [`Self::is_done`] holds.
    pub fn sample(&self, now_ms: f64) -> f64 {
        (self.easing)(
            self.elapsed(now_ms),
            self.from,
            self.to - self.from,
            self.duration_ms,
        )
    }

    /// Distance left between `actual` and the destination.
    pub fn residual(&self, actual: f64) -> f64 {
        self.to - actual
    }
}
