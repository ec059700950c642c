/// Scroll intent derived from two successive offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Offset grew: top-to-bottom.
    Forward,
    /// Offset shrank: bottom-to-top.
    Backward,
    /// Movement within the deadband, or no sample yet.
    #[default]
    Stationary,
}

/// Deadband applied by [`DirectionDetector`].
///
/// Must stay below a single wheel tick (keep it under 5), otherwise real scrolls get dropped.
pub const DIRECTION_MARGIN: f64 = 3.0;

/// Classifies `current - previous` against `margin` (strict on both sides).
pub fn classify(previous: f64, current: f64, margin: f64) -> ScrollDirection {
    let delta = current - previous;
    if delta > margin {
        ScrollDirection::Forward
    } else if delta < -margin {
        ScrollDirection::Backward
    } else {
        ScrollDirection::Stationary
    }
}

/// Tracks the last known offset and the direction of the latest sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionDetector {
    last_offset: f64,
    direction: ScrollDirection,
    margin: f64,
}

impl Default for DirectionDetector {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl DirectionDetector {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            last_offset: initial_offset,
            direction: ScrollDirection::Stationary,
            margin: DIRECTION_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Classifies `offset` against the last known offset, then records it.
    pub fn sample(&mut self, offset: f64) -> ScrollDirection {
        self.direction = classify(self.last_offset, offset, self.margin);
        strace!(
            last = self.last_offset,
            offset,
            direction = ?self.direction,
            "DirectionDetector::sample"
        );
        self.last_offset = offset;
        self.direction
    }

    /// Overwrites the last known offset without classifying it.
    ///
    /// Used when a snap starts: the snap destination becomes the reference point, so the
    /// jump itself is not read back as user movement.
    pub fn record(&mut self, offset: f64) {
        self.last_offset = offset;
    }
}
