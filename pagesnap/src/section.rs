use crate::ScrollDirection;

/// Tolerance for sub-pixel noise at section boundaries.
///
/// Smaller than [`crate::DIRECTION_MARGIN`].
pub const BOUNDARY_TOLERANCE: f64 = 2.0;

/// Live geometry of one section, measured from the document top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Viewport geometry at the time of a scroll sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
        }
    }

    pub fn viewport_bottom(&self) -> f64 {
        self.offset + self.viewport_height
    }

    /// Whether the viewport has reached into the section after `current`.
    pub fn touches_next(&self, current: SectionRect) -> bool {
        self.viewport_bottom() > current.bottom() - BOUNDARY_TOLERANCE
    }

    /// Whether the viewport has moved above the top of `current`.
    pub fn touches_previous(&self, current: SectionRect) -> bool {
        self.offset - current.top < -BOUNDARY_TOLERANCE
    }
}

/// Which section is current, and when a scroll sample should move to a neighbor.
///
/// The tracker only knows the number of sections. Geometry is passed in per call, since it is
/// measured live by the adapter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionTracker {
    len: usize,
    current: usize,
}

impl SectionTracker {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn last_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Moves to `index`. Out-of-range indexes leave the tracker unchanged and return `false`.
    pub fn set_current(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.current = index;
        true
    }

    /// Replaces the section count, keeping the current index in range.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.current = self.current.min(len.saturating_sub(1));
    }

    /// Decides whether `sample` should trigger a transition away from the current section.
    ///
    /// `current` is the live geometry of the section at [`Self::current_index`].
    pub fn next_target(
        &self,
        sample: ScrollSample,
        current: SectionRect,
        direction: ScrollDirection,
    ) -> Option<usize> {
        let last = self.last_index()?;
        let target = if sample.touches_next(current)
            && direction == ScrollDirection::Forward
            && self.current < last
        {
            Some(self.current + 1)
        } else if sample.touches_previous(current)
            && direction == ScrollDirection::Backward
            && self.current >= 1
        {
            Some(self.current - 1)
        } else {
            None
        };
        if target.is_some() {
            sdebug!(
                from = self.current,
                to = ?target,
                offset = sample.offset,
                "SectionTracker::next_target"
            );
        }
        target
    }

    /// Computes where a snap to `target` should land.
    ///
    /// Moving forward lands on the target's top edge. Anything else backs up one full
    /// viewport from the current offset. Never negative: a viewport cannot scroll above 0, so a
    /// negative destination could never be reached exactly.
    pub fn destination(
        direction: ScrollDirection,
        target: SectionRect,
        sample: ScrollSample,
    ) -> f64 {
        let to = match direction {
            ScrollDirection::Forward => target.top,
            ScrollDirection::Backward | ScrollDirection::Stationary => {
                sample.offset - sample.viewport_height
            }
        };
        to.max(0.0)
    }
}
