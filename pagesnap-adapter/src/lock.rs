use crate::Viewport;

/// Mutual exclusion for snap animations.
///
/// One state, two effects: the flag gates the scroll handler, and the viewport is told to
/// suppress wheel/touch input while the flag is set. Both effects always change together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    engaged: bool,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Engages the lock. Engaging twice is harmless.
    pub fn engage<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        if !self.engaged {
            atrace!("ScrollLock::engage");
        }
        self.engaged = true;
        viewport.set_input_suppressed(true);
    }

    /// Releases the lock. Releasing an unlocked lock is harmless.
    pub fn release<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        if self.engaged {
            atrace!("ScrollLock::release");
        }
        self.engaged = false;
        viewport.set_input_suppressed(false);
    }
}
