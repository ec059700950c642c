use alloc::sync::Arc;

use pagesnap::EasingPreset;

use crate::Container;

/// A lifecycle hook receiving a section index and the section itself.
///
/// `before_snap` gets the section being left, `after_snap` the section arrived at.
pub type SnapCallback<S> = Arc<dyn Fn(usize, &S) + Send + Sync>;

/// Default snap duration in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: f64 = 1000.0;

/// Configuration for [`crate::SnapController`].
///
/// Applied as a whole by `SnapController::new` / `set_options`. Duration and easing can also be
/// changed live through dedicated setters.
pub struct SnapOptions<C: Container> {
    /// Source of the section sequence (its immediate children, in order).
    pub container: C,
    /// Hide the document scrollbar when the options are applied.
    pub hide_scrollbar: bool,
    /// Snap animation duration in milliseconds. Must be greater than 0.
    pub snap_duration_ms: f64,
    pub easing: EasingPreset,
    pub before_snap: Option<SnapCallback<C::Section>>,
    pub after_snap: Option<SnapCallback<C::Section>>,
}

impl<C: Container + Clone> Clone for SnapOptions<C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            hide_scrollbar: self.hide_scrollbar,
            snap_duration_ms: self.snap_duration_ms,
            easing: self.easing,
            before_snap: self.before_snap.clone(),
            after_snap: self.after_snap.clone(),
        }
    }
}

impl<C: Container> SnapOptions<C> {
    pub fn new(container: C) -> Self {
        Self {
            container,
            hide_scrollbar: false,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: EasingPreset::default(),
            before_snap: None,
            after_snap: None,
        }
    }

    pub fn with_hide_scrollbar(mut self, hide_scrollbar: bool) -> Self {
        self.hide_scrollbar = hide_scrollbar;
        self
    }

    pub fn with_snap_duration_ms(mut self, snap_duration_ms: f64) -> Self {
        self.snap_duration_ms = snap_duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: EasingPreset) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_before_snap(
        mut self,
        before_snap: Option<impl Fn(usize, &C::Section) + Send + Sync + 'static>,
    ) -> Self {
        self.before_snap = before_snap.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_after_snap(
        mut self,
        after_snap: Option<impl Fn(usize, &C::Section) + Send + Sync + 'static>,
    ) -> Self {
        self.after_snap = after_snap.map(|f| Arc::new(f) as _);
        self
    }
}

impl<C: Container> core::fmt::Debug for SnapOptions<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SnapOptions")
            .field("hide_scrollbar", &self.hide_scrollbar)
            .field("snap_duration_ms", &self.snap_duration_ms)
            .field("easing", &self.easing)
            .field("before_snap", &self.before_snap.is_some())
            .field("after_snap", &self.after_snap.is_some())
            .finish_non_exhaustive()
    }
}
