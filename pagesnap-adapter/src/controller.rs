use alloc::vec::Vec;

use pagesnap::{
    DirectionDetector, EasingFn, EasingPreset, ScrollAnimation, ScrollDirection, ScrollSample,
    SectionTracker, SnapError, SnapState, validate_duration,
};

use crate::completion::CompletionResolver;
use crate::{Container, ScrollLock, Section, SnapCompletion, SnapOptions, SnapOutcome, Viewport};

/// Duration of the snap to the first section performed by [`SnapController::register`].
pub const REGISTER_SNAP_DURATION_MS: f64 = 1000.0;

struct InFlight {
    animation: ScrollAnimation,
    target_index: usize,
    resolver: CompletionResolver,
}

/// A framework-neutral controller that turns free scrolling into section-to-section snaps.
///
/// This type does not hold any UI objects besides the injected [`Viewport`]. Adapters drive it by
/// calling:
/// - `on_scroll` when the viewport reports a scroll event (after `register`)
/// - `on_frame(timestamp_ms)` when a requested display frame arrives
///
/// Only one snap animates at a time. While it runs, the scroll lock is engaged: user input is
/// suppressed at the viewport and `on_scroll` ignores samples.
pub struct SnapController<V, C: Container> {
    viewport: V,
    options: SnapOptions<C>,
    sections: Vec<C::Section>,
    tracker: SectionTracker,
    detector: DirectionDetector,
    lock: ScrollLock,
    snap_duration_ms: f64,
    easing_preset: EasingPreset,
    easing: EasingFn,
    is_registered: bool,
    in_flight: Option<InFlight>,
}

impl<V: Viewport, C: Container> SnapController<V, C> {
    /// Creates a controller and derives the section sequence from `options.container`.
    ///
    /// Fails with [`SnapError::InvalidDuration`] if `options.snap_duration_ms <= 0`.
    pub fn new(viewport: V, options: SnapOptions<C>) -> Result<Self, SnapError> {
        let snap_duration_ms = validate_duration(options.snap_duration_ms)?;
        let sections = options.container.sections();
        adebug!(
            sections = sections.len(),
            snap_duration_ms,
            easing = %options.easing,
            "SnapController::new"
        );
        let mut c = Self {
            tracker: SectionTracker::new(sections.len()),
            detector: DirectionDetector::default(),
            lock: ScrollLock::new(),
            snap_duration_ms,
            easing_preset: options.easing,
            easing: options.easing.function(),
            is_registered: false,
            in_flight: None,
            sections,
            options,
            viewport,
        };
        if c.options.hide_scrollbar {
            c.hide_scrollbar();
        }
        Ok(c)
    }

    /// Re-applies a full configuration, re-deriving the sections.
    ///
    /// The current section index is clamped into the new sequence. On error nothing changes.
    pub fn set_options(&mut self, options: SnapOptions<C>) -> Result<(), SnapError> {
        let snap_duration_ms = validate_duration(options.snap_duration_ms)?;
        self.sections = options.container.sections();
        self.tracker.resize(self.sections.len());
        self.snap_duration_ms = snap_duration_ms;
        self.easing_preset = options.easing;
        self.easing = options.easing.function();
        self.options = options;
        adebug!(
            sections = self.sections.len(),
            snap_duration_ms,
            easing = %self.easing_preset,
            "SnapController::set_options"
        );
        self.viewport
            .set_scrollbar_hidden(self.options.hide_scrollbar);
        Ok(())
    }

    pub fn options(&self) -> &SnapOptions<C> {
        &self.options
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_viewport(self) -> V {
        self.viewport
    }

    pub fn sections(&self) -> &[C::Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn current_index(&self) -> usize {
        self.tracker.current_index()
    }

    pub fn current_section(&self) -> Option<&C::Section> {
        self.sections.get(self.tracker.current_index())
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.detector.direction()
    }

    pub fn last_known_offset(&self) -> f64 {
        self.detector.last_offset()
    }

    pub fn is_registered(&self) -> bool {
        self.is_registered
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn snap_duration_ms(&self) -> f64 {
        self.snap_duration_ms
    }

    pub fn easing(&self) -> EasingPreset {
        self.easing_preset
    }

    pub fn state(&self) -> SnapState {
        SnapState {
            is_registered: self.is_registered,
            scroll_locked: self.lock.is_engaged(),
            last_known_offset: self.detector.last_offset(),
            current_index: self.tracker.current_index(),
            direction: self.detector.direction(),
        }
    }

    /// Sets the duration used by subsequent snaps. An animation in flight keeps its duration.
    pub fn set_snap_duration(&mut self, duration_ms: f64) -> Result<(), SnapError> {
        self.snap_duration_ms = validate_duration(duration_ms)?;
        Ok(())
    }

    /// Swaps the easing used by subsequent snaps. An animation in flight keeps its easing.
    pub fn set_easing(&mut self, preset: EasingPreset) {
        self.easing_preset = preset;
        self.easing = preset.function();
    }

    pub fn hide_scrollbar(&mut self) {
        self.viewport.set_scrollbar_hidden(true);
    }

    pub fn show_scrollbar(&mut self) {
        self.viewport.set_scrollbar_hidden(false);
    }

    /// Attaches the scroll listener and snaps to the first section.
    ///
    /// Returns the completion of that initial snap. Fails with
    /// [`SnapError::AlreadyRegistered`] without touching any state if already registered.
    pub fn register(&mut self) -> Result<SnapCompletion, SnapError> {
        if self.is_registered {
            awarn!("SnapController::register: already registered");
            return Err(SnapError::AlreadyRegistered);
        }
        self.is_registered = true;
        adebug!("SnapController::register");
        let initial = self.scroll_to_section_by_index(0, Some(REGISTER_SNAP_DURATION_MS));
        self.viewport.set_scroll_listener(true);
        Ok(initial)
    }

    /// Detaches the scroll listener. After this, scrolling is left alone.
    ///
    /// Fails with [`SnapError::NotRegistered`] if not registered. An animation already in
    /// flight still runs to completion.
    pub fn unregister(&mut self) -> Result<(), SnapError> {
        if !self.is_registered {
            awarn!("SnapController::unregister: not registered");
            return Err(SnapError::NotRegistered);
        }
        self.viewport.set_scroll_listener(false);
        self.is_registered = false;
        adebug!("SnapController::unregister");
        Ok(())
    }

    fn sample(&self) -> ScrollSample {
        ScrollSample::new(
            self.viewport.scroll_offset(),
            self.viewport.viewport_height(),
        )
    }

    /// Handles one scroll notification from the viewport.
    ///
    /// Returns the completion of the snap it started, if any.
    pub fn on_scroll(&mut self) -> Option<SnapCompletion> {
        if !self.is_registered || self.lock.is_engaged() {
            return None;
        }

        let sample = self.sample();
        let direction = self.detector.sample(sample.offset);

        let current = self.sections.get(self.tracker.current_index())?.rect();
        let target = self.tracker.next_target(sample, current, direction)?;
        Some(self.scroll_to_section_by_index(target, None))
    }

    /// Snaps to the section at `index` over `duration_ms` (or the configured snap duration).
    ///
    /// Out-of-range indexes settle immediately as [`SnapOutcome::OutOfRange`] without firing
    /// callbacks. Otherwise `before_snap` fires with the section being left, the animation starts,
    /// and `after_snap` fires once it completes.
    ///
    /// Calling this while another snap is in flight supersedes the older one.
    pub fn scroll_to_section_by_index(
        &mut self,
        index: usize,
        duration_ms: Option<f64>,
    ) -> SnapCompletion {
        if !self.tracker.contains(index) {
            adebug!(
                index,
                sections = self.sections.len(),
                "scroll_to_section_by_index: out of range"
            );
            return SnapCompletion::settled(SnapOutcome::OutOfRange);
        }

        let from_index = self.tracker.current_index();
        if let (Some(cb), Some(section)) =
            (&self.options.before_snap, self.sections.get(from_index))
        {
            cb(from_index, section);
        }

        self.tracker.set_current(index);

        let target = self.sections[index].rect();
        let sample = self.sample();
        let destination = SectionTracker::destination(self.detector.direction(), target, sample);
        self.detector.record(destination);

        let duration_ms = duration_ms.unwrap_or(self.snap_duration_ms);
        adebug!(
            from = from_index,
            to = index,
            offset = sample.offset,
            destination,
            duration_ms,
            "scroll_to_section_by_index"
        );
        self.start_animation(destination, duration_ms, index)
    }

    fn start_animation(
        &mut self,
        destination: f64,
        duration_ms: f64,
        target_index: usize,
    ) -> SnapCompletion {
        if let Some(prev) = self.in_flight.take() {
            awarn!(
                prev_target = prev.target_index,
                next_target = target_index,
                "snap superseded while in flight"
            );
            prev.resolver.resolve(SnapOutcome::Superseded);
        }

        self.lock.engage(&mut self.viewport);

        let animation = ScrollAnimation::new(
            self.viewport.scroll_offset(),
            destination,
            self.viewport.now_ms(),
            duration_ms,
            self.easing,
        );
        let (completion, resolver) = SnapCompletion::pending();
        self.in_flight = Some(InFlight {
            animation,
            target_index,
            resolver,
        });
        self.viewport.request_frame();
        completion
    }

    /// Advances the running snap to `timestamp_ms`.
    ///
    /// - While the animation runs, writes the eased offset, requests the next frame, and returns
    ///   the applied offset.
    /// - On the final frame, corrects any residual so the viewport sits exactly on the
    ///   destination, releases the lock, resolves the completion, then fires `after_snap`.
    /// - Returns `None` if no snap is in flight.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Option<f64> {
        let animation = self.in_flight.as_ref()?.animation;

        let offset = animation.sample(timestamp_ms);
        self.viewport.set_scroll_offset(offset);
        atrace!(timestamp_ms, offset, "SnapController::on_frame");

        if !animation.is_done(timestamp_ms) {
            self.viewport.request_frame();
            return Some(self.viewport.scroll_offset());
        }

        let residual = animation.residual(self.viewport.scroll_offset());
        if residual != 0.0 {
            atrace!(residual, "SnapController::on_frame: correcting drift");
            self.viewport.scroll_by(residual);
        }

        let flight = self.in_flight.take()?;
        self.lock.release(&mut self.viewport);
        flight.resolver.resolve(SnapOutcome::Snapped {
            index: flight.target_index,
        });

        if let (Some(cb), Some(section)) = (
            &self.options.after_snap,
            self.sections.get(flight.target_index),
        ) {
            cb(flight.target_index, section);
        }

        Some(self.viewport.scroll_offset())
    }
}

impl<V: core::fmt::Debug, C: Container> core::fmt::Debug for SnapController<V, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SnapController")
            .field("viewport", &self.viewport)
            .field("options", &self.options)
            .field("sections", &self.sections.len())
            .field("tracker", &self.tracker)
            .field("detector", &self.detector)
            .field("lock", &self.lock)
            .field("snap_duration_ms", &self.snap_duration_ms)
            .field("easing", &self.easing_preset)
            .field("is_registered", &self.is_registered)
            .field("is_animating", &self.in_flight.is_some())
            .finish()
    }
}
