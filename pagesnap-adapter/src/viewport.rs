/// The host's scrollable viewport, as seen by the snap controller.
///
/// This is the only window into the rendering surface. For a browser adapter it maps onto
/// `window.scrollY` / `innerHeight` / `scrollTo`, `requestAnimationFrame`, `performance.now()` and
/// a few event listeners. Tests use [`crate::SimViewport`].
///
/// Notifications flow the other way through plain calls: once `set_scroll_listener(true)` is
/// requested, the host calls [`crate::SnapController::on_scroll`] on every scroll event; after
/// `request_frame`, it calls [`crate::SnapController::on_frame`] once on the next display refresh.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Visible height of the viewport.
    fn viewport_height(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    /// Scrolls by a relative amount.
    fn scroll_by(&mut self, delta: f64) {
        let offset = self.scroll_offset();
        self.set_scroll_offset(offset + delta);
    }

    /// Monotonic clock in milliseconds, on the same timeline as frame timestamps.
    fn now_ms(&self) -> f64;

    /// Requests a single `on_frame` call on the next display refresh.
    fn request_frame(&mut self);

    /// Attaches (`true`) or detaches (`false`) the scroll notification.
    fn set_scroll_listener(&mut self, attached: bool);

    /// Suppresses (`true`) or restores (`false`) default handling of wheel and touch-start input.
    fn set_input_suppressed(&mut self, suppressed: bool);

    /// Visual-only toggle for the document scrollbar.
    fn set_scrollbar_hidden(&mut self, hidden: bool);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        (**self).set_scroll_offset(offset)
    }

    fn scroll_by(&mut self, delta: f64) {
        (**self).scroll_by(delta)
    }

    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }

    fn request_frame(&mut self) {
        (**self).request_frame()
    }

    fn set_scroll_listener(&mut self, attached: bool) {
        (**self).set_scroll_listener(attached)
    }

    fn set_input_suppressed(&mut self, suppressed: bool) {
        (**self).set_input_suppressed(suppressed)
    }

    fn set_scrollbar_hidden(&mut self, hidden: bool) {
        (**self).set_scrollbar_hidden(hidden)
    }
}
