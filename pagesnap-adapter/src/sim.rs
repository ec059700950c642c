use crate::{Container, SnapController, Viewport};

/// A deterministic, clock-driven [`Viewport`] for tests, demos and headless hosts.
///
/// Nothing happens on its own: the caller advances `now_ms`, delivers frames with
/// [`drive_frames`] (or by hand via [`Self::take_frame_request`]), and calls `on_scroll` to
/// simulate user scrolling.
#[derive(Clone, Debug, PartialEq)]
pub struct SimViewport {
    pub offset: f64,
    pub height: f64,
    pub now_ms: f64,
    /// Largest reachable offset, if the document height is known.
    pub max_offset: Option<f64>,
    /// Round every written offset to whole pixels, like a browser's `scrollTop`.
    pub round_offsets: bool,
    pub frame_requested: bool,
    pub scroll_listener_attached: bool,
    pub input_suppressed: bool,
    pub scrollbar_hidden: bool,
    /// Number of times the scroll listener went from detached to attached.
    pub listener_attach_count: usize,
    /// Number of writes through `set_scroll_offset` (including `scroll_by`).
    pub writes: usize,
}

impl SimViewport {
    pub fn new(height: f64) -> Self {
        Self {
            offset: 0.0,
            height,
            now_ms: 0.0,
            max_offset: None,
            round_offsets: false,
            frame_requested: false,
            scroll_listener_attached: false,
            input_suppressed: false,
            scrollbar_hidden: false,
            listener_attach_count: 0,
            writes: 0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_max_offset(mut self, max_offset: Option<f64>) -> Self {
        self.max_offset = max_offset;
        self
    }

    pub fn with_round_offsets(mut self, round_offsets: bool) -> Self {
        self.round_offsets = round_offsets;
        self
    }

    /// Consumes a pending frame request.
    pub fn take_frame_request(&mut self) -> bool {
        core::mem::take(&mut self.frame_requested)
    }

    /// Moves the offset as user scrolling would, bypassing the engine.
    pub fn user_scroll_to(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }

    fn clamp(&self, offset: f64) -> f64 {
        let offset = if self.round_offsets {
            round_half_up(offset)
        } else {
            offset
        };
        let offset = offset.max(0.0);
        match self.max_offset {
            Some(max) => offset.min(max),
            None => offset,
        }
    }
}

// `f64::round` needs std.
fn round_half_up(v: f64) -> f64 {
    let t = v as i64 as f64;
    if v - t >= 0.5 {
        t + 1.0
    } else if v - t <= -0.5 {
        t - 1.0
    } else {
        t
    }
}

impl Viewport for SimViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.writes += 1;
        self.offset = self.clamp(offset);
    }

    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn set_scroll_listener(&mut self, attached: bool) {
        if attached && !self.scroll_listener_attached {
            self.listener_attach_count += 1;
        }
        self.scroll_listener_attached = attached;
    }

    fn set_input_suppressed(&mut self, suppressed: bool) {
        self.input_suppressed = suppressed;
    }

    fn set_scrollbar_hidden(&mut self, hidden: bool) {
        self.scrollbar_hidden = hidden;
    }
}

/// Delivers requested frames every `frame_ms` until the controller stops asking.
///
/// Returns the number of frames delivered. Each frame advances the viewport clock first.
pub fn drive_frames<C: Container>(c: &mut SnapController<SimViewport, C>, frame_ms: f64) -> usize {
    let mut frames = 0usize;
    while c.viewport_mut().take_frame_request() {
        let vp = c.viewport_mut();
        vp.now_ms += frame_ms;
        let now_ms = vp.now_ms;
        c.on_frame(now_ms);
        frames += 1;
    }
    frames
}
