//! A headless section scroll-snapping engine.
//!
//! For viewport-driven wiring (scroll lock, frame loop, lifecycle), see the `pagesnap-adapter`
//! crate.
//!
//! This crate holds the parts of section snapping with real logic in them:
//! - classifying scroll direction with a deadband
//! - deciding when a scroll sample should move to the next/previous section
//! - eased scroll animations sampled by timestamp
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport scroll offset and height
//! - live section geometry (top, height)
//! - a frame clock
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod direction;
mod easing;
mod error;
mod section;
mod state;

#[cfg(test)]
mod tests;

pub use animation::ScrollAnimation;
pub use direction::{DIRECTION_MARGIN, DirectionDetector, ScrollDirection, classify};
pub use easing::{
    EasingFn, EasingPreset, ParseEasingError, ease_in_cubic, ease_in_out_quad, in_out_quintic,
};
pub use error::{SnapError, validate_duration};
pub use section::{BOUNDARY_TOLERANCE, ScrollSample, SectionRect, SectionTracker};
pub use state::SnapState;
