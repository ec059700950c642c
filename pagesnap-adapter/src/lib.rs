//! Viewport-driven wiring for the `pagesnap` crate.
//!
//! The `pagesnap` crate is UI-agnostic and holds the snapping math and state. This crate connects
//! it to a host through small capabilities:
//!
//! - [`Viewport`]: scroll offset/height, a frame clock, and listener/suppression toggles
//! - [`Section`] / [`Container`]: live section geometry, derived once per configuration
//! - [`SnapController`]: scroll lock, eased frame loop, lifecycle, and `before`/`after` hooks
//!
//! [`SimViewport`] is a deterministic fake-clock viewport for tests and headless hosts.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod completion;
mod controller;
mod lock;
mod options;
mod section;
mod sim;
mod viewport;


pub use completion::{SnapCompletion, SnapOutcome};
pub use controller::{REGISTER_SNAP_DURATION_MS, SnapController};
pub use lock::ScrollLock;
pub use options::{DEFAULT_SNAP_DURATION_MS, SnapCallback, SnapOptions};
pub use section::{Container, Section};
pub use sim::{SimViewport, drive_frames};
pub use viewport::Viewport;

pub use pagesnap::{EasingPreset, ScrollDirection, SectionRect, SnapError, SnapState};
