use crate::ScrollDirection;

/// A lightweight, serializable snapshot of the snapping engine's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapState {
    pub is_registered: bool,
    pub scroll_locked: bool,
    pub last_known_offset: f64,
    pub current_index: usize,
    pub direction: ScrollDirection,
}
