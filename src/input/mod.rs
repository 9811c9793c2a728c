//! Touch events as seen by the bridge, and their translation into engine commands.
//!
//! Platform events (Android `MotionEvent`, desktop snapshots) are read through the
//! [`TouchEvent`] trait so the normalizer never depends on a platform crate.

#[cfg(target_os = "android")]
mod android;
mod command;
mod normalizer;
mod snapshot;
mod tracker;

pub use command::{InputCommand, PointerKind};
pub use normalizer::{dispatch_touch, resolve_pointer_id};
pub use snapshot::{TouchPointer, TouchSnapshot};
pub use tracker::{FingerId, TouchTracker};

/// Number of concurrent pointers the native engine keeps track of.
pub const MAX_TRACKED_POINTERS: i32 = 5;

/// Masked action of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
    PointerDown,
    PointerUp,
    /// Hover, scroll, outside, button press/release...
    Other,
}

/// Read-only view over one multi-touch event.
///
/// Slots are positions in the event's pointer array (`0..pointer_count()`), every
/// accessor taking a `slot` may assume it is in range.
pub trait TouchEvent {
    fn action(&self) -> TouchAction;

    /// Slot of the pointer whose state change triggered this event.
    fn action_index(&self) -> usize;

    fn pointer_count(&self) -> usize;

    /// Platform-assigned pointer id of the pointer in `slot`.
    fn pointer_id(&self, slot: usize) -> i32;

    fn x(&self, slot: usize) -> f32;

    fn y(&self, slot: usize) -> f32;
}
