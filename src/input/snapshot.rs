use super::{TouchAction, TouchEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPointer {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl TouchPointer {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Owned touch event, slot order is the order of `pointers`.
///
/// Built by the desktop [`TouchTracker`](super::TouchTracker) and handy to describe
/// Android events in tests. The action slot always points at one of the pointers.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSnapshot {
    action: TouchAction,
    action_index: usize,
    pointers: Vec<TouchPointer>,
}

impl TouchSnapshot {
    /// `None` if `action_index` is not a slot of `pointers`.
    pub fn new(
        action: TouchAction,
        action_index: usize,
        pointers: Vec<TouchPointer>,
    ) -> Option<Self> {
        (action_index < pointers.len()).then_some(Self {
            action,
            action_index,
            pointers,
        })
    }

    pub fn pointers(&self) -> &[TouchPointer] {
        &self.pointers
    }
}

impl TouchEvent for TouchSnapshot {
    fn action(&self) -> TouchAction {
        self.action
    }

    fn action_index(&self) -> usize {
        self.action_index
    }

    fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    fn pointer_id(&self, slot: usize) -> i32 {
        self.pointers[slot].id
    }

    fn x(&self, slot: usize) -> f32 {
        self.pointers[slot].x
    }

    fn y(&self, slot: usize) -> f32 {
        self.pointers[slot].y
    }
}
