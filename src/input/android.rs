use winit::platform::android::activity::input::{MotionAction, MotionEvent};

use super::{TouchAction, TouchEvent};

impl From<MotionAction> for TouchAction {
    fn from(action: MotionAction) -> Self {
        match action {
            MotionAction::Down => Self::Down,
            MotionAction::Move => Self::Move,
            MotionAction::Up => Self::Up,
            MotionAction::Cancel => Self::Cancel,
            MotionAction::PointerDown => Self::PointerDown,
            MotionAction::PointerUp => Self::PointerUp,
            _ => Self::Other,
        }
    }
}

impl TouchEvent for MotionEvent<'_> {
    fn action(&self) -> TouchAction {
        MotionEvent::action(self).into()
    }

    fn action_index(&self) -> usize {
        self.pointer_index()
    }

    fn pointer_count(&self) -> usize {
        MotionEvent::pointer_count(self)
    }

    fn pointer_id(&self, slot: usize) -> i32 {
        self.pointer_at_index(slot).pointer_id()
    }

    fn x(&self, slot: usize) -> f32 {
        self.pointer_at_index(slot).x()
    }

    fn y(&self, slot: usize) -> f32 {
        self.pointer_at_index(slot).y()
    }
}
