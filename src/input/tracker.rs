//! Rebuilds Android-style multi-touch events out of per-finger updates.
//!
//! winit reports each finger on its own, while the engine side expects events in the
//! `MotionEvent` shape: every active pointer in slot order, pointer ids being the
//! lowest free id at press time and surviving other fingers lifting.

use super::{TouchAction, TouchPointer, TouchSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerId {
    /// winit touch id
    Touch(u64),
    /// Left mouse button, emulating one finger
    Mouse,
}

#[derive(Debug, Default)]
pub struct TouchTracker {
    fingers: Vec<(FingerId, TouchPointer)>,
}

impl TouchTracker {
    pub fn active_count(&self) -> usize {
        self.fingers.len()
    }

    pub fn is_down(&self, finger: FingerId) -> bool {
        self.slot_of(finger).is_some()
    }

    pub fn press(&mut self, finger: FingerId, x: f32, y: f32) -> Option<TouchSnapshot> {
        if self.is_down(finger) {
            return None;
        }

        let action = if self.fingers.is_empty() {
            TouchAction::Down
        } else {
            TouchAction::PointerDown
        };
        let id = self.lowest_free_id();
        self.fingers.push((finger, TouchPointer::new(id, x, y)));

        self.snapshot(action, self.fingers.len() - 1)
    }

    pub fn move_to(&mut self, finger: FingerId, x: f32, y: f32) -> Option<TouchSnapshot> {
        let slot = self.slot_of(finger)?;
        let pointer = &mut self.fingers[slot].1;
        pointer.x = x;
        pointer.y = y;

        self.snapshot(TouchAction::Move, slot)
    }

    /// The released finger is still part of the returned event, like on Android.
    pub fn release(&mut self, finger: FingerId, x: f32, y: f32) -> Option<TouchSnapshot> {
        let slot = self.slot_of(finger)?;
        let pointer = &mut self.fingers[slot].1;
        pointer.x = x;
        pointer.y = y;

        let action = if self.fingers.len() == 1 {
            TouchAction::Up
        } else {
            TouchAction::PointerUp
        };
        let snapshot = self.snapshot(action, slot);
        self.fingers.remove(slot);

        snapshot
    }

    pub fn cancel(&mut self, finger: FingerId) -> Option<TouchSnapshot> {
        let slot = self.slot_of(finger)?;
        let snapshot = self.snapshot(TouchAction::Cancel, slot);
        self.fingers.remove(slot);

        snapshot
    }

    fn slot_of(&self, finger: FingerId) -> Option<usize> {
        self.fingers.iter().position(|(f, _)| *f == finger)
    }

    fn lowest_free_id(&self) -> i32 {
        (0..)
            .find(|id| self.fingers.iter().all(|(_, p)| p.id != *id))
            .unwrap_or_default()
    }

    fn snapshot(&self, action: TouchAction, action_index: usize) -> Option<TouchSnapshot> {
        TouchSnapshot::new(
            action,
            action_index,
            self.fingers.iter().map(|(_, p)| *p).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        InputCommand, MAX_TRACKED_POINTERS, PointerKind, TouchEvent, dispatch_touch,
    };

    fn ids(snapshot: &TouchSnapshot) -> Vec<i32> {
        snapshot.pointers().iter().map(|p| p.id).collect()
    }

    #[test]
    fn first_finger_is_down_then_pointer_down() {
        let mut tracker = TouchTracker::default();

        let first = tracker.press(FingerId::Touch(7), 1., 2.).unwrap();
        assert_eq!(first.action(), TouchAction::Down);
        assert_eq!(ids(&first), vec![0]);

        let second = tracker.press(FingerId::Touch(9), 3., 4.).unwrap();
        assert_eq!(second.action(), TouchAction::PointerDown);
        assert_eq!(second.action_index(), 1);
        assert_eq!(ids(&second), vec![0, 1]);
    }

    #[test]
    fn pressing_twice_is_ignored() {
        let mut tracker = TouchTracker::default();
        assert!(tracker.press(FingerId::Mouse, 0., 0.).is_some());
        assert!(tracker.press(FingerId::Mouse, 0., 0.).is_none());
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn unknown_finger_produces_nothing() {
        let mut tracker = TouchTracker::default();
        assert!(tracker.move_to(FingerId::Touch(1), 0., 0.).is_none());
        assert!(tracker.release(FingerId::Touch(1), 0., 0.).is_none());
        assert!(tracker.cancel(FingerId::Touch(1)).is_none());
    }

    #[test]
    fn lifting_middle_finger_keeps_remaining_ids() {
        let mut tracker = TouchTracker::default();
        for f in 0..3 {
            tracker.press(FingerId::Touch(f), f as f32, 0.);
        }

        let up = tracker.release(FingerId::Touch(1), 1., 0.).unwrap();
        assert_eq!(up.action(), TouchAction::PointerUp);
        assert_eq!(up.action_index(), 1);
        assert_eq!(ids(&up), vec![0, 1, 2]);

        let moved = tracker.move_to(FingerId::Touch(2), 50., 60.).unwrap();
        assert_eq!(ids(&moved), vec![0, 2]);
        assert_eq!(moved.action_index(), 1);

        // Freed id is reused by the next finger, appended as last slot.
        let down = tracker.press(FingerId::Touch(3), 0., 0.).unwrap();
        assert_eq!(ids(&down), vec![0, 2, 1]);
        assert_eq!(down.action_index(), 2);
    }

    #[test]
    fn compacted_gesture_forwards_platform_id() {
        let mut tracker = TouchTracker::default();
        for f in 0..3 {
            tracker.press(FingerId::Touch(f), 0., 0.);
        }
        tracker.release(FingerId::Touch(1), 0., 0.);

        let moved = tracker.move_to(FingerId::Touch(2), 50.5, 60.5).unwrap();
        assert_eq!(
            dispatch_touch(&moved, MAX_TRACKED_POINTERS),
            Some(InputCommand {
                kind: PointerKind::Moved,
                pointer_id: 2,
                x: 50,
                y: 60,
            })
        );
    }

    #[test]
    fn each_finger_is_pressed_and_raised_with_one_id() {
        let mut tracker = TouchTracker::default();
        let mut forwarded = Vec::new();
        for f in 0..3 {
            let snapshot = tracker.press(FingerId::Touch(f), 0., 0.).unwrap();
            forwarded.push((f, dispatch_touch(&snapshot, MAX_TRACKED_POINTERS).unwrap()));
        }
        for f in [1, 2, 0] {
            let snapshot = tracker.release(FingerId::Touch(f), 0., 0.).unwrap();
            forwarded.push((f, dispatch_touch(&snapshot, MAX_TRACKED_POINTERS).unwrap()));
        }

        for f in 0..3 {
            let ids: Vec<_> = forwarded
                .iter()
                .filter(|(finger, _)| *finger == f)
                .map(|(_, cmd)| (cmd.kind, cmd.pointer_id))
                .collect();
            assert_eq!(
                ids,
                vec![
                    (PointerKind::Pressed, f as i32),
                    (PointerKind::Raised, f as i32)
                ],
                "finger {f}"
            );
        }
    }

    #[test]
    fn last_release_is_up() {
        let mut tracker = TouchTracker::default();
        tracker.press(FingerId::Mouse, 0., 0.);
        let up = tracker.release(FingerId::Mouse, 10., 10.).unwrap();
        assert_eq!(up.action(), TouchAction::Up);
        assert_eq!(up.pointers(), [TouchPointer::new(0, 10., 10.)]);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn cancel_forgets_finger() {
        let mut tracker = TouchTracker::default();
        tracker.press(FingerId::Touch(4), 0., 0.);
        let cancel = tracker.cancel(FingerId::Touch(4)).unwrap();
        assert_eq!(cancel.action(), TouchAction::Cancel);
        assert!(!tracker.is_down(FingerId::Touch(4)));
    }
}
