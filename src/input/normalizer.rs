use log::trace;

use super::{InputCommand, PointerKind, TouchEvent};

/// Maps the platform pointer id of a pointer to an id consistent with slot order.
///
/// Android keeps pointer ids alive when other pointers lift, so once a finger in the
/// middle of a gesture is released the remaining ids no longer match their slot
/// positions. The first slot holding `pointer_id` at a different position is the
/// corrected id; without one the id is returned unchanged.
pub fn resolve_pointer_id<T: TouchEvent + ?Sized>(event: &T, pointer_id: i32) -> i32 {
    // pointer_id - (assigned - slot) with assigned == pointer_id is the slot itself.
    (0..event.pointer_count())
        .map(|slot| (slot as i32, event.pointer_id(slot)))
        .find(|&(slot, assigned)| assigned == pointer_id && slot != assigned)
        .map_or(pointer_id, |(slot, _)| slot)
}

/// Turns a touch event into the command forwarded to the engine.
///
/// The command carries the platform pointer id, which stays the same for a finger
/// from press to release. The resolved id only gates the engine capacity.
///
/// Returns `None` when either id falls outside `0..capacity` or when the action is
/// not a press, move or release. Either way the event counts as handled for the
/// platform.
pub fn dispatch_touch<T: TouchEvent + ?Sized>(event: &T, capacity: i32) -> Option<InputCommand> {
    let action_index = event.action_index();
    let pointer_id = event.pointer_id(action_index);
    let resolved_id = resolve_pointer_id(event, pointer_id);

    let tracked = 0..capacity;
    if !tracked.contains(&resolved_id) || !tracked.contains(&pointer_id) {
        trace!("dropping pointer {pointer_id} (resolved to {resolved_id}), engine tracks {capacity}");
        return None;
    }

    // Coordinates are read from the action slot, neither id is a slot.
    let x = event.x(action_index) as i32;
    let y = event.y(action_index) as i32;

    let Some(kind) = PointerKind::from_action(event.action()) else {
        trace!("ignoring touch action {:?}", event.action());
        return None;
    };

    Some(InputCommand {
        kind,
        pointer_id,
        x,
        y,
    })
}
