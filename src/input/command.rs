use super::TouchAction;

/// Pointer state change understood by `processPointerInput`.
///
/// Discriminants are the integer codes expected on the native side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PointerKind {
    Pressed = 1,
    Raised = 2,
    Moved = 3,
}

impl PointerKind {
    pub fn from_action(action: TouchAction) -> Option<Self> {
        match action {
            TouchAction::Down | TouchAction::PointerDown => Some(Self::Pressed),
            TouchAction::Move => Some(Self::Moved),
            TouchAction::Up | TouchAction::PointerUp | TouchAction::Cancel => Some(Self::Raised),
            TouchAction::Other => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// One touch event, resolved and ready for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCommand {
    pub kind: PointerKind,
    pub pointer_id: i32,
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_native_constants() {
        assert_eq!(PointerKind::Pressed.code(), 1);
        assert_eq!(PointerKind::Raised.code(), 2);
        assert_eq!(PointerKind::Moved.code(), 3);
    }

    #[test]
    fn actions_are_classified() {
        use TouchAction::*;

        assert_eq!(PointerKind::from_action(Down), Some(PointerKind::Pressed));
        assert_eq!(PointerKind::from_action(PointerDown), Some(PointerKind::Pressed));
        assert_eq!(PointerKind::from_action(Move), Some(PointerKind::Moved));
        assert_eq!(PointerKind::from_action(Up), Some(PointerKind::Raised));
        assert_eq!(PointerKind::from_action(PointerUp), Some(PointerKind::Raised));
        assert_eq!(PointerKind::from_action(Cancel), Some(PointerKind::Raised));
        assert_eq!(PointerKind::from_action(Other), None);
    }
}
