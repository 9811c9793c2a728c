use crate::{
    engine::{EngineConfig, NativeEngine},
    input::{InputCommand, PointerKind},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Init { width: i32, height: i32 },
    Resize { width: i32, height: i32 },
    Pointer(InputCommand),
    Step,
}

/// Engine double keeping every call in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingEngine {
    pub(crate) calls: Vec<Call>,
}

impl RecordingEngine {
    pub(crate) fn steps(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Step).count()
    }
}

impl NativeEngine for RecordingEngine {
    fn init(&mut self, config: &EngineConfig) {
        self.calls.push(Call::Init {
            width: config.width,
            height: config.height,
        });
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        self.calls.push(Call::Resize { width, height });
    }

    fn process_pointer_input(&mut self, kind: PointerKind, pointer_id: i32, x: i32, y: i32) {
        self.calls.push(Call::Pointer(InputCommand {
            kind,
            pointer_id,
            x,
            y,
        }));
    }

    fn step(&mut self) {
        self.calls.push(Call::Step);
    }
}
