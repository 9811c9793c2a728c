use log::{debug, info, trace};

use super::{EngineConfig, NativeEngine};
use crate::input::PointerKind;

/// Stand-in engine that only logs what it receives.
///
/// Used when no native library is linked (desktop harness, CI).
#[derive(Debug, Default)]
pub struct LoggingEngine {
    frames: u64,
}

impl LoggingEngine {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl NativeEngine for LoggingEngine {
    fn init(&mut self, config: &EngineConfig) {
        info!(
            "engine init: {}x{} @ {} dpi, storage {:?}",
            config.width,
            config.height,
            config.density,
            config.storage_path()
        );
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        debug!("engine resize: {width}x{height}");
    }

    fn process_pointer_input(&mut self, kind: PointerKind, pointer_id: i32, x: i32, y: i32) {
        debug!("engine pointer {pointer_id} {kind:?} at ({x}, {y})");
    }

    fn step(&mut self) {
        self.frames += 1;
        trace!("engine step #{}", self.frames);
    }
}
