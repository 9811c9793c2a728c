use std::ffi::{c_char, c_float, c_int, c_void};

use super::{EngineConfig, NativeEngine};
use crate::input::PointerKind;

#[link(name = "native_engine")]
unsafe extern "C" {
    fn native_engine_init(
        asset_manager: *mut c_void,
        density: c_float,
        width: c_int,
        height: c_int,
        storage_path: *const c_char,
    );
    fn native_engine_on_resize(width: c_int, height: c_int);
    fn native_engine_process_pointer_input(kind: c_int, pointer_id: c_int, x: c_int, y: c_int);
    fn native_engine_step();
}

/// Engine backed by the linked `native_engine` library.
///
/// The library keeps global state, only one instance should drive it.
#[derive(Debug, Default)]
pub struct FfiEngine {
    _private: (),
}

impl NativeEngine for FfiEngine {
    fn init(&mut self, config: &EngineConfig) {
        // storage_path is borrowed from `config` for the duration of the call only.
        unsafe {
            native_engine_init(
                config.assets.as_raw(),
                config.density,
                config.width,
                config.height,
                config.storage_path().as_ptr(),
            );
        }
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        unsafe { native_engine_on_resize(width, height) }
    }

    fn process_pointer_input(&mut self, kind: PointerKind, pointer_id: i32, x: i32, y: i32) {
        unsafe { native_engine_process_pointer_input(kind.code(), pointer_id, x, y) }
    }

    fn step(&mut self) {
        unsafe { native_engine_step() }
    }
}
