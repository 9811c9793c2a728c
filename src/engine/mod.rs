//! The native engine, seen as an opaque collaborator with four entry points.
//!
//! Nothing here talks to the engine directly: calls are queued and executed by the
//! render thread (see [`crate::render`]), which is the only owner of a [`NativeEngine`].

#[cfg(feature = "native")]
mod ffi;
mod logging;

use std::{
    ffi::{CString, c_void},
    path::Path,
    ptr,
};

#[cfg(feature = "native")]
pub use ffi::FfiEngine;
pub use logging::LoggingEngine;

use crate::{error::Result, input::PointerKind};

#[cfg(feature = "native")]
pub type DefaultEngine = FfiEngine;
#[cfg(not(feature = "native"))]
pub type DefaultEngine = LoggingEngine;

pub trait NativeEngine {
    /// One-time setup, called before anything else.
    fn init(&mut self, config: &EngineConfig);

    fn on_resize(&mut self, width: i32, height: i32);

    fn process_pointer_input(&mut self, kind: PointerKind, pointer_id: i32, x: i32, y: i32);

    /// Advances and renders one frame.
    fn step(&mut self);
}

/// Native `AAssetManager*`, null when running outside Android.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetManagerPtr(*mut c_void);

// The asset manager is owned by the activity and outlives the render thread.
unsafe impl Send for AssetManagerPtr {}

impl AssetManagerPtr {
    pub fn null() -> Self {
        Self(ptr::null_mut())
    }

    pub fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    pub fn as_raw(&self) -> *mut c_void {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

/// Arguments of the engine `init` call.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub assets: AssetManagerPtr,
    /// Screen density in dots per inch
    pub density: f32,
    pub width: i32,
    pub height: i32,
    storage_path: CString,
}

impl EngineConfig {
    /// Fails if `storage_path` can't cross the C boundary (interior nul byte).
    pub fn new(
        assets: AssetManagerPtr,
        density: f32,
        width: i32,
        height: i32,
        storage_path: &Path,
    ) -> Result<Self> {
        let storage_path = CString::new(storage_path.to_string_lossy().into_owned())?;
        Ok(Self {
            assets,
            density,
            width,
            height,
            storage_path,
        })
    }

    pub fn storage_path(&self) -> &CString {
        &self.storage_path
    }
}
