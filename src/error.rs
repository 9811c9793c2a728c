use std::{ffi::NulError, io};

use thiserror::Error;
use winit::error::EventLoopError;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The render thread exited (shutdown or panic) and dropped its receiver.
    #[error("render thread is no longer accepting tasks")]
    RenderThreadGone,
    #[error("failed to spawn render thread: {0}")]
    Spawn(#[from] io::Error),
    #[error("storage path cannot be passed to the engine: {0}")]
    StoragePath(#[from] NulError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
