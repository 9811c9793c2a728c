use std::sync::mpsc::Sender;

use super::RenderTask;
use crate::{
    engine::EngineConfig,
    error::{BridgeError, Result},
    input::InputCommand,
};

/// Producer side of the render-thread task queue.
///
/// Cheap to clone, can be used from any thread.
#[derive(Debug, Clone)]
pub struct RenderQueue {
    sender: Sender<RenderTask>,
}

impl RenderQueue {
    pub(super) fn new(sender: Sender<RenderTask>) -> Self {
        Self { sender }
    }

    pub fn push(&self, task: RenderTask) -> Result<()> {
        self.sender
            .send(task)
            .map_err(|_| BridgeError::RenderThreadGone)
    }

    pub fn queue_init(&self, config: EngineConfig) -> Result<()> {
        self.push(RenderTask::Init(config))
    }

    pub fn queue_resize(&self, width: i32, height: i32) -> Result<()> {
        self.push(RenderTask::Resize { width, height })
    }

    pub fn queue_pointer(&self, command: InputCommand) -> Result<()> {
        self.push(RenderTask::Pointer(command))
    }

    pub fn suspend(&self) -> Result<()> {
        self.push(RenderTask::Suspend)
    }

    pub fn resume(&self) -> Result<()> {
        self.push(RenderTask::Resume)
    }

    pub fn shutdown(&self) -> Result<()> {
        self.push(RenderTask::Shutdown)
    }
}
