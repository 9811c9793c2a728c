use std::{
    collections::VecDeque,
    sync::mpsc::{Receiver, TryRecvError, channel},
};

use log::debug;

use super::{RenderQueue, RenderTask};
use crate::engine::NativeEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Single consumer of the render queue, sole owner of the engine.
#[derive(Debug)]
pub struct RenderLoop<E> {
    engine: E,
    tasks: Receiver<RenderTask>,
    /// Resizes and pointer input received before `init`, replayed right after it.
    pending: VecDeque<RenderTask>,
    initialized: bool,
    suspended: bool,
}

impl<E: NativeEngine> RenderLoop<E> {
    pub fn new(engine: E) -> (Self, RenderQueue) {
        let (sender, tasks) = channel();
        let render_loop = Self {
            engine,
            tasks,
            pending: VecDeque::new(),
            initialized: false,
            suspended: false,
        };
        (render_loop, RenderQueue::new(sender))
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether `run_frame` would step the engine.
    pub fn wants_frames(&self) -> bool {
        self.initialized && !self.suspended
    }

    /// Runs every queued task in order, then steps the engine once if it can render.
    pub fn run_frame(&mut self) -> LoopControl {
        loop {
            match self.tasks.try_recv() {
                Ok(task) => {
                    if self.execute(task) == LoopControl::Exit {
                        return LoopControl::Exit;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("render queue disconnected");
                    return LoopControl::Exit;
                }
            }
        }

        if self.wants_frames() {
            self.engine.step();
        }
        LoopControl::Continue
    }

    /// Blocks until one task arrives and runs it, without stepping.
    pub fn wait_for_task(&mut self) -> LoopControl {
        match self.tasks.recv() {
            Ok(task) => self.execute(task),
            Err(_) => {
                debug!("render queue disconnected");
                LoopControl::Exit
            }
        }
    }

    fn execute(&mut self, task: RenderTask) -> LoopControl {
        match task {
            RenderTask::Init(config) => {
                if self.initialized {
                    debug!("engine already initialized, ignoring init");
                } else {
                    self.engine.init(&config);
                    self.initialized = true;
                    self.replay_pending();
                }
            }
            task @ (RenderTask::Resize { .. } | RenderTask::Pointer(_)) if !self.initialized => {
                debug!("holding {task:?} until engine init");
                self.pending.push_back(task);
            }
            RenderTask::Resize { width, height } => self.engine.on_resize(width, height),
            RenderTask::Pointer(command) => self.engine.process_pointer_input(
                command.kind,
                command.pointer_id,
                command.x,
                command.y,
            ),
            RenderTask::Suspend => self.suspended = true,
            RenderTask::Resume => self.suspended = false,
            RenderTask::Shutdown => return LoopControl::Exit,
        }
        LoopControl::Continue
    }

    fn replay_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!("replaying {} tasks held before init", self.pending.len());
        }
        while let Some(task) = self.pending.pop_front() {
            self.execute(task);
        }
    }
}
