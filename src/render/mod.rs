//! Render-thread side of the bridge.
//!
//! Every engine call is wrapped in a [`RenderTask`] and pushed through a
//! [`RenderQueue`]. The single consumer, [`RenderLoop`], runs queued tasks in FIFO
//! order right before each frame `step`, so input queued before a frame is always
//! visible to that frame. [`RenderThread`] runs the loop on its own thread.
//!
//! ```text
//! event thread ──push──► mpsc ──► RenderLoop::run_frame
//!                                   ├─ Init / Resize / Pointer / Suspend / Resume (in order)
//!                                   └─ step()   (initialized and not suspended)
//! ```

mod queue;
mod render_loop;
mod thread;

#[cfg(test)]
pub(crate) mod recording;

pub use queue::RenderQueue;
pub use render_loop::{LoopControl, RenderLoop};
pub use thread::RenderThread;

use crate::{engine::EngineConfig, input::InputCommand};

#[derive(Debug)]
pub enum RenderTask {
    Init(EngineConfig),
    Resize { width: i32, height: i32 },
    Pointer(InputCommand),
    /// Surface lost or activity paused, stop stepping.
    Suspend,
    Resume,
    Shutdown,
}
