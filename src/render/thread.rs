use std::{
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, error};

use super::{LoopControl, RenderLoop, RenderQueue};
use crate::{engine::NativeEngine, error::Result};

/// Render loop running on its own thread.
///
/// The thread blocks on the queue while there is nothing to render, and otherwise
/// paces itself at one frame per `frame_interval`. Dropping the handle asks the
/// thread to quit and joins it.
pub struct RenderThread<E: NativeEngine + Send + 'static> {
    queue: RenderQueue,
    handle: Option<JoinHandle<E>>,
}

impl<E: NativeEngine + Send + 'static> RenderThread<E> {
    pub fn spawn(engine: E, frame_interval: Duration) -> Result<Self> {
        let (render_loop, queue) = RenderLoop::new(engine);
        let handle = thread::Builder::new()
            .name("render".to_string())
            .spawn(move || render_main(render_loop, frame_interval))?;

        Ok(Self {
            queue,
            handle: Some(handle),
        })
    }

    pub fn queue(&self) -> &RenderQueue {
        &self.queue
    }

    /// Stops the thread once the tasks already queued have run, and gives the
    /// engine back. `None` if the render thread panicked.
    pub fn join(mut self) -> Option<E> {
        self.stop()
    }

    fn stop(&mut self) -> Option<E> {
        let handle = self.handle.take()?;
        // Returns Err() if the thread is already gone, join reports why.
        let _ = self.queue.shutdown();
        match handle.join() {
            Ok(engine) => Some(engine),
            Err(_) => {
                error!("render thread panicked");
                None
            }
        }
    }
}

impl<E: NativeEngine + Send + 'static> Drop for RenderThread<E> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

fn render_main<E: NativeEngine>(mut render_loop: RenderLoop<E>, frame_interval: Duration) -> E {
    debug!("render thread started, frame interval {frame_interval:?}");

    loop {
        let frame_start = Instant::now();
        let control = if render_loop.wants_frames() {
            render_loop.run_frame()
        } else {
            render_loop.wait_for_task()
        };
        if control == LoopControl::Exit {
            break;
        }

        if render_loop.wants_frames() {
            thread::sleep(frame_interval.saturating_sub(frame_start.elapsed()));
        }
    }

    debug!("render thread exiting");
    render_loop.into_engine()
}
