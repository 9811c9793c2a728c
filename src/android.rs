//! Android side: drives `android-activity` from `android_main`.
//!
//! The `android_main` thread plays the part of the UI thread: it polls lifecycle
//! events and motion events, and only ever talks to the engine through the render
//! queue.

use std::env;

use log::{debug, error, info, warn};
use winit::platform::android::activity::{
    AndroidApp, InputStatus, MainEvent, PollEvent, input::InputEvent,
};

use crate::{
    engine::{AssetManagerPtr, DefaultEngine, EngineConfig},
    error::Result,
    input::{TouchEvent, dispatch_touch},
    render::{RenderQueue, RenderThread},
    settings::Settings,
};

/// Android reports density buckets relative to this dpi.
const DEFAULT_DENSITY_DPI: u32 = 160;

struct AndroidShim {
    app: AndroidApp,
    queue: RenderQueue,
    settings: Settings,
    engine_initialized: bool,
    has_window: bool,
    paused: bool,
    destroyed: bool,
}

pub fn run(app: AndroidApp, settings: Settings) -> Result<()> {
    let render = RenderThread::spawn(DefaultEngine::default(), settings.frame_interval)?;
    let mut shim = AndroidShim {
        app: app.clone(),
        queue: render.queue().clone(),
        settings,
        engine_initialized: false,
        has_window: false,
        paused: false,
        destroyed: false,
    };

    while !shim.destroyed {
        app.poll_events(None, |event| {
            if let PollEvent::Main(main_event) = event {
                shim.on_main_event(main_event);
            }
        });
        shim.process_input();
    }

    info!("activity destroyed, stopping render thread");
    drop(render);
    Ok(())
}

impl AndroidShim {
    fn on_main_event(&mut self, event: MainEvent<'_>) {
        let result = match event {
            MainEvent::InitWindow { .. } => self.window_ready(),
            MainEvent::TerminateWindow { .. } => {
                self.has_window = false;
                self.sync_activity()
            }
            MainEvent::WindowResized { .. } | MainEvent::ConfigChanged { .. } => self.resize(),
            MainEvent::Pause => {
                self.paused = true;
                self.sync_activity()
            }
            MainEvent::Resume { .. } => {
                self.paused = false;
                self.sync_activity()
            }
            MainEvent::Destroy => {
                self.destroyed = true;
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            error!("lifecycle event not forwarded: {err}");
        }
    }

    fn window_ready(&mut self) -> Result<()> {
        let Some(window) = self.app.native_window() else {
            warn!("InitWindow without a native window");
            return Ok(());
        };

        if self.engine_initialized {
            self.queue.queue_resize(window.width(), window.height())?;
        } else {
            let density = self
                .app
                .config()
                .density()
                .unwrap_or(DEFAULT_DENSITY_DPI);
            let storage_path = self.settings.storage_path_or(|| {
                self.app
                    .internal_data_path()
                    .unwrap_or_else(env::temp_dir)
            });
            let assets = AssetManagerPtr::from_raw(self.app.asset_manager().ptr().as_ptr().cast());
            let config = EngineConfig::new(
                assets,
                density as f32,
                window.width(),
                window.height(),
                &storage_path,
            )?;
            self.queue.queue_init(config)?;
            self.engine_initialized = true;
        }

        self.has_window = true;
        self.sync_activity()
    }

    fn resize(&self) -> Result<()> {
        if !self.engine_initialized {
            return Ok(());
        }
        match self.app.native_window() {
            Some(window) => self.queue.queue_resize(window.width(), window.height()),
            None => Ok(()),
        }
    }

    /// Steps only run with a window and a resumed activity.
    fn sync_activity(&self) -> Result<()> {
        if self.has_window && !self.paused {
            debug!("resuming render thread");
            self.queue.resume()
        } else {
            debug!("suspending render thread");
            self.queue.suspend()
        }
    }

    fn process_input(&self) {
        let mut events = match self.app.input_events_iter() {
            Ok(events) => events,
            Err(err) => {
                warn!("no input events: {err:?}");
                return;
            }
        };

        while events.next(|event| match event {
            InputEvent::MotionEvent(motion) => {
                self.forward_touch(motion);
                // Reported handled even when dropped by the normalizer.
                InputStatus::Handled
            }
            _ => InputStatus::Unhandled,
        }) {}
    }

    fn forward_touch(&self, event: &impl TouchEvent) {
        let Some(command) = dispatch_touch(event, self.settings.max_pointers) else {
            return;
        };
        if let Err(err) = self.queue.queue_pointer(command) {
            error!("could not forward {command:?}: {err}");
        }
    }
}
