//! Desktop harness: a winit window standing in for the Android view.
//!
//! Touch screens and the left mouse button go through the same normalizer as on
//! Android, the engine runs on the render thread.

use std::rc::Rc;

use log::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    engine::{AssetManagerPtr, DefaultEngine, EngineConfig},
    error::Result,
    input::{FingerId, TouchSnapshot, TouchTracker, dispatch_touch},
    render::RenderThread,
    settings::Settings,
};

/// winit reports physical pixels, the engine expects a dpi value.
const BASE_DPI: f64 = 160.;

pub struct App {
    window: Option<Rc<Window>>,
    render: RenderThread<DefaultEngine>,
    settings: Settings,
    tracker: TouchTracker,
    cursor: PhysicalPosition<f64>,
    engine_initialized: bool,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let render = RenderThread::spawn(DefaultEngine::default(), settings.frame_interval)?;

        Ok(Self {
            window: None,
            render,
            settings,
            tracker: Default::default(),
            cursor: Default::default(),
            engine_initialized: false,
        })
    }

    pub fn run(settings: Settings) -> Result<()> {
        let event_loop = EventLoop::new()?;
        // Frames are paced by the render thread, the window only waits for events.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(settings)?;
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    fn surface_ready(&mut self, window: &Window) -> Result<()> {
        let (width, height) = to_engine_size(window.inner_size());
        let queue = self.render.queue();

        if self.engine_initialized {
            queue.resume()?;
            queue.queue_resize(width, height)?;
        } else {
            let storage_path = self.settings.storage_path_or(std::env::temp_dir);
            let config = EngineConfig::new(
                AssetManagerPtr::null(),
                (window.scale_factor() * BASE_DPI) as f32,
                width,
                height,
                &storage_path,
            )?;
            queue.queue_init(config)?;
            self.engine_initialized = true;
        }
        Ok(())
    }

    fn on_touch(&mut self, touch: Touch) {
        let finger = FingerId::Touch(touch.id);
        let (x, y) = (touch.location.x as f32, touch.location.y as f32);
        let snapshot = match touch.phase {
            TouchPhase::Started => self.tracker.press(finger, x, y),
            TouchPhase::Moved => self.tracker.move_to(finger, x, y),
            TouchPhase::Ended => self.tracker.release(finger, x, y),
            TouchPhase::Cancelled => self.tracker.cancel(finger),
        };
        if let Some(snapshot) = snapshot {
            self.forward(&snapshot);
        }
    }

    fn on_mouse_button(&mut self, state: ElementState) {
        let (x, y) = (self.cursor.x as f32, self.cursor.y as f32);
        let snapshot = match state {
            ElementState::Pressed => self.tracker.press(FingerId::Mouse, x, y),
            ElementState::Released => self.tracker.release(FingerId::Mouse, x, y),
        };
        if let Some(snapshot) = snapshot {
            self.forward(&snapshot);
        }
    }

    fn forward(&self, snapshot: &TouchSnapshot) {
        let Some(command) = dispatch_touch(snapshot, self.settings.max_pointers) else {
            return;
        };
        if let Err(err) = self.render.queue().queue_pointer(command) {
            error!("could not forward {command:?}: {err}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = match event_loop
            .create_window(Window::default_attributes().with_title("touch_bridge"))
        {
            Ok(window) => Rc::new(window),
            Err(err) => {
                error!("could not create window: {err}");
                event_loop.exit();
                return;
            }
        };

        if let Err(err) = self.surface_ready(&window) {
            error!("could not start engine: {err}");
            event_loop.exit();
            return;
        }
        info!("window ready, {:?}", window.inner_size());
        self.window = Some(window);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        debug!("suspended");
        self.window = None;
        if let Err(err) = self.render.queue().suspend() {
            error!("could not suspend render thread: {err}");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.window.as_ref().is_some_and(|w| w.id() != id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let (width, height) = to_engine_size(size);
                if let Err(err) = self.render.queue().queue_resize(width, height) {
                    error!("could not forward resize: {err}");
                }
            }
            WindowEvent::Touch(touch) => self.on_touch(touch),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                if self.tracker.is_down(FingerId::Mouse) {
                    if let Some(snapshot) =
                        self.tracker
                            .move_to(FingerId::Mouse, position.x as f32, position.y as f32)
                    {
                        self.forward(&snapshot);
                    }
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => self.on_mouse_button(state),
            _ => (),
        }
    }
}

fn to_engine_size(size: PhysicalSize<u32>) -> (i32, i32) {
    (
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}
