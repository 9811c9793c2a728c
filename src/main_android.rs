//! Bridges platform touch and lifecycle events to a native rendering engine.
//!
//! Touch events are normalized into [`input::InputCommand`]s on the event thread and
//! queued, together with lifecycle calls, for the render thread that owns the
//! [`engine::NativeEngine`].

#[cfg(target_os = "android")]
mod android;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod settings;
#[cfg(not(target_os = "android"))]
pub mod window;

#[cfg(target_os = "android")]
use winit::platform::android::activity::AndroidApp;

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: AndroidApp) {
    let settings = settings::Settings::default();
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(settings.log_level)
            .with_tag("touch_bridge"),
    );

    if let Err(err) = android::run(app, settings) {
        log::error!("touch_bridge stopped: {err}");
    }
}
