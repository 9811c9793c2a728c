#[cfg(not(target_os = "android"))]
fn main() {
    use touch_bridge::{settings::Settings, window::App};

    let settings = Settings::default();
    env_logger::builder()
        .filter_level(settings.log_level)
        .parse_default_env()
        .init();

    if let Err(err) = App::run(settings) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

// The Android build only ships the cdylib, entered through `android_main`.
#[cfg(target_os = "android")]
fn main() {}
