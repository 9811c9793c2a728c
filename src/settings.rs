use std::{path::PathBuf, time::Duration};

use log::LevelFilter;

use crate::input::MAX_TRACKED_POINTERS;

const DEFAULT_REFRESH_RATE_HZ: f32 = 60.;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Pointers resolving to an id at or above this value are not forwarded.
    ///
    /// The native engine keeps a fixed-size pointer table, don't raise it
    /// without checking the engine side.
    pub max_pointers: i32,
    /// Target duration of one render-thread frame (drain queue + step)
    pub frame_interval: Duration,
    pub log_level: LevelFilter,
    /// Overrides the storage path handed to the engine `init`.
    pub storage_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_pointers: MAX_TRACKED_POINTERS,
            frame_interval: Duration::from_secs_f32(1. / DEFAULT_REFRESH_RATE_HZ),
            log_level: LevelFilter::Info,
            storage_path: None,
        }
    }
}

impl Settings {
    /// Paces the render thread at `hz` frames per second.
    ///
    /// Rates that don't give a representable frame interval are ignored.
    pub fn set_refresh_rate(&mut self, hz: f32) {
        if !hz.is_finite() || hz <= 0. {
            return;
        }
        if let Ok(interval) = Duration::try_from_secs_f32(1. / hz) {
            self.frame_interval = interval;
        }
    }

    pub fn storage_path_or(&self, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_capacity() {
        let settings = Settings::default();
        assert_eq!(settings.max_pointers, 5);
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert!(settings.storage_path.is_none());
    }

    #[test]
    fn refresh_rate_updates_frame_interval() {
        let mut settings = Settings::default();
        settings.set_refresh_rate(120.);
        assert_eq!(settings.frame_interval, Duration::from_secs_f32(1. / 120.));
    }

    #[test]
    fn invalid_refresh_rate_is_ignored() {
        let mut settings = Settings::default();
        let before = settings.frame_interval;
        settings.set_refresh_rate(0.);
        settings.set_refresh_rate(-30.);
        settings.set_refresh_rate(f32::NAN);
        assert_eq!(settings.frame_interval, before);
    }

    #[test]
    fn refresh_rate_too_low_for_a_duration_is_ignored() {
        let mut settings = Settings::default();
        let before = settings.frame_interval;
        settings.set_refresh_rate(1e-20);
        settings.set_refresh_rate(f32::MIN_POSITIVE);
        assert_eq!(settings.frame_interval, before);

        settings.set_refresh_rate(0.5);
        assert_eq!(settings.frame_interval, Duration::from_secs(2));
    }

    #[test]
    fn storage_path_override_wins() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.storage_path_or(|| PathBuf::from("/tmp")),
            PathBuf::from("/tmp")
        );
        settings.storage_path = Some(PathBuf::from("/data/app"));
        assert_eq!(
            settings.storage_path_or(|| PathBuf::from("/tmp")),
            PathBuf::from("/data/app")
        );
    }
}
