use crate::config;

/// Load settings and start logging at the configured level.
///
/// Config is optional: failures are logged and defaults are used.
pub fn load_settings() -> config::Settings {
    let (settings, problem) = match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    };

    init_logging(settings.log.level);
    if let Some(msg) = problem {
        log::warn!("{msg}");
    }
    settings
}

fn init_logging(level: config::LogLevel) {
    let mut clog = colog::default_builder();
    clog.filter(None, level.into());
    let _ = clog.try_init();
}
