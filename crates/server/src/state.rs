use numstat_core::Config;

/// Process-wide state, built once at startup and never mutated.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
