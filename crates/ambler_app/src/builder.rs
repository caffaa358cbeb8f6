use crate::config::AppConfig;
use crate::traits::WalkApp;

/// Entry point.  Builder over [`AppConfig`]; hands off to the runner.
pub struct App<A: WalkApp> {
    config: AppConfig,
    app_state: A,
}

impl<A: WalkApp + 'static> App<A> {
    pub fn new(app_state: A) -> Self {
        Self {
            config: AppConfig::default(),
            app_state,
        }
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Run the event loop until the window closes or the app requests exit.
    pub fn run(self) -> anyhow::Result<()> {
        crate::runner::run_internal(self.config, self.app_state)
    }
}
