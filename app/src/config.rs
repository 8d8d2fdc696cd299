use std::time::Duration;

/// Startup settings for the desktop shell.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub rows: i64,
    pub cols: i64,
    /// Canvas size in pixels.
    pub width: usize,
    pub height: usize,
    /// Time between generations while running.
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 30,
            width: 600,
            height: 600,
            tick: Duration::from_millis(100),
        }
    }
}
