//! App Configuration
//!
//! Compiled defaults; the page has no runtime settings.

use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Entries kept in the console logger history
    pub log_capacity: usize,
    pub title: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            log_capacity: 200,
            title: "请输入参数",
        }
    }
}
