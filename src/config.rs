use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "NOVEL_REQUESTER_LOG";

/// Defaults for the requester window and its fields
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub window_title: String,
    pub window_size: (f32, f32),
    pub filename_format: String,
    pub start_chapter: u32,
    pub initial_save_dir: Option<PathBuf>,
    pub chapter_input_label: String,
    pub log_filter: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            window_title: "Book Requester".to_string(),
            window_size: (663.0, 610.0),
            filename_format: "【{author}】{name}".to_string(),
            start_chapter: 1,
            initial_save_dir: None,
            chapter_input_label: "Chapter input:".to_string(),
            log_filter: "debug".to_string(),
        }
    }
}

impl FormConfig {
    /// Filter from `NOVEL_REQUESTER_LOG`, falling back to `log_filter`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&self.log_filter))
    }
}
