//! App Configuration
//!
//! Static settings shared through `AppContext`.

/// Storage key holding the JSON-encoded draft
pub const DRAFT_STORAGE_KEY: &str = "text";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Local storage key for the draft
    pub storage_key: String,
    /// Input placeholder
    pub placeholder: String,
    /// Submit button label
    pub submit_label: String,
    /// Heading above the form
    pub title: String,
    /// Count noun for exactly one todo
    pub count_singular: String,
    /// Count noun for any other number of todos
    pub count_plural: String,
    /// Console log level
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DRAFT_STORAGE_KEY.to_string(),
            placeholder: "Agregar nueva tarea".to_string(),
            submit_label: "Agregar".to_string(),
            title: "Tareas".to_string(),
            count_singular: "tarea".to_string(),
            count_plural: "tareas".to_string(),
            log_level: if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        }
    }
}

impl AppConfig {
    /// Footer text for `count` todos, e.g. "1 tarea", "3 tareas"
    pub fn count_label(&self, count: usize) -> String {
        let noun = if count == 1 { &self.count_singular } else { &self.count_plural };
        format!("{} {}", count, noun)
    }
}
