//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::storage::KeyValueStore;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend for draft persistence
    pub store: Arc<dyn KeyValueStore>,
    /// Static settings
    pub config: Arc<AppConfig>,
}

impl AppContext {
    pub fn new(store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Get the app context, panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
