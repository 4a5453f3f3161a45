//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::KeyPathService;
use crate::config::Settings;
use crate::infrastructure::traits::{InputReader, RealInputReader};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Input abstraction
    pub input: Arc<dyn InputReader>,

    /// Key-path tree service
    pub keypath: KeyPathService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealInputReader))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, input: Arc<dyn InputReader>) -> Self {
        let settings = Arc::new(settings);
        let keypath = KeyPathService::new(Arc::clone(&input), Arc::clone(&settings));

        Self {
            settings,
            input,
            keypath,
        }
    }
}
