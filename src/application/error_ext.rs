//! Error conversion helpers for input reads
//!
//! Provides an extension trait for cleaner error handling with source context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add input-source context to an I/O error; `None` stands for stdin.
    ///
    /// # Example
    /// ```ignore
    /// reader.read_source(path)
    ///     .with_source_context(path)?;
    /// ```
    fn with_source_context(self, source: Option<&Path>) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_source_context(self, source: Option<&Path>) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Input {
            context: source_label(source),
            source: e,
        })
    }
}

/// Human-readable name of an input source.
pub fn source_label(source: Option<&Path>) -> String {
    source
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}
