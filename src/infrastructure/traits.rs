//! I/O boundary traits for testability
//!
//! These traits abstract where the animation document comes from, allowing
//! services to be tested with in-memory implementations.

use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Input abstraction: reads a whole document as text.
pub trait InputReader: Send + Sync {
    /// Read the input to completion. `None` means standard input.
    fn read_source(&self, path: Option<&Path>) -> io::Result<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Reads files from disk and `None` from the process's stdin.
#[derive(Debug, Default)]
pub struct RealInputReader;

impl InputReader for RealInputReader {
    fn read_source(&self, path: Option<&Path>) -> io::Result<String> {
        match path {
            Some(path) => std::fs::read_to_string(path),
            None => {
                let mut body = String::new();
                io::stdin().lock().read_to_string(&mut body)?;
                Ok(body)
            }
        }
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATION
// ============================================================

/// Serves fixed contents for stdin and named paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryInputReader {
    stdin: Option<String>,
    files: HashMap<PathBuf, String>,
}

impl MemoryInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents returned for standard input.
    pub fn with_stdin(mut self, body: impl Into<String>) -> Self {
        self.stdin = Some(body.into());
        self
    }

    /// Contents returned for `path`.
    pub fn with_file(mut self, path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        self.files.insert(path.into(), body.into());
        self
    }
}

impl InputReader for MemoryInputReader {
    fn read_source(&self, path: Option<&Path>) -> io::Result<String> {
        let body = match path {
            Some(path) => self.files.get(path),
            None => self.stdin.as_ref(),
        };
        body.cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "no input registered for {}",
                    path.map(|p| p.display().to_string())
                        .unwrap_or_else(|| "<stdin>".to_string())
                ),
            )
        })
    }
}
