//! Precomp definition index: `assets[].id` -> asset node

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::document::{id_of, ASSETS_KEY};

/// Lookup from precomp id to its definition, borrowed from the document.
///
/// Built once per build and never mutated afterwards. When `assets` holds
/// several entries with the same id, the first one wins.
#[derive(Debug, Default, Clone)]
pub struct DefinitionIndex<'a> {
    by_id: HashMap<&'a str, &'a Value>,
}

impl<'a> DefinitionIndex<'a> {
    /// Index the `assets` collection of a root document.
    ///
    /// A missing or non-array `assets` field yields an empty index; entries
    /// that are not objects with a string `id` are skipped.
    #[instrument(level = "debug", skip(document))]
    pub fn from_document(document: &'a Value) -> Self {
        let mut by_id = HashMap::new();
        let assets = document
            .get(ASSETS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for asset in assets.iter().filter(|asset| asset.is_object()) {
            let Some(id) = id_of(asset) else {
                continue;
            };
            if by_id.contains_key(id) {
                debug!("duplicate asset id ignored: {}", id);
                continue;
            }
            by_id.insert(id, asset);
        }

        debug!("indexed {} assets", by_id.len());
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Value> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
