//! Reference resolution: which node's fields stand in for a visited node

use serde_json::Value;

use crate::domain::document::reference_of;
use crate::domain::index::DefinitionIndex;

/// Outcome of resolving one visited node.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// Node whose name and fields are used for this tree position
    pub effective: &'a Value,
    /// Precomp id that was followed, None when the node is used as-is
    pub followed: Option<&'a str>,
}

/// Resolve the effective self of `node`.
///
/// A node whose `refId` names an indexed precomp is replaced by that
/// precomp; anything else, including dangling references, stands for itself.
pub fn resolve_self<'a>(node: &'a Value, index: &DefinitionIndex<'a>) -> Resolution<'a> {
    reference_of(node)
        .and_then(|id| index.get(id).map(|definition| (id, definition)))
        .map(|(id, definition)| Resolution {
            effective: definition,
            followed: Some(id),
        })
        .unwrap_or(Resolution {
            effective: node,
            followed: None,
        })
}
