//! Key-path tree service
//!
//! Reads a Lottie document, decodes it and turns it into a rendered key-path tree.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::{source_label, ApplicationError, ApplicationResult, IoResultExt};
use crate::config::{RenderStyle, Settings};
use crate::domain::{render_with_unit, KeyPathTree, TreeBuilder, TreeNodeConvert};
use crate::infrastructure::traits::InputReader;

/// Output from building a key-path tree.
#[derive(Debug)]
pub struct KeyPathOutput {
    /// The built tree
    pub tree: KeyPathTree,
    /// Tree rendered in the requested style
    pub rendered: String,
}

/// Service for dumping key-path trees.
pub struct KeyPathService {
    input: Arc<dyn InputReader>,
    settings: Arc<Settings>,
}

impl KeyPathService {
    /// Create a new key-path service.
    pub fn new(input: Arc<dyn InputReader>, settings: Arc<Settings>) -> Self {
        Self { input, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read and decode the document from `source` (`None` reads stdin).
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, source: Option<&Path>) -> ApplicationResult<Value> {
        let body = self
            .input
            .read_source(source)
            .with_source_context(source)?;
        debug!("read {} bytes from {}", body.len(), source_label(source));
        Self::decode(&body)
    }

    /// Decode document text. Blank input is rejected before parsing.
    pub fn decode(body: &str) -> ApplicationResult<Value> {
        if body.trim().is_empty() {
            return Err(ApplicationError::EmptyInput);
        }
        Ok(serde_json::from_str(body)?)
    }

    /// Build the key-path tree of a decoded document.
    pub fn build(&self, document: &Value) -> ApplicationResult<KeyPathTree> {
        Ok(TreeBuilder::new().build(document)?)
    }

    /// Render a tree in `style` using the configured indent unit.
    pub fn render(&self, tree: &KeyPathTree, style: RenderStyle) -> String {
        match style {
            RenderStyle::Indent => render_with_unit(tree, "", &self.settings.indent),
            RenderStyle::Tree => tree.to_tree_string().to_string(),
        }
    }

    /// Load, build and render; `style` overrides the configured style.
    #[instrument(level = "debug", skip(self))]
    pub fn tree(
        &self,
        source: Option<&Path>,
        style: Option<RenderStyle>,
    ) -> ApplicationResult<KeyPathOutput> {
        let document = self.load(source)?;
        let tree = self.build(&document)?;
        let rendered = self.render(&tree, style.unwrap_or(self.settings.style));
        Ok(KeyPathOutput { tree, rendered })
    }

    /// Load and build, then list root-to-leaf key paths.
    ///
    /// `separator` overrides the configured separator.
    #[instrument(level = "debug", skip(self))]
    pub fn paths(
        &self,
        source: Option<&Path>,
        separator: Option<&str>,
    ) -> ApplicationResult<Vec<String>> {
        let document = self.load(source)?;
        let tree = self.build(&document)?;
        Ok(tree.key_paths(separator.unwrap_or(&self.settings.separator)))
    }
}
