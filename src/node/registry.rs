//! Static registration table mapping class names to node constructors

use super::gltf_send::GltfSendHttp;
use super::Node;
use crate::error::{Result, SenderError};
use log::debug;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Builds a fresh node instance
pub type NodeConstructor = fn() -> Box<dyn Node>;

#[derive(Debug, Clone, Copy)]
pub struct NodeEntry {
    pub display_name: &'static str,
    pub constructor: NodeConstructor,
}

/// Lookup table of every node this crate provides
#[derive(Debug, Default)]
pub struct NodeRegistry {
    entries: BTreeMap<&'static str, NodeEntry>,
}

static REGISTRY: LazyLock<NodeRegistry> = LazyLock::new(|| {
    let mut registry = NodeRegistry::new();
    registry.register(gltf_send_http);
    registry
});

fn gltf_send_http() -> Box<dyn Node> {
    Box::new(GltfSendHttp::new())
}

/// The process-wide registry, built on first use
pub fn registry() -> &'static NodeRegistry {
    &REGISTRY
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node; a later registration of the same class replaces the
    /// earlier one
    pub fn register(&mut self, constructor: NodeConstructor) {
        let node = constructor();
        debug!("Registering node {}", node.class_type());
        self.entries.insert(
            node.class_type(),
            NodeEntry {
                display_name: node.display_name(),
                constructor,
            },
        );
    }

    pub fn create(&self, class_type: &str) -> Result<Box<dyn Node>> {
        self.entries
            .get(class_type)
            .map(|entry| (entry.constructor)())
            .ok_or_else(|| {
                SenderError::invalid_parameter(
                    "class_type",
                    format!("unknown node class: {}", class_type),
                )
            })
    }

    pub fn display_name(&self, class_type: &str) -> Option<&'static str> {
        self.entries.get(class_type).map(|entry| entry.display_name)
    }

    /// Class name to constructor, as the host expects it
    pub fn class_mappings(&self) -> impl Iterator<Item = (&'static str, NodeConstructor)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (*name, entry.constructor))
    }

    /// Class name to display name, as the host expects it
    pub fn display_name_mappings(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (*name, entry.display_name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
