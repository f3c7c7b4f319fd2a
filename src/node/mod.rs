//! Host-facing node surface
//!
//! This module exposes the sender as a node the host runtime can register,
//! describe and execute.

pub mod gltf_send;
pub mod inputs;
pub mod registry;

pub use gltf_send::GltfSendHttp;
pub use inputs::{InputKind, InputSpec, InputTypes, NodeInputs, NodeValue};
pub use registry::{registry, NodeConstructor, NodeEntry, NodeRegistry};

/// A node the host runtime can describe and execute
pub trait Node: Send + Sync + std::fmt::Debug {
    /// Unique class name used in the registration table
    fn class_type(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn category(&self) -> &'static str;

    /// Name of the function the host invokes
    fn function(&self) -> &'static str;

    /// Output nodes run even when nothing consumes their outputs
    fn is_output_node(&self) -> bool {
        false
    }

    fn input_types(&self) -> InputTypes;

    fn return_types(&self) -> &'static [&'static str];

    fn return_names(&self) -> &'static [&'static str];

    /// Run the node once; always returns one value per return type
    fn execute(&self, inputs: &NodeInputs) -> Vec<NodeValue>;
}
