//! Loosely-typed values exchanged with the host runtime

use crate::error::{Result, SenderError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single input or output value as the host sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Int(i64),
    String(String),
    Dict(BTreeMap<String, serde_json::Value>),
}

impl NodeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Text form of the value: strings as-is, anything else as JSON
    pub fn to_display_string(&self) -> String {
        match self {
            NodeValue::String(s) => s.clone(),
            NodeValue::Int(i) => i.to_string(),
            NodeValue::Dict(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }

    /// Interpret the value as a header mapping
    ///
    /// Accepts a dict or a JSON object string. An empty string means no
    /// headers. Non-string JSON values are rendered with their JSON text.
    pub fn to_headers(&self) -> Result<BTreeMap<String, String>> {
        let dict = match self {
            NodeValue::Dict(dict) => dict.clone(),
            NodeValue::String(s) if s.trim().is_empty() => BTreeMap::new(),
            NodeValue::String(s) => serde_json::from_str(s).map_err(|e| {
                SenderError::invalid_parameter(
                    "additional_request_headers",
                    format!("expected a JSON object: {}", e),
                )
            })?,
            NodeValue::Int(_) => {
                return Err(SenderError::invalid_parameter(
                    "additional_request_headers",
                    "expected a dict of headers, got an integer",
                ))
            }
        };

        Ok(dict
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (name, value)
            })
            .collect())
    }
}

impl From<&str> for NodeValue {
    fn from(s: &str) -> Self {
        NodeValue::String(s.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(s: String) -> Self {
        NodeValue::String(s)
    }
}

impl From<i64> for NodeValue {
    fn from(i: i64) -> Self {
        NodeValue::Int(i)
    }
}

impl From<BTreeMap<String, String>> for NodeValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        NodeValue::Dict(
            map.into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect(),
        )
    }
}

/// Named inputs for one node execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeInputs(BTreeMap<String, NodeValue>);

impl NodeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<NodeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<NodeValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.0.get(name)
    }

    /// String input, falling back to `default` when absent
    pub fn string_or(&self, name: &str, default: &str) -> Result<String> {
        match self.0.get(name) {
            None => Ok(default.to_string()),
            Some(NodeValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(SenderError::invalid_parameter(
                name,
                "expected a string input",
            )),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Kind of a declared input, with its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputKind {
    String { default: &'static str },
    Choice {
        options: Vec<&'static str>,
        default: &'static str,
    },
    Dict,
}

/// One declared input of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: InputKind,
}

/// Required and optional inputs of a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputTypes {
    pub required: Vec<InputSpec>,
    pub optional: Vec<InputSpec>,
}

impl InputTypes {
    pub fn find(&self, name: &str) -> Option<&InputSpec> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .find(|spec| spec.name == name)
    }
}
