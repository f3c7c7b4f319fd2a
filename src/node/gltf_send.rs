//! The `GLTF_Send_HTTP` node

use super::inputs::{InputKind, InputSpec, InputTypes, NodeInputs, NodeValue};
use super::Node;
use crate::config::SenderConfig;
use crate::error::Result;
use crate::upload::{upload_with_config, HttpMethod, UploadRequest, UploadResult};
use log::error;
use std::collections::BTreeMap;

pub const CLASS_TYPE: &str = "GLTF_Send_HTTP";
pub const DISPLAY_NAME: &str = "GLTF Send HTTP Node";
pub const CATEGORY: &str = "Jornick";
pub const FUNCTION: &str = "send_glb_file";

pub const DEFAULT_GLB_FILE: &str = "./model.glb";
pub const DEFAULT_URL: &str = "https://your-backend.com/upload";

pub const RETURN_TYPES: [&str; 4] = ["INT", "STRING", "STRING", "STRING"];
pub const RETURN_NAMES: [&str; 4] = ["status_code", "result_text", "glb_path", "debug_info"];

/// Reads a GLB file from a path produced by another node and sends it to a
/// backend
#[derive(Debug, Clone, Default)]
pub struct GltfSendHttp {
    config: SenderConfig,
}

impl GltfSendHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Typed entry point, mirroring the host function `send_glb_file`
    pub fn send_glb_file(
        &self,
        glb_file: &str,
        url: &str,
        method_type: HttpMethod,
        additional_request_headers: Option<BTreeMap<String, String>>,
    ) -> (i64, String, String, String) {
        let request = UploadRequest::new(glb_file, url)
            .method(method_type)
            .headers(additional_request_headers.unwrap_or_default());

        upload_with_config(&self.config, &request).into_outputs()
    }

    fn request_from_inputs(inputs: &NodeInputs) -> Result<UploadRequest> {
        let glb_file = inputs.string_or("glb_file", DEFAULT_GLB_FILE)?;
        let url = inputs.string_or("url", DEFAULT_URL)?;
        let method: HttpMethod = inputs
            .string_or("method_type", HttpMethod::default().as_str())?
            .parse()?;

        let headers = match inputs.get("additional_request_headers") {
            Some(value) => value.to_headers()?,
            None => BTreeMap::new(),
        };

        Ok(UploadRequest::new(glb_file, url)
            .method(method)
            .headers(headers))
    }
}

impl Node for GltfSendHttp {
    fn class_type(&self) -> &'static str {
        CLASS_TYPE
    }

    fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn function(&self) -> &'static str {
        FUNCTION
    }

    fn is_output_node(&self) -> bool {
        true
    }

    fn input_types(&self) -> InputTypes {
        InputTypes {
            required: vec![
                InputSpec {
                    name: "glb_file",
                    kind: InputKind::String {
                        default: DEFAULT_GLB_FILE,
                    },
                },
                InputSpec {
                    name: "url",
                    kind: InputKind::String {
                        default: DEFAULT_URL,
                    },
                },
                InputSpec {
                    name: "method_type",
                    kind: InputKind::Choice {
                        options: HttpMethod::ALL.iter().map(HttpMethod::as_str).collect(),
                        default: HttpMethod::default().as_str(),
                    },
                },
            ],
            optional: vec![InputSpec {
                name: "additional_request_headers",
                kind: InputKind::Dict,
            }],
        }
    }

    fn return_types(&self) -> &'static [&'static str] {
        &RETURN_TYPES
    }

    fn return_names(&self) -> &'static [&'static str] {
        &RETURN_NAMES
    }

    fn execute(&self, inputs: &NodeInputs) -> Vec<NodeValue> {
        let result = match Self::request_from_inputs(inputs) {
            Ok(request) => upload_with_config(&self.config, &request),
            Err(e) => {
                error!("{}", e);
                let path = inputs
                    .get("glb_file")
                    .map(NodeValue::to_display_string)
                    .unwrap_or_else(|| DEFAULT_GLB_FILE.to_string());
                UploadResult::local_failure(&e, path)
            }
        };

        outputs(result)
    }
}

fn outputs(result: UploadResult) -> Vec<NodeValue> {
    let (status, text, path, debug) = result.into_outputs();
    vec![
        NodeValue::Int(status),
        NodeValue::String(text),
        NodeValue::String(path),
        NodeValue::String(debug),
    ]
}
