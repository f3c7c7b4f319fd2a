pub mod config;
pub mod digest;
pub mod error;

pub mod node;
pub mod upload;

pub use config::SenderConfig;

pub use digest::FileDigest;

pub use error::{Result, SenderError};

pub use node::{
    registry, GltfSendHttp, InputKind, InputSpec, InputTypes, Node, NodeInputs, NodeRegistry,
    NodeValue,
};

#[cfg(feature = "tokio")]
pub use upload::upload_async;
pub use upload::{upload, upload_file, upload_with_config, HttpMethod, UploadRequest, UploadResult};
