//! Sending files to a local HTTP test double

mod common;

use common::{sample_glb, unreachable_url, TestServer};
use glb_http_sender::{
    upload, upload_file, upload_with_config, FileDigest, HttpMethod, SenderConfig, UploadRequest,
};
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::tempdir;

fn independent_sha256(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[test]
fn test_body_is_raw_file_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::try_init();

    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    let contents = sample_glb();
    fs::write(&file_path, &contents)?;

    let server = TestServer::start(200, "stored");
    let result = upload_file(&file_path, &server.url, HttpMethod::Post, None);
    let recorded = server.recorded();

    assert_eq!(result.status_code, 200);
    assert_eq!(result.response_body, "stored");
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/upload");
    assert_eq!(recorded.body, contents);
    assert_eq!(recorded.header("content-type"), Some("application/octet-stream"));

    Ok(())
}

#[test]
fn test_debug_info_has_size_and_digest() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    let contents = sample_glb();
    fs::write(&file_path, &contents)?;

    let server = TestServer::start(201, "created");
    let result = upload_file(&file_path, &server.url, HttpMethod::Put, None);
    let recorded = server.recorded();

    let expected = independent_sha256(&contents);
    assert_eq!(recorded.method, "PUT");
    assert!(result
        .debug_info
        .contains(&format!("Size: {} bytes", contents.len())));
    assert!(result.debug_info.contains(&expected));
    assert_eq!(result.digest, Some(FileDigest::compute(&contents)));
    assert_eq!(result.source_path, file_path.to_string_lossy());

    Ok(())
}

#[test]
fn test_file_name_header_is_base_name() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let nested = temp_dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&nested)?;
    let file_path = nested.join("model.glb");
    fs::write(&file_path, b"glTF")?;

    let server = TestServer::start(200, "ok");
    let _ = upload_file(&file_path, &server.url, HttpMethod::Post, None);
    let recorded = server.recorded();

    assert_eq!(recorded.header("x-file-name"), Some("model.glb"));

    Ok(())
}

#[test]
fn test_server_status_passes_through() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    fs::write(&file_path, sample_glb())?;

    for (status, body) in [(201, "created"), (404, "no such bucket"), (500, "boom")] {
        let server = TestServer::start(status, body);
        let result = upload_file(&file_path, &server.url, HttpMethod::Post, None);
        server.recorded();

        assert_eq!(result.status_code, status);
        assert_eq!(result.response_body, body);
        assert!(!result.is_local_failure());
    }

    Ok(())
}

#[test]
fn test_connection_refused_is_transport_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    let contents = sample_glb();
    fs::write(&file_path, &contents)?;

    let result = upload_file(&file_path, &unreachable_url(), HttpMethod::Post, None);

    assert_eq!(result.status_code, 0);
    assert!(result.response_body.starts_with("HTTP request failed"));
    assert!(
        result
            .response_body
            .to_ascii_lowercase()
            .contains("connection refused"),
        "cause missing from {}",
        result.response_body
    );
    assert!(result
        .debug_info
        .contains(&format!("Size: {} bytes", contents.len())));
    assert!(result.debug_info.contains(&independent_sha256(&contents)));

    Ok(())
}

#[test]
fn test_unresolvable_host_reports_dns_cause() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    fs::write(&file_path, b"glTF")?;

    let result = upload_file(
        &file_path,
        "http://no-such-host.invalid/upload",
        HttpMethod::Post,
        None,
    );

    assert_eq!(result.status_code, 0);
    assert!(
        result.response_body.contains("dns error"),
        "cause missing from {}",
        result.response_body
    );
    assert!(result.debug_info.contains("Size: 4 bytes"));

    Ok(())
}

#[test]
fn test_missing_file_never_sends() {
    let missing = "/definitely/not/a/real/model.glb";
    let result = upload_file(missing, &unreachable_url(), HttpMethod::Post, None);

    let (status, text, path, debug) = result.into_outputs();
    assert_eq!(status, 0);
    assert!(text.contains(missing));
    assert_eq!(path, missing);
    assert!(debug.contains(missing));
}

#[test]
fn test_caller_headers_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    fs::write(&file_path, b"glTF")?;

    let server = TestServer::start(200, "ok");
    let request = UploadRequest::new(&file_path, &server.url)
        .header("Content-Type", "model/gltf-binary")
        .header("Authorization", "Bearer secret");
    let client = SenderConfig::default().build_client()?;
    let result = upload(&client, &request);
    let recorded = server.recorded();

    assert_eq!(result.status_code, 200);
    assert_eq!(
        recorded.headers.get("content-type").map(Vec::len),
        Some(1)
    );
    assert_eq!(recorded.header("content-type"), Some("model/gltf-binary"));
    assert_eq!(recorded.header("authorization"), Some("Bearer secret"));
    assert_eq!(recorded.header("x-file-name"), Some("model.glb"));

    Ok(())
}

#[test]
fn test_configured_user_agent() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("model.glb");
    fs::write(&file_path, b"glTF")?;

    let server = TestServer::start(200, "ok");
    let config = SenderConfig::new().user_agent("node-graph/1.0").timeout_secs(30);
    let request = UploadRequest::new(&file_path, &server.url);
    let result = upload_with_config(&config, &request);
    let recorded = server.recorded();

    assert_eq!(result.status_code, 200);
    assert_eq!(recorded.header("user-agent"), Some("node-graph/1.0"));

    Ok(())
}

#[test]
fn test_empty_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let file_path = temp_dir.path().join("empty.glb");
    fs::write(&file_path, b"")?;

    let server = TestServer::start(200, "ok");
    let result = upload_file(&file_path, &server.url, HttpMethod::Put, None);
    let recorded = server.recorded();

    assert!(recorded.body.is_empty());
    assert!(result.debug_info.contains("Size: 0 bytes"));
    assert!(result.debug_info.contains(&independent_sha256(b"")));

    Ok(())
}
