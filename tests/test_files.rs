use std::fs;

use httpsrv::files::{ResolveError, resolve};

#[test]
fn test_resolve_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), b"hello world").unwrap();

    let root = dir.path().to_str().unwrap();
    let resource = resolve(root, "/hello.txt").unwrap();

    assert_eq!(resource.content, b"hello world".to_vec());
    assert_eq!(resource.media_type, "text/plain");
    assert_eq!(resource.encoding, None);
}

#[test]
fn test_resolve_reports_modification_time() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("page.html");
    fs::write(&file_path, b"<html></html>").unwrap();

    let root = dir.path().to_str().unwrap();
    let resource = resolve(root, "/page.html").unwrap();

    let expected = fs::metadata(&file_path).unwrap().modified().unwrap();
    assert_eq!(resource.last_modified, expected);
    assert_eq!(resource.media_type, "text/html");
}

#[test]
fn test_resolve_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();

    let result = resolve(root, "/whatisthisnotexist");
    assert!(matches!(result, Err(ResolveError::NotFound)));
}

#[test]
fn test_resolve_root_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();

    let result = resolve(root, "/");
    assert!(matches!(result, Err(ResolveError::NotFound)));
}

#[test]
fn test_resolve_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/app.js"), b"console.log(1);").unwrap();

    let root = dir.path().to_str().unwrap();
    let resource = resolve(root, "/assets/app.js").unwrap();

    assert_eq!(resource.content, b"console.log(1);".to_vec());
    assert_eq!(resource.media_type, "application/javascript");
}

#[test]
fn test_resolve_gzipped_file_reports_encoding() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.html.gz"), b"\x1f\x8b fake gzip").unwrap();

    let root = dir.path().to_str().unwrap();
    let resource = resolve(root, "/page.html.gz").unwrap();

    assert_eq!(resource.media_type, "text/html");
    assert_eq!(resource.encoding, Some("gzip"));
}

#[test]
fn test_resolve_binary_content_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let payload = vec![0u8, 255, 1, 254, 13, 10, 0];
    fs::write(dir.path().join("blob.bin"), &payload).unwrap();

    let root = dir.path().to_str().unwrap();
    let resource = resolve(root, "/blob.bin").unwrap();

    assert_eq!(resource.content, payload);
    assert_eq!(resource.media_type, "application/octet-stream");
}

#[test]
fn test_resolve_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("subdir")).unwrap();

    let root = dir.path().to_str().unwrap();
    let result = resolve(root, "/subdir");

    assert!(matches!(result, Err(ResolveError::Io(_))));
}
