//! Media type lookup by file extension.

/// Derives a media type and optional content encoding from a file path.
///
/// A compression suffix yields the encoding and the inner extension decides
/// the media type, so `page.html.gz` maps to `("text/html", Some("gzip"))`.
/// Unknown extensions fall back to `application/octet-stream`.
pub fn guess_type(path: &str) -> (&'static str, Option<&'static str>) {
    let (inner, encoding) = match path.rsplit_once('.') {
        Some((stem, "gz")) => (stem, Some("gzip")),
        Some((stem, "bz2")) => (stem, Some("bzip2")),
        Some((stem, "xz")) => (stem, Some("xz")),
        _ => (path, None),
    };

    (media_type(inner), encoding)
}

fn media_type(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("htm") | Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
