//! MIME type detection based on file extensions.

pub const TEXT_HTML: &str = "text/html;charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain;charset=utf-8";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a resource path, judged by its extension.
///
/// ```
/// # use porter::http::mime::from_path;
/// assert_eq!(from_path("/css/styles.css"), "text/css;charset=utf-8");
/// assert_eq!(from_path("/download"), "application/octet-stream");
/// ```
pub fn from_path(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return OCTET_STREAM;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => TEXT_HTML,
        "css" => "text/css;charset=utf-8",
        "js" => "application/javascript;charset=utf-8",
        "json" => "application/json",
        "txt" => TEXT_PLAIN,
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => OCTET_STREAM,
    }
}
