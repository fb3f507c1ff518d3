//! Content-type lookup by file extension.

/// Type used for unmapped or missing extensions.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("ico", "image/icon"),
    ("jpg", "image/jpg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("pdf", "application/pdf"),
];

/// Returns the text after the last `.` of `target`, if any.
///
/// ```
/// # use statik::http::mime::extension_of;
/// assert_eq!(extension_of("/a/b.tar.gz"), Some("gz"));
/// assert_eq!(extension_of("/README"), None);
/// ```
pub fn extension_of(target: &str) -> Option<&str> {
    target.rsplit_once('.').map(|(_, ext)| ext)
}

/// Maps an extension to its content type. Matching is case-sensitive.
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    extension
        .and_then(|ext| {
            CONTENT_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
