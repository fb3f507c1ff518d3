use std::path::PathBuf;

use serde::Deserialize;

/// Status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// The full status line, terminator included.
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK\r\n",
            StatusCode::BadRequest => "HTTP/1.1 400 Bad Request\r\n",
            StatusCode::NotFound => "HTTP/1.1 404 Not Found\r\n",
            StatusCode::InternalServerError => "HTTP/1.1 500 Internal Server Error\r\n",
        }
    }
}

/// Wire format of the `Content-Type` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTypeStyle {
    /// `Content-Type: text/html; charset=UTF-8`
    #[default]
    Standard,
    /// `Content-Type:text/html;charset=UTF-8`, byte-compatible with older
    /// deployments of this server.
    Legacy,
}

pub fn content_type_line(content_type: &str, style: ContentTypeStyle) -> String {
    match style {
        ContentTypeStyle::Standard => format!("Content-Type: {content_type}; charset=UTF-8\r\n"),
        ContentTypeStyle::Legacy => format!("Content-Type:{content_type};charset=UTF-8\r\n"),
    }
}

/// Where the response body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// The requested file under the root.
    File(PathBuf),
    /// One of the fixed fallback documents under the root.
    Fallback(PathBuf),
}

impl BodySource {
    pub fn path(&self) -> &PathBuf {
        match self {
            BodySource::File(path) | BodySource::Fallback(path) => path,
        }
    }
}

/// Everything the streamer needs to answer one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: BodySource,
}

impl ResponseDescriptor {
    pub fn ok(path: PathBuf, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: BodySource::File(path),
        }
    }

    pub fn bad_request(fallback: PathBuf) -> Self {
        Self {
            status: StatusCode::BadRequest,
            content_type: "text/html",
            body: BodySource::Fallback(fallback),
        }
    }

    pub fn not_found(fallback: PathBuf) -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: BodySource::Fallback(fallback),
        }
    }

    /// Status line, content-type line and the blank separator line.
    pub fn head_bytes(&self, style: ContentTypeStyle) -> Vec<u8> {
        head_bytes(self.status, self.content_type, style)
    }
}

pub(crate) fn head_bytes(
    status: StatusCode,
    content_type: &str,
    style: ContentTypeStyle,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(96);
    buf.extend_from_slice(status.status_line().as_bytes());
    buf.extend_from_slice(content_type_line(content_type, style).as_bytes());
    buf.extend_from_slice(b"\r\n");
    buf
}

/// Body sent when a resolved document cannot be delivered.
pub const INTERNAL_ERROR_BODY: &[u8] =
    b"<html><body><h1>500 Internal Server Error</h1></body></html>\n";
