/// Request method.
///
/// Only retrieval is served. Every other verb collapses into `Unsupported`
/// and is rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other method token
    Unsupported,
}

impl Method {
    /// Maps a request-line token to a method (case-sensitive).
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Unsupported);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            _ => Method::Unsupported,
        }
    }
}

/// A parsed request line.
///
/// Headers are read off the wire but not retained; nothing downstream
/// consults them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method
    pub method: Method,
    /// Path component of the request target, query string removed
    pub target: String,
    /// Protocol token from the request line (e.g. "HTTP/1.1")
    pub protocol: String,
}
