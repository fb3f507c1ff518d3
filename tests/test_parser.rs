use statik::http::parser::{ParseError, parse_request};
use statik::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request(b"GET / HTTP/1.1\r\nHost: example.com\r\n").unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.target, "/");
    assert_eq!(req.protocol, "HTTP/1.1");
}

#[test]
fn test_parse_http10_request() {
    let req = parse_request(b"GET /index.html HTTP/1.0\r\n").unwrap();

    assert_eq!(req.target, "/index.html");
    assert_eq!(req.protocol, "HTTP/1.0");
}

#[test]
fn test_parse_request_without_headers() {
    let req = parse_request(b"GET /a.css HTTP/1.1").unwrap();
    assert_eq!(req.target, "/a.css");
}

#[test]
fn test_query_string_is_stripped() {
    let req = parse_request(b"GET /a.css?x=1 HTTP/1.1\r\n").unwrap();
    assert_eq!(req.target, "/a.css");

    let req = parse_request(b"GET /search?q=a?b HTTP/1.1\r\n").unwrap();
    assert_eq!(req.target, "/search");
}

#[test]
fn test_question_mark_at_target_start_is_not_a_delimiter() {
    let req = parse_request(b"GET ?x=1 HTTP/1.1\r\n").unwrap();
    assert_eq!(req.target, "?x=1");
}

#[test]
fn test_question_mark_after_protocol_is_ignored() {
    let req = parse_request(b"GET /page.html HTTP/1.1?\r\n").unwrap();
    assert_eq!(req.target, "/page.html");

    let req = parse_request(b"GET /page.html HTTP/1.1\r\nReferer: /x?y=1\r\n").unwrap();
    assert_eq!(req.target, "/page.html");
}

#[test]
fn test_empty_query_is_stripped() {
    let req = parse_request(b"GET /style.css? HTTP/1.1\r\n").unwrap();
    assert_eq!(req.target, "/style.css");
}

#[test]
fn test_parse_post_is_unsupported() {
    let result = parse_request(b"POST / HTTP/1.1\r\n");
    assert_eq!(result, Err(ParseError::UnsupportedMethod));
}

#[test]
fn test_parse_methods_are_case_sensitive() {
    assert_eq!(
        parse_request(b"get / HTTP/1.1\r\n"),
        Err(ParseError::UnsupportedMethod)
    );
    assert_eq!(
        parse_request(b"GETX / HTTP/1.1\r\n"),
        Err(ParseError::UnsupportedMethod)
    );
}

#[test]
fn test_get_in_later_line_does_not_count() {
    let result = parse_request(b"DELETE /x HTTP/1.1\r\nX-Note: GET / HTTP/1.1\r\n");
    assert_eq!(result, Err(ParseError::UnsupportedMethod));
}

#[test]
fn test_empty_head_is_unsupported() {
    assert_eq!(parse_request(b""), Err(ParseError::UnsupportedMethod));
}

#[test]
fn test_missing_protocol_is_malformed() {
    assert_eq!(
        parse_request(b"GET /index.html\r\n"),
        Err(ParseError::MalformedRequest)
    );
    assert_eq!(
        parse_request(b"GET /index.html HTTP/2\r\n"),
        Err(ParseError::MalformedRequest)
    );
}

#[test]
fn test_protocol_marker_in_header_does_not_count() {
    let result = parse_request(b"GET /index.html\r\nVia: 1.1 HTTP/1.1\r\n");
    assert_eq!(result, Err(ParseError::MalformedRequest));
}

#[test]
fn test_non_utf8_target_is_malformed() {
    let result = parse_request(b"GET /\xff\xfe HTTP/1.1\r\n");
    assert_eq!(result, Err(ParseError::MalformedRequest));
}

#[test]
fn test_dotdot_target_is_passed_through() {
    let req = parse_request(b"GET .. HTTP/1.1\r\n").unwrap();
    assert_eq!(req.target, "..");
}

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("HEAD"), Method::Unsupported);
}
