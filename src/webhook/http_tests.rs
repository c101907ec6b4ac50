//! Tests for HTTP request/response types.

use super::mock::MockClient;
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn url() -> url::Url {
    url::Url::parse("https://example.com/api").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_starts_without_headers_or_body() {
        let req = HttpRequest::new(http::Method::PUT, url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_and_post_set_method() {
        assert_eq!(HttpRequest::get(url()).method, http::Method::GET);
        assert_eq!(HttpRequest::post(url()).method, http::Method::POST);
    }

    #[test]
    fn builder_sets_body_and_headers() {
        let req = HttpRequest::post(url())
            .with_body(b"data".to_vec())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.body, Some(b"data".to_vec()));
        assert_eq!(
            req.headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn with_header_appends_repeated_names() {
        let req = HttpRequest::get(url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    fn response(status: http::StatusCode, body: Vec<u8>) -> HttpResponse {
        HttpResponse::new(status, http::HeaderMap::new(), body)
    }

    #[test]
    fn is_success_only_for_2xx() {
        assert!(response(http::StatusCode::OK, vec![]).is_success());
        assert!(response(http::StatusCode::NO_CONTENT, vec![]).is_success());
        assert!(!response(http::StatusCode::MOVED_PERMANENTLY, vec![]).is_success());
        assert!(!response(http::StatusCode::INTERNAL_SERVER_ERROR, vec![]).is_success());
    }

    #[test]
    fn body_text_decodes_utf8() {
        let resp = response(http::StatusCode::OK, b"hello".to_vec());
        assert_eq!(resp.body_text(), Some("hello"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let resp = response(http::StatusCode::OK, vec![0xFF, 0xFE]);
        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn connection_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = HttpError::Connection(Box::new(inner));

        assert!(error.to_string().contains("refused"));
        assert!(error.source().is_some());
    }

    #[test]
    fn invalid_url_displays_reason() {
        let error = HttpError::InvalidUrl("no host".to_string());
        assert_eq!(error.to_string(), "Invalid URL: no host");
    }
}

mod mock_client {
    use super::*;

    #[tokio::test]
    async fn replays_responses_then_times_out() {
        let client = MockClient::responding(201, "ok");

        let first = client.request(HttpRequest::get(url())).await.unwrap();
        let second = client.request(HttpRequest::get(url())).await;

        assert_eq!(first.status, http::StatusCode::CREATED);
        assert!(matches!(second, Err(HttpError::Timeout)));
        assert_eq!(client.captured().len(), 2);
    }
}
