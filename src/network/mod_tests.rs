//! Tests for the production network inspector.

use std::sync::Arc;

use super::*;
use crate::webhook::HttpError;
use crate::webhook::mock::MockClient;

fn echo_url() -> url::Url {
    url::Url::parse("https://echo.example/get").unwrap()
}

fn inspector(client: &Arc<MockClient>) -> HostNetwork<Arc<MockClient>> {
    HostNetwork::with_client(Arc::clone(client), echo_url())
}

mod public_address {
    use super::*;

    #[tokio::test]
    async fn returns_origin_field() {
        let client = Arc::new(MockClient::responding(
            200,
            r#"{"args": {}, "headers": {}, "origin": "1.2.3.4", "url": "https://echo.example/get"}"#,
        ));

        let address = inspector(&client).public_address().await.unwrap();

        assert_eq!(address, "1.2.3.4");
    }

    #[tokio::test]
    async fn issues_single_get_to_echo_url() {
        let client = Arc::new(MockClient::responding(200, r#"{"origin": "1.2.3.4"}"#));

        inspector(&client).public_address().await.unwrap();

        let requests = client.captured();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(requests[0].url, echo_url());
    }

    #[tokio::test]
    async fn keeps_proxy_chain_verbatim() {
        let client = Arc::new(MockClient::responding(
            200,
            r#"{"origin": "1.2.3.4, 10.0.0.1"}"#,
        ));

        let address = inspector(&client).public_address().await.unwrap();

        assert_eq!(address, "1.2.3.4, 10.0.0.1");
    }

    #[tokio::test]
    async fn non_success_status_is_error() {
        let client = Arc::new(MockClient::responding(503, "unavailable"));

        let err = inspector(&client).public_address().await.unwrap_err();

        assert!(matches!(err, NetworkError::Status(s) if s == http::StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn connection_failure_is_error() {
        let client = Arc::new(MockClient::failing(HttpError::Timeout));

        let err = inspector(&client).public_address().await.unwrap_err();

        assert!(matches!(err, NetworkError::Request(HttpError::Timeout)));
    }

    #[tokio::test]
    async fn missing_origin_is_malformed() {
        let client = Arc::new(MockClient::responding(200, r#"{"ip": "1.2.3.4"}"#));

        let err = inspector(&client).public_address().await.unwrap_err();

        assert!(matches!(err, NetworkError::Malformed(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let client = Arc::new(MockClient::responding(200, "<html>oops</html>"));

        let err = inspector(&client).public_address().await.unwrap_err();

        assert!(matches!(err, NetworkError::Malformed(_)));
    }
}

mod local_addresses {
    use super::*;

    #[test]
    fn result_is_sorted() {
        let client = Arc::new(MockClient::default());

        let addresses = inspector(&client).local_addresses().unwrap();

        let mut sorted = addresses.clone();
        sorted.sort();
        assert_eq!(addresses, sorted);
    }

    #[test]
    fn does_not_touch_http() {
        let client = Arc::new(MockClient::default());

        let _ = inspector(&client).local_addresses();

        assert!(client.captured().is_empty());
    }
}

mod network_error {
    use super::*;

    #[test]
    fn interface_error_displays_cause() {
        let err = NetworkError::Interface(std::io::Error::other("unsupported"));

        assert!(err.to_string().contains("enumerate network interfaces"));
    }

    #[test]
    fn malformed_displays_reason() {
        let err = NetworkError::Malformed("missing field `origin`".to_string());
        assert!(err.to_string().contains("missing field `origin`"));
    }
}
