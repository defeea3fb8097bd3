//! Integration tests for questrade-rs
//!
//! The suite runs without credentials: most tests plug a stub [`Transport`]
//! into the client, and the `loopback_tests` module serves canned HTTP
//! responses from a local socket so the reqwest transport is exercised too.
//!
//! Run with: cargo test --test api_tests

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use questrade_rs::prelude::*;

static INIT: Once = Once::new();

const TOKEN: &str = "token-123";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[derive(Debug, Clone)]
enum Reply {
    Status(u16, String),
    Refused,
}

/// Transport that answers every request with the same reply and records
/// what it was asked.
#[derive(Debug, Clone)]
struct StubTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubTransport {
    fn status(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Status(status, body.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn refused() -> Self {
        Self {
            reply: Reply::Refused,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Status(status, body) => Ok(HttpResponse::new(*status, body.clone())),
            Reply::Refused => Err(TransportError::Connect("Connection refused".to_string())),
        }
    }
}

fn create_client(transport: StubTransport) -> QuestradeClient {
    init_logging();
    let config = ClientConfig::new("https://api01.iq.questrade.com/", TOKEN).unwrap();
    QuestradeClient::with_transport(config, transport)
}

fn test_account() -> AccountNumber {
    AccountNumber::new("26598145")
}

/// Calls every account-scoped operation and reports the outcome kind.
async fn run_every_operation(
    client: &QuestradeClient,
) -> Vec<(&'static str, std::result::Result<(), Error>)> {
    let account = test_account();
    let accounts = client.accounts();
    vec![
        ("list", accounts.list().await.map(|_| ())),
        ("balances", accounts.balances(&account).await.map(|_| ())),
        ("activities", accounts.activities(&account).await.map(|_| ())),
        ("orders", accounts.orders(&account).await.map(|_| ())),
        ("executions", accounts.executions(&account).await.map(|_| ())),
        ("positions", accounts.positions(&account).await.map(|_| ())),
        ("time", client.time().server_time().await.map(|_| ())),
    ]
}

// ============================================================================
// ACCOUNTS SERVICE TESTS
// ============================================================================

mod accounts_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_accounts_returns_payload() {
        let transport = StubTransport::status(200, r#"{"accounts":[{"number":"123"}]}"#);
        let client = create_client(transport.clone());

        let response = client.accounts().list().await.unwrap();
        assert_eq!(response.accounts.len(), 1);
        assert_eq!(response.accounts[0].number.as_str(), "123");

        let request = transport.last_request();
        assert_eq!(request.url.path(), "/v1/accounts");
        assert_eq!(request.url.query(), None);
    }

    #[tokio::test]
    async fn test_every_request_carries_bearer_token() {
        let transport = StubTransport::status(200, "{}");
        let client = create_client(transport.clone());

        run_every_operation(&client).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 7);
        for request in requests {
            let auth = request.headers.get("authorization").expect("missing Authorization");
            assert_eq!(auth.to_str().unwrap(), format!("Bearer {}", TOKEN));
        }
    }

    #[tokio::test]
    async fn test_each_operation_uses_its_own_resource() {
        let transport = StubTransport::status(200, "{}");
        let client = create_client(transport.clone());

        run_every_operation(&client).await;

        let paths: Vec<String> = transport
            .requests()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/v1/accounts",
                "/v1/accounts/26598145/balances",
                "/v1/accounts/26598145/activities",
                "/v1/accounts/26598145/orders",
                "/v1/accounts/26598145/executions",
                "/v1/accounts/26598145/positions",
                "/v1/time",
            ]
        );
    }

    #[tokio::test]
    async fn test_account_number_embedded_in_path() {
        let transport = StubTransport::status(200, r#"{"positions": []}"#);
        let client = create_client(transport.clone());

        for id in ["1", "26598145", "ABC-123", "51234567_x"] {
            client
                .accounts()
                .positions(&AccountNumber::new(id))
                .await
                .unwrap();
            let path = transport.last_request().url.path().to_string();
            assert!(path.contains(id), "{} not in {}", id, path);
        }
    }

    #[tokio::test]
    async fn test_dot_account_numbers_rejected() {
        let transport = StubTransport::status(200, r#"{"positions": []}"#);
        let client = create_client(transport.clone());

        for id in ["", ".", ".."] {
            let err = client
                .accounts()
                .positions(&AccountNumber::new(id))
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "got {:?}", err);
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_balances_decoded() {
        let body = r#"{
            "perCurrencyBalances": [{"currency": "CAD", "cash": 100.5, "isRealTime": true}],
            "combinedBalances": [{"currency": "USD", "totalEquity": 80}],
            "sodPerCurrencyBalances": [],
            "sodCombinedBalances": []
        }"#;
        let client = create_client(StubTransport::status(200, body));

        let balances = client.accounts().balances(&test_account()).await.unwrap();
        let cad = balances.per_currency(Currency::Cad).unwrap();
        assert_eq!(cad.cash, Some(rust_decimal_macros::dec!(100.5)));
        assert!(cad.is_real_time);
        assert!(balances.combined_in(Currency::Usd).is_some());
    }

    #[tokio::test]
    async fn test_empty_collection_is_a_real_success() {
        let client = create_client(StubTransport::status(200, r#"{"orders": []}"#));

        let orders = client.accounts().orders(&test_account()).await.unwrap();
        assert!(orders.orders.is_empty());
    }

    #[tokio::test]
    async fn test_activities_between_sends_range() {
        let transport = StubTransport::status(200, r#"{"activities": []}"#);
        let client = create_client(transport.clone());
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(30);

        client
            .accounts()
            .activities_between(&test_account(), start, end)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.url.path(), "/v1/accounts/26598145/activities");
        let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("startTime".to_string(), "2024-01-01T00:00:00+00:00".to_string()),
                ("endTime".to_string(), "2024-01-31T00:00:00+00:00".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_inverted_range_sends_nothing() {
        let transport = StubTransport::status(200, r#"{"executions": []}"#);
        let client = create_client(transport.clone());
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let err = client
            .accounts()
            .executions_between(&test_account(), end + Duration::days(1), end)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_orders_filtered() {
        let body = r#"{"orders": [{"id": 1, "symbol": "AAPL", "state": "Accepted", "side": "Buy"}]}"#;
        let transport = StubTransport::status(200, body);
        let client = create_client(transport.clone());

        let query = OrdersQuery::new().state(OrderStateFilter::Open);
        let orders = client
            .accounts()
            .orders_filtered(&test_account(), &query)
            .await
            .unwrap();
        assert_eq!(orders.orders[0].state, Some(OrderState::Accepted));
        assert_eq!(transport.last_request().url.query(), Some("stateFilter=Open"));
    }

    #[tokio::test]
    async fn test_raw_payload_untouched() {
        let body = r#"{"positions": [{"symbol": "XYZ", "futureField": [1, 2, 3]}]}"#;
        let client = create_client(StubTransport::status(200, body));

        let raw = client
            .accounts()
            .raw(&test_account(), AccountResource::Positions)
            .await
            .unwrap();
        assert_eq!(raw, serde_json::from_str::<serde_json::Value>(body).unwrap());
    }
}

// ============================================================================
// SERVER TIME TESTS
// ============================================================================

mod time_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_time_unmodified() {
        let transport = StubTransport::status(200, r#"{"time":"2024-01-01T00:00:00Z"}"#);
        let client = create_client(transport.clone());

        let time = client.time().server_time().await.unwrap();
        assert_eq!(time, "2024-01-01T00:00:00Z");
        assert_eq!(transport.last_request().url.path(), "/v1/time");
    }

    #[tokio::test]
    async fn test_server_datetime() {
        let body = r#"{"time":"2014-10-24T12:14:42.730000-04:00"}"#;
        let client = create_client(StubTransport::status(200, body));

        let time = client.time().server_datetime().await.unwrap();
        assert_eq!(
            time.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2014, 10, 24, 16, 14, 42).unwrap()
                + Duration::milliseconds(730)
        );
    }

    #[tokio::test]
    async fn test_malformed_server_datetime_is_decode_error() {
        let body = r#"{"time":"yesterday"}"#;
        let client = create_client(StubTransport::status(200, body));

        let err = client.time().server_datetime().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.path(), Some("time"));
        match err {
            Error::Decode { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("Expected Decode error, got {:?}", other),
        }

        // The unparsed string is still available as sent.
        assert_eq!(client.time().server_time().await.unwrap(), "yesterday");
    }

    #[tokio::test]
    async fn test_missing_time_field_is_decode_error() {
        let client = create_client(StubTransport::status(200, r#"{"now": 1}"#));

        let err = client.time().server_time().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.path(), Some("time"));
    }
}

// ============================================================================
// ERROR HANDLING TESTS
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_unauthorized_is_protocol_error_everywhere() {
        let body = r#"{"code": 1017, "message": "Access token is invalid"}"#;
        let client = create_client(StubTransport::status(401, body));

        for (name, outcome) in run_every_operation(&client).await {
            let err = outcome.expect_err(name);
            assert_eq!(err.kind(), ErrorKind::Protocol, "{}", name);
            assert_eq!(err.status(), Some(401), "{}", name);
            assert!(err.is_auth_error(), "{}", name);
            match err {
                Error::Api { code, message, .. } => {
                    assert_eq!(code, Some(1017));
                    assert_eq!(message, "Access token is invalid");
                }
                other => panic!("{}: expected Api error, got {:?}", name, other),
            }
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = create_client(StubTransport::refused());

        for (name, outcome) in run_every_operation(&client).await {
            let err = outcome.expect_err(name);
            assert_eq!(err.kind(), ErrorKind::Transport, "{}", name);
            assert_eq!(err.status(), None, "{}", name);
        }
    }

    #[tokio::test]
    async fn test_error_carries_path() {
        let client = create_client(StubTransport::status(404, ""));

        let err = client
            .accounts()
            .executions(&test_account())
            .await
            .unwrap_err();
        assert_eq!(err.path(), Some("accounts/26598145/executions"));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_same_query_twice_same_outcome() {
        let client = create_client(StubTransport::status(200, r#"{"accounts":[{"number":"123"}]}"#));
        let first = client.accounts().list().await.unwrap();
        let second = client.accounts().list().await.unwrap();
        assert_eq!(first, second);

        let client = create_client(StubTransport::status(503, "busy"));
        let first = client.accounts().list().await.unwrap_err();
        let second = client.accounts().list().await.unwrap_err();
        assert_eq!(first.kind(), second.kind());
        assert_eq!(first.status(), second.status());
        assert_eq!(first.path(), second.path());
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn test_concurrent_queries_share_client() {
        let transport = StubTransport::status(200, r#"{"accounts":[{"number":"123"}]}"#);
        let client = create_client(transport.clone());
        let other = client.clone();

        let (first, second) = (client.accounts(), other.accounts());
        let (a, b) = tokio::join!(first.list(), second.list());
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(transport.requests().len(), 2);
    }
}

// ============================================================================
// LOOPBACK TESTS (real reqwest transport)
// ============================================================================

mod loopback_tests {
    use super::*;

    /// Serve one canned HTTP response; the handle yields the request head.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).to_string()
        });

        (base_url, handle)
    }

    fn reqwest_client(base_url: &str) -> QuestradeClient {
        init_logging();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        QuestradeClient::with_transport(
            ClientConfig::new(base_url, TOKEN).unwrap(),
            ReqwestTransport::from_client(http),
        )
    }

    #[tokio::test]
    async fn test_reqwest_success() {
        let (base_url, server) = serve_once("200 OK", r#"{"time":"2024-01-01T00:00:00Z"}"#).await;
        let client = reqwest_client(&base_url);

        let time = client.time().server_time().await.unwrap();
        assert_eq!(time, "2024-01-01T00:00:00Z");

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /v1/time http/1.1"), "{}", head);
        assert!(head.contains(&format!("authorization: bearer {}", TOKEN)), "{}", head);
    }

    #[tokio::test]
    async fn test_reqwest_server_error() {
        let (base_url, server) = serve_once(
            "500 Internal Server Error",
            r#"{"code": 1000, "message": "Internal server error"}"#,
        )
        .await;
        let client = reqwest_client(&base_url);

        let err = client.accounts().balances(&test_account()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert!(err.is_server_error());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_reqwest_connection_refused() {
        // Bind then drop to obtain a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let client = reqwest_client(&base_url);
        let err = client.accounts().list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.path(), Some("accounts"));
    }
}
