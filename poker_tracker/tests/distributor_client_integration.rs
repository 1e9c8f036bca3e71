//! Integration tests for the distributor client.
//!
//! A bare TCP listener on an ephemeral port stands in for the distributor so
//! each failure mode (bad payload, slow answer, error status, refused
//! connection) can be produced on demand.

use poker_tracker::roster::{
    DistributorClient, DistributorConfig, RosterError, RosterPolicy, RosterSource,
};
use poker_tracker::table::{TableManager, TrackerError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const ROSTER_ALICE: &str = r#"{"players":["alice"]}"#;
const PLAYERS_NOT_A_LIST: &str = r#"{"players":"alice"}"#;

/// Canned answer of the fake distributor
#[derive(Clone)]
struct Reply {
    status: &'static str,
    body: &'static str,
    delay: Duration,
}

impl Reply {
    fn ok(body: &'static str) -> Self {
        Self {
            status: "200 OK",
            body,
            delay: Duration::ZERO,
        }
    }

    fn slow(body: &'static str, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::ok(body)
        }
    }
}

/// Fake distributor whose reply can be swapped between requests
struct FakeDistributor {
    url: String,
    reply: Arc<Mutex<Reply>>,
}

impl FakeDistributor {
    async fn spawn(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let reply = Arc::new(Mutex::new(reply));

        let shared = reply.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let reply = shared.lock().unwrap().clone();
                tokio::spawn(answer(stream, reply));
            }
        });

        Self { url, reply }
    }

    fn set(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    fn client(&self, timeout_secs: u64) -> DistributorClient {
        DistributorClient::new(DistributorConfig {
            base_url: self.url.clone(),
            timeout_secs,
        })
        .unwrap()
    }
}

async fn answer(mut stream: TcpStream, reply: Reply) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    tokio::time::sleep(reply.delay).await;
    let response = format!(
        "HTTP/1.1 {}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

// === Client Error Mapping Tests ===

#[tokio::test]
async fn test_well_formed_roster_is_returned() {
    let fake = FakeDistributor::spawn(Reply::ok(r#"{"players":["alice","bob"]}"#)).await;

    let names = fake.client(2).fetch_players().await.unwrap();
    assert_eq!(names, vec!["alice".to_string(), "bob".to_string()]);
}

#[tokio::test]
async fn test_players_not_a_list_is_payload_error() {
    let fake = FakeDistributor::spawn(Reply::ok(PLAYERS_NOT_A_LIST)).await;

    let err = fake.client(2).fetch_players().await.unwrap_err();
    assert!(matches!(err, RosterError::Payload(_)), "got {err:?}");
}

#[tokio::test]
async fn test_non_json_body_is_payload_error() {
    let fake = FakeDistributor::spawn(Reply::ok("<html>oops</html>")).await;

    let err = fake.client(2).fetch_players().await.unwrap_err();
    assert!(matches!(err, RosterError::Payload(_)), "got {err:?}");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let fake = FakeDistributor::spawn(Reply {
        status: "503 Service Unavailable",
        ..Reply::ok("{}")
    })
    .await;

    let err = fake.client(2).fetch_players().await.unwrap_err();
    assert!(matches!(err, RosterError::Status(503)), "got {err:?}");
}

#[tokio::test]
async fn test_slow_distributor_times_out() {
    let fake = FakeDistributor::spawn(Reply::slow(ROSTER_ALICE, Duration::from_secs(3))).await;

    let started = Instant::now();
    let err = fake.client(1).fetch_players().await.unwrap_err();

    assert!(matches!(err, RosterError::Timeout(1)), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DistributorClient::new(DistributorConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    })
    .unwrap();

    let err = client.fetch_players().await.unwrap_err();
    assert!(matches!(err, RosterError::Transport(_)), "got {err:?}");
}

// === Roster Policy Tests ===

/// Manager that has already seated `alice` from `fake`
async fn seated_manager(fake: &FakeDistributor, policy: RosterPolicy) -> TableManager {
    let manager = TableManager::new(Arc::new(fake.client(1)), policy);
    let sync = manager.sync_roster().await.unwrap();
    assert!(!sync.stale);
    assert_eq!(sync.players.len(), 3);
    manager
}

#[tokio::test]
async fn test_malformed_payload_degrades_to_current_roster() {
    let fake = FakeDistributor::spawn(Reply::ok(ROSTER_ALICE)).await;
    let manager = seated_manager(&fake, RosterPolicy::Degrade).await;
    let before = manager.active_players().await;

    fake.set(Reply::ok(PLAYERS_NOT_A_LIST));
    let sync = manager.sync_roster().await.unwrap();

    assert!(sync.stale);
    assert_eq!(sync.players, before);
}

#[tokio::test]
async fn test_malformed_payload_fails_under_fail_policy() {
    let fake = FakeDistributor::spawn(Reply::ok(ROSTER_ALICE)).await;
    let manager = seated_manager(&fake, RosterPolicy::Fail).await;

    fake.set(Reply::ok(PLAYERS_NOT_A_LIST));
    let err = manager.sync_roster().await.unwrap_err();

    assert!(matches!(err, TrackerError::UpstreamUnavailable(_)));
    assert_eq!(err.client_message(), "Failed to fetch players");
    assert_eq!(manager.player_count().await, 3);
}

#[tokio::test]
async fn test_timeout_degrades_to_current_roster() {
    let fake = FakeDistributor::spawn(Reply::ok(ROSTER_ALICE)).await;
    let manager = seated_manager(&fake, RosterPolicy::Degrade).await;
    let before = manager.active_players().await;

    fake.set(Reply::slow(r#"{"players":["bob"]}"#, Duration::from_secs(3)));
    let sync = manager.sync_roster().await.unwrap();

    assert!(sync.stale);
    assert_eq!(sync.players, before);
}

#[tokio::test]
async fn test_timeout_fails_under_fail_policy() {
    let fake = FakeDistributor::spawn(Reply::ok(ROSTER_ALICE)).await;
    let manager = seated_manager(&fake, RosterPolicy::Fail).await;

    fake.set(Reply::slow(r#"{"players":["bob"]}"#, Duration::from_secs(3)));
    let err = manager.sync_roster().await.unwrap_err();

    assert!(matches!(err, TrackerError::UpstreamUnavailable(_)));
    assert_eq!(manager.player_count().await, 3);
}
