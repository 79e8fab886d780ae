use cinelog::api::RemoteApi;
use cinelog::app::App;
use cinelog::error::ApiError;
use cinelog::session::{SessionManager, SessionState};
use cinelog::store::{KEY_TOKEN, KeyValueStore};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Nothing listens here; every request fails fast with a transport error.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn test_store() -> (TempDir, KeyValueStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = KeyValueStore::with_root(dir.path().to_path_buf());
    (dir, store)
}

// Minimal backend for a token that stops being accepted mid-session: the
// stats probe passes so verification succeeds, every other request is
// rejected with 401.
async fn expiring_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]).to_string();
                let response = if head.starts_with("GET /movies/stats") {
                    let body = concat!(
                        "{\"total\":0,\"watched\":0,\"watching\":0,",
                        "\"want_to_watch\":0,\"favorites\":0,",
                        "\"user_info\":{\"username\":\"alice\",\"role\":\"USER\"}}"
                    );
                    format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                         content-length: {}\r\nconnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    )
                } else {
                    "HTTP/1.1 401 Unauthorized\r\ncontent-length: 0\r\n\
                     connection: close\r\n\r\n"
                        .to_string()
                };
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_initialize_without_token_goes_logged_out() {
    let (_dir, store) = test_store();
    let mut api = RemoteApi::new(UNREACHABLE);
    let mut session = SessionManager::new(store);

    assert_eq!(*session.state(), SessionState::Uninitialized);
    session.initialize(&mut api).await.unwrap();

    // No token means no verification attempt and no token installed
    assert_eq!(*session.state(), SessionState::LoggedOut);
    assert!(!session.is_authenticated());
    assert!(!api.has_token());
}

#[tokio::test]
async fn test_initialize_with_stale_token_clears_it() {
    let (_dir, store) = test_store();
    store.set(KEY_TOKEN, &"stale-token".to_string()).await.unwrap();

    let mut api = RemoteApi::new(UNREACHABLE);
    let mut session = SessionManager::new(store.clone());

    // Verification cannot reach the backend; the failure is absorbed into a
    // logged-out transition instead of propagating
    session.initialize(&mut api).await.unwrap();

    assert_eq!(*session.state(), SessionState::LoggedOut);
    assert!(!api.has_token());
    assert!(!store.contains(KEY_TOKEN).await);
}

#[tokio::test]
async fn test_login_rejection_leaves_session_logged_out() {
    let (_dir, store) = test_store();
    let mut api = RemoteApi::new(UNREACHABLE);
    let mut session = SessionManager::new(store.clone());
    session.initialize(&mut api).await.unwrap();

    let result = session
        .login(&mut api, "alice", cinelog::types::Role::User)
        .await;

    assert!(result.is_err());
    assert!(!session.is_authenticated());
    assert!(!store.contains(KEY_TOKEN).await);
}

#[tokio::test]
async fn test_logout_clears_token_and_identity() {
    let (_dir, store) = test_store();
    store.set(KEY_TOKEN, &"some-token".to_string()).await.unwrap();

    let mut api = RemoteApi::new(UNREACHABLE);
    api.set_token("some-token".to_string());
    let mut session = SessionManager::new(store.clone());

    session.logout(&mut api).await;

    assert_eq!(*session.state(), SessionState::LoggedOut);
    assert!(session.user().is_none());
    assert!(!api.has_token());
    assert!(!store.contains(KEY_TOKEN).await);
}

#[tokio::test]
async fn test_expire_behaves_like_logout() {
    let (_dir, store) = test_store();
    store.set(KEY_TOKEN, &"accepted-once".to_string()).await.unwrap();

    let mut api = RemoteApi::new(UNREACHABLE);
    api.set_token("accepted-once".to_string());
    let mut session = SessionManager::new(store.clone());

    session.expire(&mut api).await;

    assert_eq!(*session.state(), SessionState::LoggedOut);
    assert!(!api.has_token());
    assert!(!store.contains(KEY_TOKEN).await);

    // Expiring an already logged-out session stays logged out
    session.expire(&mut api).await;
    assert_eq!(*session.state(), SessionState::LoggedOut);
}

#[tokio::test]
async fn test_initialize_with_accepted_token_logs_in() {
    let (_dir, store) = test_store();
    store.set(KEY_TOKEN, &"still-valid".to_string()).await.unwrap();

    let base_url = expiring_backend().await;
    let mut api = RemoteApi::new(base_url);
    let mut session = SessionManager::new(store);

    session.initialize(&mut api).await.unwrap();

    assert!(session.is_authenticated());
    assert!(api.has_token());
    let user = session.user().unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_rejected_request_expires_session_and_clears_token() {
    let (_dir, store) = test_store();
    store.set(KEY_TOKEN, &"accepted-once".to_string()).await.unwrap();

    let base_url = expiring_backend().await;
    let mut app = App::remote(store.clone(), base_url);

    // The stats probe still passes, so the restored session is live
    app.restore_session().await.unwrap();
    assert!(app.session.is_authenticated());

    // The backend now rejects the token; the 401 surfaces as a session
    // expiry and tears the session down centrally
    let result = app.delete_movie(1).await;
    assert!(matches!(result, Err(ApiError::SessionExpired)));

    assert!(!app.session.is_authenticated());
    assert_eq!(*app.session.state(), SessionState::LoggedOut);
    assert!(!store.contains(KEY_TOKEN).await);
    assert!(app.last_error().is_some());
}
