use serde_json::json;
use std::{net::TcpListener, sync::Arc};
use vineyard::{
    auth::{AuthError, MemoryNavigator, Provider, SessionResponse},
    cli::{actions, globals::GlobalArgs},
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .and(header("cookie", "grove_session=tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "id": "u1",
                "email": "a@b.com",
                "name": "A",
                "emailVerified": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            },
            "session": {
                "id": "s1",
                "userId": "u1",
                "expiresAt": "2024-01-02T00:00:00Z",
                "createdAt": "2024-01-01T00:00:00Z"
            }
        })))
        .mount(server)
        .await;
}

fn globals_for(server: &MockServer, with_cookie: bool) -> GlobalArgs {
    let mut globals = GlobalArgs::new(server.uri());
    globals.cookie_name = "grove_session".to_string();
    if with_cookie {
        globals.set_session_cookie("tok123".to_string().into());
    }
    globals
}

#[tokio::test]
async fn status_reports_signed_in_user() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server).await;

    let globals = globals_for(&server, true);
    let client = globals
        .session_client(Arc::new(MemoryNavigator::detached()))
        .unwrap();

    let mut out = Vec::new();
    actions::status::execute(&client, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "authenticated as a@b.com (session s1)\n"
    );
}

#[tokio::test]
async fn status_without_cookie_reads_signed_out() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let globals = globals_for(&server, false);
    let client = globals
        .session_client(Arc::new(MemoryNavigator::detached()))
        .unwrap();

    let mut out = Vec::new();
    actions::status::execute(&client, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "signed out\n");
}

#[tokio::test]
async fn session_prints_response_json() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    mount_session(&server).await;

    let globals = globals_for(&server, true);
    let client = globals
        .session_client(Arc::new(MemoryNavigator::detached()))
        .unwrap();

    let mut out = Vec::new();
    actions::session::execute(&client, &mut out).await.unwrap();

    let printed: SessionResponse = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed.user.map(|user| user.email), Some("a@b.com".to_string()));
    assert_eq!(printed.session.map(|session| session.id), Some("s1".to_string()));
}

#[tokio::test]
async fn sign_out_action_navigates_even_when_rejected() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/sign-out"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let navigator = Arc::new(MemoryNavigator::new("/account"));
    let client = globals_for(&server, true)
        .session_client(navigator.clone())
        .unwrap();

    actions::sign_out::execute(&client, Some("/bye")).await.unwrap();

    assert_eq!(navigator.history(), vec!["/bye"]);
}

#[test]
fn sign_in_action_needs_a_callback_or_location() {
    let globals = GlobalArgs::new("https://auth-api.grove.place".to_string());
    let navigator = Arc::new(MemoryNavigator::detached());
    let client = globals.session_client(navigator.clone()).unwrap();

    let err = actions::sign_in::execute(&client, Provider::Google, None).unwrap_err();
    assert!(err.to_string().contains("--callback-url"));
    assert!(navigator.history().is_empty());

    actions::sign_in::execute(&client, Provider::Google, Some("/home")).unwrap();
    assert_eq!(
        navigator.history(),
        vec!["https://auth-api.grove.place/api/auth/sign-in/google?callbackURL=%2Fhome"]
    );
}

#[test]
fn sign_in_action_reports_malformed_callback_as_is() {
    let globals = GlobalArgs::new("https://auth-api.grove.place".to_string());
    let navigator = Arc::new(MemoryNavigator::new("https://ivy.grove.place/"));
    let client = globals.session_client(navigator.clone()).unwrap();

    let err = actions::sign_in::execute(&client, Provider::GitHub, Some("https://")).unwrap_err();

    assert!(!err.to_string().contains("--callback-url"), "{err:#}");
    assert!(matches!(
        err.downcast_ref::<AuthError>(),
        Some(AuthError::InvalidCallbackUrl { .. })
    ));
    assert!(navigator.history().is_empty());
}
