//! Client for the auth service endpoints. Every request carries the session
//! cookie jar and `Accept: application/json`; nothing is cached and nothing
//! is retried, so each call is one independent round trip.

use super::{
    diagnostics::{Diagnostic, DiagnosticSink, TracingSink},
    error::AuthError,
    navigation::Navigator,
    types::{Provider, SessionResponse},
};
use crate::config::AuthConfig;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{cookie::Jar, header::ACCEPT, Client};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};
use url::{ParseError, Url};

const SIGN_IN_PATH: &str = "/api/auth/sign-in";
const SESSION_PATH: &str = "/api/auth/session";
const SIGN_OUT_PATH: &str = "/api/auth/sign-out";
const JSON: &str = "application/json";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, as `encodeURIComponent`.
const CALLBACK_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where `sign_out` navigates when no target is given.
pub const SIGN_OUT_DEFAULT_REDIRECT: &str = "/";

/// Outcome of a session lookup before failures are folded into the sentinel.
#[derive(Debug)]
pub enum SessionLookup {
    Fetched(SessionResponse),
    Failed(AuthError),
}

impl SessionLookup {
    /// Collapses a failure into the signed-out sentinel.
    #[must_use]
    pub fn into_response(self) -> SessionResponse {
        match self {
            SessionLookup::Fetched(response) => response,
            SessionLookup::Failed(_) => SessionResponse::signed_out(),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionLookup::Failed(_))
    }
}

/// Stateless client for one auth origin. Clones share the connection pool
/// and the cookie jar.
#[derive(Clone)]
pub struct SessionClient {
    config: AuthConfig,
    http: Client,
    cookies: Arc<Jar>,
    navigator: Option<Arc<dyn Navigator>>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SessionClient {
    /// Builds a client with no navigator and the tracing diagnostic sink.
    /// # Errors
    /// Returns [`AuthError::Config`] if the HTTP client cannot be built.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let cookies = Arc::new(Jar::default());

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .cookie_provider(Arc::clone(&cookies));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| AuthError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http,
            cookies,
            navigator: None,
            diagnostics: Arc::new(TracingSink),
        })
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Seeds the cookie jar with a session token for the auth origin.
    ///
    /// The jar is shared with every clone of this client, earlier or later,
    /// the same way a browser shares cookies between tabs. Build a separate
    /// client with [`SessionClient::new`] to hold different credentials.
    #[must_use]
    pub fn with_session_cookie(self, token: &str) -> Self {
        let cookie = format!("{}={}; Path=/", self.config.session_cookie_name, token);
        self.cookies.add_cookie_str(&cookie, &self.config.base_url);
        self
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Builds the provider sign-in URL with `callback_url` percent-encoded.
    #[must_use]
    pub fn sign_in_url(&self, provider: Provider, callback_url: &str) -> String {
        let url = format!(
            "{}{SIGN_IN_PATH}/{}?callbackURL={}",
            self.config.origin(),
            provider.as_str(),
            utf8_percent_encode(callback_url, CALLBACK_ENCODE_SET)
        );
        debug!("sign-in URL: {}", url);
        url
    }

    /// Navigates to the provider sign-in endpoint. Without a callback URL the
    /// current location is used so the user returns to where they started.
    /// # Errors
    /// Returns [`AuthError::Environment`] without a navigator or current
    /// location, and [`AuthError::InvalidCallbackUrl`] for malformed callbacks.
    pub fn sign_in(&self, provider: Provider, callback_url: Option<&str>) -> Result<(), AuthError> {
        let navigator = self.navigator("sign_in")?;

        let callback = match callback_url.filter(|url| !url.is_empty()) {
            Some(url) => {
                validate_callback_url(url)?;
                url.to_string()
            }
            None => navigator
                .current_location()
                .filter(|location| !location.is_empty())
                .ok_or(AuthError::Environment("sign_in"))?,
        };

        navigator.navigate(&self.sign_in_url(provider, &callback));
        Ok(())
    }

    /// Fetches the session and reports the outcome explicitly.
    pub async fn lookup_session(&self) -> SessionLookup {
        let url = self.config.endpoint(SESSION_PATH);
        let span = info_span!("auth.session", http.method = "GET", url = %url);

        match self.request_session(&url).instrument(span).await {
            Ok(response) => SessionLookup::Fetched(response),
            Err(err) => {
                let diagnostic = match &err {
                    AuthError::Http { status } => Diagnostic::SessionRejected {
                        url: url.clone(),
                        status: *status,
                    },
                    other => Diagnostic::SessionFetchFailed {
                        url: url.clone(),
                        reason: other.to_string(),
                    },
                };
                self.diagnostics.report(diagnostic);
                SessionLookup::Failed(err)
            }
        }
    }

    /// Fetches the current session. Any failure reads as signed out.
    pub async fn fetch_session(&self) -> SessionResponse {
        self.lookup_session().await.into_response()
    }

    /// Ends the session on the server, then navigates to `redirect_to`
    /// (default `/`). The navigation happens whatever the POST outcome.
    /// # Errors
    /// Returns [`AuthError::Environment`] without a navigator; no request is sent.
    pub async fn sign_out(&self, redirect_to: Option<&str>) -> Result<(), AuthError> {
        let navigator = self.navigator("sign_out")?;
        let target = redirect_to.unwrap_or(SIGN_OUT_DEFAULT_REDIRECT);

        let url = self.config.endpoint(SIGN_OUT_PATH);
        let span = info_span!("auth.sign_out", http.method = "POST", url = %url);
        let result = self
            .http
            .post(&url)
            .header(ACCEPT, JSON)
            .send()
            .instrument(span)
            .await;

        match result {
            Ok(response) if response.status().is_success() => debug!("session ended"),
            Ok(response) => self.diagnostics.report(Diagnostic::SignOutRejected {
                url,
                status: response.status().as_u16(),
            }),
            Err(err) => self.diagnostics.report(Diagnostic::SignOutFailed {
                url,
                reason: AuthError::from_request(&err).to_string(),
            }),
        }

        navigator.navigate(target);
        Ok(())
    }

    /// True when the session endpoint reports a user.
    pub async fn is_authenticated(&self) -> bool {
        self.fetch_session().await.is_authenticated()
    }

    async fn request_session(&self, url: &str) -> Result<SessionResponse, AuthError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(|err| AuthError::from_request(&err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Http {
                status: status.as_u16(),
            });
        }

        // `null` means no session; field shapes are not trusted.
        let body: Value = response
            .json()
            .await
            .map_err(|err| AuthError::from_request(&err))?;

        Ok(SessionResponse::from_value(body))
    }

    fn navigator(&self, operation: &'static str) -> Result<&Arc<dyn Navigator>, AuthError> {
        self.navigator
            .as_ref()
            .ok_or(AuthError::Environment(operation))
    }
}

/// Accepts absolute URLs and relative references.
fn validate_callback_url(url: &str) -> Result<(), AuthError> {
    let invalid = |reason: String| AuthError::InvalidCallbackUrl {
        url: url.to_string(),
        reason,
    };

    match Url::parse(url) {
        Ok(_) => Ok(()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/").map_err(|err| invalid(err.to_string()))?;
            base.join(url)
                .map(|_| ())
                .map_err(|err| invalid(err.to_string()))
        }
        Err(err) => Err(invalid(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryNavigator, MemorySink};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(base_url: &str) -> SessionClient {
        SessionClient::new(AuthConfig::with_base_url(base_url).unwrap()).unwrap()
    }

    #[test]
    fn sign_in_url_matches_auth_service_format() {
        let client = SessionClient::new(AuthConfig::default()).unwrap();
        assert_eq!(
            client.sign_in_url(Provider::GitHub, "https://myapp.grove.place/dashboard"),
            "https://auth-api.grove.place/api/auth/sign-in/github?callbackURL=https%3A%2F%2Fmyapp.grove.place%2Fdashboard"
        );
    }

    #[test]
    fn sign_in_url_encodes_spaces_and_queries() {
        let client = SessionClient::new(AuthConfig::default()).unwrap();
        let url = client.sign_in_url(Provider::Google, "/docs?q=a b&x=1");
        assert!(url.ends_with("callbackURL=%2Fdocs%3Fq%3Da%20b%26x%3D1"));
    }

    #[test]
    fn sign_in_url_leaves_uri_component_marks_alone() {
        let client = SessionClient::new(AuthConfig::default()).unwrap();
        let url = client.sign_in_url(Provider::Google, "/a(b)!'*~-_.c");
        assert!(url.ends_with("callbackURL=%2Fa(b)!'*~-_.c"));

        let url = client.sign_in_url(Provider::Google, "/caf\u{e9}#top");
        assert!(url.ends_with("callbackURL=%2Fcaf%C3%A9%23top"));
    }

    #[test]
    fn validate_callback_url_accepts_absolute_and_relative() {
        assert!(validate_callback_url("https://myapp.grove.place/dashboard").is_ok());
        assert!(validate_callback_url("/dashboard?tab=1").is_ok());
        assert!(validate_callback_url("settings").is_ok());
    }

    #[test]
    fn validate_callback_url_rejects_broken_urls() {
        assert!(matches!(
            validate_callback_url("https://"),
            Err(AuthError::InvalidCallbackUrl { .. })
        ));
        assert!(matches!(
            validate_callback_url("http://[::1"),
            Err(AuthError::InvalidCallbackUrl { .. })
        ));
    }

    #[test]
    fn sign_in_falls_back_to_current_location_for_empty_callback() {
        let navigator = Arc::new(MemoryNavigator::new("https://myapp.grove.place/page"));
        let client = SessionClient::new(AuthConfig::default())
            .unwrap()
            .with_navigator(navigator.clone());

        client.sign_in(Provider::Google, Some("")).unwrap();

        assert_eq!(
            navigator.last_navigation().as_deref(),
            Some("https://auth-api.grove.place/api/auth/sign-in/google?callbackURL=https%3A%2F%2Fmyapp.grove.place%2Fpage")
        );
    }

    #[test]
    fn sign_in_without_location_is_an_environment_error() {
        let navigator = Arc::new(MemoryNavigator::detached());
        let client = SessionClient::new(AuthConfig::default())
            .unwrap()
            .with_navigator(navigator.clone());

        let result = client.sign_in(Provider::Google, None);

        assert!(matches!(result, Err(AuthError::Environment("sign_in"))));
        assert!(navigator.history().is_empty());
    }

    #[test]
    fn sign_in_rejects_invalid_callback_without_navigating() {
        let navigator = Arc::new(MemoryNavigator::new("/"));
        let client = SessionClient::new(AuthConfig::default())
            .unwrap()
            .with_navigator(navigator.clone());

        let result = client.sign_in(Provider::GitHub, Some("https://"));

        assert!(matches!(result, Err(AuthError::InvalidCallbackUrl { .. })));
        assert!(navigator.history().is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_session_cookie() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .and(header("cookie", "better-auth.session_token=tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": "u1", "email": "a@b.com" },
                "session": { "id": "s1", "userId": "u1" }
            })))
            .expect(2)
            .mount(&server)
            .await;

        let plain = client_for(&server.uri());
        let seeded = plain.clone().with_session_cookie("tok123");

        assert!(seeded.is_authenticated().await);
        assert!(plain.is_authenticated().await);
    }

    #[tokio::test]
    async fn lookup_session_sends_cookie_and_accept_header() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .and(header("accept", "application/json"))
            .and(header("cookie", "better-auth.session_token=tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "id": "u1",
                    "email": "a@b.com",
                    "name": "A",
                    "image": "https://cdn.grove.place/a.png",
                    "emailVerified": false,
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
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri()).with_session_cookie("tok123");

        match client.lookup_session().await {
            SessionLookup::Fetched(response) => {
                let user = response.user.expect("user");
                assert_eq!(user.image.as_deref(), Some("https://cdn.grove.place/a.png"));
                assert_eq!(response.session.map(|s| s.id), Some("s1".to_string()));
            }
            SessionLookup::Failed(err) => panic!("unexpected failure: {err}"),
        }
    }

    #[tokio::test]
    async fn lookup_session_treats_null_body_as_signed_out() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("null", "application/json"),
            )
            .mount(&server)
            .await;

        let sink = Arc::new(MemorySink::new());
        let client = client_for(&server.uri()).with_diagnostics(sink.clone());

        let lookup = client.lookup_session().await;
        assert!(!lookup.is_failure());
        assert_eq!(lookup.into_response(), SessionResponse::signed_out());
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn lookup_session_reports_rejections() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/session"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let sink = Arc::new(MemorySink::new());
        let client = client_for(&server.uri()).with_diagnostics(sink.clone());

        let lookup = client.lookup_session().await;
        assert!(matches!(
            lookup,
            SessionLookup::Failed(AuthError::Http { status: 401 })
        ));
        assert!(matches!(
            sink.events().as_slice(),
            [Diagnostic::SessionRejected { status: 401, .. }]
        ));
    }

    #[tokio::test]
    async fn sign_out_without_navigator_sends_nothing() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/sign-out"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let result = client.sign_out(Some("/bye")).await;

        assert!(matches!(result, Err(AuthError::Environment("sign_out"))));
    }
}
