//! Integration tests for the Cognito/SSO login engine and token exchanges.
//!
//! **Coverage:**
//! - Full redirect chain against a stubbed broker + SSO, cookie jars kept apart
//! - Missing SSO session cookie, missing SAML input, redirect without code
//! - Single attempt per hop even when retries are configured
//! - `authorization_code` and `refresh_token` grants, including rejected and
//!   malformed bodies
//!
//! **Infrastructure:** one WireMock server plays the broker and the SSO.

#[path = "support.rs"]
mod support;

use serde_json::json;
use uoacal_common::auth::{generate_code_challenge, generate_code_verifier};
use uoacal_core::IdentityProvider;
use uoacal_domain::{HttpConfig, LoginStage, UoaCalError};
use uoacal_infra::integrations::identity::{LoginAttempt, LoginError};
use uoacal_infra::CognitoIdentityProvider;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CALLBACK_CODE: &str = "auth-code-123";

/// Knobs for the stubbed SSO.
struct LoginStub {
    set_session_cookie: bool,
    saml_inputs: &'static str,
    callback: &'static str,
}

impl Default for LoginStub {
    fn default() -> Self {
        Self {
            set_session_cookie: true,
            saml_inputs: r#"<input type="hidden" name="RelayState" value="relay-1"/>
                <input type="hidden" name="SAMLResponse" value="PHNhbWw+"/>"#,
            callback: "https://uoacal.example/callback?code=auth-code-123&state=state",
        }
    }
}

fn saml_page(inputs: &str) -> String {
    format!(
        r#"<html><body onload="document.forms[0].submit()">
            <form action="/saml2/idpresponse" method="post"><div>{inputs}</div></form>
        </body></html>"#
    )
}

async fn mount_login_flow(server: &MockServer, code_verifier: &str, stub: LoginStub) {
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path("/oauth2/authorize/"))
        .and(query_param("response_type", "code"))
        .and(query_param("code_challenge_method", "S256"))
        .and(query_param("code_challenge", generate_code_challenge(code_verifier)))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{uri}/sso/start").as_str())
                .append_header("set-cookie", "XSRF-TOKEN=broker; Path=/; Secure; HttpOnly"),
        )
        .expect(1)
        .mount(server)
        .await;

    // Relative location; resolved against the SSO URL.
    Mock::given(method("GET"))
        .and(path("/sso/start"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/idp/login")
                .append_header("set-cookie", "JSESSIONID=sso-1; Path=/idp"),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/idp/login"))
        .and(header("cookie", "JSESSIONID=sso-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/idp/login"))
        .and(header("cookie", "JSESSIONID=sso-1"))
        .and(body_string_contains("j_username=alice"))
        .and(body_string_contains("j_password=hunter2"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/idp/token"))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/idp/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>token</html>"))
        .expect(1)
        .mount(server)
        .await;

    let mut second_factor = ResponseTemplate::new(200).set_body_string(saml_page(stub.saml_inputs));
    if stub.set_session_cookie {
        second_factor = second_factor.append_header("set-cookie", "shib_idp_session=s3ss; Path=/");
    }
    Mock::given(method("POST"))
        .and(path("/idp/token"))
        .and(body_string_contains("j_token=123456"))
        .and(body_string_contains("rememberMe=on"))
        .respond_with(second_factor)
        .expect(1)
        .mount(server)
        .await;

    // Only the broker's cookies travel back to the broker.
    Mock::given(method("POST"))
        .and(path("/saml2/idpresponse"))
        .and(header("cookie", "XSRF-TOKEN=broker"))
        .and(body_string_contains("RelayState=relay-1"))
        .and(body_string_contains("SAMLResponse=PHNhbWw%2B"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", stub.callback))
        .mount(server)
        .await;
}

async fn attempt(
    server: &MockServer,
    code_verifier: &str,
) -> (Result<String, LoginError>, LoginStage) {
    let config = support::identity_config(server);
    let manual = support::http_client(false);
    let following = support::http_client(true);

    let mut attempt = LoginAttempt::new(&config, &manual, &following);
    let outcome = attempt.run(code_verifier, "alice", "hunter2", "123456").await;
    (outcome, attempt.stage())
}

#[tokio::test]
async fn login_returns_code_from_final_redirect() {
    let server = MockServer::start().await;
    let verifier = generate_code_verifier();
    mount_login_flow(&server, &verifier, LoginStub::default()).await;

    let (outcome, stage) = attempt(&server, &verifier).await;

    assert_eq!(outcome.unwrap(), CALLBACK_CODE);
    assert_eq!(stage, LoginStage::CodeObtained);
}

#[tokio::test]
async fn provider_exposes_code_through_port() {
    let server = MockServer::start().await;
    let verifier = generate_code_verifier();
    mount_login_flow(&server, &verifier, LoginStub::default()).await;

    let provider =
        CognitoIdentityProvider::new(support::identity_config(&server), &HttpConfig::default())
            .unwrap();
    let code =
        provider.get_authorization_code(&verifier, "alice", "hunter2", "123456").await.unwrap();

    assert_eq!(code, CALLBACK_CODE);
}

#[tokio::test]
async fn missing_session_cookie_stops_before_saml_post() {
    let server = MockServer::start().await;
    let verifier = generate_code_verifier();
    let stub = LoginStub { set_session_cookie: false, ..LoginStub::default() };
    mount_login_flow(&server, &verifier, stub).await;

    let (outcome, stage) = attempt(&server, &verifier).await;

    let err = outcome.unwrap_err();
    assert!(matches!(err, LoginError::Login { stage: LoginStage::TokenSubmitted }));
    assert_eq!(stage, LoginStage::Failed);

    let saml_posts = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == "/saml2/idpresponse")
        .count();
    assert_eq!(saml_posts, 0);
}

#[tokio::test]
async fn missing_saml_response_is_a_parse_failure() {
    let server = MockServer::start().await;
    let verifier = generate_code_verifier();
    let stub = LoginStub {
        saml_inputs: r#"<input type="hidden" name="RelayState" value="relay-1"/>"#,
        ..LoginStub::default()
    };
    mount_login_flow(&server, &verifier, stub).await;

    let (outcome, _) = attempt(&server, &verifier).await;

    assert!(matches!(
        outcome,
        Err(LoginError::Parse { stage: LoginStage::SessionEstablished, .. })
    ));
}

#[tokio::test]
async fn redirect_without_code_fails() {
    let server = MockServer::start().await;
    let verifier = generate_code_verifier();
    let stub = LoginStub {
        callback: "https://uoacal.example/callback?error=access_denied",
        ..LoginStub::default()
    };
    mount_login_flow(&server, &verifier, stub).await;

    let (outcome, _) = attempt(&server, &verifier).await;

    assert!(matches!(
        outcome,
        Err(LoginError::Redirect { stage: LoginStage::SamlExtracted, .. })
    ));
}

#[tokio::test]
async fn provider_collapses_login_failures_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/authorize/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("no redirect"))
        .mount(&server)
        .await;

    let provider =
        CognitoIdentityProvider::new(support::identity_config(&server), &HttpConfig::default())
            .unwrap();
    let err = provider
        .get_authorization_code(&generate_code_verifier(), "alice", "hunter2", "123456")
        .await
        .unwrap_err();

    assert!(matches!(err, UoaCalError::Auth(_)));
}

#[tokio::test]
async fn login_hops_are_never_retried() {
    let server = MockServer::start().await;
    let uri = server.uri();
    Mock::given(method("GET"))
        .and(path("/oauth2/authorize/"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{uri}/sso/start").as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sso/start"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/idp/login"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/idp/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/idp/login"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpConfig { max_attempts: 3, ..HttpConfig::default() };
    let provider = CognitoIdentityProvider::new(support::identity_config(&server), &http).unwrap();

    let login = provider
        .get_authorization_code(&generate_code_verifier(), "alice", "hunter2", "123456")
        .await;
    let grant = provider.refresh_token_from_code("verifier", "code").await;

    assert!(matches!(login, Err(UoaCalError::Auth(_))));
    assert!(matches!(grant, Err(UoaCalError::TokenExchange(_))));
}

#[tokio::test]
async fn authorization_code_grant_returns_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code-123"))
        .and(body_string_contains("code_verifier=verifier-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id_token": "id",
            "access_token": "access",
            "refresh_token": "refresh-1",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider =
        CognitoIdentityProvider::new(support::identity_config(&server), &HttpConfig::default())
            .unwrap();
    let refresh = provider.refresh_token_from_code("verifier-1", CALLBACK_CODE).await.unwrap();

    assert_eq!(refresh, "refresh-1");
}

#[tokio::test]
async fn refresh_grant_returns_token_pair() {
    let server = MockServer::start().await;
    let id_token = support::id_token_with(&json!({ "name": "Alice" }));
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id_token": id_token,
            "access_token": "access-1",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let provider =
        CognitoIdentityProvider::new(support::identity_config(&server), &HttpConfig::default())
            .unwrap();
    let tokens = provider.tokens_from_refresh_token("refresh-1").await.unwrap();

    assert_eq!(tokens.id_token, id_token);
    assert_eq!(tokens.access_token, "access-1");
}

#[tokio::test]
async fn refresh_grant_rejects_non_bearer_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id_token": "id",
            "access_token": "access",
            "expires_in": 3600,
            "token_type": "MAC"
        })))
        .mount(&server)
        .await;

    let provider =
        CognitoIdentityProvider::new(support::identity_config(&server), &HttpConfig::default())
            .unwrap();
    let err = provider.tokens_from_refresh_token("refresh-1").await.unwrap_err();

    assert!(matches!(err, UoaCalError::TokenExchange(_)));
}

#[tokio::test]
async fn rejected_grants_are_token_exchange_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_grant" })),
        )
        .mount(&server)
        .await;

    let provider =
        CognitoIdentityProvider::new(support::identity_config(&server), &HttpConfig::default())
            .unwrap();

    let refresh = provider.tokens_from_refresh_token("expired").await.unwrap_err();
    let code = provider.refresh_token_from_code("verifier", "used-code").await.unwrap_err();

    assert!(matches!(refresh, UoaCalError::TokenExchange(_)));
    assert!(matches!(code, UoaCalError::TokenExchange(_)));
}
