mod common;

// crates.io
use httpmock::prelude::*;
// self
use play_receipt::{
	_preludet::build_reqwest_test_validator,
	auth::Credentials,
	endpoint::StoreEndpoints,
	error::{AuthError, ConfigError, Error, TransportError},
	url::Url,
};

#[tokio::test]
async fn exchange_posts_refresh_grant_form_once() {
	let server = MockServer::start_async().await;
	let validator = common::validator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(common::TOKEN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("grant_type", "refresh_token")
				.form_urlencoded_tuple("client_id", common::CLIENT_ID)
				.form_urlencoded_tuple("client_secret", common::CLIENT_SECRET)
				.form_urlencoded_tuple("refresh_token", common::REFRESH_TOKEN);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"T\",\"token_type\":\"Bearer\",\"expires_in\":3600,\"refresh_token\":\"R\"}",
			);
		})
		.await;
	let token = validator
		.exchange_token(&common::credentials())
		.await
		.expect("Refresh grant should succeed against the mock.");

	assert_eq!(token.access_token.expose(), "T");
	assert_eq!(token.token_type, "Bearer");
	assert_eq!(token.refresh_token.as_ref().map(|secret| secret.expose()), Some("R"));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn exchange_ignores_stale_access_token_and_store_keys() {
	let server = MockServer::start_async().await;
	let validator = common::validator(&server);
	let mock = common::mock_token_success(&server, "fresh").await;
	let mut credentials = common::credentials().with_store_keys("sandbox-key", "live-key");

	credentials.access_token = Some("stale".into());

	let token =
		validator.exchange_token(&credentials).await.expect("Refresh grant should succeed.");

	assert_eq!(token.access_token.expose(), "fresh");

	mock.assert_async().await;
}

#[tokio::test]
async fn rejected_grant_surfaces_oauth_error() {
	let server = MockServer::start_async().await;
	let validator = common::validator(&server);
	let mock = common::mock_token_rejected(&server).await;
	let err = validator
		.exchange_token(&common::credentials())
		.await
		.expect_err("A 400 from the token endpoint must fail the exchange.");

	assert_eq!(err.http_status(), Some(400));

	match err {
		Error::Auth(AuthError::Rejected { error, description, .. }) => {
			assert_eq!(error, "invalid_grant");
			assert_eq!(description.as_deref(), Some("Bad Request"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn server_error_keeps_status_and_retry_hint() {
	let server = MockServer::start_async().await;
	let validator = common::validator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(common::TOKEN_PATH);
			then.status(503).header("retry-after", "30").body("upstream unavailable");
		})
		.await;
	let err = validator
		.exchange_token(&common::credentials())
		.await
		.expect_err("A 503 from the token endpoint must fail the exchange.");

	match err {
		Error::Auth(AuthError::Status { status, retry_after, body }) => {
			assert_eq!(status, 503);
			assert_eq!(retry_after.map(|hint| hint.whole_seconds()), Some(30));
			assert_eq!(body, "upstream unavailable");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn token_without_expiry_is_rejected() {
	let server = MockServer::start_async().await;
	let validator = common::validator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(common::TOKEN_PATH);
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"T\",\"token_type\":\"Bearer\"}");
		})
		.await;
	let err = validator
		.exchange_token(&common::credentials())
		.await
		.expect_err("Missing expires_in must fail the exchange.");

	assert!(matches!(err, Error::Auth(AuthError::MissingExpiresIn)));

	mock.assert_async().await;
}

#[tokio::test]
async fn empty_refresh_token_never_reaches_the_network() {
	let server = MockServer::start_async().await;
	let validator = common::validator(&server);
	let mock = common::mock_token_success(&server, "T").await;
	let err = validator
		.exchange_token(&Credentials::new(common::CLIENT_ID, common::CLIENT_SECRET, ""))
		.await
		.expect_err("Empty refresh token must fail locally.");

	assert!(matches!(
		err,
		Error::Config(ConfigError::MissingCredential { field: "refresh_token" })
	));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn refused_connection_surfaces_as_auth_transport_error() {
	let validator = build_reqwest_test_validator(
		StoreEndpoints::builder()
			.token_endpoint(
				Url::parse("https://127.0.0.1:1/o/oauth2/token")
					.expect("Closed-port endpoint should parse."),
			)
			.build()
			.expect("Closed-port endpoints should validate."),
	);
	let err = validator
		.exchange_token(&common::credentials())
		.await
		.expect_err("A closed port must fail the exchange.");

	assert!(matches!(err, Error::Auth(AuthError::Transport(TransportError::Network { .. }))));
	assert_eq!(err.http_status(), None);
}
