//! Fixtures shared by the integration suites.

#![allow(dead_code)]

// crates.io
use httpmock::{Mock, prelude::*};
// self
use play_receipt::{
	_preludet::*,
	auth::{Credentials, PackageName, ProductId, PurchaseRecord, PurchaseToken},
	endpoint::StoreEndpoints,
};

pub const CLIENT_ID: &str = "client-play";
pub const CLIENT_SECRET: &str = "secret-play";
pub const REFRESH_TOKEN: &str = "1/refresh-play";
pub const TOKEN_PATH: &str = "/o/oauth2/token";
pub const PUBLISHER_PATH: &str = "/androidpublisher/v2";

pub fn endpoints(server: &MockServer) -> StoreEndpoints {
	StoreEndpoints::builder()
		.token_endpoint(
			Url::parse(&server.url(TOKEN_PATH)).expect("Mock token endpoint should parse."),
		)
		.publisher_endpoint(
			Url::parse(&server.url(PUBLISHER_PATH)).expect("Mock publisher endpoint should parse."),
		)
		.build()
		.expect("Mock endpoints should validate.")
}

/// Builds a validator whose transport trusts the mock server's self-signed certificate.
pub fn validator(server: &MockServer) -> ReqwestTestValidator {
	build_reqwest_test_validator(endpoints(server))
}

pub fn credentials() -> Credentials {
	Credentials::new(CLIENT_ID, CLIENT_SECRET, REFRESH_TOKEN)
}

pub fn purchase() -> PurchaseRecord {
	PurchaseRecord::new(
		PackageName::new("com.app").expect("Package fixture should be valid."),
		ProductId::new("sku1").expect("Product fixture should be valid."),
		PurchaseToken::new("ptok").expect("Token fixture should be valid."),
	)
}

pub fn lookup_path(collection: &str) -> String {
	format!("{PUBLISHER_PATH}/applications/com.app/purchases/{collection}/sku1/tokens/ptok")
}

/// Mocks a successful refresh grant that mints `access_token`.
pub async fn mock_token_success<'a>(server: &'a MockServer, access_token: &str) -> Mock<'a> {
	let body = format!(
		"{{\"access_token\":\"{access_token}\",\"token_type\":\"Bearer\",\"expires_in\":3600,\"refresh_token\":\"R\"}}"
	);

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").body(body);
		})
		.await
}

/// Mocks a token endpoint that rejects the refresh grant.
pub async fn mock_token_rejected(server: &MockServer) -> Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\",\"error_description\":\"Bad Request\"}");
		})
		.await
}
