//! Validates a one-time product purchase end to end against a local mock of the Google token
//! and Android Publisher endpoints.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use play_receipt::{
	auth::{Credentials, PurchaseRecord},
	endpoint::StoreEndpoints,
	http::ReqwestHttpClient,
	oauth::ReqwestTransportErrorMapper,
	reqwest::Client,
	validator::PlayValidator,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/o/oauth2/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let lookup_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/androidpublisher/v2/applications/com.example.game/purchases/products/gems_100/tokens/demo-token")
				.query_param("access_token", "demo-access");
			then.status(200).header("content-type", "application/json").body(
				"{\"kind\":\"androidpublisher#productPurchase\",\"purchaseTimeMillis\":\"1700000000000\",\"purchaseState\":0,\"consumptionState\":0,\"developerPayload\":\"\",\"orderId\":\"GPA.0000-1111-2222-33333\"}",
			);
		})
		.await;
	let endpoints = StoreEndpoints::builder()
		.token_endpoint(Url::parse(&server.url("/o/oauth2/token"))?)
		.publisher_endpoint(Url::parse(&server.url("/androidpublisher/v2"))?)
		.build()?;
	let http_client = ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let validator = <PlayValidator<ReqwestHttpClient, ReqwestTransportErrorMapper>>::with_http_client(
		endpoints,
		http_client,
		Arc::new(ReqwestTransportErrorMapper),
	);
	let credentials: Credentials = serde_json::from_str(
		r#"{"clientId":"demo-client","clientSecret":"demo-secret","refreshToken":"1/demo-refresh"}"#,
	)?;
	let purchase = PurchaseRecord::from_purchase_data(
		r#"{"orderId":"GPA.0000-1111-2222-33333","packageName":"com.example.game","productId":"gems_100","purchaseTime":1700000000000,"purchaseState":0,"purchaseToken":"demo-token"}"#,
	)?;
	let status = validator.validate_product(&credentials, &purchase, None).await?;

	println!(
		"Order {} purchased: {}, consumed: {}.",
		status.order_id.as_deref().unwrap_or("<none>"),
		status.is_purchased(),
		status.is_consumed()
	);

	token_mock.assert_async().await;
	lookup_mock.assert_async().await;

	Ok(())
}
