//! Product and subscription lookups against the Android Publisher API.
//!
//! Both validations share one pipeline: exchange the refresh token, then issue a single GET
//! to `{publisher}/applications/{package}/purchases/{collection}/{product}/tokens/{token}` with
//! the fresh token in the `access_token` query parameter. A failed exchange short-circuits the
//! pipeline, so no lookup is ever sent without a token.

// crates.io
use oauth2::{
	HttpRequest, HttpResponse,
	http::{Method, Request, header::ACCEPT},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{Credentials, PurchaseRecord, TokenSecret},
	endpoint::{PurchaseKind, StoreEndpoints},
	error::{ConfigError, LookupError},
	http::{ResponseMetadata, StoreHttpClient},
	model::{ProductPurchaseStatus, SubscriptionPurchaseStatus},
	oauth::TransportErrorMapper,
	obs::{self, CallKind, CallOutcome, CallSpan},
	validator::{self, PlayValidator},
};

/// Query parameter carrying the access token on lookups.
const ACCESS_TOKEN_PARAM: &str = "access_token";

impl<C, M> PlayValidator<C, M>
where
	C: ?Sized + StoreHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Validates a one-time in-app product purchase.
	///
	/// `sandbox` is accepted for call-site compatibility and has no effect; the live
	/// publisher endpoint is always used.
	pub async fn validate_product(
		&self,
		credentials: &Credentials,
		purchase: &PurchaseRecord,
		sandbox: Option<bool>,
	) -> Result<ProductPurchaseStatus> {
		let _ = sandbox;

		self.validate(PurchaseKind::Product, "validate_product", credentials, purchase).await
	}

	/// Validates a recurring subscription purchase.
	///
	/// `sandbox` is accepted for call-site compatibility and has no effect; the live
	/// publisher endpoint is always used.
	pub async fn validate_subscription(
		&self,
		credentials: &Credentials,
		purchase: &PurchaseRecord,
		sandbox: Option<bool>,
	) -> Result<SubscriptionPurchaseStatus> {
		let _ = sandbox;

		self.validate(PurchaseKind::Subscription, "validate_subscription", credentials, purchase)
			.await
	}

	async fn validate<T>(
		&self,
		kind: PurchaseKind,
		stage: &'static str,
		credentials: &Credentials,
		purchase: &PurchaseRecord,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let token = self.exchange_token(credentials).await?;
		let call = call_kind(kind);
		let span = CallSpan::new(call, stage);

		obs::record_call_outcome(call, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = lookup_request(&self.endpoints, kind, purchase, &token.access_token)
					.map_err(Error::from)?;
				let (response, meta) = self
					.dispatch(call, request)
					.await
					.map_err(|err| Error::from(LookupError::Transport(err)))?;

				parse_lookup_response(response, meta.as_ref()).map_err(Error::from)
			})
			.await;

		validator::finish(call, result)
	}
}

const fn call_kind(kind: PurchaseKind) -> CallKind {
	match kind {
		PurchaseKind::Product => CallKind::ProductLookup,
		PurchaseKind::Subscription => CallKind::SubscriptionLookup,
	}
}

fn lookup_request(
	endpoints: &StoreEndpoints,
	kind: PurchaseKind,
	purchase: &PurchaseRecord,
	access_token: &TokenSecret,
) -> Result<HttpRequest, ConfigError> {
	let mut url = endpoints.purchase_url(kind, purchase)?;

	url.query_pairs_mut().append_pair(ACCESS_TOKEN_PARAM, access_token.expose());

	Request::builder()
		.method(Method::GET)
		.uri(url.as_str())
		.header(ACCEPT, "application/json")
		.body(Vec::new())
		.map_err(ConfigError::from)
}

/// Google API error envelope: `{"error": {"code": 404, "message": "..."}}`.
#[derive(Deserialize)]
struct ApiErrorEnvelope {
	error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
	message: Option<String>,
}

fn parse_lookup_response<T>(
	response: HttpResponse,
	meta: Option<&ResponseMetadata>,
) -> Result<T, LookupError>
where
	T: DeserializeOwned,
{
	let status = response.status();
	let body = response.body();

	if !status.is_success() {
		let message = serde_json::from_slice::<ApiErrorEnvelope>(body)
			.ok()
			.and_then(|envelope| envelope.error.message)
			.filter(|message| !message.is_empty());

		return Err(LookupError::Status {
			status: status.as_u16(),
			message,
			retry_after: meta.and_then(|value| value.retry_after),
			body: String::from_utf8_lossy(body).into_owned(),
		});
	}

	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| LookupError::Parse { source, status: Some(status.as_u16()) })
}
