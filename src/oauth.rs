//! OAuth2 refresh-token exchange plumbing and transport error mapping.
//!
//! The token endpoint is called with a plain form-encoded POST and its body is parsed into an
//! [`AuthToken`]. The `oauth2` crate supplies the transport contract ([`AsyncHttpClient`]) and
//! the standard OAuth error payload used to recognize rejected grants.
//!
//! [`AsyncHttpClient`]: oauth2::AsyncHttpClient

pub use oauth2;

// crates.io
use oauth2::{
	HttpClientError, HttpRequest, HttpResponse,
	basic::BasicErrorResponse,
	http::{
		Method, Request,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{AuthToken, Credentials, TokenSecret},
	error::{AuthError, ConfigError, TransportError},
	http::ResponseMetadata,
	obs::CallKind,
};

/// Grant type sent to the token endpoint.
pub const REFRESH_TOKEN_GRANT: &str = "refresh_token";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Maps HTTP transport failures into [`TransportError`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport while performing `call`.
	fn map_transport_error(
		&self,
		call: CallKind,
		metadata: Option<&ResponseMetadata>,
		error: HttpClientError<E>,
	) -> TransportError;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(
		&self,
		call: CallKind,
		meta: Option<&ResponseMetadata>,
		err: HttpClientError<ReqwestError>,
	) -> TransportError {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(call, meta, *inner),
			other => map_http_client_error(other),
		}
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(
	call: CallKind,
	meta: Option<&ResponseMetadata>,
	err: ReqwestError,
) -> TransportError {
	if err.is_builder() {
		return TransportError::InvalidRequest { call, source: Box::new(err) };
	}
	if err.is_timeout() {
		let status =
			meta.and_then(|value| value.status).or_else(|| err.status().map(|code| code.as_u16()));

		return TransportError::Timeout { call, status };
	}

	TransportError::network(err)
}

/// Structural mapping shared by mappers that have no transport-specific knowledge.
pub fn map_http_client_error<E>(err: HttpClientError<E>) -> TransportError
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner),
		HttpClientError::Http(inner) => TransportError::Http(inner),
		HttpClientError::Io(inner) => TransportError::Io(inner),
		HttpClientError::Other(message) => TransportError::Other { message },
		other => TransportError::Other { message: format!("{other:?}") },
	}
}

#[derive(Deserialize)]
struct TokenResponseModel {
	access_token: String,
	token_type: String,
	expires_in: Option<i64>,
	refresh_token: Option<String>,
}

/// Builds the `grant_type=refresh_token` POST for the token endpoint.
pub(crate) fn refresh_token_request(
	token_url: &Url,
	credentials: &Credentials,
) -> Result<HttpRequest, ConfigError> {
	let body = Serializer::new(String::new())
		.append_pair("grant_type", REFRESH_TOKEN_GRANT)
		.append_pair("client_id", &credentials.client_id)
		.append_pair("client_secret", credentials.client_secret.expose())
		.append_pair("refresh_token", credentials.refresh_token.expose())
		.finish();

	Request::builder()
		.method(Method::POST)
		.uri(token_url.as_str())
		.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
		.header(ACCEPT, JSON_CONTENT_TYPE)
		.body(body.into_bytes())
		.map_err(ConfigError::from)
}

/// Turns a token endpoint response into an [`AuthToken`].
pub(crate) fn map_token_response(
	response: HttpResponse,
	meta: Option<&ResponseMetadata>,
) -> Result<AuthToken, AuthError> {
	let status = response.status();
	let body = response.body();

	if !status.is_success() {
		return Err(map_token_error_body(status.as_u16(), body, meta));
	}

	let mut de = serde_json::Deserializer::from_slice(body);
	let model: TokenResponseModel = serde_path_to_error::deserialize(&mut de)
		.map_err(|source| AuthError::Parse { source, status: Some(status.as_u16()) })?;
	let expires_in = model.expires_in.ok_or(AuthError::MissingExpiresIn)?;

	if expires_in <= 0 {
		return Err(AuthError::NonPositiveExpiresIn);
	}

	Ok(AuthToken {
		access_token: TokenSecret::new(model.access_token),
		token_type: model.token_type,
		expires_in: Duration::seconds(expires_in),
		refresh_token: model.refresh_token.map(TokenSecret::new),
	})
}

fn map_token_error_body(status: u16, body: &[u8], meta: Option<&ResponseMetadata>) -> AuthError {
	match serde_json::from_slice::<BasicErrorResponse>(body) {
		Ok(response) => AuthError::Rejected {
			status,
			error: response.error().as_ref().to_string(),
			description: response.error_description().cloned(),
		},
		Err(_) => AuthError::Status {
			status,
			retry_after: meta.and_then(|value| value.retry_after),
			body: String::from_utf8_lossy(body).into_owned(),
		},
	}
}
