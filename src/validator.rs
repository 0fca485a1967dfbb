//! Receipt validator facade.
//!
//! [`PlayValidator`] owns the transport, the transport error mapper and the endpoint set.
//! Every public operation is a short sequential pipeline: exchange the caller's refresh token
//! for an access token, then (for lookups) query the purchase collection with that token. No
//! state survives between calls.

mod lookup;
mod token;

// crates.io
use oauth2::{AsyncHttpClient, HttpRequest, HttpResponse};
// self
use crate::{
	_prelude::*,
	endpoint::StoreEndpoints,
	error::TransportError,
	http::{ResponseMetadata, ResponseMetadataSlot, StoreHttpClient},
	oauth::TransportErrorMapper,
	obs::{self, CallKind},
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Validator specialized for the crate's default reqwest transport stack.
pub type ReqwestValidator = PlayValidator<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Validates Google Play purchases against a configured endpoint set.
///
/// Cloning is cheap; clones share the transport and mapper.
#[derive(Clone)]
pub struct PlayValidator<C, M>
where
	C: ?Sized + StoreHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client wrapper used for every outbound store request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub transport_mapper: Arc<M>,
	/// Token and publisher endpoints.
	pub endpoints: StoreEndpoints,
}
impl<C, M> PlayValidator<C, M>
where
	C: ?Sized + StoreHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a validator that reuses the caller-provided transport + mapper pair.
	pub fn with_http_client(
		endpoints: StoreEndpoints,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self { http_client: http_client.into(), transport_mapper: mapper.into(), endpoints }
	}

	/// Sends `request` through a fresh metadata-tracking handle.
	///
	/// Non-2xx responses are returned as-is; only transport failures become errors.
	async fn dispatch(
		&self,
		call: CallKind,
		request: HttpRequest,
	) -> Result<(HttpResponse, Option<ResponseMetadata>), TransportError> {
		let slot = ResponseMetadataSlot::default();
		let handle = self.http_client.with_metadata(slot.clone());
		let outcome = handle.call(request).await;
		let meta = slot.take();

		match outcome {
			Ok(response) => Ok((response, meta)),
			Err(err) => Err(self.transport_mapper.map_transport_error(call, meta.as_ref(), err)),
		}
	}
}
#[cfg(feature = "reqwest")]
impl PlayValidator<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a validator with its own reqwest-backed transport.
	pub fn new(endpoints: StoreEndpoints) -> Self {
		Self::with_http_client(
			endpoints,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}

	/// Creates a validator that talks to the Google Play endpoints.
	pub fn google_play() -> Self {
		Self::new(StoreEndpoints::google_play())
	}
}
impl<C, M> Debug for PlayValidator<C, M>
where
	C: ?Sized + StoreHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PlayValidator").field("endpoints", &self.endpoints).finish()
	}
}

/// Records the final outcome of a call and emits a failure event when it failed.
fn finish<T>(kind: CallKind, result: Result<T>) -> Result<T> {
	obs::record_call_result(kind, &result);

	if let Err(err) = &result {
		obs::trace_failure(kind, err.http_status(), err);
	}

	result
}
