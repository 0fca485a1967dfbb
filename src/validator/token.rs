//! Refresh-token exchange against the token endpoint.

// self
use crate::{
	_prelude::*,
	auth::{AuthToken, Credentials},
	error::{AuthError, ConfigError},
	http::StoreHttpClient,
	oauth::{self, TransportErrorMapper},
	obs::{self, CallKind, CallOutcome, CallSpan},
	validator::{self, PlayValidator},
};

impl<C, M> PlayValidator<C, M>
where
	C: ?Sized + StoreHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Trades the caller's refresh token for a short-lived access token.
	///
	/// Sends exactly one `grant_type=refresh_token` POST. Invalid endpoints and empty
	/// credential fields fail locally without touching the network. `access_token`,
	/// `sandbox_key` and `live_key` are never sent. Nothing is cached; every call mints a new
	/// token.
	pub async fn exchange_token(&self, credentials: &Credentials) -> Result<AuthToken> {
		const KIND: CallKind = CallKind::TokenExchange;

		let span = CallSpan::new(KIND, "exchange_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				self.endpoints.validate().map_err(|err| Error::from(ConfigError::from(err)))?;
				credentials.validate().map_err(Error::from)?;

				let request = oauth::refresh_token_request(&self.endpoints.token, credentials)
					.map_err(Error::from)?;
				let (response, meta) = self
					.dispatch(KIND, request)
					.await
					.map_err(|err| Error::from(AuthError::Transport(err)))?;

				oauth::map_token_response(response, meta.as_ref()).map_err(Error::from)
			})
			.await;

		validator::finish(KIND, result)
	}
}
