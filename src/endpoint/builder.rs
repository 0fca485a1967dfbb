// self
use crate::{_prelude::*, endpoint::StoreEndpoints};

/// Errors raised while constructing or validating endpoint sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum EndpointError {
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// The publisher endpoint must accept appended path segments.
	#[error("The publisher endpoint cannot be used as a base URL: {url}.")]
	CannotBeABase {
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Endpoints must not carry a query or fragment; lookups append their own query.
	#[error("The {endpoint} endpoint must not carry a query or fragment: {url}.")]
	UnexpectedQuery {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`StoreEndpoints`] values.
#[derive(Debug)]
pub struct StoreEndpointsBuilder {
	/// Token endpoint receiving the refresh-token grant.
	pub token_endpoint: Url,
	/// Android Publisher base URL.
	pub publisher_endpoint: Url,
}
impl StoreEndpointsBuilder {
	/// Creates a builder seeded with the Google Play endpoints.
	pub fn new() -> Self {
		let StoreEndpoints { token, publisher } = StoreEndpoints::google_play();

		Self { token_endpoint: token, publisher_endpoint: publisher }
	}

	/// Overrides the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = url;

		self
	}

	/// Overrides the Android Publisher base URL.
	pub fn publisher_endpoint(mut self, url: Url) -> Self {
		self.publisher_endpoint = url;

		self
	}

	/// Consumes the builder and validates the resulting endpoint set.
	pub fn build(self) -> Result<StoreEndpoints, EndpointError> {
		let endpoints =
			StoreEndpoints { token: self.token_endpoint, publisher: self.publisher_endpoint };

		endpoints.validate()?;

		Ok(endpoints)
	}
}
impl Default for StoreEndpointsBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl StoreEndpoints {
	/// Validates invariants for the endpoint set.
	pub fn validate(&self) -> Result<(), EndpointError> {
		validate_endpoint("token", &self.token)?;
		validate_endpoint("publisher", &self.publisher)?;

		if self.publisher.cannot_be_a_base() {
			return Err(EndpointError::CannotBeABase { url: self.publisher.to_string() });
		}

		Ok(())
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), EndpointError> {
	if url.scheme() != "https" {
		return Err(EndpointError::InsecureEndpoint { endpoint: name, url: url.to_string() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(EndpointError::UnexpectedQuery { endpoint: name, url: url.to_string() });
	}

	Ok(())
}
