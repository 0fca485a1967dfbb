//! Store endpoint configuration.
//!
//! [`StoreEndpoints`] names the token endpoint and the Android Publisher base URL. The
//! defaults point at Google; the builder exists so deployments and tests can route the same
//! calls elsewhere.

/// Builder API for assembling endpoint sets.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, auth::PurchaseRecord, error::ConfigError};

/// Default OAuth2 token endpoint.
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/token";
/// Default Android Publisher base URL.
pub const GOOGLE_PUBLISHER_ENDPOINT: &str = "https://www.googleapis.com/androidpublisher/v2";

/// Purchase collection queried by a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PurchaseKind {
	/// One-time in-app products (`purchases/products`).
	Product,
	/// Recurring subscriptions (`purchases/subscriptions`).
	Subscription,
}
impl PurchaseKind {
	/// Returns the path segment naming the collection.
	pub const fn as_str(self) -> &'static str {
		match self {
			PurchaseKind::Product => "products",
			PurchaseKind::Subscription => "subscriptions",
		}
	}
}
impl Display for PurchaseKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Validated endpoint set used by every call.
///
/// Deserialization runs [`StoreEndpoints::validate`], so a config file cannot smuggle in an
/// insecure or query-carrying endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoreEndpoints {
	/// Token endpoint receiving the refresh-token grant.
	pub token: Url,
	/// Android Publisher base; lookups append `applications/...` to it.
	pub publisher: Url,
}
impl StoreEndpoints {
	/// Returns the Google Play endpoints.
	pub fn google_play() -> Self {
		Self {
			token: Url::parse(GOOGLE_TOKEN_ENDPOINT).expect("Default token endpoint is valid."),
			publisher: Url::parse(GOOGLE_PUBLISHER_ENDPOINT)
				.expect("Default publisher endpoint is valid."),
		}
	}

	/// Creates a builder seeded with the Google Play endpoints.
	pub fn builder() -> StoreEndpointsBuilder {
		StoreEndpointsBuilder::new()
	}

	/// Builds the lookup URL for `purchase`, without the access token.
	///
	/// Identifier segments are percent-encoded when they contain reserved characters. The
	/// endpoint set is validated first since its fields are public.
	pub fn purchase_url(
		&self,
		kind: PurchaseKind,
		purchase: &PurchaseRecord,
	) -> Result<Url, ConfigError> {
		self.validate()?;

		let mut url = self.publisher.clone();

		url.path_segments_mut()
			.map_err(|_| EndpointError::CannotBeABase { url: self.publisher.to_string() })?
			.pop_if_empty()
			.extend([
				"applications",
				purchase.package_name.as_ref(),
				"purchases",
				kind.as_str(),
				purchase.product_id.as_ref(),
				"tokens",
				purchase.purchase_token.as_ref(),
			]);

		Ok(url)
	}
}
impl Default for StoreEndpoints {
	fn default() -> Self {
		Self::google_play()
	}
}
impl<'de> Deserialize<'de> for StoreEndpoints {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		struct RawEndpoints {
			token: Url,
			publisher: Url,
		}

		let raw = RawEndpoints::deserialize(deserializer)?;

		StoreEndpoints::builder()
			.token_endpoint(raw.token)
			.publisher_endpoint(raw.publisher)
			.build()
			.map_err(serde::de::Error::custom)
	}
}
