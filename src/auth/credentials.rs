//! Long-lived OAuth2 credentials owned by the caller.

// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// OAuth2 client credentials plus the refresh token used to mint access tokens.
///
/// Deserializes from the camelCase token map (`clientId`, `clientSecret`, `refreshToken`,
/// `accessToken`, `sandboxPkey`, `livePkey`; `sandboxKey` and `liveKey` are accepted too).
/// The exchange always derives a fresh access token, so [`access_token`](Self::access_token),
/// [`sandbox_key`](Self::sandbox_key) and [`live_key`](Self::live_key) are carried but never
/// read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
	/// OAuth2 client identifier.
	pub client_id: String,
	/// OAuth2 client secret.
	pub client_secret: TokenSecret,
	/// Long-lived refresh token.
	pub refresh_token: TokenSecret,
	/// Previously issued access token.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_token: Option<TokenSecret>,
	/// Key used for sandbox purchases.
	#[serde(
		default,
		rename = "sandboxPkey",
		alias = "sandboxKey",
		skip_serializing_if = "Option::is_none"
	)]
	pub sandbox_key: Option<TokenSecret>,
	/// Key used for live purchases.
	#[serde(
		default,
		rename = "livePkey",
		alias = "liveKey",
		skip_serializing_if = "Option::is_none"
	)]
	pub live_key: Option<TokenSecret>,
}
impl Credentials {
	/// Creates credentials from the three values the refresh grant needs.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<TokenSecret>,
		refresh_token: impl Into<TokenSecret>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			refresh_token: refresh_token.into(),
			access_token: None,
			sandbox_key: None,
			live_key: None,
		}
	}

	/// Attaches the sandbox and live keys.
	pub fn with_store_keys(
		mut self,
		sandbox_key: impl Into<TokenSecret>,
		live_key: impl Into<TokenSecret>,
	) -> Self {
		self.sandbox_key = Some(sandbox_key.into());
		self.live_key = Some(live_key.into());

		self
	}

	/// Checks that every field the refresh grant sends is non-empty.
	///
	/// Nothing else is checked locally; revoked or malformed values are reported by the token
	/// endpoint.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::MissingCredential { field: "client_id" });
		}
		if self.client_secret.is_empty() {
			return Err(ConfigError::MissingCredential { field: "client_secret" });
		}
		if self.refresh_token.is_empty() {
			return Err(ConfigError::MissingCredential { field: "refresh_token" });
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_map_json_deserializes() {
		let credentials: Credentials = serde_json::from_str(
			r#"{
				"clientId": "123.apps.googleusercontent.com",
				"clientSecret": "shh",
				"refreshToken": "1/refresh",
				"accessToken": "ya29.stale",
				"sandboxPkey": "sandbox",
				"livePkey": "live"
			}"#,
		)
		.expect("Token map fixture should deserialize.");

		assert_eq!(credentials.client_id, "123.apps.googleusercontent.com");
		assert_eq!(credentials.refresh_token.expose(), "1/refresh");
		assert_eq!(credentials.access_token.as_ref().map(TokenSecret::expose), Some("ya29.stale"));
		assert_eq!(credentials.sandbox_key.as_ref().map(TokenSecret::expose), Some("sandbox"));
		assert_eq!(credentials.live_key.as_ref().map(TokenSecret::expose), Some("live"));
		assert!(credentials.validate().is_ok());
	}

	#[test]
	fn key_aliases_are_accepted_and_written_back_canonically() {
		let credentials: Credentials = serde_json::from_str(
			r#"{"clientId":"id","clientSecret":"s","refreshToken":"r","sandboxKey":"sb","liveKey":"lv"}"#,
		)
		.expect("Aliased key names should deserialize.");
		let rendered = serde_json::to_value(&credentials).expect("Credentials should serialize.");

		assert_eq!(rendered["sandboxPkey"], "sb");
		assert_eq!(rendered["livePkey"], "lv");
		assert!(rendered.get("accessToken").is_none());
	}

	#[test]
	fn empty_fields_are_rejected_in_order() {
		let err = Credentials::new("", "", "").validate().expect_err("Empty id must fail.");

		assert!(matches!(err, ConfigError::MissingCredential { field: "client_id" }));

		let err = Credentials::new("id", "secret", "").validate().expect_err("Empty refresh must fail.");

		assert!(matches!(err, ConfigError::MissingCredential { field: "refresh_token" }));
	}

	#[test]
	fn debug_output_hides_secrets() {
		let credentials =
			Credentials::new("id", "client-secret", "refresh-secret").with_store_keys("sb", "lv");
		let rendered = format!("{credentials:?}");

		assert!(!rendered.contains("client-secret"));
		assert!(!rendered.contains("refresh-secret"));
		assert!(rendered.contains("id"));
	}
}
