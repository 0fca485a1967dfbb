//! Access token returned by the refresh-token grant.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Short-lived bearer credential produced once per validation call.
///
/// The token is handed to the purchase lookup and then dropped; nothing caches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken {
	/// Access token appended to the lookup URL.
	pub access_token: TokenSecret,
	/// Token type reported by the endpoint (Google answers `Bearer`).
	pub token_type: String,
	/// Lifetime reported by the endpoint.
	pub expires_in: Duration,
	/// Refresh token, when the endpoint chose to return one.
	pub refresh_token: Option<TokenSecret>,
}
impl AuthToken {
	/// Returns the expiry instant for a token issued at `issued_at`.
	///
	/// `None` when the reported lifetime runs past the representable date range.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		issued_at.checked_add(self.expires_in)
	}
}
