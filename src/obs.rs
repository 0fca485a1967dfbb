//! Optional observability helpers for validation calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `play_receipt.call` with the `call` and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `play_receipt_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.
//!
//! Neither records credentials, tokens, or purchase identifiers.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outbound calls performed by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Refresh-token exchange against the token endpoint.
	TokenExchange,
	/// One-time product lookup.
	ProductLookup,
	/// Subscription lookup.
	SubscriptionLookup,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::TokenExchange => "token_exchange",
			CallKind::ProductLookup => "product_lookup",
			CallKind::SubscriptionLookup => "subscription_lookup",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a validator call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
