//! `purchases.subscriptions` resource.

// crates.io
use serde_repr::{Deserialize_repr, Serialize_repr};
// self
use crate::{
	_prelude::*,
	model::{AdditionalFields, Int64Value, PurchaseType, millis_to_datetime},
};

/// Status of a recurring subscription purchase.
///
/// <https://developers.google.com/android-publisher/api-ref/purchases/subscriptions#resource>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchaseStatus {
	/// Resource kind, `androidpublisher#subscriptionPurchase`.
	pub kind: String,
	/// Time the subscription was granted, in milliseconds since the epoch.
	pub start_time_millis: Int64Value,
	/// Time the subscription will expire, in milliseconds since the epoch.
	pub expiry_time_millis: Int64Value,
	/// Whether the subscription renews automatically at its current expiry time.
	pub auto_renewing: bool,
	/// ISO 4217 currency code of the subscription price.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub price_currency_code: Option<String>,
	/// Price in micro-units (1,000,000 micro-units per currency unit).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub price_amount_micros: Option<Int64Value>,
	/// ISO 3166-1 alpha-2 billing country at the time the subscription was granted.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	/// Developer-specified supplemental information about the order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub developer_payload: Option<String>,
	/// Payment state; absent for canceled or expired subscriptions.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payment_state: Option<PaymentState>,
	/// Why the subscription was canceled or is not auto-renewing.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cancel_reason: Option<CancelReason>,
	/// Time the user canceled, in milliseconds since the epoch.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_cancellation_time_millis: Option<Int64Value>,
	/// Order id of the latest recurring order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order_id: Option<String>,
	/// Purchase token of the subscription this one replaced.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub linked_purchase_token: Option<String>,
	/// Only set when the purchase did not go through the standard billing flow.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub purchase_type: Option<PurchaseType>,
	/// Fields the store returned beyond the ones above.
	#[serde(flatten)]
	pub additional: AdditionalFields,
}
impl SubscriptionPurchaseStatus {
	/// Start time as a UTC instant, when representable.
	pub fn start_time(&self) -> Option<OffsetDateTime> {
		self.start_time_millis.as_i64().and_then(millis_to_datetime)
	}

	/// Expiry time as a UTC instant, when representable.
	pub fn expiry_time(&self) -> Option<OffsetDateTime> {
		self.expiry_time_millis.as_i64().and_then(millis_to_datetime)
	}

	/// User cancellation time as a UTC instant, when present and representable.
	pub fn user_cancellation_time(&self) -> Option<OffsetDateTime> {
		self.user_cancellation_time_millis.as_ref()?.as_i64().and_then(millis_to_datetime)
	}

	/// Returns `true` when the expiry time is at or before `instant`.
	///
	/// An unreadable expiry time counts as expired.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expiry_time().is_none_or(|expiry| expiry <= instant)
	}

	/// Returns `true` for purchases made from a license testing account.
	pub fn is_test_purchase(&self) -> bool {
		self.purchase_type == Some(PurchaseType::Test)
	}
}

/// Payment state of a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PaymentState {
	/// Payment pending.
	Pending = 0,
	/// Payment received.
	Received = 1,
	/// Free trial.
	FreeTrial = 2,
	/// Pending deferred upgrade or downgrade.
	PendingDeferred = 3,
}

/// Reason a subscription was canceled or stopped renewing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CancelReason {
	/// Canceled by the user; valid until expiry.
	User = 0,
	/// Canceled by the system, e.g. a billing problem.
	System = 1,
	/// Replaced with a new subscription.
	Replaced = 2,
	/// Canceled by the developer.
	Developer = 3,
}
