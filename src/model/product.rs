//! `purchases.products` resource.

// crates.io
use serde_repr::{Deserialize_repr, Serialize_repr};
// self
use crate::{
	_prelude::*,
	model::{AdditionalFields, Int64Value, PurchaseType, millis_to_datetime},
};

/// Status of a one-time in-app product purchase.
///
/// <https://developers.google.com/android-publisher/api-ref/purchases/products#resource>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPurchaseStatus {
	/// Resource kind, `androidpublisher#productPurchase`.
	pub kind: String,
	/// Purchase time in milliseconds since the epoch.
	pub purchase_time_millis: Int64Value,
	/// Purchase state of the order.
	pub purchase_state: PurchaseState,
	/// Consumption state of the product.
	pub consumption_state: ConsumptionState,
	/// Developer-specified supplemental information about the order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub developer_payload: Option<String>,
	/// Order id associated with the purchase.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order_id: Option<String>,
	/// Only set when the purchase did not go through the standard billing flow.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub purchase_type: Option<PurchaseType>,
	/// Fields the store returned beyond the ones above.
	#[serde(flatten)]
	pub additional: AdditionalFields,
}
impl ProductPurchaseStatus {
	/// Returns `true` when the order is in the purchased state.
	pub fn is_purchased(&self) -> bool {
		self.purchase_state == PurchaseState::Purchased
	}

	/// Returns `true` when the product has been consumed.
	pub fn is_consumed(&self) -> bool {
		self.consumption_state == ConsumptionState::Consumed
	}

	/// Returns `true` for purchases made from a license testing account.
	pub fn is_test_purchase(&self) -> bool {
		self.purchase_type == Some(PurchaseType::Test)
	}

	/// Purchase time as a UTC instant, when representable.
	pub fn purchase_time(&self) -> Option<OffsetDateTime> {
		self.purchase_time_millis.as_i64().and_then(millis_to_datetime)
	}
}

/// Purchase state of a product order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PurchaseState {
	/// Purchased.
	Purchased = 0,
	/// Canceled.
	Canceled = 1,
	/// Pending (deferred payment).
	Pending = 2,
}

/// Consumption state of a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ConsumptionState {
	/// Yet to be consumed.
	NotConsumed = 0,
	/// Consumed.
	Consumed = 1,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn numeric_states_map_to_variants() {
		let status: ProductPurchaseStatus = serde_json::from_value(json!({
			"kind": "androidpublisher#productPurchase",
			"purchaseTimeMillis": "1700000000000",
			"purchaseState": 0,
			"consumptionState": 1,
			"developerPayload": "",
			"orderId": "GPA.1234"
		}))
		.expect("Product fixture should parse.");

		assert_eq!(status.purchase_state, PurchaseState::Purchased);
		assert_eq!(status.consumption_state, ConsumptionState::Consumed);
		assert!(status.is_purchased());
		assert!(status.is_consumed());
		assert!(!status.is_test_purchase());
		assert_eq!(status.purchase_type, None);
		assert_eq!(status.purchase_time(), Some(datetime!(2023-11-14 22:13:20 UTC)));
	}

	#[test]
	fn values_outside_the_upstream_sets_are_rejected() {
		let parsed = serde_json::from_value::<ProductPurchaseStatus>(json!({
			"kind": "androidpublisher#productPurchase",
			"purchaseTimeMillis": 0,
			"purchaseState": 7,
			"consumptionState": 0
		}));

		assert!(parsed.is_err());
	}

	#[test]
	fn unmodeled_fields_survive_reserialization() {
		let input = json!({
			"kind": "androidpublisher#productPurchase",
			"purchaseTimeMillis": "1700000000000",
			"purchaseState": 1,
			"consumptionState": 0,
			"purchaseType": 0,
			"acknowledgementState": 1,
			"regionCode": "NL"
		});
		let status: ProductPurchaseStatus =
			serde_json::from_value(input.clone()).expect("Product fixture should parse.");

		assert_eq!(status.purchase_type, Some(PurchaseType::Test));
		assert_eq!(status.additional.get("regionCode"), Some(&json!("NL")));
		assert_eq!(serde_json::to_value(&status).expect("Status should serialize."), input);
	}
}
