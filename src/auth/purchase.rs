//! The receipt triple identifying one purchase at the store.

// self
use crate::{
	_prelude::*,
	auth::{PackageName, ProductId, PurchaseToken},
};

/// Identifies exactly one purchase event at the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
	/// Package the product was sold in.
	pub package_name: PackageName,
	/// Product or subscription SKU.
	pub product_id: ProductId,
	/// Token the device received for the purchase.
	pub purchase_token: PurchaseToken,
}
impl PurchaseRecord {
	/// Creates a record from already validated identifiers.
	pub fn new(
		package_name: PackageName,
		product_id: ProductId,
		purchase_token: PurchaseToken,
	) -> Self {
		Self { package_name, product_id, purchase_token }
	}

	/// Parses the `INAPP_PURCHASE_DATA` JSON the billing client hands to the app.
	///
	/// Only `packageName`, `productId` and `purchaseToken` are read; the other fields
	/// (`orderId`, `purchaseTime`, ...) are ignored.
	pub fn from_purchase_data(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn purchase_data_keeps_the_receipt_triple() {
		let record = PurchaseRecord::from_purchase_data(
			r#"{
				"orderId": "GPA.1234-5678-9012-34567",
				"packageName": "com.app",
				"productId": "sku1",
				"purchaseTime": 1345678900000,
				"purchaseState": 0,
				"purchaseToken": "ptok"
			}"#,
		)
		.expect("Purchase data fixture should parse.");

		assert_eq!(record.package_name.as_ref(), "com.app");
		assert_eq!(record.product_id.as_ref(), "sku1");
		assert_eq!(record.purchase_token.as_ref(), "ptok");
	}

	#[test]
	fn purchase_data_rejects_blank_identifiers() {
		assert!(
			PurchaseRecord::from_purchase_data(
				r#"{"packageName":"com.app","productId":"","purchaseToken":"ptok"}"#
			)
			.is_err()
		);
		assert!(PurchaseRecord::from_purchase_data(r#"{"packageName":"com.app"}"#).is_err());
		assert!(
			PurchaseRecord::from_purchase_data(
				r#"{"packageName":"com.app","productId":"..","purchaseToken":"ptok"}"#
			)
			.is_err(),
			"Dot segments would drop the product from the lookup path."
		);
	}
}
