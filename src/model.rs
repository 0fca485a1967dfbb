//! Purchase status shapes returned by the Android Publisher API.
//!
//! Every enumerated field is a closed upstream set carried with its numeric wire value, and
//! every shape keeps unmodeled fields in an `additional` map, so a status re-serializes to the
//! JSON the store sent.

pub mod int64;
pub mod product;
pub mod subscription;

pub use int64::*;
pub use product::*;
pub use subscription::*;

// crates.io
use serde_repr::{Deserialize_repr, Serialize_repr};
// self
use crate::_prelude::*;

/// Unmodeled fields keyed by their upstream (camelCase) names.
pub type AdditionalFields = serde_json::Map<String, serde_json::Value>;

/// Type of a purchase made outside the standard in-app billing flow.
///
/// Shared by products and subscriptions; only products report [`PurchaseType::Rewarded`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PurchaseType {
	/// Purchased from a license testing account.
	Test = 0,
	/// Purchased using a promo code.
	Promo = 1,
	/// Granted after watching a video ad.
	Rewarded = 2,
}

pub(crate) fn millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}
