//! Encoding-preserving 64-bit integers.

// self
use crate::_prelude::*;

/// Integer field that keeps the JSON encoding the store used.
///
/// The Publisher API serializes int64 values as strings (`"1700000000000"`), while older
/// clients and fixtures use plain numbers. Both are accepted and written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Int64Value {
	/// Plain JSON number.
	Number(i64),
	/// Decimal string.
	Text(String),
}
impl Int64Value {
	/// Returns the numeric value, or `None` when the string form is not a decimal integer.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Int64Value::Number(value) => Some(*value),
			Int64Value::Text(value) => value.trim().parse().ok(),
		}
	}
}
impl From<i64> for Int64Value {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}
impl Display for Int64Value {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Int64Value::Number(value) => write!(f, "{value}"),
			Int64Value::Text(value) => f.write_str(value),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn both_encodings_round_trip_unchanged() {
		let number: Int64Value = serde_json::from_str("1700000000000").expect("Number should parse.");
		let text: Int64Value =
			serde_json::from_str("\"1700000000000\"").expect("String should parse.");

		assert_eq!(number.as_i64(), Some(1_700_000_000_000));
		assert_eq!(text.as_i64(), Some(1_700_000_000_000));
		assert_eq!(serde_json::to_string(&number).expect("Number should serialize."), "1700000000000");
		assert_eq!(
			serde_json::to_string(&text).expect("String should serialize."),
			"\"1700000000000\""
		);
	}

	#[test]
	fn non_numeric_text_is_kept_but_not_interpreted() {
		let value: Int64Value = serde_json::from_str("\"soon\"").expect("Any string is accepted.");

		assert_eq!(value.as_i64(), None);
		assert_eq!(value.to_string(), "soon");
		assert!(serde_json::from_str::<Int64Value>("true").is_err());
	}
}
