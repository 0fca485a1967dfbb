//! Strongly typed identifiers for the receipt triple (package, product, purchase token).

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (package, product, purchase token).
		kind: &'static str,
	},
	/// The identifier is a `.` or `..` path segment, which URL building would swallow.
	#[error("{kind} identifier cannot be a dot segment.")]
	DotSegment {
		/// Kind of identifier (package, product, purchase token).
		kind: &'static str,
	},
	/// The identifier contains whitespace or control characters.
	#[error("{kind} identifier contains whitespace or control characters.")]
	InvalidCharacter {
		/// Kind of identifier (package, product, purchase token).
		kind: &'static str,
	},
}

def_id! { PackageName, "Android application package name, e.g. `com.example.app`.", "Package" }
def_id! { ProductId, "In-app product or subscription SKU.", "Product" }
def_id! { PurchaseToken, "Token handed to the device when the purchase was made.", "PurchaseToken" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view == "." || view == ".." {
		return Err(IdentifierError::DotSegment { kind });
	}
	if view.chars().any(|c| c.is_whitespace() || c.is_control()) {
		return Err(IdentifierError::InvalidCharacter { kind });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_blank_and_whitespace() {
		assert!(PackageName::new("").is_err());
		assert!(PackageName::new(" com.app").is_err(), "Leading whitespace must be rejected.");
		assert!(ProductId::new("sku\u{0007}").is_err(), "Control characters must be rejected.");
		assert!(PurchaseToken::new(format!("tok{}en", '\u{00A0}')).is_err());

		let package = PackageName::new("com.app").expect("Package fixture should be valid.");

		assert_eq!(package.as_ref(), "com.app");
		assert_eq!(format!("{package:?}"), "Package(com.app)");
	}

	#[test]
	fn dot_segments_are_rejected() {
		assert_eq!(
			ProductId::new("..").expect_err("`..` must be rejected."),
			IdentifierError::DotSegment { kind: "Product" }
		);
		assert_eq!(
			PurchaseToken::new(".").expect_err("`.` must be rejected."),
			IdentifierError::DotSegment { kind: "PurchaseToken" }
		);
		assert!(serde_json::from_str::<PackageName>("\"..\"").is_err());
		assert!(PurchaseToken::new("...").is_ok(), "Only exact dot segments are special.");
		assert!(ProductId::new("sku.v2").is_ok());
	}

	#[test]
	fn long_purchase_tokens_are_accepted() {
		let token = "a".repeat(512);

		PurchaseToken::new(&token).expect("Purchase tokens have no length cap.");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let product: ProductId =
			serde_json::from_str("\"sku1\"").expect("Product should deserialize successfully.");

		assert_eq!(product.as_ref(), "sku1");
		assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
		assert!(serde_json::from_str::<ProductId>("\"with space\"").is_err());
	}
}
