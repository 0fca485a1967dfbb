//! Google Play receipt validation: trade a refresh token for an access token, then fetch the
//! typed product or subscription purchase status in one async call.
//!
//! ```no_run
//! use play_receipt::{
//! 	auth::{Credentials, PurchaseRecord},
//! 	validator::PlayValidator,
//! };
//!
//! # async fn run() -> play_receipt::error::Result<()> {
//! let validator = PlayValidator::google_play();
//! let credentials = Credentials::new("client-id", "client-secret", "1/refresh-token");
//! let purchase = PurchaseRecord::from_purchase_data(
//! 	r#"{"packageName":"com.app","productId":"sku1","purchaseToken":"ptok"}"#,
//! )
//! .expect("Purchase data should parse.");
//! let status = validator.validate_product(&credentials, &purchase, None).await?;
//!
//! assert!(status.is_purchased());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod model;
pub mod oauth;
pub mod obs;
pub mod validator;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		endpoint::StoreEndpoints, http::ReqwestHttpClient, oauth::ReqwestTransportErrorMapper,
		validator::PlayValidator,
	};

	/// Validator type alias used by reqwest-backed tests.
	pub type ReqwestTestValidator = PlayValidator<ReqwestHttpClient, ReqwestTransportErrorMapper>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`PlayValidator`] that talks to `endpoints` through the insecure test
	/// transport.
	pub fn build_reqwest_test_validator(endpoints: StoreEndpoints) -> ReqwestTestValidator {
		PlayValidator::with_http_client(
			endpoints,
			test_reqwest_http_client(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
