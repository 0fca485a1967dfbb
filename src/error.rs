//! Validator-level error types shared by the token exchange and the purchase lookups.

// self
use crate::{_prelude::*, endpoint::EndpointError, obs::CallKind};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical validation error exposed by public APIs.
///
/// Every variant is fatal for the call that produced it; nothing is retried.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or input problem detected before any network call.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The OAuth2 token exchange failed.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// The purchase lookup failed after a token was obtained.
	#[error(transparent)]
	Lookup(#[from] LookupError),
}
impl Error {
	/// Returns the HTTP status reported by the failing endpoint, when one was received.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::Config(_) => None,
			Self::Auth(e) => e.http_status(),
			Self::Lookup(e) => e.http_status(),
		}
	}
}

/// Configuration and validation failures raised before contacting the store.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A required credential field is empty.
	#[error("Credential field `{field}` must not be empty.")]
	MissingCredential {
		/// Name of the empty field.
		field: &'static str,
	},
	/// The configured endpoint set failed validation.
	#[error(transparent)]
	Endpoint(#[from] EndpointError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token endpoint failures.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// The token endpoint could not be reached.
	#[error(transparent)]
	Transport(TransportError),
	/// Token endpoint answered with an OAuth error payload (`invalid_grant`, `invalid_client`, ...).
	#[error("Token endpoint rejected the refresh grant with `{error}` (HTTP {status}).")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// OAuth `error` field.
		error: String,
		/// OAuth `error_description` field, if supplied.
		description: Option<String>,
	},
	/// Token endpoint answered with a non-success status and no recognizable OAuth error.
	#[error("Token endpoint returned HTTP {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
		/// Raw response body.
		body: String,
	},
	/// Token endpoint responded with malformed JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint response omitted `expires_in`.
	#[error("Token endpoint response is missing expires_in.")]
	MissingExpiresIn,
	/// Token endpoint returned a non-positive `expires_in`.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
}
impl AuthError {
	/// Returns the HTTP status associated with the failure, if any.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::Rejected { status, .. } | Self::Status { status, .. } => Some(*status),
			Self::Parse { status, .. } => *status,
			Self::Transport(_) | Self::MissingExpiresIn | Self::NonPositiveExpiresIn => None,
		}
	}
}

/// Purchase lookup endpoint failures.
#[derive(Debug, ThisError)]
pub enum LookupError {
	/// The lookup endpoint could not be reached.
	#[error(transparent)]
	Transport(TransportError),
	/// Lookup endpoint answered with a non-success status (unknown token, bad product, ...).
	#[error("Purchase lookup returned HTTP {status}{}.", reason_suffix(.message))]
	Status {
		/// HTTP status code.
		status: u16,
		/// Google API `error.message`, when the body carries one.
		message: Option<String>,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
		/// Raw response body.
		body: String,
	},
	/// Lookup endpoint responded with a body that does not match the purchase shape.
	#[error("Purchase lookup returned malformed JSON.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}
impl LookupError {
	/// Returns the HTTP status associated with the failure, if any.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Parse { status, .. } => *status,
			Self::Transport(_) => None,
		}
	}
}

fn reason_suffix(message: &Option<String>) -> String {
	match message {
		Some(message) => format!(": {}", message.trim_end_matches('.')),
		None => String::new(),
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the store.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the store.")]
	Io(#[from] std::io::Error),
	/// The transport rejected the outgoing request.
	#[error("HTTP request could not be dispatched.")]
	Http(#[from] oauth2::http::Error),
	/// The transport could not build the request for `call`.
	#[error("The {call} request could not be built.")]
	InvalidRequest {
		/// Call whose request was malformed.
		call: CallKind,
		/// Transport-specific builder failure.
		#[source]
		source: BoxError,
	},
	/// The request for `call` timed out.
	#[error("The {call} request timed out.")]
	Timeout {
		/// Call that timed out.
		call: CallKind,
		/// HTTP status observed before the timeout, if any.
		status: Option<u16>,
	},
	/// Transport failure without a structured source.
	#[error("HTTP client error occurred while calling the store: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
